use std::io::Read;

use anyhow::Result;
use chrono_tz::Tz;
use sunpanel_core::{AppError, Config, ReportError};
use sunpanel_weather::{find_city, ProviderPayload, WeatherReport};

/// Read raw input from the file at `path`, or stdin when no path is given.
fn read_input(path: Option<&str>) -> Result<String, AppError> {
    match path {
        Some(path) => {
            tracing::debug!("Reading report from {}", path);
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Parse a weather report.
///
/// Accepts either the dashboard's own report JSON or a raw provider
/// payload (anything carrying both `main` and `sys`), which is converted
/// first using `city` from the catalogue when it is known.
fn parse_report(input: &str, city: Option<&str>, tz: Tz) -> Result<WeatherReport, AppError> {
    if input.trim().is_empty() {
        return Err(ReportError::Empty.into());
    }

    let value: serde_json::Value =
        serde_json::from_str(input).map_err(|e| ReportError::Malformed(e.to_string()))?;

    if value.get("main").is_some() && value.get("sys").is_some() {
        tracing::debug!("Input looks like a provider payload");
        let payload = ProviderPayload::from_json(input)?;
        Ok(payload.into_report(city.and_then(find_city), tz)?)
    } else {
        Ok(WeatherReport::from_json(input)?)
    }
}

fn read_report(config: &Config) -> Result<WeatherReport> {
    let mut args = std::env::args().skip(1);
    let path = args.next();
    let city = args.next();

    let input = read_input(path.as_deref())?;
    let tz = config.display.tz().map_err(AppError::from)?;
    Ok(parse_report(&input, city.as_deref(), tz)?)
}

fn main() -> Result<()> {
    sunpanel_core::init()?;

    let report = match Config::load_validated().and_then(|(config, _)| read_report(&config)) {
        Ok(r) => r,
        Err(e) => {
            if let Some(app_err) = e.downcast_ref::<AppError>() {
                eprintln!("{}", app_err.user_message());
            }
            return Err(e);
        }
    };

    println!("SunPanel - Weather Presentation");
    if let Some(city) = &report.city {
        println!("  City:        {}", city);
    }
    match (report.condition(), report.background()) {
        (Some(description), Some(category)) => {
            println!("  Condition:   {}", description);
            println!("  Background:  {} ({})", category.key(), category.gradient());
        }
        _ => println!("  Background:  unchanged (no description)"),
    }
    if let Some(point) = report.compass() {
        println!("  Wind:        {}", point);
    }
    if let Some(sunrise) = &report.sunrise {
        println!("  Sunrise:     {}", sunrise);
    }
    if let Some(sunset) = &report.sunset {
        println!("  Sunset:      {}", sunset);
    }

    Ok(())
}
