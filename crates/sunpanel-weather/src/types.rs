use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use sunpanel_core::ReportError;

use crate::background::BackgroundCategory;
use crate::cities::City;
use crate::compass::CompassPoint;
use crate::time::format_time_in;

/// Geographic coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Weather report as served to the dashboard page.
///
/// Every field is optional: the page renders whatever is present and
/// skips the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feels_like: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f64>,
    /// Wind bearing in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_direction: Option<f64>,
    /// Visibility in kilometres
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
    /// Local sunrise, `HH:MM`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunrise: Option<String>,
    /// Local sunset, `HH:MM`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

impl WeatherReport {
    /// Parse a report from JSON.
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        if json.trim().is_empty() {
            return Err(ReportError::Empty);
        }
        serde_json::from_str(json).map_err(|e| ReportError::Malformed(e.to_string()))
    }

    /// Description, if present and non-empty.
    pub fn condition(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// Background category for this report. `None` when there is no
    /// description to classify.
    pub fn background(&self) -> Option<BackgroundCategory> {
        self.condition().map(BackgroundCategory::classify)
    }

    pub fn compass(&self) -> Option<CompassPoint> {
        self.wind_direction.map(CompassPoint::from_degrees)
    }
}

/// OpenWeatherMap "current weather" response, reduced to the fields the
/// dashboard uses.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub coord: Option<Coordinates>,
    pub main: ProviderMain,
    #[serde(default)]
    pub weather: Vec<ProviderCondition>,
    #[serde(default)]
    pub wind: ProviderWind,
    /// Metres
    #[serde(default)]
    pub visibility: Option<f64>,
    pub sys: ProviderSys,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderMain {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub pressure: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderCondition {
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderWind {
    #[serde(default)]
    pub speed: f64,
    #[serde(default)]
    pub deg: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSys {
    pub sunrise: i64,
    pub sunset: i64,
}

impl ProviderPayload {
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        if json.trim().is_empty() {
            return Err(ReportError::Empty);
        }
        serde_json::from_str(json).map_err(|e| ReportError::Malformed(e.to_string()))
    }

    /// Convert to the report served to the page.
    ///
    /// When `city` is given its name and coordinates take precedence over
    /// the payload's own. Times are rendered in `tz`.
    pub fn into_report(self, city: Option<&City>, tz: Tz) -> Result<WeatherReport, ReportError> {
        let condition = self
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| ReportError::Malformed("payload has no weather conditions".into()))?;

        let sunrise = format_time_in(self.sys.sunrise, tz)
            .ok_or(ReportError::TimestampOutOfRange(self.sys.sunrise))?;
        let sunset = format_time_in(self.sys.sunset, tz)
            .ok_or(ReportError::TimestampOutOfRange(self.sys.sunset))?;

        let (name, coordinates) = match city {
            Some(c) => (Some(c.name.to_string()), Some(c.coordinates())),
            None => (self.name, self.coord),
        };
        tracing::debug!(
            "Converted provider payload for {}",
            name.as_deref().unwrap_or("unknown location")
        );

        Ok(WeatherReport {
            city: name,
            temperature: Some(self.main.temp),
            feels_like: Some(self.main.feels_like),
            humidity: Some(self.main.humidity),
            pressure: Some(self.main.pressure),
            description: Some(title_case(&condition.description)),
            icon: Some(condition.icon),
            wind_speed: Some(self.wind.speed),
            wind_direction: Some(self.wind.deg.unwrap_or(0.0)),
            visibility: Some(self.visibility.unwrap_or(0.0) / 1000.0),
            sunrise: Some(sunrise),
            sunset: Some(sunset),
            coordinates,
        })
    }
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cities::find_city;
    use serde_json::json;

    fn payload() -> serde_json::Value {
        json!({
            "name": "Mumbai",
            "coord": { "lat": 19.01, "lon": 72.85 },
            "main": { "temp": 29.5, "feels_like": 33.1, "humidity": 78, "pressure": 1008 },
            "weather": [{ "description": "light intensity drizzle", "icon": "09d" }],
            "wind": { "speed": 4.6, "deg": 250 },
            "visibility": 6000,
            "sys": { "sunrise": 1_704_072_000, "sunset": 1_704_112_200 }
        })
    }

    #[test]
    fn test_report_all_fields_optional() {
        let report = WeatherReport::from_json("{}").unwrap();
        assert_eq!(report, WeatherReport::default());
        assert!(report.background().is_none());
        assert!(report.compass().is_none());
    }

    #[test]
    fn test_report_empty_input() {
        assert!(matches!(
            WeatherReport::from_json("  "),
            Err(ReportError::Empty)
        ));
    }

    #[test]
    fn test_report_malformed_input() {
        assert!(matches!(
            WeatherReport::from_json("{\"description\": 5}"),
            Err(ReportError::Malformed(_))
        ));
    }

    #[test]
    fn test_empty_description_has_no_background() {
        let report = WeatherReport {
            description: Some(String::new()),
            ..Default::default()
        };
        assert!(report.background().is_none());
    }

    #[test]
    fn test_report_background_and_compass() {
        let report = WeatherReport::from_json(
            &json!({ "description": "Scattered Clouds", "wind_direction": 95 }).to_string(),
        )
        .unwrap();
        assert_eq!(report.background(), Some(BackgroundCategory::Clouds));
        assert_eq!(report.compass(), Some(CompassPoint::E));
    }

    #[test]
    fn test_payload_to_report() {
        let payload = ProviderPayload::from_json(&payload().to_string()).unwrap();
        let report = payload.into_report(None, chrono_tz::Asia::Kolkata).unwrap();

        assert_eq!(report.city.as_deref(), Some("Mumbai"));
        assert_eq!(report.description.as_deref(), Some("Light Intensity Drizzle"));
        assert_eq!(report.icon.as_deref(), Some("09d"));
        assert_eq!(report.wind_direction, Some(250.0));
        assert_eq!(report.visibility, Some(6.0));
        // 2024-01-01T01:20:00Z / 12:30:00Z in IST
        assert_eq!(report.sunrise.as_deref(), Some("06:50"));
        assert_eq!(report.sunset.as_deref(), Some("18:00"));
        assert_eq!(report.coordinates, Some(Coordinates { lat: 19.01, lon: 72.85 }));
        assert_eq!(report.background(), Some(BackgroundCategory::Rain));
    }

    #[test]
    fn test_payload_city_overrides_location() {
        let payload = ProviderPayload::from_json(&payload().to_string()).unwrap();
        let pune = find_city("Pune").unwrap();
        let report = payload.into_report(Some(pune), chrono_tz::Asia::Kolkata).unwrap();

        assert_eq!(report.city.as_deref(), Some("Pune"));
        assert_eq!(report.coordinates, Some(pune.coordinates()));
    }

    #[test]
    fn test_payload_missing_optional_fields() {
        let mut value = payload();
        value["wind"] = json!({ "speed": 1.0 });
        value.as_object_mut().unwrap().remove("visibility");

        let payload = ProviderPayload::from_json(&value.to_string()).unwrap();
        let report = payload.into_report(None, chrono_tz::UTC).unwrap();
        assert_eq!(report.wind_direction, Some(0.0));
        assert_eq!(report.visibility, Some(0.0));
    }

    #[test]
    fn test_payload_without_conditions() {
        let mut value = payload();
        value["weather"] = json!([]);

        let payload = ProviderPayload::from_json(&value.to_string()).unwrap();
        assert!(matches!(
            payload.into_report(None, chrono_tz::UTC),
            Err(ReportError::Malformed(_))
        ));
    }

    #[test]
    fn test_payload_out_of_range_sunrise() {
        let mut value = payload();
        value["sys"]["sunrise"] = json!(i64::MAX);

        let payload = ProviderPayload::from_json(&value.to_string()).unwrap();
        assert!(matches!(
            payload.into_report(None, chrono_tz::UTC),
            Err(ReportError::TimestampOutOfRange(_))
        ));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("overcast clouds"), "Overcast Clouds");
        assert_eq!(title_case("HEAVY  snow"), "Heavy  Snow");
        assert_eq!(title_case("thunderstorm/rain"), "Thunderstorm/Rain");
    }
}
