//! The helper surface other page code consumes.

use chrono_tz::Tz;
use sunpanel_core::{ConfigError, DisplayConfig};
use sunpanel_weather::{format_time_in, wind_direction, BackgroundCategory, WeatherReport};

use crate::document::{Document, ElementId};

/// Time formatting, compass lookup, background updates and the loading
/// indicator, bundled for page scripts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherDashboard {
    tz: Tz,
}

impl Default for WeatherDashboard {
    fn default() -> Self {
        Self {
            tz: sunpanel_weather::DEFAULT_TZ,
        }
    }
}

impl WeatherDashboard {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn from_config(config: &DisplayConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.tz()?))
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// `HH:MM` for epoch seconds, `None` if out of range.
    pub fn format_time(&self, timestamp: i64) -> Option<String> {
        format_time_in(timestamp, self.tz)
    }

    pub fn wind_direction(&self, degrees: f64) -> &'static str {
        wind_direction(degrees)
    }

    pub fn update_background_for_weather(
        &self,
        doc: &mut dyn Document,
        report: Option<&WeatherReport>,
    ) -> Option<BackgroundCategory> {
        crate::background::update_background_for_weather(doc, report)
    }

    pub fn show_loading(&self, doc: &mut dyn Document, el: Option<ElementId>) -> bool {
        crate::loading::show_loading(doc, el)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MemoryDocument;

    #[test]
    fn test_default_is_ist() {
        let dashboard = WeatherDashboard::default();
        assert_eq!(dashboard.timezone(), chrono_tz::Asia::Kolkata);
        assert_eq!(dashboard.format_time(0).as_deref(), Some("05:30"));
    }

    #[test]
    fn test_from_config() {
        let config = DisplayConfig {
            timezone: "UTC".to_string(),
        };
        let dashboard = WeatherDashboard::from_config(&config).unwrap();
        assert_eq!(dashboard.format_time(3600).as_deref(), Some("01:00"));

        let bad = DisplayConfig {
            timezone: "Nowhere/Special".to_string(),
        };
        assert!(matches!(
            WeatherDashboard::from_config(&bad),
            Err(ConfigError::UnknownTimezone(_))
        ));
    }

    #[test]
    fn test_all_four_helpers() {
        let dashboard = WeatherDashboard::default();
        let mut doc = MemoryDocument::new();
        let panel = doc.append(".panel");

        assert_eq!(dashboard.wind_direction(180.0), "S");
        assert!(dashboard.show_loading(&mut doc, Some(panel)));

        let report = WeatherReport {
            description: Some("Snow".into()),
            ..WeatherReport::default()
        };
        assert_eq!(
            dashboard.update_background_for_weather(&mut doc, Some(&report)),
            Some(BackgroundCategory::Snow)
        );
    }
}
