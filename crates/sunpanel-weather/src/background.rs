//! Decorative page backgrounds chosen from weather condition text.

use serde::{Deserialize, Serialize};

/// Background categories, one per family of weather conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundCategory {
    Clear,
    Clouds,
    Rain,
    Thunderstorm,
    Snow,
    Mist,
    #[default]
    Default,
}

/// Classification rules in priority order. First rule with a matching
/// keyword wins.
const RULES: &[(&[&str], BackgroundCategory)] = &[
    (&["clear"], BackgroundCategory::Clear),
    (&["cloud"], BackgroundCategory::Clouds),
    (&["rain", "drizzle"], BackgroundCategory::Rain),
    (&["thunder"], BackgroundCategory::Thunderstorm),
    (&["snow"], BackgroundCategory::Snow),
    (&["mist", "fog", "haze"], BackgroundCategory::Mist),
];

impl BackgroundCategory {
    pub const ALL: [BackgroundCategory; 7] = [
        Self::Clear,
        Self::Clouds,
        Self::Rain,
        Self::Thunderstorm,
        Self::Snow,
        Self::Mist,
        Self::Default,
    ];

    /// Classify a free-text condition description, case-insensitively.
    pub fn classify(description: &str) -> Self {
        let condition = description.to_lowercase();
        RULES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| condition.contains(k)))
            .map(|(_, category)| *category)
            .unwrap_or_default()
    }

    /// Look up a category by its key (`"clear"`, `"clouds"`, ...).
    /// Unknown keys fall back to the default background.
    pub fn from_key(key: &str) -> Self {
        let key = key.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.key() == key)
            .unwrap_or_default()
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Clouds => "clouds",
            Self::Rain => "rain",
            Self::Thunderstorm => "thunderstorm",
            Self::Snow => "snow",
            Self::Mist => "mist",
            Self::Default => "default",
        }
    }

    /// CSS `background` value for this category
    pub fn gradient(self) -> &'static str {
        match self {
            Self::Clear => "linear-gradient(135deg, #74b9ff 0%, #0984e3 100%)",
            Self::Clouds => "linear-gradient(135deg, #a29bfe 0%, #6c5ce7 100%)",
            Self::Rain => "linear-gradient(135deg, #81ecec 0%, #00b894 100%)",
            Self::Thunderstorm => "linear-gradient(135deg, #636e72 0%, #2d3436 100%)",
            Self::Snow => "linear-gradient(135deg, #ddd6fe 0%, #8b5cf6 100%)",
            Self::Mist => "linear-gradient(135deg, #b2bec3 0%, #636e72 100%)",
            Self::Default => "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
        }
    }
}

/// Gradient for a free-text condition description.
pub fn background_for(description: &str) -> &'static str {
    BackgroundCategory::classify(description).gradient()
}

/// Gradient for a category key, falling back to the default gradient.
pub fn weather_background(key: &str) -> &'static str {
    BackgroundCategory::from_key(key).gradient()
}
