use sunpanel_weather::{BackgroundCategory, WeatherReport};

use crate::document::Document;

/// Paint the page background for the report's condition.
///
/// Nothing happens when there is no report or it has no description; the
/// current background stays. Returns the category applied.
pub fn update_background_for_weather(
    doc: &mut dyn Document,
    report: Option<&WeatherReport>,
) -> Option<BackgroundCategory> {
    let category = report?.background()?;
    doc.set_body_background(category.gradient());
    tracing::debug!("Background set to {}", category.key());
    Some(category)
}
