//! Keyboard shortcuts.

use crate::document::Document;
use crate::events::{Event, EventKind, Key, ListenOptions, Listeners, Subscription, Target};

pub const BACK_SELECTOR: &str = ".btn-back";
pub const VIEW_WEATHER_ID: &str = "viewWeatherBtn";

/// Escape goes back; Enter opens the selected city's weather unless the
/// button is disabled. Returns true if something was clicked.
pub fn handle_key(doc: &mut dyn Document, key: &Key) -> bool {
    match key {
        Key::Escape => match doc.query_selector(BACK_SELECTOR) {
            Some(back) => {
                doc.click(back);
                true
            }
            None => false,
        },
        Key::Enter => match doc.element_by_id(VIEW_WEATHER_ID) {
            Some(btn) if !doc.is_disabled(btn) => {
                doc.click(btn);
                true
            }
            _ => false,
        },
        Key::Other(_) => false,
    }
}

pub fn attach(listeners: &Listeners) -> Subscription {
    listeners.listen(
        Target::Document,
        EventKind::KeyDown,
        ListenOptions::default(),
        |doc: &mut dyn Document, event: &Event| {
            if let Some(key) = &event.key {
                if handle_key(doc, key) {
                    tracing::debug!("Keyboard shortcut {:?} handled", key);
                }
            }
        },
    )
}
