//! Hover lift on interactive elements.

use crate::document::{Document, ElementId};
use crate::events::{Event, EventKind, ListenOptions, Listeners, Subscription, Target};

pub const INTERACTIVE_SELECTOR: &str = ".city-card, .weather-btn, .map-btn, .btn-back";

/// Marker classes that keep an element's transform when the pointer leaves.
pub const STICKY_CLASSES: [&str; 2] = ["selected", "active"];

pub fn is_sticky(doc: &dyn Document, el: ElementId) -> bool {
    STICKY_CLASSES.iter().any(|c| doc.has_class(el, c))
}

/// Attach enter/leave listeners to every interactive element currently on
/// the page. Returns two subscriptions per element.
pub fn attach(doc: &dyn Document, listeners: &Listeners, lift_px: u32) -> Vec<Subscription> {
    let elements = doc.query_selector_all(INTERACTIVE_SELECTOR);
    tracing::debug!("Attaching hover effects to {} elements", elements.len());

    let lifted = format!("translateY(-{lift_px}px)");
    let mut subscriptions = Vec::with_capacity(elements.len() * 2);

    for el in elements {
        let lifted = lifted.clone();
        subscriptions.push(listeners.listen(
            Target::Element(el),
            EventKind::MouseEnter,
            ListenOptions::default(),
            move |doc: &mut dyn Document, _: &Event| {
                doc.set_style(el, "transform", &lifted);
            },
        ));

        subscriptions.push(listeners.listen(
            Target::Element(el),
            EventKind::MouseLeave,
            ListenOptions::default(),
            move |doc: &mut dyn Document, _: &Event| {
                if !is_sticky(doc, el) {
                    doc.set_style(el, "transform", "translateY(0)");
                }
            },
        ));
    }

    subscriptions
}
