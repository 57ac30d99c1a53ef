//! Service worker hook.
//!
//! Offline support is not implemented. On hosts that could register a
//! service worker, a `load` listener is installed that only records
//! whether registration was requested.

use crate::document::Document;
use crate::events::{Event, EventKind, ListenOptions, Listeners, Subscription, Target};

pub const SERVICE_WORKER_SCRIPT: &str = "/sw.js";

pub fn attach(doc: &dyn Document, listeners: &Listeners, requested: bool) -> Option<Subscription> {
    if !doc.supports_service_worker() {
        return None;
    }
    Some(listeners.listen(
        Target::Window,
        EventKind::Load,
        ListenOptions::default(),
        move |_: &mut dyn Document, _: &Event| {
            if requested {
                tracing::info!(
                    "Offline support requested but not available; {} is not registered",
                    SERVICE_WORKER_SCRIPT
                );
            } else {
                tracing::debug!("Service worker registration skipped");
            }
        },
    ))
}
