//! Touch feedback for mobile browsers.

use crate::document::Document;
use crate::events::{Event, EventKind, ListenOptions, Listeners, Subscription, Target};

/// Register an empty passive `touchstart` listener on touch hosts.
///
/// Having any touch listener makes mobile Safari apply `:active` styles and
/// drop its synthetic click delay. The handler itself does nothing.
pub fn attach(doc: &dyn Document, listeners: &Listeners) -> Option<Subscription> {
    if !doc.supports_touch() {
        return None;
    }
    Some(listeners.listen(
        Target::Document,
        EventKind::TouchStart,
        ListenOptions::passive(),
        |_: &mut dyn Document, _: &Event| {},
    ))
}
