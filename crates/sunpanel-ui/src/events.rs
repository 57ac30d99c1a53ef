//! Page events and listener registration.
//!
//! Every registration hands back a [`Subscription`]; disposing it removes
//! the listener. Nothing is removed implicitly, so listeners live as long
//! as the page unless a host tears them down.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::document::{Document, ElementId};

/// Keyboard keys the page reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Other(String),
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" => Key::Escape,
            "Enter" => Key::Enter,
            other => Key::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Document finished parsing (`DOMContentLoaded`)
    Ready,
    /// Window finished loading all resources
    Load,
    MouseEnter,
    MouseLeave,
    KeyDown,
    TouchStart,
}

/// Where a listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Document,
    Window,
    Element(ElementId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    pub target: Target,
    pub key: Option<Key>,
}

impl Event {
    pub fn ready() -> Self {
        Self::new(EventKind::Ready, Target::Document)
    }

    pub fn load() -> Self {
        Self::new(EventKind::Load, Target::Window)
    }

    pub fn mouse_enter(el: ElementId) -> Self {
        Self::new(EventKind::MouseEnter, Target::Element(el))
    }

    pub fn mouse_leave(el: ElementId) -> Self {
        Self::new(EventKind::MouseLeave, Target::Element(el))
    }

    pub fn key_down(key: Key) -> Self {
        Self {
            key: Some(key),
            ..Self::new(EventKind::KeyDown, Target::Document)
        }
    }

    pub fn touch_start() -> Self {
        Self::new(EventKind::TouchStart, Target::Document)
    }

    fn new(kind: EventKind, target: Target) -> Self {
        Self {
            kind,
            target,
            key: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListenOptions {
    /// The listener promises never to cancel the event
    pub passive: bool,
}

impl ListenOptions {
    pub fn passive() -> Self {
        Self { passive: true }
    }
}

type Handler = dyn FnMut(&mut dyn Document, &Event) + Send;

struct Entry {
    id: u64,
    target: Target,
    kind: EventKind,
    options: ListenOptions,
    handler: Arc<Mutex<Box<Handler>>>,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<Entry>,
}

/// Shared listener registry for one page.
#[derive(Clone, Default)]
pub struct Listeners {
    registry: Arc<Mutex<Registry>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `kind` events on `target`.
    pub fn listen<F>(
        &self,
        target: Target,
        kind: EventKind,
        options: ListenOptions,
        handler: F,
    ) -> Subscription
    where
        F: FnMut(&mut dyn Document, &Event) + Send + 'static,
    {
        let mut registry = self.registry.lock();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push(Entry {
            id,
            target,
            kind,
            options,
            handler: Arc::new(Mutex::new(Box::new(handler))),
        });

        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Deliver `event` to every matching listener, in registration order.
    ///
    /// Handlers run outside the registry lock, so they may register or
    /// dispose listeners. Returns the number of handlers invoked.
    pub fn dispatch(&self, doc: &mut dyn Document, event: &Event) -> usize {
        let handlers: Vec<_> = {
            let registry = self.registry.lock();
            registry
                .entries
                .iter()
                .filter(|e| e.kind == event.kind && e.target == event.target)
                .map(|e| e.handler.clone())
                .collect()
        };

        for handler in &handlers {
            let mut handler = handler.lock();
            (*handler)(&mut *doc, event);
        }
        handlers.len()
    }

    /// Options of every listener registered for `kind` on `target`.
    pub fn options_for(&self, target: Target, kind: EventKind) -> Vec<ListenOptions> {
        self.registry
            .lock()
            .entries
            .iter()
            .filter(|e| e.kind == kind && e.target == target)
            .map(|e| e.options)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.registry.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners").field("len", &self.len()).finish()
    }
}

/// Disposer handle for one registered listener.
#[must_use = "dropping a Subscription keeps the listener registered with no way to remove it"]
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    /// Remove the listener. Returns false if it was already gone.
    pub fn dispose(self) -> bool {
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };
        let mut registry = registry.lock();
        let before = registry.entries.len();
        registry.entries.retain(|e| e.id != self.id);
        registry.entries.len() != before
    }

    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|r| r.lock().entries.iter().any(|e| e.id == self.id))
    }
}

/// A group of subscriptions torn down together.
///
/// Cloning shares the group, so handlers can add listeners they register
/// later (e.g. on page-ready) to the group returned at install time.
#[derive(Debug, Clone, Default)]
pub struct Subscriptions {
    inner: Arc<Mutex<Vec<Subscription>>>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, subscription: Subscription) {
        self.inner.lock().push(subscription);
    }

    pub fn extend(&self, subscriptions: impl IntoIterator<Item = Subscription>) {
        self.inner.lock().extend(subscriptions);
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dispose every subscription in the group. Returns how many listeners
    /// were removed.
    pub fn dispose_all(&self) -> usize {
        let drained: Vec<_> = std::mem::take(&mut *self.inner.lock());
        drained
            .into_iter()
            .map(Subscription::dispose)
            .filter(|removed| *removed)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MemoryDocument;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> (Arc<AtomicUsize>, impl FnMut(&mut dyn Document, &Event) + Send + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        (count, move |_: &mut dyn Document, _: &Event| {
            c.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_dispatch_matches_kind_and_target() {
        let mut doc = MemoryDocument::new();
        let el = doc.append(".city-card");
        let listeners = Listeners::new();
        let (count, handler) = counter();
        let _sub = listeners.listen(
            Target::Element(el),
            EventKind::MouseEnter,
            ListenOptions::default(),
            handler,
        );

        assert_eq!(listeners.dispatch(&mut doc, &Event::mouse_enter(el)), 1);
        assert_eq!(listeners.dispatch(&mut doc, &Event::mouse_leave(el)), 0);
        assert_eq!(listeners.dispatch(&mut doc, &Event::ready()), 0);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dispose_removes_listener() {
        let mut doc = MemoryDocument::new();
        let listeners = Listeners::new();
        let (count, handler) = counter();
        let sub = listeners.listen(
            Target::Document,
            EventKind::TouchStart,
            ListenOptions::passive(),
            handler,
        );

        assert!(sub.is_active());
        assert!(sub.dispose());
        assert!(listeners.is_empty());
        assert_eq!(listeners.dispatch(&mut doc, &Event::touch_start()), 0);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_dispose_after_registry_dropped() {
        let listeners = Listeners::new();
        let sub = listeners.listen(
            Target::Window,
            EventKind::Load,
            ListenOptions::default(),
            |_: &mut dyn Document, _: &Event| {},
        );
        drop(listeners);
        assert!(!sub.is_active());
        assert!(!sub.dispose());
    }

    #[test]
    fn test_handler_may_register_during_dispatch() {
        let mut doc = MemoryDocument::new();
        let listeners = Listeners::new();
        let group = Subscriptions::new();

        let inner_listeners = listeners.clone();
        let inner_group = group.clone();
        group.push(listeners.listen(
            Target::Document,
            EventKind::Ready,
            ListenOptions::default(),
            move |_: &mut dyn Document, _: &Event| {
                inner_group.push(inner_listeners.listen(
                    Target::Window,
                    EventKind::Load,
                    ListenOptions::default(),
                    |_: &mut dyn Document, _: &Event| {},
                ));
            },
        ));

        listeners.dispatch(&mut doc, &Event::ready());
        assert_eq!(listeners.len(), 2);
        assert_eq!(group.len(), 2);

        assert_eq!(group.dispose_all(), 2);
        assert!(listeners.is_empty());
        assert!(group.is_empty());
    }

    #[test]
    fn test_options_are_recorded() {
        let listeners = Listeners::new();
        let _sub = listeners.listen(
            Target::Document,
            EventKind::TouchStart,
            ListenOptions::passive(),
            |_: &mut dyn Document, _: &Event| {},
        );
        assert_eq!(
            listeners.options_for(Target::Document, EventKind::TouchStart),
            vec![ListenOptions { passive: true }]
        );
    }

    #[test]
    fn test_key_from_name() {
        assert_eq!(Key::from_name("Escape"), Key::Escape);
        assert_eq!(Key::from_name("Enter"), Key::Enter);
        assert_eq!(Key::from_name("a"), Key::Other("a".into()));
        assert_eq!(Event::key_down(Key::Enter).key, Some(Key::Enter));
    }
}
