//! Cosmetic page effects and their wiring.
//!
//! [`PageEffects::install`] registers everything the dashboard page wires
//! at startup and returns the disposer group. Handlers keep no state of
//! their own; each one reads what it needs from the document when it runs.

pub mod fade;
pub mod hover;
pub mod keys;
pub mod offline;
pub mod touch;

use std::sync::Arc;

use sunpanel_core::EffectsConfig;

use crate::document::Document;
use crate::events::{Event, EventKind, ListenOptions, Listeners, Subscriptions, Target};
use crate::scheduler::Scheduler;

pub use fade::{FadeIn, FadePhase};

#[derive(Debug, Clone)]
pub struct PageEffects {
    config: EffectsConfig,
}

impl PageEffects {
    pub fn new(config: EffectsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EffectsConfig {
        &self.config
    }

    /// Wire the page.
    ///
    /// Registers immediately: the page-ready handler, keyboard shortcuts,
    /// the touch no-op (touch hosts only) and the service worker hook
    /// (capable hosts only). When the page-ready event arrives the main
    /// container fade-in is scheduled and hover listeners are attached to
    /// the interactive elements present at that moment; those listeners
    /// join the returned group. Only the first page-ready event does this.
    pub fn install(
        &self,
        doc: &dyn Document,
        listeners: &Listeners,
        scheduler: Arc<dyn Scheduler>,
    ) -> Subscriptions {
        let group = Subscriptions::new();

        let fade = FadeIn::from_config(&self.config);
        let lift_px = self.config.hover_lift_px;
        let ready_listeners = listeners.clone();
        let ready_group = group.clone();
        let mut ready_seen = false;
        group.push(listeners.listen(
            Target::Document,
            EventKind::Ready,
            ListenOptions::default(),
            move |doc: &mut dyn Document, _: &Event| {
                if ready_seen {
                    tracing::trace!("Page already ready, ignoring repeat event");
                    return;
                }
                ready_seen = true;
                fade.start(doc, scheduler.as_ref());
                ready_group.extend(hover::attach(doc, &ready_listeners, lift_px));
            },
        ));

        group.push(keys::attach(listeners));

        if self.config.touch_noop {
            if let Some(sub) = touch::attach(doc, listeners) {
                group.push(sub);
            }
        }

        if let Some(sub) = offline::attach(doc, listeners, self.config.offline_support) {
            group.push(sub);
        }

        tracing::debug!("Page effects installed ({} listeners)", group.len());
        group
    }
}

impl Default for PageEffects {
    fn default() -> Self {
        Self::new(EffectsConfig::default())
    }
}
