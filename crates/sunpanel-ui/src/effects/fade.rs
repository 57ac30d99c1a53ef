//! Fade/slide-in of the main content container.

use std::time::Duration;

use sunpanel_core::EffectsConfig;

use crate::document::{Document, ElementId};
use crate::scheduler::Scheduler;

pub const MAIN_SELECTOR: &str = ".main";

/// The two states of the fade-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadePhase {
    /// Transparent and shifted down, no transition yet
    Hidden,
    /// Transition enabled, fully opaque and in place
    Revealed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FadeIn {
    pub delay: Duration,
    pub transition: String,
    pub offset_px: u32,
}

impl Default for FadeIn {
    fn default() -> Self {
        Self::from_config(&EffectsConfig::default())
    }
}

impl FadeIn {
    pub fn from_config(config: &EffectsConfig) -> Self {
        Self {
            delay: Duration::from_millis(config.fade_delay_ms),
            transition: config.transition.clone(),
            offset_px: config.fade_offset_px,
        }
    }

    /// Put `el` into `phase`. Applying the same phase twice is harmless.
    pub fn apply(&self, doc: &mut dyn Document, el: ElementId, phase: FadePhase) {
        match phase {
            FadePhase::Hidden => {
                doc.set_style(el, "opacity", "0");
                doc.set_style(el, "transform", &format!("translateY({}px)", self.offset_px));
            }
            FadePhase::Revealed => {
                doc.set_style(el, "transition", &self.transition);
                doc.set_style(el, "opacity", "1");
                doc.set_style(el, "transform", "translateY(0)");
            }
        }
    }

    /// Hide the main container now and reveal it after the delay.
    ///
    /// Returns the container, or `None` when the page has none.
    pub fn start(&self, doc: &mut dyn Document, scheduler: &dyn Scheduler) -> Option<ElementId> {
        let Some(main) = doc.query_selector(MAIN_SELECTOR) else {
            tracing::trace!("No {} container, skipping fade-in", MAIN_SELECTOR);
            return None;
        };

        self.apply(doc, main, FadePhase::Hidden);

        let fade = self.clone();
        scheduler.schedule(
            self.delay,
            Box::new(move |doc: &mut dyn Document| fade.apply(doc, main, FadePhase::Revealed)),
        );
        tracing::debug!("Fade-in scheduled in {:?}", self.delay);
        Some(main)
    }
}
