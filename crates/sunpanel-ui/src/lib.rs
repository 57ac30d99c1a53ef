//! View layer for the SunPanel dashboard page.
//!
//! The page itself is reached through the [`Document`] trait; everything
//! here only reads and writes through it.

pub mod background;
pub mod dashboard;
pub mod document;
pub mod effects;
pub mod events;
pub mod loading;
pub mod scheduler;

pub use background::update_background_for_weather;
pub use dashboard::WeatherDashboard;
pub use document::{Document, ElementId, MemoryDocument};
pub use effects::{FadeIn, FadePhase, PageEffects};
pub use events::{Event, EventKind, Key, ListenOptions, Listeners, Subscription, Subscriptions, Target};
pub use loading::{show_loading, LOADING_MARKUP};
pub use scheduler::{Scheduler, Task, TokioScheduler, VirtualClock};
