//! Weather presentation helpers for SunPanel
//!
//! Pure lookups and formatting used by the dashboard page: clock times,
//! compass points, condition backgrounds, and the report data contract.

pub mod background;
pub mod cities;
pub mod compass;
pub mod time;
pub mod types;

pub use background::{background_for, weather_background, BackgroundCategory};
pub use cities::{city_names, find_city, City, CITIES};
pub use compass::{wind_direction, CompassPoint};
pub use time::{format_time, format_time_in, DEFAULT_TZ};
pub use types::*;
