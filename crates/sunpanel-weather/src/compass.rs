//! Wind direction to compass point mapping.

use serde::{Deserialize, Serialize};

/// Width of one compass sector in degrees.
pub const SECTOR_DEGREES: f64 = 22.5;

/// One of the 16 compass points, clockwise from north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum CompassPoint {
    #[default]
    N,
    Nne,
    Ne,
    Ene,
    E,
    Ese,
    Se,
    Sse,
    S,
    Ssw,
    Sw,
    Wsw,
    W,
    Wnw,
    Nw,
    Nnw,
}

impl CompassPoint {
    pub const ALL: [CompassPoint; 16] = [
        Self::N,
        Self::Nne,
        Self::Ne,
        Self::Ene,
        Self::E,
        Self::Ese,
        Self::Se,
        Self::Sse,
        Self::S,
        Self::Ssw,
        Self::Sw,
        Self::Wsw,
        Self::W,
        Self::Wnw,
        Self::Nw,
        Self::Nnw,
    ];

    /// Resolve a bearing to the nearest compass point.
    ///
    /// The bearing is reduced modulo 360 first, so any finite value works.
    /// Exact half-sector bearings round clockwise. Non-finite input maps to north.
    pub fn from_degrees(degrees: f64) -> Self {
        if !degrees.is_finite() {
            return Self::N;
        }
        let normalized = degrees.rem_euclid(360.0);
        let sector = (normalized / SECTOR_DEGREES).round() as usize % Self::ALL.len();
        Self::ALL[sector]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::Nne => "NNE",
            Self::Ne => "NE",
            Self::Ene => "ENE",
            Self::E => "E",
            Self::Ese => "ESE",
            Self::Se => "SE",
            Self::Sse => "SSE",
            Self::S => "S",
            Self::Ssw => "SSW",
            Self::Sw => "SW",
            Self::Wsw => "WSW",
            Self::W => "W",
            Self::Wnw => "WNW",
            Self::Nw => "NW",
            Self::Nnw => "NNW",
        }
    }

    /// Center bearing of this point's sector.
    pub fn bearing(self) -> f64 {
        self as usize as f64 * SECTOR_DEGREES
    }
}

impl std::fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Compass label for a wind bearing in degrees.
pub fn wind_direction(degrees: f64) -> &'static str {
    CompassPoint::from_degrees(degrees).label()
}
