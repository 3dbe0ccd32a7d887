//! Shared types used across the crate.
//! Currently just `Registration`; the AGC format itself only admits
//! gridline registration, pixel grids are normalized on write.
use serde::{Deserialize, Serialize};

/// Node registration of a grid.
///
/// `Gridline`: nodes sit at cell corners. `Pixel`: nodes sit at cell
/// centers. AGC files are always gridline-registered.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Registration {
    Gridline,
    Pixel,
}

impl std::fmt::Display for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Registration::Gridline => write!(f, "gridline"),
            Registration::Pixel => write!(f, "pixel"),
        }
    }
}
