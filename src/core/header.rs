//! Grid header: extent, increments, derived node counts, registration,
//! running statistics, and the opaque remark echoed from the file header.
use serde::Serialize;
use tracing::warn;

use crate::core::region::Region;
use crate::core::window::WindowIndices;
use crate::error::{Error, Result};
use crate::types::Registration;

/// Number of grid nodes along one axis.
///
/// Gridline registration places nodes on both extent edges; pixel
/// registration places them at cell centers, one fewer per axis.
pub fn node_count(min: f64, max: f64, inc: f64, registration: Registration) -> i64 {
    let n = ((max - min) / inc).round() as i64 + 1;
    match registration {
        Registration::Gridline => n,
        Registration::Pixel => n - 1,
    }
}

/// In-memory description of a grid: bounding box, increments, derived
/// dimensions, registration, and running sample statistics.
///
/// `z_min`/`z_max` are NaN until a read or write has scanned samples;
/// they then cover exactly the non-missing samples of the transcoded
/// window. `remark` is a best-effort echo of auxiliary file metadata.
#[derive(Debug, Clone, Serialize)]
pub struct GridHeader {
    pub west: f64,
    pub east: f64,
    pub south: f64,
    pub north: f64,
    pub dx: f64,
    pub dy: f64,
    pub nx: usize,
    pub ny: usize,
    pub registration: Registration,
    pub z_min: f64,
    pub z_max: f64,
    pub has_missing: bool,
    pub remark: String,
}

impl GridHeader {
    /// Builds a header from an extent and increments, deriving `nx`/`ny`.
    /// Rejects non-positive increments and degenerate node counts.
    pub fn new(region: Region, dx: f64, dy: f64, registration: Registration) -> Result<Self> {
        if !(dx > 0.0) || !(dy > 0.0) {
            return Err(Error::bad_value(format!(
                "increments must be positive: dx={dx}, dy={dy}"
            )));
        }
        let nx = node_count(region.west, region.east, dx, registration);
        let ny = node_count(region.south, region.north, dy, registration);
        if nx <= 0 || ny <= 0 {
            return Err(Error::bad_value(format!(
                "grid has no nodes: nx={nx}, ny={ny}"
            )));
        }
        Ok(Self {
            west: region.west,
            east: region.east,
            south: region.south,
            north: region.north,
            dx,
            dy,
            nx: nx as usize,
            ny: ny as usize,
            registration,
            z_min: f64::NAN,
            z_max: f64::NAN,
            has_missing: false,
            remark: String::new(),
        })
    }

    pub fn region(&self) -> Region {
        Region {
            west: self.west,
            east: self.east,
            south: self.south,
            north: self.north,
        }
    }

    /// Resets the running statistics ahead of a fresh window scan.
    /// NaN-seeded so that `f64::min`/`f64::max` pick up the first sample.
    pub(crate) fn reset_stats(&mut self) {
        self.z_min = f64::NAN;
        self.z_max = f64::NAN;
        self.has_missing = false;
    }

    pub(crate) fn record_sample(&mut self, v: f64) {
        self.z_min = self.z_min.min(v);
        self.z_max = self.z_max.max(v);
    }

    /// Shrinks the header to a transcoded window: bbox becomes the
    /// effective window, `nx`/`ny` its dimensions.
    pub(crate) fn set_window(&mut self, win: &WindowIndices) {
        let r = win.region;
        self.west = r.west;
        self.east = r.east;
        self.south = r.south;
        self.north = r.north;
        self.nx = win.width();
        self.ny = win.height();
    }

    /// Forces gridline registration, shrinking the extent by half a cell
    /// on each side. The AGC format only admits gridline registration.
    pub fn to_gridline(&mut self) {
        if self.registration != Registration::Pixel {
            return;
        }
        self.west += 0.5 * self.dx;
        self.east -= 0.5 * self.dx;
        self.south += 0.5 * self.dy;
        self.north -= 0.5 * self.dy;
        self.registration = Registration::Gridline;
        warn!(
            "AGC grids are always gridline-registered; pixel grid converted, region reset to {}",
            self.region()
        );
    }
}
