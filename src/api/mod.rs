//! High-level, ergonomic entry points over the AGC codec: owned-buffer
//! read/write of whole grids or sub-regions, and a boolean format check.
//! Prefer these over the low-level `io::agc` functions when you do not
//! need padding margins or a complex-layout buffer.
use std::path::Path;

use crate::core::header::GridHeader;
use crate::core::region::Region;
use crate::core::window::{BufferLayout, window_indices};
use crate::error::{Error, Result};
use crate::io::agc;
use crate::io::stream;

/// An owned grid: header plus a flat north-to-south, row-major sample
/// buffer with no padding. Missing samples are NaN.
#[derive(Debug, Clone)]
pub struct Grid {
    pub header: GridHeader,
    pub data: Vec<f32>,
}

impl Grid {
    /// Wraps a header and matching buffer, rejecting a length mismatch.
    pub fn new(header: GridHeader, data: Vec<f32>) -> Result<Self> {
        let expected = header.nx * header.ny;
        if data.len() != expected {
            return Err(Error::bad_value(format!(
                "grid buffer has {} samples, header implies {expected}",
                data.len()
            )));
        }
        Ok(Grid { header, data })
    }

    /// Sample at `(row, col)`, row 0 at the north edge.
    pub fn value(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.header.nx + col]
    }

    pub fn is_missing(&self, row: usize, col: usize) -> bool {
        self.value(row, col).is_nan()
    }
}

/// Whether `path` probes as an AGC grid. `BadValue` rejections map to
/// `false`; genuine I/O failures still surface as errors.
pub fn is_agc_grid(path: &Path) -> Result<bool> {
    match agc::probe(path) {
        Ok(()) => Ok(true),
        Err(Error::BadValue(_)) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Reads a whole grid (or the sub-region selected by `region`) from
/// `path` into an owned [`Grid`]. Needs two passes over the file start,
/// so the stdio token is rejected; use the low-level codec for pipes.
pub fn read_grid_from_path(path: &Path, region: Option<&Region>) -> Result<Grid> {
    if stream::is_stdio(path) {
        return Err(Error::UnsupportedStream("read_grid_from_path"));
    }
    let mut header = agc::read_header(path)?;
    let win = window_indices(&header, region)?;
    let mut data = vec![0.0f32; win.width() * win.height()];
    agc::read_grid(path, &mut header, &mut data, region, &BufferLayout::default())?;
    Grid::new(header, data)
}

/// Writes an owned [`Grid`] to `path` (or stdout for `=`). The grid's
/// header is updated in place with the written extent and statistics.
pub fn write_grid_to_path(path: &Path, grid: &mut Grid) -> Result<()> {
    agc::write_grid(path, &mut grid.header, &grid.data, None, &BufferLayout::default())
}
