//! Window and padding index arithmetic shared by the read and write paths.
//!
//! A window is the overlap between a caller-requested sub-region and the
//! full grid, expressed as inclusive first/last row and column indices.
//! Rows count from the north edge, matching the in-memory north-to-south
//! row order; the south-to-north flip against file order happens in the
//! codec, not here.
use crate::core::header::GridHeader;
use crate::core::region::Region;
use crate::error::{Error, Result};
use crate::types::Registration;

/// Slop applied when snapping region edges to node indices, in units of
/// one grid increment.
const NODE_SLOP: f64 = 1e-4;

/// Empty margin counts around the addressed window, one per side.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Padding {
    pub west: usize,
    pub east: usize,
    pub south: usize,
    pub north: usize,
}

impl Padding {
    pub const NONE: Padding = Padding { west: 0, east: 0, south: 0, north: 0 };
}

/// Physical layout of a caller-owned sample buffer: padding margins plus
/// an optional displacement separating a real-part region from an
/// imaginary-part region. The AGC codec only ever touches the real part.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BufferLayout {
    pub pad: Padding,
    pub imag_offset: usize,
}

impl BufferLayout {
    /// Width of one physical buffer row for a window `width` nodes wide.
    pub fn row_width(&self, width: usize) -> usize {
        width + self.pad.west + self.pad.east
    }

    /// Minimum buffer length for a `width` x `height` window.
    pub fn required_len(&self, width: usize, height: usize) -> usize {
        self.imag_offset + (height + self.pad.north + self.pad.south) * self.row_width(width)
    }
}

/// Inclusive index bounds of a window within the full grid, plus the
/// node-aligned region the window covers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WindowIndices {
    pub first_col: usize,
    pub last_col: usize,
    pub first_row: usize,
    pub last_row: usize,
    pub region: Region,
}

impl WindowIndices {
    pub fn width(&self) -> usize {
        self.last_col - self.first_col + 1
    }

    pub fn height(&self) -> usize {
        self.last_row - self.first_row + 1
    }
}

/// Computes the window of `header` selected by `region`, or the full grid
/// when no region is requested. Fails when the request does not overlap
/// the grid at all.
pub fn window_indices(header: &GridHeader, region: Option<&Region>) -> Result<WindowIndices> {
    let Some(r) = region else {
        return Ok(WindowIndices {
            first_col: 0,
            last_col: header.nx - 1,
            first_row: 0,
            last_row: header.ny - 1,
            region: header.region(),
        });
    };

    // Node k sits at west + (k + off) * dx; off is 0.5 for pixel grids.
    let off = match header.registration {
        Registration::Gridline => 0.0,
        Registration::Pixel => 0.5,
    };
    let first_col = ((r.west - header.west) / header.dx - off - NODE_SLOP).ceil().max(0.0) as usize;
    let last_col_f = ((r.east - header.west) / header.dx - off + NODE_SLOP).floor();
    let first_row = ((header.north - r.north) / header.dy - off - NODE_SLOP).ceil().max(0.0) as usize;
    let last_row_f = ((header.north - r.south) / header.dy - off + NODE_SLOP).floor();

    if last_col_f < 0.0 || last_row_f < 0.0 {
        return Err(Error::bad_value(format!(
            "sub-region {r} does not overlap grid {}",
            header.region()
        )));
    }
    let last_col = (last_col_f as usize).min(header.nx - 1);
    let last_row = (last_row_f as usize).min(header.ny - 1);
    if first_col > last_col || first_row > last_row {
        return Err(Error::bad_value(format!(
            "sub-region {r} does not overlap grid {}",
            header.region()
        )));
    }

    // Effective region: node-aligned for gridline grids, cell-aligned for
    // pixel grids (whose edges sit half a cell outside the nodes).
    let region = Region {
        west: header.west + (first_col as f64) * header.dx,
        east: header.west + (last_col as f64 + 2.0 * off) * header.dx,
        north: header.north - (first_row as f64) * header.dy,
        south: header.north - (last_row as f64 + 2.0 * off) * header.dy,
    };

    Ok(WindowIndices { first_col, last_col, first_row, last_row, region })
}
