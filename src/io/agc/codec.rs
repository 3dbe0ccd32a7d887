//! Header codec and grid windowing engine.
//!
//! The windowing engine drives the tile codec across a whole grid in the
//! format-mandated traversal order: tile-row fastest within ascending
//! tile-column. Files store sample rows south-to-north while the
//! in-memory convention is north-to-south, so every row index is flipped
//! during transcoding.
use std::path::Path;

use crate::core::header::GridHeader;
use crate::core::region::Region;
use crate::core::window::{BufferLayout, window_indices};
use crate::error::{Error, Result};
use crate::io::agc::layout::{
    RECORD_FLOATS, TILE_HEIGHT, TILE_WIDTH, TRAIL_FLOATS, TileHeader, TileTrailer, encode_remark,
};
use crate::io::agc::tile::{TileBuffer, read_f32s, read_tile, write_f32s, write_tile};
use crate::io::stream;
use crate::types::Registration;

/// Reads the grid header from the first tile of `path` (or stdin for the
/// `=` token). AGC files carry no registration information; the result is
/// always gridline-registered. The auxiliary header floats are echoed
/// into the remark string for best-effort round-trip.
pub fn read_header(path: &Path) -> Result<GridHeader> {
    let mut reader = stream::open_input(path)?;
    let mut record = vec![0.0f32; RECORD_FLOATS];
    read_f32s(reader.as_mut(), &mut record, false, "first record")?;

    let lead = TileHeader::from_floats(&record);
    let trail = TileTrailer::from_floats(&record[RECORD_FLOATS - TRAIL_FLOATS..]);
    let region = Region::new(lead.west as f64, lead.east as f64, lead.south as f64, lead.north as f64)?;
    let mut header =
        GridHeader::new(region, lead.dx as f64, lead.dy as f64, Registration::Gridline)?;
    header.remark = encode_remark(&lead, &trail);
    Ok(header)
}

/// Writes only the 12 leading header floats at the start of `path`,
/// updating the file in place if it exists. Body tiles are untouched;
/// callers later writing tiles must emit a consistent header pair.
/// Rejects the stdio token, which admits no in-place rewrite.
pub fn write_header(path: &Path, header: &GridHeader) -> Result<()> {
    if stream::is_stdio(path) {
        return Err(Error::UnsupportedStream("write_header"));
    }
    let mut file = stream::open_update(path)?;
    let lead = TileHeader::for_grid(header);
    write_f32s(&mut file, &lead.to_floats(), "grid header")
}

fn check_buffer_len(len: usize, needed: usize, what: &str) -> Result<()> {
    if len < needed {
        return Err(Error::bad_value(format!(
            "{what} buffer too small: {len} samples, window needs {needed}"
        )));
    }
    Ok(())
}

/// Reads the grid body of `path` into `data`.
///
/// `region` selects a sub-window of the full extent (all of it when
/// `None`); `layout` describes the caller's buffer margins and complex
/// offset. On-disk 0.0 becomes NaN, sets the missing flag, and is
/// excluded from the running min/max. The whole file is traversed even
/// for a sub-window; out-of-window samples are skipped, not stored.
/// Afterwards the header is shrunk to the effective window.
pub fn read_grid(
    path: &Path,
    header: &mut GridHeader,
    data: &mut [f32],
    region: Option<&Region>,
    layout: &BufferLayout,
) -> Result<()> {
    let win = window_indices(header, region)?;
    let width_out = layout.row_width(win.width());
    check_buffer_len(data.len(), layout.required_len(win.width(), win.height()), "read")?;

    let mut reader = stream::open_input(path)?;
    header.reset_stats();

    let n_tile_rows = header.ny.div_ceil(TILE_HEIGHT);
    let n_tile_cols = header.nx.div_ceil(TILE_WIDTH);
    let mut tile = TileBuffer::new();
    let (mut tile_row, mut tile_col) = (0usize, 0usize);

    for _ in 0..n_tile_rows * n_tile_cols {
        read_tile(reader.as_mut(), &mut tile)?;

        let row_start = tile_row * TILE_HEIGHT;
        let row_end = (row_start + TILE_HEIGHT).min(header.ny);
        let col_start = tile_col * TILE_WIDTH;
        let col_end = (col_start + TILE_WIDTH).min(header.nx);
        for (i, row) in (row_start..row_end).enumerate() {
            let flipped = header.ny - 1 - row;
            if flipped < win.first_row || flipped > win.last_row {
                continue;
            }
            for (j, col) in (col_start..col_end).enumerate() {
                if col < win.first_col || col > win.last_col {
                    continue;
                }
                let ij = layout.imag_offset
                    + ((flipped - win.first_row) + layout.pad.north) * width_out
                    + (col - win.first_col)
                    + layout.pad.west;
                let v = tile.get(i, j);
                if v == 0.0 {
                    // Exact zero is the format's missing sentinel.
                    data[ij] = f32::NAN;
                    header.has_missing = true;
                } else {
                    data[ij] = v;
                    header.record_sample(v as f64);
                }
            }
        }

        tile_row += 1;
        if tile_row == n_tile_rows {
            tile_row = 0;
            tile_col += 1;
        }
    }

    header.set_window(&win);
    Ok(())
}

/// Writes the window of `data` selected by `region` as an AGC file at
/// `path` (or stdout for the `=` token).
///
/// The caller's buffer is never mutated: NaN samples are translated to
/// the on-disk 0.0 sentinel while gathering into the transient tile
/// block. A pixel-registered header is normalized to gridline (with a
/// warning) before packing; the header's extent, dimensions, and
/// statistics are updated to describe the written window. Every tile of
/// the file carries the same header pair.
pub fn write_grid(
    path: &Path,
    header: &mut GridHeader,
    data: &[f32],
    region: Option<&Region>,
    layout: &BufferLayout,
) -> Result<()> {
    let win = window_indices(header, region)?;
    let width_in = layout.row_width(win.width());
    check_buffer_len(data.len(), layout.required_len(win.width(), win.height()), "write")?;

    // Read-only scan for statistics and the missing flag.
    header.reset_stats();
    for row in 0..win.height() {
        let base = layout.imag_offset + (layout.pad.north + row) * width_in + layout.pad.west;
        for col in 0..win.width() {
            let v = data[base + col];
            if v.is_nan() {
                header.has_missing = true;
            } else {
                header.record_sample(v as f64);
            }
        }
    }

    header.set_window(&win);
    header.to_gridline();
    let lead = TileHeader::for_grid(header);
    let trail = TileTrailer::default();

    let mut writer = stream::create_output(path)?;
    let n_tile_rows = header.ny.div_ceil(TILE_HEIGHT);
    let n_tile_cols = header.nx.div_ceil(TILE_WIDTH);
    let mut tile = TileBuffer::new();
    let (mut tile_row, mut tile_col) = (0usize, 0usize);

    for _ in 0..n_tile_rows * n_tile_cols {
        tile.clear();

        let row_start = tile_row * TILE_HEIGHT;
        let row_end = (row_start + TILE_HEIGHT).min(header.ny);
        let col_start = tile_col * TILE_WIDTH;
        let col_end = (col_start + TILE_WIDTH).min(header.nx);
        for (i, row) in (row_start..row_end).enumerate() {
            let flipped = header.ny - 1 - row;
            for (j, col) in (col_start..col_end).enumerate() {
                let ij = layout.imag_offset
                    + (flipped + layout.pad.north) * width_in
                    + col
                    + layout.pad.west;
                let v = data[ij];
                tile.set(i, j, if v.is_nan() { 0.0 } else { v });
            }
        }

        write_tile(writer.as_mut(), &tile, &lead, &trail)?;

        tile_row += 1;
        if tile_row == n_tile_rows {
            tile_row = 0;
            tile_col += 1;
        }
    }
    Ok(())
}
