//! Format prober: decides whether a file is a well-formed AGC grid by
//! cross-checking header-derived geometry against the physical file size.
use std::fs;
use std::path::Path;

use crate::core::header::node_count;
use crate::error::{Error, Result};
use crate::io::agc::layout::{RECORD_BYTES, RECORD_FLOATS, TILE_HEIGHT, TILE_WIDTH, TileHeader};
use crate::io::agc::tile::read_f32s;
use crate::io::stream;
use crate::types::Registration;

/// Exact byte size of a conforming AGC file holding an `nx` x `ny` grid.
pub fn predicted_file_size(nx: usize, ny: usize) -> u64 {
    (ny.div_ceil(TILE_HEIGHT) * nx.div_ceil(TILE_WIDTH)) as u64 * RECORD_BYTES
}

/// Checks whether `path` is a valid AGC grid.
///
/// Geometry checks (extent ordering, increment positivity, node counts)
/// run before the size check; any violation is `BadValue`. The format has
/// no magic number, so any unrelated file whose first record happens to
/// decode to consistent geometry with a matching predicted size is
/// accepted; that false positive is inherent to the format.
pub fn probe(path: &Path) -> Result<()> {
    if stream::is_stdio(path) {
        return Err(Error::UnsupportedStream("probe"));
    }
    let size = fs::metadata(path)
        .map_err(|source| Error::StatFailed { path: path.to_path_buf(), source })?
        .len();

    let mut reader = stream::open_input(path)?;
    let mut record = vec![0.0f32; RECORD_FLOATS];
    read_f32s(reader.as_mut(), &mut record, false, "first record")?;
    let lead = TileHeader::from_floats(&record);

    if lead.south >= lead.north {
        return Err(Error::bad_value(format!(
            "south ({}) is not less than north ({})",
            lead.south, lead.north
        )));
    }
    if lead.west >= lead.east {
        return Err(Error::bad_value(format!(
            "west ({}) is not less than east ({})",
            lead.west, lead.east
        )));
    }
    if lead.dx <= 0.0 || lead.dy <= 0.0 {
        return Err(Error::bad_value(format!(
            "increments must be positive: dx={}, dy={}",
            lead.dx, lead.dy
        )));
    }
    let nx = node_count(lead.west as f64, lead.east as f64, lead.dx as f64, Registration::Gridline);
    let ny = node_count(lead.south as f64, lead.north as f64, lead.dy as f64, Registration::Gridline);
    if nx <= 0 || ny <= 0 {
        return Err(Error::bad_value(format!("grid has no nodes: nx={nx}, ny={ny}")));
    }

    let predicted = predicted_file_size(nx as usize, ny as usize);
    if predicted != size {
        return Err(Error::bad_value(format!(
            "file size {size} does not match predicted AGC size {predicted}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicted_size_counts_whole_tiles() {
        assert_eq!(predicted_file_size(1, 1), 6456);
        assert_eq!(predicted_file_size(40, 40), 6456);
        assert_eq!(predicted_file_size(41, 40), 2 * 6456);
        assert_eq!(predicted_file_size(41, 41), 4 * 6456);
        assert_eq!(predicted_file_size(100, 80), 3 * 2 * 6456);
    }
}
