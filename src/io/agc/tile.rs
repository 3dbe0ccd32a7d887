//! Tile codec: reads and writes one fixed-size tile as an atomic unit of
//! leading header, 40x40 sample block, and trailing header.
use std::io::{self, Read, Write};

use byteorder::{ByteOrder, NativeEndian};

use crate::error::{Error, Result};
use crate::io::agc::layout::{
    LEAD_FLOATS, TILE_HEIGHT, TILE_SAMPLES, TILE_WIDTH, TRAIL_FLOATS, TileHeader, TileTrailer,
};

/// Reusable scratch block for one tile's samples.
///
/// Within a tile, samples are laid out one tile-column at a time with
/// [`TILE_HEIGHT`] rows per column; `(row, col)` here are indices within
/// the tile, in file (south-to-north) row order.
pub struct TileBuffer {
    samples: Vec<f32>,
}

impl TileBuffer {
    pub fn new() -> Self {
        TileBuffer { samples: vec![0.0; TILE_SAMPLES] }
    }

    /// Zero-fills the block so unfilled cells serialize as missing and a
    /// short final-tile read leaves no stale samples behind.
    pub fn clear(&mut self) {
        self.samples.fill(0.0);
    }

    pub fn get(&self, row: usize, col: usize) -> f32 {
        debug_assert!(row < TILE_HEIGHT && col < TILE_WIDTH);
        self.samples[col * TILE_HEIGHT + row]
    }

    pub fn set(&mut self, row: usize, col: usize, v: f32) {
        debug_assert!(row < TILE_HEIGHT && col < TILE_WIDTH);
        self.samples[col * TILE_HEIGHT + row] = v;
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    fn samples_mut(&mut self) -> &mut [f32] {
        &mut self.samples
    }
}

impl Default for TileBuffer {
    fn default() -> Self {
        TileBuffer::new()
    }
}

/// Reads native-endian floats into `out`. A short read is an error unless
/// `eof_ok` and the shortfall coincides with end-of-stream; whole floats
/// read before EOF are still stored, the rest of `out` is left untouched.
pub(crate) fn read_f32s<R: Read + ?Sized>(
    r: &mut R,
    out: &mut [f32],
    eof_ok: bool,
    what: &str,
) -> Result<()> {
    let mut bytes = vec![0u8; out.len() * 4];
    let mut filled = 0;
    while filled < bytes.len() {
        match r.read(&mut bytes[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::ReadFailed(format!("{what}: {e}"))),
        }
    }
    if filled < bytes.len() && !eof_ok {
        return Err(Error::ReadFailed(format!(
            "{what}: short read ({filled} of {} bytes)",
            bytes.len()
        )));
    }
    let whole = filled / 4;
    NativeEndian::read_f32_into(&bytes[..whole * 4], &mut out[..whole]);
    Ok(())
}

pub(crate) fn write_f32s<W: Write + ?Sized>(w: &mut W, vals: &[f32], what: &str) -> Result<()> {
    let mut bytes = vec![0u8; vals.len() * 4];
    NativeEndian::write_f32_into(vals, &mut bytes);
    w.write_all(&bytes)
        .map_err(|e| Error::WriteFailed(format!("{what}: {e}")))
}

/// Reads one tile into `tile`, discarding both bracketing headers.
///
/// The leading header must be complete. The sample block and trailer
/// tolerate a short read only at end-of-stream: the last physical tile of
/// a file may legitimately be truncated, and its unread cells stay zero
/// (missing) thanks to the pre-read clear.
pub fn read_tile<R: Read + ?Sized>(r: &mut R, tile: &mut TileBuffer) -> Result<()> {
    let mut lead = [0.0f32; LEAD_FLOATS];
    read_f32s(r, &mut lead, false, "tile header")?;
    tile.clear();
    read_f32s(r, tile.samples_mut(), true, "tile samples")?;
    let mut trail = [0.0f32; TRAIL_FLOATS];
    read_f32s(r, &mut trail, true, "tile trailer")?;
    Ok(())
}

/// Writes one tile: leading header, sample block, trailer, in that order.
pub fn write_tile<W: Write + ?Sized>(
    w: &mut W,
    tile: &TileBuffer,
    lead: &TileHeader,
    trail: &TileTrailer,
) -> Result<()> {
    write_f32s(w, &lead.to_floats(), "tile header")?;
    write_f32s(w, tile.samples(), "tile samples")?;
    write_f32s(w, &trail.to_floats(), "tile trailer")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::agc::layout::RECORD_FLOATS;

    #[test]
    fn tile_round_trips_through_a_cursor() {
        let mut tile = TileBuffer::new();
        tile.set(0, 0, 1.5);
        tile.set(39, 39, -2.0);
        tile.set(7, 12, 42.0);

        let mut buf = Vec::new();
        let lead = TileHeader { south: 1.0, record_len: RECORD_FLOATS as f32, ..Default::default() };
        write_tile(&mut buf, &tile, &lead, &TileTrailer::default()).unwrap();
        assert_eq!(buf.len(), RECORD_FLOATS * 4);

        let mut back = TileBuffer::new();
        read_tile(&mut buf.as_slice(), &mut back).unwrap();
        assert_eq!(back.get(0, 0), 1.5);
        assert_eq!(back.get(39, 39), -2.0);
        assert_eq!(back.get(7, 12), 42.0);
        assert_eq!(back.get(1, 1), 0.0);
    }

    #[test]
    fn truncated_final_tile_reads_as_missing() {
        let mut tile = TileBuffer::new();
        tile.set(0, 0, 9.0);
        let mut buf = Vec::new();
        write_tile(&mut buf, &tile, &TileHeader::default(), &TileTrailer::default()).unwrap();
        // Drop the trailer and half the sample block.
        buf.truncate((LEAD_FLOATS + TILE_SAMPLES / 2) * 4);

        let mut back = TileBuffer::new();
        back.set(20, 30, 777.0); // stale scratch content must not survive
        read_tile(&mut buf.as_slice(), &mut back).unwrap();
        assert_eq!(back.get(0, 0), 9.0);
        assert_eq!(back.get(20, 30), 0.0);
    }

    #[test]
    fn short_lead_header_is_an_error() {
        let buf = vec![0u8; (LEAD_FLOATS - 1) * 4];
        let mut tile = TileBuffer::new();
        let err = read_tile(&mut buf.as_slice(), &mut tile).unwrap_err();
        assert!(matches!(err, Error::ReadFailed(_)));
    }
}
