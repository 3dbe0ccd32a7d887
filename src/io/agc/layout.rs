//! Fixed binary layout of the AGC format: tile geometry constants, the
//! leading/trailing tile headers as named-field structs, and the remark
//! string that echoes auxiliary header floats as fixed-width text.
use crate::core::header::GridHeader;

/// Samples per tile row and column.
pub const TILE_WIDTH: usize = 40;
pub const TILE_HEIGHT: usize = 40;
pub const TILE_SAMPLES: usize = TILE_WIDTH * TILE_HEIGHT;

/// Floats bracketing the sample block of every tile.
pub const LEAD_FLOATS: usize = 12;
pub const TRAIL_FLOATS: usize = 2;

/// One whole tile, in floats and in bytes (1614 floats, 6456 bytes).
pub const RECORD_FLOATS: usize = TILE_SAMPLES + LEAD_FLOATS + TRAIL_FLOATS;
pub const RECORD_BYTES: u64 = (RECORD_FLOATS * 4) as u64;

/// Marker prefixing the remark echo of the auxiliary header floats.
pub const REMARK_MARKER: &str = "agchd:";
/// Column width of each float rendered into the remark string.
const REMARK_FIELD_WIDTH: usize = 19;

/// The 12-float leading tile header. Byte offsets within the 48-byte block:
///
/// | offset | field                        |
/// |--------|------------------------------|
/// | 0      | south                        |
/// | 4      | north                        |
/// | 8      | west                         |
/// | 12     | east                         |
/// | 16     | dy                           |
/// | 20     | dx                           |
/// | 24..44 | echoed (5 reserved floats)   |
/// | 44     | record_len (always 1614.0)   |
///
/// Only the first tile's header carries live geometry; the codec emits the
/// same header on every tile of one file.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TileHeader {
    pub south: f32,
    pub north: f32,
    pub west: f32,
    pub east: f32,
    pub dy: f32,
    pub dx: f32,
    pub echoed: [f32; 5],
    pub record_len: f32,
}

impl TileHeader {
    /// Packs a grid header: geometry from the grid, echoed floats zeroed,
    /// record length set to the format constant.
    pub fn for_grid(h: &GridHeader) -> Self {
        TileHeader {
            south: h.south as f32,
            north: h.north as f32,
            west: h.west as f32,
            east: h.east as f32,
            dy: h.dy as f32,
            dx: h.dx as f32,
            echoed: [0.0; 5],
            record_len: RECORD_FLOATS as f32,
        }
    }

    /// Decodes the first [`LEAD_FLOATS`] entries of `raw`.
    pub fn from_floats(raw: &[f32]) -> Self {
        debug_assert!(raw.len() >= LEAD_FLOATS);
        TileHeader {
            south: raw[0],
            north: raw[1],
            west: raw[2],
            east: raw[3],
            dy: raw[4],
            dx: raw[5],
            echoed: [raw[6], raw[7], raw[8], raw[9], raw[10]],
            record_len: raw[11],
        }
    }

    pub fn to_floats(&self) -> [f32; LEAD_FLOATS] {
        let mut out = [0.0f32; LEAD_FLOATS];
        out[0] = self.south;
        out[1] = self.north;
        out[2] = self.west;
        out[3] = self.east;
        out[4] = self.dy;
        out[5] = self.dx;
        out[6..11].copy_from_slice(&self.echoed);
        out[11] = self.record_len;
        out
    }
}

/// The 2-float trailing tile header, conventionally zero.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TileTrailer {
    pub reserved: [f32; TRAIL_FLOATS],
}

impl TileTrailer {
    pub fn from_floats(raw: &[f32]) -> Self {
        debug_assert!(raw.len() >= TRAIL_FLOATS);
        TileTrailer { reserved: [raw[0], raw[1]] }
    }

    pub fn to_floats(&self) -> [f32; TRAIL_FLOATS] {
        self.reserved
    }
}

/// Renders the 8 auxiliary header floats (echoed block, record length,
/// trailer) as the `agchd:` remark string: each float in decimal text,
/// right-padded with spaces to a fixed column, no separators. Purely a
/// best-effort round-trip of opaque metadata.
pub fn encode_remark(lead: &TileHeader, trail: &TileTrailer) -> String {
    let mut values = [0.0f32; 8];
    values[..5].copy_from_slice(&lead.echoed);
    values[5] = lead.record_len;
    values[6] = trail.reserved[0];
    values[7] = trail.reserved[1];

    let mut remark = String::from(REMARK_MARKER);
    for v in values {
        let mut field = format!("{v:.6}");
        while field.len() < REMARK_FIELD_WIDTH {
            field.push(' ');
        }
        remark.push_str(&field);
    }
    remark
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::region::Region;
    use crate::types::Registration;

    #[test]
    fn record_geometry_constants() {
        assert_eq!(RECORD_FLOATS, 1614);
        assert_eq!(RECORD_BYTES, 6456);
    }

    #[test]
    fn header_float_positions() {
        let r = Region::new(-10.0, 20.0, -5.0, 5.0).unwrap();
        let h = GridHeader::new(r, 0.5, 0.25, Registration::Gridline).unwrap();
        let lead = TileHeader::for_grid(&h);
        let raw = lead.to_floats();
        assert_eq!(raw[0], -5.0); // south
        assert_eq!(raw[1], 5.0); // north
        assert_eq!(raw[2], -10.0); // west
        assert_eq!(raw[3], 20.0); // east
        assert_eq!(raw[4], 0.25); // dy
        assert_eq!(raw[5], 0.5); // dx
        assert_eq!(&raw[6..11], &[0.0; 5]);
        assert_eq!(raw[11], 1614.0);
        assert_eq!(TileHeader::from_floats(&raw), lead);
    }

    #[test]
    fn remark_is_marker_plus_eight_padded_fields() {
        let lead = TileHeader {
            echoed: [1.0, 2.5, 0.0, 0.0, 0.0],
            record_len: 1614.0,
            ..Default::default()
        };
        let trail = TileTrailer::default();
        let remark = encode_remark(&lead, &trail);
        assert!(remark.starts_with("agchd:"));
        assert_eq!(remark.len(), REMARK_MARKER.len() + 8 * 19);
        assert_eq!(&remark[6..25], "1.000000           ");
        assert_eq!(&remark[25..44], "2.500000           ");
        assert_eq!(&remark[6 + 5 * 19..6 + 6 * 19], "1614.000000        ");
    }
}
