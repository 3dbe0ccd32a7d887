//! The AGC tiled binary grid format.
//!
//! An AGC file is a sequence of fixed 6456-byte tiles: 12 leading header
//! floats, a 40x40 sample block, and 2 trailing floats, all native-endian
//! 4-byte floats. Samples are stored south-to-north; exact 0.0 means
//! "no data". Tiles run tile-row fastest within ascending tile-column.
pub mod codec;
pub mod layout;
pub mod probe;
pub mod tile;

pub use codec::{read_grid, read_header, write_grid, write_header};
pub use layout::{TileHeader, TileTrailer};
pub use probe::{predicted_file_size, probe};
