//! I/O layer: the AGC format codec and the path-or-stdio stream helpers.
pub mod agc;
pub mod stream;

pub use agc::{predicted_file_size, probe, read_grid, read_header, write_grid, write_header};
pub use stream::STDIO_TOKEN;
