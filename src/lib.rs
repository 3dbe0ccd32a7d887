#![doc = r#"
AGCGRID — a codec for the Atlantic Geoscience Centre (AGC) tiled grid format.

This crate converts between an in-memory, padded, row-major raster grid
(geographic bounding box, increments, floating-point samples) and the AGC
binary on-disk format used in geoscience grid processing: fixed 6456-byte
tiles of 40x40 native-endian floats bracketed by 12 leading and 2 trailing
header floats, with exact 0.0 standing in for "no data".

Format notes
------------
- AGC files are always gridline-registered. A pixel-registered grid is
  converted (with a warning) when written; reads never produce pixel
  registration.
- The missing-value convention is lossy: a genuine zero-valued sample is
  indistinguishable from missing data and always reads back as missing.
- The format has no magic number; the prober cross-checks header geometry
  against the physical file size and can in principle false-positive on an
  unrelated file of coincidentally matching size.

Quick start: read a grid
------------------------
```rust,no_run
use std::path::Path;
use agcgrid::{is_agc_grid, read_grid_from_path};

fn main() -> agcgrid::Result<()> {
    let path = Path::new("/data/bathymetry.agc");
    if !is_agc_grid(path)? {
        return Ok(());
    }
    let grid = read_grid_from_path(path, None)?;
    println!(
        "{}x{} grid over {}, z in [{}, {}]",
        grid.header.nx, grid.header.ny, grid.header.region(),
        grid.header.z_min, grid.header.z_max,
    );
    Ok(())
}
```

Write a grid
------------
```rust,no_run
use std::path::Path;
use agcgrid::{Grid, GridHeader, Region, Registration, write_grid_to_path};

fn main() -> agcgrid::Result<()> {
    let region = Region::new(0.0, 10.0, 0.0, 5.0)?;
    let header = GridHeader::new(region, 1.0, 1.0, Registration::Gridline)?;
    let data = vec![1.0f32; header.nx * header.ny]; // north-to-south rows
    let mut grid = Grid::new(header, data)?;
    write_grid_to_path(Path::new("/out/flat.agc"), &mut grid)
}
```

Sub-regions, padding, and complex buffers
-----------------------------------------
The low-level `io::agc` functions accept a sub-region request plus a
`BufferLayout` describing padding margins and an imaginary-part offset for
callers that keep grids inside larger or complex-layout buffers. The path
`=` selects the process standard input/output stream for sequential
whole-grid pipe transfers.

Error handling
--------------
All public functions return `agcgrid::Result<T>`; match on `agcgrid::Error`
to handle specific cases such as `BadValue` (malformed geometry or a file
that is not this format) or `ReadFailed`/`WriteFailed` (short transfers).

Useful modules
--------------
- [`api`] — high-level, owned-buffer entry points.
- [`io`] — the AGC codec (`probe`, header and grid read/write) and stdio
  stream helpers.
- [`core`] — grid header, regions, and window/padding index arithmetic.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::header::{GridHeader, node_count};
pub use crate::core::region::Region;
pub use crate::core::window::{BufferLayout, Padding, WindowIndices, window_indices};
pub use error::{Error, Result};
pub use types::Registration;

// Codec entry points
pub use io::agc::{
    TileHeader, TileTrailer, predicted_file_size, probe, read_grid, read_header, write_grid,
    write_header,
};
pub use io::stream::STDIO_TOKEN;

// High-level API re-exports
pub use api::{Grid, is_agc_grid, read_grid_from_path, write_grid_to_path};
