//! End-to-end tests of the AGC codec against real files on disk.
use std::fs;
use std::path::{Path, PathBuf};

use agcgrid::{
    BufferLayout, Error, Grid, GridHeader, Padding, Region, Registration, is_agc_grid,
    predicted_file_size, probe, read_grid, read_grid_from_path, read_header, write_grid,
    write_grid_to_path, write_header,
};
use tempfile::TempDir;

/// Axis extent giving `n` gridline nodes at unit spacing. A single node
/// needs a sub-cell extent since west < east is required.
fn extent(n: usize) -> f64 {
    if n == 1 { 0.4 } else { (n - 1) as f64 }
}

fn header(nx: usize, ny: usize) -> GridHeader {
    let region = Region::new(0.0, extent(nx), 0.0, extent(ny)).unwrap();
    let h = GridHeader::new(region, 1.0, 1.0, Registration::Gridline).unwrap();
    assert_eq!((h.nx, h.ny), (nx, ny));
    h
}

/// Deterministic non-zero sample for in-memory row/col (row 0 = north).
fn val(row: usize, col: usize) -> f32 {
    (row * 131 + col) as f32 * 0.25 + 1.0
}

fn filled_grid(nx: usize, ny: usize) -> Grid {
    let h = header(nx, ny);
    let data: Vec<f32> = (0..ny).flat_map(|r| (0..nx).map(move |c| val(r, c))).collect();
    Grid::new(h, data).unwrap()
}

fn write_to(dir: &TempDir, name: &str, grid: &mut Grid) -> PathBuf {
    let path = dir.path().join(name);
    write_grid_to_path(&path, grid).unwrap();
    path
}

#[test]
fn round_trip_preserves_geometry_and_samples() {
    let dir = TempDir::new().unwrap();
    let mut grid = filled_grid(100, 57);
    let path = write_to(&dir, "g.agc", &mut grid);

    let back = read_grid_from_path(&path, None).unwrap();
    assert_eq!(back.header.region(), grid.header.region());
    assert_eq!((back.header.dx, back.header.dy), (1.0, 1.0));
    assert_eq!((back.header.nx, back.header.ny), (100, 57));
    assert_eq!(back.header.registration, Registration::Gridline);
    assert!(!back.header.has_missing);
    for row in 0..57 {
        for col in 0..100 {
            assert_eq!(back.value(row, col), val(row, col), "({row},{col})");
        }
    }
}

#[test]
fn statistics_cover_exactly_the_non_missing_samples() {
    let dir = TempDir::new().unwrap();
    let mut grid = filled_grid(50, 30);
    grid.data[17] = f32::NAN;
    let path = write_to(&dir, "g.agc", &mut grid);

    // Write-side stats: min is val(0,0)=1.0 but index 17 is missing;
    // val(0,17) was not the minimum, so min/max are unaffected by it.
    assert_eq!(grid.header.z_min, 1.0);
    assert_eq!(grid.header.z_max, val(29, 49) as f64);
    assert!(grid.header.has_missing);

    let back = read_grid_from_path(&path, None).unwrap();
    assert_eq!(back.header.z_min, 1.0);
    assert_eq!(back.header.z_max, val(29, 49) as f64);
    assert!(back.header.has_missing);
}

#[test]
fn missing_value_round_trip_is_idempotent_and_non_destructive() {
    let dir = TempDir::new().unwrap();
    let mut grid = filled_grid(45, 12);
    let missing = 3 * 45 + 4;
    grid.data[missing] = f32::NAN;
    let snapshot = grid.data.clone();
    let path = write_to(&dir, "g.agc", &mut grid);

    // The caller's buffer is not rewritten by serialization.
    assert!(grid.data[missing].is_nan());
    for (i, (a, b)) in grid.data.iter().zip(&snapshot).enumerate() {
        if i != missing {
            assert_eq!(a, b);
        }
    }

    let back = read_grid_from_path(&path, None).unwrap();
    assert!(back.header.has_missing);
    for (i, v) in back.data.iter().enumerate() {
        assert_eq!(v.is_nan(), i == missing, "index {i}");
    }
}

#[test]
fn genuine_zero_reads_back_as_missing() {
    let dir = TempDir::new().unwrap();
    let mut grid = filled_grid(10, 10);
    grid.data[55] = 0.0;
    let path = write_to(&dir, "g.agc", &mut grid);

    let back = read_grid_from_path(&path, None).unwrap();
    assert!(back.data[55].is_nan());
    assert!(back.header.has_missing);
}

#[test]
fn file_size_matches_prediction_across_tile_boundaries() {
    let dir = TempDir::new().unwrap();
    for (nx, ny) in [(1, 100), (39, 80), (40, 40), (41, 79), (79, 41), (80, 39), (100, 1), (1, 1)] {
        let mut grid = filled_grid(nx, ny);
        let path = write_to(&dir, &format!("g_{nx}x{ny}.agc"), &mut grid);
        let size = fs::metadata(&path).unwrap().len();
        assert_eq!(size, predicted_file_size(nx, ny), "{nx}x{ny}");
        assert!(is_agc_grid(&path).unwrap(), "{nx}x{ny}");
    }
}

#[test]
fn edge_tiles_are_zero_filled_beyond_the_extent() {
    let dir = TempDir::new().unwrap();
    let mut grid = filled_grid(41, 41);
    let path = write_to(&dir, "g.agc", &mut grid);

    // 2x2 tiles; the last tile (tile-col 1, tile-row 1) holds only the
    // physical cell (row 40, col 40) = in-memory (0, 40).
    let bytes = fs::read(&path).unwrap();
    let tile_base = 3 * 6456 + 12 * 4;
    let cell = |row: usize, col: usize| {
        let off = tile_base + (col * 40 + row) * 4;
        f32::from_ne_bytes(bytes[off..off + 4].try_into().unwrap())
    };
    assert_eq!(cell(0, 0), val(0, 40));
    assert_eq!(cell(1, 0), 0.0);
    assert_eq!(cell(0, 1), 0.0);
    assert_eq!(cell(39, 39), 0.0);

    // Interior cells are unaffected by the edge padding.
    let back = read_grid_from_path(&path, None).unwrap();
    for row in 0..41 {
        for col in 0..41 {
            assert_eq!(back.value(row, col), val(row, col));
        }
    }
}

#[test]
fn pixel_registration_is_normalized_on_write() {
    let dir = TempDir::new().unwrap();
    let region = Region::new(0.0, 10.0, 0.0, 10.0).unwrap();
    let h = GridHeader::new(region, 1.0, 1.0, Registration::Pixel).unwrap();
    assert_eq!((h.nx, h.ny), (10, 10));
    let data = vec![5.0f32; 100];
    let mut grid = Grid::new(h, data).unwrap();
    let path = write_to(&dir, "g.agc", &mut grid);

    assert_eq!(grid.header.registration, Registration::Gridline);
    assert_eq!(grid.header.region(), Region::new(0.5, 9.5, 0.5, 9.5).unwrap());

    let back = read_grid_from_path(&path, None).unwrap();
    assert_eq!(back.header.registration, Registration::Gridline);
    assert_eq!(back.header.region(), Region::new(0.5, 9.5, 0.5, 9.5).unwrap());
    assert_eq!((back.header.nx, back.header.ny), (10, 10));
}

#[test]
fn probe_rejects_truncated_and_inverted_files() {
    let dir = TempDir::new().unwrap();
    let mut grid = filled_grid(80, 80);
    let path = write_to(&dir, "g.agc", &mut grid);
    assert!(is_agc_grid(&path).unwrap());

    // One byte short of the predicted size.
    let truncated = dir.path().join("short.agc");
    let mut bytes = fs::read(&path).unwrap();
    bytes.pop();
    fs::write(&truncated, &bytes).unwrap();
    assert!(!is_agc_grid(&truncated).unwrap());

    // south >= north fails before any size comparison.
    let inverted = dir.path().join("inverted.agc");
    let mut bytes = fs::read(&path).unwrap();
    bytes[0..4].copy_from_slice(&5.0f32.to_ne_bytes()); // south
    bytes[4..8].copy_from_slice(&1.0f32.to_ne_bytes()); // north
    fs::write(&inverted, &bytes).unwrap();
    match probe(&inverted) {
        Err(Error::BadValue(msg)) => assert!(msg.contains("south"), "{msg}"),
        other => panic!("expected BadValue, got {other:?}"),
    }

    // Arbitrary junk long enough to decode a first record; its constant
    // bytes give south == north, a geometry rejection.
    let junk = dir.path().join("junk.bin");
    fs::write(&junk, vec![1u8; 7000]).unwrap();
    assert!(!is_agc_grid(&junk).unwrap());

    // A file shorter than one record is an I/O failure, not a rejection.
    let stub = dir.path().join("stub.bin");
    fs::write(&stub, vec![1u8; 1000]).unwrap();
    assert!(matches!(probe(&stub), Err(Error::ReadFailed(_))));
}

#[test]
fn probe_rejects_the_pipe_token() {
    assert!(matches!(probe(Path::new("=")), Err(Error::UnsupportedStream(_))));
}

#[test]
fn sub_region_read_with_padding_and_complex_offset() {
    let dir = TempDir::new().unwrap();
    let mut grid = filled_grid(100, 57);
    let path = write_to(&dir, "g.agc", &mut grid);

    let request = Region::new(10.0, 20.0, 5.0, 15.0).unwrap();
    let layout = BufferLayout {
        pad: Padding { west: 2, east: 1, south: 1, north: 3 },
        imag_offset: 10,
    };
    let (width, height) = (11, 11);
    let row_width = layout.row_width(width);
    let mut data = vec![-9.0f32; layout.required_len(width, height)];

    let mut h = read_header(&path).unwrap();
    read_grid(&path, &mut h, &mut data, Some(&request), &layout).unwrap();

    assert_eq!(h.region(), request);
    assert_eq!((h.nx, h.ny), (width, height));
    // Window row 0 is the grid's in-memory row 41 (north edge at y=15).
    for r in 0..height {
        for c in 0..width {
            let ij = layout.imag_offset + (r + layout.pad.north) * row_width + c + layout.pad.west;
            assert_eq!(data[ij], val(41 + r, 10 + c), "({r},{c})");
        }
    }
    // Padding margins and the pre-window area stay untouched.
    assert_eq!(data[0], -9.0);
    assert_eq!(data[layout.imag_offset + 1], -9.0);
}

#[test]
fn sub_region_write_produces_a_self_contained_grid() {
    let dir = TempDir::new().unwrap();
    let full = header(100, 57);
    let request = Region::new(10.0, 20.0, 5.0, 15.0).unwrap();
    // Caller's buffer holds just the window: 11x11, rows north-to-south.
    let data: Vec<f32> = (0..11).flat_map(|r| (0..11).map(move |c| val(41 + r, 10 + c))).collect();

    let path = dir.path().join("window.agc");
    let mut h = full;
    write_grid(&path, &mut h, &data, Some(&request), &BufferLayout::default()).unwrap();
    assert_eq!(h.region(), request);
    assert_eq!((h.nx, h.ny), (11, 11));

    assert!(is_agc_grid(&path).unwrap());
    let back = read_grid_from_path(&path, None).unwrap();
    assert_eq!(back.header.region(), request);
    for r in 0..11 {
        for c in 0..11 {
            assert_eq!(back.value(r, c), val(41 + r, 10 + c));
        }
    }
}

#[test]
fn write_header_updates_in_place() {
    let dir = TempDir::new().unwrap();
    let mut grid = filled_grid(60, 45);
    let path = write_to(&dir, "g.agc", &mut grid);
    let size_before = fs::metadata(&path).unwrap().len();

    // Shift the extent east by one cell; node counts are unchanged.
    let shifted = Region::new(1.0, 60.0, 0.0, 44.0).unwrap();
    let new_header = GridHeader::new(shifted, 1.0, 1.0, Registration::Gridline).unwrap();
    write_header(&path, &new_header).unwrap();

    assert_eq!(fs::metadata(&path).unwrap().len(), size_before);
    let back = read_header(&path).unwrap();
    assert_eq!(back.region(), shifted);
    assert_eq!((back.nx, back.ny), (60, 45));
    assert!(is_agc_grid(&path).unwrap());

    // Body tiles were not touched.
    let body = read_grid_from_path(&path, None).unwrap();
    assert_eq!(body.value(3, 4), val(3, 4));
}

#[test]
fn write_header_rejects_the_pipe_token() {
    let h = header(10, 10);
    assert!(matches!(
        write_header(Path::new("="), &h),
        Err(Error::UnsupportedStream(_))
    ));
}

#[test]
fn read_header_echoes_auxiliary_floats_into_the_remark() {
    let dir = TempDir::new().unwrap();
    let mut grid = filled_grid(20, 20);
    let path = write_to(&dir, "g.agc", &mut grid);

    let h = read_header(&path).unwrap();
    assert!(h.remark.starts_with("agchd:"));
    // Echoed block is zeroed on write; the record length survives.
    assert!(h.remark.contains("1614.000000"));
}

#[test]
fn undersized_buffer_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut grid = filled_grid(20, 20);
    let path = write_to(&dir, "g.agc", &mut grid);

    let mut h = read_header(&path).unwrap();
    let mut data = vec![0.0f32; 10];
    assert!(matches!(
        read_grid(&path, &mut h, &mut data, None, &BufferLayout::default()),
        Err(Error::BadValue(_))
    ));
}

#[test]
fn open_failures_carry_the_path() {
    let missing = Path::new("/no/such/grid.agc");
    match read_header(missing) {
        Err(Error::OpenFailed { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected OpenFailed, got {other:?}"),
    }
    assert!(matches!(probe(missing), Err(Error::StatFailed { .. })));
}
