//! Geographic bounding box used for grid extents and sub-region requests.
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A west/east/south/north bounding box in grid coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub west: f64,
    pub east: f64,
    pub south: f64,
    pub north: f64,
}

impl Region {
    /// Builds a region, rejecting empty or inverted extents.
    pub fn new(west: f64, east: f64, south: f64, north: f64) -> Result<Self> {
        if !(west < east) {
            return Err(Error::bad_value(format!(
                "west ({west}) must be less than east ({east})"
            )));
        }
        if !(south < north) {
            return Err(Error::bad_value(format!(
                "south ({south}) must be less than north ({north})"
            )));
        }
        Ok(Self { west, east, south, north })
    }

    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// Parses the `west/east/south/north` text form used on the command line.
    pub fn parse(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 4 {
            return Err(Error::bad_value(format!(
                "region `{s}` must have the form west/east/south/north"
            )));
        }
        let mut vals = [0.0f64; 4];
        for (v, part) in vals.iter_mut().zip(&parts) {
            *v = part
                .parse()
                .map_err(|_| Error::bad_value(format!("region `{s}`: `{part}` is not a number")))?;
        }
        Region::new(vals[0], vals[1], vals[2], vals[3])
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Region::parse(s)
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}/{}", self.west, self.east, self.south, self.north)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_extents() {
        assert!(Region::new(10.0, 0.0, 0.0, 5.0).is_err());
        assert!(Region::new(0.0, 10.0, 5.0, 5.0).is_err());
    }

    #[test]
    fn parses_slash_form() {
        let r = Region::parse("-10/10.5/0/45").unwrap();
        assert_eq!(r, Region { west: -10.0, east: 10.5, south: 0.0, north: 45.0 });
        assert!(Region::parse("0/10/0").is_err());
        assert!(Region::parse("0/10/zero/5").is_err());
    }
}
