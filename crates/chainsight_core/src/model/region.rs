//! Sales regions
//!
//! The region set is fixed: every sales record belongs to exactly one of the
//! four regions, and dashboard inputs are parsed against this set at the
//! boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the fixed set of sales regions
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Region {
    #[default]
    North,
    South,
    East,
    West,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::North, Region::South, Region::East, Region::West];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Region::North => 0,
            Region::South => 1,
            Region::East => 2,
            Region::West => 3,
        }
    }

    /// Cycle to the next region in `ALL` order, wrapping around
    #[must_use]
    pub fn next(&self) -> Region {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Cycle to the previous region in `ALL` order, wrapping around
    #[must_use]
    pub fn prev(&self) -> Region {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error produced when parsing a region name fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRegionError(pub String);

impl fmt::Display for ParseRegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown region {:?} (expected North, South, East or West)", self.0)
    }
}

impl std::error::Error for ParseRegionError {}

impl FromStr for Region {
    type Err = ParseRegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "North" => Ok(Region::North),
            "South" => Ok(Region::South),
            "East" => Ok(Region::East),
            "West" => Ok(Region::West),
            other => Err(ParseRegionError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for region in Region::ALL {
            assert_eq!(region.name().parse::<Region>(), Ok(region));
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("Central".parse::<Region>().is_err());
        assert!("north".parse::<Region>().is_err());
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(Region::West.next(), Region::North);
        assert_eq!(Region::North.prev(), Region::West);
    }
}
