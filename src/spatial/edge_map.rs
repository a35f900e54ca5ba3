//! Sparse wall priorities keyed by cell boundary
//!
//! Keys use the textual form `"{row}-{col}-top"` and `"{row}-{col}-left"`.
//! A `top` key names the boundary between `(row - 1, col)` and `(row, col)`,
//! a `left` key the boundary between `(row, col - 1)` and `(row, col)`.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::io::error::{MazeError, invalid_parameter};
use crate::spatial::maze::Point;

/// Which boundary of a cell an edge key refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EdgeSide {
    /// Boundary with the cell above
    Top,
    /// Boundary with the cell to the left
    Left,
}

/// Identifies one boundary of the grid by cell and side
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeKey {
    /// Row of the cell owning the boundary
    pub row: usize,
    /// Column of the cell owning the boundary
    pub col: usize,
    /// Side of the cell
    pub side: EdgeSide,
}

impl EdgeKey {
    /// Key for the boundary above `(row, col)`
    pub const fn top(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            side: EdgeSide::Top,
        }
    }

    /// Key for the boundary left of `(row, col)`
    pub const fn left(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            side: EdgeSide::Left,
        }
    }

    /// Key of the boundary between two adjacent cells, if they are adjacent
    pub const fn between(a: Point, b: Point) -> Option<Self> {
        let (first, second) = if a[0] < b[0] || (a[0] == b[0] && a[1] < b[1]) {
            (a, b)
        } else {
            (b, a)
        };

        if first[1] == second[1] && first[0] + 1 == second[0] {
            Some(Self::top(second[0], second[1]))
        } else if first[0] == second[0] && first[1] + 1 == second[1] {
            Some(Self::left(second[0], second[1]))
        } else {
            None
        }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = match self.side {
            EdgeSide::Top => "top",
            EdgeSide::Left => "left",
        };
        write!(f, "{}-{}-{side}", self.row, self.col)
    }
}

impl FromStr for EdgeKey {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || invalid_parameter("edge key", &s, &"expected '<row>-<col>-<top|left>'");

        let mut parts = s.splitn(3, '-');
        let row = parts
            .next()
            .and_then(|part| part.parse().ok())
            .ok_or_else(malformed)?;
        let col = parts
            .next()
            .and_then(|part| part.parse().ok())
            .ok_or_else(malformed)?;
        let side = match parts.next() {
            Some("top") => EdgeSide::Top,
            Some("left") => EdgeSide::Left,
            _ => return Err(malformed()),
        };

        Ok(Self { row, col, side })
    }
}

impl Serialize for EdgeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EdgeKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Sparse mapping from grid boundary to wall priority
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeWeights {
    entries: BTreeMap<EdgeKey, u32>,
}

impl EdgeWeights {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the priority of a boundary, returning any previous value
    pub fn insert(&mut self, key: EdgeKey, weight: u32) -> Option<u32> {
        self.entries.insert(key, weight)
    }

    /// Priority of a boundary, if one was recorded
    pub fn get(&self, key: &EdgeKey) -> Option<u32> {
        self.entries.get(key).copied()
    }

    /// Priority of the boundary between two adjacent cells
    pub fn between(&self, a: Point, b: Point) -> Option<u32> {
        EdgeKey::between(a, b).and_then(|key| self.get(&key))
    }

    /// Number of recorded boundaries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no boundary has a recorded priority
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&EdgeKey, &u32)> {
        self.entries.iter()
    }
}

impl FromIterator<(EdgeKey, u32)> for EdgeWeights {
    fn from_iter<I: IntoIterator<Item = (EdgeKey, u32)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
