//! Wargame hexagon labels.
//!
//! Printed maps label each hexagon with a column/row code such as `0102`:
//! the last two digits are the row, everything before them the column.
//! Columns step 4 in x and rows step 2 in y, with even rows shifted half a
//! hexagon to the right.

use std::fmt;
use std::str::FromStr;

use crate::classify::require_center;
use crate::error::{Error, Result};
use crate::GridPoint;

/// Rows are printed with exactly two digits.
pub const MAX_ROW: u32 = 99;

/// A hexagon label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexagonName {
    pub column: u32,
    pub row: u32,
}

impl HexagonName {
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Center of the labelled hexagon.
    pub const fn to_point(&self) -> GridPoint {
        let y = 2 * (self.row as i64 + 1);
        let mut x = 4 * self.column as i64;
        if self.row % 2 == 0 {
            x += 2;
        }
        GridPoint::new(x, y)
    }

    /// Label of a hexagon center.
    ///
    /// # Errors
    ///
    /// [`Error::NotAHexagon`] / [`Error::InvalidPoint`] if `point` is not a
    /// center, [`Error::Unnameable`] if it lies left of column 0, above
    /// row 0 or below row [`MAX_ROW`].
    pub fn from_point(point: GridPoint) -> Result<Self> {
        let (x, y) = require_center(point)?
            .integral()
            .ok_or(Error::InvalidPoint(point))?;
        let row = y / 2 - 1;
        let column = x.div_euclid(4);
        if column < 0 || row < 0 || row > MAX_ROW as i64 || column > u32::MAX as i64 {
            return Err(Error::Unnameable(point));
        }
        Ok(Self {
            column: column as u32,
            row: row as u32,
        })
    }
}

impl FromStr for HexagonName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason| Error::InvalidName {
            name: s.to_string(),
            reason,
        };
        if s.len() < 4 {
            return Err(invalid("expected at least four digits"));
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected only ASCII digits"));
        }
        let (column, row) = s.split_at(s.len() - 2);
        let column = column
            .parse::<u32>()
            .map_err(|_| invalid("column out of range"))?;
        let row = row.parse::<u32>().map_err(|_| invalid("row out of range"))?;
        Ok(Self { column, row })
    }
}

impl fmt::Display for HexagonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.column, self.row)
    }
}
