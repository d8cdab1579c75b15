use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AllocationError, Result};

pub mod bed;
pub mod cell;
pub mod event;
pub mod plant;

/// A zero-based (x, y) position within a bed grid. `x` runs along the bed
/// width, `y` along its length.
///
/// Ordering is by `x` then `y`, which is the order every cell list returned
/// by the engine is sorted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCell {
    pub x: u32,
    pub y: u32,
}

impl GridCell {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// A closed date interval: both `start` and `end` are part of the range.
///
/// Deserializing goes through [`DateRange::new`], so a reversed range is
/// rejected there too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct RawDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = AllocationError;

    fn try_from(raw: RawDateRange) -> Result<Self> {
        Self::new(raw.start, raw.end)
    }
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(AllocationError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A single-day range.
    pub fn day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Closed-interval overlap: ranges sharing only a boundary day overlap.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && self.end >= other.start
    }
}
