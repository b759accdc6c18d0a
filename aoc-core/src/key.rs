//! Puzzle identity

use std::fmt;

/// Identifies one puzzle: an Advent of Code year and day
///
/// Ordered by year, then day, so sorted keys come out in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey {
    pub year: u16,
    pub day: u8,
}

impl DayKey {
    pub const fn new(year: u16, day: u8) -> Self {
        Self { year, day }
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:02}", self.year, self.day)
    }
}
