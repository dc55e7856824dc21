//! Hash slot ranges.
//!
//! The key space is split into a fixed number of slots; each primary owns a
//! set of inclusive slot intervals.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of hash slots in the key space.
pub const SLOT_COUNT: u16 = 16384;

/// Inclusive interval of hash slots, `start..=end`.
///
/// # Invariants
///
/// - `start <= end`
/// - `end < SLOT_COUNT`
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct SlotRange {
    pub start: u16,
    pub end: u16,
}

impl SlotRange {
    pub fn new(start: u16, end: u16) -> Result<Self> {
        if start > end || end >= SLOT_COUNT {
            return Err(Error::InvalidSlotRange(format!("{}-{}", start, end)));
        }
        Ok(Self { start, end })
    }

    pub fn single(slot: u16) -> Result<Self> {
        Self::new(slot, slot)
    }
}

impl FromStr for SlotRange {
    type Err = Error;

    /// Parses `a-b` or a single slot `a`.
    fn from_str(s: &str) -> Result<Self> {
        let parse = |v: &str| {
            v.parse::<u16>()
                .map_err(|_| Error::InvalidSlotRange(s.to_string()))
        };
        match s.split_once('-') {
            Some((start, end)) => Self::new(parse(start)?, parse(end)?),
            None => Self::single(parse(s)?),
        }
    }
}

impl fmt::Display for SlotRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}
