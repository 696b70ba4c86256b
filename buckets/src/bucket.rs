//! Buckets represent a contiguous range of target distances and the share of
//! picks that range should receive.

#[cfg(feature = "serde-serialize")]
use serde::Serialize;

use crate::Error;
use core::ops::RangeInclusive;

/// A bucket is an inclusive distance range with a target share (percent) of
/// the picks in a practice round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize))]
pub struct Bucket {
    pub(crate) min: u32,
    pub(crate) max: u32,
    pub(crate) percent: u32,
}

impl Bucket {
    /// Create a new bucket covering `min..=max`.
    ///
    /// # Constraints:
    /// * `min` must be less than or equal to `max`
    /// * `percent` must be in the range `0..=100`
    pub fn new(min: u32, max: u32, percent: u32) -> Result<Self, Error> {
        if min > max {
            return Err(Error::InvertedRange { min, max });
        }

        if percent > 100 {
            return Err(Error::InvalidPercent(percent));
        }

        Ok(Self { min, max, percent })
    }

    /// Returns the inclusive lower bound for the bucket.
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Returns the inclusive upper bound for the bucket.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Returns the target share of picks for this bucket, in percent.
    pub fn percent(&self) -> u32 {
        self.percent
    }

    /// Returns the midpoint of the bucket, rounded towards `min`.
    pub fn mid(&self) -> u32 {
        self.min + (self.max - self.min) / 2
    }

    /// Returns the range for the bucket.
    pub fn range(&self) -> RangeInclusive<u32> {
        self.min..=self.max
    }

    /// Returns true if the distance falls within `min..=max`.
    pub fn contains(&self, distance: u32) -> bool {
        self.min <= distance && distance <= self.max
    }

    /// Returns the range of distances that remain eligible once every
    /// distance above `max_limit` is discarded. `None` means the entire
    /// bucket lies above the limit.
    pub fn clipped(&self, max_limit: Option<u32>) -> Option<RangeInclusive<u32>> {
        match max_limit {
            None => Some(self.range()),
            Some(limit) if self.min > limit => None,
            Some(limit) => Some(self.min..=self.max.min(limit)),
        }
    }

    /// Returns the number of picks this bucket should receive out of
    /// `pick_count`, after adding `bonus` percentage points to its share.
    pub fn quota(&self, pick_count: usize, bonus: u32) -> usize {
        share_of(pick_count, self.percent.saturating_add(bonus))
    }
}

impl core::fmt::Display for Bucket {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ~ {}", self.min, self.max)
    }
}

/// Returns `round(total * percent / 100)` with ties rounded to the nearest
/// even integer.
pub fn share_of(total: usize, percent: u32) -> usize {
    let scaled = total.saturating_mul(percent as usize);
    let quotient = scaled / 100;
    let remainder = scaled % 100;

    match remainder {
        0..=49 => quotient,
        50 => quotient + (quotient & 1),
        _ => quotient + 1,
    }
}
