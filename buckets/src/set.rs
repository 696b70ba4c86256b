//! An ordered, validated collection of buckets for one distance mode.

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::{Bucket, Error};

/// The unit a bucket set is measured in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-serialize", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Full swing distances, in yards.
    Yard,
    /// Putting distances, in feet.
    Feet,
}

impl core::fmt::Display for Mode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Yard => write!(f, "yard"),
            Self::Feet => write!(f, "feet"),
        }
    }
}

/// A non-empty set of buckets sorted ascending by `min`, where no two
/// buckets overlap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BucketSet {
    mode: Mode,
    buckets: Box<[Bucket]>,
}

impl BucketSet {
    /// Validate and construct a bucket set. The buckets may be provided in
    /// any order.
    ///
    /// # Constraints:
    /// * there must be at least one bucket
    /// * no `(min, max)` pair may appear twice
    /// * no two buckets may share a distance
    pub fn new(mode: Mode, mut buckets: Vec<Bucket>) -> Result<Self, Error> {
        if buckets.is_empty() {
            return Err(Error::Empty);
        }

        buckets.sort_by_key(|b| (b.min, b.max));

        for pair in buckets.windows(2) {
            let (lower, upper) = (pair[0], pair[1]);

            if lower.min == upper.min && lower.max == upper.max {
                return Err(Error::Duplicate {
                    min: lower.min,
                    max: lower.max,
                });
            }

            if upper.min <= lower.max {
                return Err(Error::Overlap {
                    lower: (lower.min, lower.max),
                    upper: (upper.min, upper.max),
                });
            }
        }

        Ok(Self {
            mode,
            buckets: buckets.into_boxed_slice(),
        })
    }

    /// Returns the distance mode for this set.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the number of buckets in the set.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// A validated set always holds at least one bucket.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn as_slice(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Bucket> {
        self.buckets.iter()
    }

    /// Returns the first bucket whose closed range contains the distance.
    pub fn find(&self, distance: u32) -> Option<&Bucket> {
        self.buckets.iter().find(|b| b.contains(distance))
    }

    /// Returns the bucket starting at exactly `min`.
    pub fn by_min(&self, min: u32) -> Option<&Bucket> {
        self.buckets.iter().find(|b| b.min == min)
    }

    /// Returns the buckets which end at or below `cutoff`, in ascending order.
    pub fn at_most(&self, cutoff: u32) -> impl Iterator<Item = &Bucket> {
        self.buckets.iter().filter(move |b| b.max <= cutoff)
    }

    /// Returns the histogram bin edges for this set: each bucket's `min` in
    /// ascending order followed by the last bucket's `max`.
    pub fn histogram_bins(&self) -> Vec<u32> {
        let mut bins: Vec<u32> = self.buckets.iter().map(|b| b.min).collect();
        if let Some(last) = self.buckets.last() {
            bins.push(last.max);
        }
        bins
    }

    /// Returns the expected number of picks for each bucket out of
    /// `pick_count`, based on its configured percent.
    pub fn quotas(&self, pick_count: usize) -> Vec<usize> {
        self.buckets.iter().map(|b| b.quota(pick_count, 0)).collect()
    }
}

impl<'a> IntoIterator for &'a BucketSet {
    type Item = &'a Bucket;
    type IntoIter = core::slice::Iter<'a, Bucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}
