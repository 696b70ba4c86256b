//! Finding the distance at the edge of a player's reliable range.
//!
//! Block and serial rounds repeat a single region of distances. That region
//! is chosen from graded shot history: the first bucket, in ascending order,
//! whose recent shots show enough misses.

use buckets::{Bucket, BucketSet, Histogram};
use log::debug;

use crate::history::Shot;
use crate::Settings;

/// The region a block or serial round is built around.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BlockBin {
    /// A configured bucket.
    Bucket(Bucket),
    /// A single distance that matched no bucket.
    Distance(u32),
}

impl BlockBin {
    pub fn min(&self) -> u32 {
        match self {
            Self::Bucket(bucket) => bucket.min(),
            Self::Distance(distance) => *distance,
        }
    }

    pub fn mid(&self) -> u32 {
        match self {
            Self::Bucket(bucket) => bucket.mid(),
            Self::Distance(distance) => *distance,
        }
    }

    pub fn max(&self) -> u32 {
        match self {
            Self::Bucket(bucket) => bucket.max(),
            Self::Distance(distance) => *distance,
        }
    }

    /// Returns `(min, mid, max)`. All three are equal for a single distance.
    pub fn spread(&self) -> (u32, u32, u32) {
        (self.min(), self.mid(), self.max())
    }
}

/// Selects block bins from shot history.
#[derive(Copy, Clone, Debug)]
pub struct BlockBinSelector<'a> {
    buckets: &'a BucketSet,
    min_shots: u64,
    miss_rate: f64,
    recent_shots: usize,
}

impl<'a> BlockBinSelector<'a> {
    pub fn new(buckets: &'a BucketSet, settings: &Settings) -> Self {
        Self {
            buckets,
            min_shots: settings.block_min_shots,
            miss_rate: settings.block_miss_rate,
            recent_shots: settings.block_recent_shots,
        }
    }

    /// Select the bin for a block round from graded shots, most recent first.
    ///
    /// Buckets are visited in ascending order. For each bucket the most
    /// recent shots within `min..max` are counted into a histogram over the
    /// bucket set's bin edges, along with the misses among them. The first
    /// bin with enough shots and a high enough miss rate is selected. Bins
    /// with too few shots are skipped. Returns `None` if no bin qualifies.
    pub fn select(&self, shots: &[Shot]) -> Option<BlockBin> {
        let mut totals = Histogram::with_buckets(self.buckets);
        let mut misses = Histogram::with_buckets(self.buckets);

        for bucket in self.buckets {
            totals.clear();
            misses.clear();

            // upper bound is exclusive here, unlike `Bucket::contains`
            let recent = shots
                .iter()
                .filter(|s| bucket.min() <= s.distance && s.distance < bucket.max())
                .take(self.recent_shots);

            for shot in recent {
                if totals.increment(shot.distance).is_ok() && shot.is_miss() {
                    // both histograms share the same edges
                    let _ = misses.increment(shot.distance);
                }
            }

            for (total, missed) in totals.iter().zip(misses.iter()) {
                let count = total.count();
                // an empty bin has no miss rate, even without a minimum
                if count == 0 || count < self.min_shots {
                    continue;
                }

                if (missed.count() as f64 / count as f64) < self.miss_rate {
                    continue;
                }

                if let Some(found) = self.buckets.by_min(total.lower()) {
                    debug!(
                        "block bin {} ({} of {} missed)",
                        found,
                        missed.count(),
                        count
                    );
                    return Some(BlockBin::Bucket(*found));
                }
            }
        }

        debug!("no block bin found in {} graded shots", shots.len());
        None
    }

    /// Select the bin for a serial round from graded shots, most recent
    /// first.
    ///
    /// The most recent shot decides: the bucket whose `min..max` holds its
    /// distance, or the distance itself when no bucket does. Returns `None`
    /// without any graded shots.
    pub fn select_serial(&self, shots: &[Shot]) -> Option<BlockBin> {
        let last = shots.first()?.distance;

        let bin = self
            .buckets
            .iter()
            .rev()
            .find(|b| b.min() <= last && last < b.max())
            .map(|b| BlockBin::Bucket(*b))
            .unwrap_or(BlockBin::Distance(last));

        debug!("serial bin {:?} from last distance {}", bin, last);

        Some(bin)
    }
}
