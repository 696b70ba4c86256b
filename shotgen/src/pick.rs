//! Per-bucket distance picking.

use buckets::Bucket;
use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;

/// The distances a single bucket proposes for a round.
///
/// Proposals are consumed as a stack: [`Picks::pop`] yields every unseen
/// distance before it falls back to distances already seen this session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Picks {
    picked: Vec<u32>,
    shortfall: bool,
}

impl Picks {
    /// Returns true if the bucket could not fill its quota.
    pub fn is_short(&self) -> bool {
        self.shortfall
    }

    pub fn len(&self) -> usize {
        self.picked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picked.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.picked
    }

    pub fn pop(&mut self) -> Option<u32> {
        self.picked.pop()
    }

    pub fn into_vec(self) -> Vec<u32> {
        self.picked
    }
}

impl From<Vec<u32>> for Picks {
    fn from(picked: Vec<u32>) -> Self {
        Self {
            picked,
            shortfall: false,
        }
    }
}

/// Distance picking for a bucket.
pub trait PickDistances {
    /// Pick up to `quota` distinct distances from this bucket, preferring
    /// distances that are not in `excluded`. Distances above `max_limit` are
    /// never picked.
    ///
    /// When fewer than `quota` unseen distances remain, all of them are
    /// returned along with randomly chosen excluded distances from the
    /// bucket, until the quota is met or the bucket is exhausted.
    fn pick_distances<R: Rng + ?Sized>(
        &self,
        excluded: &BTreeSet<u32>,
        quota: usize,
        max_limit: Option<u32>,
        rng: &mut R,
    ) -> Picks;
}

impl PickDistances for Bucket {
    fn pick_distances<R: Rng + ?Sized>(
        &self,
        excluded: &BTreeSet<u32>,
        quota: usize,
        max_limit: Option<u32>,
        rng: &mut R,
    ) -> Picks {
        let pool = match self.clipped(max_limit) {
            Some(pool) => pool,
            None => {
                trace!("bucket {} lies above the limit {:?}", self, max_limit);
                return Picks {
                    picked: Vec::new(),
                    shortfall: quota > 0,
                };
            }
        };

        let (mut preferred, seen): (Vec<u32>, Vec<u32>) =
            pool.partition(|d| !excluded.contains(d));

        let unseen = preferred.len();

        let picked = if unseen >= quota {
            crate::rng::choose(rng, &preferred, quota)
        } else {
            // the stack is popped from the back, so unseen distances go last
            let mut picked = crate::rng::choose(rng, &seen, quota - unseen);
            preferred.shuffle(rng);
            picked.extend(preferred);
            picked
        };

        trace!(
            "bucket {} picked {} of {} ({} unseen available)",
            self,
            picked.len(),
            quota,
            unseen
        );

        Picks {
            shortfall: picked.len() < quota,
            picked,
        }
    }
}
