//! Standard putting rounds, drawn from the short putting buckets only.

use buckets::BucketSet;
use log::debug;
use rand::Rng;
use std::collections::BTreeSet;

use crate::gated::drain;
use crate::pick::{PickDistances, Picks};
use crate::{rng, Settings};

/// Draws standard putting rounds.
///
/// Only buckets ending at or below the putting cutoff take part. Each bucket
/// proposes `round(pick_count * (percent + bonus) / 100)` distances and the
/// proposals are drained round-robin for a fixed number of passes. Any
/// excess is then removed at random, without reshuffling the round.
#[derive(Copy, Clone, Debug)]
pub struct PuttingSampler<'a> {
    buckets: &'a BucketSet,
    cutoff: u32,
    bonus: u32,
    passes: usize,
}

impl<'a> PuttingSampler<'a> {
    pub fn new(buckets: &'a BucketSet, settings: &Settings) -> Self {
        Self {
            buckets,
            cutoff: settings.putting_cutoff,
            bonus: settings.putting_bonus,
            passes: settings.putting_passes,
        }
    }

    pub fn sample<R: Rng + ?Sized>(
        &self,
        excluded: &BTreeSet<u32>,
        pick_count: usize,
        rng: &mut R,
    ) -> Vec<u32> {
        let proposals: Vec<Picks> = self
            .buckets
            .at_most(self.cutoff)
            .map(|bucket| {
                let quota = bucket.quota(pick_count, self.bonus);
                bucket.pick_distances(excluded, quota, None, rng)
            })
            .collect();

        let order = rng::permutation(rng, proposals.len());
        let mut targets = drain(proposals, &order, usize::MAX, self.passes);

        rng::truncate(rng, &mut targets, pick_count);

        debug!(
            "sampled {} of {} standard putting targets at or below {}",
            targets.len(),
            pick_count,
            self.cutoff
        );

        targets
    }
}
