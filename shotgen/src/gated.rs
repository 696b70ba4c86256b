//! Gated random sampling: spread a round's targets across every bucket.
//!
//! Each bucket proposes its own set of distances (see
//! [`PickDistances`](crate::PickDistances)). The proposals are then drained
//! round-robin, one distance per bucket per pass, visiting the buckets in an
//! order that is re-randomized on every call. Draining stops once the round
//! is full or a whole pass yields nothing. Extra distances from the club
//! interval supplement are appended, the round is shuffled, and any excess is
//! removed at random.

use buckets::BucketSet;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;

use crate::pick::{PickDistances, Picks};
use crate::rng;

/// The inputs for one gated random round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleRequest {
    pick_count: usize,
    excluded: BTreeSet<u32>,
    max_limit: Option<u32>,
    supplement: Vec<u32>,
}

impl SampleRequest {
    /// A request for `pick_count` targets with nothing excluded and no limit.
    pub fn new(pick_count: usize) -> Self {
        Self {
            pick_count,
            excluded: BTreeSet::new(),
            max_limit: None,
            supplement: Vec::new(),
        }
    }

    /// Distances already seen this session, to be avoided where possible.
    pub fn excluded(mut self, excluded: BTreeSet<u32>) -> Self {
        self.excluded = excluded;
        self
    }

    /// No target may exceed this distance.
    pub fn max_limit(mut self, max_limit: Option<u32>) -> Self {
        self.max_limit = max_limit;
        self
    }

    /// Extra candidate distances added to the round before trimming.
    pub fn supplement(mut self, supplement: Vec<u32>) -> Self {
        self.supplement = supplement;
        self
    }

    pub fn pick_count(&self) -> usize {
        self.pick_count
    }
}

/// Draws gated random rounds from a bucket set.
#[derive(Copy, Clone, Debug)]
pub struct DistanceSampler<'a> {
    buckets: &'a BucketSet,
}

impl<'a> DistanceSampler<'a> {
    pub fn new(buckets: &'a BucketSet) -> Self {
        Self { buckets }
    }

    /// Produce the targets for one round.
    ///
    /// The result never holds more than the requested pick count. It holds
    /// exactly that many whenever the buckets and supplement together offer
    /// enough distances.
    pub fn sample<R: Rng + ?Sized>(&self, request: &SampleRequest, rng: &mut R) -> Vec<u32> {
        let proposals: Vec<Picks> = self
            .buckets
            .iter()
            .map(|bucket| {
                bucket.pick_distances(
                    &request.excluded,
                    request.pick_count,
                    request.max_limit,
                    rng,
                )
            })
            .collect();

        let order = rng::permutation(rng, proposals.len());
        let mut targets = drain(proposals, &order, request.pick_count, usize::MAX);

        targets.extend_from_slice(&request.supplement);
        targets.shuffle(rng);
        rng::truncate(rng, &mut targets, request.pick_count);

        debug!(
            "sampled {} of {} {} targets ({} excluded, limit {:?})",
            targets.len(),
            request.pick_count,
            self.buckets.mode(),
            request.excluded.len(),
            request.max_limit
        );

        targets
    }
}

/// Pop one distance per proposal per pass, visiting proposals in `order`.
/// Stops after the pass in which `target` is reached, after `passes` passes,
/// or when a pass yields nothing.
pub(crate) fn drain(
    mut proposals: Vec<Picks>,
    order: &[usize],
    target: usize,
    passes: usize,
) -> Vec<u32> {
    let available: usize = proposals.iter().map(Picks::len).sum();
    let mut drained = Vec::with_capacity(available.min(target));

    for _ in 0..passes {
        let before = drained.len();

        for index in order {
            if let Some(distance) = proposals[*index].pop() {
                drained.push(distance);
            }
        }

        if drained.len() >= target || drained.len() == before {
            break;
        }
    }

    drained
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;
    use buckets::{Bucket, Mode};

    fn yards() -> BucketSet {
        BucketSet::new(
            Mode::Yard,
            vec![
                Bucket::new(75, 99, 15).unwrap(),
                Bucket::new(100, 124, 20).unwrap(),
                Bucket::new(125, 149, 20).unwrap(),
                Bucket::new(150, 174, 20).unwrap(),
                Bucket::new(175, 199, 15).unwrap(),
                Bucket::new(200, 250, 10).unwrap(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn full_round() {
        let buckets = yards();
        let sampler = DistanceSampler::new(&buckets);
        let mut rng = seeded(1);

        for _ in 0..100 {
            let targets = sampler.sample(&SampleRequest::new(10), &mut rng);
            assert_eq!(targets.len(), 10);
            assert!(targets.iter().all(|d| buckets.find(*d).is_some()));
        }
    }

    #[test]
    // two passes over six buckets, then two random removals
    fn spread_across_buckets() {
        let buckets = yards();
        let sampler = DistanceSampler::new(&buckets);
        let mut rng = seeded(2);

        for _ in 0..100 {
            let targets = sampler.sample(&SampleRequest::new(10), &mut rng);
            let mut counts = vec![0; buckets.len()];
            for target in &targets {
                let index = buckets.iter().position(|b| b.contains(*target)).unwrap();
                counts[index] += 1;
            }
            assert!(counts.iter().all(|c| *c <= 2), "{counts:?}");
            assert!(counts.iter().filter(|c| **c > 0).count() >= 5, "{counts:?}");
        }
    }

    #[test]
    fn respects_limit() {
        let buckets = yards();
        let sampler = DistanceSampler::new(&buckets);
        let mut rng = seeded(3);

        for _ in 0..100 {
            let request = SampleRequest::new(10).max_limit(Some(160));
            let targets = sampler.sample(&request, &mut rng);
            assert_eq!(targets.len(), 10);
            assert!(targets.iter().all(|d| *d <= 160));
        }
    }

    #[test]
    // small buckets cannot fill a round
    fn degraded_round() {
        let buckets = BucketSet::new(
            Mode::Feet,
            vec![Bucket::new(3, 4, 50).unwrap(), Bucket::new(5, 7, 50).unwrap()],
        )
        .unwrap();
        let sampler = DistanceSampler::new(&buckets);
        let excluded: BTreeSet<u32> = (3..=7).collect();

        let request = SampleRequest::new(10).excluded(excluded);
        let mut targets = sampler.sample(&request, &mut seeded(4));
        targets.sort_unstable();
        assert_eq!(targets, vec![3, 4, 5, 6, 7]);

        let request = SampleRequest::new(10).max_limit(Some(2));
        let targets = sampler.sample(&request, &mut seeded(4));
        assert!(targets.is_empty());
    }

    #[test]
    fn avoids_seen_distances() {
        let buckets =
            BucketSet::new(Mode::Yard, vec![Bucket::new(0, 10, 100).unwrap()]).unwrap();
        let sampler = DistanceSampler::new(&buckets);
        let excluded: BTreeSet<u32> = (0..=8).collect();

        let request = SampleRequest::new(2).excluded(excluded);
        let mut targets = sampler.sample(&request, &mut seeded(5));
        targets.sort_unstable();
        assert_eq!(targets, vec![9, 10]);
    }

    #[test]
    // a bucket running short gives up its last unseen distance before any
    // seen one, even when the round fills after a single pass
    fn unseen_drained_first() {
        let buckets = BucketSet::new(
            Mode::Yard,
            vec![Bucket::new(0, 9, 50).unwrap(), Bucket::new(20, 29, 50).unwrap()],
        )
        .unwrap();
        let sampler = DistanceSampler::new(&buckets);
        let excluded: BTreeSet<u32> = (0..=8).chain(20..=29).collect();
        let request = SampleRequest::new(2).excluded(excluded);
        let mut rng = seeded(7);

        for _ in 0..100 {
            let targets = sampler.sample(&request, &mut rng);
            assert_eq!(targets.len(), 2);
            assert!(targets.contains(&9), "{targets:?}");
            assert!(targets.iter().any(|d| (20..=29).contains(d)));
        }
    }

    #[test]
    fn supplement() {
        let buckets =
            BucketSet::new(Mode::Yard, vec![Bucket::new(100, 102, 100).unwrap()]).unwrap();
        let sampler = DistanceSampler::new(&buckets);

        // three from the bucket plus two supplemental distances
        let request = SampleRequest::new(10).supplement(vec![180, 220]);
        let mut targets = sampler.sample(&request, &mut seeded(6));
        targets.sort_unstable();
        assert_eq!(targets, vec![100, 101, 102, 180, 220]);

        // the supplement competes for space when the round is full
        let request = SampleRequest::new(3).supplement(vec![180, 220]);
        let targets = sampler.sample(&request, &mut seeded(6));
        assert_eq!(targets.len(), 3);
    }

    #[test]
    fn reproducible() {
        let buckets = yards();
        let sampler = DistanceSampler::new(&buckets);
        let request = SampleRequest::new(10)
            .excluded([80, 90, 130].into_iter().collect())
            .max_limit(Some(210));

        let a = sampler.sample(&request, &mut seeded(99));
        let b = sampler.sample(&request, &mut seeded(99));
        assert_eq!(a, b);
    }

    #[test]
    fn drain_order() {
        let proposals = vec![
            Picks::from(vec![1, 2, 3]),
            Picks::from(vec![10]),
            Picks::from(vec![20, 21]),
        ];

        assert_eq!(
            drain(proposals.clone(), &[2, 0, 1], 4, usize::MAX),
            vec![21, 3, 10, 20, 2]
        );
        assert_eq!(
            drain(proposals.clone(), &[0, 1, 2], 100, usize::MAX),
            vec![3, 10, 21, 2, 20, 1]
        );
        assert_eq!(drain(proposals, &[0, 1, 2], 100, 1), vec![3, 10, 21]);
    }
}
