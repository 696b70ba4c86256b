//! Targets drawn between a player's club averages.

use log::trace;
use rand::Rng;

/// The average carry distance of each club in a player's bag, in yards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClubBag {
    averages: Vec<u32>,
}

impl ClubBag {
    /// Create a bag from club average distances in any order.
    pub fn new(mut averages: Vec<u32>) -> Self {
        averages.sort_unstable();
        Self { averages }
    }

    pub fn is_empty(&self) -> bool {
        self.averages.is_empty()
    }

    /// Average distances in ascending order.
    pub fn averages(&self) -> &[u32] {
        &self.averages
    }

    /// Returns the average distance of the longest club, if any.
    pub fn longest_distance(&self) -> Option<u32> {
        self.averages.last().copied()
    }

    /// Draw one distance from `a..b` for each pair of neighbouring clubs.
    /// Distances below `min_distance` are dropped. Clubs with equal averages
    /// contribute nothing.
    pub fn interval_supplement<R: Rng + ?Sized>(
        &self,
        min_distance: u32,
        rng: &mut R,
    ) -> Vec<u32> {
        let supplement: Vec<u32> = self
            .averages
            .windows(2)
            .filter(|pair| pair[0] < pair[1])
            .map(|pair| rng.gen_range(pair[0]..pair[1]))
            .filter(|distance| *distance >= min_distance)
            .collect();

        trace!(
            "{} club interval distances from {} clubs",
            supplement.len(),
            self.averages.len()
        );

        supplement
    }
}

impl From<Vec<u32>> for ClubBag {
    fn from(averages: Vec<u32>) -> Self {
        Self::new(averages)
    }
}
