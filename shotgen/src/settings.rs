//! Process-wide tuning for round generation.

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::Error;
use core::ops::Range;

/// Constants which shape every generated round. Use [`Settings::builder`] to
/// construct a validated instance, or [`Settings::default`] for the stock
/// values.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-serialize", serde(default))]
pub struct Settings {
    /// Number of targets in a round.
    pub pick_count: usize,
    /// Club interval distances below this are not added to a round.
    pub club_min_distance: u32,
    /// Standard putting only draws from feet buckets ending at or below this.
    pub putting_cutoff: u32,
    /// Percentage points added to each bucket's share for standard putting.
    pub putting_bonus: u32,
    /// Number of round-robin passes over the buckets for standard putting.
    pub putting_passes: usize,
    /// A block bin needs at least this many recent shots.
    pub block_min_shots: u64,
    /// A block bin needs at least this fraction of misses.
    pub block_miss_rate: f64,
    /// Number of most recent shots considered per bucket.
    pub block_recent_shots: usize,
    /// Chip distances, in yards.
    pub chip_range: Range<u32>,
    /// Pitch distances, in yards.
    pub pitch_range: Range<u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pick_count: 10,
            club_min_distance: 75,
            putting_cutoff: 25,
            putting_bonus: 5,
            putting_passes: 3,
            block_min_shots: 10,
            block_miss_rate: 0.3,
            block_recent_shots: 10,
            chip_range: 5..25,
            pitch_range: 25..75,
        }
    }
}

impl Settings {
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Check that the settings can produce rounds. Settings which were
    /// deserialized should be checked before use.
    pub fn validate(&self) -> Result<(), Error> {
        if self.pick_count == 0 {
            return Err(Error::InvalidPickCount);
        }

        if !(0.0..=1.0).contains(&self.block_miss_rate) {
            return Err(Error::InvalidMissRate(self.block_miss_rate));
        }

        if self.putting_bonus > 100 {
            return Err(Error::InvalidBonus(self.putting_bonus));
        }

        for range in [&self.chip_range, &self.pitch_range] {
            if range.is_empty() {
                return Err(Error::EmptyRange {
                    start: range.start,
                    end: range.end,
                });
            }
        }

        Ok(())
    }
}

pub struct Builder {
    settings: Settings,
}

impl Builder {
    fn new() -> Self {
        Self {
            settings: Settings::default(),
        }
    }

    /// Set the number of targets in each round.
    pub fn pick_count(mut self, count: usize) -> Self {
        self.settings.pick_count = count;
        self
    }

    /// Set the minimum distance for targets drawn between club averages.
    pub fn club_min_distance(mut self, distance: u32) -> Self {
        self.settings.club_min_distance = distance;
        self
    }

    /// Set the cutoff, bonus and number of passes for standard putting.
    pub fn putting(mut self, cutoff: u32, bonus: u32, passes: usize) -> Self {
        self.settings.putting_cutoff = cutoff;
        self.settings.putting_bonus = bonus;
        self.settings.putting_passes = passes;
        self
    }

    /// Set the thresholds a bucket must reach to be selected as a block bin.
    pub fn block(mut self, min_shots: u64, miss_rate: f64, recent_shots: usize) -> Self {
        self.settings.block_min_shots = min_shots;
        self.settings.block_miss_rate = miss_rate;
        self.settings.block_recent_shots = recent_shots;
        self
    }

    /// Set the distance ranges for chip and pitch rounds.
    pub fn short_game(mut self, chip: Range<u32>, pitch: Range<u32>) -> Self {
        self.settings.chip_range = chip;
        self.settings.pitch_range = pitch;
        self
    }

    /// Consume the builder and produce validated settings.
    pub fn build(self) -> Result<Settings, Error> {
        self.settings.validate()?;
        Ok(self.settings)
    }
}
