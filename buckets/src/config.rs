#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::{Bucket, BucketSet, Error, Mode};

/// A single unvalidated bucket as it appears in configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BucketEntry {
    pub min: u32,
    pub max: u32,
    pub percent: u32,
}

impl BucketEntry {
    pub fn new(min: u32, max: u32, percent: u32) -> Self {
        Self { min, max, percent }
    }
}

impl TryFrom<BucketEntry> for Bucket {
    type Error = Error;

    fn try_from(entry: BucketEntry) -> Result<Self, Self::Error> {
        Bucket::new(entry.min, entry.max, entry.percent)
    }
}

/// The raw bucket configuration for both distance modes. Nothing here is
/// trusted until [`BucketConfig::load`] has validated it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BucketConfig {
    /// Full swing buckets, in yards.
    pub yard: Vec<BucketEntry>,
    /// Putting buckets, in feet.
    pub feet: Vec<BucketEntry>,
}

impl BucketConfig {
    /// Validate both bucket lists, returning the first configuration error
    /// encountered.
    pub fn load(&self) -> Result<Buckets, Error> {
        Ok(Buckets {
            yard: build(Mode::Yard, &self.yard)?,
            feet: build(Mode::Feet, &self.feet)?,
        })
    }
}

fn build(mode: Mode, entries: &[BucketEntry]) -> Result<BucketSet, Error> {
    let buckets = entries
        .iter()
        .map(|e| Bucket::try_from(*e))
        .collect::<Result<Vec<_>, _>>()?;

    BucketSet::new(mode, buckets)
}

/// Validated bucket sets for every distance mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Buckets {
    yard: BucketSet,
    feet: BucketSet,
}

impl Buckets {
    pub fn yard(&self) -> &BucketSet {
        &self.yard
    }

    pub fn feet(&self) -> &BucketSet {
        &self.feet
    }

    /// Returns the bucket set for the given mode.
    pub fn get(&self, mode: Mode) -> &BucketSet {
        match mode {
            Mode::Yard => &self.yard,
            Mode::Feet => &self.feet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load() {
        let config = BucketConfig {
            yard: vec![BucketEntry::new(100, 149, 60), BucketEntry::new(75, 99, 40)],
            feet: vec![BucketEntry::new(3, 6, 50), BucketEntry::new(7, 12, 50)],
        };

        let buckets = config.load().unwrap();
        assert_eq!(buckets.yard().histogram_bins(), vec![75, 100, 149]);
        assert_eq!(buckets.get(Mode::Feet).histogram_bins(), vec![3, 7, 12]);
    }

    #[test]
    // a bad entry in either list rejects the whole configuration
    fn load_errors() {
        let config = BucketConfig {
            yard: vec![BucketEntry::new(100, 149, 60)],
            feet: vec![BucketEntry::new(6, 3, 50)],
        };
        assert_eq!(config.load(), Err(Error::InvertedRange { min: 6, max: 3 }));

        let config = BucketConfig {
            yard: Vec::new(),
            feet: vec![BucketEntry::new(3, 6, 50)],
        };
        assert_eq!(config.load(), Err(Error::Empty));
    }
}
