use crate::{BucketSet, Error};

/// A histogram with caller provided bin edges.
///
/// For edges `[e0, e1, ..., en]` there are `n` bins. Every bin is half-open,
/// `e[i]..e[i+1]`, except the last bin which also includes `en`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram {
    edges: Box<[u32]>,
    counts: Box<[u64]>,
}

impl Histogram {
    /// Construct a new histogram from the provided bin edges.
    ///
    /// # Constraints:
    /// * there must be at least two edges
    /// * edges must be non-decreasing
    pub fn new(edges: &[u32]) -> Result<Self, Error> {
        if edges.len() < 2 || edges.windows(2).any(|w| w[0] > w[1]) {
            return Err(Error::InvalidEdges);
        }

        Ok(Self {
            edges: edges.into(),
            counts: vec![0; edges.len() - 1].into(),
        })
    }

    /// Creates a new histogram using the bin edges of a bucket set.
    pub fn with_buckets(buckets: &BucketSet) -> Self {
        // a non-empty set always yields at least two edges
        let edges = buckets.histogram_bins();

        Self {
            counts: vec![0; edges.len() - 1].into(),
            edges: edges.into(),
        }
    }

    /// Returns the index of the bin which holds the value.
    pub fn index(&self, value: u32) -> Result<usize, Error> {
        let first = self.edges[0];
        let last = self.edges[self.edges.len() - 1];

        if value < first || value > last {
            return Err(Error::OutOfRange);
        }

        if value == last {
            return Ok(self.counts.len() - 1);
        }

        // the first edge is <= value, so this is always at least one
        Ok(self.edges.partition_point(|e| *e <= value) - 1)
    }

    /// Increment the counter for the bin corresponding to the provided value
    /// by one.
    pub fn increment(&mut self, value: u32) -> Result<(), Error> {
        self.add(value, 1)
    }

    /// Add some count to the counter for the bin corresponding to the
    /// provided value.
    pub fn add(&mut self, value: u32, count: u64) -> Result<(), Error> {
        let index = self.index(value)?;
        self.counts[index] = self.counts[index].wrapping_add(count);
        Ok(())
    }

    /// Get a reference to the raw counters.
    pub fn as_slice(&self) -> &[u64] {
        &self.counts
    }

    /// Get a reference to the bin edges.
    pub fn edges(&self) -> &[u32] {
        &self.edges
    }

    /// Returns an iterator across the bins.
    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }

    /// Returns the sum of all counters.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Reset every counter to zero.
    pub fn clear(&mut self) {
        for count in self.counts.iter_mut() {
            *count = 0;
        }
    }
}

impl<'a> IntoIterator for &'a Histogram {
    type Item = Bin;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            index: 0,
            histogram: self,
        }
    }
}

/// A single histogram bin and its count.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Bin {
    pub(crate) count: u64,
    pub(crate) lower: u32,
    pub(crate) upper: u32,
}

impl Bin {
    /// Returns the number of observations within the bin.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns the inclusive lower edge of the bin.
    pub fn lower(&self) -> u32 {
        self.lower
    }

    /// Returns the upper edge of the bin. This is exclusive for every bin but
    /// the last.
    pub fn upper(&self) -> u32 {
        self.upper
    }
}

/// An iterator across the histogram bins.
pub struct Iter<'a> {
    index: usize,
    histogram: &'a Histogram,
}

impl<'a> Iterator for Iter<'a> {
    type Item = Bin;

    fn next(&mut self) -> Option<<Self as std::iter::Iterator>::Item> {
        if self.index >= self.histogram.counts.len() {
            return None;
        }

        let bin = Bin {
            count: self.histogram.counts[self.index],
            lower: self.histogram.edges[self.index],
            upper: self.histogram.edges[self.index + 1],
        };

        self.index += 1;

        Some(bin)
    }
}
