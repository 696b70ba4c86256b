//! This crate provides the distance buckets used to spread practice targets
//! across a range of distances.
//!
//! A [`Bucket`] is an inclusive distance range with a target share of picks.
//! Buckets are grouped per distance [`Mode`] into a [`BucketSet`], which is
//! only constructed after the buckets have been checked to be ordered and
//! non-overlapping. Raw configuration is described by [`BucketConfig`] and
//! validated once with [`BucketConfig::load`].
//!
//! ```
//! use buckets::{BucketConfig, BucketEntry, Histogram};
//!
//! let config = BucketConfig {
//!     yard: vec![BucketEntry::new(75, 99, 40), BucketEntry::new(100, 150, 60)],
//!     feet: vec![BucketEntry::new(3, 10, 100)],
//! };
//!
//! let buckets = config.load().unwrap();
//! let mut histogram = Histogram::with_buckets(buckets.yard());
//! histogram.increment(120).unwrap();
//! assert_eq!(histogram.as_slice(), &[0, 1]);
//! ```

mod bucket;
mod config;
mod errors;
mod histogram;
mod set;

pub use bucket::{share_of, Bucket};
pub use config::{BucketConfig, BucketEntry, Buckets};
pub use errors::Error;
pub use histogram::{Bin, Histogram, Iter};
pub use set::{BucketSet, Mode};
