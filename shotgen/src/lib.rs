//! Target generation for golf practice rounds.
//!
//! A round is a short list of target distances. Full swing and putting rounds
//! are spread across the configured distance buckets by the
//! [`DistanceSampler`], standard putting stays within the short putting
//! buckets using the [`PuttingSampler`], and block and serial rounds are
//! built around a bin found from graded shot history by the
//! [`BlockBinSelector`]. The [`Planner`] picks the right strategy for a
//! [`Request`].
//!
//! Every operation takes its random source as a parameter. Pass
//! [`rng::seeded`] for reproducible rounds.
//!
//! ```
//! use shotgen::buckets::{BucketConfig, BucketEntry};
//! use shotgen::{rng, ClubBag, MemoryHistory, Planner, Request, Settings};
//!
//! let buckets = BucketConfig {
//!     yard: vec![BucketEntry::new(75, 124, 50), BucketEntry::new(125, 175, 50)],
//!     feet: vec![BucketEntry::new(3, 10, 60), BucketEntry::new(11, 25, 40)],
//! }
//! .load()
//! .unwrap();
//!
//! let settings = Settings::default();
//! let history = MemoryHistory::new();
//! let clubs = ClubBag::new(vec![110, 140, 170]);
//! let planner = Planner::new(&settings, &buckets, &history, &clubs).unwrap();
//!
//! let round = planner
//!     .plan(Request::GatedRandom { session: None }, &mut rng::seeded(7))
//!     .unwrap();
//! assert_eq!(round.targets().map(|t| t.len()), Some(10));
//! ```

pub use buckets;

mod block;
mod clubs;
mod error;
mod gated;
mod history;
mod pick;
mod planner;
mod putting;
pub mod rng;
pub mod rounds;
mod settings;

pub use block::{BlockBin, BlockBinSelector};
pub use clubs::ClubBag;
pub use error::Error;
pub use gated::{DistanceSampler, SampleRequest};
pub use history::{MemoryHistory, Outcome, PracticeId, PracticeType, Shot, ShotHistory};
pub use pick::{PickDistances, Picks};
pub use planner::{Planner, Request, Round};
pub use putting::PuttingSampler;
pub use settings::{Builder, Settings};
