use thiserror::Error;

/// Errors returned for settings validation and round planning.
#[non_exhaustive]
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    /// Lets callers use `?` on [`buckets::BucketConfig::load`] in functions
    /// returning this error.
    #[error("bucket configuration is invalid: {0}")]
    Buckets(#[from] buckets::Error),
    #[error("pick count must be greater than zero")]
    InvalidPickCount,
    #[error("invalid miss rate {0}, must be in range 0.0..=1.0")]
    InvalidMissRate(f64),
    #[error("invalid putting bonus {0}, must be in range 0..=100")]
    InvalidBonus(u32),
    #[error("distance range {start}..{end} is empty")]
    EmptyRange { start: u32, end: u32 },
    #[error("custom range is inverted, check that min ({min}) <= max ({max})")]
    InvalidCustomRange { min: u32, max: u32 },
}
