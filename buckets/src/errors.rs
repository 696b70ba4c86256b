use thiserror::Error;

/// Errors returned for bucket configuration and histogram operations.
#[non_exhaustive]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("bucket range is inverted, check that min ({min}) <= max ({max})")]
    InvertedRange { min: u32, max: u32 },
    #[error("invalid percent {0}, must be in range 0..=100")]
    InvalidPercent(u32),
    #[error("bucket set contains no buckets")]
    Empty,
    #[error("bucket range {min}..={max} is configured more than once")]
    Duplicate { min: u32, max: u32 },
    #[error("bucket {lower:?} overlaps bucket {upper:?}")]
    Overlap { lower: (u32, u32), upper: (u32, u32) },
    #[error("histogram edges must contain at least two non-decreasing values")]
    InvalidEdges,
    #[error("the value is outside of the histogram range")]
    OutOfRange,
}
