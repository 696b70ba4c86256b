//! Rounds with a fixed shape.

use core::ops::Range;
use rand::Rng;

use crate::block::BlockBin;
use crate::{rng, Error};

/// Every target is the middle of the bin.
pub fn block(bin: &BlockBin, pick_count: usize) -> Vec<u32> {
    vec![bin.mid(); pick_count]
}

/// Three shots at the bin's min, four at its mid and three at its max.
pub fn serial(bin: &BlockBin) -> Vec<u32> {
    let (min, mid, max) = bin.spread();

    let mut targets = vec![min; 3];
    targets.extend([mid; 4]);
    targets.extend([max; 3]);
    targets
}

/// Distinct distances drawn from a half-open range, as used for chip and
/// pitch rounds. Short ranges yield fewer than `count` targets.
pub fn short_game<R: Rng + ?Sized>(range: Range<u32>, count: usize, rng: &mut R) -> Vec<u32> {
    let len = range.end.saturating_sub(range.start) as usize;
    rng::choose_span(rng, range.start, len, count)
}

/// Distances drawn from `min..=max`. A range narrower than `count` is
/// repeated so that the round can be filled, which allows duplicates.
pub fn custom<R: Rng + ?Sized>(
    min: u32,
    max: u32,
    count: usize,
    rng: &mut R,
) -> Result<Vec<u32>, Error> {
    if min > max {
        return Err(Error::InvalidCustomRange { min, max });
    }

    if min == max {
        return Ok(vec![min; count]);
    }

    let len = ((max - min) as usize).saturating_add(1);
    if len >= count {
        return Ok(rng::choose_span(rng, min, len, count));
    }

    let span: Vec<u32> = (min..=max).collect();
    let pool = span.repeat(count / len + 1);

    Ok(rng::choose(rng, &pool, count))
}
