//! Dispatch a practice request to the strategy which builds its round.

use buckets::Buckets;
use log::debug;
use rand::Rng;
use std::collections::BTreeSet;

use crate::block::BlockBinSelector;
use crate::clubs::ClubBag;
use crate::gated::{DistanceSampler, SampleRequest};
use crate::history::{PracticeId, PracticeType, ShotHistory};
use crate::putting::PuttingSampler;
use crate::{rounds, Error, Settings};

/// A request for the targets of one round.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Request {
    /// Full swing, spread across the yard buckets. Distances already seen in
    /// the session are avoided.
    GatedRandom { session: Option<PracticeId> },
    /// Putting, spread across the feet buckets.
    PuttingRandom { session: Option<PracticeId> },
    /// Putting from the short feet buckets only.
    StandardPutting,
    Chip,
    Pitch,
    /// Repeat the middle of the bin found from recent misses.
    Block,
    /// Work across the bin of the most recent graded shot.
    Serial,
    Custom { min: u32, max: u32 },
    CustomPutting { min: u32, max: u32 },
}

impl Request {
    /// Returns the practice kind this request builds a round for.
    pub fn practice_type(&self) -> PracticeType {
        match self {
            Self::GatedRandom { .. } => PracticeType::Random,
            Self::PuttingRandom { .. } => PracticeType::RandomPutting,
            Self::StandardPutting => PracticeType::StandardPutting,
            Self::Chip => PracticeType::Chip,
            Self::Pitch => PracticeType::Pitch,
            Self::Block => PracticeType::Block,
            Self::Serial => PracticeType::Serial,
            Self::Custom { .. } => PracticeType::Custom,
            Self::CustomPutting { .. } => PracticeType::CustomPutting,
        }
    }
}

/// The outcome of planning a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Round {
    Targets(Vec<u32>),
    /// There is not enough history to build the round.
    Unavailable,
}

impl Round {
    pub fn targets(&self) -> Option<&[u32]> {
        match self {
            Self::Targets(targets) => Some(targets),
            Self::Unavailable => None,
        }
    }
}

/// Builds rounds for a single player.
pub struct Planner<'a, H: ShotHistory> {
    settings: &'a Settings,
    buckets: &'a Buckets,
    history: &'a H,
    clubs: &'a ClubBag,
}

impl<'a, H: ShotHistory> Planner<'a, H> {
    pub fn new(
        settings: &'a Settings,
        buckets: &'a Buckets,
        history: &'a H,
        clubs: &'a ClubBag,
    ) -> Result<Self, Error> {
        settings.validate()?;

        Ok(Self {
            settings,
            buckets,
            history,
            clubs,
        })
    }

    pub fn plan<R: Rng + ?Sized>(&self, request: Request, rng: &mut R) -> Result<Round, Error> {
        let pick_count = self.settings.pick_count;

        let round = match request {
            Request::GatedRandom { session } => {
                let sample = SampleRequest::new(pick_count)
                    .excluded(self.seen(session))
                    .max_limit(self.clubs.longest_distance())
                    .supplement(
                        self.clubs
                            .interval_supplement(self.settings.club_min_distance, rng),
                    );
                let sampler = DistanceSampler::new(self.buckets.yard());
                Round::Targets(sampler.sample(&sample, rng))
            }
            Request::PuttingRandom { session } => {
                let sample = SampleRequest::new(pick_count).excluded(self.seen(session));
                let sampler = DistanceSampler::new(self.buckets.feet());
                Round::Targets(sampler.sample(&sample, rng))
            }
            Request::StandardPutting => {
                let sampler = PuttingSampler::new(self.buckets.feet(), self.settings);
                Round::Targets(sampler.sample(&BTreeSet::new(), pick_count, rng))
            }
            Request::Chip => Round::Targets(rounds::short_game(
                self.settings.chip_range.clone(),
                pick_count,
                rng,
            )),
            Request::Pitch => Round::Targets(rounds::short_game(
                self.settings.pitch_range.clone(),
                pick_count,
                rng,
            )),
            Request::Block => {
                let shots = self.history.recent_shots(&PracticeType::GRADED);
                match self.selector().select(&shots) {
                    Some(bin) => Round::Targets(rounds::block(&bin, pick_count)),
                    None => Round::Unavailable,
                }
            }
            Request::Serial => {
                let shots = self.history.recent_shots(&PracticeType::GRADED);
                match self.selector().select_serial(&shots) {
                    Some(bin) => Round::Targets(rounds::serial(&bin)),
                    None => Round::Unavailable,
                }
            }
            Request::Custom { min, max } | Request::CustomPutting { min, max } => {
                Round::Targets(rounds::custom(min, max, pick_count, rng)?)
            }
        };

        match &round {
            Round::Targets(targets) => debug!(
                "planned {} round with {} targets",
                request.practice_type(),
                targets.len()
            ),
            Round::Unavailable => debug!("{} round unavailable", request.practice_type()),
        }

        Ok(round)
    }

    fn seen(&self, session: Option<PracticeId>) -> BTreeSet<u32> {
        session
            .map(|id| self.history.session_distances(id))
            .unwrap_or_default()
    }

    fn selector(&self) -> BlockBinSelector<'a> {
        BlockBinSelector::new(self.buckets.yard(), self.settings)
    }
}
