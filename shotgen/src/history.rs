//! Practice sessions and the shots reported during them.
//!
//! Storage is owned by the caller. The sampling code only sees history
//! through the [`ShotHistory`] trait; [`MemoryHistory`] is a simple
//! implementation backed by vectors.

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use std::collections::{BTreeSet, HashMap};
use std::time::SystemTime;

/// Identifies a single practice session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PracticeId(pub u64);

/// The kind of a practice session. Discriminants are stable identifiers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-serialize", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum PracticeType {
    /// Full swing, gated random.
    Random = 0,
    Serial = 1,
    Block = 2,
    Warmup = 3,
    /// Putting, gated random.
    RandomPutting = 4,
    StandardPutting = 5,
    Chip = 6,
    Pitch = 7,
    Custom = 8,
    CustomPutting = 9,
    Within3Feet = 22,
    Challenge6Foot = 23,
}

impl PracticeType {
    /// Practice kinds whose shots carry a hit or miss usable for finding a
    /// block bin.
    pub const GRADED: [PracticeType; 4] = [
        PracticeType::Random,
        PracticeType::Block,
        PracticeType::Serial,
        PracticeType::Custom,
    ];

    pub fn is_full_swing(&self) -> bool {
        matches!(
            self,
            Self::Random | Self::Warmup | Self::Serial | Self::Block | Self::Custom
        )
    }

    pub fn is_short_game(&self) -> bool {
        matches!(self, Self::Chip | Self::Pitch)
    }

    pub fn is_graded(&self) -> bool {
        Self::GRADED.contains(self)
    }

    /// Scored putting kinds report points instead of hit or miss.
    pub fn is_scored(&self) -> bool {
        matches!(
            self,
            Self::StandardPutting | Self::Within3Feet | Self::Challenge6Foot
        )
    }
}

impl TryFrom<u8> for PracticeType {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::Random,
            1 => Self::Serial,
            2 => Self::Block,
            3 => Self::Warmup,
            4 => Self::RandomPutting,
            5 => Self::StandardPutting,
            6 => Self::Chip,
            7 => Self::Pitch,
            8 => Self::Custom,
            9 => Self::CustomPutting,
            22 => Self::Within3Feet,
            23 => Self::Challenge6Foot,
            other => return Err(other),
        })
    }
}

impl core::fmt::Display for PracticeType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Random => write!(f, "Full Swing (Gated Random)"),
            Self::Serial => write!(f, "Serial"),
            Self::Block => write!(f, "Block"),
            Self::Warmup => write!(f, "Warmup"),
            Self::RandomPutting => write!(f, "Putting (Gated Random)"),
            Self::StandardPutting => write!(f, "Putting (Standard)"),
            Self::Chip => write!(f, "Around the green (Chip)"),
            Self::Pitch => write!(f, "Around the green (Pitch)"),
            Self::Custom => write!(f, "Custom Practice"),
            Self::CustomPutting => write!(f, "Putting (Custom)"),
            Self::Within3Feet => write!(f, "Putting (Within 3 Feet)"),
            Self::Challenge6Foot => write!(f, "Putting (6 Foot Challenge)"),
        }
    }
}

/// Whether a reported shot reached its target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-serialize", serde(rename_all = "lowercase"))]
pub enum Outcome {
    Hit,
    Miss,
}

/// A single reported shot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Shot {
    pub practice: PracticeId,
    pub distance: u32,
    pub outcome: Outcome,
    pub reported_at: SystemTime,
}

impl Shot {
    pub fn is_miss(&self) -> bool {
        self.outcome == Outcome::Miss
    }
}

/// Read access to stored practice history.
pub trait ShotHistory {
    /// Distinct distances already reported in the given practice session.
    fn session_distances(&self, practice: PracticeId) -> BTreeSet<u32>;

    /// Shots from every practice of the given kinds, most recent first.
    fn recent_shots(&self, kinds: &[PracticeType]) -> Vec<Shot>;
}

/// Practice history held in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryHistory {
    practices: HashMap<PracticeId, PracticeType>,
    shots: Vec<Shot>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a practice session. Shots for unknown sessions are ignored
    /// by every query.
    pub fn add_practice(&mut self, id: PracticeId, kind: PracticeType) {
        self.practices.insert(id, kind);
    }

    pub fn record(&mut self, shot: Shot) {
        self.shots.push(shot);
    }

    pub fn practice_type(&self, id: PracticeId) -> Option<PracticeType> {
        self.practices.get(&id).copied()
    }

    /// Returns the number of shots reported for a session.
    pub fn shot_count(&self, id: PracticeId) -> usize {
        self.shots.iter().filter(|s| s.practice == id).count()
    }
}

impl ShotHistory for MemoryHistory {
    fn session_distances(&self, practice: PracticeId) -> BTreeSet<u32> {
        self.shots
            .iter()
            .filter(|s| s.practice == practice)
            .map(|s| s.distance)
            .collect()
    }

    fn recent_shots(&self, kinds: &[PracticeType]) -> Vec<Shot> {
        let mut shots: Vec<Shot> = self
            .shots
            .iter()
            .filter(|s| {
                self.practices
                    .get(&s.practice)
                    .map(|kind| kinds.contains(kind))
                    .unwrap_or(false)
            })
            .cloned()
            .collect();

        shots.sort_by(|a, b| b.reported_at.cmp(&a.reported_at));
        shots
    }
}
