use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

pub mod boss;
pub mod error;
pub mod event;
pub mod hint;
pub mod schedule;
pub mod session;
mod text;

pub use boss::{Boss, BossKind};
pub use error::EngineError;
pub use event::{EventKind, GameEvent};
pub use schedule::{AttackSchedule, SCHEDULE_HORIZON};
pub use session::{play_transcript, Phase, Session, TranscriptConfig};

/// One of the eleven boss spell slots, named by the classic two-die-sum
/// convention (`Two` is the rarest low roll, `Seven` the most common).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpellSlot {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Eleven,
    Twelve,
}

impl SpellSlot {
    /// All slots in table order; `ALL[i]` is the slot with index `i`.
    pub const ALL: [SpellSlot; 11] = [
        SpellSlot::Two,
        SpellSlot::Three,
        SpellSlot::Four,
        SpellSlot::Five,
        SpellSlot::Six,
        SpellSlot::Seven,
        SpellSlot::Eight,
        SpellSlot::Nine,
        SpellSlot::Ten,
        SpellSlot::Eleven,
        SpellSlot::Twelve,
    ];

    /// Table index in `[0, 10]`.
    pub fn index(self) -> u8 {
        self as u8
    }
}

pub struct Dice {
    rng: ChaCha8Rng,
}

impl Dice {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Sum of two independent uniform draws from `{0..=5}`: a triangular
    /// distribution over `[0, 10]` with its mode at 5.
    pub fn roll(&mut self) -> SpellSlot {
        let sum = self.rng.gen_range(0..=5u8) + self.rng.gen_range(0..=5u8);
        SpellSlot::ALL[sum as usize]
    }
}
