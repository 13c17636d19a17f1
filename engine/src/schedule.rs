use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::{Dice, SpellSlot};

/// Default preroll horizon. Must exceed any realistic game length; running
/// past it is a capacity misconfiguration, not a recoverable condition.
pub const SCHEDULE_HORIZON: usize = 100;

/// The boss's entire campaign, rolled up front: turn `i` gets `floor(i / 2)`
/// dice outcomes, so turns 0 and 1 get none ("no attack on turn 1").
///
/// Committing the whole schedule at session start is what makes the hint
/// mechanic honest — turn `i + 1`'s attacks can be revealed as a warning
/// during turn `i` without re-rolling, and the warning is never wrong.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackSchedule {
    turns: Vec<Vec<SpellSlot>>,
}

impl AttackSchedule {
    /// Roll the full schedule. Called exactly once per session.
    pub fn build(dice: &mut Dice, horizon: usize) -> Self {
        let turns: Vec<Vec<SpellSlot>> = (0..horizon)
            .map(|turn| (0..turn / 2).map(|_| dice.roll()).collect())
            .collect();
        tracing::debug!(horizon, "prerolled attack schedule");
        Self { turns }
    }

    pub fn horizon(&self) -> usize {
        self.turns.len()
    }

    /// The outcomes resolving on `turn`. Indexing past the horizon surfaces
    /// as [`EngineError::ScheduleExhausted`] rather than a silent wrap.
    pub fn attacks_on(&self, turn: usize) -> Result<&[SpellSlot], EngineError> {
        self.turns
            .get(turn)
            .map(Vec::as_slice)
            .ok_or(EngineError::ScheduleExhausted {
                turn,
                horizon: self.turns.len(),
            })
    }
}
