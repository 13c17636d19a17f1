use serde::{Deserialize, Serialize};

use crate::hint::{classify, HintCategory};
use crate::SpellSlot;

mod horror;
mod lunar;
mod mana_god;

/// The three scripted bosses. Each supplies its own 11-entry spell table and
/// hint-category table; adding a boss means adding one more data table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BossKind {
    TheManaGod,
    HorrorFromTheDepths,
    LunarChanneler,
}

impl BossKind {
    /// Menu selector accepted at the boss-selection phase.
    pub fn from_selector(input: &str) -> Option<BossKind> {
        match input.trim() {
            "1" => Some(BossKind::TheManaGod),
            "2" => Some(BossKind::HorrorFromTheDepths),
            "3" => Some(BossKind::LunarChanneler),
            _ => None,
        }
    }

    pub fn roster_name(self) -> &'static str {
        match self {
            BossKind::TheManaGod => "TheManaGod",
            BossKind::HorrorFromTheDepths => "HorrorFromTheDepths",
            BossKind::LunarChanneler => "LunarChanneler",
        }
    }

    /// Starting health scales with party size. LunarChanneler runs on a base
    /// reduced by 200 — intentional asymmetry, not a scaling bug.
    pub fn initial_health(self, player_count: i32) -> i32 {
        const BASE_HEALTH: i32 = 250;
        match self {
            BossKind::TheManaGod | BossKind::HorrorFromTheDepths => BASE_HEALTH * player_count,
            BossKind::LunarChanneler => (BASE_HEALTH - 200) * player_count,
        }
    }

    fn hint_table(self) -> &'static [HintCategory] {
        match self {
            BossKind::TheManaGod => mana_god::HINTS,
            BossKind::HorrorFromTheDepths => horror::HINTS,
            BossKind::LunarChanneler => lunar::HINTS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    pub kind: BossKind,
    pub name: String,
    pub player_count: i32,
    /// Single source of truth for defeat (`health <= 0`). Never clamped;
    /// negative excursions are real and show up in the narration.
    pub health: i32,
    /// Starts at 1 and increments once per completed round.
    pub turn_count: usize,
}

impl Boss {
    pub fn new(kind: BossKind, name: impl Into<String>, player_count: i32) -> Self {
        Self {
            kind,
            name: name.into(),
            player_count,
            health: kind.initial_health(player_count),
            turn_count: 1,
        }
    }

    /// Resolve one spell slot into its narration, applying any self-heal.
    pub fn cast(&mut self, slot: SpellSlot) -> String {
        match self.kind {
            BossKind::TheManaGod => mana_god::cast(self, slot),
            BossKind::HorrorFromTheDepths => horror::cast(self, slot),
            BossKind::LunarChanneler => lunar::cast(self, slot),
        }
    }

    /// Resolve this turn's outcomes in slot order, blank-line separated.
    /// The returned text belongs to the current turn; nothing accumulates
    /// across turns.
    pub fn resolve_turn_attacks(&mut self, slots: &[SpellSlot]) -> String {
        let mut pieces = Vec::with_capacity(slots.len());
        for slot in slots {
            pieces.push(self.cast(*slot));
        }
        pieces.join("\n\n")
    }

    /// Coarse warning derived from next turn's concealed outcomes.
    pub fn attack_hint(&self, slots: &[SpellSlot]) -> String {
        classify(self.kind.hint_table(), slots)
    }
}
