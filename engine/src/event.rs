use serde::{Deserialize, Serialize};

/// Category tag on every piece of text the engine emits. The presentation
/// layer decides rendering (color, spacing, widgets); the engine guarantees
/// only ordering and tagging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    StateUpdate,
    BossAttack,
    PlayerAction,
    Error,
    Prompt,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    pub kind: EventKind,
    pub text: String,
}

impl GameEvent {
    pub fn state(text: impl Into<String>) -> Self {
        Self { kind: EventKind::StateUpdate, text: text.into() }
    }

    pub fn attack(text: impl Into<String>) -> Self {
        Self { kind: EventKind::BossAttack, text: text.into() }
    }

    pub fn action(text: impl Into<String>) -> Self {
        Self { kind: EventKind::PlayerAction, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: EventKind::Error, text: text.into() }
    }

    pub fn prompt(text: impl Into<String>) -> Self {
        Self { kind: EventKind::Prompt, text: text.into() }
    }
}
