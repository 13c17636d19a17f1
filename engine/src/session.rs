use serde::{Deserialize, Serialize};

use crate::boss::{Boss, BossKind};
use crate::error::EngineError;
use crate::event::GameEvent;
use crate::schedule::{AttackSchedule, SCHEDULE_HORIZON};
use crate::{text, Dice};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    AwaitPlayerCount,
    AwaitBossName,
    AwaitBossSelection,
    AwaitDamage,
    AwaitDefeatedCount,
    GameOver,
}

/// One game of Raid Boss, driven entirely through [`Session::handle_line`]:
/// the presentation layer feeds one raw input line per call and renders the
/// ordered event batch that comes back. Each accepted input runs a whole
/// transition to completion; invalid input changes nothing and re-prompts.
pub struct Session {
    num_players: i32,
    boss_name: String,
    boss: Option<Boss>,
    phase: Phase,
    schedule: AttackSchedule,
    defeated_players: i32,
    rage_threshold: i32,
    rage_fired: bool,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        Self::from_dice(Dice::from_seed(seed))
    }

    pub fn from_dice(mut dice: Dice) -> Self {
        let schedule = AttackSchedule::build(&mut dice, SCHEDULE_HORIZON);
        Self {
            num_players: 0,
            boss_name: String::new(),
            boss: None,
            phase: Phase::AwaitPlayerCount,
            schedule,
            defeated_players: 0,
            rage_threshold: 0,
            rage_fired: false,
        }
    }

    /// The opening prompt, shown before any input is read.
    pub fn greeting(&self) -> Vec<GameEvent> {
        vec![text::welcome()]
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn boss(&self) -> Option<&Boss> {
        self.boss.as_ref()
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver)
    }

    /// Feed one raw input line; its meaning depends on the current phase.
    /// The only fatal outcome is outliving the prerolled schedule.
    pub fn handle_line(&mut self, input: &str) -> Result<Vec<GameEvent>, EngineError> {
        let input = input.trim();
        tracing::debug!(phase = ?self.phase, input, "handling input");
        match self.phase {
            Phase::AwaitPlayerCount => Ok(self.handle_player_count(input)),
            Phase::AwaitBossName => Ok(self.handle_boss_name(input)),
            Phase::AwaitBossSelection => Ok(self.handle_boss_selection(input)),
            Phase::AwaitDamage => self.handle_damage(input),
            Phase::AwaitDefeatedCount => Ok(self.handle_defeated_players(input)),
            Phase::GameOver => Ok(vec![text::session_over()]),
        }
    }

    fn handle_player_count(&mut self, input: &str) -> Vec<GameEvent> {
        let Some(count) = parse_number(input).filter(|c| *c >= 1) else {
            return vec![text::invalid_player_count(), text::welcome()];
        };
        self.num_players = count;
        self.phase = Phase::AwaitBossName;
        vec![text::player_count_confirmation(count), text::boss_name_prompt()]
    }

    fn handle_boss_name(&mut self, input: &str) -> Vec<GameEvent> {
        if input.is_empty() {
            return vec![text::invalid_boss_name(), text::boss_name_prompt()];
        }
        self.boss_name = input.to_string();
        self.phase = Phase::AwaitBossSelection;
        let mut out = vec![text::boss_introduction(input)];
        out.extend(text::boss_selection_menu());
        out
    }

    fn handle_boss_selection(&mut self, input: &str) -> Vec<GameEvent> {
        let Some(kind) = BossKind::from_selector(input) else {
            let mut out = vec![text::invalid_boss_selection()];
            out.extend(text::boss_selection_menu());
            return out;
        };
        let boss = Boss::new(kind, self.boss_name.clone(), self.num_players);
        tracing::debug!(kind = ?kind, health = boss.health, "boss constructed");
        self.rage_threshold = boss.health / 2;
        let mut out = vec![text::boss_selection_confirmation(&boss.name)];
        out.extend(text::battle_start(&boss.name, boss.health));
        self.boss = Some(boss);
        self.phase = Phase::AwaitDamage;
        out
    }

    fn handle_damage(&mut self, input: &str) -> Result<Vec<GameEvent>, EngineError> {
        let Some(damage) = parse_number(input).filter(|d| *d >= 0) else {
            return Ok(vec![text::invalid_damage(), text::damage_prompt()]);
        };
        // The phase table only reaches AwaitDamage with a constructed boss.
        let Some(boss) = self.boss.as_mut() else {
            return Ok(Vec::new());
        };

        let mut out = vec![text::damage_report(damage)];
        boss.health -= damage;
        out.push(text::health_report(&boss.name, boss.health));
        tracing::debug!(damage, health = boss.health, "damage applied");

        if !self.rage_fired && boss.health <= self.rage_threshold {
            out.push(text::boss_rage());
            self.rage_fired = true;
        }

        let turn = boss.turn_count;
        let current = self.schedule.attacks_on(turn)?;
        let next = self.schedule.attacks_on(turn + 1)?;

        if current.is_empty() {
            out.push(text::cannot_attack_first_turn(&boss.name));
        }
        out.push(text::roll_count(&boss.name, current.len()));
        out.push(text::turn_count(turn));
        if !current.is_empty() {
            out.push(text::attack_announcement());
            out.push(GameEvent::attack(boss.resolve_turn_attacks(current)));
        }

        out.push(text::hint_header());
        out.push(GameEvent::state(boss.attack_hint(next)));
        out.push(text::defeated_players_prompt());
        self.phase = Phase::AwaitDefeatedCount;
        Ok(out)
    }

    fn handle_defeated_players(&mut self, input: &str) -> Vec<GameEvent> {
        let num_players = self.num_players;
        let Some(defeated) = parse_number(input).filter(|d| (0..=num_players).contains(d)) else {
            return vec![
                text::invalid_defeated_players(num_players),
                text::defeated_players_prompt(),
            ];
        };
        let Some(boss) = self.boss.as_mut() else {
            return Vec::new();
        };

        // The cumulative tally saturates at the party size; defeat triggers
        // at >= before the cap could matter for the ending itself.
        self.defeated_players = (self.defeated_players + defeated).min(self.num_players);
        boss.turn_count += 1;
        tracing::debug!(
            defeated = self.defeated_players,
            turn = boss.turn_count,
            "round complete"
        );

        if self.defeated_players >= self.num_players {
            self.phase = Phase::GameOver;
            vec![text::all_players_defeated(&boss.name)]
        } else if boss.health <= 0 {
            self.phase = Phase::GameOver;
            vec![text::victory(&boss.name)]
        } else {
            self.phase = Phase::AwaitDamage;
            vec![text::damage_prompt()]
        }
    }
}

/// A whole game as data: a seed plus the raw lines a player would have typed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TranscriptConfig {
    pub seed: u64,
    #[serde(default)]
    pub lines: Vec<String>,
}

/// Run a full transcript through a fresh session and collect every event it
/// produced. Replays are deterministic: the same seed always yields the same
/// schedule, so the same lines always yield the same events.
pub fn play_transcript(cfg: TranscriptConfig) -> Result<Vec<GameEvent>, EngineError> {
    let mut session = Session::new(cfg.seed);
    let mut events = session.greeting();
    for line in &cfg.lines {
        events.extend(session.handle_line(line)?);
        if session.is_over() {
            break;
        }
    }
    Ok(events)
}

fn parse_number(input: &str) -> Option<i32> {
    input.parse().ok()
}
