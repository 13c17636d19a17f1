//! Canned narration: every prompt, confirmation, warning, and ending the
//! session can emit. Kept in one place so the session logic reads as pure
//! state-machine code.

use crate::event::GameEvent;

pub(crate) fn welcome() -> GameEvent {
    GameEvent::prompt("Welcome to Raid Boss! How many people are playing? >")
}

pub(crate) fn player_count_confirmation(num_players: i32) -> GameEvent {
    GameEvent::state(format!(
        "Wonderful! {} player(s) are ready to sling some spells!",
        num_players
    ))
}

pub(crate) fn boss_name_prompt() -> GameEvent {
    GameEvent::prompt("Who have you come here to slay? >")
}

pub(crate) fn boss_introduction(boss_name: &str) -> GameEvent {
    GameEvent::state(format!(
        "Here comes {} now! Prepare thyselves for a whimsical battle! Best of luck!",
        boss_name
    ))
}

pub(crate) fn boss_selection_menu() -> Vec<GameEvent> {
    vec![
        GameEvent::state("Choose your boss:"),
        GameEvent::state("1. TheManaGod"),
        GameEvent::state("2. HorrorFromTheDepths"),
        GameEvent::state("3. LunarChanneler"),
        GameEvent::prompt("Enter your choice (1-3) >"),
    ]
}

pub(crate) fn boss_selection_confirmation(boss_name: &str) -> GameEvent {
    GameEvent::state(format!("You have chosen {}!", boss_name))
}

pub(crate) fn battle_start(boss_name: &str, health: i32) -> Vec<GameEvent> {
    vec![
        GameEvent::state("The battle begins!"),
        GameEvent::state(format!("{}'s Health: {}", boss_name, health)),
        damage_prompt(),
    ]
}

pub(crate) fn damage_prompt() -> GameEvent {
    GameEvent::prompt("PARTY TURN: Enter damage dealt! (Even if it's zero) and press enter! >")
}

pub(crate) fn damage_report(damage: i32) -> GameEvent {
    GameEvent::action(format!("Damage dealt: {}", damage))
}

pub(crate) fn health_report(boss_name: &str, health: i32) -> GameEvent {
    GameEvent::state(format!("{}'s Health: {}", boss_name, health))
}

pub(crate) fn boss_rage() -> GameEvent {
    GameEvent::attack("The boss unleashes a hellish energy...")
}

pub(crate) fn cannot_attack_first_turn(boss_name: &str) -> GameEvent {
    GameEvent::state(format!(
        "{} cannot attack on turn 1! You're safe until next turn.",
        boss_name
    ))
}

pub(crate) fn roll_count(boss_name: &str, attack_count: usize) -> GameEvent {
    GameEvent::attack(format!(
        "{} gets {} roll(s) this turn! Brace yourself!",
        boss_name, attack_count
    ))
}

pub(crate) fn turn_count(turn: usize) -> GameEvent {
    GameEvent::state(format!("TURN COUNT: {}", turn))
}

pub(crate) fn attack_announcement() -> GameEvent {
    GameEvent::attack("THE BOSS ATTACKS!")
}

pub(crate) fn hint_header() -> GameEvent {
    GameEvent::state("Arcane intuition tells you...")
}

pub(crate) fn defeated_players_prompt() -> GameEvent {
    GameEvent::prompt(
        "How many players were defeated this turn? (enter 0 if no one was defeated) >",
    )
}

pub(crate) fn victory(boss_name: &str) -> GameEvent {
    GameEvent::state(format!(
        "Congratulations! You have defeated {}! They cower away from your SUPREME WHIMSY! \
         Thanks for playing!",
        boss_name
    ))
}

pub(crate) fn all_players_defeated(boss_name: &str) -> GameEvent {
    GameEvent::state(format!(
        "{} has defeated you!!!! Retreat and come back - next time cast better spells!",
        boss_name
    ))
}

pub(crate) fn session_over() -> GameEvent {
    GameEvent::state("The battle is over. Restart the program to play again!")
}

pub(crate) fn invalid_player_count() -> GameEvent {
    GameEvent::error("Please enter a positive number for the number of players.")
}

pub(crate) fn invalid_boss_name() -> GameEvent {
    GameEvent::error("Please enter a name for the boss.")
}

pub(crate) fn invalid_boss_selection() -> GameEvent {
    GameEvent::error("Please enter 1, 2, or 3 to select your boss.")
}

pub(crate) fn invalid_damage() -> GameEvent {
    GameEvent::error("Please enter a non-negative number for damage.")
}

pub(crate) fn invalid_defeated_players(num_players: i32) -> GameEvent {
    GameEvent::error(format!(
        "Please enter a number between 0 and {} for defeated players.",
        num_players
    ))
}
