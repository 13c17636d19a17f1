use clap::{Parser, Subcommand};
use engine::{
    play_transcript, AttackSchedule, Dice, EventKind, GameEvent, Session, TranscriptConfig,
    SCHEDULE_HORIZON,
};
use std::io::{self, BufRead, Write};
use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

#[derive(Subcommand)]
enum Cmd {
    /// Play an interactive game on stdin/stdout
    Play {
        /// RNG seed for determinism (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Emit events as JSON lines instead of rendered text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Replay a recorded transcript (one game input per line)
    Replay {
        /// Path to the transcript file
        #[arg(long)]
        file: PathBuf,
        /// RNG seed the transcript was recorded against
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Emit events as JSON lines instead of rendered text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Roll the boss dice a few times
    Roll {
        /// RNG seed for determinism
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Number of rolls
        #[arg(long, default_value_t = 5)]
        rolls: u32,
    },
    /// Dump the leading turns of a prerolled attack schedule as JSON (stdout)
    Schedule {
        /// RNG seed for determinism
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Number of leading turns to include
        #[arg(long, default_value_t = 10)]
        turns: usize,
    },
}

#[derive(Parser)]
#[command(name = "raidboss")]
#[command(about = "Raid Boss terminal adapter")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Play { seed, json } => {
            let seed = seed.unwrap_or_else(rand::random);
            play(seed, json)?;
        }
        Cmd::Replay { file, seed, json } => {
            let raw = fs::read_to_string(&file)
                .with_context(|| format!("failed to read transcript: {}", file.display()))?;
            let cfg = TranscriptConfig {
                seed,
                lines: raw.lines().map(str::to_string).collect(),
            };
            let events = play_transcript(cfg)?;
            render(&mut io::stdout().lock(), &events, json)?;
        }
        Cmd::Roll { seed, rolls } => {
            let mut dice = Dice::from_seed(seed);
            for _ in 0..rolls {
                println!("{}", dice.roll().index());
            }
        }
        Cmd::Schedule { seed, turns } => {
            let mut dice = Dice::from_seed(seed);
            let schedule = AttackSchedule::build(&mut dice, SCHEDULE_HORIZON);
            let mut leading = Vec::with_capacity(turns);
            for turn in 0..turns {
                leading.push(schedule.attacks_on(turn)?.to_vec());
            }
            println!("{}", serde_json::to_string_pretty(&leading)?);
        }
    }
    Ok(())
}

fn play(seed: u64, json: bool) -> Result<()> {
    let mut session = Session::new(seed);
    let stdout = io::stdout();
    render(&mut stdout.lock(), &session.greeting(), json)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read input line")?;
        let events = session.handle_line(&line)?;
        render(&mut stdout.lock(), &events, json)?;
        if session.is_over() {
            break;
        }
    }
    Ok(())
}

/// The engine guarantees ordering and tagging; spacing and emphasis are ours.
fn render(out: &mut impl Write, events: &[GameEvent], json: bool) -> Result<()> {
    for event in events {
        if json {
            writeln!(out, "{}", serde_json::to_string(event)?)?;
            continue;
        }
        match event.kind {
            EventKind::Error => writeln!(out, "!! {}\n", event.text)?,
            EventKind::BossAttack => writeln!(out, "{}\n", event.text)?,
            _ => writeln!(out, "{}", event.text)?,
        }
    }
    out.flush()?;
    Ok(())
}
