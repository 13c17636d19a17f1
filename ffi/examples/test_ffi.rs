// Drive the engine the way a JVM host would, without a JVM.
use engine::{play_transcript, Dice, TranscriptConfig};

fn main() {
    println!("FFI Version: raidboss-ffi 0.1.0");

    // Test determinism of the boss dice
    let roll3 = |seed: u64| -> i32 {
        let mut dice = Dice::from_seed(seed);
        (0..3).map(|_| i32::from(dice.roll().index())).sum()
    };
    println!("roll3(42) = {}", roll3(42));
    println!("Determinism check:");
    println!("  First call:  roll3(999) = {}", roll3(999));
    println!("  Second call: roll3(999) = {}", roll3(999));

    // Replay a short victory transcript
    let cfg = TranscriptConfig {
        seed: 7,
        lines: ["4", "Gorehowl", "1", "1000", "0"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    };
    match play_transcript(cfg) {
        Ok(events) => {
            println!("transcript produced {} events", events.len());
            if let Some(last) = events.last() {
                println!("last event: {}", last.text);
            }
        }
        Err(e) => println!("engine error: {}", e),
    }
}
