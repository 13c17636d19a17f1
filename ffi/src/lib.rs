use engine::{play_transcript, Dice, TranscriptConfig};
use jni::objects::{JClass, JString};
use jni::sys::{jint, jlong, jstring};
use jni::JNIEnv;
use serde_json::json;

fn ok(env: &JNIEnv, value: serde_json::Value) -> jstring {
    let payload = json!({ "ok": true, "result": value });
    env.new_string(serde_json::to_string(&payload).unwrap())
        .unwrap()
        .into_raw()
}

fn err(env: &JNIEnv, e: impl std::fmt::Display) -> jstring {
    env.new_string(format!(r#"{{"ok":false,"error":"{}"}}"#, e))
        .unwrap()
        .into_raw()
}

#[no_mangle]
pub extern "system" fn Java_com_raidboss_Ffi_version<'local>(
    env: JNIEnv<'local>,
    _class: JClass<'local>,
) -> JString<'local> {
    env.new_string("raidboss-ffi 0.1.0")
        .expect("new_string failed")
}

/// Deterministic boss dice: sum of `n` rolls, each in 0..=10.
/// Handles edge cases: n<=0 → 0.
#[no_mangle]
pub extern "system" fn Java_com_raidboss_Ffi_roll(
    _env: JNIEnv<'_>,
    _class: JClass<'_>,
    seed: jlong,
    n: jint,
) -> jint {
    roll_internal(seed, n)
}

/// Stateless game driver for a host UI: the host keeps the transcript of
/// lines the player has typed and replays it with the same seed after each
/// new input. The preroll design makes every replay land on identical
/// events, so no session handle has to cross the JNI boundary.
#[no_mangle]
pub extern "system" fn Java_com_raidboss_Ffi_playTranscriptJson(
    mut env: JNIEnv,
    _class: JClass,
    config: JString,
) -> jstring {
    let input: String = match env.get_string(&config) {
        Ok(s) => s.into(),
        Err(e) => return err(&env, e),
    };
    let cfg: TranscriptConfig = match serde_json::from_str(&input) {
        Ok(c) => c,
        Err(e) => return err(&env, format!("invalid_config: {}", e)),
    };
    match play_transcript(cfg) {
        Ok(events) => ok(&env, serde_json::to_value(events).unwrap()),
        Err(e) => err(&env, e),
    }
}

// Internal functions for testing without JNI overhead
pub fn roll_internal(seed: i64, n: i32) -> i32 {
    let mut dice = Dice::from_seed(seed as u64);
    let mut total = 0i32;
    for _ in 0..n.max(0) {
        total += i32::from(dice.roll().index());
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_internal() {
        // Same seed should give same result
        let result1 = roll_internal(42, 3);
        let result2 = roll_internal(42, 3);
        assert_eq!(result1, result2);
        assert!((0..=30).contains(&result1)); // 3 boss rolls, each 0..=10
    }

    #[test]
    fn test_roll_edge_cases() {
        assert_eq!(roll_internal(42, 0), 0); // No rolls
        assert_eq!(roll_internal(42, -3), 0); // Negative count
    }

    #[test]
    fn test_transcript_replay_reaches_victory() {
        let cfg = TranscriptConfig {
            seed: 7,
            lines: ["4", "Gorehowl", "1", "1000", "0"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        };
        let events = play_transcript(cfg).expect("transcript ran");
        assert!(events
            .iter()
            .any(|e| e.text.contains("Congratulations! You have defeated Gorehowl!")));
    }
}
