use thiserror::Error;

/// Fatal engine failures.
///
/// Ordinary bad input (non-numeric text, out-of-range numbers, an empty boss
/// name) is not an error at this level: the session recovers in place and
/// reports it as an [`crate::EventKind::Error`] event. The only way a running
/// session can actually fail is outliving its prerolled schedule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("turn {turn} is past the prerolled horizon of {horizon} turns")]
    ScheduleExhausted { turn: usize, horizon: usize },
}
