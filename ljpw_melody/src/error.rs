// Error types for melody input and analysis.
//
// Nothing here is fatal: every variant is a "cannot analyze this input"
// answer the game shows to the player (e.g. "need at least 2 notes").

use thiserror::Error;

/// A note token that could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NoteParseError {
    #[error("empty note token")]
    Empty,

    #[error("unknown pitch name in {0:?}")]
    UnknownPitch(String),

    #[error("missing or malformed octave in {0:?}")]
    BadOctave(String),
}

#[derive(Error, Debug)]
pub enum MelodyError {
    #[error("need at least 2 notes (got {count})")]
    TooFewNotes { count: usize },

    #[error("invalid note: {0}")]
    InvalidNote(#[from] NoteParseError),

    #[error("melody is full ({capacity} notes)")]
    Full { capacity: usize },

    #[error("melody snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}
