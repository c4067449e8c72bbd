// Melody builder and analyzer for the LJPW music game.
//
// The player builds a short melody note by note; this crate scores it on
// the engine's four dimensions and explains the result.
//
// Architecture:
// - note.rs: `Note` tokens ("C4", "F#3", "Bb-1") and absolute semitones
// - melody.rs: `Melody`, the capacity-bounded note list with JSON snapshots
// - analysis.rs: interval extraction, averaging, memorability and feedback
// - config.rs: `MelodyConfig` (capacity, growth/decay scenario)
// - error.rs: `MelodyError`, `NoteParseError`
//
// All scoring goes through `ljpw_engine`: the interval table, `Metrics` and
// `life_inequality`. Nothing here holds shared state.

pub mod analysis;
pub mod config;
pub mod error;
pub mod melody;
pub mod note;

pub use analysis::{
    Feedback, FeedbackKind, FeedbackTopic, MelodyAnalysis, analyze_melody, analyze_notes,
};
pub use config::MelodyConfig;
pub use error::{MelodyError, NoteParseError};
pub use melody::Melody;
pub use note::Note;
