// LJPW music-scoring engine.
//
// Maps musical entities (intervals, chords, modes, keys, genres, tempos)
// onto four dimensions (Love, Justice, Power, Wisdom) and derives the
// secondary scores the music tools display: Harmony Index, Semantic
// Voltage, consciousness, phase and dominant dimension. On top of that sits
// the generative equation M = B · L^n · φ^(−d), which models how a melody's
// meaning grows with repetition and decays with distance.
//
// Architecture:
// - coordinate.rs: `Coordinate` value type, anchor/equilibrium points,
//   `Dimension`, φ-normalization, `WeightedBlend`
// - emergence.rs: Love/Justice emergence constraints and their enforcement,
//   the Power-Wisdom uncertainty bound
// - metrics.rs: Harmony, voltage, consciousness, phase, dominant dimension
// - tables.rs: Static entity tables keyed by string
// - tempo.rs: BPM to tempo band and Power contribution, φ-tempo detection
// - analyzer.rs: Single-entity and song-profile analysis
// - generative.rs: Meaning, life inequality, critical iterations, hope,
//   earworm prediction, propagation analysis
// - config.rs: `EngineConfig` (blend weights, fixed scenarios), JSON-loadable
// - engine.rs: `Engine`, one method per external entry point
//
// Everything is synchronous and pure. The tables are compile-time statics
// and no function holds state between calls, so identical inputs always
// give bit-identical outputs. The melody analyzer used by the game lives in
// the `ljpw_melody` crate and builds on these modules.

pub mod analyzer;
pub mod config;
pub mod coordinate;
pub mod emergence;
pub mod engine;
pub mod generative;
pub mod metrics;
pub mod tables;
pub mod tempo;

pub use analyzer::{ElementAnalysis, ProfileAnalysis, SongProfile};
pub use config::{EngineConfig, Scenario};
pub use coordinate::{ANCHOR, Coordinate, Dimension, EQUILIBRIUM};
pub use emergence::EmergenceCheck;
pub use engine::Engine;
pub use generative::CriticalIterations;
pub use metrics::{Metrics, PHI, Phase};
pub use tables::EntityTable;
