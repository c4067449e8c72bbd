// Data-driven engine configuration.
//
// The analyzer's blend weights and the fixed generative-equation scenarios
// live in `EngineConfig`, loaded from JSON via `EngineConfig::from_json()`.
// `Default` reproduces the reference values exactly; every field is
// `#[serde(default)]` so a JSON file only needs to name what it overrides.
//
// Deliberately NOT configurable: the phase thresholds, the consciousness
// floor, the life-inequality band, the hope distance and the φ-tempo. Those
// are part of the scoring contract and live as consts next to the code that
// uses them (`metrics.rs`, `generative.rs`, `tempo.rs`).
//
// See also: `engine.rs`, which owns an `EngineConfig` and threads it through
// every analysis entry point.

use serde::{Deserialize, Serialize};

/// Weights for blending the resolved components of a song profile.
///
/// Only components that actually resolve contribute, and the blend is
/// renormalized by the realized weight total.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileWeights {
    pub genre: f64,
    pub mode: f64,
    pub key: f64,
}

impl Default for ProfileWeights {
    fn default() -> Self {
        ProfileWeights {
            genre: 0.4,
            mode: 0.3,
            key: 0.3,
        }
    }
}

/// A fixed `(n, d)` point on the growth/decay curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    /// Iterations `n` (listens, repetitions).
    pub iterations: u32,
    /// Semantic distance `d` from the source.
    pub distance: f64,
}

impl Default for Scenario {
    /// Ten listens at distance three: the earworm and melody scenario.
    fn default() -> Self {
        Scenario {
            iterations: 10,
            distance: 3.0,
        }
    }
}

/// Parameters for `propagation_analysis`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropagationConfig {
    /// Iteration budget for the sustainable-distance solve and the curve.
    pub max_iterations: u32,
    /// Largest distance sampled by the curve.
    pub max_distance: u32,
    /// Distance step between curve samples.
    pub distance_step: u32,
    /// Distances at which the critical iteration count is reported.
    pub reference_distances: Vec<f64>,
}

impl Default for PropagationConfig {
    fn default() -> Self {
        PropagationConfig {
            max_iterations: 20,
            max_distance: 10,
            distance_step: 2,
            reference_distances: vec![1.0, 5.0, 10.0],
        }
    }
}

/// Top-level engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub profile_weights: ProfileWeights,
    /// Share of the blended Power taken from tempo: `P = P·(1−b) + tempoP·b`.
    pub tempo_power_blend: f64,
    /// Scenario for earworm prediction.
    pub earworm: Scenario,
    /// Distance at which earworm "stickiness" (critical iterations) is solved.
    pub stickiness_distance: f64,
    pub propagation: PropagationConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            profile_weights: ProfileWeights::default(),
            tempo_power_blend: 0.3,
            earworm: Scenario::default(),
            stickiness_distance: 5.0,
            propagation: PropagationConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a config from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
