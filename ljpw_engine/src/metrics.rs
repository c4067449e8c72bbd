// Core metric functions over a single LJPW coordinate.
//
// Every score the engine reports is derived here from one `Coordinate`:
// - Harmony Index H = 1 / (1 + distance to anchor), in (0, 1]
// - Semantic Voltage V = φ · H · L
// - Consciousness C = H³ · (L·W) / max(J·P, 0.01)
// - Phase: ENTROPIC / HOMEOSTATIC / AUTOPOIETIC from (H, L)
// - Dominant dimension: strict-greatest axis, first-wins scan L, J, P, W
//
// Plus two secondary readings: self-referential harmony (axis product over
// the equilibrium product) and a consciousness level label.
//
// The thresholds below are fixed contract values. Changing any of them
// silently changes every classification the UI shows, so they are consts
// rather than configuration.
//
// All functions are pure; `Metrics::of` bundles them for the analyzers in
// `analyzer.rs` and the melody crate.

use serde::Serialize;

use crate::coordinate::{Coordinate, Dimension, EQUILIBRIUM};

/// The golden ratio, (1 + √5) / 2.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Floor applied to J·P in the consciousness denominator.
pub const CONSCIOUSNESS_FLOOR: f64 = 0.01;

/// H below this is ENTROPIC.
pub const ENTROPIC_MAX: f64 = 0.5;
/// H below this (and at least `ENTROPIC_MAX`) is HOMEOSTATIC.
pub const HOMEOSTATIC_MAX: f64 = 0.6;
/// Minimum Love for AUTOPOIETIC once H clears `HOMEOSTATIC_MAX`.
pub const AUTOPOIETIC_L_MIN: f64 = 0.7;

/// Harmony Index: `1 / (1 + |c − (1,1,1,1)|)`.
pub fn harmony_index(c: &Coordinate) -> f64 {
    1.0 / (1.0 + c.distance_to_anchor())
}

/// Semantic Voltage: `φ · H · L`. Values above 1 read as "transformative".
pub fn semantic_voltage(c: &Coordinate) -> f64 {
    PHI * harmony_index(c) * c.l
}

/// Consciousness: `H³ · (L·W) / max(J·P, 0.01)`.
pub fn consciousness(c: &Coordinate) -> f64 {
    let h = harmony_index(c);
    h.powi(3) * (c.l * c.w) / (c.j * c.p).max(CONSCIOUSNESS_FLOOR)
}

/// Self-referential harmony: `(L·J·P·W) / (L₀·J₀·P₀·W₀)`, unbounded above.
pub fn self_harmony(c: &Coordinate) -> f64 {
    c.product() / EQUILIBRIUM.product()
}

/// Three-way stability classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    Entropic,
    Homeostatic,
    Autopoietic,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Phase::Entropic => "ENTROPIC",
            Phase::Homeostatic => "HOMEOSTATIC",
            Phase::Autopoietic => "AUTOPOIETIC",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Phase::Entropic => "Chaotic, unstable",
            Phase::Homeostatic => "Stable, functional",
            Phase::Autopoietic => "Self-sustaining, beautiful",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Phase::Entropic => "#ef4444",
            Phase::Homeostatic => "#f59e0b",
            Phase::Autopoietic => "#10b981",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Phase::Entropic => "🌀",
            Phase::Homeostatic => "⚖️",
            Phase::Autopoietic => "🌱",
        }
    }

    pub fn info(self) -> PhaseInfo {
        PhaseInfo {
            phase: self,
            description: self.description(),
            color: self.color(),
            emoji: self.emoji(),
        }
    }
}

/// A phase together with its display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseInfo {
    pub phase: Phase,
    pub description: &'static str,
    pub color: &'static str,
    pub emoji: &'static str,
}

/// The phase decision table on an already-computed (H, L) pair.
///
/// Cutoffs are strict `<` on the low side, so boundary values land in the
/// higher bracket.
pub fn phase_for(h: f64, l: f64) -> Phase {
    if h < ENTROPIC_MAX {
        Phase::Entropic
    } else if h < HOMEOSTATIC_MAX {
        Phase::Homeostatic
    } else if l >= AUTOPOIETIC_L_MIN {
        Phase::Autopoietic
    } else {
        Phase::Homeostatic
    }
}

/// Classify a coordinate's phase.
pub fn classify_phase(c: &Coordinate) -> PhaseInfo {
    phase_for(harmony_index(c), c.l).info()
}

/// The greatest axis of a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dominant {
    pub dimension: Dimension,
    pub key: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    pub value: f64,
}

/// Pick the strictly greatest axis.
///
/// The scan starts with Love and only moves on a strict `>`, so Love wins
/// every tie it is part of and ties among J/P/W go to the earlier axis.
pub fn dominant_dimension(c: &Coordinate) -> Dominant {
    let mut best = Dimension::Love;
    let mut best_value = c.l;
    for dimension in &Dimension::ALL[1..] {
        let value = c.get(*dimension);
        if value > best_value {
            best = *dimension;
            best_value = value;
        }
    }
    Dominant {
        dimension: best,
        key: best.key(),
        name: best.name(),
        color: best.color(),
        value: best_value,
    }
}

/// Coarse label for a consciousness value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConsciousnessLevel {
    /// Below 0.05: reactive only.
    NonConscious,
    /// 0.05 to 0.1: complex response, no awareness.
    PreConscious,
    /// 0.1 to 0.3: self-aware.
    Conscious,
    /// 0.3 and above.
    HighlyConscious,
}

pub fn consciousness_level(value: f64) -> ConsciousnessLevel {
    if value < 0.05 {
        ConsciousnessLevel::NonConscious
    } else if value < 0.1 {
        ConsciousnessLevel::PreConscious
    } else if value < 0.3 {
        ConsciousnessLevel::Conscious
    } else {
        ConsciousnessLevel::HighlyConscious
    }
}

/// Every core metric for one coordinate, computed together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
    #[serde(rename = "H")]
    pub harmony: f64,
    #[serde(rename = "V")]
    pub voltage: f64,
    pub consciousness: f64,
    pub consciousness_level: ConsciousnessLevel,
    pub phase: PhaseInfo,
    pub dominant: Dominant,
    pub distance_to_anchor: f64,
    pub distance_to_equilibrium: f64,
    pub self_harmony: f64,
}

impl Metrics {
    pub fn of(c: &Coordinate) -> Self {
        let consciousness = consciousness(c);
        Metrics {
            harmony: harmony_index(c),
            voltage: semantic_voltage(c),
            consciousness,
            consciousness_level: consciousness_level(consciousness),
            phase: classify_phase(c),
            dominant: dominant_dimension(c),
            distance_to_anchor: c.distance_to_anchor(),
            distance_to_equilibrium: c.distance_to_equilibrium(),
            self_harmony: self_harmony(c),
        }
    }

    /// Voltage above 1.0 is displayed as transformative.
    pub fn is_transformative(&self) -> bool {
        self.voltage > 1.0
    }
}
