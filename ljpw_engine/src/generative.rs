// The generative equation: exponential growth against golden-ratio decay.
//
//     M = B · L^n · φ^(−d)
//
// B is the seed impact, L the Love coefficient (callers remap raw Love from
// [0, 1] to [1, 2] with `1 + L_raw`), n the iteration count (listens,
// repetitions), d the semantic distance from the source.
//
// Everything else here is a view of the same comparison, L^n against φ^d:
// - `life_inequality`: the ratio and its three-way classification
// - `critical_iterations`: smallest n with L^n ≥ φ^d, or `Unreachable`
// - `max_propagation_distance`: largest d sustained after n iterations
// - `hope`: whether growth can ever win, solved at the fixed distance 10
// - `predict_earworm`: a fixed (n, d) scenario turned into a 0–100 score
// - `propagation_analysis`: sustainable distance, reference solves, and a
//   meaning curve for charting
//
// No domain checks. L ≤ 0 with non-integer n, negative distances and the
// like compute whatever the arithmetic gives; the UI validates ranges.

use serde::Serialize;

use crate::config::{PropagationConfig, Scenario};
use crate::metrics::{PHI, Phase};

/// Ratio above this is AUTOPOIETIC.
pub const LIFE_GROWTH_MIN: f64 = 1.1;
/// Ratio above this (up to `LIFE_GROWTH_MIN`) is HOMEOSTATIC; at or below
/// it, ENTROPIC.
pub const LIFE_DECAY_MAX: f64 = 0.9;

/// Reference distance for `hope`, both for the solve and the strength ratio.
pub const HOPE_REFERENCE_DISTANCE: f64 = 10.0;

/// Meaning/seed ratio above which a tune counts as an earworm.
pub const EARWORM_RATIO_MIN: f64 = 1.5;

/// Meaning after `n` iterations at distance `d`: `B · L^n · φ^(−d)`.
pub fn meaning(b: f64, l: f64, n: u32, d: f64) -> f64 {
    b * l.powf(f64::from(n)) * PHI.powf(-d)
}

/// Compression ratio when generators are shared (d = 0, B = 1): `L^n`.
pub fn compression_ratio(l: f64, n: u32) -> f64 {
    l.powf(f64::from(n))
}

/// Growth against decay for one `(L, n, d)` triple.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifeInequality {
    /// `L^n`
    pub growth: f64,
    /// `φ^d`
    pub decay: f64,
    pub ratio: f64,
    pub phase: Phase,
    /// Not ENTROPIC.
    pub is_alive: bool,
    /// What the phase means for a melody.
    pub outlook: &'static str,
    pub verdict: String,
}

pub fn life_inequality(l: f64, n: u32, d: f64) -> LifeInequality {
    let growth = l.powf(f64::from(n));
    let decay = PHI.powf(d);
    let ratio = growth / decay;

    let (phase, outlook) = if ratio > LIFE_GROWTH_MIN {
        (Phase::Autopoietic, "Unforgettable: grows with every listen")
    } else if ratio > LIFE_DECAY_MAX {
        (Phase::Homeostatic, "Stable: pleasant background")
    } else {
        (Phase::Entropic, "Forgettable: fades with distance")
    };

    LifeInequality {
        growth,
        decay,
        ratio,
        phase,
        is_alive: phase != Phase::Entropic,
        outlook,
        verdict: format!("L^{n} = {growth:.2}, phi^{d} = {decay:.2}, Ratio = {ratio:.2}"),
    }
}

/// Solution of `L^n > φ^d` for the smallest integer `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CriticalIterations {
    Reachable(u32),
    /// `L ≤ 1`: growth never outpaces decay.
    Unreachable,
}

impl CriticalIterations {
    pub fn get(self) -> Option<u32> {
        match self {
            CriticalIterations::Reachable(n) => Some(n),
            CriticalIterations::Unreachable => None,
        }
    }

    pub fn is_reachable(self) -> bool {
        matches!(self, CriticalIterations::Reachable(_))
    }
}

/// `ceil(d · ln φ / ln L)`, floored at 1; `Unreachable` when `L ≤ 1`.
pub fn critical_iterations(l: f64, d: f64) -> CriticalIterations {
    if l <= 1.0 {
        return CriticalIterations::Unreachable;
    }
    let n = (d * PHI.ln() / l.ln()).ceil().max(1.0);
    CriticalIterations::Reachable(n as u32)
}

/// `floor(n · ln L / ln φ)`; 0 when `L ≤ 1`.
pub fn max_propagation_distance(l: f64, n: u32) -> u32 {
    if l <= 1.0 {
        return 0;
    }
    (f64::from(n) * l.ln() / PHI.ln()).floor().max(0.0) as u32
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hope {
    pub has_hope: bool,
    /// Iterations needed to outgrow distance 10, when reachable.
    pub critical_n: Option<u32>,
    /// `min(1, 10 / critical_n)`; 0 without hope.
    pub hope_strength: f64,
    pub reason: String,
}

/// Can persistence at Love `l` eventually outgrow any distance?
pub fn hope(l: f64) -> Hope {
    match critical_iterations(l, HOPE_REFERENCE_DISTANCE) {
        CriticalIterations::Reachable(n) => Hope {
            has_hope: true,
            critical_n: Some(n),
            hope_strength: (HOPE_REFERENCE_DISTANCE / f64::from(n)).min(1.0),
            reason: format!(
                "L > 1: growth will exceed decay at n = {n} for d = {HOPE_REFERENCE_DISTANCE}"
            ),
        },
        CriticalIterations::Unreachable => Hope {
            has_hope: false,
            critical_n: None,
            hope_strength: 0.0,
            reason: "L <= 1: growth cannot exceed decay for any d > 0".to_string(),
        },
    }
}

pub const TIP_RAISE_LOVE: &str =
    "Raise Love: lean on major 3rds and 6ths and resolve toward home.";
pub const TIP_PUSH_LOVE: &str =
    "Push Love above 0.9: warmth is what makes a melody come back unbidden.";
pub const TIP_BALANCE: &str =
    "Balance the dimensions: harmony below 0.6 lets the hook decay before it lands.";

/// Earworm prediction for one song.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Earworm {
    pub is_earworm: bool,
    /// 0–100.
    pub earworm_potential: u8,
    /// Iterations needed to outgrow the stickiness distance.
    pub stickiness_iterations: CriticalIterations,
    /// Seed impact `(H + V/φ) / 2`.
    pub initial_impact: f64,
    /// Meaning after the scenario's iterations and distance.
    pub meaning_after: f64,
    /// `meaning_after / initial_impact`.
    pub ratio: f64,
    pub life: LifeInequality,
    /// Empty for earworms.
    pub tips: Vec<&'static str>,
}

/// Predict whether a song with raw Love `l_raw`, harmony `h` and voltage
/// `v` will stick.
pub fn predict_earworm(
    l_raw: f64,
    h: f64,
    v: f64,
    scenario: &Scenario,
    stickiness_distance: f64,
) -> Earworm {
    let love = 1.0 + l_raw;
    let initial_impact = (h + v / PHI) / 2.0;
    let meaning_after = meaning(initial_impact, love, scenario.iterations, scenario.distance);
    let life = life_inequality(love, scenario.iterations, scenario.distance);
    // The seed cancels out of meaning_after / initial_impact, leaving the
    // growth/decay ratio; use it directly so a zero seed cannot produce NaN.
    let ratio = life.ratio;

    let is_earworm = ratio > EARWORM_RATIO_MIN && life.is_alive;
    let earworm_potential = ((ratio / 3.0).min(1.0) * 100.0).round() as u8;

    let mut tips = Vec::new();
    if !is_earworm {
        if l_raw < 0.7 {
            tips.push(TIP_RAISE_LOVE);
        } else if l_raw < 0.9 {
            tips.push(TIP_PUSH_LOVE);
        }
        if h < 0.6 {
            tips.push(TIP_BALANCE);
        }
    }

    log::debug!(
        "earworm: L={l_raw:.3} H={h:.3} V={v:.3} ratio={ratio:.3} earworm={is_earworm}"
    );

    Earworm {
        is_earworm,
        earworm_potential,
        stickiness_iterations: critical_iterations(love, stickiness_distance),
        initial_impact,
        meaning_after,
        ratio,
        life,
        tips,
    }
}

/// Critical iterations at one reference distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CriticalPoint {
    pub distance: f64,
    pub iterations: CriticalIterations,
}

/// One sample of the meaning surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub iterations: u32,
    pub distance: u32,
    pub meaning: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Propagation {
    pub max_sustainable_distance: u32,
    pub critical_iterations: Vec<CriticalPoint>,
    /// `(n, d) → meaning` for n in `0..=max_iterations`, d in steps of
    /// `distance_step` from 0 to `max_distance`.
    pub curve: Vec<CurvePoint>,
}

/// How far meaning seeded with impact `b` at raw Love `l_raw` can travel.
pub fn propagation_analysis(l_raw: f64, b: f64, config: &PropagationConfig) -> Propagation {
    let love = 1.0 + l_raw;
    let step = config.distance_step.max(1) as usize;

    let critical_iterations = config
        .reference_distances
        .iter()
        .map(|&distance| CriticalPoint {
            distance,
            iterations: critical_iterations(love, distance),
        })
        .collect();

    let mut curve = Vec::new();
    for n in 0..=config.max_iterations {
        for d in (0..=config.max_distance).step_by(step) {
            curve.push(CurvePoint {
                iterations: n,
                distance: d,
                meaning: meaning(b, love, n, f64::from(d)),
            });
        }
    }

    let max_sustainable_distance = max_propagation_distance(love, config.max_iterations);
    log::debug!(
        "propagation: L={l_raw:.3} max distance {max_sustainable_distance} \
         over {} iterations, {} curve points",
        config.max_iterations,
        curve.len()
    );

    Propagation {
        max_sustainable_distance,
        critical_iterations,
        curve,
    }
}
