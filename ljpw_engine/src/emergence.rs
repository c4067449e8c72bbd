// Emergence constraints on measured coordinates.
//
// Power and Wisdom are treated as the fundamental axes; Love and Justice are
// expected to follow from them:
// - Love tracks Wisdom: `L ≈ 0.9·W + 0.1`
// - Justice tracks Power: `J ≈ 0.85·P + 0.05`
// - Power and Wisdom vary independently, so `P·W / (P₀·W₀)` stays within
//   [0.3, 2.0]
//
// `check_emergence` reports each broken constraint and an overall quality
// score (1.0 with no violations, scaled down per violation).
// `enforce_emergence` pulls Love and Justice toward their predictions and
// leaves Power and Wisdom alone. `satisfies_uncertainty` checks a pair of
// measurement errors against the uncertainty bound `ΔP·ΔW ≥ J₀·W₀`.
//
// These are meant for coordinates that come from outside the static tables,
// e.g. ones mapped from audio features. Nothing in the table analysis path
// calls them.

use serde::Serialize;

use crate::coordinate::{Coordinate, Dimension, EQUILIBRIUM};

/// Largest tolerated gap between a measured axis and its prediction.
pub const EMERGENCE_TOLERANCE: f64 = 0.15;

/// Allowed range of `P·W / (P₀·W₀)`.
pub const COUPLING_RATIO_MIN: f64 = 0.3;
pub const COUPLING_RATIO_MAX: f64 = 2.0;

/// Quality factor applied per Love/Justice violation.
const EMERGENCE_PENALTY: f64 = 0.7;
/// Quality factor applied for a Power-Wisdom coupling violation.
const COUPLING_PENALTY: f64 = 0.8;

/// Default blend weight for `enforce_emergence`.
pub const DEFAULT_ENFORCEMENT: f64 = 0.7;

/// Minimum `ΔP·ΔW`: `(√2 − 1) · ln 2 ≈ 0.287`.
pub const UNCERTAINTY_BOUND: f64 = EQUILIBRIUM.j * EQUILIBRIUM.w;

/// Love predicted from Wisdom.
pub fn expected_love(w: f64) -> f64 {
    0.9 * w + 0.1
}

/// Justice predicted from Power.
pub fn expected_justice(p: f64) -> f64 {
    0.85 * p + 0.05
}

/// `P·W` relative to its value at equilibrium.
pub fn coupling_ratio(c: &Coordinate) -> f64 {
    (c.p * c.w) / (EQUILIBRIUM.p * EQUILIBRIUM.w)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Love strays from its Wisdom prediction.
    LoveWisdom,
    /// Justice strays from its Power prediction.
    JusticePower,
    /// Power and Wisdom look artificially coupled.
    PowerWisdomCoupling,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub kind: ViolationKind,
    /// The axis to correct; `None` for the coupling check.
    pub dimension: Option<Dimension>,
    /// Predicted axis value, or the measured coupling ratio.
    pub expected: f64,
    pub actual: f64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmergenceCheck {
    pub valid: bool,
    pub violations: Vec<Violation>,
    /// 1.0 when every constraint holds.
    pub quality: f64,
}

pub fn check_emergence(c: &Coordinate) -> EmergenceCheck {
    let mut violations = Vec::new();
    let mut quality = 1.0;

    let love = expected_love(c.w);
    if (c.l - love).abs() > EMERGENCE_TOLERANCE {
        violations.push(Violation {
            kind: ViolationKind::LoveWisdom,
            dimension: Some(Dimension::Love),
            expected: love,
            actual: c.l,
            message: format!(
                "L = {:.3} deviates from W-based prediction {love:.3}; set L ≈ 0.9·W + 0.1",
                c.l
            ),
        });
        quality *= EMERGENCE_PENALTY;
    }

    let justice = expected_justice(c.p);
    if (c.j - justice).abs() > EMERGENCE_TOLERANCE {
        violations.push(Violation {
            kind: ViolationKind::JusticePower,
            dimension: Some(Dimension::Justice),
            expected: justice,
            actual: c.j,
            message: format!(
                "J = {:.3} deviates from P-based prediction {justice:.3}; set J ≈ 0.85·P + 0.05",
                c.j
            ),
        });
        quality *= EMERGENCE_PENALTY;
    }

    let ratio = coupling_ratio(c);
    if !(COUPLING_RATIO_MIN..=COUPLING_RATIO_MAX).contains(&ratio) {
        violations.push(Violation {
            kind: ViolationKind::PowerWisdomCoupling,
            dimension: None,
            expected: 1.0,
            actual: ratio,
            message: format!("P·W ratio {ratio:.3} suggests Power and Wisdom are coupled"),
        });
        quality *= COUPLING_PENALTY;
    }

    if !violations.is_empty() {
        log::debug!("emergence check: {} violation(s), quality {quality:.3}", violations.len());
    }

    EmergenceCheck {
        valid: violations.is_empty(),
        violations,
        quality,
    }
}

/// Blend Love and Justice toward their predictions.
///
/// `weight` is clamped to [0, 1]: 0 returns the coordinate unchanged, 1
/// replaces both axes with the predictions. Power and Wisdom never change.
pub fn enforce_emergence(c: &Coordinate, weight: f64) -> Coordinate {
    let weight = weight.clamp(0.0, 1.0);
    Coordinate::new(
        (1.0 - weight) * c.l + weight * expected_love(c.w),
        (1.0 - weight) * c.j + weight * expected_justice(c.p),
        c.p,
        c.w,
    )
}

/// Whether a measurement's Power and Wisdom errors respect `UNCERTAINTY_BOUND`.
pub fn satisfies_uncertainty(delta_p: f64, delta_w: f64) -> bool {
    delta_p * delta_w >= UNCERTAINTY_BOUND
}
