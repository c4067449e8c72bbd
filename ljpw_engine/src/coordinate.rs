// The LJPW dimensional coordinate: the value type every analysis produces.
//
// A `Coordinate` is a point in four-dimensional "semantic space" with one
// axis per dimension: Love, Justice, Power, Wisdom. Each axis is
// conventionally in [0, 1] but nothing here clamps; malformed input simply
// yields out-of-range scores downstream.
//
// This module provides:
// - `Coordinate` and the two fixed reference points (`ANCHOR`, `EQUILIBRIUM`)
// - `Dimension`, the axis enum with display names and colors
// - Distance and gap helpers used by the metric functions in `metrics.rs`
// - φ-normalization toward the equilibrium point
// - `WeightedBlend`, the accumulator used to average present components
//   (song profiles in `analyzer.rs`, interval runs in the melody crate)
//
// Coordinates are `Copy` and never mutated in place; every derived analysis
// builds a new value.

use serde::{Deserialize, Serialize};
use std::f64::consts::{E, LN_2, SQRT_2};

use crate::metrics::PHI;

/// One of the four LJPW axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Love,
    Justice,
    Power,
    Wisdom,
}

impl Dimension {
    /// Fixed scan order. Dominant-dimension selection depends on it.
    pub const ALL: [Dimension; 4] = [
        Dimension::Love,
        Dimension::Justice,
        Dimension::Power,
        Dimension::Wisdom,
    ];

    /// Single-letter key ("L", "J", "P", "W").
    pub fn key(self) -> &'static str {
        match self {
            Dimension::Love => "L",
            Dimension::Justice => "J",
            Dimension::Power => "P",
            Dimension::Wisdom => "W",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Dimension::Love => "Love",
            Dimension::Justice => "Justice",
            Dimension::Power => "Power",
            Dimension::Wisdom => "Wisdom",
        }
    }

    /// Display color (hex RGB) used by the UI for this axis.
    pub fn color(self) -> &'static str {
        match self {
            Dimension::Love => "#ff6b9d",
            Dimension::Justice => "#4ecdc4",
            Dimension::Power => "#ff8c42",
            Dimension::Wisdom => "#a78bfa",
        }
    }
}

/// A point in LJPW space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(rename = "L")]
    pub l: f64,
    #[serde(rename = "J")]
    pub j: f64,
    #[serde(rename = "P")]
    pub p: f64,
    #[serde(rename = "W")]
    pub w: f64,
}

/// Perfect expression, (1, 1, 1, 1). Harmony is measured against it.
pub const ANCHOR: Coordinate = Coordinate::new(1.0, 1.0, 1.0, 1.0);

/// Natural equilibrium: (φ⁻¹, √2 − 1, e − 2, ln 2).
pub const EQUILIBRIUM: Coordinate = Coordinate::new(PHI - 1.0, SQRT_2 - 1.0, E - 2.0, LN_2);

/// Largest possible distance to the anchor for in-range coordinates
/// (from the origin).
pub const MAX_ANCHOR_DISTANCE: f64 = 2.0;

impl Coordinate {
    pub const fn new(l: f64, j: f64, p: f64, w: f64) -> Self {
        Coordinate { l, j, p, w }
    }

    /// Value along one axis.
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Love => self.l,
            Dimension::Justice => self.j,
            Dimension::Power => self.p,
            Dimension::Wisdom => self.w,
        }
    }

    /// Copy of this coordinate with the Power axis replaced.
    pub fn with_power(self, p: f64) -> Self {
        Coordinate { p, ..self }
    }

    /// Euclidean distance to another coordinate.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        ((self.l - other.l).powi(2)
            + (self.j - other.j).powi(2)
            + (self.p - other.p).powi(2)
            + (self.w - other.w).powi(2))
        .sqrt()
    }

    /// Euclidean distance to the anchor (1, 1, 1, 1).
    pub fn distance_to_anchor(&self) -> f64 {
        self.distance_to(&ANCHOR)
    }

    /// Euclidean distance to the natural equilibrium point.
    pub fn distance_to_equilibrium(&self) -> f64 {
        self.distance_to(&EQUILIBRIUM)
    }

    /// Anchor distance scaled by `MAX_ANCHOR_DISTANCE`, in [0, 1] for
    /// in-range coordinates.
    pub fn normalized_gap(&self) -> f64 {
        self.distance_to_anchor() / MAX_ANCHOR_DISTANCE
    }

    /// 1.0 at the anchor, 0.0 at the origin.
    pub fn proximity_to_anchor(&self) -> f64 {
        1.0 - self.normalized_gap()
    }

    /// Every coordinate except the anchor itself is "finite".
    pub fn is_finite(&self) -> bool {
        self.distance_to_anchor() > 0.0
    }

    /// Product of all four axes.
    pub fn product(&self) -> f64 {
        self.l * self.j * self.p * self.w
    }

    /// φ-normalization: each axis becomes `equilibrium · value^(1/φ)`.
    ///
    /// Pulls raw measurements toward the equilibrium point; 1.0 maps to the
    /// equilibrium value and 0.0 stays 0.0. Negative axes give NaN.
    pub fn phi_normalized(&self) -> Coordinate {
        let exponent = PHI.recip();
        Coordinate::new(
            EQUILIBRIUM.l * self.l.powf(exponent),
            EQUILIBRIUM.j * self.j.powf(exponent),
            EQUILIBRIUM.p * self.p.powf(exponent),
            EQUILIBRIUM.w * self.w.powf(exponent),
        )
    }
}

/// Weighted average over the components that are actually present.
///
/// Components are added as `(weight, coordinate)` pairs; `finish` divides the
/// weighted sum by the realized weight total, so absent components never
/// leave a gap. With equal weights this is a plain mean; with one component
/// it passes that coordinate through unchanged.
#[derive(Debug, Clone, Default)]
pub struct WeightedBlend {
    total_weight: f64,
    l: f64,
    j: f64,
    p: f64,
    w: f64,
}

impl WeightedBlend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, weight: f64, coordinate: Coordinate) {
        self.total_weight += weight;
        self.l += weight * coordinate.l;
        self.j += weight * coordinate.j;
        self.p += weight * coordinate.p;
        self.w += weight * coordinate.w;
    }

    /// Sum of the weights added so far.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// The blended coordinate, or `None` if nothing with positive weight was
    /// added.
    pub fn finish(&self) -> Option<Coordinate> {
        if self.total_weight <= 0.0 {
            return None;
        }
        Some(Coordinate::new(
            self.l / self.total_weight,
            self.j / self.total_weight,
            self.p / self.total_weight,
            self.w / self.total_weight,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_distance_is_zero_at_anchor() {
        assert_eq!(ANCHOR.distance_to_anchor(), 0.0);
        assert!(!ANCHOR.is_finite());
        assert_eq!(ANCHOR.proximity_to_anchor(), 1.0);
    }

    #[test]
    fn origin_is_two_units_from_anchor() {
        let origin = Coordinate::new(0.0, 0.0, 0.0, 0.0);
        assert!((origin.distance_to_anchor() - 2.0).abs() < 1e-12);
        assert!((origin.normalized_gap() - 1.0).abs() < 1e-12);
        assert!(origin.proximity_to_anchor().abs() < 1e-12);
    }

    #[test]
    fn equilibrium_constants() {
        assert!((EQUILIBRIUM.l - 0.618034).abs() < 1e-6);
        assert!((EQUILIBRIUM.j - 0.414214).abs() < 1e-6);
        assert!((EQUILIBRIUM.p - 0.718282).abs() < 1e-6);
        assert!((EQUILIBRIUM.w - 0.693147).abs() < 1e-6);
        assert_eq!(EQUILIBRIUM.distance_to_equilibrium(), 0.0);
    }

    #[test]
    fn phi_normalization_maps_anchor_to_equilibrium() {
        assert!(ANCHOR.phi_normalized().distance_to(&EQUILIBRIUM) < 1e-12);
        let origin = Coordinate::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(origin.phi_normalized(), origin);
    }

    #[test]
    fn phi_normalization_compresses_spread() {
        // 0.25^(1/φ) ≈ 0.4245, 0.81^(1/φ) ≈ 0.8779: the ratio shrinks.
        let c = Coordinate::new(0.25, 0.81, 0.5, 0.5).phi_normalized();
        let raw_ratio = 0.81 / 0.25;
        let ratio = (c.j / EQUILIBRIUM.j) / (c.l / EQUILIBRIUM.l);
        assert!(ratio < raw_ratio);
        assert!((c.l - EQUILIBRIUM.l * 0.25f64.powf(1.0 / PHI)).abs() < 1e-12);
        assert!((c.p - c.w * EQUILIBRIUM.p / EQUILIBRIUM.w).abs() < 1e-12);
    }

    #[test]
    fn blend_renormalizes_missing_weight() {
        let a = Coordinate::new(1.0, 0.0, 0.0, 0.0);
        let b = Coordinate::new(0.0, 1.0, 0.0, 0.0);
        let mut blend = WeightedBlend::new();
        blend.add(0.4, a);
        blend.add(0.4, b);
        let c = blend.finish().unwrap();
        assert!((c.l - 0.5).abs() < 1e-12);
        assert!((c.j - 0.5).abs() < 1e-12);
    }

    #[test]
    fn blend_single_component_passes_through() {
        let a = Coordinate::new(0.3, 0.4, 0.5, 0.6);
        let mut blend = WeightedBlend::new();
        blend.add(0.3, a);
        let c = blend.finish().unwrap();
        assert!(c.distance_to(&a) < 1e-12);
    }

    #[test]
    fn empty_blend_is_none() {
        assert!(WeightedBlend::new().finish().is_none());
    }

    #[test]
    fn serializes_with_axis_letters() {
        let json = serde_json::to_value(Coordinate::new(0.1, 0.2, 0.3, 0.4)).unwrap();
        assert_eq!(json["L"], 0.1);
        assert_eq!(json["W"], 0.4);
    }
}
