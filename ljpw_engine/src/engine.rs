// `Engine`: the library's front door.
//
// Owns an `EngineConfig` and exposes one method per external entry point:
// lookups per entity table, the composite song profile, and the
// generative-equation views that depend on configured scenarios. The
// config-free pieces (core metrics, `meaning`, `life_inequality`,
// `critical_iterations`, `hope`, ...) stay as plain functions in
// `metrics.rs` and `generative.rs`.
//
// The engine holds no mutable state. Every method is a pure function of its
// arguments and the config, so one `Engine` can be shared freely.

use crate::analyzer::{self, ElementAnalysis, ProfileAnalysis, SongProfile};
use crate::config::EngineConfig;
use crate::coordinate::Coordinate;
use crate::emergence::{self, EmergenceCheck};
use crate::generative::{self, Earworm, Propagation};
use crate::metrics::Metrics;
use crate::tables::{EntityRecord, EntityTable};
use crate::tempo::{self, TempoClass};

#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Engine { config }
    }

    /// Build an engine from a JSON config string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Engine::new(EngineConfig::from_json(json)?))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// All entries of a table, in display order.
    pub fn entities(&self, table: EntityTable) -> &'static [EntityRecord] {
        table.records()
    }

    pub fn analyze(&self, table: EntityTable, key: &str) -> Option<ElementAnalysis> {
        analyzer::analyze(table, key)
    }

    pub fn analyze_interval(&self, key: &str) -> Option<ElementAnalysis> {
        self.analyze(EntityTable::Interval, key)
    }

    pub fn analyze_chord(&self, key: &str) -> Option<ElementAnalysis> {
        self.analyze(EntityTable::Chord, key)
    }

    pub fn analyze_mode(&self, key: &str) -> Option<ElementAnalysis> {
        self.analyze(EntityTable::Mode, key)
    }

    pub fn analyze_key(&self, key: &str) -> Option<ElementAnalysis> {
        self.analyze(EntityTable::Key, key)
    }

    pub fn analyze_genre(&self, key: &str) -> Option<ElementAnalysis> {
        self.analyze(EntityTable::Genre, key)
    }

    pub fn analyze_song_profile(&self, profile: &SongProfile) -> Option<ProfileAnalysis> {
        analyzer::analyze_song_profile(profile, &self.config)
    }

    /// Core metrics for an arbitrary coordinate, e.g. one mapped from audio
    /// features by an external analyzer.
    pub fn analyze_coordinate(&self, coordinate: &Coordinate) -> Metrics {
        Metrics::of(coordinate)
    }

    /// Emergence-constraint check for a measured coordinate.
    pub fn check_emergence(&self, coordinate: &Coordinate) -> EmergenceCheck {
        emergence::check_emergence(coordinate)
    }

    /// Prepare a measured coordinate for scoring: φ-normalize, then enforce
    /// emergence at `weight`.
    pub fn condition_measurement(&self, coordinate: &Coordinate, weight: f64) -> Coordinate {
        emergence::enforce_emergence(&coordinate.phi_normalized(), weight)
    }

    pub fn classify_tempo(&self, bpm: f64) -> TempoClass {
        tempo::classify_tempo(bpm)
    }

    /// Earworm prediction using the configured scenario and stickiness
    /// distance.
    pub fn predict_earworm(&self, l_raw: f64, h: f64, v: f64) -> Earworm {
        generative::predict_earworm(
            l_raw,
            h,
            v,
            &self.config.earworm,
            self.config.stickiness_distance,
        )
    }

    /// Earworm prediction for a finished profile analysis.
    pub fn predict_profile_earworm(&self, analysis: &ProfileAnalysis) -> Earworm {
        self.predict_earworm(
            analysis.coordinate.l,
            analysis.metrics.harmony,
            analysis.metrics.voltage,
        )
    }

    pub fn propagation_analysis(&self, l_raw: f64, b: f64) -> Propagation {
        generative::propagation_analysis(l_raw, b, &self.config.propagation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_table_entry_points() {
        let engine = Engine::default();
        assert!(engine.analyze_interval("tritone").is_some());
        assert!(engine.analyze_chord("add9").is_some());
        assert!(engine.analyze_mode("locrian").is_some());
        assert!(engine.analyze_key("Ab").is_some());
        assert!(engine.analyze_genre("reggae").is_some());
        assert!(engine.analyze_genre("dorian").is_none());
    }

    #[test]
    fn entities_lists_table() {
        let engine = Engine::default();
        let modes: Vec<&str> = engine.entities(EntityTable::Mode).iter().map(|r| r.key).collect();
        assert_eq!(
            modes,
            vec!["ionian", "dorian", "phrygian", "lydian", "mixolydian", "aeolian", "locrian"]
        );
    }

    #[test]
    fn from_json_applies_config() {
        let engine =
            Engine::from_json(r#"{"earworm": {"iterations": 2, "distance": 3.0}}"#).unwrap();
        assert_eq!(engine.config().earworm.iterations, 2);
        // 1.9^2 / φ^3 ≈ 0.85: not alive at two listens.
        assert!(!engine.predict_earworm(0.9, 0.7, 1.0).is_earworm);
        assert!(Engine::default().predict_earworm(0.9, 0.7, 1.0).is_earworm);
    }

    #[test]
    fn profile_earworm_uses_profile_scores() {
        let engine = Engine::default();
        let profile = SongProfile::new().key("C#").genre("gospel");
        let analysis = engine.analyze_song_profile(&profile).unwrap();
        let e = engine.predict_profile_earworm(&analysis);
        assert!(e.is_earworm);
        let metrics = &analysis.metrics;
        assert_eq!(
            e,
            engine.predict_earworm(analysis.coordinate.l, metrics.harmony, metrics.voltage)
        );
    }

    #[test]
    fn measured_coordinate_conditioning() {
        let engine = Engine::default();
        let raw = Coordinate::new(1.0, 0.1, 1.0, 1.0);
        assert!(!engine.check_emergence(&raw).valid);

        let conditioned = engine.condition_measurement(&raw, 1.0);
        let normalized = raw.phi_normalized();
        assert_eq!(conditioned.p, normalized.p);
        assert_eq!(conditioned.w, normalized.w);
        assert!((conditioned.l - emergence::expected_love(normalized.w)).abs() < 1e-12);
        assert!(engine.check_emergence(&conditioned).valid);
    }

    #[test]
    fn coordinate_metrics_match_free_functions() {
        let engine = Engine::default();
        let c = Coordinate::new(0.4, 0.6, 0.8, 0.2);
        assert_eq!(engine.analyze_coordinate(&c), Metrics::of(&c));
    }
}
