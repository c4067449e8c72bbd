// Element and song-profile analysis.
//
// Two entry points compose the static tables with the core metrics:
// - `analyze(table, key)`: one entity, looked up by key
// - `analyze_song_profile(profile, config)`: a weighted blend of a key,
//   mode and genre, with tempo folded into the Power axis
//
// Unknown keys are not errors. A single-entity miss returns `None`; in a
// profile, unknown or absent components just drop out of the blend and the
// remaining weights are renormalized. Only a profile with no resolvable
// component at all yields `None`.
//
// Results are fresh values on every call and serialize to JSON for the UI.

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::coordinate::{Coordinate, WeightedBlend};
use crate::metrics::Metrics;
use crate::tables::{EntityRecord, EntityTable};
use crate::tempo::{TempoClass, classify_tempo};

/// Analysis of a single table entry: its record plus every core metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementAnalysis {
    pub table: EntityTable,
    #[serde(flatten)]
    pub record: EntityRecord,
    #[serde(flatten)]
    pub metrics: Metrics,
}

impl ElementAnalysis {
    pub fn coordinate(&self) -> Coordinate {
        self.record.coordinate
    }
}

/// Look up `key` in `table` and analyze it. `None` when the key is unknown.
pub fn analyze(table: EntityTable, key: &str) -> Option<ElementAnalysis> {
    let Some(record) = table.lookup(key) else {
        log::debug!("no {} named {key:?}", table.name());
        return None;
    };
    Some(ElementAnalysis {
        table,
        record: *record,
        metrics: Metrics::of(&record.coordinate),
    })
}

/// User-selected song parameters. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SongProfile {
    pub key: Option<String>,
    pub mode: Option<String>,
    pub genre: Option<String>,
    /// Tempo in BPM.
    pub tempo: Option<f64>,
}

impl SongProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn tempo(mut self, bpm: f64) -> Self {
        self.tempo = Some(bpm);
        self
    }
}

/// The resolved parts of a profile, for display and debugging.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileComponents {
    pub key: Option<ElementAnalysis>,
    pub mode: Option<ElementAnalysis>,
    pub genre: Option<ElementAnalysis>,
    pub tempo: Option<TempoClass>,
}

/// Composite analysis of a song profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileAnalysis {
    pub coordinate: Coordinate,
    #[serde(flatten)]
    pub metrics: Metrics,
    pub components: ProfileComponents,
}

fn resolve(table: EntityTable, key: Option<&str>) -> Option<ElementAnalysis> {
    key.and_then(|k| analyze(table, k))
}

/// Blend a profile's key, mode and genre, then fold in tempo.
///
/// Weights come from `config.profile_weights` and are renormalized over the
/// components that resolve. Tempo only ever changes Power:
/// `P = P·(1 − b) + tempoP·b` with `b = config.tempo_power_blend`.
pub fn analyze_song_profile(
    profile: &SongProfile,
    config: &EngineConfig,
) -> Option<ProfileAnalysis> {
    let components = ProfileComponents {
        key: resolve(EntityTable::Key, profile.key.as_deref()),
        mode: resolve(EntityTable::Mode, profile.mode.as_deref()),
        genre: resolve(EntityTable::Genre, profile.genre.as_deref()),
        tempo: profile.tempo.map(classify_tempo),
    };

    let weights = &config.profile_weights;
    let mut blend = WeightedBlend::new();
    for (weight, part) in [
        (weights.genre, &components.genre),
        (weights.mode, &components.mode),
        (weights.key, &components.key),
    ] {
        if let Some(part) = part {
            blend.add(weight, part.coordinate());
        }
    }

    let Some(mut coordinate) = blend.finish() else {
        log::debug!("song profile resolved no key, mode or genre: {profile:?}");
        return None;
    };

    if let Some(tempo) = &components.tempo {
        let b = config.tempo_power_blend;
        coordinate = coordinate.with_power(coordinate.p * (1.0 - b) + tempo.power * b);
    }

    log::debug!(
        "song profile blended over weight {:.2} -> L={:.3} J={:.3} P={:.3} W={:.3}",
        blend.total_weight(),
        coordinate.l,
        coordinate.j,
        coordinate.p,
        coordinate.w
    );

    Some(ProfileAnalysis {
        coordinate,
        metrics: Metrics::of(&coordinate),
        components,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Phase;

    #[test]
    fn analyze_known_interval() {
        let a = analyze(EntityTable::Interval, "major_3rd").unwrap();
        assert_eq!(a.record.name, "Major 3rd");
        assert_eq!(a.record.semitones, Some(4));
        assert_eq!(a.metrics, Metrics::of(&a.coordinate()));
    }

    #[test]
    fn analyze_unknown_key_is_none() {
        assert!(analyze(EntityTable::Chord, "power_chord").is_none());
        assert!(analyze(EntityTable::Genre, "").is_none());
    }

    #[test]
    fn empty_profile_is_none() {
        assert!(analyze_song_profile(&SongProfile::new(), &EngineConfig::default()).is_none());
    }

    #[test]
    fn tempo_alone_is_none() {
        let profile = SongProfile::new().tempo(120.0);
        assert!(analyze_song_profile(&profile, &EngineConfig::default()).is_none());
    }

    #[test]
    fn unknown_components_drop_out() {
        let profile = SongProfile::new().key("H#").mode("dorian").genre("polka");
        let a = analyze_song_profile(&profile, &EngineConfig::default()).unwrap();
        let dorian = EntityTable::Mode.lookup("dorian").unwrap().coordinate;
        assert!(a.coordinate.distance_to(&dorian) < 1e-12);
        assert!(a.components.key.is_none());
        assert!(a.components.genre.is_none());
    }

    #[test]
    fn two_components_renormalize() {
        // Mode and key share weight 0.3 each, so the blend is their mean.
        let profile = SongProfile::new().key("C").mode("aeolian");
        let a = analyze_song_profile(&profile, &EngineConfig::default()).unwrap();
        let c = EntityTable::Key.lookup("C").unwrap().coordinate;
        let aeolian = EntityTable::Mode.lookup("aeolian").unwrap().coordinate;
        assert!((a.coordinate.l - (c.l + aeolian.l) / 2.0).abs() < 1e-12);
        assert!((a.coordinate.w - (c.w + aeolian.w) / 2.0).abs() < 1e-12);
    }

    #[test]
    fn full_profile_uses_weights() {
        let profile = SongProfile::new().key("G").mode("lydian").genre("jazz");
        let a = analyze_song_profile(&profile, &EngineConfig::default()).unwrap();
        let g = EntityTable::Key.lookup("G").unwrap().coordinate;
        let lydian = EntityTable::Mode.lookup("lydian").unwrap().coordinate;
        let jazz = EntityTable::Genre.lookup("jazz").unwrap().coordinate;
        let expected_j = 0.4 * jazz.j + 0.3 * lydian.j + 0.3 * g.j;
        assert!((a.coordinate.j - expected_j).abs() < 1e-12);
    }

    #[test]
    fn tempo_only_changes_power() {
        let base = SongProfile::new().key("D").mode("mixolydian").genre("rock");
        let config = EngineConfig::default();
        let without = analyze_song_profile(&base, &config).unwrap();
        let with = analyze_song_profile(&base.clone().tempo(200.0), &config).unwrap();
        assert_eq!(with.coordinate.l, without.coordinate.l);
        assert_eq!(with.coordinate.j, without.coordinate.j);
        assert_eq!(with.coordinate.w, without.coordinate.w);
        let expected_p = without.coordinate.p * 0.7 + 0.9 * 0.3;
        assert!((with.coordinate.p - expected_p).abs() < 1e-12);
        assert_eq!(with.components.tempo.unwrap().key, "presto");
    }

    #[test]
    fn configured_weights_are_respected() {
        let json = r#"{"profile_weights": {"genre": 1.0, "mode": 0.0, "key": 0.0}}"#;
        let config = EngineConfig::from_json(json).unwrap();
        let profile = SongProfile::new().key("C").mode("locrian").genre("gospel");
        let a = analyze_song_profile(&profile, &config).unwrap();
        let gospel = EntityTable::Genre.lookup("gospel").unwrap().coordinate;
        assert!(a.coordinate.distance_to(&gospel) < 1e-12);
    }

    #[test]
    fn love_key_gospel_profile_is_autopoietic() {
        let profile = SongProfile::new().key("C#").mode("ionian").genre("gospel").tempo(76.0);
        let a = analyze_song_profile(&profile, &EngineConfig::default()).unwrap();
        assert_eq!(a.components.key.as_ref().unwrap().record.name, "C# / Love Key");
        assert!(a.components.tempo.unwrap().phi_aligned);
        assert!(a.coordinate.l >= 0.7);
        assert!(a.metrics.harmony >= 0.6);
        assert_eq!(a.metrics.phase.phase, Phase::Autopoietic);
    }

    #[test]
    fn profile_deserializes_from_partial_json() {
        let profile: SongProfile =
            serde_json::from_str(r#"{"genre": "blues", "tempo": 90}"#).unwrap();
        assert_eq!(profile.genre.as_deref(), Some("blues"));
        assert_eq!(profile.tempo, Some(90.0));
        assert!(profile.key.is_none());
    }
}
