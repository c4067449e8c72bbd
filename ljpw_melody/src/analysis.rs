// Melody analysis for the game.
//
// Pipeline:
// 1. Consecutive signed semitone steps between notes.
// 2. Each step folded to a class `|step| mod 12` and looked up in the
//    engine's interval table (class 0 covers both unison and octave).
// 3. Plain arithmetic mean of the interval coordinates.
// 4. Core metrics of the mean, plus the life inequality at `1 + avg L` for
//    the configured scenario (ten listens at distance three by default).
// 5. A 0-100 memorability score and a list of feedback items.
//
// Fewer than two notes is an error (`MelodyError::TooFewNotes`), reported
// before any token is parsed.

use std::collections::BTreeSet;

use ljpw_engine::coordinate::{Coordinate, WeightedBlend};
use ljpw_engine::generative::{LifeInequality, life_inequality};
use ljpw_engine::metrics::{Metrics, Phase};
use ljpw_engine::tables::{EntityRecord, INTERVALS};
use serde::Serialize;

use crate::config::MelodyConfig;
use crate::error::MelodyError;
use crate::note::{Note, SEMITONES_PER_OCTAVE};

pub const MIN_NOTES: usize = 2;

const LOW_LOVE: f64 = 0.5;
const HIGH_LOVE: f64 = 0.8;
const MIN_VARIETY: usize = 3;
const TRITONE: u8 = 6;
const MAJOR_THIRD: u8 = 4;

/// One step of the melody.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MelodyInterval {
    pub from: Note,
    pub to: Note,
    /// Signed step; negative is descending.
    pub semitones: i32,
    /// `|semitones| mod 12`.
    pub class: u8,
    pub name: &'static str,
    pub coordinate: Coordinate,
}

impl MelodyInterval {
    fn between(from: Note, to: Note) -> Self {
        let semitones = from.interval_to(to);
        let class = (semitones.unsigned_abs() % SEMITONES_PER_OCTAVE as u32) as u8;
        let record: &EntityRecord = &INTERVALS[class as usize];
        let name = if class == 0 { "Unison/Octave" } else { record.name };
        MelodyInterval {
            from,
            to,
            semitones,
            class,
            name,
            coordinate: record.coordinate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    Praise,
    Suggestion,
    Warning,
}

/// What a feedback item is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackTopic {
    LowLove,
    HighLove,
    Phase,
    Variety,
    Tritone,
    MajorThird,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub topic: FeedbackTopic,
    pub message: &'static str,
}

impl Feedback {
    const fn new(kind: FeedbackKind, topic: FeedbackTopic, message: &'static str) -> Self {
        Feedback { kind, topic, message }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MelodyAnalysis {
    pub notes: Vec<Note>,
    pub intervals: Vec<MelodyInterval>,
    /// Mean coordinate of all intervals.
    pub coordinate: Coordinate,
    #[serde(flatten)]
    pub metrics: Metrics,
    pub life: LifeInequality,
    pub memorability_score: u8,
    pub distinct_intervals: usize,
    pub feedback: Vec<Feedback>,
}

impl MelodyAnalysis {
    pub fn interval_names(&self) -> Vec<&'static str> {
        self.intervals.iter().map(|i| i.name).collect()
    }

    pub fn has_interval(&self, class: u8) -> bool {
        self.intervals.iter().any(|i| i.class == class)
    }

    pub fn has_feedback(&self, topic: FeedbackTopic) -> bool {
        self.feedback.iter().any(|f| f.topic == topic)
    }
}

/// `min(100, round(ratio·30 + L·40 + H·30))`.
pub fn memorability_score(ratio: f64, avg_l: f64, harmony: f64) -> u8 {
    (ratio * 30.0 + avg_l * 40.0 + harmony * 30.0).round().clamp(0.0, 100.0) as u8
}

/// Parse note tokens and analyze them.
pub fn analyze_melody<S: AsRef<str>>(
    tokens: &[S],
    config: &MelodyConfig,
) -> Result<MelodyAnalysis, MelodyError> {
    if tokens.len() < MIN_NOTES {
        return Err(MelodyError::TooFewNotes { count: tokens.len() });
    }
    let notes = tokens
        .iter()
        .map(|t| t.as_ref().parse::<Note>())
        .collect::<Result<Vec<_>, _>>()?;
    analyze_notes(&notes, config)
}

pub fn analyze_notes(notes: &[Note], config: &MelodyConfig) -> Result<MelodyAnalysis, MelodyError> {
    let too_few = MelodyError::TooFewNotes { count: notes.len() };
    if notes.len() < MIN_NOTES {
        return Err(too_few);
    }

    let intervals: Vec<MelodyInterval> = notes
        .windows(2)
        .map(|w| MelodyInterval::between(w[0], w[1]))
        .collect();

    let mut blend = WeightedBlend::new();
    for interval in &intervals {
        log::trace!(
            "{} -> {}: {:+} semitones ({})",
            interval.from,
            interval.to,
            interval.semitones,
            interval.name
        );
        blend.add(1.0, interval.coordinate);
    }
    let coordinate = blend.finish().ok_or(too_few)?;

    let metrics = Metrics::of(&coordinate);
    let scenario = config.scenario;
    let life = life_inequality(1.0 + coordinate.l, scenario.iterations, scenario.distance);
    let memorability = memorability_score(life.ratio, coordinate.l, metrics.harmony);
    let distinct_intervals = intervals.iter().map(|i| i.class).collect::<BTreeSet<_>>().len();

    let mut analysis = MelodyAnalysis {
        notes: notes.to_vec(),
        intervals,
        coordinate,
        metrics,
        life,
        memorability_score: memorability,
        distinct_intervals,
        feedback: Vec::new(),
    };
    analysis.feedback = feedback_for(&analysis);

    log::debug!(
        "melody of {} notes: L={:.3} H={:.3} ratio={:.2} memorability={}",
        notes.len(),
        coordinate.l,
        analysis.metrics.harmony,
        analysis.life.ratio,
        memorability
    );
    Ok(analysis)
}

fn feedback_for(analysis: &MelodyAnalysis) -> Vec<Feedback> {
    use FeedbackKind::{Praise, Suggestion, Warning};

    let mut out = Vec::new();
    let l = analysis.coordinate.l;

    if l < LOW_LOVE {
        out.push(Feedback::new(
            Warning,
            FeedbackTopic::LowLove,
            "Low Love: this melody feels cold. Try warmer steps like major 3rds and 6ths.",
        ));
    }
    if l > HIGH_LOVE {
        out.push(Feedback::new(
            Praise,
            FeedbackTopic::HighLove,
            "High Love: this melody radiates warmth.",
        ));
    }

    out.push(match analysis.metrics.phase.phase {
        Phase::Autopoietic => Feedback::new(
            Praise,
            FeedbackTopic::Phase,
            "Autopoietic: this melody sustains itself and grows with every listen.",
        ),
        Phase::Homeostatic => Feedback::new(
            Suggestion,
            FeedbackTopic::Phase,
            "Homeostatic: stable, but it needs more warmth to come alive.",
        ),
        Phase::Entropic => Feedback::new(
            Warning,
            FeedbackTopic::Phase,
            "Entropic: the melody drifts apart. Add consonant steps to hold it together.",
        ),
    });

    if analysis.distinct_intervals < MIN_VARIETY {
        out.push(Feedback::new(
            Suggestion,
            FeedbackTopic::Variety,
            "Try more interval variety: at least three different steps keep the ear engaged.",
        ));
    }
    if analysis.has_interval(TRITONE) {
        out.push(Feedback::new(
            Warning,
            FeedbackTopic::Tritone,
            "Tritone: adds tension and Power, but pulls Love down.",
        ));
    }
    if analysis.has_interval(MAJOR_THIRD) {
        out.push(Feedback::new(
            Praise,
            FeedbackTopic::MajorThird,
            "Major 3rd: the interval of warmth, it boosts Love.",
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NoteParseError;

    fn analyze(tokens: &[&str]) -> MelodyAnalysis {
        analyze_melody(tokens, &MelodyConfig::default()).unwrap()
    }

    #[test]
    fn too_few_notes_is_rejected_before_parsing() {
        let config = MelodyConfig::default();
        let empty: [&str; 0] = [];
        assert!(matches!(
            analyze_melody(&empty, &config),
            Err(MelodyError::TooFewNotes { count: 0 })
        ));
        assert!(matches!(
            analyze_melody(&["not a note"], &config),
            Err(MelodyError::TooFewNotes { count: 1 })
        ));
        assert!(matches!(
            analyze_notes(&[Note::new(0, 4)], &config),
            Err(MelodyError::TooFewNotes { count: 1 })
        ));
    }

    #[test]
    fn bad_token_is_reported() {
        let result = analyze_melody(&["C4", "X4"], &MelodyConfig::default());
        assert!(matches!(result, Err(MelodyError::InvalidNote(_))));
    }

    #[test]
    fn out_of_range_octaves_are_rejected() {
        let config = MelodyConfig::default();
        let result = analyze_melody(&["C-178956970", "C178956970"], &config);
        assert!(matches!(result, Err(MelodyError::InvalidNote(NoteParseError::BadOctave(_)))));
    }

    #[test]
    fn widest_melody_folds_cleanly() {
        let a = analyze(&["C-128", "B127"]);
        assert_eq!(a.intervals[0].semitones, 255 * 12 + 11);
        assert_eq!(a.intervals[0].class, 11);
        assert_eq!(a.interval_names(), vec!["Major 7th"]);
    }

    #[test]
    fn major_third() {
        let a = analyze(&["C4", "E4"]);
        assert_eq!(a.interval_names(), vec!["Major 3rd"]);
        assert_eq!(a.coordinate, INTERVALS[4].coordinate);
        assert_eq!(a.metrics.phase.phase, Phase::Autopoietic);
        assert_eq!(a.memorability_score, 100);
        assert!(a.has_feedback(FeedbackTopic::HighLove));
        assert!(a.has_feedback(FeedbackTopic::Variety));
        let third = a.feedback.iter().find(|f| f.topic == FeedbackTopic::MajorThird).unwrap();
        assert_eq!(third.kind, FeedbackKind::Praise);
        assert!(third.message.contains("Love"));
    }

    #[test]
    fn direction_and_octave_fold() {
        // Down a fifth, up an octave plus a major 3rd, up an octave.
        let a = analyze(&["G4", "C4", "E5", "E6"]);
        let classes: Vec<u8> = a.intervals.iter().map(|i| i.class).collect();
        assert_eq!(classes, vec![7, 4, 0]);
        assert_eq!(a.intervals[0].semitones, -7);
        assert_eq!(a.intervals[2].name, "Unison/Octave");
        assert_eq!(a.distinct_intervals, 3);
        assert!(!a.has_feedback(FeedbackTopic::Variety));
    }

    #[test]
    fn simple_mean_of_intervals() {
        let a = analyze(&["C4", "E4", "A#4"]);
        let third = INTERVALS[4].coordinate;
        let tritone = INTERVALS[6].coordinate;
        assert!((a.coordinate.l - (third.l + tritone.l) / 2.0).abs() < 1e-12);
        assert!((a.coordinate.p - (third.p + tritone.p) / 2.0).abs() < 1e-12);
    }

    #[test]
    fn tritone_is_cold_and_entropic() {
        let a = analyze(&["C4", "F#4"]);
        assert_eq!(a.interval_names(), vec!["Tritone"]);
        assert!(a.has_feedback(FeedbackTopic::LowLove));
        assert!(a.has_feedback(FeedbackTopic::Tritone));
        assert!(!a.has_feedback(FeedbackTopic::MajorThird));
        assert_eq!(a.metrics.phase.phase, Phase::Entropic);
        // 1.2^10/φ^3 ≈ 1.4617, H ≈ 0.4526: 43.85 + 8 + 13.58.
        assert_eq!(a.memorability_score, 65);
    }

    #[test]
    fn score_is_capped() {
        assert_eq!(memorability_score(50.0, 1.0, 1.0), 100);
        assert_eq!(memorability_score(0.0, 0.5, 0.5), 35);
    }

    #[test]
    fn life_uses_configured_scenario() {
        let json = r#"{"scenario": {"iterations": 1, "distance": 3.0}}"#;
        let config = MelodyConfig::from_json(json).unwrap();
        let a = analyze_melody(&["C4", "E4"], &config).unwrap();
        assert!((a.life.growth - 1.9).abs() < 1e-12);
        assert_eq!(a.life.phase, Phase::Entropic);
    }
}
