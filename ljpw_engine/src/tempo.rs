// Tempo classification: BPM to a named tempo band and its Power value.
//
// Tempo only ever feeds the Power axis (see `analyzer.rs`), so each band
// carries a single `power` number rather than a full coordinate.
//
// Bands are scanned in order and the first half-open `[low, high)` range
// containing the BPM wins. The classical markings leave gaps (60–66,
// 156–168) and nothing covers < 40; every BPM that matches no band falls
// back to the fastest band, `presto`, same as BPMs above 220.
//
// 76 BPM (≈ φ × 47) is the "φ-aligned" tempo. It is a literal, not derived.

use serde::Serialize;

/// The φ-aligned tempo in BPM.
pub const PHI_TEMPO_BPM: f64 = 76.0;

/// Tempos strictly within this many BPM of `PHI_TEMPO_BPM` are φ-aligned.
pub const PHI_TEMPO_TOLERANCE: f64 = 5.0;

/// A named tempo band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TempoBand {
    pub key: &'static str,
    pub name: &'static str,
    /// Inclusive lower bound, BPM.
    pub low: f64,
    /// Exclusive upper bound, BPM.
    pub high: f64,
    /// Power contribution of this band.
    pub power: f64,
    pub feeling: &'static str,
}

impl TempoBand {
    pub fn contains(&self, bpm: f64) -> bool {
        bpm >= self.low && bpm < self.high
    }
}

/// Slowest to fastest. The last entry is the fallback.
pub static TEMPO_BANDS: [TempoBand; 6] = [
    TempoBand {
        key: "largo",
        name: "Largo",
        low: 40.0,
        high: 60.0,
        power: 0.20,
        feeling: "Broad, solemn",
    },
    TempoBand {
        key: "adagio",
        name: "Adagio",
        low: 66.0,
        high: 76.0,
        power: 0.35,
        feeling: "Slow, tender",
    },
    TempoBand {
        key: "andante",
        name: "Andante",
        low: 76.0,
        high: 108.0,
        power: 0.50,
        feeling: "Walking pace, heartbeat",
    },
    TempoBand {
        key: "moderato",
        name: "Moderato",
        low: 108.0,
        high: 120.0,
        power: 0.60,
        feeling: "Moderate, steady",
    },
    TempoBand {
        key: "allegro",
        name: "Allegro",
        low: 120.0,
        high: 156.0,
        power: 0.75,
        feeling: "Fast, lively",
    },
    TempoBand {
        key: "presto",
        name: "Presto",
        low: 168.0,
        high: 220.0,
        power: 0.90,
        feeling: "Very fast, urgent",
    },
];

/// Result of classifying a BPM value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TempoClass {
    pub bpm: f64,
    pub key: &'static str,
    pub name: &'static str,
    #[serde(rename = "P")]
    pub power: f64,
    pub phi_aligned: bool,
    /// `max(0, 1 − |bpm − 76| / 100)`: how close the tempo sits to 76 BPM.
    pub phi_alignment: f64,
}

fn band_for(bpm: f64) -> &'static TempoBand {
    TEMPO_BANDS
        .iter()
        .find(|band| band.contains(bpm))
        .unwrap_or(&TEMPO_BANDS[TEMPO_BANDS.len() - 1])
}

/// Classify a tempo into its band.
pub fn classify_tempo(bpm: f64) -> TempoClass {
    let band = band_for(bpm);
    TempoClass {
        bpm,
        key: band.key,
        name: band.name,
        power: band.power,
        phi_aligned: (bpm - PHI_TEMPO_BPM).abs() < PHI_TEMPO_TOLERANCE,
        phi_alignment: (1.0 - (bpm - PHI_TEMPO_BPM).abs() / 100.0).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges_are_half_open() {
        assert_eq!(classify_tempo(40.0).key, "largo");
        assert_eq!(classify_tempo(59.9).key, "largo");
        assert_eq!(classify_tempo(75.9).key, "adagio");
        assert_eq!(classify_tempo(76.0).key, "andante");
        assert_eq!(classify_tempo(120.0).key, "allegro");
        assert_eq!(classify_tempo(168.0).key, "presto");
    }

    #[test]
    fn unmatched_tempos_fall_back_to_presto() {
        assert_eq!(classify_tempo(300.0).key, "presto");
        assert_eq!(classify_tempo(220.0).key, "presto");
        assert_eq!(classify_tempo(62.0).key, "presto");
        assert_eq!(classify_tempo(160.0).key, "presto");
        assert_eq!(classify_tempo(20.0).key, "presto");
    }

    #[test]
    fn phi_alignment_window() {
        assert!(classify_tempo(76.0).phi_aligned);
        assert!(classify_tempo(72.0).phi_aligned);
        assert!(classify_tempo(80.9).phi_aligned);
        assert!(!classify_tempo(81.0).phi_aligned);
        assert!(!classify_tempo(71.0).phi_aligned);
    }

    #[test]
    fn phi_alignment_score() {
        assert_eq!(classify_tempo(76.0).phi_alignment, 1.0);
        assert!((classify_tempo(126.0).phi_alignment - 0.5).abs() < 1e-12);
        assert_eq!(classify_tempo(200.0).phi_alignment, 0.0);
    }

    #[test]
    fn power_rises_with_tempo() {
        for pair in TEMPO_BANDS.windows(2) {
            assert!(pair[0].power < pair[1].power);
            assert!(pair[0].high <= pair[1].low);
        }
    }
}
