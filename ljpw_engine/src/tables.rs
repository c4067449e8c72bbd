// Static lookup tables: musical entities and their LJPW coordinates.
//
// Five fixed tables map identifier strings to coordinates plus display
// metadata:
// - Intervals (13): unison through octave, keyed "minor_2nd", "tritone", ...
// - Chords (9): triads, sevenths, suspended and added-tone chords
// - Modes (7): the diatonic modes, "ionian" through "locrian"
// - Keys (13): the twelve pitch classes, with "Db" aliasing the C# Love Key
// - Genres (15): "gospel", "jazz", "metal", ...
//
// Tables are `static` slices, built at compile time and never written to,
// so any number of callers can share them. Lookup is a linear scan by key;
// every table is small enough that this is cheaper than hashing.
//
// Entry order is display order and is stable; UI pickers iterate with
// `EntityTable::records()`. Tempo bands live separately in `tempo.rs`
// because they are keyed by a BPM range, not a string.
//
// Unison and octave carry identical coordinates: the melody analyzer folds
// every interval to `abs(semitones) % 12` and treats both as one class.

use serde::Serialize;

use crate::coordinate::Coordinate;

/// A named musical entity with its coordinate and descriptive metadata.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EntityRecord {
    /// Lookup key, e.g. "major_3rd", "dorian", "C#", "gospel".
    pub key: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Interval size for intervals, pitch class for keys, `None` otherwise.
    pub semitones: Option<u8>,
    pub coordinate: Coordinate,
    /// Short description of the emotional character.
    pub feeling: &'static str,
}

const fn entry(
    key: &'static str,
    name: &'static str,
    semitones: Option<u8>,
    coordinate: Coordinate,
    feeling: &'static str,
) -> EntityRecord {
    EntityRecord {
        key,
        name,
        semitones,
        coordinate,
        feeling,
    }
}

const fn ljpw(l: f64, j: f64, p: f64, w: f64) -> Coordinate {
    Coordinate::new(l, j, p, w)
}

/// Shared by unison and octave.
const UNISON_OCTAVE: Coordinate = ljpw(0.70, 0.95, 0.30, 0.60);

/// Shared by C# and its enharmonic Db.
const LOVE_KEY: Coordinate = ljpw(0.98, 0.80, 0.70, 0.85);

pub static INTERVALS: [EntityRecord; 13] = [
    entry(
        "unison",
        "Unison",
        Some(0),
        UNISON_OCTAVE,
        "Unity, rest, sameness",
    ),
    entry(
        "minor_2nd",
        "Minor 2nd",
        Some(1),
        ljpw(0.25, 0.30, 0.75, 0.40),
        "Tension, unease, friction",
    ),
    entry(
        "major_2nd",
        "Major 2nd",
        Some(2),
        ljpw(0.55, 0.55, 0.60, 0.55),
        "Motion, stepping forward",
    ),
    entry(
        "minor_3rd",
        "Minor 3rd",
        Some(3),
        ljpw(0.65, 0.60, 0.40, 0.75),
        "Melancholy, introspection",
    ),
    entry(
        "major_3rd",
        "Major 3rd",
        Some(4),
        ljpw(0.90, 0.75, 0.55, 0.70),
        "Warmth, joy, love",
    ),
    entry(
        "perfect_4th",
        "Perfect 4th",
        Some(5),
        ljpw(0.70, 0.85, 0.60, 0.70),
        "Openness, suspension",
    ),
    entry(
        "tritone",
        "Tritone",
        Some(6),
        ljpw(0.20, 0.25, 0.90, 0.50),
        "Instability, restlessness",
    ),
    entry(
        "perfect_5th",
        "Perfect 5th",
        Some(7),
        ljpw(0.80, 0.90, 0.70, 0.75),
        "Strength, stability",
    ),
    entry(
        "minor_6th",
        "Minor 6th",
        Some(8),
        ljpw(0.70, 0.55, 0.45, 0.80),
        "Longing, bittersweet",
    ),
    entry(
        "major_6th",
        "Major 6th",
        Some(9),
        ljpw(0.85, 0.70, 0.55, 0.75),
        "Tenderness, sweetness",
    ),
    entry(
        "minor_7th",
        "Minor 7th",
        Some(10),
        ljpw(0.55, 0.50, 0.65, 0.70),
        "Bluesy yearning",
    ),
    entry(
        "major_7th",
        "Major 7th",
        Some(11),
        ljpw(0.60, 0.45, 0.70, 0.80),
        "Dreamy tension, reaching",
    ),
    entry(
        "octave",
        "Octave",
        Some(12),
        UNISON_OCTAVE,
        "Completion, return home",
    ),
];

pub static CHORDS: [EntityRecord; 9] = [
    entry(
        "major",
        "Major",
        None,
        ljpw(0.85, 0.85, 0.60, 0.70),
        "Happy, stable, resolved",
    ),
    entry(
        "minor",
        "Minor",
        None,
        ljpw(0.60, 0.75, 0.50, 0.80),
        "Sad, introspective",
    ),
    entry(
        "diminished",
        "Diminished",
        None,
        ljpw(0.30, 0.40, 0.80, 0.55),
        "Tense, anxious",
    ),
    entry(
        "augmented",
        "Augmented",
        None,
        ljpw(0.50, 0.45, 0.75, 0.70),
        "Mysterious, unresolved",
    ),
    entry(
        "dominant_7th",
        "Dominant 7th",
        None,
        ljpw(0.65, 0.60, 0.85, 0.65),
        "Driving toward home",
    ),
    entry(
        "major_7th",
        "Major 7th",
        None,
        ljpw(0.88, 0.70, 0.50, 0.85),
        "Lush, romantic",
    ),
    entry(
        "minor_7th",
        "Minor 7th",
        None,
        ljpw(0.70, 0.65, 0.50, 0.85),
        "Mellow, smooth",
    ),
    entry(
        "sus4",
        "Suspended 4th",
        None,
        ljpw(0.65, 0.80, 0.55, 0.75),
        "Open, expectant",
    ),
    entry(
        "add9",
        "Add 9",
        None,
        ljpw(0.82, 0.72, 0.55, 0.82),
        "Shimmering, wistful",
    ),
];

pub static MODES: [EntityRecord; 7] = [
    entry(
        "ionian",
        "Ionian (Major)",
        None,
        ljpw(0.85, 0.80, 0.65, 0.70),
        "Bright, resolved",
    ),
    entry(
        "dorian",
        "Dorian",
        None,
        ljpw(0.70, 0.70, 0.55, 0.80),
        "Soulful, hopeful melancholy",
    ),
    entry(
        "phrygian",
        "Phrygian",
        None,
        ljpw(0.45, 0.55, 0.80, 0.65),
        "Dark, exotic, tense",
    ),
    entry(
        "lydian",
        "Lydian",
        None,
        ljpw(0.80, 0.65, 0.60, 0.90),
        "Dreamy, floating wonder",
    ),
    entry(
        "mixolydian",
        "Mixolydian",
        None,
        ljpw(0.78, 0.68, 0.75, 0.65),
        "Bluesy, celebratory",
    ),
    entry(
        "aeolian",
        "Aeolian (Minor)",
        None,
        ljpw(0.55, 0.70, 0.60, 0.80),
        "Sad, reflective",
    ),
    entry(
        "locrian",
        "Locrian",
        None,
        ljpw(0.25, 0.35, 0.85, 0.55),
        "Unstable, unsettling",
    ),
];

pub static KEYS: [EntityRecord; 13] = [
    entry(
        "C",
        "C",
        Some(0),
        ljpw(0.75, 0.85, 0.60, 0.70),
        "Pure, simple, innocent",
    ),
    entry(
        "C#",
        "C# / Love Key",
        Some(1),
        LOVE_KEY,
        "Luminous warmth, the Love Key",
    ),
    entry(
        "Db",
        "Db / Love Key",
        Some(1),
        LOVE_KEY,
        "Luminous warmth, the Love Key",
    ),
    entry(
        "D",
        "D",
        Some(2),
        ljpw(0.80, 0.75, 0.80, 0.65),
        "Triumphant, bright",
    ),
    entry(
        "Eb",
        "Eb",
        Some(3),
        ljpw(0.72, 0.80, 0.70, 0.80),
        "Heroic, devoted",
    ),
    entry(
        "E",
        "E",
        Some(4),
        ljpw(0.78, 0.70, 0.75, 0.70),
        "Radiant joy",
    ),
    entry(
        "F",
        "F",
        Some(5),
        ljpw(0.73, 0.80, 0.55, 0.75),
        "Pastoral calm",
    ),
    entry(
        "F#",
        "F#",
        Some(6),
        ljpw(0.70, 0.60, 0.65, 0.85),
        "Mystical, transcendent",
    ),
    entry(
        "G",
        "G",
        Some(7),
        ljpw(0.78, 0.80, 0.65, 0.70),
        "Gentle, grateful",
    ),
    entry(
        "Ab",
        "Ab",
        Some(8),
        ljpw(0.82, 0.70, 0.50, 0.80),
        "Tender, dreamlike",
    ),
    entry(
        "A",
        "A",
        Some(9),
        ljpw(0.76, 0.72, 0.78, 0.68),
        "Confident, youthful",
    ),
    entry(
        "Bb",
        "Bb",
        Some(10),
        ljpw(0.70, 0.78, 0.72, 0.74),
        "Noble, hopeful",
    ),
    entry(
        "B",
        "B",
        Some(11),
        ljpw(0.68, 0.65, 0.80, 0.72),
        "Bold, wild",
    ),
];

pub static GENRES: [EntityRecord; 15] = [
    entry(
        "gospel",
        "Gospel",
        None,
        ljpw(0.98, 0.80, 0.75, 0.85),
        "Joyful devotion",
    ),
    entry(
        "classical",
        "Classical",
        None,
        ljpw(0.75, 0.90, 0.60, 0.92),
        "Ordered, timeless",
    ),
    entry(
        "jazz",
        "Jazz",
        None,
        ljpw(0.75, 0.65, 0.60, 0.95),
        "Improvised insight",
    ),
    entry(
        "blues",
        "Blues",
        None,
        ljpw(0.80, 0.70, 0.60, 0.85),
        "Honest sorrow",
    ),
    entry(
        "soul",
        "Soul",
        None,
        ljpw(0.92, 0.72, 0.70, 0.80),
        "Heartfelt longing",
    ),
    entry(
        "rock",
        "Rock",
        None,
        ljpw(0.60, 0.55, 0.90, 0.60),
        "Defiant energy",
    ),
    entry(
        "pop",
        "Pop",
        None,
        ljpw(0.80, 0.70, 0.70, 0.55),
        "Catchy, accessible",
    ),
    entry(
        "metal",
        "Metal",
        None,
        ljpw(0.40, 0.50, 0.98, 0.60),
        "Raw force",
    ),
    entry(
        "hip_hop",
        "Hip Hop",
        None,
        ljpw(0.60, 0.75, 0.85, 0.70),
        "Rhythmic testimony",
    ),
    entry(
        "electronic",
        "Electronic",
        None,
        ljpw(0.55, 0.70, 0.85, 0.60),
        "Driving pulse",
    ),
    entry(
        "folk",
        "Folk",
        None,
        ljpw(0.85, 0.75, 0.45, 0.80),
        "Communal storytelling",
    ),
    entry(
        "country",
        "Country",
        None,
        ljpw(0.80, 0.80, 0.55, 0.70),
        "Plainspoken heart",
    ),
    entry(
        "ambient",
        "Ambient",
        None,
        ljpw(0.70, 0.60, 0.25, 0.85),
        "Spacious stillness",
    ),
    entry(
        "punk",
        "Punk",
        None,
        ljpw(0.35, 0.45, 0.95, 0.45),
        "Rebellious urgency",
    ),
    entry(
        "reggae",
        "Reggae",
        None,
        ljpw(0.88, 0.75, 0.55, 0.70),
        "Easygoing unity",
    ),
];

/// Which static table to look in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityTable {
    Interval,
    Chord,
    Mode,
    Key,
    Genre,
}

impl EntityTable {
    pub const ALL: [EntityTable; 5] = [
        EntityTable::Interval,
        EntityTable::Chord,
        EntityTable::Mode,
        EntityTable::Key,
        EntityTable::Genre,
    ];

    /// All records of this table in display order.
    pub fn records(self) -> &'static [EntityRecord] {
        match self {
            EntityTable::Interval => &INTERVALS,
            EntityTable::Chord => &CHORDS,
            EntityTable::Mode => &MODES,
            EntityTable::Key => &KEYS,
            EntityTable::Genre => &GENRES,
        }
    }

    /// Find a record by key. Keys are case-sensitive ("C#" is a key,
    /// "c#" is not).
    pub fn lookup(self, key: &str) -> Option<&'static EntityRecord> {
        self.records().iter().find(|r| r.key == key)
    }

    pub fn name(self) -> &'static str {
        match self {
            EntityTable::Interval => "interval",
            EntityTable::Chord => "chord",
            EntityTable::Mode => "mode",
            EntityTable::Key => "key",
            EntityTable::Genre => "genre",
        }
    }
}

/// The interval record for a semitone count in 0..=12.
pub fn interval_by_semitones(semitones: u8) -> Option<&'static EntityRecord> {
    INTERVALS.get(semitones as usize)
}
