// Note tokens: "<pitch><octave>", e.g. "C4", "F#3", "Bb-1".
//
// A pitch is a letter A-G (either case) with an optional `#` or `b`. The
// octave is a signed integer. Notes are normalized to an absolute semitone
// index `octave·12 + pitch_class`, so enharmonic spellings compare equal
// ("Db4" == "C#4") and spellings that cross an octave line move the octave
// ("Cb4" == "B3", "B#3" == "C4"). Display always uses sharps.
//
// Octaves are bounded to `i8`, after normalization, so every `Note` has a
// small semitone index and interval arithmetic cannot overflow. Tokens
// outside that range are rejected as `BadOctave`.
//
// Notes serialize as their token string, which keeps melody snapshots
// human-readable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NoteParseError;

pub const SEMITONES_PER_OCTAVE: i32 = 12;

const PITCH_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Note {
    /// Absolute semitone index; C0 is 0.
    semitone: i32,
}

impl Note {
    pub fn new(pitch_class: u8, octave: i8) -> Self {
        Note {
            semitone: i32::from(octave) * SEMITONES_PER_OCTAVE + i32::from(pitch_class % 12),
        }
    }

    pub fn semitone(self) -> i32 {
        self.semitone
    }

    /// 0 (C) through 11 (B).
    pub fn pitch_class(self) -> u8 {
        self.semitone.rem_euclid(SEMITONES_PER_OCTAVE) as u8
    }

    pub fn octave(self) -> i32 {
        self.semitone.div_euclid(SEMITONES_PER_OCTAVE)
    }

    pub fn pitch_name(self) -> &'static str {
        PITCH_NAMES[self.pitch_class() as usize]
    }

    /// Signed semitone distance from `self` up to `to`.
    pub fn interval_to(self, to: Note) -> i32 {
        to.semitone - self.semitone
    }
}

fn natural_index(letter: char) -> Option<i32> {
    match letter.to_ascii_uppercase() {
        'C' => Some(0),
        'D' => Some(2),
        'E' => Some(4),
        'F' => Some(5),
        'G' => Some(7),
        'A' => Some(9),
        'B' => Some(11),
        _ => None,
    }
}

impl FromStr for Note {
    type Err = NoteParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        let mut chars = token.chars();
        let Some(letter) = chars.next() else {
            return Err(NoteParseError::Empty);
        };
        let natural =
            natural_index(letter).ok_or_else(|| NoteParseError::UnknownPitch(token.to_string()))?;

        let rest = chars.as_str();
        let (accidental, octave_str) = match rest.as_bytes().first() {
            Some(b'#') => (1, &rest[1..]),
            Some(b'b') => (-1, &rest[1..]),
            _ => (0, rest),
        };

        let bad_octave = || NoteParseError::BadOctave(token.to_string());
        let octave: i8 = octave_str.parse().map_err(|_| bad_octave())?;

        let note = Note {
            semitone: i32::from(octave) * SEMITONES_PER_OCTAVE + natural + accidental,
        };
        // "Cb-128" and "B#127" spill out of the octave range.
        if i8::try_from(note.octave()).is_err() {
            return Err(bad_octave());
        }
        Ok(note)
    }
}

impl TryFrom<String> for Note {
    type Error = NoteParseError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        token.parse()
    }
}

impl From<Note> for String {
    fn from(note: Note) -> Self {
        note.to_string()
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch_name(), self.octave())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(token: &str) -> Note {
        token.parse().unwrap()
    }

    #[test]
    fn parse_naturals() {
        assert_eq!(note("C4").semitone(), 48);
        assert_eq!(note("E4").semitone(), 52);
        assert_eq!(note("B3").pitch_class(), 11);
        assert_eq!(note("a0").pitch_name(), "A");
    }

    #[test]
    fn enharmonics_are_equal() {
        assert_eq!(note("C#4"), note("Db4"));
        assert_eq!(note("Cb4"), note("B3"));
        assert_eq!(note("B#3"), note("C4"));
        assert_eq!(note("Bb2").to_string(), "A#2");
    }

    #[test]
    fn negative_octaves() {
        let n = note("G-1");
        assert_eq!(n.octave(), -1);
        assert_eq!(n.pitch_class(), 7);
        assert_eq!(n.to_string(), "G-1");
        assert_eq!(note("Cb0").to_string(), "B-1");
    }

    #[test]
    fn intervals_are_signed() {
        assert_eq!(note("C4").interval_to(note("G4")), 7);
        assert_eq!(note("G4").interval_to(note("C4")), -7);
        assert_eq!(note("C4").interval_to(note("C5")), 12);
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<Note>(), Err(NoteParseError::Empty));
        assert_eq!("  ".parse::<Note>(), Err(NoteParseError::Empty));
        assert_eq!("H4".parse::<Note>(), Err(NoteParseError::UnknownPitch("H4".into())));
        assert_eq!("C".parse::<Note>(), Err(NoteParseError::BadOctave("C".into())));
        assert_eq!("C#x".parse::<Note>(), Err(NoteParseError::BadOctave("C#x".into())));
        assert_eq!("C##4".parse::<Note>(), Err(NoteParseError::BadOctave("C##4".into())));
    }

    #[test]
    fn octave_range_is_bounded() {
        assert_eq!(note("C127").octave(), 127);
        assert_eq!(note("C-128").octave(), -128);
        for token in ["C999999999", "C128", "C-129", "Cb-128", "B#127"] {
            assert_eq!(
                token.parse::<Note>(),
                Err(NoteParseError::BadOctave(token.into())),
                "{token}"
            );
        }
    }

    #[test]
    fn extreme_octaves_give_exact_intervals() {
        let low = note("C-128");
        let high = note("B127");
        assert_eq!(low.interval_to(high), 255 * 12 + 11);
        assert_eq!(high.interval_to(low), -(255 * 12 + 11));
        assert_eq!(Note::new(11, i8::MAX), high);
    }

    #[test]
    fn serializes_as_token() {
        let json = serde_json::to_string(&note("Eb5")).unwrap();
        assert_eq!(json, "\"D#5\"");
        let back: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(back, note("D#5"));
        assert!(serde_json::from_str::<Note>("\"X9\"").is_err());
    }
}
