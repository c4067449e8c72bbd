// The player's melody: an ordered, capacity-bounded list of notes.
//
// The game lets the player tap notes onto a staff, undo the last one, and
// clear. `Melody` is that list. It enforces `max_notes` (16 by default, see
// `MelodyConfig`) on every mutation and on snapshot restore, so an analysis
// never sees an oversized melody.
//
// Snapshots are plain JSON: `{"max_notes": 16, "notes": ["C4", "E4"]}`.

use serde::{Deserialize, Serialize};

use crate::analysis::{MelodyAnalysis, analyze_notes};
use crate::config::MelodyConfig;
use crate::error::MelodyError;
use crate::note::Note;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Melody {
    max_notes: usize,
    notes: Vec<Note>,
}

impl Default for Melody {
    fn default() -> Self {
        Melody::new(&MelodyConfig::default())
    }
}

impl Melody {
    pub fn new(config: &MelodyConfig) -> Self {
        Melody {
            max_notes: config.max_notes,
            notes: Vec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.max_notes
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.notes.len() >= self.max_notes
    }

    pub fn push(&mut self, note: Note) -> Result<(), MelodyError> {
        if self.is_full() {
            return Err(MelodyError::Full {
                capacity: self.max_notes,
            });
        }
        self.notes.push(note);
        Ok(())
    }

    /// Parse and append a note token.
    pub fn push_token(&mut self, token: &str) -> Result<(), MelodyError> {
        let note: Note = token.parse()?;
        self.push(note)
    }

    /// Undo: remove and return the last note.
    pub fn pop(&mut self) -> Option<Note> {
        self.notes.pop()
    }

    pub fn remove(&mut self, index: usize) -> Option<Note> {
        (index < self.notes.len()).then(|| self.notes.remove(index))
    }

    pub fn clear(&mut self) {
        self.notes.clear();
    }

    /// Signed semitone steps between consecutive notes.
    pub fn intervals(&self) -> Vec<i32> {
        self.notes.windows(2).map(|w| w[0].interval_to(w[1])).collect()
    }

    pub fn analyze(&self, config: &MelodyConfig) -> Result<MelodyAnalysis, MelodyError> {
        analyze_notes(&self.notes, config)
    }

    pub fn to_json(&self) -> Result<String, MelodyError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore a snapshot. Rejects snapshots holding more notes than their
    /// own capacity.
    pub fn from_json(json: &str) -> Result<Self, MelodyError> {
        let melody: Melody = serde_json::from_str(json)?;
        if melody.notes.len() > melody.max_notes {
            return Err(MelodyError::Full {
                capacity: melody.max_notes,
            });
        }
        Ok(melody)
    }
}
