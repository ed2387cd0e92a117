//! The loaded content table.

use std::path::Path;

use dreamspell_kin::{SEAL_COUNT, Seal, TONE_COUNT, Tone};
use tracing::debug;

use crate::entry::{ContentDocument, SealEntry, ToneEntry};
use crate::error::ContentError;

const BUILTIN: &str = include_str!("../data/builtin.json");

/// Seal and tone content indexed by id.
///
/// Loaded once and passed around by reference. A table may be partial: ids
/// without an entry simply have no content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTable {
    seals: Vec<Option<SealEntry>>,
    tones: Vec<Option<ToneEntry>>,
}

impl ContentTable {
    /// Parses a content document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Json`] for malformed documents,
    /// [`ContentError::SealId`] / [`ContentError::ToneId`] for ids out of
    /// range, and [`ContentError::DuplicateSeal`] /
    /// [`ContentError::DuplicateTone`] for repeated ids.
    pub fn from_json_str(json: &str) -> Result<Self, ContentError> {
        let doc: ContentDocument = serde_json::from_str(json)?;
        Self::from_document(doc)
    }

    /// Reads and parses a content file.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Io`] if the file cannot be read, plus
    /// everything [`ContentTable::from_json_str`] returns.
    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let json = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json_str(&json)?;
        debug!(
            path = %path.display(),
            seals = table.seal_count(),
            tones = table.tone_count(),
            "content table loaded"
        );
        Ok(table)
    }

    /// The embedded English table with names, actions, powers and essences
    /// for all 20 seals and 13 tones.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded document is corrupt.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_json_str(BUILTIN)
    }

    fn from_document(doc: ContentDocument) -> Result<Self, ContentError> {
        let mut seals = vec![None; usize::from(SEAL_COUNT)];
        for entry in doc.seals {
            let id = entry.id;
            let seal = Seal::new(id).map_err(|_| ContentError::SealId { id })?;
            let slot = &mut seals[usize::from(seal.index())];
            if slot.is_some() {
                return Err(ContentError::DuplicateSeal { id });
            }
            *slot = Some(entry);
        }

        let mut tones = vec![None; usize::from(TONE_COUNT)];
        for entry in doc.tones {
            let id = entry.id;
            let tone = Tone::new(id).map_err(|_| ContentError::ToneId { id })?;
            let slot = &mut tones[usize::from(tone.index())];
            if slot.is_some() {
                return Err(ContentError::DuplicateTone { id });
            }
            *slot = Some(entry);
        }

        Ok(Self { seals, tones })
    }

    /// Returns the entry for `seal`, if the table has one.
    pub fn seal(&self, seal: Seal) -> Option<&SealEntry> {
        self.seals[usize::from(seal.index())].as_ref()
    }

    /// Returns the entry for `tone`, if the table has one.
    pub fn tone(&self, tone: Tone) -> Option<&ToneEntry> {
        self.tones[usize::from(tone.index())].as_ref()
    }

    /// Seal name, falling back to the seal number.
    pub fn seal_name(&self, seal: Seal) -> String {
        self.seal(seal)
            .map_or_else(|| seal.to_string(), |e| e.name.clone())
    }

    /// Tone name, falling back to the tone number.
    pub fn tone_name(&self, tone: Tone) -> String {
        self.tone(tone)
            .map_or_else(|| tone.to_string(), |e| e.name.clone())
    }

    /// Number of seals that have an entry.
    pub fn seal_count(&self) -> usize {
        self.seals.iter().flatten().count()
    }

    /// Number of tones that have an entry.
    pub fn tone_count(&self) -> usize {
        self.tones.iter().flatten().count()
    }
}
