//! Content entries.
//!
//! Text fields are carried verbatim; nothing here interprets them.

use serde::{Deserialize, Serialize};

/// Light, shadow and healing aspects of a seal or tone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Psychology {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub healing: Option<String>,
}

/// Content attached to one of the 20 seals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SealEntry {
    /// Seal number, 1..=20.
    pub id: u8,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub essence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub psychology: Option<Psychology>,
}

/// Content attached to one of the 13 tones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneEntry {
    /// Tone number, 1..=13.
    pub id: u8,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub essence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub psychology: Option<Psychology>,
}

/// On-disk layout of a content document.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ContentDocument {
    #[serde(default)]
    pub seals: Vec<SealEntry>,
    #[serde(default)]
    pub tones: Vec<ToneEntry>,
}
