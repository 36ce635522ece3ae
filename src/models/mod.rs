use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A piece of text that may carry an XMLTV `lang` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub value: String,
    pub lang: Option<String>,
}

impl LocalizedText {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            lang: None,
        }
    }

    pub fn with_lang(value: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            lang: Some(lang.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    pub src: String,
    pub width: Option<String>,
    pub height: Option<String>,
}

impl Icon {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            width: None,
            height: None,
        }
    }
}

/// Child element we carry through verbatim without interpreting it
/// (e.g. `<url>`, `<length>`, provider extensions).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RawElement {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<RawElement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Channel {
    /// XMLTV channel id; unique key in the merged output.
    pub id: String,
    pub display_names: Vec<LocalizedText>,
    pub icons: Vec<Icon>,
    /// Passthrough children other than display-name and icon.
    pub extra: Vec<RawElement>,
}

impl Channel {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeNum {
    pub system: Option<String>,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub system: Option<String>,
    pub value: String,
}

/// Credited people grouped by role. Role order and name order are both
/// significant and preserved as encountered; duplicate names are permitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Credits {
    pub entries: Vec<CreditEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditEntry {
    pub role: String,
    pub names: Vec<String>,
}

impl Credits {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a name under `role`, creating the role entry on first use.
    pub fn add(&mut self, role: &str, name: impl Into<String>) {
        match self.entries.iter_mut().find(|e| e.role == role) {
            Some(entry) => entry.names.push(name.into()),
            None => self.entries.push(CreditEntry {
                role: role.to_string(),
                names: vec![name.into()],
            }),
        }
    }

    pub fn names_for(&self, role: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.role == role)
            .map(|e| e.names.as_slice())
    }
}

/// One schedule entry. Start/stop are kept as the opaque XMLTV timestamp
/// strings; the merged output only needs their lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Programme {
    pub start: String,
    pub stop: Option<String>,
    pub channel: String,
    pub title: Option<LocalizedText>,
    pub subtitle: Option<LocalizedText>,
    pub description: Option<LocalizedText>,
    pub categories: Vec<LocalizedText>,
    pub episode_num: Option<EpisodeNum>,
    pub date: Option<String>,
    pub rating: Option<Rating>,
    pub credits: Option<Credits>,
    pub icons: Vec<Icon>,
    /// Passthrough children we do not normalize.
    pub extra: Vec<RawElement>,
}

/// A parsed source document as handed to the assembler: channels and
/// programmes in document order, plus nothing else. Parsing failures are the
/// supplier's concern; a document that reaches the engine is well-formed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct XmltvDocument {
    pub channels: Vec<Channel>,
    pub programmes: Vec<Programme>,
}

/// Final merged output: channels sorted by id, programmes sorted by
/// `(start, channel)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedDocument {
    pub generator_name: String,
    pub generator_url: String,
    pub generated_at: DateTime<Utc>,
    pub channels: Vec<Channel>,
    pub programmes: Vec<Programme>,
}

/// Facts mined out of a free-text description body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractedInfo {
    pub genre: Option<String>,
    pub year: Option<String>,
    pub rating: Option<String>,
    pub credits: Credits,
}

impl ExtractedInfo {
    pub fn is_empty(&self) -> bool {
        self.genre.is_none()
            && self.year.is_none()
            && self.rating.is_none()
            && self.credits.is_empty()
    }
}

/// One channel that was bound to a source document but never observed there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingChannel {
    pub channel_id: String,
    /// Configured output id, when it differs from the channel id.
    pub output_id: Option<String>,
}

/// Missing-channel diagnostics for one source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingChannelReport {
    pub source: String,
    pub channels: Vec<MissingChannel>,
}

/// Inventory entry produced when scanning documents for available channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelListing {
    pub id: String,
    pub display_names: Vec<String>,
    pub source: String,
}
