use crate::error::ChartError;
use crate::model::note::Note;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// A note as it appears in an FNF section, before ownership is resolved.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct RawJsonNote {
    pub start_ms: f64,
    /// 0..=3 for one side and 4..=7 for the other in the usual 8-lane encoding.
    /// Anything else is folded back into four lanes by the converter.
    pub lane_index: i64,
    pub duration_ms: f64,
    /// Copied from the owning section so the note can be judged on its own.
    pub section_must_hit: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Section {
    pub must_hit: bool,
    pub notes: Vec<RawJsonNote>,
}

/// Parsed chart data, tagged by the format it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSource {
    Json(Vec<Section>),
    Text(Vec<Note>),
}

impl ChartSource {
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartSource::Json(_) => ChartKind::Json,
            ChartSource::Text(_) => ChartKind::Text,
        }
    }

    /// Number of notes held before any selection is applied.
    pub fn raw_note_count(&self) -> usize {
        match self {
            ChartSource::Json(sections) => sections.iter().map(|s| s.notes.len()).sum(),
            ChartSource::Text(notes) => notes.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Json,
    Text,
}

impl ChartKind {
    /// Guess the chart kind from a file extension, ignoring case.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ChartError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        Self::from_name(ext)
    }

    pub fn from_name(name: &str) -> Result<Self, ChartError> {
        match name.trim().to_lowercase().as_str() {
            "json" | "fnf" => Ok(ChartKind::Json),
            "txt" | "text" | "scratch" => Ok(ChartKind::Text),
            other => Err(ChartError::UnknownKind(other.to_owned())),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Json => write!(f, "JSON"),
            ChartKind::Text => write!(f, "TXT"),
        }
    }
}

/// Where in the source file an entry was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryLocation {
    /// 1-based line number in a text chart.
    Line(usize),
    /// A whole section of a JSON chart, by index.
    Section(usize),
    /// A single note of a JSON chart.
    Note { section: usize, index: usize },
}

impl fmt::Display for EntryLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryLocation::Line(line) => write!(f, "line {}", line),
            EntryLocation::Section(section) => write!(f, "section {}", section),
            EntryLocation::Note { section, index } => {
                write!(f, "section {} note {}", section, index)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedEntry {
    pub location: EntryLocation,
    pub reason: String,
}

/// The result of a tolerant parse: what was accepted, and what was not.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedChart {
    pub source: ChartSource,
    pub skipped: Vec<SkippedEntry>,
}
