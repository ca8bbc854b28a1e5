use crate::error::{ChartError, Result};
use crate::model::chart::{
    ChartSource, EntryLocation, ImportedChart, RawJsonNote, Section, SkippedEntry,
};
use log::{debug, warn};
use serde_json::{Map, Value};

/// Decode an FNF chart into its sections, keeping raw milliseconds and lane indices.
///
/// Only a broken top level (`song.notes` missing or not a list) is fatal. Sections and
/// notes that can't be read are recorded in [`ImportedChart::skipped`] and left out.
pub fn parse_json_chart(bytes: &[u8]) -> Result<ImportedChart> {
    let root: Value =
        serde_json::from_slice(bytes).map_err(|e| ChartError::Format(e.to_string()))?;

    if !root.is_object() {
        return Err(ChartError::Format(
            "top-level value is not an object".to_owned(),
        ));
    }

    let raw_sections = root
        .get("song")
        .and_then(|song| song.get("notes"))
        .and_then(Value::as_array)
        .ok_or_else(|| ChartError::Format("song.notes is missing or not a list".to_owned()))?;

    let mut sections: Vec<Section> = Vec::with_capacity(raw_sections.len());
    let mut skipped: Vec<SkippedEntry> = Vec::new();

    for (section_idx, value) in raw_sections.iter().enumerate() {
        let Some(body) = value.as_object() else {
            warn!("Skipping section {}: not an object..!", section_idx);
            skipped.push(SkippedEntry {
                location: EntryLocation::Section(section_idx),
                reason: format!("expected an object, found {}", value),
            });
            continue;
        };

        if let Some(section) = parse_section(section_idx, body, &mut skipped) {
            sections.push(section);
        }
    }

    debug!(
        "Parsed {} section(s) from json chart, {} entries skipped",
        sections.len(),
        skipped.len()
    );

    Ok(ImportedChart {
        source: ChartSource::Json(sections),
        skipped,
    })
}

fn parse_section(
    section_idx: usize,
    body: &Map<String, Value>,
    skipped: &mut Vec<SkippedEntry>,
) -> Option<Section> {
    let must_hit = match body.get("mustHitSection") {
        None => true,
        Some(Value::Bool(flag)) => *flag,
        Some(other) => {
            let flag = is_truthy(other);
            debug!(
                "Section {} has a non-boolean mustHitSection ({}), reading it as {}",
                section_idx, other, flag
            );
            flag
        }
    };

    let raw_notes = match body.get("sectionNotes") {
        None | Some(Value::Null) => return Some(Section { must_hit, notes: Vec::new() }),
        Some(Value::Array(raw_notes)) => raw_notes,
        Some(other) => {
            warn!("Skipping section {}: sectionNotes is not a list..!", section_idx);
            skipped.push(SkippedEntry {
                location: EntryLocation::Section(section_idx),
                reason: format!("sectionNotes is not a list: {}", other),
            });
            return None;
        }
    };

    let mut notes = Vec::with_capacity(raw_notes.len());
    for (index, raw) in raw_notes.iter().enumerate() {
        match parse_raw_note(raw, must_hit) {
            Ok(note) => notes.push(note),
            Err(e) => {
                let location = EntryLocation::Note {
                    section: section_idx,
                    index,
                };
                warn!("Skipping {}: {}..!", location, e);
                skipped.push(SkippedEntry {
                    location,
                    reason: e.to_string(),
                });
            }
        }
    }

    Some(Section { must_hit, notes })
}

/// Read one `[start_ms, lane_index, duration_ms, ...]` tuple. Trailing elements are ignored.
fn parse_raw_note(value: &Value, section_must_hit: bool) -> Result<RawJsonNote> {
    let invalid = |field: &'static str, value: &Value| ChartError::InvalidField {
        field,
        value: value.to_string(),
    };

    let fields = match value.as_array() {
        Some(fields) if fields.len() >= 3 => fields,
        _ => return Err(invalid("note", value)),
    };

    let start_ms = fields[0]
        .as_f64()
        .filter(|ms| *ms >= 0.0)
        .ok_or_else(|| invalid("start", &fields[0]))?;

    let lane_index = lane_index(&fields[1]).ok_or_else(|| invalid("lane", &fields[1]))?;

    let duration_ms = fields[2]
        .as_f64()
        .ok_or_else(|| invalid("duration", &fields[2]))?;

    Ok(RawJsonNote {
        start_ms,
        lane_index,
        duration_ms,
        section_must_hit,
    })
}

// Some editors write lanes as `5.0`; accept those as long as they are whole.
fn lane_index(value: &Value) -> Option<i64> {
    if let Some(lane) = value.as_i64() {
        return Some(lane);
    }

    value
        .as_f64()
        .filter(|lane| lane.fract() == 0.0 && (i64::MIN as f64..=i64::MAX as f64).contains(lane))
        .map(|lane| lane as i64)
}

// Loose flag reading: null, zero, and empty strings or containers are false.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}
