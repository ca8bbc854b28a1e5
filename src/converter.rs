use crate::model::chart::{ChartSource, RawJsonNote, Section};
use crate::model::config::ConversionConfig;
use crate::model::note::Note;
use log::{debug, info};

/// Lanes per side in an FNF chart. Indices past this belong to the other side.
const LANES_PER_SIDE: i64 = 4;
const MS_PER_SECOND: f64 = 1000.0;

/// Turn parsed chart data into the final note sequence.
///
/// Text charts are already in output shape and pass through untouched. JSON charts
/// keep only opponent notes, remapped to lanes `1..=4`, in the order they were read.
/// Nothing is sorted, so the output follows the source's section order.
pub fn convert(source: ChartSource, config: ConversionConfig) -> Vec<Note> {
    match source {
        ChartSource::Text(notes) => notes,
        ChartSource::Json(sections) => convert_sections(&sections, config),
    }
}

fn convert_sections(sections: &[Section], config: ConversionConfig) -> Vec<Note> {
    let mut notes: Vec<Note> = Vec::new();
    let mut dropped = 0usize;

    for section in sections.iter() {
        for raw in section.notes.iter() {
            match convert_raw_note(raw, config) {
                Some(note) => notes.push(note),
                None => dropped += 1,
            }
        }
    }

    if dropped > 0 {
        info!(
            "Dropped {} player note(s), kept {} opponent note(s)",
            dropped,
            notes.len()
        );
    }

    notes
}

/// Resolve one raw FNF note, or `None` if it belongs to the player.
///
/// A note is the opponent's if its section isn't a must-hit section, or if its lane
/// index sits in the upper half of the 8-lane encoding. Either way it lands in `1..=4`.
pub fn convert_raw_note(raw: &RawJsonNote, config: ConversionConfig) -> Option<Note> {
    let upper_half = raw.lane_index >= LANES_PER_SIDE;

    if raw.section_must_hit && !upper_half {
        debug!(
            "Dropping player note at {}ms, lane {}",
            raw.start_ms, raw.lane_index
        );
        return None;
    }

    let lane_index = if upper_half {
        raw.lane_index - LANES_PER_SIDE
    } else {
        raw.lane_index
    };
    // rem_euclid keeps a negative index in 0..4 as well.
    let lane = (lane_index.rem_euclid(LANES_PER_SIDE) + 1) as u32;

    let duration = if raw.duration_ms != 0.0 {
        raw.duration_ms / MS_PER_SECOND
    } else {
        0.0
    };

    let note = Note::new(
        raw.start_ms / MS_PER_SECOND,
        lane,
        config.default_velocity as f64,
    );

    Some(note.with_duration(duration))
}
