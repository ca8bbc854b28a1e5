use crate::model::note::Note;
use anyhow::anyhow;
use log::info;
use std::fs;
use std::path::Path;

/// Render one note as `{time}: {lane}: {}: {velocity}`.
///
/// Numbers use the shortest form that reads back to the same value, so `1.0` renders as `1`.
pub fn format_note(note: &Note) -> String {
    format!("{{{}}}: {{{}}}: {{}}: {{{}}}", note.time, note.lane, note.velocity)
}

/// One line per note, newline-separated, with no trailing newline.
pub fn serialize(notes: &[Note]) -> String {
    notes.iter().map(format_note).collect::<Vec<_>>().join("\n")
}

/// The first `max` notes, in output format.
pub fn preview(notes: &[Note], max: usize) -> String {
    serialize(&notes[..max.min(notes.len())])
}

pub fn write_chart<P: AsRef<Path>>(path: P, notes: &[Note]) -> anyhow::Result<()> {
    fs::write(path.as_ref(), serialize(notes)).map_err(|e| {
        anyhow!(
            "Failed to write chart file {}: {}",
            path.as_ref().display(),
            e
        )
    })?;

    info!(
        "Saved {} notes to '{}'..!",
        notes.len(),
        path.as_ref().display()
    );

    Ok(())
}
