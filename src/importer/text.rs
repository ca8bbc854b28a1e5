use crate::error::{ChartError, Result};
use crate::model::chart::{ChartSource, EntryLocation, ImportedChart, SkippedEntry};
use crate::model::note::Note;
use log::{debug, warn};
use std::str::FromStr;

const FIELD_DELIMITER: char = '}';
const MIN_PARTS: usize = 4;

/// Parse a Scratch text chart, one `{time}: {lane}: {}: {velocity}` note per line.
///
/// Never fails as a whole: blank lines are ignored, and any other line that doesn't
/// yield a note is recorded in [`ImportedChart::skipped`].
pub fn parse_text_chart(text: &str) -> ImportedChart {
    let mut notes: Vec<Note> = Vec::new();
    let mut skipped: Vec<SkippedEntry> = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let location = EntryLocation::Line(idx + 1);

        match parse_text_line(line) {
            Ok(Some(note)) => notes.push(note),
            Ok(None) => {
                if !line.trim().is_empty() {
                    debug!("Skipping {}: not enough fields", location);
                    skipped.push(SkippedEntry {
                        location,
                        reason: format!("expected at least {} '}}'-delimited parts", MIN_PARTS),
                    });
                }
            }
            Err(e) => {
                warn!("Skipping {}: {}..!", location, e);
                skipped.push(SkippedEntry {
                    location,
                    reason: e.to_string(),
                });
            }
        }
    }

    ImportedChart {
        source: ChartSource::Text(notes),
        skipped,
    }
}

/// Parse a single line.
///
/// `Ok(None)` means the line is blank or too short to be a note at all.
/// Empty numeric fields read as `0`; a non-empty field that isn't a valid
/// number fails the line.
pub fn parse_text_line(line: &str) -> Result<Option<Note>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let parts: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if parts.len() < MIN_PARTS {
        return Ok(None);
    }

    let time: f64 = parse_field("time", parts[0])?;
    let lane: u32 = parse_field("lane", parts[1])?;
    let velocity: f64 = parse_field("velocity", parts[3])?;

    if !time.is_finite() || time < 0.0 {
        return Err(ChartError::InvalidField {
            field: "time",
            value: time.to_string(),
        });
    }
    if !velocity.is_finite() || velocity < 0.0 {
        return Err(ChartError::InvalidField {
            field: "velocity",
            value: velocity.to_string(),
        });
    }

    Ok(Some(Note::new(time, lane, velocity)))
}

// Splitting on '}' leaves the ": {" separators attached to each part.
fn clean_field(part: &str) -> &str {
    part.trim_matches(|c: char| c.is_whitespace() || matches!(c, ':' | '{' | '}'))
}

fn parse_field<T: FromStr + Default>(field: &'static str, part: &str) -> Result<T> {
    let text = clean_field(part);
    if text.is_empty() {
        return Ok(T::default());
    }

    text.parse::<T>().map_err(|_| ChartError::InvalidField {
        field,
        value: text.to_owned(),
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn notes_of(imported: &ImportedChart) -> &[Note] {
        match &imported.source {
            ChartSource::Text(notes) => notes,
            other => panic!("expected a text source, got {:?}", other),
        }
    }

    #[test]
    fn parse_single_line() {
        let note = parse_text_line("{2.5}: {3}: {}: {200}").unwrap().unwrap();

        assert_eq!(note, Note::new(2.5, 3, 200.0));
        assert_eq!(note.duration, 0.0);
    }

    #[test]
    fn empty_fields_default_to_zero() {
        assert_eq!(
            parse_text_line("{1.25}: {2}: {}: {}").unwrap(),
            Some(Note::new(1.25, 2, 0.0))
        );
        assert_eq!(
            parse_text_line("{}: {}: {}: {}").unwrap(),
            Some(Note::new(0.0, 0, 0.0))
        );
    }

    #[test]
    fn short_and_blank_lines_yield_nothing() {
        assert_eq!(parse_text_line("").unwrap(), None);
        assert_eq!(parse_text_line("   \t").unwrap(), None);
        assert_eq!(parse_text_line("{1}: {2}").unwrap(), None);
        assert_eq!(parse_text_line("hello").unwrap(), None);
    }

    #[test]
    fn trailing_brace_counts_as_a_part() {
        // "{1}: {2}: {3}" splits into four parts, the last one empty.
        assert_eq!(
            parse_text_line("{1}: {2}: {3}").unwrap(),
            Some(Note::new(1.0, 2, 0.0))
        );
    }

    #[test]
    fn bad_numbers_fail_the_line() {
        assert!(matches!(
            parse_text_line("{abc}: {1}: {}: {100}"),
            Err(ChartError::InvalidField { field: "time", .. })
        ));
        assert!(matches!(
            parse_text_line("{1.0}: {1.5}: {}: {100}"),
            Err(ChartError::InvalidField { field: "lane", .. })
        ));
        assert!(matches!(
            parse_text_line("{1.0}: {1}: {}: {loud}"),
            Err(ChartError::InvalidField { field: "velocity", .. })
        ));
        assert!(matches!(
            parse_text_line("{-1.0}: {1}: {}: {100}"),
            Err(ChartError::InvalidField { field: "time", .. })
        ));
        assert!(matches!(
            parse_text_line("{1.0}: {1}: {}: {inf}"),
            Err(ChartError::InvalidField { field: "velocity", .. })
        ));
    }

    #[test]
    fn corrupt_lines_do_not_sink_the_file() {
        env_logger::try_init().unwrap_or(());

        let text = "{0.5}: {1}: {}: {171}\n\
                    \n\
                    {oops}: {2}: {}: {171}\n\
                    {1.5}: {3}\n\
                    {2}: {4}: {}: {171}\n";

        let imported = parse_text_chart(text);
        let notes = notes_of(&imported);

        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0], Note::new(0.5, 1, 171.0));
        assert_eq!(notes[1], Note::new(2.0, 4, 171.0));

        assert_eq!(
            imported
                .skipped
                .iter()
                .map(|s| s.location)
                .collect::<Vec<_>>(),
            vec![EntryLocation::Line(3), EntryLocation::Line(4)]
        );
    }

    #[test]
    fn keeps_file_order() {
        let imported =
            parse_text_chart("{3}: {1}: {}: {1}\n{1}: {2}: {}: {1}\r\n{2}: {3}: {}: {1}");
        let times: Vec<f64> = notes_of(&imported).iter().map(|n| n.time).collect();

        assert_eq!(times, vec![3.0, 1.0, 2.0]);
    }
}
