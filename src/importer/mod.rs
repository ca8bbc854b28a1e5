use crate::error::Result;
use crate::model::chart::{ChartKind, ImportedChart};
use anyhow::anyhow;
use log::info;
use std::fs;
use std::path::Path;

mod json;
mod text;

pub use json::parse_json_chart;
pub use text::{parse_text_chart, parse_text_line};

pub fn import_chart_file<P: AsRef<Path>>(
    path: P,
    kind: ChartKind,
) -> anyhow::Result<ImportedChart> {
    let bytes = fs::read(path.as_ref()).map_err(|e| {
        anyhow!(
            "Failed to read chart file {}: {}",
            path.as_ref().display(),
            e
        )
    })?;

    let imported = import_chart_bytes(&bytes, kind)?;

    info!(
        "Loaded: {} | Type: {} | {} notes found, {} entries skipped",
        path.as_ref()
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("<unknown>"),
        kind,
        imported.source.raw_note_count(),
        imported.skipped.len()
    );

    Ok(imported)
}

/// Run the parser matching `kind` over raw file contents.
///
/// Text charts are decoded lossily, so an invalid byte only spoils the line it sits on.
pub fn import_chart_bytes(bytes: &[u8], kind: ChartKind) -> Result<ImportedChart> {
    match kind {
        ChartKind::Json => parse_json_chart(bytes),
        ChartKind::Text => Ok(parse_text_chart(&String::from_utf8_lossy(bytes))),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::ChartError;
    use crate::model::chart::ChartSource;

    #[test]
    fn json_chart_file_import() {
        env_logger::try_init().unwrap_or(());

        let imported = import_chart_file("./resources/charts/bopeebo.json", ChartKind::Json);

        assert!(imported.is_ok(), "{:?}", imported);
        let imported = imported.unwrap();

        assert_eq!(imported.source.kind(), ChartKind::Json);
        assert_eq!(imported.source.raw_note_count(), 12);
        assert_eq!(imported.skipped.len(), 1);
    }

    #[test]
    fn text_chart_file_import() {
        env_logger::try_init().unwrap_or(());

        let imported = import_chart_file("./resources/charts/bopeebo.txt", ChartKind::Text);

        assert!(imported.is_ok(), "{:?}", imported);
        let imported = imported.unwrap();

        assert_eq!(imported.source.raw_note_count(), 6);
        assert_eq!(imported.skipped.len(), 1);
    }

    #[test]
    fn missing_file_is_an_error() {
        env_logger::try_init().unwrap_or(());

        let imported =
            import_chart_file("./resources/charts/does_not_exist.json", ChartKind::Json);
        assert!(imported.is_err());
    }

    #[test]
    fn invalid_utf8_only_spoils_its_line() {
        env_logger::try_init().unwrap_or(());

        let mut bytes = b"{1}: {1}: {}: {100}\n{".to_vec();
        bytes.push(0xff);
        bytes.extend_from_slice(b"}: {2}: {}: {100}\n{3}: {3}: {}: {100}");

        let imported = import_chart_bytes(&bytes, ChartKind::Text).unwrap();
        match imported.source {
            ChartSource::Text(notes) => assert_eq!(notes.len(), 2),
            other => panic!("expected a text source, got {:?}", other),
        }
        assert_eq!(imported.skipped.len(), 1);
    }

    #[test]
    fn json_bytes_with_text_kind_are_not_fatal() {
        env_logger::try_init().unwrap_or(());

        let json = br#"{"song": {"notes": []}}"#;

        assert!(import_chart_bytes(json, ChartKind::Text).is_ok());
        assert!(matches!(
            import_chart_bytes(b"{1}: {1}: {}: {1}", ChartKind::Json),
            Err(ChartError::Format(_))
        ));
    }
}
