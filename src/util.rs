use crate::model::chart::ChartKind;
use crate::model::config::DEFAULT_VELOCITY;
use log::info;
use std::path::Path;

/// Read the default velocity from loose user text.
///
/// Only a plain run of ASCII digits is accepted; anything else falls back to
/// [`DEFAULT_VELOCITY`].
pub fn parse_default_velocity(input: &str) -> u32 {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        info!(
            "Velocity '{}' is not a non-negative integer, defaulting to {}..!",
            input, DEFAULT_VELOCITY
        );
        return DEFAULT_VELOCITY;
    }

    match input.parse::<u32>() {
        Ok(velocity) => velocity,
        Err(_) => {
            info!(
                "Velocity '{}' is too large, defaulting to {}..!",
                input, DEFAULT_VELOCITY
            );
            DEFAULT_VELOCITY
        }
    }
}

/// Pick the chart kind from an explicit name if given, otherwise from the file extension.
pub fn resolve_chart_kind(explicit: Option<&str>, path: &Path) -> anyhow::Result<ChartKind> {
    let kind = match explicit {
        Some(name) => ChartKind::from_name(name)?,
        None => ChartKind::from_path(path)?,
    };

    Ok(kind)
}
