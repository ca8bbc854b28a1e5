use anyhow::Result;
use clap::Parser;
use fnf_scratch::{
    Args, ConversionConfig, convert, import_chart_file, parse_default_velocity, preview,
    resolve_chart_kind, serialize, write_chart,
};
use log::{debug, info, warn};

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let kind = resolve_chart_kind(args.kind.as_deref(), &args.chart)?;
    let config = ConversionConfig::new(parse_default_velocity(&args.velocity));

    info!("Importing {} chart: '{}'...", kind, args.chart.display());
    let imported = import_chart_file(&args.chart, kind)?;

    for entry in imported.skipped.iter() {
        debug!("Skipped {}: {}", entry.location, entry.reason);
    }
    if !imported.skipped.is_empty() {
        warn!(
            "{} malformed entries were skipped while loading..!",
            imported.skipped.len()
        );
    }

    let notes = convert(imported.source, config);
    info!(
        "Converted {} notes with default velocity {}..!",
        notes.len(),
        config.default_velocity
    );

    if args.dry_run {
        info!("Previewing at most {} notes..!", args.preview_max);
        println!("{}", preview(&notes, args.preview_max));
        return Ok(());
    }

    match args.output {
        Some(path) => write_chart(&path, &notes)?,
        None => println!("{}", serialize(&notes)),
    }

    Ok(())
}
