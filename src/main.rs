//! gallery-audit: report CMS resources that live in the wrong gallery.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

use gallery_audit::render::{OutputFormat, render};
use gallery_audit::{AuditConfig, SnapshotRepository, run_audit};

#[derive(Parser, Debug)]
#[command(name = "gallery-audit")]
#[command(about = "Find CMS resources stored outside their editors' gallery")]
struct Args {
    /// Repository snapshot (.json or .toon)
    snapshot: PathBuf,

    /// Audit configuration (.json or .toon)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Include resources that belong in more than one gallery
    #[arg(long)]
    report_conflicts: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    if let Err(err) = run(&args) {
        error!("gallery audit failed: {err:#}");
        return Err(err);
    }
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => AuditConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AuditConfig::default(),
    }
    .with_report_conflicts(args.report_conflicts);

    let repo = SnapshotRepository::load(&args.snapshot)
        .with_context(|| format!("loading snapshot {}", args.snapshot.display()))?;

    let outcome = run_audit(&repo, &config, Utc::now())?;

    let Some(text) = render(&outcome.report, args.format, &config)? else {
        info!("nothing to report");
        return Ok(());
    };

    match &args.output {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("writing report to {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    info!(resources = outcome.report.len(), "report written");
    Ok(())
}
