//! `daybook` reconciles a recorded appointments response into one summary per
//! customer and prints it as JSON.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use daybook_core::{AppointmentReconciler, ReconciliationService};
use daybook_domain::Config;
use daybook_infra::{config, init_tracing, JsonFileFeed};

#[derive(Parser, Debug)]
#[command(name = "daybook", about = "Merge a day's bookings into one summary per customer")]
struct Cli {
    /// Recorded `appointments.json` response to reconcile
    #[arg(long, short = 'i')]
    input: PathBuf,

    /// Config file (JSON or TOML); probed from standard locations if omitted
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// IANA zone the records are read and rendered in
    #[arg(long)]
    timezone: Option<String>,

    /// Tracing filter directive, e.g. `debug` or `daybook_core=trace`
    #[arg(long)]
    log_level: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    /// Resolve the effective configuration: flags over file/env over defaults.
    fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => config::load_from_file(Some(path.clone()))
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => config::load_or_default().context("loading configuration")?,
        };

        if let Some(timezone) = &self.timezone {
            config.reconcile.timezone.clone_from(timezone);
        }
        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }

        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    init_tracing(&config.logging)?;

    let reconciler = AppointmentReconciler::new(&config.reconcile)?;
    let feed = Arc::new(JsonFileFeed::new(&cli.input));
    let source = feed.path().display().to_string();
    let service = ReconciliationService::new(feed, reconciler);
    tracing::debug!(
        zone = service.reconciler().zone().name(),
        %source,
        "Starting reconciliation"
    );

    let book = service.run().with_context(|| format!("reconciling {source}"))?;

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&book)?
    } else {
        serde_json::to_string(&book)?
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}")?;

    tracing::debug!(customers = book.len(), "Wrote merged book");
    Ok(())
}
