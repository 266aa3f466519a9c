use std::path::PathBuf;

use clap::Parser;
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, prelude::*, registry::Registry, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "robot_vacuum",
    version,
    about = "Counts the tiles a right-turning robot vacuum cleans"
)]
pub struct Config {
    /// Level files to clean. The bundled sample levels run when none are given.
    pub levels: Vec<PathBuf>,
    /// Print every cleaned cell with the heading it was left in
    #[arg(long)]
    pub report: bool,
    /// Log every step the vacuum takes
    #[arg(short, long)]
    pub verbose: bool,
    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub json_logs: bool,
    /// Overrides the log filter, `RUST_LOG` still wins
    #[arg(long)]
    pub log_filter: Option<String>,
}

impl Config {
    pub fn log_filter(&self) -> String {
        match (&self.log_filter, self.verbose) {
            (Some(filter), _) => filter.clone(),
            (None, true) => "warn,robot_vacuum=debug".to_string(),
            (None, false) => "warn,robot_vacuum=info".to_string(),
        }
    }
}

pub fn init_tracing(config: &Config) -> anyhow::Result<()> {
    if LogTracer::init().is_err() {
        // someone already installed a logger
        return Ok(());
    }

    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(config.log_filter()))?;
    let json_layer = config
        .json_logs
        .then(|| fmt::layer().json().with_writer(std::io::stderr));
    let text_layer = (!config.json_logs).then(|| fmt::layer().with_writer(std::io::stderr));

    let subscriber = Registry::default()
        .with(filter_layer)
        .with(json_layer)
        .with(text_layer);
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
