//! Level loading and reporting behind the `robot_vacuum` binary.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

use crate::{
    configuration::Config,
    levels,
    vacuum::{Cleaner, Grid},
};

/// Levels named on the command line, or the bundled ones when none are.
pub fn load_levels(config: &Config) -> Result<Vec<(String, Grid)>> {
    if config.levels.is_empty() {
        return levels::bundled().context("parse bundled levels");
    }

    config
        .levels
        .iter()
        .map(|path| {
            let grid = Grid::from_file(path)
                .with_context(|| format!("load level {}", path.display()))?;
            debug!("loaded {}", path.display());
            Ok::<_, anyhow::Error>((path.display().to_string(), grid))
        })
        .collect()
}

/// Cleans every level and writes one `<name> -> <cleaned>` line each.
/// The first level that cannot be cleaned aborts the run.
pub fn clean_levels(config: &Config, out: &mut impl Write) -> Result<()> {
    for (name, grid) in load_levels(config)? {
        let report = Cleaner::new(&grid)
            .run()
            .with_context(|| format!("clean {}", name))?;

        writeln!(out, "{} -> {}", name, report.cleaned)?;
        if config.report {
            for (position, heading) in &report.visits {
                writeln!(out, "    {}: {}", position, heading)?;
            }
        }
    }

    Ok(())
}
