use std::io;

use anyhow::Result;
use clap::Parser;

use robot_vacuum::{
    cli::clean_levels,
    configuration::{init_tracing, Config},
};

fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing(&config)?;

    clean_levels(&config, &mut io::stdout().lock())
}
