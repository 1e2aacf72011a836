use anyhow::{Context, Result};
use folio_providers::ContentDir;

use super::args::{Cli, Commands};
use super::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let site = ContentDir::open(&cli.site_dir)
        .with_context(|| format!("cannot open site directory {}", cli.site_dir.display()))?;

    match cli.command {
        Commands::Bio => handlers::bio::handle(&site, cli.format),
        Commands::Projects => handlers::projects::handle(&site, cli.format),
        Commands::Page => handlers::page::handle(&site, cli.format),
        Commands::Check => handlers::check::handle(&site, cli.format),
    }
}
