use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::OutputFormat;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Render static blog widgets from a content directory", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Site root holding site.toml and content/
    #[arg(long, default_value = ".", global = true)]
    pub site_dir: PathBuf,

    #[arg(long, default_value = "html", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the author-bio fragment
    Bio,

    /// Render the project-list fragment
    Projects,

    /// Render both fragments as one page body
    Page,

    /// Check content invariants (slug uniqueness, date ordering, fallbacks)
    Check,
}
