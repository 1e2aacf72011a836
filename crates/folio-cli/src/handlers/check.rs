use anyhow::Result;
use folio_providers::{ContentDir, Diagnostic, DiagnosticLevel, verify};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

use crate::types::OutputFormat;

pub fn handle(site: &ContentDir, format: OutputFormat) -> Result<()> {
    let diagnostics = verify(site)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&diagnostics)?),
        OutputFormat::Html => print_report(&diagnostics),
    }

    let errors = diagnostics
        .iter()
        .filter(|d| d.level == DiagnosticLevel::Error)
        .count();
    if errors > 0 {
        anyhow::bail!("{} content error(s)", errors);
    }
    Ok(())
}

fn print_report(diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        println!("Content OK: no findings");
        return;
    }

    let color = std::io::stdout().is_terminal();
    for diagnostic in diagnostics {
        if color {
            match diagnostic.level {
                DiagnosticLevel::Error => {
                    println!("{} {}", "error:".red().bold(), diagnostic.message)
                }
                DiagnosticLevel::Warning => {
                    println!("{} {}", "warning:".yellow(), diagnostic.message)
                }
            }
        } else {
            println!("{}: {}", diagnostic.level, diagnostic.message);
        }
    }
}
