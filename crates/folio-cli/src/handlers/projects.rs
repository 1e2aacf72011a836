use anyhow::Result;
use folio_providers::{ContentDir, SiteData};
use folio_render::{ProjectListView, present_projects};

use crate::types::OutputFormat;

pub fn handle(site: &ContentDir, format: OutputFormat) -> Result<()> {
    let records = site.projects()?;
    let list = present_projects(&records);

    match format {
        OutputFormat::Html => println!("{}", ProjectListView { list: &list }),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&list)?),
    }
    Ok(())
}
