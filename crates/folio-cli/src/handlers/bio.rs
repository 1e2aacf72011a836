use anyhow::Result;
use folio_providers::{ContentDir, SiteData};
use folio_render::{AvatarAsset, BioView, present_bio};

use crate::types::OutputFormat;

pub fn handle(site: &ContentDir, format: OutputFormat) -> Result<()> {
    let author = site.author()?;
    let avatar = AvatarAsset::new(site.root()).resolve();
    let bio = present_bio(author.as_ref(), avatar);

    match format {
        OutputFormat::Html => println!("{}", BioView { bio: &bio }),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&bio)?),
    }
    Ok(())
}
