use anyhow::Result;
use folio_providers::{ContentDir, SiteData};
use folio_render::{AvatarAsset, BioView, ProjectListView, present_bio, present_projects};

use crate::types::OutputFormat;

/// Both fragments as one page body: project list first, bio underneath,
/// matching the original index page.
pub fn handle(site: &ContentDir, format: OutputFormat) -> Result<()> {
    let records = site.projects()?;
    let list = present_projects(&records);

    let author = site.author()?;
    let avatar = AvatarAsset::new(site.root()).resolve();
    let bio = present_bio(author.as_ref(), avatar);

    match format {
        OutputFormat::Html => {
            println!("{}", ProjectListView { list: &list });
            println!("{}", BioView { bio: &bio });
        }
        OutputFormat::Json => {
            let page = serde_json::json!({
                "projects": list,
                "bio": bio,
            });
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
    }
    Ok(())
}
