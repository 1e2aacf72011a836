use std::fmt;

use crate::formatters::html::Escaped;
use crate::view_models::{AvatarViewModel, BioViewModel};

/// Fixed external profile link of the bio paragraph
pub const PROFILE_URL: &str = "https://www.linkedin.com/in/binish-joshi-847551229/";

/// Fixed contact-handle line of the bio paragraph
pub const CONTACT_HANDLE: &str = "binishjoshi";

/// Author-bio fragment.
///
/// Always renders the fixed-size avatar; the biographical paragraph only
/// when the view model carries an author.
pub struct BioView<'a> {
    pub bio: &'a BioViewModel,
}

impl fmt::Display for BioView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<div class=\"bio\">")?;
        write_avatar(f, &self.bio.avatar)?;

        if let Some(author) = &self.bio.author {
            write!(f, "<p>Hi, I'm <strong>{}</strong>", Escaped(&author.name))?;
            if let Some(summary) = &author.summary {
                write!(f, ", a {}", Escaped(summary))?;
            }
            write!(
                f,
                ". Find me on LinkedIn <a href=\"{}\">here</a>.",
                Escaped(PROFILE_URL)
            )?;
            writeln!(f, "<br/>Discord: {}</p>", Escaped(CONTACT_HANDLE))?;
        }

        write!(f, "</div>")
    }
}

fn write_avatar(f: &mut fmt::Formatter<'_>, avatar: &AvatarViewModel) -> fmt::Result {
    writeln!(f, "<picture class=\"bio-avatar\">")?;
    for source in &avatar.sources {
        writeln!(
            f,
            "<source type=\"{}\" srcset=\"{}\">",
            Escaped(&source.mime),
            Escaped(&source.srcset)
        )?;
    }
    writeln!(
        f,
        "<img src=\"{}\" width=\"{}\" height=\"{}\" alt=\"{}\">",
        Escaped(&avatar.src),
        avatar.width,
        avatar.height,
        Escaped(&avatar.alt)
    )?;
    writeln!(f, "</picture>")
}
