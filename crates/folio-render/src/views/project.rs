use std::fmt;

use crate::formatters::html::Escaped;
use crate::view_models::{ProjectBodyViewModel, ProjectItemViewModel, ProjectListViewModel};

/// Project-list fragment: one `<li>` per item, input order, slug as the
/// list key. Schema.org Article microdata mirrors the original markup.
pub struct ProjectListView<'a> {
    pub list: &'a ProjectListViewModel,
}

impl fmt::Display for ProjectListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<div class=\"projects\">")?;
        writeln!(f, "<h3>My Projects</h3>")?;
        writeln!(f, "<ol style=\"list-style: none\">")?;
        for item in &self.list.items {
            write_item(f, item)?;
        }
        writeln!(f, "</ol>")?;
        write!(f, "</div>")
    }
}

fn write_item(f: &mut fmt::Formatter<'_>, item: &ProjectItemViewModel) -> fmt::Result {
    writeln!(f, "<li data-key=\"{}\">", Escaped(&item.slug))?;
    writeln!(
        f,
        "<article class=\"project-list-item\" itemscope itemtype=\"http://schema.org/Article\">"
    )?;

    writeln!(f, "<header>")?;
    writeln!(
        f,
        "<h2><a href=\"{}\" itemprop=\"url\"><span itemprop=\"headline\">{}</span></a></h2>",
        Escaped(&item.href),
        Escaped(&item.title)
    )?;
    writeln!(f, "<small>{}</small>", Escaped(&item.date))?;
    writeln!(f, "</header>")?;

    writeln!(f, "<section>")?;
    writeln!(
        f,
        "<strong>Source: <a href=\"{}\">{}</a></strong>",
        Escaped(&item.source_url),
        Escaped(&item.source_url)
    )?;
    match &item.body {
        // Trusted HTML passes through verbatim; plain text is escaped
        ProjectBodyViewModel::Html { html } => {
            writeln!(f, "<p itemprop=\"description\">{}</p>", html)?;
        }
        ProjectBodyViewModel::Text { text } => {
            writeln!(f, "<p itemprop=\"description\">{}</p>", Escaped(text))?;
        }
    }
    writeln!(f, "</section>")?;

    writeln!(f, "</article>")?;
    writeln!(f, "</li>")
}
