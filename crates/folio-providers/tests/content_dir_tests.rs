use std::fs;
use std::path::Path;

use folio_providers::{ContentDir, DiagnosticLevel, SiteData, verify};

fn write_site_meta(root: &Path, toml: &str) {
    fs::write(root.join("site.toml"), toml).unwrap();
}

fn write_post(root: &Path, name: &str, frontmatter: &str, body: &str) {
    let content_dir = root.join("content");
    fs::create_dir_all(&content_dir).unwrap();
    let text = format!("+++\n{}+++\n\n{}\n", frontmatter, body);
    fs::write(content_dir.join(name), text).unwrap();
}

#[test]
fn author_comes_from_site_toml() {
    let dir = tempfile::tempdir().unwrap();
    write_site_meta(
        dir.path(),
        "[author]\nname = \"Jane\"\nsummary = \"computer science student\"\n",
    );

    let site = ContentDir::open(dir.path()).unwrap();
    let author = site.author().unwrap().unwrap();
    assert_eq!(author.name, "Jane");
    assert_eq!(author.summary.as_deref(), Some("computer science student"));
    assert!(author.school.is_none());
}

#[test]
fn author_absent_without_site_toml() {
    let dir = tempfile::tempdir().unwrap();
    let site = ContentDir::open(dir.path()).unwrap();
    assert!(site.author().unwrap().is_none());
}

#[test]
fn projects_sorted_date_descending() {
    let dir = tempfile::tempdir().unwrap();
    write_post(
        dir.path(),
        "old.md",
        "title = \"Old\"\ndate = \"2022-05-01\"\nsource = \"https://github.com/x/old\"\n",
        "Old body.",
    );
    write_post(
        dir.path(),
        "new.md",
        "title = \"New\"\ndate = \"2024-01-01\"\nsource = \"https://github.com/x/new\"\n",
        "New body.",
    );
    write_post(
        dir.path(),
        "mid.md",
        "title = \"Mid\"\ndate = \"2023-07-15\"\nsource = \"https://github.com/x/mid\"\n",
        "Mid body.",
    );

    let site = ContentDir::open(dir.path()).unwrap();
    let projects = site.projects().unwrap();
    let slugs: Vec<&str> = projects.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["new", "mid", "old"]);
    assert_eq!(projects[0].date, "January 01, 2024");
}

#[test]
fn projects_filtered_to_sourced_records() {
    let dir = tempfile::tempdir().unwrap();
    write_post(
        dir.path(),
        "with-source.md",
        "date = \"2024-01-01\"\nsource = \"https://github.com/x/y\"\n",
        "Body.",
    );
    write_post(dir.path(), "no-source.md", "date = \"2024-01-02\"\n", "Body.");
    write_post(
        dir.path(),
        "blank-source.md",
        "date = \"2024-01-03\"\nsource = \"\"\n",
        "Body.",
    );

    let site = ContentDir::open(dir.path()).unwrap();
    let projects = site.projects().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].slug.as_str(), "with-source");
}

#[test]
fn record_fields_and_fallback_inputs() {
    let dir = tempfile::tempdir().unwrap();
    write_post(
        dir.path(),
        "My Project.md",
        "date = \"2024-01-01\"\nsource = \"https://github.com/x/y\"\ndescription = \"<p>A <em>rich</em> blurb</p>\"\n",
        "First paragraph of the body.\n\nSecond paragraph.",
    );

    let site = ContentDir::open(dir.path()).unwrap();
    let projects = site.projects().unwrap();
    let record = &projects[0];
    assert_eq!(record.slug.as_str(), "my-project");
    assert!(record.title.is_none());
    assert_eq!(record.source_url, "https://github.com/x/y");
    assert_eq!(
        record.description.as_ref().unwrap().as_str(),
        "<p>A <em>rich</em> blurb</p>"
    );
    assert_eq!(record.excerpt, "First paragraph of the body.");
    assert_eq!(record.id.len(), 64);
}

#[test]
fn malformed_file_is_skipped_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write_post(
        dir.path(),
        "good.md",
        "date = \"2024-01-01\"\nsource = \"https://github.com/x/y\"\n",
        "Body.",
    );
    let content_dir = dir.path().join("content");
    fs::write(content_dir.join("broken.md"), "no frontmatter at all").unwrap();

    let site = ContentDir::open(dir.path()).unwrap();
    let projects = site.projects().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].slug.as_str(), "good");
}

#[test]
fn verify_flags_duplicate_slugs() {
    let dir = tempfile::tempdir().unwrap();
    write_post(
        dir.path(),
        "post.md",
        "title = \"A\"\ndate = \"2024-01-01\"\nsource = \"https://github.com/x/a\"\n",
        "Body.",
    );
    let nested = dir.path().join("content").join("nested");
    fs::create_dir_all(&nested).unwrap();
    fs::write(
        nested.join("post.md"),
        "+++\ntitle = \"B\"\ndate = \"2024-01-02\"\nsource = \"https://github.com/x/b\"\n+++\nBody.\n",
    )
    .unwrap();
    write_site_meta(dir.path(), "[author]\nname = \"Jane\"\n");

    let site = ContentDir::open(dir.path()).unwrap();
    let diagnostics = verify(&site).unwrap();
    assert!(diagnostics.iter().any(|d| {
        d.level == DiagnosticLevel::Error && d.message.contains("duplicate slug")
    }));
}

#[test]
fn verify_clean_site_has_no_errors() {
    let dir = tempfile::tempdir().unwrap();
    write_site_meta(dir.path(), "[author]\nname = \"Jane\"\n");
    write_post(
        dir.path(),
        "post-a.md",
        "title = \"Post A\"\ndate = \"2024-01-01\"\nsource = \"https://github.com/x/a\"\n",
        "Body.",
    );

    let site = ContentDir::open(dir.path()).unwrap();
    let diagnostics = verify(&site).unwrap();
    assert!(
        diagnostics
            .iter()
            .all(|d| d.level != DiagnosticLevel::Error),
        "unexpected errors: {:?}",
        diagnostics
    );
}

#[test]
fn verify_warns_on_missing_author() {
    let dir = tempfile::tempdir().unwrap();
    write_post(
        dir.path(),
        "post-a.md",
        "title = \"Post A\"\ndate = \"2024-01-01\"\nsource = \"https://github.com/x/a\"\n",
        "Body.",
    );

    let site = ContentDir::open(dir.path()).unwrap();
    let diagnostics = verify(&site).unwrap();
    assert!(diagnostics.iter().any(|d| {
        d.level == DiagnosticLevel::Warning && d.message.contains("avatar only")
    }));
}
