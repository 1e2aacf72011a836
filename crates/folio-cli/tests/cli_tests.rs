use assert_cmd::Command;
use folio_testing::SiteFixture;
use predicates::prelude::*;

fn folio() -> Command {
    Command::cargo_bin("folio").unwrap()
}

fn sample_site() -> SiteFixture {
    let site = SiteFixture::new()
        .unwrap()
        .with_author("Jane", Some("computer science student"))
        .unwrap();
    site.add_project(
        "first-post.md",
        "2023-06-01",
        "https://github.com/x/first",
        Some("First Post"),
        None,
    )
    .unwrap();
    site.add_project(
        "second-post.md",
        "2024-02-10",
        "https://github.com/x/second",
        Some("Second Post"),
        Some("<p>A second project.</p>"),
    )
    .unwrap();
    site
}

#[test]
fn projects_renders_html_in_date_order() {
    let site = sample_site();
    let output = folio()
        .args(["--site-dir", site.root().to_str().unwrap(), "projects"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("<h3>My Projects</h3>"));
    let second = stdout.find("Second Post").unwrap();
    let first = stdout.find("First Post").unwrap();
    assert!(second < first, "newest project should render first");
    assert!(stdout.contains("<p itemprop=\"description\"><p>A second project.</p></p>"));
}

#[test]
fn projects_json_lists_view_models() {
    let site = sample_site();
    let output = folio()
        .args([
            "--site-dir",
            site.root().to_str().unwrap(),
            "--format",
            "json",
            "projects",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["slug"], "second-post");
    assert_eq!(items[0]["date"], "February 10, 2024");
    assert_eq!(items[1]["slug"], "first-post");
}

#[test]
fn bio_renders_author_paragraph() {
    let site = sample_site();
    folio()
        .args(["--site-dir", site.root().to_str().unwrap(), "bio"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<strong>Jane</strong>"))
        .stdout(predicate::str::contains("computer science student"));
}

#[test]
fn bio_without_author_is_avatar_only() {
    let site = SiteFixture::new().unwrap();
    folio()
        .args(["--site-dir", site.root().to_str().unwrap(), "bio"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bio-avatar"))
        .stdout(predicate::str::contains("<p>").not());
}

#[test]
fn page_emits_both_fragments() {
    let site = sample_site();
    folio()
        .args(["--site-dir", site.root().to_str().unwrap(), "page"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<div class=\"projects\">"))
        .stdout(predicate::str::contains("<div class=\"bio\">"));
}

#[test]
fn check_passes_on_clean_site() {
    let site = sample_site();
    folio()
        .args(["--site-dir", site.root().to_str().unwrap(), "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Content OK"));
}

#[test]
fn check_fails_on_duplicate_slugs() {
    let site = sample_site();
    site.add_content(
        "nested/first-post.md",
        "date = \"2024-03-01\"\nsource = \"https://github.com/x/dup\"",
        "Duplicate slug body.",
    )
    .unwrap();

    folio()
        .args(["--site-dir", site.root().to_str().unwrap(), "check"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("duplicate slug"));
}

#[test]
fn check_json_reports_diagnostics() {
    let site = SiteFixture::new().unwrap();
    site.add_project("untitled.md", "2024-01-01", "https://github.com/x/y", None, None)
        .unwrap();

    let output = folio()
        .args([
            "--site-dir",
            site.root().to_str().unwrap(),
            "--format",
            "json",
            "check",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let diagnostics = json.as_array().unwrap();
    assert!(diagnostics.iter().all(|d| d["level"] == "warning"));
    assert!(
        diagnostics
            .iter()
            .any(|d| d["message"].as_str().unwrap().contains("no title"))
    );
}

#[test]
fn unreadable_site_dir_is_an_error() {
    folio()
        .args(["--site-dir", "/nonexistent-folio-site", "bio"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot open site directory"));
}
