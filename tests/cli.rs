//! Integration tests for the graphdefang-gallery CLI.
//!
//! These tests run the actual binary against temporary graph directories
//! to verify end-to-end behavior.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the gallery command
fn gallery() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("graphdefang-gallery").unwrap();
    cmd.env_remove("GRAPHDEFANG_OUTPUT_DIR");
    cmd
}

/// Creates a graph directory the way the grapher leaves it
fn setup_graphs() -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in [
        "spam_hourly_summary.png",
        "spam_daily_summary.png",
        "virus_hourly_summary.png",
        "virus_monthly_summary.png",
        "index.php",
        ".index.php.swp",
    ] {
        fs::write(dir.path().join(name), b"fake png data").unwrap();
    }
    dir
}

#[test]
fn list_defaults_to_hourly() {
    let graphs = setup_graphs();

    gallery()
        .arg("list")
        .arg("--dir")
        .arg(graphs.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("spam_hourly_summary.png\t_summary.png"))
        .stdout(predicate::str::contains("virus_hourly_summary.png\t_summary.png"))
        .stdout(predicate::str::contains("daily").not())
        .stdout(predicate::str::contains("2 graphs"));
}

#[test]
fn list_named_view() {
    let graphs = setup_graphs();

    gallery()
        .args(["list", "--view", "monthly", "--dir"])
        .arg(graphs.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("virus_monthly_summary.png"))
        .stdout(predicate::str::contains("1 graphs"));
}

#[test]
fn list_suffix_view_spans_periods() {
    let graphs = setup_graphs();

    gallery()
        .args(["list", "--view", "_summary.png", "--dir"])
        .arg(graphs.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("4 graphs"));
}

#[test]
fn list_never_shows_excluded_names() {
    let graphs = setup_graphs();

    gallery()
        .args(["list", "--view", "index", "--dir"])
        .arg(graphs.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("0 graphs"));
}

#[test]
fn list_reads_dir_from_env() {
    let graphs = setup_graphs();

    gallery()
        .arg("list")
        .env("GRAPHDEFANG_OUTPUT_DIR", graphs.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2 graphs"));
}

#[test]
fn list_missing_directory_fails() {
    let dir = TempDir::new().unwrap();

    gallery()
        .arg("list")
        .arg("--dir")
        .arg(dir.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Output directory unavailable"));
}

#[test]
fn dir_is_required() {
    gallery()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--dir"));
}

#[test]
fn render_prints_page() {
    let graphs = setup_graphs();

    gallery()
        .args(["render", "--view", "daily", "--dir"])
        .arg(graphs.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("<title>GraphDefang</title>"))
        .stdout(predicate::str::contains(r#"alt="spam_daily_summary.png""#))
        .stdout(predicate::str::contains(r#"href="index.php?view=_summary.png""#))
        .stdout(predicate::str::contains("hourly_summary.png").not());
}

#[test]
fn render_writes_output_file() {
    let graphs = setup_graphs();
    let out = TempDir::new().unwrap();
    let page = out.path().join("index.html");

    gallery()
        .arg("render")
        .arg("--dir")
        .arg(graphs.path())
        .arg("--output")
        .arg(&page)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let html = fs::read_to_string(&page).unwrap();
    assert!(html.contains(r#"alt="spam_hourly_summary.png""#));
    assert!(!html.contains(".index.php.swp"));
}

#[test]
fn serve_missing_directory_fails_at_startup() {
    let dir = TempDir::new().unwrap();

    gallery()
        .arg("serve")
        .arg("--dir")
        .arg(dir.path().join("missing"))
        .args(["--bind", "127.0.0.1", "--port", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot serve"));
}

#[test]
fn render_links_to_named_page() {
    let graphs = setup_graphs();

    gallery()
        .args(["render", "--page", "graphs.cgi", "--dir"])
        .arg(graphs.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"href="graphs.cgi?view=_summary.png""#))
        .stdout(predicate::str::contains(r#"href="graphs.cgi?view=daily""#))
        .stdout(predicate::str::contains("index.php").not());
}
