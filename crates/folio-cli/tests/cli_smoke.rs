//! Runs the `folio` binary against a small catalog file.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const CATALOG: &str = r#"{
  "books": [
    {"id": "b0", "title": "Volume 0", "image": "https://covers.invalid/0.jpg", "author": "A2",
     "description": "Description 0", "published": "1910-01-01T00:00:00.000Z", "genres": ["G1"]},
    {"id": "b1", "title": "Volume 1", "image": "https://covers.invalid/1.jpg", "author": "A1",
     "description": "Description 1", "published": "1920-01-01T00:00:00.000Z", "genres": ["G2"]},
    {"id": "b2", "title": "Volume 2", "image": "https://covers.invalid/2.jpg", "author": "A2",
     "description": "Description 2", "published": "1930-01-01T00:00:00.000Z", "genres": ["G1"]},
    {"id": "b3", "title": "Volume 3", "image": "https://covers.invalid/3.jpg", "author": "A1",
     "description": "Description 3", "published": "1940-01-01T00:00:00.000Z", "genres": ["G2"]},
    {"id": "b4", "title": "Volume 4", "image": "https://covers.invalid/4.jpg", "author": "A2",
     "description": "Description 4", "published": "1950-01-01T00:00:00.000Z", "genres": ["G1"]}
  ],
  "authors": {"A1": "First Author", "A2": "Second Author"},
  "genres": {"G1": "Drama", "G2": "Poetry"}
}"#;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("catalog.json"), CATALOG).unwrap();
        std::fs::write(dir.path().join("config.toml"), "page_size = 2\n").unwrap();
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn folio(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_folio"))
            .env("FOLIO_DIR", self.path())
            .env("RUST_LOG", "off")
            .arg("--data")
            .arg(self.path().join("catalog.json"))
            .args(args)
            .output()
            .unwrap()
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn list_renders_requested_pages() {
    let fixture = Fixture::new();

    let output = fixture.folio(&["list", "--format", "plain"]);
    assert!(output.status.success());
    let ids: Vec<String> = stdout(&output)
        .lines()
        .map(|line| line.split('\t').next().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["b0", "b1"]);

    let output = fixture.folio(&["list", "--page", "2", "--format", "json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["books"].as_array().unwrap().len(), 4);
    assert_eq!(value["remaining"], 1);
    assert_eq!(value["page"], 2);
}

#[test]
fn list_filters_by_author() {
    let fixture = Fixture::new();
    let output = fixture.folio(&["list", "--author", "A1", "--format", "json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["matches"], 2);
    assert_eq!(value["remaining"], 0);
    assert_eq!(value["books"][1]["id"], "b3");
}

#[test]
fn show_prints_detail() {
    let fixture = Fixture::new();
    let output = fixture.folio(&["show", "b3", "--format", "plain"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("Volume 3\nFirst Author (1940)\n"));
    assert!(text.contains("Description 3"));
}

#[test]
fn show_unknown_id_fails() {
    let fixture = Fixture::new();
    let output = fixture.folio(&["show", "missing"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing"));
}

#[test]
fn authors_lists_wildcard_first() {
    let fixture = Fixture::new();
    let output = fixture.folio(&["authors"]);
    assert_eq!(
        stdout(&output),
        "any\tAll Authors\nA1\tFirst Author\nA2\tSecond Author\n"
    );
}

#[test]
fn missing_explicit_config_is_reported() {
    let fixture = Fixture::new();
    let missing = fixture.path().join("typo.toml");
    let output = fixture.folio(&["--config", missing.to_str().unwrap(), "authors"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("typo.toml"));

    let present = fixture.path().join("config.toml");
    let output = fixture.folio(&["--config", present.to_str().unwrap(), "authors"]);
    assert!(output.status.success());
}
