use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

const CATALOG: &str = r#"{
  "registries": [
    { "slug": "magicui", "title": "Magic UI", "tags": ["ui", "react"],
      "authors": [{ "name": "Dillion" }], "createdAt": "2024-03-01" },
    { "slug": "shadcn", "title": "shadcn/ui", "tags": ["ui", "react", "radix"],
      "createdAt": "2024-05-10T08:00:00Z" },
    { "slug": "aceternity", "title": "Aceternity UI", "tags": ["ui", "motion"] }
  ]
}"#;

fn workspace() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("catalog.json"), CATALOG)
        .expect("write catalog");
    dir
}

fn regdexctl(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("regdexctl");
    cmd.current_dir(dir.path())
        .env_remove("REGDEX_CONFIG_PATH")
        .env_remove("REGDEX_CONFIG_JSON")
        .env("RUST_LOG", "off")
        .arg("--catalog")
        .arg(dir.path().join("catalog.json"));
    cmd
}

#[test]
fn page_help_mentions_filters() {
    let mut cmd = cargo_bin_cmd!("regdexctl");
    let output = cmd
        .arg("page")
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);
    assert!(text.contains("--tag"), "page help missing --tag");
    assert!(text.contains("--preset"), "page help missing --preset");
    assert!(text.contains("--limit"), "page help missing --limit");
}

#[test]
fn top_level_help_lists_commands() {
    let mut cmd = cargo_bin_cmd!("regdexctl");
    let out = cmd.arg("--help").assert().success().get_output().stdout.clone();
    let text = String::from_utf8_lossy(&out);
    let commands = [
        "item",
        "recent",
        "page",
        "search",
        "tags",
        "recommend",
        "preset",
        "ago",
    ];
    for command in commands {
        assert!(text.contains(command), "help missing {command}");
    }
}

#[test]
fn page_filters_by_every_tag() {
    let dir = workspace();
    regdexctl(&dir)
        .args(["page", "--tag", "ui", "--tag", "react"])
        .args(["--limit", "1", "--page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"slug\": \"shadcn\""))
        .stdout(predicate::str::contains("\"totalItems\": 2"))
        .stdout(predicate::str::contains("\"totalPages\": 2"));
}

#[test]
fn invalid_page_is_an_error() {
    let dir = workspace();
    regdexctl(&dir)
        .args(["page", "--page", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive integer"));
}

#[test]
fn missing_item_fails() {
    let dir = workspace();
    regdexctl(&dir)
        .args(["item", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn search_and_tags() {
    let dir = workspace();
    regdexctl(&dir)
        .args(["search", "magic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"slug\": \"magicui\""));

    regdexctl(&dir)
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"radix\""));
}

#[test]
fn recommend_rejects_oversized_requests() {
    let dir = workspace();
    regdexctl(&dir)
        .args(["recommend", "--count", "4"])
        .assert()
        .failure();

    regdexctl(&dir)
        .args(["recommend", "--count", "3", "--seed", "7"])
        .assert()
        .success();
}

#[test]
fn unknown_preset_fails() {
    let mut cmd = cargo_bin_cmd!("regdexctl");
    cmd.args(["preset", "thisWeek"]).assert().failure();
}
