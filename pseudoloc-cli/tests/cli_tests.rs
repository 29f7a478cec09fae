#![allow(deprecated)] // assert_cmd::Command::cargo_bin is deprecated but replacement requires nightly

use indoc::indoc;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

const STRINGS_RESX: &str = indoc! {r#"
    <?xml version="1.0" encoding="utf-8"?>
    <root>
      <data name="Save" xml:space="preserve">
        <value>Save</value>
      </data>
      <data name="Empty" xml:space="preserve">
        <value></value>
      </data>
      <data name="&gt;&gt;Save.Name" xml:space="preserve">
        <value>saveButton</value>
      </data>
    </root>
"#};

fn pseudoloc_cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("pseudoloc").unwrap()
}

fn write_aged(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
    fs::File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(SystemTime::now() - Duration::from_secs(60))
        .unwrap();
}

#[test]
fn test_help_flag() {
    pseudoloc_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pseudo-localized"));
}

#[test]
fn test_no_args_shows_help() {
    pseudoloc_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_preview_prints_pseudo_text() {
    pseudoloc_cmd()
        .args(["preview", "Save", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Ŝävę !!! !!! !!!]"))
        .stdout(predicate::str::contains("[ !!! !!!]"))
        .stdout(predicate::str::contains("width 4 → 18 (+350%)"));
}

#[test]
fn test_translate_single_file() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("Strings.resx");
    let destination = dir.path().join("Strings.ja-JP.resx");
    write_aged(&source, STRINGS_RESX);

    pseudoloc_cmd()
        .current_dir(dir.path())
        .args(["translate", source.to_str().unwrap(), destination.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("converted 1 text resource(s)."));

    let written = fs::read_to_string(&destination).unwrap();
    assert!(written.contains("<value>[Ŝävę !!! !!! !!!]</value>"));
    assert!(!written.contains("Empty"));
    assert!(!written.contains("saveButton"));
}

#[test]
fn test_translate_legacy_blank_switch() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("Strings.resx");
    let destination = dir.path().join("Strings.fr.resx");
    write_aged(&source, STRINGS_RESX);

    pseudoloc_cmd()
        .current_dir(dir.path())
        .args(["translate", source.to_str().unwrap(), destination.to_str().unwrap(), "/b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("converted 2 text resource(s)."));

    let written = fs::read_to_string(&destination).unwrap();
    assert!(written.contains("<data name=\"Empty\" xml:space=\"preserve\">"));
    assert!(written.contains("<value>[ !!! !!!]</value>"));
}

#[test]
fn test_translate_directory_recursively() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("Forms")).unwrap();
    write_aged(&root.join("Strings.resx"), STRINGS_RESX);
    write_aged(&root.join("Strings.de.resx"), STRINGS_RESX);
    write_aged(&root.join("Forms/Main.resx"), STRINGS_RESX);

    pseudoloc_cmd()
        .current_dir(root)
        .args(["translate", root.to_str().unwrap(), "ja-JP"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 converted"));

    assert!(root.join("Strings.ja-JP.resx").exists());
    assert!(root.join("Forms/Main.ja-JP.resx").exists());
    assert!(!root.join("Strings.de.ja-JP.resx").exists());

    // A second run finds every destination up to date.
    pseudoloc_cmd()
        .current_dir(root)
        .args(["translate", root.to_str().unwrap(), "ja-JP"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 converted"))
        .stdout(predicate::str::contains("2 up to date"));
}

#[test]
fn test_unparseable_file_is_a_warning() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write_aged(&root.join("Broken.resx"), "<root><data name=\"x\">");
    write_aged(&root.join("Strings.resx"), STRINGS_RESX);

    pseudoloc_cmd()
        .current_dir(root)
        .args(["translate", root.to_str().unwrap(), "fr-FR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 converted"))
        .stdout(predicate::str::contains("1 unparseable"))
        .stderr(predicate::str::contains("could not parse"));

    assert!(!root.join("Broken.fr-FR.resx").exists());
}

#[test]
fn test_locked_destination_fails_the_run() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("Strings.resx");
    let destination = dir.path().join("Strings.fr.resx");
    fs::create_dir(&destination).unwrap();
    fs::File::open(&destination)
        .unwrap()
        .set_modified(SystemTime::now() - Duration::from_secs(60))
        .unwrap();
    fs::write(&source, STRINGS_RESX).unwrap();

    pseudoloc_cmd()
        .current_dir(dir.path())
        .args([
            "translate",
            source.to_str().unwrap(),
            destination.to_str().unwrap(),
            "--lock-retry-ms",
            "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is still locked"));
}

#[test]
fn test_config_file_enables_blank_values() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("app.json");
    let destination = dir.path().join("app.fr.json");
    write_aged(&source, r#"{ "title": "Hi", "blank": "", "count": 2 }"#);
    fs::write(dir.path().join("pseudoloc.toml"), "include-blank = true\n").unwrap();

    pseudoloc_cmd()
        .current_dir(dir.path())
        .args(["translate", "app.json", "app.fr.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("converted 2 text resource(s)."));

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&destination).unwrap()).unwrap();
    assert_eq!(written["blank"], "[ !!! !!!]");
    assert!(written.get("count").is_none());
}

#[test]
fn test_bad_config_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pseudoloc.toml"), "include-blank = \"maybe\"\n").unwrap();

    pseudoloc_cmd()
        .current_dir(dir.path())
        .args(["translate", "a.resx", "b.resx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}
