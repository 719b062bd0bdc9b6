//! End-to-end tests for the tw CLI commands.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const TAKE_KEY: &str = "- Moved object: <Key> now is in <Inventory>
- Blocked passages now available: None
- Your location changed: None
#You pick up the golden key.#
";

fn tw() -> Command {
    let mut cmd = Command::cargo_bin("tw").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

// ---------------------------------------------------------------------------
// worlds
// ---------------------------------------------------------------------------

#[test]
fn worlds_lists_bundled_worlds() {
    tw().arg("worlds").assert().success().stdout(
        predicate::str::contains("Garden, cabin and mansion")
            .and(predicate::str::contains("Locked cellar")),
    );
}

// ---------------------------------------------------------------------------
// render
// ---------------------------------------------------------------------------

#[test]
fn render_shows_state_with_details() {
    tw().args(["render", "--world", "2"])
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("You are in <Cellar>\n")
                .and(predicate::str::contains(
                    "From <Cellar> there are blocked passages to: <Kitchen> blocked by <Lock>",
                ))
                .and(predicate::str::contains("Here is a description of each component.")),
        );
}

#[test]
fn render_brief_omits_details() {
    tw().args(["render", "-w", "1", "--brief"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("You are in <Garden>")
                .and(predicate::str::contains("Here is a description").not()),
        );
}

#[test]
fn render_unknown_world_fails() {
    tw().args(["render", "--world", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown world: 9"));
}

// ---------------------------------------------------------------------------
// apply
// ---------------------------------------------------------------------------

#[test]
fn apply_reports_changes_and_new_state() {
    let dir = TempDir::new().unwrap();
    let update = write(&dir, "update.txt", TAKE_KEY);

    tw().args(["apply", "--world", "2"])
        .arg(&update)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("+ took <Key>")
                .and(predicate::str::contains("You pick up the golden key."))
                .and(predicate::str::contains(
                    "You have the following items in your inventory: <Apple>, <Key>",
                )),
        );
}

#[test]
fn apply_skips_unknown_names() {
    let dir = TempDir::new().unwrap();
    let update = write(
        &dir,
        "update.txt",
        "- Moved object: <Unicorn> now is in <Inventory>, <Note> now is in <Inventory>\n\
         - Blocked passages now available: None\n\
         - Your location changed: None\n",
    );

    tw().args(["apply", "--world", "2"])
        .arg(&update)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("! unknown item <Unicorn>")
                .and(predicate::str::contains("+ took <Note>")),
        );
}

#[test]
fn apply_json_output() {
    let dir = TempDir::new().unwrap();
    let update = write(&dir, "update.txt", TAKE_KEY);

    let output = tw()
        .args(["apply", "--world", "2", "--json"])
        .arg(&update)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["report"]["applied"][0]["change"], "taken");
    assert_eq!(json["report"]["applied"][0]["item"], "Key");
    assert_eq!(json["report"]["narration"], "You pick up the golden key.");
    assert!(json["state"].as_str().unwrap().contains("<Apple>, <Key>"));
}

#[test]
fn apply_missing_file_fails() {
    tw().args(["apply", "--world", "1", "/nonexistent/update.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

// ---------------------------------------------------------------------------
// prompt
// ---------------------------------------------------------------------------

#[test]
fn prompt_embeds_state_and_input() {
    tw().args(["prompt", "--world", "2", "open the lock with the key"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("You are in <Cellar>")
                .and(predicate::str::contains("\"open the lock with the key\""))
                .and(predicate::str::contains("Your location changed: <new_location>")),
        );
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_with_script_applies_turns() {
    let dir = TempDir::new().unwrap();
    let script = write(
        &dir,
        "script.txt",
        &format!("A damp cellar with a locked door.\n---\n{TAKE_KEY}"),
    );
    let transcript = dir.path().join("transcript.md");

    tw().args(["play", "--world", "2", "--script"])
        .arg(&script)
        .arg("--transcript")
        .arg(&transcript)
        .write_stdin("take the key\nq\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("A damp cellar with a locked door.")
                .and(predicate::str::contains("+ took <Key>"))
                .and(predicate::str::contains("Goodbye!")),
        );

    let md = fs::read_to_string(&transcript).unwrap();
    assert!(md.contains("## Cellar"));
    assert!(md.contains("**> take the key**"));
    assert!(md.contains("- took <Key>"));
}

#[test]
fn play_survives_exhausted_script() {
    let dir = TempDir::new().unwrap();
    let script = write(&dir, "script.txt", "");

    tw().args(["play", "--world", "1", "--no-narration", "--script"])
        .arg(&script)
        .write_stdin("sing a song\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("the script has no more responses")
                .and(predicate::str::contains("Goodbye!")),
        );
}

#[test]
fn play_caps_transcript_length() {
    let dir = TempDir::new().unwrap();
    let script = write(
        &dir,
        "script.txt",
        &format!("A damp cellar with a locked door.\n---\n{TAKE_KEY}"),
    );
    let transcript = dir.path().join("transcript.md");

    tw().args(["play", "--world", "2", "--max-transcript", "1", "--script"])
        .arg(&script)
        .arg("--transcript")
        .arg(&transcript)
        .write_stdin("take the key\nq\n")
        .assert()
        .success();

    let md = fs::read_to_string(&transcript).unwrap();
    assert!(md.contains("**> take the key**"));
    assert!(!md.contains("## Cellar"));
}
