use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

fn tv(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tv").unwrap();
    cmd.env("TVNOTES_CONFIG_DIR", temp_dir.path().join("config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--notes-dir")
        .arg(notes_dir(temp_dir));
    cmd
}

fn notes_dir(temp_dir: &TempDir) -> std::path::PathBuf {
    temp_dir.path().join("notes")
}

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

#[test]
fn empty_notebook_lists_nothing() {
    let temp_dir = tempfile::tempdir().unwrap();

    tv(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found."));
    assert!(notes_dir(&temp_dir).is_dir());
}

#[test]
fn new_then_list() {
    let temp_dir = tempfile::tempdir().unwrap();

    tv(&temp_dir)
        .args(["new", "proj/first", "idea"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note created: proj/first idea"));
    assert!(notes_dir(&temp_dir).join("proj").join("first idea.txt").is_file());

    tv(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. proj/first idea"));
}

#[test]
fn duplicate_note_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    tv(&temp_dir).args(["new", "once"]).assert().success();
    tv(&temp_dir)
        .args(["new", "once"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:").and(predicate::str::contains("once")));
}

#[test]
fn list_filters_by_contents() {
    let temp_dir = tempfile::tempdir().unwrap();
    let root = notes_dir(&temp_dir);
    write(&root, "groceries.txt", "milk and eggs");
    write(&root, "work/standup.md", "talk about the release");

    tv(&temp_dir)
        .args(["ls", "release"])
        .assert()
        .success()
        .stdout(predicate::str::contains("work/standup"))
        .stdout(predicate::str::contains("groceries").not());
}

#[test]
fn path_and_rm_by_title() {
    let temp_dir = tempfile::tempdir().unwrap();
    let root = notes_dir(&temp_dir);
    write(&root, "todo.txt", "");

    let expected = root.join("todo.txt");
    tv(&temp_dir)
        .args(["path", "todo"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.display().to_string()));

    tv(&temp_dir)
        .args(["rm", "todo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note deleted: todo"));
    assert!(!expected.exists());

    tv(&temp_dir)
        .args(["rm", "todo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No note matches todo"));
}

#[cfg(unix)]
#[test]
fn open_creates_and_reuses() {
    let temp_dir = tempfile::tempdir().unwrap();
    let root = notes_dir(&temp_dir);

    tv(&temp_dir)
        .env("EDITOR", "true")
        .args(["open", "journal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note created: journal"));
    assert!(root.join("journal.txt").is_file());

    tv(&temp_dir)
        .env("EDITOR", "true")
        .args(["open", "jour"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Opening journal"));
}

#[cfg(unix)]
#[test]
fn failing_editor_is_an_error() {
    let temp_dir = tempfile::tempdir().unwrap();

    tv(&temp_dir)
        .env("EDITOR", "false")
        .args(["open", "anything"])
        .assert()
        .failure();
}

#[test]
fn config_set_and_get() {
    let temp_dir = tempfile::tempdir().unwrap();

    tv(&temp_dir)
        .args(["config", "extension", "md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("extension set to .md"));

    tv(&temp_dir)
        .args(["config", "extension"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".md"));

    tv(&temp_dir).args(["new", "fresh"]).assert().success();
    assert!(notes_dir(&temp_dir).join("fresh.md").is_file());
}

#[test]
fn filtered_listing_numbers_select_the_listed_note() {
    let temp_dir = tempfile::tempdir().unwrap();
    let root = notes_dir(&temp_dir);
    write(&root, "recipes pasta.txt", "");
    write(&root, "tax return.txt", "");
    let pasta = std::fs::OpenOptions::new()
        .write(true)
        .open(root.join("recipes pasta.txt"))
        .unwrap();
    pasta
        .set_modified(SystemTime::now() - Duration::from_secs(500))
        .unwrap();

    tv(&temp_dir)
        .args(["ls", "pasta"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2. recipes pasta"));

    tv(&temp_dir)
        .args(["rm", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note deleted: recipes pasta"));
    assert!(!root.join("recipes pasta.txt").exists());
    assert!(root.join("tax return.txt").exists());
}

#[cfg(target_os = "linux")]
#[test]
fn scan_problems_are_reported_as_warnings() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp_dir = tempfile::tempdir().unwrap();
    let root = notes_dir(&temp_dir);
    write(&root, "fine.txt", "");
    std::fs::write(root.join(OsStr::from_bytes(b"bad\xffname.txt")), "").unwrap();

    tv(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. fine"))
        .stderr(predicate::str::contains("1 problem while reading the notebook:"))
        .stderr(predicate::str::contains("Could not decode filename"));
}
