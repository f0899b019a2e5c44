//! End-to-end pastes through the shell strategy with stand-in scripts.
//!
//! The stand-in `linux.sh` speaks the same stdout protocol as the bundled
//! one, so no clipboard or xclip is needed.

#![cfg(all(unix, not(target_os = "macos")))]

use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use crate::helpers::Sandbox;

const SAVES_IMAGE: &str = "printf 'png' > \"$1\"\necho \"$1\"\n";
const NO_IMAGE: &str = "echo 'no image'\nexit 1\n";
const NO_XCLIP: &str = "echo 'no xclip'\nexit 1\n";

/// Sandbox whose config points at a custom `linux.sh`.
fn sandbox_with_script(script: &str) -> Sandbox {
    let sandbox = Sandbox::new();
    let dir = sandbox.path().join("scripts");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("linux.sh"), script).unwrap();
    sandbox.write_config(&format!(
        "[scripts]\ndirectory = {:?}\n",
        dir.display().to_string()
    ));
    sandbox
}

/// Folders created for `base_name`, e.g. `2024-03-01-notes`.
fn image_folders(dir: &Path, base_name: &str) -> Vec<PathBuf> {
    let suffix = format!("-{}", base_name);
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.is_dir())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.len() == 11 + base_name.len() && n.ends_with(&suffix))
                .unwrap_or(false)
        })
        .collect()
}

fn single_image(folder: &Path) -> PathBuf {
    let files: Vec<PathBuf> = fs::read_dir(folder)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(files.len(), 1, "expected one image in {}", folder.display());
    files.into_iter().next().unwrap()
}

#[test]
fn paste_inserts_reference_at_cursor() {
    let sandbox = sandbox_with_script(SAVES_IMAGE);
    let notes = sandbox.write_file("docs/notes.md", "# Notes\nbefore after\n");

    sandbox
        .cmd()
        .args(["paste", "docs/notes.md", "--line", "2", "--column", "8"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Pasted image"));

    let folders = image_folders(&sandbox.path().join("docs"), "notes");
    assert_eq!(folders.len(), 1);
    let image = single_image(&folders[0]);
    assert_eq!(fs::read(&image).unwrap(), b"png");

    let file_name = image.file_name().unwrap().to_str().unwrap();
    let stem = file_name.strip_suffix(".png").unwrap();
    assert_eq!(
        fs::read_to_string(notes).unwrap(),
        format!("# Notes\nbefore ![{}]({})after\n", stem, file_name)
    );
}

#[test]
fn paste_appends_without_position() {
    let sandbox = sandbox_with_script(SAVES_IMAGE);
    let notes = sandbox.write_file("notes.md", "intro\n");

    sandbox.cmd().args(["paste", "notes.md"]).assert().success();

    let contents = fs::read_to_string(notes).unwrap();
    assert!(contents.starts_with("intro\n![") && contents.ends_with(".png)"));
}

#[test]
fn no_image_leaves_document_untouched() {
    let sandbox = sandbox_with_script(NO_IMAGE);
    let notes = sandbox.write_file("notes.md", "unchanged\n");

    sandbox
        .cmd()
        .args(["paste", "notes.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "There is not an image in the clipboard.",
        ));

    assert_eq!(fs::read_to_string(notes).unwrap(), "unchanged\n");
    // The folder is created before the clipboard is read
    assert_eq!(image_folders(sandbox.path(), "notes").len(), 1);
}

#[test]
fn missing_xclip_asks_for_installation() {
    let sandbox = sandbox_with_script(NO_XCLIP);
    let notes = sandbox.write_file("notes.md", "unchanged\n");

    sandbox
        .cmd()
        .args(["paste", "notes.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "You need to install xclip command first.",
        ));

    assert_eq!(fs::read_to_string(notes).unwrap(), "unchanged\n");
}

#[test]
fn print_mode_writes_reference_to_stdout() {
    let sandbox = sandbox_with_script(SAVES_IMAGE);
    let notes = sandbox.write_file("notes.md", "unchanged\n");

    let output = sandbox
        .cmd()
        .args(["paste", "notes.md", "--print"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let reference = stdout.trim_end();
    assert!(reference.starts_with("![") && reference.ends_with(".png)"));
    assert_eq!(fs::read_to_string(notes).unwrap(), "unchanged\n");
}

#[test]
fn json_mode_describes_result() {
    let sandbox = sandbox_with_script(SAVES_IMAGE);
    sandbox.write_file("notes.md", "");

    let output = sandbox
        .cmd()
        .args(["paste", "notes.md", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let file = PathBuf::from(report["file"].as_str().unwrap());
    let folder = PathBuf::from(report["folder"].as_str().unwrap());
    assert_eq!(file.parent(), Some(folder.as_path()));
    assert!(file.exists());
    assert!(report["document"].as_str().unwrap().ends_with("notes.md"));
    assert!(report["markdown"].as_str().unwrap().starts_with("!["));
}

#[test]
fn missing_custom_script_is_an_error() {
    let sandbox = Sandbox::new();
    let empty = sandbox.path().join("empty-scripts");
    fs::create_dir_all(&empty).unwrap();
    sandbox.write_config(&format!(
        "[scripts]\ndirectory = {:?}\n",
        empty.display().to_string()
    ));
    let notes = sandbox.write_file("notes.md", "unchanged\n");

    sandbox
        .cmd()
        .args(["paste", "notes.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("linux.sh"));

    assert_eq!(fs::read_to_string(notes).unwrap(), "unchanged\n");
}
