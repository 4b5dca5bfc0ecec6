/// End-to-end tests for the `typesleuth` binary.
///
/// Each test builds a small tree with `tempfile`, runs the real binary and
/// checks stdout, stderr and the exit status.
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

fn typesleuth() -> Command {
    Command::cargo_bin("typesleuth").expect("binary not built")
}

fn build_tree(root: &Path) {
    fs::create_dir_all(root.join("img")).unwrap();
    fs::create_dir_all(root.join(".git")).unwrap();
    fs::write(root.join("img/a.png"), PNG).unwrap();
    fs::write(root.join("img/b.gif"), b"GIF87a").unwrap();
    fs::write(root.join(".git/c.png"), PNG).unwrap();
    fs::write(root.join("readme.txt"), b"hello\n").unwrap();
}

#[test]
fn text_report_lists_buckets() {
    let tmp = TempDir::new().unwrap();
    build_tree(tmp.path());

    let png = tmp.path().join("img/a.png");
    let gif = tmp.path().join("img/b.gif");
    let expected = format!(
        "\nPNG: 1 files\n=========================\n  - {}\n\
         \nGIF: 1 files\n=========================\n  - {}\n",
        png.display(),
        gif.display()
    );

    typesleuth()
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn empty_directory_prints_nothing() {
    let tmp = TempDir::new().unwrap();
    typesleuth().arg(tmp.path()).assert().success().stdout("");
}

#[test]
fn csv_report() {
    let tmp = TempDir::new().unwrap();
    build_tree(tmp.path());

    typesleuth()
        .args(["--format", "csv"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("label,path,container\n"))
        .stdout(predicate::str::contains("PNG,"))
        .stdout(predicate::str::contains(".git").not());
}

#[test]
fn json_report_is_valid() {
    let tmp = TempDir::new().unwrap();
    build_tree(tmp.path());

    let output = typesleuth()
        .args(["-f", "json", "-j", "2"])
        .arg(tmp.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.contains("\"label\": \"PNG\""));
    assert!(text.contains("\"scanned_at\""));
}

#[test]
fn missing_root_fails() {
    let tmp = TempDir::new().unwrap();
    typesleuth()
        .arg(tmp.path().join("does-not-exist"))
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Cannot access"));
}

#[test]
fn file_root_fails() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("file.png");
    fs::write(&file, PNG).unwrap();
    typesleuth()
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn list_signatures_in_table_order() {
    typesleuth()
        .arg("--list-signatures")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("MS Word "))
        .stdout(predicate::str::contains("PNG").and(predicate::str::contains("89 50 4E 47")));
}

#[test]
fn custom_signature_file() {
    let tmp = TempDir::new().unwrap();
    let data = tmp.path().join("data");
    fs::create_dir(&data).unwrap();
    fs::write(data.join("x.bin"), b"TSLH\x00\x01").unwrap();
    fs::write(data.join("y.png"), PNG).unwrap();
    let sigs = tmp.path().join("sigs.json");
    fs::write(
        &sigs,
        r#"{"signatures": [{"label": "Sleuth", "magic": "54534C48"}]}"#,
    )
    .unwrap();

    typesleuth()
        .arg("--signatures")
        .arg(&sigs)
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sleuth: 1 files"))
        .stdout(predicate::str::contains("PNG").not());
}

#[test]
fn invalid_signature_file_fails() {
    let tmp = TempDir::new().unwrap();
    let sigs = tmp.path().join("sigs.json");
    fs::write(&sigs, r#"{"signatures": [{"label": "Bad", "magic": "XYZ"}]}"#).unwrap();

    typesleuth()
        .arg("--signatures")
        .arg(&sigs)
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load signatures"));
}
