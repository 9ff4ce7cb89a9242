use std::fs;
use std::io::{Cursor, Write};
use std::process::Command;

use assert_cmd::prelude::*;
use flate2::Compression;
use flate2::write::GzEncoder;
use predicates::prelude::*;
use tempfile::tempdir;
use zip::write::SimpleFileOptions;

fn write_zip(path: &std::path::Path, name: &str, data: &[u8]) {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer.start_file(name, SimpleFileOptions::default()).unwrap();
    writer.write_all(data).unwrap();
    fs::write(path, writer.finish().unwrap().into_inner()).unwrap();
}

fn write_tgz(path: &std::path::Path, name: &str, data: &[u8]) {
    let mut builder = tar::Builder::new(Vec::new());
    let mut header = tar::Header::new_gnu();
    header.set_entry_type(tar::EntryType::Regular);
    header.set_size(data.len() as u64);
    header.set_mode(0o644);
    builder.append_data(&mut header, name, data).unwrap();
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&builder.into_inner().unwrap()).unwrap();
    fs::write(path, encoder.finish().unwrap()).unwrap();
}

#[test]
fn missing_directory_argument_exits_with_usage() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("unarc")?
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
    Ok(())
}

#[test]
fn help_exits_with_one() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("unarc")?
        .arg("--help")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("--delete"));
    Ok(())
}

#[test]
fn unreadable_root_exits_with_two() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    Command::cargo_bin("unarc")?
        .arg(dir.path().join("missing"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error walking the path"));
    Ok(())
}

#[test]
fn extracts_in_place_and_keeps_sources() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_zip(&dir.path().join("f.zip"), "f.txt", b"this is a file\n");
    write_tgz(&dir.path().join("ftar.tgz"), "ftar.txt", b"this is a file for tar\n");

    Command::cargo_bin("unarc")?.arg(dir.path()).assert().success();

    assert_eq!(fs::read_to_string(dir.path().join("f.txt"))?, "this is a file\n");
    assert_eq!(
        fs::read_to_string(dir.path().join("ftar.txt"))?,
        "this is a file for tar\n"
    );
    assert!(dir.path().join("ftar").exists());
    assert!(dir.path().join("f.zip").exists());
    assert!(dir.path().join("ftar.tgz").exists());
    Ok(())
}

#[test]
fn delete_flag_removes_extracted_sources() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_zip(&dir.path().join("f.zip"), "f.txt", b"this is a file\n");
    write_tgz(&dir.path().join("ftar.tgz"), "ftar.txt", b"this is a file for tar\n");

    Command::cargo_bin("unarc")?
        .arg("--delete")
        .arg(dir.path())
        .assert()
        .success();

    assert!(!dir.path().join("f.zip").exists());
    assert!(!dir.path().join("ftar.tgz").exists());
    assert!(!dir.path().join("ftar").exists());
    assert!(dir.path().join("f.txt").exists());
    Ok(())
}

#[test]
fn corrupt_archive_does_not_change_exit_status() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("bad.zip"), b"not a zip at all")?;
    write_zip(&dir.path().join("good.zip"), "good.txt", b"good\n");

    Command::cargo_bin("unarc")?
        .args(["-v", "-d"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("unable to extract"));

    assert!(dir.path().join("bad.zip").exists());
    assert!(!dir.path().join("good.zip").exists());
    assert_eq!(fs::read_to_string(dir.path().join("good.txt"))?, "good\n");
    Ok(())
}
