mod support;

use std::io::Cursor;

use support::write_container;
use tempfile::tempdir;
use uv2csv::{absolute_input_path, is_supported_file, prompt_for_path};

#[test]
fn absolute_input_path_keeps_absolute_paths() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("run.KD");
    let raw = path.to_string_lossy().to_string();
    assert_eq!(absolute_input_path(&raw).expect("absolute"), path);
}

#[test]
fn absolute_input_path_strips_quotes_and_whitespace() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("My Run.SD");
    let raw = format!("  \"{}\"\n", path.display());
    assert_eq!(absolute_input_path(&raw).expect("absolute"), path);
}

#[test]
fn is_supported_file_requires_existing_kd_or_sd() {
    let tmp = tempdir().expect("tempdir");
    let kd = write_container(tmp.path(), "a.kd", &[0], 4);
    assert!(is_supported_file(&kd));
    assert!(!is_supported_file(&tmp.path().join("missing.SD")));

    let txt = tmp.path().join("notes.txt");
    std::fs::write(&txt, "x").expect("write txt");
    assert!(!is_supported_file(&txt));
    assert!(!is_supported_file(tmp.path()));
}

#[test]
fn prompt_repeats_until_a_valid_file_is_entered() {
    let tmp = tempdir().expect("tempdir");
    let good = write_container(tmp.path(), "good.SD", &[0], 4);
    let input = format!(
        "{}\n\n{}\n",
        tmp.path().join("nope.csv").display(),
        good.display()
    );

    let mut output = Vec::new();
    let chosen = prompt_for_path(&mut Cursor::new(input), &mut output).expect("prompt");
    assert_eq!(chosen, good);

    let transcript = String::from_utf8(output).expect("utf8");
    assert_eq!(transcript.matches("Enter a file path: ").count(), 3);
    assert_eq!(transcript.matches("Invalid file path").count(), 1);
}

#[test]
fn prompt_fails_on_end_of_input() {
    let mut output = Vec::new();
    let err = prompt_for_path(&mut Cursor::new(""), &mut output).unwrap_err();
    assert!(err.to_string().contains("No input path provided"));
}
