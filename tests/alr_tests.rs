// tests/alr_tests.rs

//! End-to-end tests of _alrlib_ read, parse, render, and write.

extern crate alrlib;

use alrlib::common::{FPath, LineStrs};
use alrlib::data::record::Records;
use alrlib::printer::report::render;
use alrlib::printer::writer::write_report;
use alrlib::readers::linereader::read_lines;
use alrlib::readers::logparser::parse_lines;

use std::fs::{read_to_string, write};
use std::io::Result;
use std::process::{Command, Output};

use ::tempfile::{tempdir, TempDir};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

const SAMPLE_LOG: &str = "\
001 alice 1500 2300 2024-03-05 14:03:09
003 alice 10 20

002 bob 500 100 2024-01-01 09:00:00\r
004 carol 1234567 12xyz 2024-03-05 14:03:09.5 extra
001 carol abc 0 2024-02-29
";

const SAMPLE_REPORT: &str = "\
Section 1: Pipe-delimited logs
alice|1,500|2,300|Tue, March 05 2024, 14:03:09|001
bob|500|100|Mon, January 01 2024, 09:00:00|002
carol|1,234,567|12|Tue, March 05 2024, 14:03:09|004
carol|0|0|Thu, February 29 2024, 00:00:00|001

Section 2: Sorted list of IDs
001
001
002
004

Section 3: Unique UserIDs sorted, numbered
[1] alice
[2] bob
[3] carol";

fn fpath(tempdir: &TempDir, name: &str) -> FPath {
    FPath::from(tempdir.path().join(name).to_str().unwrap())
}

/// the same steps as the `alr` driver
fn process_log(
    input: &FPath,
    output: &FPath,
) -> Result<()> {
    let lines: LineStrs = read_lines(input)?;
    let records: Records = parse_lines(&lines)?;
    write_report(output, &render(&records))
}

#[test]
fn test_process_log_sample() {
    let tempdir = tempdir().unwrap();
    let input = fpath(&tempdir, "sample-log.txt");
    let output = fpath(&tempdir, "output.txt");
    write(&input, SAMPLE_LOG).unwrap();

    process_log(&input, &output).unwrap();

    assert_eq!(read_to_string(&output).unwrap(), SAMPLE_REPORT);
}

#[test]
fn test_process_log_rerun_identical() {
    let tempdir = tempdir().unwrap();
    let input = fpath(&tempdir, "sample-log.txt");
    let output = fpath(&tempdir, "output.txt");
    write(&input, SAMPLE_LOG).unwrap();

    process_log(&input, &output).unwrap();
    let first: String = read_to_string(&output).unwrap();
    process_log(&input, &output).unwrap();
    let second: String = read_to_string(&output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_process_log_bad_timestamp_leaves_output() {
    let tempdir = tempdir().unwrap();
    let input = fpath(&tempdir, "sample-log.txt");
    let output = fpath(&tempdir, "output.txt");
    write(&input, "001 alice 1 2 2024-03-05 14:03:09\n002 bob 1 2 tomorrow morning\n").unwrap();
    write(&output, "previous report").unwrap();

    assert!(process_log(&input, &output).is_err());

    assert_eq!(read_to_string(&output).unwrap(), "previous report");
}

#[test]
fn test_process_log_bad_timestamp_no_output() {
    let tempdir = tempdir().unwrap();
    let input = fpath(&tempdir, "sample-log.txt");
    let output = fpath(&tempdir, "output.txt");
    write(&input, "002 bob 1 2 tomorrow morning\n").unwrap();

    assert!(process_log(&input, &output).is_err());

    assert!(!std::path::Path::new(&output).exists());
}

#[test]
fn test_process_log_missing_input() {
    let tempdir = tempdir().unwrap();
    let input = fpath(&tempdir, "missing.txt");
    let output = fpath(&tempdir, "output.txt");

    assert!(process_log(&input, &output).is_err());
    assert!(!std::path::Path::new(&output).exists());
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// the `alr` program
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// run `alr` without arguments within `tempdir`
fn run_alr_default_paths(tempdir: &TempDir) -> Output {
    Command::new(env!("CARGO_BIN_EXE_alr"))
        .current_dir(tempdir.path())
        .output()
        .unwrap()
}

#[test]
fn test_alr_default_paths() {
    let tempdir = tempdir().unwrap();
    write(tempdir.path().join("sample-log.txt"), SAMPLE_LOG).unwrap();

    let output = run_alr_default_paths(&tempdir);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "✅ Log has been processed. Output written to 'output.txt'.\n");
    assert_eq!(read_to_string(tempdir.path().join("output.txt")).unwrap(), SAMPLE_REPORT);
}

#[test]
fn test_alr_bad_timestamp_fails() {
    let tempdir = tempdir().unwrap();
    write(tempdir.path().join("sample-log.txt"), "001 alice 1 2 soon 12:00:00\n").unwrap();
    write(tempdir.path().join("output.txt"), "previous report").unwrap();

    let output = run_alr_default_paths(&tempdir);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: "), "stderr {:?}", stderr);
    assert_eq!(read_to_string(tempdir.path().join("output.txt")).unwrap(), "previous report");
}
