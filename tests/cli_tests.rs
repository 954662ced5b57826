use assert_cmd::Command;
use std::io::Write;
use tempfile::NamedTempFile;

const HEADER: &str = "pos\tfwd_score\trev_score\tbest_score\tstrand\n";

fn pwm_scan() -> Command {
    Command::cargo_bin("pwm-scan").unwrap()
}

#[test]
fn test_cli_example() {
    let output = pwm_scan()
        .arg("tests/data/example.pwm")
        .arg("tests/data/example_ag.fa")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, format!("{}1\t2.485\t-1.644\t2.485\t+\n", HEADER));
}

#[test]
fn test_cli_custom_background() {
    let output = pwm_scan()
        .args(["tests/data/example.pwm", "tests/data/example_ag.fa"])
        .args(["--bg", "0.5", "0.25", "0.25", "0.5"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    // log2(0.5/0.5) + log2(0.7/0.25) for AG, log2(0.2/0.25) + log2(0.1/0.5) for CT
    assert_eq!(stdout, format!("{}1\t1.485\t-2.644\t1.485\t+\n", HEADER));
}

#[test]
fn test_cli_last_background_wins() {
    let output = pwm_scan()
        .args(["tests/data/example.pwm", "tests/data/example_ag.fa"])
        .args(["--bg", "1", "1", "1", "1"])
        .args(["--bg", "0.25", "0.25", "0.25", "0.25"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, format!("{}1\t2.485\t-1.644\t2.485\t+\n", HEADER));
}

#[test]
fn test_cli_row_count() {
    let output = pwm_scan()
        .args(["tests/data/motif_commas.pwm", "tests/data/test1.fasta"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], HEADER.trim_end());
    assert_eq!(lines.len(), 1 + 38 - 6 + 1);
    for (idx, line) in lines[1..].iter().enumerate() {
        let fields: Vec<&str> = line.split('\t').collect();
        assert_eq!(fields.len(), 5);
        assert_eq!(fields[0], (idx + 1).to_string());
        assert!(fields[4] == "+" || fields[4] == "-");
    }
}

#[test]
fn test_cli_short_sequence_prints_header_only() {
    let mut seq = NamedTempFile::new().unwrap();
    writeln!(seq, ">short\nA").unwrap();
    let output = pwm_scan()
        .arg("tests/data/example.pwm")
        .arg(seq.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), HEADER);
}

#[test]
fn test_cli_bad_pwm_fails_before_reading_sequence() {
    let output = pwm_scan()
        .args(["tests/data/three_rows.pwm", "tests/data/does_not_exist.fa"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("exactly 4 non-empty lines"), "{}", stderr);
}

#[test]
fn test_cli_ragged_pwm() {
    let output = pwm_scan()
        .args(["tests/data/ragged.pwm", "tests/data/example_ag.fa"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("inconsistent lengths"), "{}", stderr);
}

#[test]
fn test_cli_missing_sequence_file() {
    let output = pwm_scan()
        .args(["tests/data/example.pwm", "tests/data/does_not_exist.fa"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_zero_background_fails_without_table() {
    let output = pwm_scan()
        .args(["tests/data/example.pwm", "tests/data/example_ag.fa"])
        .args(["--bg", "0", "0.25", "0.25", "0.25"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Degenerate score input"), "{}", stderr);
}

#[test]
fn test_cli_bg_needs_four_values() {
    let output = pwm_scan()
        .args(["tests/data/example.pwm", "tests/data/example_ag.fa"])
        .args(["--bg", "0.25", "0.25"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}
