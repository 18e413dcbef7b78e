//! End-to-end runs of the `destiny` binary.

use std::fs;

use assert_cmd::Command;

fn destiny() -> Command {
    let mut cmd = Command::cargo_bin("destiny").unwrap();
    cmd.env_remove("DESTINY_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let out = cmd.output().unwrap();
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    String::from_utf8(out.stdout).unwrap()
}

#[test]
fn reduce_prints_sum_and_digit() {
    let dir = tempfile::tempdir().unwrap();
    let out = stdout_of(destiny().current_dir(dir.path()).args(["reduce", "1990"]));
    assert_eq!(out, "Digit sum: 19\nReduced: 1\n");
}

#[test]
fn profile_text() {
    let dir = tempfile::tempdir().unwrap();
    let out = stdout_of(destiny().current_dir(dir.path()).args([
        "profile", "--day", "15", "--month", "08", "--year", "1992", "--gender", "male",
    ]));
    assert!(out.starts_with("Date: 15/8/1992 (male)\nMoolank: 6\nBhagyank: 8\nKua: 8\n"), "{out}");
    assert!(out.contains("Missing numbers: 3, 4, 6, 7\n"));
    assert!(out.ends_with("-  | 99 | 2\n-  | 5  | -\n8  | 11 | -\n"));
}

#[test]
fn profile_json() {
    let dir = tempfile::tempdir().unwrap();
    let out = stdout_of(destiny().current_dir(dir.path()).args([
        "profile", "--day", "5", "--month", "9", "--year", "1995", "--gender", "female", "--json",
    ]));
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["bhagyank"], 2);
    assert_eq!(v["kua"], 1);
    assert_eq!(v["loshuGrid"]["9"], 3);
}

#[test]
fn strict_rejects_impossible_date() {
    let dir = tempfile::tempdir().unwrap();
    let out = destiny()
        .current_dir(dir.path())
        .args(["grid", "--day", "31", "--month", "2", "--year", "1990", "--strict"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("31/2/1990 is not a calendar date"));
}

#[test]
fn lenient_accepts_impossible_date() {
    let dir = tempfile::tempdir().unwrap();
    let out = stdout_of(destiny().current_dir(dir.path()).args([
        "grid", "--day", "31", "--month", "2", "--year", "1990",
    ]));
    assert!(out.contains("Missing numbers: 4, 5, 6, 7, 8\n"), "{out}");
}

#[test]
fn config_prompt_is_used() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("destiny.toml"),
        "[[prompts]]\nkind = \"report_gen\"\nversion = \"v2\"\nactive = true\ncontent = \"{{name}} M{{moolank}} [{{missingNumbers}}]\"\n",
    )
    .unwrap();
    let out = stdout_of(destiny().current_dir(dir.path()).args([
        "prompt", "--name", "Asha", "--day", "15", "--month", "8", "--year", "1992", "--gender", "male",
    ]));
    assert_eq!(out, "Asha M6 [3, 4, 6, 7]\n");

    let listing = stdout_of(destiny().current_dir(dir.path()).args(["prompts", "--kind", "report_gen"]));
    assert!(listing.starts_with("* v2 "), "{listing}");
}

#[test]
fn prompt_shows_date_as_entered() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("destiny.toml"),
        "[[prompts]]\nkind = \"report_gen\"\nversion = \"v1\"\nactive = true\ncontent = \"{{dob}} M{{moolank}}\"\n",
    )
    .unwrap();
    let out = stdout_of(destiny().current_dir(dir.path()).args([
        "prompt", "--name", "Meera", "--day", "05", "--month", "09", "--year", "1995", "--gender", "female",
    ]));
    assert_eq!(out, "05/09/1995 M5\n");
}

#[test]
fn bad_gender_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = destiny()
        .current_dir(dir.path())
        .args(["profile", "--day", "1", "--month", "1", "--year", "2000", "--gender", "x"])
        .output()
        .unwrap();
    assert!(!out.status.success());
}
