use assert_cmd::Command;
use predicates::prelude::*;

use crate::common;

fn chord_kernel(datasets: &tempfile::TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_chord_kernel"));
    cmd.arg("--datasets").arg(datasets.path());
    cmd
}

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_chord_kernel"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--progression"));
}

#[test]
fn scores_progression_non_interactively() {
    let datasets = common::datasets();
    chord_kernel(&datasets)
        .args(["-s", "bach", "-k", "1", "-p", "I, IV, V, I"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Analyzing progression: [I,IV,V,I]"))
        .stdout(predicate::str::contains("bach follows [I] with [IV] 20.00% of the time"))
        .stdout(predicate::str::contains("bach follows [V] with [I] 100.00% of the time"))
        .stdout(predicate::str::contains("Consider looking").not());
}

#[test]
fn flags_unseen_continuations() {
    let datasets = common::datasets();
    chord_kernel(&datasets)
        .args(["-s", "bach", "-k", "1", "-p", "ii,V,iii"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  Consider looking at the progression: [V,iii]"))
        .stdout(predicate::str::contains("    bach doesn't follow [V] with [iii] very often."));
}

#[test]
fn quiet_hides_per_position_lines() {
    let datasets = common::datasets();
    chord_kernel(&datasets)
        .args(["-s", "bach", "-k", "1", "-q", "-p", "I,IV,V"])
        .assert()
        .success()
        .stdout(predicate::str::contains("follows").not())
        .stdout(predicate::str::contains("particularly unlikely"));
}

#[test]
fn json_output_with_inversions() {
    let datasets = common::datasets();
    let output = chord_kernel(&datasets)
        .args(["-s", "bach", "-i", "-k", "1", "-p", "I(0),IV(0),V(1)", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["inversions"], true);
    assert_eq!(value["frequencies"], serde_json::json!([0.25, 1.0]));
    assert_eq!(value["flagged"], serde_json::json!([]));
}

#[test]
fn json_without_progression_is_rejected_before_prompting() {
    let datasets = common::datasets();
    chord_kernel(&datasets)
        .args(["--format", "json"])
        .write_stdin("bach\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--format = json - requires --progression"));
}

#[test]
fn datasets_dir_from_environment() {
    let datasets = common::datasets();
    Command::new(env!("CARGO_BIN_EXE_chord_kernel"))
        .env("CHORD_KERNEL_DATASETS", datasets.path())
        .args(["-s", "monteverdi", "-k", "1", "-p", "I,V"])
        .assert()
        .success()
        .stdout(predicate::str::contains("monteverdi follows [I] with [V]"));
}

#[test]
fn unknown_style_fails() {
    let datasets = common::datasets();
    let output = chord_kernel(&datasets).args(["-s", "nobody", "-p", "I,V,I"]).output().unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: failed to score progression against 'nobody': "));
    assert_eq!(stderr.matches("'nobody' is not supported").count(), 1, "{stderr}");
}

#[test]
fn zero_context_fails_fast() {
    let datasets = common::datasets();
    chord_kernel(&datasets)
        .args(["-s", "bach", "-k", "0", "-p", "I,V,I"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid context length"));
}

#[test]
fn no_inversions_skips_the_inversion_prompt() {
    let datasets = common::datasets();
    chord_kernel(&datasets)
        .args(["--no-inversions", "-k", "1"])
        .write_stdin("bach\nI,IV\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Use Inversions").not())
        .stdout(predicate::str::contains("bach follows [I] with [IV] 20.00% of the time"));
}

#[test]
fn interactive_session() {
    let datasets = common::datasets();
    chord_kernel(&datasets)
        .write_stdin("palestrina\nbach\nn\n1\nI,IV,V,I\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Style ([monteverdi]/bach): "))
        .stdout(predicate::str::contains("Unknown style 'palestrina' (known: bach, monteverdi)"))
        .stdout(predicate::str::contains("Size of desired context ([2]): "))
        .stdout(predicate::str::contains("bach follows [IV] with [V] 100.00% of the time"));
}
