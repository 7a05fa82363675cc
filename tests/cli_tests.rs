use std::process::{Command, Stdio};

fn wordle_sieve() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_wordle-sieve"));
    command.env_remove("WORDLE_DICTIONARY").stdin(Stdio::null());
    command
}

#[test]
fn test_play_unknown_game_fails() {
    let output = wordle_sieve().args(["play", "--game", "100000"]).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no such game in a dictionary of 772 words"), "{}", stderr);
}

#[test]
fn test_solve_lists_possibilities() {
    let output = wordle_sieve().args(["solve", "rsnlwawtne"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Possibilities:\n"), "{}", stdout);
    assert!(stdout.contains(" saint\n"));
}

#[test]
fn test_solve_rejects_malformed_data() {
    let output = wordle_sieve().args(["solve", "rsnlw"]).output().unwrap();
    assert!(!output.status.success());
}
