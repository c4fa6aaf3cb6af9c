use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_binary(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_minesweeper"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start minesweeper binary");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().expect("failed to wait on binary")
}

#[test]
fn test_binary_mine_free_board_wins() {
    let output = run_binary(
        &["--height", "2", "--width", "2", "--mines", "0"],
        "0 0\n0 1\n1 0\n1 1\n",
    );
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    assert!(stdout.contains("@@\n@@\n"));
    assert!(stdout.ends_with("00\n00\nYou won!\n"));
}

#[test]
fn test_binary_seeded_game_terminates() {
    let output = run_binary(
        &["--seed", "12345", "--height", "2", "--width", "2", "--mines", "3"],
        "0 0\n0 1\n1 0\n1 1\n",
    );
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    assert!(stdout.contains("You won!") || stdout.contains("Boom!"));
}

#[test]
fn test_binary_rejects_too_many_mines() {
    let output = run_binary(&["--height", "2", "--width", "2", "--mines", "4"], "");
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("non utf8 output");
    assert!(stderr.contains("number of mines"));
}
