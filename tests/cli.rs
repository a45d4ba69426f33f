use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_drills"))
        .args(args)
        .env("RUST_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("could not start drills");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn cloud_reads_stdin() {
    let output = run(
        &["cloud", "--top", "2"],
        "Add milk and eggs, then add flour and sugar.",
    );
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "add\t2\nand\t2\n");
}

#[test]
fn queue_ops() {
    let output = run(&["queue", "+a", "+b", "-", "+c", "-", "-", "-"], "");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "a\nb\nc\n");
}

#[test]
fn queue_rejects_unknown_op() {
    let output = run(&["queue", "+a", "pop"], "");
    assert!(!output.status.success());
}
