#![cfg(unix)]

mod integration;

use integration::TestFixture;
use std::fs;
use std::io::{BufRead, BufReader, Read};
use std::process::{Command, Stdio};

/// Large enough that ranking is still running when the interrupt lands
fn long_document(sentences: usize) -> String {
    (0..sentences)
        .map(|i| format!("Sentence {i} mentions topic{} next to item{}.", i % 37, i % 53))
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn test_interrupt_exits_cleanly_without_partial_files() {
    let fixture = TestFixture::new();
    let input = fixture.create_document("long.txt", &long_document(2500));

    let mut child = Command::new(env!("CARGO_BIN_EXE_docsynth"))
        .arg(&input)
        .arg("--verbose")
        .current_dir(&fixture.root_path)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start docsynth");

    let mut stdout = child.stdout.take().expect("stdout is piped");
    let stdout_reader = std::thread::spawn(move || {
        let mut text = String::new();
        stdout.read_to_string(&mut text).map(|_| text)
    });

    // Wait until the interrupt handler is installed before signalling
    let stderr = child.stderr.take().expect("stderr is piped");
    let mut lines = BufReader::new(stderr).lines();
    let ready = lines
        .by_ref()
        .map_while(Result::ok)
        .any(|line| line.contains("Listening for interrupts"));
    assert!(ready, "docsynth exited before installing its interrupt handler");

    let killed = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .expect("Failed to run kill");
    assert!(killed.success());

    // Keep draining stderr so the child never blocks on a full pipe
    std::thread::spawn(move || lines.for_each(drop));

    let status = child.wait().expect("Failed to wait for docsynth");
    let stdout = stdout_reader.join().unwrap().unwrap();

    assert_eq!(status.code(), Some(0), "stdout: {stdout}");
    assert!(stdout.contains("Operation cancelled by user."), "{stdout}");

    let summary = fixture.summary_path(&input);
    let stray: Vec<String> = fs::read_dir(&fixture.root_path)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| *path != input && *path != summary)
        .map(|path| path.display().to_string())
        .collect();
    assert!(stray.is_empty(), "left behind: {stray:?}");
}
