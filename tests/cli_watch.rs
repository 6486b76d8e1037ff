//! E2E tests for `shapewatch watch`
//!
//! The watcher runs until Ctrl+C, so these tests start it, drive it through
//! the file system and kill it once the expected files show up.

mod common;

use std::fs;
use std::io::Write;
use std::thread;
use std::time::Duration;

use common::{wait_until, TestEnv};

#[test]
fn watch_ingests_file_moved_into_folder() {
    let env = TestEnv::new();
    fs::create_dir_all(env.path("in")).unwrap();

    let mut child = env.spawn(&[
        "watch", "--folder", "in", "--drop", "out", "-e", "*.txt", "--json",
    ]);

    // Give the watcher a moment to register
    thread::sleep(Duration::from_millis(750));

    let staging = env.write("staging.txt", "triangle, 3, 4, Purple\nsquare, 1, Red\n");
    fs::rename(&staging, env.path("in/batch.txt")).unwrap();

    let processed = env.path("in/Processed/batch.txt");
    let done = wait_until(Duration::from_secs(10), || processed.exists());

    let _ = child.kill();
    let output = child.wait_with_output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(done, "input never reached Processed; stdout:\n{stdout}");
    assert_eq!(env.reports("out").len(), 3);
    assert!(stdout.contains("\"event\":\"watch_started\""), "{stdout}");
    assert!(stdout.contains("\"event\":\"file_detected\""), "{stdout}");
}

#[test]
fn watch_waits_for_file_written_in_place() {
    let env = TestEnv::new();
    fs::create_dir_all(env.path("in")).unwrap();

    let mut child = env.spawn(&["watch", "--folder", "in", "--drop", "out", "--json"]);
    thread::sleep(Duration::from_millis(750));

    {
        let mut file = fs::File::create(env.path("in/slow.txt")).unwrap();
        thread::sleep(Duration::from_millis(300));
        file.write_all(b"triangle, 3, 4, Purple\ncircle, 2, Blue\n")
            .unwrap();
    }

    let processed = env.path("in/Processed/slow.txt");
    let done = wait_until(Duration::from_secs(10), || processed.exists());

    let _ = child.kill();
    let output = child.wait_with_output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(done, "input never reached Processed; stdout:\n{stdout}");
    assert!(!stdout.contains("\"event\":\"empty_input\""), "{stdout}");
    let reports = env.reports("out");
    let all = reports
        .iter()
        .find(|name| name.ends_with("_All.txt"))
        .expect("All report");
    let content = env.read(&format!("out/{all}"));
    assert_eq!(
        content.lines().collect::<Vec<_>>(),
        ["Triangle, 6, Purple", "Circle, 12.57, Blue"]
    );
}

#[test]
fn watch_ignores_files_that_do_not_match_pattern() {
    let env = TestEnv::new();
    fs::create_dir_all(env.path("in")).unwrap();

    let mut child = env.spawn(&["watch", "--folder", "in", "--drop", "out", "-e", "*.txt"]);
    thread::sleep(Duration::from_millis(750));

    let staging = env.write("notes.csv", "circle, 1, Red\n");
    fs::rename(&staging, env.path("in/notes.csv")).unwrap();
    let staging = env.write("staging.txt", "circle, 1, Red\n");
    fs::rename(&staging, env.path("in/real.txt")).unwrap();

    let done = wait_until(Duration::from_secs(10), || {
        env.path("in/Processed/real.txt").exists()
    });

    let _ = child.kill();
    let _ = child.wait();

    assert!(done);
    assert!(env.path("in/notes.csv").exists());
}

#[test]
fn watch_process_existing_sweeps_folder_on_startup() {
    let env = TestEnv::new();
    env.write("in/a.txt", "circle, 1, Red\n");
    env.write("in/b.txt", "circle, 2, Red\n");

    let mut child = env.spawn(&[
        "watch",
        "--folder",
        "in",
        "--drop",
        "out",
        "--process-existing",
    ]);

    let done = wait_until(Duration::from_secs(10), || {
        env.path("in/Processed/a.txt").exists() && env.path("in/Processed/b.txt").exists()
    });

    let _ = child.kill();
    let _ = child.wait();

    assert!(done, "existing files were not swept");
    assert_eq!(env.reports("out").len(), 6);
}

#[test]
fn watch_creates_missing_watch_folder() {
    let env = TestEnv::new();

    let mut child = env.spawn(&["watch", "--folder", "fresh/in", "--drop", "out"]);
    let created = wait_until(Duration::from_secs(5), || env.path("fresh/in").is_dir());

    let _ = child.kill();
    let _ = child.wait();

    assert!(created);
}

#[test]
fn watch_without_folder_fails_fast() {
    let env = TestEnv::new();

    let result = env.run(&["watch", "--drop", "out"]);

    assert!(!result.success);
    assert!(result.stderr.contains("watch.folder"), "{}", result.stderr);
}
