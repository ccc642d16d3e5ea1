use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Session summary fixtures shaped like the instrumented session output
#[allow(dead_code)]
pub mod fixtures {
    pub const WITH_PLUGIN: &str = r#"{
  "session_id": "sess-with",
  "model": "model-x",
  "cwd": "/work/repo",
  "has_index": true,
  "tokens": {
    "input": 1000,
    "output": 400,
    "cache_creation": 200,
    "cache_read": 3000,
    "cache_hit_ratio": 0.75
  },
  "api_calls": 5,
  "tool_calls": { "Read": 4, "Grep": 3 },
  "search_nav_total": 7,
  "duration_sec": 90.5,
  "compaction_events": 1
}"#;

    pub const WITHOUT_PLUGIN: &str = r#"{
  "session_id": "sess-without",
  "model": "model-x",
  "cwd": "/work/repo",
  "has_index": false,
  "tokens": {
    "input": 1500,
    "output": 500,
    "cache_creation": 250,
    "cache_read": 2000,
    "cache_hit_ratio": 0.5
  },
  "api_calls": 0,
  "tool_calls": { "Read": 10, "Bash": 2 },
  "search_nav_total": 14,
  "duration_sec": 120,
  "compaction_events": 0
}"#;
}

pub fn session_compare_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_session-compare"))
}

pub fn run_session_compare(args: &[&str], work_dir: &Path) -> Output {
    Command::new(session_compare_bin())
        .args(args)
        .current_dir(work_dir)
        .output()
        .expect("run session-compare")
}

pub fn write_summary(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let file_path = dir.join(filename);
    fs::write(&file_path, content).expect("Failed to write summary fixture");
    file_path
}

#[allow(dead_code)]
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[allow(dead_code)]
pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[allow(dead_code)]
pub fn assert_success(output: &Output) {
    if output.status.success() {
        return;
    }
    panic!(
        "Command failed: {}\nstdout:\n{}\nstderr:\n{}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}
