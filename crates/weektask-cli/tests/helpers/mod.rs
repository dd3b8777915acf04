use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// File the default `@tasks` key is stored in.
pub const TASKS_FILE: &str = "_40tasks.json";

/// Runs the binary against a throwaway data directory.
pub struct CliTestHarness {
    temp_dir: TempDir,
    data_dir: PathBuf,
}

impl CliTestHarness {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let data_dir = temp_dir.path().join("data");

        Self { temp_dir, data_dir }
    }

    /// A command isolated from any `weektask.toml` or `WEEKTASK_*` in the caller's environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("weektask").expect("Failed to find weektask binary");
        cmd.current_dir(self.temp_dir.path())
            .env_remove("WEEKTASK_STORAGE_KEY")
            .env_remove("RUST_LOG")
            .env("WEEKTASK_DATA_DIR", &self.data_dir);
        cmd
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Working directory the binary runs in, where `weektask.toml` is read from.
    pub fn work_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn tasks_file(&self) -> PathBuf {
        self.data_dir.join(TASKS_FILE)
    }

    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }

    /// Tasks as persisted on disk, parsed loosely so the tests don't depend on core types.
    pub fn stored_tasks(&self) -> Vec<serde_json::Value> {
        match std::fs::read_to_string(self.tasks_file()) {
            Ok(raw) => serde_json::from_str(&raw).expect("stored tasks are not valid JSON"),
            Err(_) => Vec::new(),
        }
    }

    /// Id of the first stored task with this title.
    pub fn task_id(&self, title: &str) -> String {
        self.stored_tasks()
            .into_iter()
            .find(|t| t["title"] == title)
            .and_then(|t| t["id"].as_str().map(str::to_string))
            .unwrap_or_else(|| panic!("no stored task titled '{title}'"))
    }
}
