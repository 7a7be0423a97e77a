//! Test environment for running the navweave binary in isolation.
//!
//! The binary discovers `navweave.toml` in its working directory and a user
//! config under the platform config dir, so both are pointed at temp dirs.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::fixtures::{ASCII_CONFIG, CATEGORIES_JSON, MENU_JSON};

/// Result of running a navweave CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as NDJSON events
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("stdout line is not JSON ({}): {}", e, line))
            })
            .collect()
    }

    /// `event` field of every NDJSON line, in order
    pub fn event_names(&self) -> Vec<String> {
        self.events()
            .iter()
            .map(|e| e["event"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    /// The single `result` event
    pub fn result_event(&self) -> serde_json::Value {
        self.events()
            .into_iter()
            .find(|e| e["event"] == "result")
            .unwrap_or_else(|| panic!("no result event in:\n{}", self.stdout))
    }
}

/// Isolated project directory and config home
pub struct TestEnv {
    pub project_root: TempDir,
    pub config_home: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("Failed to create project dir"),
            config_home: tempfile::tempdir().expect("Failed to create config home"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_navweave")),
        }
    }

    /// Environment with the standard menu and category fixtures written
    pub fn with_fixtures() -> Self {
        let env = Self::new();
        env.write_project_file("menu.json", MENU_JSON);
        env.write_project_file("categories.json", CATEGORIES_JSON);
        env
    }

    /// ASCII output, for stable text assertions
    pub fn with_ascii_config(self) -> Self {
        self.write_project_file("navweave.toml", ASCII_CONFIG);
        self
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        let full_path = self.project_path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Run navweave from the project root with color disabled
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(["--color", "never"])
            .args(args)
            .env("HOME", self.config_home.path())
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        for key in OVERRIDE_VARS {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute navweave");
        output_to_result(output)
    }

    pub fn root(&self) -> &Path {
        self.project_root.path()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

const OVERRIDE_VARS: [&str; 4] = [
    "NAVWEAVE_INCLUDE_ROOT",
    "NAVWEAVE_ITEMS_PER_COLUMN",
    "NAVWEAVE_VISIBLE_CHILDREN",
    "NAVWEAVE_CLOSE_DELAY_MS",
];

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
