#![allow(dead_code)]

pub mod mock_server;

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Environment variables that would leak the developer's setup into a test
const ISOLATED_ENV: &[&str] = &["CATALOG_API_URL", "CATALOG_SECRET", "CATALOG_LOG", "RUST_LOG"];

/// Helper struct to run catalog commands against an isolated config file
pub struct CatalogTest {
    pub temp_dir: TempDir,
    binary_path: &'static str,
    env: Vec<(String, String)>,
}

impl CatalogTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        CatalogTest {
            temp_dir,
            binary_path: env!("CARGO_BIN_EXE_catalog"),
            env: vec![],
        }
    }

    /// Set an environment variable for every command this helper runs
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.yaml")
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).expect("Failed to write config file");
    }

    pub fn read_config(&self) -> String {
        fs::read_to_string(self.config_path()).expect("Failed to read config file")
    }

    pub fn run(&self, args: &[&str]) -> Output {
        let mut command = Command::new(self.binary_path);
        command
            .args(args)
            .current_dir(self.temp_dir.path())
            .env("CATALOG_CONFIG", self.config_path())
            .env("NO_COLOR", "1");
        for key in ISOLATED_ENV {
            command.env_remove(key);
        }
        for (key, value) in &self.env {
            command.env(key, value);
        }
        command.output().expect("Failed to execute catalog command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }
}
