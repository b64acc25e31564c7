#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// An isolated HOME so config files and rc edits never touch the real user.
pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        Self { _tmp: tmp, home }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("claude-emotion");
        cmd.env("HOME", &self.home)
            .env("SHELL", "/bin/zsh")
            .env_remove("RUST_LOG")
            .env_remove("CLAUDE_EMOTION_STYLE")
            .env_remove("CLAUDE_EMOTION_SHELL_DIR")
            .env_remove("CLAUDE_EMOTION_RC_FILE");
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn filter(&self, stdin: &str) -> String {
        let out = self
            .cmd()
            .write_stdin(stdin)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out).expect("utf8 output")
    }

    pub fn write_config(&self, raw: &str) {
        let dir = self.home.join(".config/claude-emotion");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("config.toml"), raw).expect("write config");
    }

    pub fn script_path(&self) -> PathBuf {
        self.home.join(".config/claude-emotion/claude-emotion.sh")
    }

    pub fn zshrc(&self) -> PathBuf {
        self.home.join(".zshrc")
    }
}
