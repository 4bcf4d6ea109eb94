#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

pub const FIXTURE: &str = "5,3,9,1,7,2,8,4,6,0";

pub struct TestEnv {
    tmp: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            tmp: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn dir(&self) -> &Path {
        self.tmp.path()
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("samplestat");
        cmd.current_dir(self.tmp.path()).env_remove("RUST_LOG");
        cmd
    }

    pub fn run_text(&self, args: &[&str]) -> String {
        let out = self
            .cmd()
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out).expect("utf8 stdout")
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
}

pub fn samples(report: &Value) -> Vec<i64> {
    report["data"]["samples"]
        .as_array()
        .expect("samples array")
        .iter()
        .map(|v| v.as_i64().expect("integer sample"))
        .collect()
}
