#![allow(unused)]
//! Shared helpers for the pipeline harnesses.

use std::fs;
use std::path::{Path, PathBuf};

use activity_digest::config::Config;
use serde_json::{json, Value};
use tempfile::TempDir;

/// A scratch directory holding `logs.json` and receiving `today_recent.json`.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Workspace {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn input_path(&self) -> PathBuf {
        self.dir.path().join("logs.json")
    }

    pub fn output_path(&self) -> PathBuf {
        self.dir.path().join("today_recent.json")
    }

    pub fn write_input(&self, document: &Value) {
        fs::write(self.input_path(), serde_json::to_string(document).unwrap()).unwrap();
    }

    pub fn write_raw_input(&self, text: &str) {
        fs::write(self.input_path(), text).unwrap();
    }

    pub fn config(&self) -> Config {
        Config {
            input_path: self.input_path(),
            output_path: self.output_path(),
            ..Config::default()
        }
    }

    pub fn read_output(&self) -> Value {
        let text = fs::read_to_string(self.output_path()).expect("output file exists");
        serde_json::from_str(&text).expect("output is valid JSON")
    }
}

/// An activity record in the shape the browser logger emits.
pub fn activity(timestamp: &str, kind: &str, url: &str) -> Value {
    json!({
        "type": kind,
        "timestamp": timestamp,
        "url": url,
        "title": "Inbox",
        "details": {"tagName": "BUTTON", "id": null},
        "source": "browser_tab",
    })
}
