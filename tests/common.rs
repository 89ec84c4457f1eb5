#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const HEADER: &str = "Date,Work Log,Start Time,End Time,Created At,Updated At,Updated Work Log,Updated Start,Updated End";

/// Isolated HOME: config dir, audit log and default data file live inside it.
pub struct Sandbox {
    pub home: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("create temp home"),
        }
    }

    /// The binary, with HOME/APPDATA pointed at the sandbox.
    pub fn otl(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("otlog");
        cmd.env("HOME", self.home.path())
            .env("APPDATA", self.home.path())
            .current_dir(self.home.path());
        cmd
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.home.path().join(name)
    }

    /// Data file path inside the sandbox, as a CLI argument.
    pub fn data(&self) -> String {
        self.path("ot.csv").to_string_lossy().to_string()
    }

    pub fn read_data(&self) -> String {
        fs::read_to_string(self.data()).expect("read data file")
    }

    /// Save one entry through the CLI.
    pub fn save(&self, date: &str, log: &str, start: &str, end: &str) {
        self.otl()
            .args([
                "--data",
                &self.data(),
                "save",
                date,
                "-m",
                log,
                "--start",
                start,
                "--end",
                end,
            ])
            .assert()
            .success();
    }

    /// Data rows parsed back (header excluded).
    pub fn rows(&self) -> Vec<Vec<String>> {
        let mut rdr = csv::Reader::from_path(self.data()).expect("open data file");
        rdr.records()
            .map(|r| r.expect("csv row").iter().map(str::to_string).collect())
            .collect()
    }
}
