//! Internal audit log: one CSV row per mutating operation.

use crate::errors::AppResult;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRecord {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Append a line to the audit file, creating it (with header) on first use.
    pub fn record(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // header solo se il file è nuovo o vuoto
        let needs_header = fs::metadata(&self.path)
            .map(|m| m.len() == 0)
            .unwrap_or(true);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut wtr = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(file);

        wtr.serialize(AuditRecord {
            date: Local::now().to_rfc3339(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        })?;

        wtr.flush()?;
        Ok(())
    }

    /// All records in insertion order. Missing file → no records.
    pub fn read_all(&self) -> AppResult<Vec<AuditRecord>> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut rdr = csv::Reader::from_reader(file);
        let mut out = Vec::new();
        for rec in rdr.deserialize::<AuditRecord>() {
            out.push(rec?);
        }

        Ok(out)
    }
}

/// Record an operation in the audit log if enabled. Never fails the caller:
/// a write error only prints a warning.
pub fn audit(cfg: &crate::config::Config, operation: &str, target: &str, message: &str) {
    if !cfg.audit_log {
        return;
    }

    let log = AuditLog::new(crate::config::Config::audit_file());
    if let Err(e) = log.record(operation, target, message) {
        crate::ui::messages::warning(format!("Failed to write internal log: {e}"));
    }
}
