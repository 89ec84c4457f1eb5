//! Flat-file store: the whole table is read on every interaction and
//! rewritten in full after a mutation. No locking: two concurrent writers
//! race, last write wins.

use crate::errors::AppResult;
use crate::models::entry::COLUMNS;
use crate::models::{WorkLogEntry, WorkLogTable};
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

pub struct LogStore {
    path: PathBuf,
}

impl LogStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the full table. A missing file is an empty table, not an error.
    pub fn load(&self) -> AppResult<WorkLogTable> {
        match File::open(&self.path) {
            Ok(f) => read_table(f),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(WorkLogTable::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Rewrite the whole file (header + every row).
    pub fn persist(&self, table: &WorkLogTable) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(&self.path)?;
        write_table(file, table)
    }
}

/// Parse a CSV stream. Columns are matched by header name, so a file
/// written by another tool with the same nine headers loads as well.
pub fn read_table<R: Read>(rdr: R) -> AppResult<WorkLogTable> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(rdr);

    let mut entries = Vec::new();
    for row in reader.deserialize::<WorkLogEntry>() {
        entries.push(row?);
    }

    Ok(WorkLogTable::new(entries))
}

/// Serialize the table. The header is always written, even for an empty table.
pub fn write_table<W: Write>(wtr: W, table: &WorkLogTable) -> AppResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(wtr);

    writer.write_record(COLUMNS)?;
    for entry in table.iter() {
        writer.serialize(entry)?;
    }

    writer.flush()?;
    Ok(())
}
