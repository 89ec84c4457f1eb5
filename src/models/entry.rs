use serde::{Deserialize, Serialize};

/// CSV header, in file order.
pub const COLUMNS: [&str; 9] = [
    "Date",
    "Work Log",
    "Start Time",
    "End Time",
    "Created At",
    "Updated At",
    "Updated Work Log",
    "Updated Start",
    "Updated End",
];

/// One overtime record, keyed by calendar date.
///
/// Field order matches [`COLUMNS`]: serde serializes struct fields in
/// declaration order, so reordering fields changes the file layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkLogEntry {
    #[serde(rename = "Date")]
    pub date: String, // YYYY-MM-DD
    #[serde(rename = "Work Log")]
    pub work_log: String,
    #[serde(rename = "Start Time")]
    pub start_time: String, // HH:MM
    #[serde(rename = "End Time")]
    pub end_time: String, // HH:MM
    #[serde(rename = "Created At")]
    pub created_at: String, // YYYY-MM-DD HH:MM
    #[serde(rename = "Updated At")]
    pub updated_at: String,
    #[serde(rename = "Updated Work Log", default)]
    pub updated_work_log: String,
    #[serde(rename = "Updated Start", default)]
    pub updated_start: String,
    #[serde(rename = "Updated End", default)]
    pub updated_end: String,
}

impl WorkLogEntry {
    /// Fresh entry: created and updated stamps coincide, no edits yet.
    pub fn new(date: &str, work_log: &str, start: &str, end: &str, now: &str) -> Self {
        Self {
            date: date.to_string(),
            work_log: work_log.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            created_at: now.to_string(),
            updated_at: now.to_string(),
            updated_work_log: String::new(),
            updated_start: String::new(),
            updated_end: String::new(),
        }
    }

    /// Overwrite the "updated" layer. Original fields stay frozen.
    pub fn apply_update(&mut self, work_log: &str, start: &str, end: &str, now: &str) {
        self.updated_work_log = work_log.to_string();
        self.updated_start = start.to_string();
        self.updated_end = end.to_string();
        self.updated_at = now.to_string();
    }

    pub fn is_edited(&self) -> bool {
        !self.updated_work_log.is_empty()
            || !self.updated_start.is_empty()
            || !self.updated_end.is_empty()
    }

    /// Row as plain strings, in [`COLUMNS`] order (used by table/xlsx output).
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.work_log.clone(),
            self.start_time.clone(),
            self.end_time.clone(),
            self.created_at.clone(),
            self.updated_at.clone(),
            self.updated_work_log.clone(),
            self.updated_start.clone(),
            self.updated_end.clone(),
        ]
    }
}
