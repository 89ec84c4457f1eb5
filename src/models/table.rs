use super::entry::WorkLogEntry;

/// The whole CSV file in memory, rows in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkLogTable {
    pub entries: Vec<WorkLogEntry>,
}

impl WorkLogTable {
    pub fn new(entries: Vec<WorkLogEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First row whose `date` matches exactly.
    pub fn find_mut(&mut self, date: &str) -> Option<&mut WorkLogEntry> {
        self.entries.iter_mut().find(|e| e.date == date)
    }

    /// Rows whose date starts with `period` (`YYYY`, `YYYY-MM` or `YYYY-MM-DD`).
    pub fn filter_period(&self, period: &str) -> Vec<&WorkLogEntry> {
        self.entries
            .iter()
            .filter(|e| e.date.starts_with(period))
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WorkLogEntry> {
        self.entries.iter()
    }
}
