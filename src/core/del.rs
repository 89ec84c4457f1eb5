use crate::models::WorkLogTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub removed: usize,
    pub remaining: usize,
}

impl DeleteOutcome {
    /// The user-facing "nothing to delete" signal: raised whenever the table
    /// is empty after the call, including when the last row was just removed.
    pub fn reports_nothing_to_delete(&self) -> bool {
        self.remaining == 0
    }
}

pub struct DeleteLogic;

impl DeleteLogic {
    /// Drop every row whose date equals `date` (plain string equality).
    pub fn apply(mut table: WorkLogTable, date: &str) -> (WorkLogTable, DeleteOutcome) {
        let before = table.len();
        table.entries.retain(|e| e.date != date);

        let outcome = DeleteOutcome {
            removed: before - table.len(),
            remaining: table.len(),
        };

        (table, outcome)
    }
}
