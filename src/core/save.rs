use crate::models::{WorkLogEntry, WorkLogTable};

/// Values coming from the form for one Save.
#[derive(Debug, Clone)]
pub struct SaveInput {
    pub date: String,
    pub work_log: String,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// New row appended for a date not yet in the table.
    Inserted,
    /// First row with the same date got its "updated" layer overwritten.
    Updated,
    /// Empty description: nothing changed.
    EmptyWorkLog,
}

impl SaveOutcome {
    pub fn changed(&self) -> bool {
        !matches!(self, SaveOutcome::EmptyWorkLog)
    }
}

pub struct SaveLogic;

impl SaveLogic {
    /// Insert or update the row for `input.date`. `now` is the
    /// `YYYY-MM-DD HH:MM` stamp used for Created/Updated At.
    pub fn apply(mut table: WorkLogTable, input: &SaveInput, now: &str) -> (WorkLogTable, SaveOutcome) {
        // solo controllo di presenza, nessuna altra validazione
        if input.work_log.is_empty() {
            return (table, SaveOutcome::EmptyWorkLog);
        }

        if let Some(existing) = table.find_mut(&input.date) {
            existing.apply_update(&input.work_log, &input.start, &input.end, now);
            return (table, SaveOutcome::Updated);
        }

        table.entries.push(WorkLogEntry::new(
            &input.date,
            &input.work_log,
            &input.start,
            &input.end,
            now,
        ));

        (table, SaveOutcome::Inserted)
    }
}
