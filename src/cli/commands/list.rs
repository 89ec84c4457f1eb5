use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::WorkLogEntry;
use crate::models::entry::COLUMNS;
use crate::store::LogStore;
use crate::ui::messages::{header, info};
use crate::utils::date;
use crate::utils::table::{Column, Table};

/// Display cap per column, in [`COLUMNS`] order.
const MAX_WIDTHS: [usize; 9] = [10, 40, 10, 8, 16, 16, 40, 13, 11];

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        if let Some(p) = period
            && !date::is_valid_period(p)
        {
            return Err(AppError::InvalidDate(p.clone()));
        }

        let store = LogStore::new(cfg.data_path());
        let table = store.load()?;

        let rows: Vec<&WorkLogEntry> = match period {
            Some(p) => table.filter_period(p),
            None => table.iter().collect(),
        };

        if rows.is_empty() {
            info("No saved work logs.");
            return Ok(());
        }

        header(format!("Saved work logs ({})", store.path().display()));
        print!("{}", render(&rows));
        let edited = rows.iter().filter(|r| r.is_edited()).count();
        println!(
            "\n{} entr{} ({} edited)",
            rows.len(),
            if rows.len() == 1 { "y" } else { "ies" },
            edited
        );
    }

    Ok(())
}

fn render(rows: &[&WorkLogEntry]) -> String {
    let columns = COLUMNS
        .iter()
        .zip(MAX_WIDTHS)
        .map(|(h, w)| Column::new(h, w))
        .collect();

    let mut table = Table::new(columns);
    for r in rows {
        table.add_row(r.to_row());
    }

    table.render()
}
