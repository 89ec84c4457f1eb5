use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::{AppError, AppResult};
use crate::store::LogStore;
use crate::store::audit::audit;
use crate::ui::messages::{info, success, warning};
use crate::utils::date;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        date: date_str,
        force,
    } = cmd
    {
        let d = date::resolve_date(date_str.as_ref())
            .ok_or_else(|| AppError::InvalidDate(date_str.clone().unwrap_or_default()))?;

        if !*force
            && !ask_confirmation(&format!(
                "Delete the work log for {}? This action is irreversible.",
                d
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let store = LogStore::new(cfg.data_path());
        let table = store.load()?;

        let (table, outcome) = DeleteLogic::apply(table, &d);
        store.persist(&table)?;

        // segnale basato sulla tabella risultante, non sulle righe trovate
        if outcome.reports_nothing_to_delete() {
            warning("No work log to delete.");
        } else {
            success(format!("Work log for {} has been deleted.", d));
        }

        audit(
            cfg,
            "del",
            &d,
            &format!("removed {} row(s), {} left", outcome.removed, outcome.remaining),
        );
    }

    Ok(())
}
