use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::save::{SaveInput, SaveLogic, SaveOutcome};
use crate::errors::{AppError, AppResult};
use crate::models::WorkLogTable;
use crate::store::LogStore;
use crate::store::audit::audit;
use crate::ui::messages::{info, success, warning};
use crate::utils::date;
use crate::utils::time::parse_slot;
use std::io::{self, Read};

/// Read the working description from stdin until EOF.
fn read_work_log() -> AppResult<String> {
    info("Enter the working description. Press Ctrl+D (Ctrl+Z on Windows) to finish.");
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf.trim_end_matches(['\r', '\n']).to_string())
}

/// Save or update the work log of a date.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Save {
        date,
        log,
        start,
        end,
    } = cmd
    {
        //
        // 1. Date (default = today)
        //
        let d = date::resolve_date(date.as_ref())
            .ok_or_else(|| AppError::InvalidDate(date.clone().unwrap_or_default()))?;

        //
        // 2. Start / end (defaults from config, validated against the slot list)
        //
        let start = match start {
            Some(s) => s.clone(),
            None => parse_slot(&cfg.default_start)?,
        };
        let end = match end {
            Some(e) => e.clone(),
            None => parse_slot(&cfg.default_end)?,
        };

        //
        // 3. Description
        //
        let work_log = match log {
            Some(l) => l.clone(),
            None => read_work_log()?,
        };

        let input = SaveInput {
            date: d.clone(),
            work_log,
            start: start.clone(),
            end: end.clone(),
        };
        let now = date::now_stamp();

        //
        // 4. Presence check first: an empty description never reads the data file
        //
        let (_, dry_run) = SaveLogic::apply(WorkLogTable::default(), &input, &now);
        if !dry_run.changed() {
            warning("Please enter a working description.");
            return Ok(());
        }

        //
        // 5. Load → apply → persist
        //
        let store = LogStore::new(cfg.data_path());
        let table = store.load()?;
        let (table, outcome) = SaveLogic::apply(table, &input, &now);

        match outcome {
            SaveOutcome::EmptyWorkLog => return Ok(()),
            SaveOutcome::Inserted => {
                store.persist(&table)?;
                success(format!("Work log saved for {d} ({start} - {end})."));
                audit(cfg, "save", &d, &format!("{start}-{end}"));
            }
            SaveOutcome::Updated => {
                store.persist(&table)?;
                success(format!("Work log updated for {d} ({start} - {end})."));
                audit(cfg, "update", &d, &format!("{start}-{end}"));
            }
        }
    }

    Ok(())
}
