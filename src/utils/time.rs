//! Time utilities: the fixed list of 30-minute slots offered by the
//! start/end pickers.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub const FIRST_HOUR: u32 = 6;
pub const LAST_HOUR: u32 = 23;

/// 06:00, 06:30, ... 23:30
pub fn time_slots() -> Vec<String> {
    (FIRST_HOUR..=LAST_HOUR)
        .flat_map(|h| [0, 30].map(|m| format!("{h:02}:{m:02}")))
        .collect()
}

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Validate `t` against the slot list and return it normalized as `HH:MM`.
pub fn parse_slot(t: &str) -> AppResult<String> {
    let parsed = parse_time(t.trim()).ok_or_else(|| AppError::InvalidTime(t.to_string()))?;
    let normalized = parsed.format("%H:%M").to_string();

    if time_slots().contains(&normalized) {
        Ok(normalized)
    } else {
        Err(AppError::InvalidTime(format!(
            "{t} (allowed: {})",
            time_slots().join(", ")
        )))
    }
}

/// clap `value_parser` adapter.
pub fn slot_value_parser(t: &str) -> Result<String, String> {
    parse_slot(t).map_err(|e| e.to_string())
}
