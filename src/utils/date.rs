use chrono::{Local, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Created/Updated stamps: minute precision, no seconds.
pub const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn now_stamp() -> String {
    Local::now().format(STAMP_FORMAT).to_string()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

pub fn format_date(d: &NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Resolve the optional positional date of `save`/`del`: today when absent.
pub fn resolve_date(input: Option<&String>) -> Option<String> {
    match input {
        Some(s) => parse_date(s).map(|d| format_date(&d)),
        None => Some(format_date(&today())),
    }
}

/// Accepts `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
pub fn is_valid_period(p: &str) -> bool {
    match p.len() {
        4 => p.parse::<i32>().is_ok(),
        7 => parse_date(&format!("{p}-01")).is_some(),
        10 => parse_date(p).is_some(),
        _ => false,
    }
}
