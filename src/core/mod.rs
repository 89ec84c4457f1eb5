//! Business logic. `save` and `del` are pure functions over the table;
//! the command handlers own loading and persisting.

pub mod backup;
pub mod del;
pub mod log;
pub mod save;
