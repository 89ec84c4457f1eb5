pub mod entry;
pub mod table;

pub use entry::WorkLogEntry;
pub use table::WorkLogTable;
