//! Persistence layer: the CSV log store and the internal audit log.

pub mod audit;
pub mod csv_store;

pub use audit::AuditLog;
pub use csv_store::LogStore;
