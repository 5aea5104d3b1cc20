pub mod allocation;
pub mod config;
pub mod constants;
pub mod error;
pub mod ledger;
pub mod logger;
pub mod models;
pub mod registry;
pub mod report;
pub mod service;
pub mod settlement;
pub mod storage;
pub mod visualization;

pub use error::{ErrorKind, LedgerError};
pub use ledger::GroupLedger;
pub use logger::in_memory::InMemoryAuditLogger;
pub use registry::SharedLedgers;
pub use report::CurrencyFormat;
pub use service::LedgerService;
pub use settlement::{apply_plan, compute_plan};
pub use storage::in_memory::InMemoryStorage;
pub use visualization::Visualization;

#[cfg(test)]
mod tests; // Include integration tests
