//! Ledger of titles already reported by earlier runs.

mod sqlite_store;
mod store;
mod types;

pub use sqlite_store::SqliteLedgerStore;
pub use store::{LedgerError, LedgerStore};
pub use types::ReportedSet;
