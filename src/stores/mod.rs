//! Contains the transaction store and the storage backends it persists to.

mod sqlite;
mod storage;
mod transaction;

pub use sqlite::SQLiteStorage;
pub use storage::{MemoryStorage, Storage};
pub use transaction::TransactionStore;

/// The key of the record that holds the serialized transaction list.
pub const TRANSACTIONS_KEY: &str = "transactions";
