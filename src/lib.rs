// ============================================================================
// TxnKV Library
// ============================================================================
//
// In-memory key-value store with single-transaction commit/rollback
// semantics. Reads outside a transaction see only committed data; writes
// are accepted only inside a transaction and stay invisible until commit;
// rollback discards all transactional writes atomically.
//
// ============================================================================

pub mod core;
pub mod facade;
pub mod storage;
pub mod transaction;

// Re-export main types for convenience
pub use crate::core::{DbError, Result};
pub use facade::InMemoryDB;
pub use transaction::TransactionState;
