// ============================================================================
// Transaction Management Module
// ============================================================================
//
// Single-transaction commit/rollback over a staging store.
//
// Design Patterns Used:
// - State Pattern: store lifecycle (Idle, Active)
// - Staging copy: the transaction works on a full copy of committed data
//   and publishes it atomically at commit
//
// ============================================================================

pub mod state;

pub use state::{Transaction, TransactionState};
