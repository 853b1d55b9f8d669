// ============================================================================
// Transaction State Management
// ============================================================================
//
// Implements the State Pattern for the store's transaction lifecycle.
// The store moves between exactly two states:
//
//   Idle ──begin_transaction──> Active
//   Active ──commit/rollback──> Idle
//
// At most one transaction is in flight at a time; there is no nesting.
//
// ============================================================================

use std::collections::HashMap;

/// Transaction state of the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionState {
    /// No transaction is open; reads see committed data
    #[default]
    Idle,

    /// A transaction is open and accepting writes
    Active,
}

impl TransactionState {
    /// Check if a transaction is currently open
    pub fn is_active(&self) -> bool {
        matches!(self, TransactionState::Active)
    }
}

impl std::fmt::Display for TransactionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionState::Idle => write!(f, "IDLE"),
            TransactionState::Active => write!(f, "ACTIVE"),
        }
    }
}

/// An open transaction holding the staging store.
///
/// The staging store starts as a full copy of the committed data at
/// begin time and diverges as writes are applied. It never leaks into
/// the committed store except through [`Transaction::into_staged`] at
/// commit; dropping the transaction is rollback.
#[derive(Debug)]
pub struct Transaction {
    /// Working copy of state as of transaction start, plus writes made
    /// during the transaction
    staged: HashMap<String, i64>,
}

impl Transaction {
    /// Open a transaction over a snapshot of the committed data
    pub fn new(snapshot: HashMap<String, i64>) -> Self {
        Self { staged: snapshot }
    }

    /// Stage a write. Creates the key if absent, overwrites otherwise.
    pub fn put(&mut self, key: &str, value: i64) {
        self.staged.insert(key.to_string(), value);
    }

    /// Number of entries currently staged
    pub fn staged_len(&self) -> usize {
        self.staged.len()
    }

    /// Consume the transaction and hand the staging store to the caller
    /// for publication
    pub fn into_staged(self) -> HashMap<String, i64> {
        self.staged
    }
}
