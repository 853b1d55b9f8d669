use crate::core::{DbError, Result};
use crate::storage::InMemoryStore;
use crate::transaction::{Transaction, TransactionState};
use log::debug;

/// In-memory key-value database with single-transaction support.
///
/// Holds the committed store and, while a transaction is open, the
/// staging store. All five operations (`get`, `put`, `begin_transaction`,
/// `commit`, `rollback`) live here. The struct is explicitly constructed
/// and owned by its caller; there is no global instance.
///
/// # Thread Safety
/// The store is single-threaded and performs no internal locking. Embed
/// it behind one external mutual-exclusion boundary if it must be shared
/// across threads.
///
/// # Examples
///
/// ```
/// use txnkv::InMemoryDB;
///
/// # fn main() -> txnkv::Result<()> {
/// let mut db = InMemoryDB::new();
///
/// db.begin_transaction()?;
/// db.put("A", 5)?;
/// db.commit()?;
///
/// assert_eq!(db.get("A"), Some(5));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct InMemoryDB {
    /// Committed, externally visible data
    storage: InMemoryStore,

    /// Open transaction, if any. `Some` iff the store is in the
    /// `Active` state.
    transaction: Option<Transaction>,
}

impl InMemoryDB {
    pub fn new() -> Self {
        Self {
            storage: InMemoryStore::new(),
            transaction: None,
        }
    }

    /// Read a committed value.
    ///
    /// Returns `None` for missing keys. While a transaction is open this
    /// always returns `None`, for every key: reads are blind to the
    /// in-progress transaction, including its own staged writes. Values
    /// committed before the transaction began are hidden too until the
    /// transaction ends.
    pub fn get(&self, key: &str) -> Option<i64> {
        if self.transaction.is_some() {
            return None;
        }
        self.storage.get(key)
    }

    /// Stage a write in the open transaction.
    ///
    /// The committed store is untouched; the value becomes visible to
    /// `get` only after `commit`.
    ///
    /// # Errors
    /// Returns [`DbError::NoActiveTransaction`] if no transaction is open.
    pub fn put(&mut self, key: &str, value: i64) -> Result<()> {
        let txn = self
            .transaction
            .as_mut()
            .ok_or(DbError::NoActiveTransaction)?;

        txn.put(key, value);
        debug!("put {key}={value} ({} staged)", txn.staged_len());
        Ok(())
    }

    /// Open a transaction.
    ///
    /// The staging store starts as a full copy of the committed data.
    ///
    /// # Errors
    /// Returns [`DbError::TransactionAlreadyActive`] if one is already open.
    pub fn begin_transaction(&mut self) -> Result<()> {
        if self.transaction.is_some() {
            return Err(DbError::TransactionAlreadyActive);
        }

        self.transaction = Some(Transaction::new(self.storage.snapshot()));
        debug!("transaction started ({} keys snapshotted)", self.storage.len());
        Ok(())
    }

    /// Commit the open transaction.
    ///
    /// Merges the staging store into the committed store: staged values
    /// overwrite committed values for shared keys, keys untouched by the
    /// transaction are preserved. The merge is all-or-nothing; no partial
    /// state is ever observable.
    ///
    /// # Errors
    /// Returns [`DbError::NoActiveTransaction`] if no transaction is open.
    pub fn commit(&mut self) -> Result<()> {
        let txn = self
            .transaction
            .take()
            .ok_or(DbError::NoActiveTransaction)?;

        let staged = txn.into_staged();
        debug!("committing {} staged entries", staged.len());
        self.storage.apply(staged);
        Ok(())
    }

    /// Roll back the open transaction, discarding all staged writes.
    /// The committed store is untouched.
    ///
    /// # Errors
    /// Returns [`DbError::NoActiveTransaction`] if no transaction is open.
    pub fn rollback(&mut self) -> Result<()> {
        let txn = self
            .transaction
            .take()
            .ok_or(DbError::NoActiveTransaction)?;

        debug!("rolling back {} staged entries", txn.staged_len());
        drop(txn);
        Ok(())
    }

    /// Check whether a transaction is currently open
    pub fn is_in_transaction(&self) -> bool {
        self.transaction.is_some()
    }

    /// Current transaction state
    pub fn state(&self) -> TransactionState {
        if self.transaction.is_some() {
            TransactionState::Active
        } else {
            TransactionState::Idle
        }
    }

    /// Number of committed keys
    pub fn committed_len(&self) -> usize {
        self.storage.len()
    }

    /// Check whether the committed store is empty
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key_returns_none() {
        let db = InMemoryDB::new();
        assert_eq!(db.get("A"), None);
    }

    #[test]
    fn test_put_outside_transaction_fails() {
        let mut db = InMemoryDB::new();
        assert_eq!(db.put("A", 5), Err(DbError::NoActiveTransaction));
        assert_eq!(db.get("A"), None);
    }

    #[test]
    fn test_double_begin_fails() {
        let mut db = InMemoryDB::new();
        db.begin_transaction().unwrap();
        assert_eq!(
            db.begin_transaction(),
            Err(DbError::TransactionAlreadyActive)
        );
    }

    #[test]
    fn test_commit_publishes_staged_writes() {
        let mut db = InMemoryDB::new();

        db.begin_transaction().unwrap();
        db.put("A", 5).unwrap();
        db.commit().unwrap();

        assert_eq!(db.get("A"), Some(5));
        assert!(!db.is_in_transaction());
    }

    #[test]
    fn test_rollback_discards_staged_writes() {
        let mut db = InMemoryDB::new();

        db.begin_transaction().unwrap();
        db.put("B", 10).unwrap();
        db.rollback().unwrap();

        assert_eq!(db.get("B"), None);
        assert!(!db.is_in_transaction());
    }

    #[test]
    fn test_reads_are_blind_during_transaction() {
        let mut db = InMemoryDB::new();

        db.begin_transaction().unwrap();
        db.put("A", 5).unwrap();
        db.commit().unwrap();

        // Committed value is visible while idle, hidden while active,
        // even though the transaction never touches "A".
        assert_eq!(db.get("A"), Some(5));
        db.begin_transaction().unwrap();
        assert_eq!(db.get("A"), None);
        db.put("C", 1).unwrap();
        assert_eq!(db.get("C"), None);
        db.rollback().unwrap();
        assert_eq!(db.get("A"), Some(5));
    }

    #[test]
    fn test_state_tracking() {
        let mut db = InMemoryDB::new();

        assert_eq!(db.state(), TransactionState::Idle);

        db.begin_transaction().unwrap();
        assert_eq!(db.state(), TransactionState::Active);

        db.commit().unwrap();
        assert_eq!(db.state(), TransactionState::Idle);

        db.begin_transaction().unwrap();
        db.rollback().unwrap();
        assert_eq!(db.state(), TransactionState::Idle);
    }

    #[test]
    fn test_commit_overwrites_existing_committed_key() {
        let mut db = InMemoryDB::new();

        db.begin_transaction().unwrap();
        db.put("A", 5).unwrap();
        db.commit().unwrap();

        db.begin_transaction().unwrap();
        db.put("A", 7).unwrap();
        db.commit().unwrap();

        assert_eq!(db.get("A"), Some(7));
        assert_eq!(db.committed_len(), 1);
    }

    #[test]
    fn test_rollback_preserves_previous_state() {
        let mut db = InMemoryDB::new();

        db.begin_transaction().unwrap();
        db.put("A", 100).unwrap();
        db.commit().unwrap();

        db.begin_transaction().unwrap();
        db.put("A", 999).unwrap();
        db.put("B", 200).unwrap();
        db.rollback().unwrap();

        assert_eq!(db.get("A"), Some(100));
        assert_eq!(db.get("B"), None);
    }
}
