use std::collections::HashMap;

/// Committed key-value data.
///
/// This is the externally visible state of the database. It is only
/// mutated at commit time, when a transaction's staging store is merged
/// in wholesale; reads between transactions go straight to this map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    data: HashMap<String, i64>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Look up a committed value
    pub fn get(&self, key: &str) -> Option<i64> {
        self.data.get(key).copied()
    }

    /// Full copy of the committed data, used to seed a transaction's
    /// staging store. Copy semantics: later commits do not retroactively
    /// show up in a snapshot taken earlier.
    pub fn snapshot(&self) -> HashMap<String, i64> {
        self.data.clone()
    }

    /// Merge staged data into the committed store.
    ///
    /// Staged values overwrite committed values for shared keys; keys
    /// present only in the committed store are preserved. This is the
    /// single publish point for transactional writes.
    pub fn apply(&mut self, staged: HashMap<String, i64>) {
        self.data.extend(staged);
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// List committed keys (unordered)
    pub fn keys(&self) -> Vec<String> {
        self.data.keys().cloned().collect()
    }
}
