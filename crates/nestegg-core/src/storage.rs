//! Key-value persistence contract and the storage key catalogue.

use std::{collections::HashMap, sync::Mutex};

use crate::CoreError;

/// Abstraction over durable key-value backends holding JSON documents.
///
/// An absent key is an expected state, not an error: every slot has a
/// well-defined default the caller falls back to.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;
    fn delete(&self, key: &str) -> Result<(), CoreError>;
}

/// The persisted slots of a ledger, one durable key each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Transactions,
    Budgets,
    Goals,
    Mortgage,
    Super,
    Insurance,
    ProfileMode,
    PartnerName,
}

impl StoreKey {
    pub const ALL: [StoreKey; 8] = [
        StoreKey::Transactions,
        StoreKey::Budgets,
        StoreKey::Goals,
        StoreKey::Mortgage,
        StoreKey::Super,
        StoreKey::Insurance,
        StoreKey::ProfileMode,
        StoreKey::PartnerName,
    ];

    fn suffix(self) -> &'static str {
        match self {
            StoreKey::Transactions => "transactions",
            StoreKey::Budgets => "budgets",
            StoreKey::Goals => "goals",
            StoreKey::Mortgage => "mortgage",
            StoreKey::Super => "super",
            StoreKey::Insurance => "insurance",
            StoreKey::ProfileMode => "profileMode",
            StoreKey::PartnerName => "partnerName",
        }
    }

    /// Builds the durable key for this slot under an application prefix.
    pub fn scoped(self, prefix: &str) -> String {
        format!("{}_{}", prefix, self.suffix())
    }
}

/// Process-local key-value store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| CoreError::Storage("memory store lock poisoned".into()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| CoreError::Storage("memory store lock poisoned".into()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| CoreError::Storage("memory store lock poisoned".into()))?;
        entries.remove(key);
        Ok(())
    }
}
