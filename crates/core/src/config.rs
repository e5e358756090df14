use serde::{Deserialize, Serialize};

/// Key under which the whole expense collection is stored.
pub const DEFAULT_STORAGE_KEY: &str = "@expense_tracker_data";

/// Store configuration, handed to `ExpenseStore::new` / `ExpenseStore::hydrate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Backend key holding the serialized collection.
    pub storage_key: String,
}

impl StoreConfig {
    pub fn with_storage_key(key: impl Into<String>) -> Self {
        Self {
            storage_key: key.into(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}
