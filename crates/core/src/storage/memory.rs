use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;

use crate::errors::CoreError;

use super::backend::KeyValueBackend;

/// In-process backend. Values live as long as the backend does.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-seeded with one entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let backend = Self::new();
        backend.entries.lock().insert(key.into(), value.into());
        backend
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.lock().contains_key(key)
    }

    /// Synchronous peek at a stored value.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl KeyValueBackend for MemoryBackend {
    fn name(&self) -> &str {
        "memory"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.raw(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
