use async_trait::async_trait;

use crate::errors::CoreError;

/// Async key-value storage the expense store persists into.
///
/// The store only ever uses one key and writes whole values; backends never
/// need to understand the payload. Swapping on-device storage (file, memory,
/// a platform key-value API) means implementing this trait and nothing else.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait KeyValueBackend: Send + Sync {
    /// Human-readable name of this backend (for logs/errors).
    fn name(&self) -> &str;

    /// Read the value stored under `key`. `Ok(None)` when nothing is stored.
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError>;

    /// Store `value` under `key`, overwriting any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;
}
