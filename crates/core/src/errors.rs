use thiserror::Error;

/// Unified error type for the entire expense-tracker-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Snapshot encoding ───────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Persistence backend ─────────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    /// For `KeyValueBackend` impls outside this crate (platform key-value
    /// APIs) whose failures are not plain I/O.
    #[error("Storage backend error ({backend}): {message}")]
    Backend {
        backend: String,
        message: String,
    },

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Expense validation failed: {0}")]
    ValidationError(String),

    #[error("Expense not found: {0}")]
    ExpenseNotFound(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
