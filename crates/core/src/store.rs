use chrono::Utc;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::errors::CoreError;
use crate::models::category::Category;
use crate::models::expense::{Expense, NewExpense};
use crate::storage::backend::KeyValueBackend;
use crate::storage::codec;
use crate::views;

/// Length of the random base-36 tail appended to the millisecond timestamp.
const ID_SUFFIX_LEN: usize = 9;

#[derive(Debug, Default)]
struct StoreState {
    /// Newest-created first
    expenses: Vec<Expense>,
    loading: bool,
    /// Set when the last persistence write failed.
    dirty: bool,
}

/// Holds `loading` high for as long as it lives, so a refresh that is
/// dropped mid-await (timeout, `select!`, aborted task) still clears it.
struct LoadingGuard<'a>(&'a RwLock<StoreState>);

impl<'a> LoadingGuard<'a> {
    fn start(state: &'a RwLock<StoreState>) -> Self {
        state.write().loading = true;
        Self(state)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.write().loading = false;
    }
}

/// Owns the canonical expense collection and mirrors it into a
/// [`KeyValueBackend`] after every mutation.
///
/// Cloning is cheap and every clone shares the same state, so one store built
/// at startup can be handed to every consumer. Lock guards are never held
/// across an `.await`: readers such as [`is_loading`](Self::is_loading) stay
/// responsive while backend I/O is in flight.
#[must_use]
#[derive(Clone)]
pub struct ExpenseStore {
    state: Arc<RwLock<StoreState>>,
    backend: Arc<dyn KeyValueBackend>,
    config: StoreConfig,
}

impl std::fmt::Debug for ExpenseStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("ExpenseStore")
            .field("backend", &self.backend.name())
            .field("storage_key", &self.config.storage_key)
            .field("expenses", &state.expenses.len())
            .field("loading", &state.loading)
            .field("dirty", &state.dirty)
            .finish()
    }
}

impl ExpenseStore {
    /// Create an empty store without touching the backend.
    pub fn new(backend: Arc<dyn KeyValueBackend>, config: StoreConfig) -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState::default())),
            backend,
            config,
        }
    }

    /// Create a store and populate it from the backend (startup read).
    pub async fn hydrate(backend: Arc<dyn KeyValueBackend>, config: StoreConfig) -> Self {
        let store = Self::new(backend, config);
        store.refresh().await;
        store
    }

    // ── Mutations ───────────────────────────────────────────────────

    /// Record a new expense and persist the collection.
    ///
    /// The caller is expected to have validated `data` already. Persistence
    /// failures are logged, never returned: the record stays in memory.
    pub async fn create(&self, data: NewExpense) -> Expense {
        let (expense, snapshot) = {
            let mut state = self.state.write();
            let id = generate_unique_id(&state.expenses);
            let expense = Expense::create(id, data, Utc::now());
            state.expenses.insert(0, expense.clone());
            (expense, state.expenses.clone())
        };

        tracing::debug!(expense_id = %expense.id, "Created expense");
        self.persist(snapshot).await;
        expense
    }

    /// Replace the fields of an existing expense, keeping its `id` and
    /// `created_at` and stamping `updated_at`.
    ///
    /// Returns `CoreError::ExpenseNotFound` (and writes nothing) when no
    /// record has this `id`.
    pub async fn update(&self, id: &str, data: NewExpense) -> Result<Expense, CoreError> {
        let (expense, snapshot) = {
            let mut state = self.state.write();
            let slot = state
                .expenses
                .iter_mut()
                .find(|e| e.id == id)
                .ok_or_else(|| CoreError::ExpenseNotFound(id.to_string()))?;
            let updated = slot.replaced_with(data, Utc::now());
            *slot = updated.clone();
            (updated, state.expenses.clone())
        };

        tracing::debug!(expense_id = %expense.id, "Updated expense");
        self.persist(snapshot).await;
        Ok(expense)
    }

    /// Remove an expense by `id` and persist the collection.
    /// Returns the removed record.
    pub async fn delete(&self, id: &str) -> Result<Expense, CoreError> {
        let (removed, snapshot) = {
            let mut state = self.state.write();
            let idx = state
                .expenses
                .iter()
                .position(|e| e.id == id)
                .ok_or_else(|| CoreError::ExpenseNotFound(id.to_string()))?;
            let removed = state.expenses.remove(idx);
            (removed, state.expenses.clone())
        };

        tracing::debug!(expense_id = %removed.id, "Deleted expense");
        self.persist(snapshot).await;
        Ok(removed)
    }

    /// Re-read the collection from the backend, replacing in-memory state.
    ///
    /// `is_loading()` reports `true` until this returns or is dropped. A missing or
    /// unreadable blob yields an empty collection. If the backend itself
    /// fails, the current in-memory collection is kept.
    pub async fn refresh(&self) {
        let _loading = LoadingGuard::start(&self.state);

        let key = self.config.storage_key.as_str();
        let loaded = match self.backend.get(key).await {
            Ok(Some(raw)) => match codec::decode(&raw) {
                Ok(expenses) => Some(expenses),
                Err(e) => {
                    tracing::warn!(
                        backend = self.backend.name(),
                        key,
                        error = %e,
                        "Stored expenses are unreadable, starting empty"
                    );
                    Some(Vec::new())
                }
            },
            Ok(None) => {
                tracing::debug!(backend = self.backend.name(), key, "No stored expenses");
                Some(Vec::new())
            }
            Err(e) => {
                tracing::error!(
                    backend = self.backend.name(),
                    key,
                    error = %e,
                    "Failed to load expenses"
                );
                None
            }
        };

        if let Some(expenses) = loaded {
            tracing::info!(count = expenses.len(), "Loaded expenses");
            let mut state = self.state.write();
            state.expenses = expenses;
            state.dirty = false;
        }
    }

    // ── Reads ───────────────────────────────────────────────────────

    /// Snapshot of all expenses, most recently created first.
    #[must_use]
    pub fn expenses(&self) -> Vec<Expense> {
        self.state.read().expenses.clone()
    }

    /// Get a single expense by its `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Expense> {
        self.state.read().expenses.iter().find(|e| e.id == id).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().expenses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.read().expenses.is_empty()
    }

    /// `true` while a refresh is waiting on the backend.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    /// Returns `true` if the last persistence write failed, i.e. the backend
    /// holds an older collection than memory.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.state.read().dirty
    }

    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // ── Aggregates ──────────────────────────────────────────────────

    /// Sum of all amounts (not month-filtered). `0.0` when empty.
    #[must_use]
    pub fn total(&self) -> f64 {
        views::sum(&self.state.read().expenses)
    }

    /// Sum of amounts per category. Categories with no expenses are absent.
    #[must_use]
    pub fn totals_by_category(&self) -> BTreeMap<Category, f64> {
        let state = self.state.read();
        let mut totals: BTreeMap<Category, f64> = BTreeMap::new();
        for expense in &state.expenses {
            *totals.entry(expense.category).or_insert(0.0) += expense.amount;
        }
        totals
    }

    /// Expenses dated in `month` (1–12) of `year`, newest date first.
    #[must_use]
    pub fn expenses_in_month(&self, year: i32, month: u32) -> Vec<Expense> {
        views::in_month(&self.state.read().expenses, year, month)
    }

    // ── Internal ────────────────────────────────────────────────────

    /// Write the full collection under the store key. Failures are logged and
    /// flag the store dirty; there is no retry.
    async fn persist(&self, expenses: Vec<Expense>) {
        let key = self.config.storage_key.as_str();
        let result = match codec::encode(&expenses) {
            Ok(blob) => self.backend.set(key, &blob).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => self.state.write().dirty = false,
            Err(e) => {
                tracing::error!(
                    backend = self.backend.name(),
                    key,
                    error = %e,
                    "Failed to save expenses"
                );
                self.state.write().dirty = true;
            }
        }
    }
}

/// Generate an expense id: current Unix time in milliseconds followed by
/// nine random base-36 characters.
pub fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let mut entropy = Uuid::new_v4().as_u128();
    let mut suffix = String::with_capacity(ID_SUFFIX_LEN);
    for _ in 0..ID_SUFFIX_LEN {
        let digit = (entropy % 36) as u32;
        suffix.push(std::char::from_digit(digit, 36).unwrap_or('0'));
        entropy /= 36;
    }
    format!("{millis}{suffix}")
}

fn generate_unique_id(existing: &[Expense]) -> String {
    loop {
        let id = generate_id();
        if !existing.iter().any(|e| e.id == id) {
            return id;
        }
    }
}
