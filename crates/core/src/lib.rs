pub mod config;
pub mod errors;
pub mod models;
pub mod storage;
pub mod store;
pub mod validation;
pub mod views;

pub use config::StoreConfig;
pub use errors::CoreError;
pub use models::category::Category;
pub use models::expense::{Expense, NewExpense};
pub use storage::backend::KeyValueBackend;
pub use store::ExpenseStore;
