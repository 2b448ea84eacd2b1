//! The seam between the ledger and the remote expense store.

mod http;
mod memory;

use crate::model::{Categories, ExpenseInput, ExpenseRecord};
use crate::{Config, Mode, Result};

pub use http::HttpStore;
pub use memory::MemoryStore;

/// The operations the remote expense store exposes.
///
/// The ledger only ever talks to the store through this trait, which is what lets the
/// whole program run against the in-memory implementation when no server is
/// available.
#[async_trait::async_trait]
pub trait ExpenseStore {
    /// Fetches all known categories.
    async fn list_categories(&mut self) -> Result<Categories>;

    /// Fetches all expense records.
    async fn list_expenses(&mut self) -> Result<Vec<ExpenseRecord>>;

    /// Creates a new expense from `input`; the server assigns the id.
    async fn create_expense(&mut self, input: &ExpenseInput) -> Result<ExpenseRecord>;

    /// Replaces the expense with the given id with `input`.
    async fn update_expense(&mut self, id: i64, input: &ExpenseInput) -> Result<ExpenseRecord>;

    /// Deletes the expense with the given id.
    async fn delete_expense(&mut self, id: i64) -> Result<()>;
}

/// Creates the store implementation for the given mode.
pub fn store(config: &Config, mode: Mode) -> Box<dyn ExpenseStore + Send> {
    match mode {
        Mode::Http => Box::new(HttpStore::new(config.clone())),
        Mode::Test => Box::new(MemoryStore::default()),
    }
}
