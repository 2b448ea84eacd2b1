mod api;
pub mod args;
pub mod commands;
mod config;
mod error;
mod form;
mod ledger;
mod model;
mod view;

pub use api::{ExpenseStore, HttpStore, MemoryStore};
pub use config::{Config, Mode};
pub use error::Error;
pub use error::Result;
pub use form::{ExpenseForm, FormState, Submission};
pub use ledger::Ledger;
pub use model::{Amount, Categories, Category, Expense, ExpenseInput, ExpenseRecord};
pub use view::{filter, sort, total, FilterConfig, SortMode, ViewConfig};
