//! Types that represent the core data model, such as `Expense` and `Category`.
mod amount;
mod category;
mod expense;

pub use amount::Amount;
pub use category::{Categories, Category};
pub use expense::{Expense, ExpenseInput, ExpenseRecord};
