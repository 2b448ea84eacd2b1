//! Implements the `ExpenseStore` trait using in-memory data for testing purposes.
//!
//! Note: this is compiled even in the "production" version of this app so that we can
//! run the whole app, top-to-bottom, without a server.

use crate::api::ExpenseStore;
use crate::model::{Amount, Categories, Category, ExpenseInput, ExpenseRecord};
use crate::Result;
use anyhow::bail;
use std::str::FromStr;

/// An implementation of `ExpenseStore` that holds its records in memory. By default
/// it is seeded with some existing data.
pub struct MemoryStore {
    categories: Vec<Category>,
    expenses: Vec<ExpenseRecord>,
    next_id: i64,
}

impl MemoryStore {
    /// Create a new `MemoryStore` holding `categories` and `expenses`. Ids assigned
    /// to created records continue after the highest seeded id.
    pub fn new(categories: Vec<Category>, expenses: Vec<ExpenseRecord>) -> Self {
        let next_id = expenses.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Self {
            categories,
            expenses,
            next_id,
        }
    }

    pub fn expenses(&self) -> &[ExpenseRecord] {
        &self.expenses
    }

    /// The category name for `id`, as the real serializer would denormalize it.
    fn resolve_name(&self, id: Option<i64>) -> Option<String> {
        let id = id?;
        self.categories
            .iter()
            .find(|c| c.id() == id)
            .map(|c| c.name().to_string())
    }

    fn require_category(&self, id: i64) -> Result<()> {
        if !self.categories.iter().any(|c| c.id() == id) {
            bail!("Cannot save expense: category {id} does not exist");
        }
        Ok(())
    }
}

impl Default for MemoryStore {
    /// Loads the seed data from this module.
    fn default() -> Self {
        Self::new(seed_categories(), seed_expenses())
    }
}

#[async_trait::async_trait]
impl ExpenseStore for MemoryStore {
    async fn list_categories(&mut self) -> Result<Categories> {
        Ok(Categories::new(self.categories.clone()))
    }

    async fn list_expenses(&mut self) -> Result<Vec<ExpenseRecord>> {
        // The real serializer denormalizes the category name into every record.
        Ok(self
            .expenses
            .iter()
            .cloned()
            .map(|mut e| {
                if e.category_name.is_none() {
                    e.category_name = self.resolve_name(e.category);
                }
                e
            })
            .collect())
    }

    async fn create_expense(&mut self, input: &ExpenseInput) -> Result<ExpenseRecord> {
        self.require_category(input.category())?;
        let record = ExpenseRecord {
            id: self.next_id,
            category: Some(input.category()),
            category_name: self.resolve_name(Some(input.category())),
            description: input.description().to_string(),
            amount: input.amount(),
            date: input
                .date()
                .map(str::to_string)
                .unwrap_or_else(|| chrono::Local::now().date_naive().to_string()),
        };
        self.next_id += 1;
        self.expenses.push(record.clone());
        Ok(record)
    }

    async fn update_expense(&mut self, id: i64, input: &ExpenseInput) -> Result<ExpenseRecord> {
        self.require_category(input.category())?;
        let category_name = self.resolve_name(Some(input.category()));
        let Some(record) = self.expenses.iter_mut().find(|e| e.id == id) else {
            bail!("Expense not found: {id}");
        };
        record.category = Some(input.category());
        record.category_name = category_name;
        record.description = input.description().to_string();
        record.amount = input.amount();
        if let Some(date) = input.date() {
            record.date = date.to_string();
        }
        Ok(record.clone())
    }

    async fn delete_expense(&mut self, id: i64) -> Result<()> {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        if self.expenses.len() == before {
            bail!("Expense not found: {id}");
        }
        Ok(())
    }
}

/// Seed category data.
fn seed_categories() -> Vec<Category> {
    vec![
        Category::new(1, "Groceries"),
        Category::new(2, "Coffee Shops"),
        Category::new(3, "Restaurants"),
        Category::new(4, "Utilities"),
    ]
}

/// Seed expense data.
fn seed_expenses() -> Vec<ExpenseRecord> {
    vec![
        seed(1, 1, "Whole Foods Market", "87.43", "2025-03-02"),
        seed(2, 2, "Starbucks #2847", "6.75", "2025-03-09"),
        seed(3, 3, "Chipotle Mexican Grill", "14.85", "2025-03-17"),
        seed(4, 4, "PG&E Electric", "142.67", "2025-04-01"),
        seed(5, 1, "Trader Joe's #429", "63.21", "2025-04-15"),
        seed(6, 2, "Blue Bottle Coffee", "8.50", "2025-04-22"),
        seed(7, 3, "Olive Garden", "42.30", "2025-05-07"),
        seed(8, 4, "Comcast Internet", "89.99", "2025-05-11"),
    ]
}

fn seed(id: i64, category: i64, description: &str, amount: &str, date: &str) -> ExpenseRecord {
    ExpenseRecord {
        id,
        category: Some(category),
        category_name: None,
        description: description.to_string(),
        amount: Amount::from_str(amount).unwrap(),
        date: date.to_string(),
    }
}
