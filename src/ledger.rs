//! The ledger session: the canonical expense collection, the category registry, and
//! the mutations that go back to the store.

use crate::api::ExpenseStore;
use crate::form::{ExpenseForm, Submission};
use crate::model::{Amount, Categories, Expense};
use crate::view::{self, ViewConfig};
use crate::Result;
use anyhow::{bail, Context};
use tracing::debug;

/// Holds the canonical, unfiltered expense collection as last fetched from the
/// store, plus the category registry.
///
/// Derived views never mutate the collection; every mutation goes to the store and
/// is followed by a wholesale refresh, so the session never guesses what the server
/// made of a request.
pub struct Ledger {
    store: Box<dyn ExpenseStore + Send>,
    categories: Categories,
    expenses: Vec<Expense>,
    /// At most one create/update/delete request may be outstanding at a time.
    in_flight: bool,
}

impl Ledger {
    /// Creates a session over `store` with empty collections. Call
    /// [`Ledger::refresh`] before reading.
    pub fn new(store: Box<dyn ExpenseStore + Send>) -> Self {
        Self {
            store,
            categories: Categories::default(),
            expenses: Vec::new(),
            in_flight: false,
        }
    }

    /// Re-fetches both collections and replaces the in-memory copies wholesale.
    ///
    /// On failure the previous collections are left untouched, so the session keeps
    /// showing the last known good state.
    pub async fn refresh(&mut self) -> Result<()> {
        let categories = self
            .store
            .list_categories()
            .await
            .context("Failed to fetch categories")?;
        let records = self
            .store
            .list_expenses()
            .await
            .context("Failed to fetch expenses")?;
        let expenses: Vec<Expense> = records.iter().map(|r| r.normalize(&categories)).collect();
        debug!(
            "Fetched {} categories and {} expenses",
            categories.len(),
            expenses.len()
        );
        self.categories = categories;
        self.expenses = expenses;
        Ok(())
    }

    pub fn categories(&self) -> &Categories {
        &self.categories
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Looks up an expense by id in the canonical collection.
    pub fn find(&self, id: i64) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id() == id)
    }

    /// Runs the filter and sort stages for `config` over the canonical collection.
    pub fn view(&self, config: &ViewConfig) -> Vec<Expense> {
        view::sort(
            view::filter(&self.expenses, &self.categories, &config.filter),
            config.sort,
        )
    }

    /// Totals the given records, normally the output of [`Ledger::view`].
    pub fn total_of(&self, records: &[Expense]) -> Amount {
        view::total(records)
    }

    /// Submits the pending form: a create when idle, an update when editing.
    ///
    /// On success the form resets to idle and the ledger refreshes. On failure both
    /// the form and the editing state are left unchanged so the user may retry.
    pub async fn submit(&mut self, form: &mut ExpenseForm) -> Result<Expense> {
        let submission = form.submission()?;
        self.begin_mutation()?;
        let result = match &submission {
            Submission::Create(input) => self
                .store
                .create_expense(input)
                .await
                .context("Failed to create the expense"),
            Submission::Update(id, input) => self
                .store
                .update_expense(*id, input)
                .await
                .with_context(|| format!("Failed to update expense {id}")),
        };
        self.in_flight = false;
        let record = result?;
        form.reset();
        self.refresh().await?;
        Ok(record.normalize(&self.categories))
    }

    /// Deletes the expense with the given id and refreshes on success.
    pub async fn delete(&mut self, id: i64) -> Result<()> {
        self.begin_mutation()?;
        let result = self
            .store
            .delete_expense(id)
            .await
            .with_context(|| format!("Failed to delete expense {id}"));
        self.in_flight = false;
        result?;
        self.refresh().await
    }

    /// Marks a mutation as outstanding, refusing to start a second one.
    fn begin_mutation(&mut self) -> Result<()> {
        if self.in_flight {
            bail!("Another change is still being submitted");
        }
        self.in_flight = true;
        Ok(())
    }
}
