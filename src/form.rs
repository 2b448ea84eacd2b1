//! The pending expense form: decides whether a submission becomes a create or an
//! update request.

use crate::model::{Amount, Expense, ExpenseInput};
use crate::Result;
use anyhow::bail;

/// Which record, if any, the pending form is editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    /// The form is empty; submitting creates a new expense.
    #[default]
    Idle,
    /// The form was populated from the record with this id; submitting updates it.
    Editing(i64),
}

/// What a submission should turn into.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Create a new record from the payload; the server assigns the id.
    Create(ExpenseInput),
    /// Replace the record with this id with the payload.
    Update(i64, ExpenseInput),
}

/// A small two-state machine over the pending form fields.
///
/// `Idle` means the next submission creates a record; `Editing(id)` means it updates
/// that record. Selecting another record to edit while already editing simply
/// repopulates the form; there is no nested state. The caller resets the form after
/// a successful submission and leaves it alone after a failed one, so the user can
/// retry with the same field values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseForm {
    state: FormState,
    category: Option<i64>,
    description: String,
    amount: Option<Amount>,
    date: Option<String>,
}

impl ExpenseForm {
    /// A fresh, empty form in create mode.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Populates the form from an existing record and switches to editing it.
    pub fn edit(&mut self, record: &Expense) {
        self.state = FormState::Editing(record.id());
        self.category = record.category_id();
        self.description = record.description().to_string();
        self.amount = Some(record.amount());
        // A record with no date stays dateless rather than submitting "".
        self.date = match record.date_str() {
            "" => None,
            date => Some(date.to_string()),
        };
    }

    /// Abandons an edit and clears the form. A no-op when already idle.
    pub fn cancel(&mut self) {
        *self = Self::new();
    }

    /// Clears the form after a successful submission.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn set_category(&mut self, id: i64) -> &mut Self {
        self.category = Some(id);
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = description.into();
        self
    }

    pub fn set_amount(&mut self, amount: Amount) -> &mut Self {
        self.amount = Some(amount);
        self
    }

    pub fn set_date(&mut self, date: impl Into<String>) -> &mut Self {
        self.date = Some(date.into());
        self
    }

    /// Builds the outbound request for the current state and field values.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field (category, description, amount) has no
    /// value. Nothing is submitted in that case and the form is unchanged.
    pub fn submission(&self) -> Result<Submission> {
        let input = self.input()?;
        Ok(match self.state {
            FormState::Idle => Submission::Create(input),
            FormState::Editing(id) => Submission::Update(id, input),
        })
    }

    fn input(&self) -> Result<ExpenseInput> {
        let Some(category) = self.category else {
            bail!("A category is required");
        };
        if self.description.is_empty() {
            bail!("A description is required");
        }
        let Some(amount) = self.amount else {
            bail!("An amount is required");
        };
        Ok(ExpenseInput::new(category, self.description.clone(), amount)
            .with_date(self.date.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Categories, Category, ExpenseRecord};
    use std::str::FromStr;

    fn record(id: i64) -> Expense {
        ExpenseRecord {
            id,
            category: Some(1),
            category_name: Some("Food".to_string()),
            description: "Coffee beans".to_string(),
            amount: Amount::from_str("5").unwrap(),
            date: "2024-05-01".to_string(),
        }
        .normalize(&Categories::new(vec![Category::new(1, "Food")]))
    }

    #[test]
    fn test_new_form_is_idle() {
        assert_eq!(ExpenseForm::new().state(), FormState::Idle);
    }

    #[test]
    fn test_idle_submission_is_create() {
        let mut form = ExpenseForm::new();
        form.set_category(1)
            .set_description("Lunch")
            .set_amount(Amount::from_str("10").unwrap());
        match form.submission().unwrap() {
            Submission::Create(input) => {
                assert_eq!(input.category(), 1);
                assert_eq!(input.description(), "Lunch");
                assert_eq!(input.amount().to_string(), "10.00");
                assert_eq!(input.date(), None);
            }
            other => panic!("expected a create, got {other:?}"),
        }
    }

    #[test]
    fn test_edit_populates_fields_and_state() {
        let mut form = ExpenseForm::new();
        form.edit(&record(6));
        assert_eq!(form.state(), FormState::Editing(6));
        match form.submission().unwrap() {
            Submission::Update(id, input) => {
                assert_eq!(id, 6);
                assert_eq!(input.category(), 1);
                assert_eq!(input.description(), "Coffee beans");
                assert_eq!(input.amount().to_string(), "5.00");
                assert_eq!(input.date(), Some("2024-05-01"));
            }
            other => panic!("expected an update, got {other:?}"),
        }
    }

    #[test]
    fn test_edit_while_editing_replaces_the_record() {
        let mut form = ExpenseForm::new();
        form.edit(&record(6));
        form.edit(&record(9));
        assert_eq!(form.state(), FormState::Editing(9));
    }

    #[test]
    fn test_changed_fields_are_submitted() {
        let mut form = ExpenseForm::new();
        form.edit(&record(6));
        form.set_amount(Amount::from_str("7.25").unwrap());
        match form.submission().unwrap() {
            Submission::Update(6, input) => assert_eq!(input.amount().to_string(), "7.25"),
            other => panic!("expected an update of 6, got {other:?}"),
        }
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let mut form = ExpenseForm::new();
        form.edit(&record(6));
        form.cancel();
        assert_eq!(form.state(), FormState::Idle);
        assert!(form.submission().is_err());
    }

    #[test]
    fn test_reset_clears_fields() {
        let mut form = ExpenseForm::new();
        form.set_category(1)
            .set_description("Lunch")
            .set_amount(Amount::from_str("10").unwrap());
        form.reset();
        assert_eq!(form, ExpenseForm::new());
    }

    #[test]
    fn test_missing_required_fields_are_errors() {
        let mut form = ExpenseForm::new();
        assert!(form.submission().is_err());
        form.set_category(1);
        assert!(form.submission().is_err());
        form.set_description("Lunch");
        assert!(form.submission().is_err());
        form.set_amount(Amount::from_str("10").unwrap());
        assert!(form.submission().is_ok());
    }
}
