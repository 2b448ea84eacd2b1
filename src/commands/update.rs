//! Update command handler.

use crate::api;
use crate::args::UpdateArgs;
use crate::commands::Out;
use crate::form::ExpenseForm;
use crate::ledger::Ledger;
use crate::model::Expense;
use crate::{Config, Mode, Result};
use anyhow::Context;

/// Edits an existing expense by id.
///
/// The pending form is populated from the fetched record, which puts it in edit
/// mode, then the provided field changes are applied on top. Submission issues an
/// update targeted at the id, never a create. Fields that were not provided keep
/// the record's current values.
///
/// # Errors
///
/// - Returns an error if no expense with the given id exists.
/// - Returns an error if the store rejects the update; the record is unchanged in
///   that case and the command can simply be retried.
pub async fn update(config: Config, mode: Mode, args: UpdateArgs) -> Result<Out<Expense>> {
    let mut ledger = Ledger::new(api::store(&config, mode));
    ledger.refresh().await?;

    let id = args.id();
    let record = ledger
        .find(id)
        .cloned()
        .with_context(|| format!("Expense not found: {id}"))?;

    let mut form = ExpenseForm::new();
    form.edit(&record);
    if let Some(category) = args.category() {
        form.set_category(category);
    }
    if let Some(description) = args.description() {
        form.set_description(description);
    }
    if let Some(amount) = args.amount() {
        form.set_amount(amount);
    }
    if let Some(date) = args.date() {
        form.set_date(date);
    }

    let updated = ledger.submit(&mut form).await?;
    let message = format!("Updated expense {id}");
    Ok(Out::new(message, updated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Amount;
    use std::str::FromStr;
    use url::Url;

    fn test_config() -> Config {
        Config::new(Url::parse("http://127.0.0.1:8000/api/").unwrap())
    }

    #[tokio::test]
    async fn test_update_changes_only_given_fields() {
        let args = UpdateArgs::new(
            2,
            None,
            None,
            Some(Amount::from_str("7.25").unwrap()),
            None,
        );
        let out = update(test_config(), Mode::Test, args).await.unwrap();
        let updated = out.structure().unwrap();
        assert_eq!(updated.id(), 2);
        assert_eq!(updated.amount().to_string(), "7.25");
        // The untouched fields carried over from the existing record.
        assert_eq!(updated.description(), "Starbucks #2847");
        assert_eq!(updated.category_name(), "Coffee Shops");
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_an_error() {
        let args = UpdateArgs::new(999, None, None, None, None);
        let result = update(test_config(), Mode::Test, args).await;
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Expense not found: 999"));
    }
}
