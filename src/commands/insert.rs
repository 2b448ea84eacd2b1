//! Insert command handler.

use crate::api;
use crate::args::InsertArgs;
use crate::commands::Out;
use crate::form::ExpenseForm;
use crate::ledger::Ledger;
use crate::model::Expense;
use crate::{Config, Mode, Result};

/// Records a new expense.
///
/// The pending form starts idle, so submission issues a create request and the
/// server assigns the id. Creation is not deduplicated: repeating the same insert
/// records a second, distinct expense.
///
/// # Errors
///
/// - Returns an error if the store rejects the create (for example, an unknown
///   category). The form state is left unchanged in that case.
/// - Returns an error if the refresh that follows a successful create fails.
pub async fn insert(config: Config, mode: Mode, args: InsertArgs) -> Result<Out<Expense>> {
    let mut ledger = Ledger::new(api::store(&config, mode));
    ledger.refresh().await?;

    let mut form = ExpenseForm::new();
    form.set_category(args.category())
        .set_description(args.description())
        .set_amount(args.amount());
    if let Some(date) = args.date() {
        form.set_date(date);
    }

    let created = ledger.submit(&mut form).await?;
    let message = format!("Recorded expense with ID: {}", created.id());
    Ok(Out::new(message, created))
}
