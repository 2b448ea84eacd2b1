//! Delete command handler.

use crate::api;
use crate::args::DeleteArgs;
use crate::commands::Out;
use crate::ledger::Ledger;
use crate::{Config, Mode, Result};
use anyhow::Context;
use std::io::{self, BufRead, Write};

/// Deletes an expense by id.
///
/// Unless `--yes` was given, asks for confirmation first; declining leaves
/// everything unchanged and is not an error.
pub async fn delete(config: Config, mode: Mode, args: DeleteArgs) -> Result<Out<i64>> {
    let id = args.id();
    if !args.yes() && !confirm(&format!("Delete expense {id}? [y/N] "))? {
        return Ok(Out::new_message("Delete cancelled"));
    }

    let mut ledger = Ledger::new(api::store(&config, mode));
    ledger.refresh().await?;
    ledger.delete(id).await?;
    Ok(Out::new(format!("Deleted expense {id}"), id))
}

/// Prompts on stderr and reads one line from stdin.
fn confirm(prompt: &str) -> Result<bool> {
    eprint!("{prompt}");
    io::stderr().flush().context("Failed to flush stderr")?;
    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("Failed to read the confirmation answer")?;
    Ok(approved(&answer))
}

/// Only an explicit `y` or `yes` (case-insensitive) counts as approval.
fn approved(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
