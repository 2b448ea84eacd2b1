//! The `list` command: the full fetch, filter, sort and total pipeline.

use crate::api;
use crate::args::ListArgs;
use crate::commands::Out;
use crate::ledger::Ledger;
use crate::model::Expense;
use crate::view::{self, FilterConfig, ViewConfig};
use crate::{Config, Mode, Result};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

/// Lists expenses with the active filters and sort order applied, followed by the
/// total of the listed records.
pub async fn list(config: Config, mode: Mode, args: ListArgs) -> Result<Out<Vec<Expense>>> {
    let mut ledger = Ledger::new(api::store(&config, mode));
    ledger.refresh().await?;

    let view_config = ViewConfig {
        filter: FilterConfig {
            category: args.category(),
            month: args.month(),
        },
        sort: args.sort(),
    };
    let records = ledger.view(&view_config);
    let total = view::total(&records);

    let message = format!("{}\nTotal: {total}", render_table(&records));
    Ok(Out::new(message, records))
}

/// Renders the records as a table matching the ledger's columns.
fn render_table(records: &[Expense]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Category", "Description", "Amount", "Date"]);
    for e in records {
        table.add_row(vec![
            Cell::new(e.id()),
            Cell::new(e.category_name()),
            Cell::new(e.description()),
            Cell::new(e.amount()).set_alignment(CellAlignment::Right),
            Cell::new(e.date_str()),
        ]);
    }
    table.to_string()
}
