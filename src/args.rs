//! These structs provide the CLI interface for the expenses CLI.

use crate::model::Amount;
use crate::view::SortMode;
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;
use url::Url;

/// expenses: A command-line client for a personal expense ledger.
///
/// The purpose of this program is to record expenses against categories held in a
/// remote expense store, browse and total them, and edit or delete existing entries.
/// The store is a small REST API; nothing is persisted locally.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List expenses, optionally filtered by category and month, sorted, and totaled.
    List(ListArgs),
    /// List the known expense categories.
    Categories(CategoriesArgs),
    /// Record a new expense.
    Insert(InsertArgs),
    /// Edit an existing expense by id.
    Update(UpdateArgs),
    /// Delete an expense by id, asking for confirmation first.
    Delete(DeleteArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG. See the tracing-subscriber crate for
    /// instructions.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The base URL of the expense store API.
    #[arg(
        long,
        env = "EXPENSES_API_URL",
        default_value = "http://127.0.0.1:8000/api/"
    )]
    api_url: Url,
}

impl Common {
    pub fn new(log_level: LevelFilter, api_url: Url) -> Self {
        Self { log_level, api_url }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }
}

/// Args for the `expenses list` command.
#[derive(Debug, Parser, Clone)]
pub struct ListArgs {
    /// Only show expenses in this category, by category id.
    #[arg(long)]
    category: Option<i64>,

    /// Only show expenses dated in this month (1-12), in any year.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    month: Option<u32>,

    /// The sort order for the listing.
    #[arg(long, value_enum, default_value_t = SortMode::None)]
    sort: SortMode,
}

impl ListArgs {
    pub fn new(category: Option<i64>, month: Option<u32>, sort: SortMode) -> Self {
        Self {
            category,
            month,
            sort,
        }
    }

    pub fn category(&self) -> Option<i64> {
        self.category
    }

    pub fn month(&self) -> Option<u32> {
        self.month
    }

    pub fn sort(&self) -> SortMode {
        self.sort
    }
}

/// Args for the `expenses categories` command.
#[derive(Debug, Parser, Clone)]
pub struct CategoriesArgs {}

/// Args for the `expenses insert` command.
#[derive(Debug, Parser, Clone)]
pub struct InsertArgs {
    /// The category of the new expense, by category id.
    #[arg(long)]
    category: i64,

    /// What the expense was for.
    #[arg(long)]
    description: String,

    /// The amount spent, e.g. 12.50.
    #[arg(long)]
    amount: Amount,

    /// The expense date as YYYY-MM-DD. The server stamps today's date when omitted.
    #[arg(long)]
    date: Option<String>,
}

impl InsertArgs {
    pub fn new(
        category: i64,
        description: impl Into<String>,
        amount: Amount,
        date: Option<String>,
    ) -> Self {
        Self {
            category,
            description: description.into(),
            amount,
            date,
        }
    }

    pub fn category(&self) -> i64 {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

/// Args for the `expenses update` command.
#[derive(Debug, Parser, Clone)]
pub struct UpdateArgs {
    /// The id of the expense to edit.
    id: i64,

    /// A new category, by category id.
    #[arg(long)]
    category: Option<i64>,

    /// A new description.
    #[arg(long)]
    description: Option<String>,

    /// A new amount.
    #[arg(long)]
    amount: Option<Amount>,

    /// A new date as YYYY-MM-DD.
    #[arg(long)]
    date: Option<String>,
}

impl UpdateArgs {
    pub fn new(
        id: i64,
        category: Option<i64>,
        description: Option<String>,
        amount: Option<Amount>,
        date: Option<String>,
    ) -> Self {
        Self {
            id,
            category,
            description,
            amount,
            date,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn category(&self) -> Option<i64> {
        self.category
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn amount(&self) -> Option<Amount> {
        self.amount
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

/// Args for the `expenses delete` command.
#[derive(Debug, Parser, Clone)]
pub struct DeleteArgs {
    /// The id of the expense to delete.
    id: i64,

    /// Skip the confirmation prompt.
    #[arg(long)]
    yes: bool,
}

impl DeleteArgs {
    pub fn new(id: i64, yes: bool) -> Self {
        Self { id, yes }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn yes(&self) -> bool {
        self.yes
    }
}
