use clap::Parser;
use expenses_cli::args::{Args, Command};
use expenses_cli::{commands, Config, Mode, Result};
use std::process::ExitCode;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

pub async fn main_inner(args: Args) -> Result<()> {
    trace!("{args:?}");
    let config = Config::new(args.common().api_url().clone());

    // This allows for exercising the program without a running server. When
    // EXPENSES_IN_TEST_MODE is set and non-zero in length, the mode will be
    // Mode::Test, otherwise it will be Mode::Http.
    let mode = Mode::from_env();

    // Route to the appropriate command handler
    let _: () = match args.command() {
        Command::List(list_args) => commands::list(config, mode, list_args.clone())
            .await?
            .print(),

        Command::Categories(_) => commands::categories(config, mode).await?.print(),

        Command::Insert(insert_args) => commands::insert(config, mode, insert_args.clone())
            .await?
            .print(),

        Command::Update(update_args) => commands::update(config, mode, update_args.clone())
            .await?
            .print(),

        Command::Delete(delete_args) => commands::delete(config, mode, delete_args.clone())
            .await?
            .print(),
    };
    Ok(())
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use the default log level for this crate
            // (library and binary targets) only.
            EnvFilter::new(format!(
                "expenses_cli={},{}={}",
                level,
                env!("CARGO_CRATE_NAME"),
                level
            ))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
