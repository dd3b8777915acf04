use clap::Parser;
use owo_colors::{OwoColorize, Style};
use tracing_subscriber::EnvFilter;
use weektask_core::error::CoreError;
use weektask_core::repository::TaskStore;
use weektask_core::storage::FileStorage;

mod cli;
mod commands;
mod config;
mod parser;
mod util;
mod views;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    let (config, config_error) = match config::Config::new() {
        Ok(config) => (config, None),
        Err(e) => (config::Config::default(), Some(e)),
    };
    init_tracing(&config.log_level);
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "invalid configuration, using defaults");
    }

    let mut store = TaskStore::with_key(
        FileStorage::new(config.data_dir.clone()),
        &config.storage_key,
    );
    let count = store.init().await;
    tracing::debug!(count, data_dir = %config.data_dir.display(), "task store ready");

    let result = match cli.command {
        cli::Commands::Add(command) => commands::add::add_task(&mut store, command).await,
        cli::Commands::Week(command) => commands::week::show_week(&store, command).await,
        cli::Commands::Day(command) => commands::day::show_day(&store, command).await,
        cli::Commands::List => commands::list::list_tasks(&store).await,
        cli::Commands::Done(command) => commands::done::toggle_task(&mut store, command).await,
        cli::Commands::Edit(command) => commands::edit::edit_task(&mut store, command).await,
        cli::Commands::Delete(command) => {
            commands::delete::delete_task(&mut store, command).await
        }
    };

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    match err.downcast_ref::<CoreError>() {
        Some(CoreError::NotFound(s)) => {
            eprintln!("{} {}", "Error:".style(error_style), s);
        }
        Some(CoreError::AmbiguousId(tasks)) => {
            eprintln!("{}", "Error: Ambiguous ID.".style(error_style));
            eprintln!("Did you mean one of these?");
            for (id, title) in tasks {
                eprintln!("  {} ({})", id.yellow(), title);
            }
        }
        Some(CoreError::InvalidInput(s)) => {
            eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
        }
        _ => eprintln!("{} {}", "Error:".style(error_style), err),
    }
}
