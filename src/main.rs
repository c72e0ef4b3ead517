mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod form;
mod infra;
mod logging;
mod services;
mod workflow;

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};

use crate::cmd::config::{self as config_cmd, ConfigArgs};
use crate::cmd::fields::TicketFieldArgs;
use crate::cmd::submit::{self, SubmitCommandArgs};
use crate::cmd::validate;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::console::ConsoleNotifier;
use crate::infra::http::HttpTicketClient;

#[derive(Parser)]
#[command(name = "ticketform", author, version, about = "Submit support tickets")]
struct Cli {
    /// Log debug output (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in and submit a support ticket.
    Submit(SubmitArgs),
    /// Check ticket fields without sending anything.
    Validate(TicketFieldArgs),
    /// Manage CLI configuration.
    Config(ConfigArgs),
}

#[derive(Args)]
struct SubmitArgs {
    #[command(flatten)]
    fields: TicketFieldArgs,

    /// Override the configured API base URL.
    #[arg(long)]
    base_url: Option<String>,

    /// Never prompt; submit the given fields as they are.
    #[arg(long)]
    no_input: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli.command).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands) -> AppResult<bool> {
    match command {
        Commands::Config(args) => {
            config_cmd::run(args.command)?;
            Ok(true)
        }
        Commands::Validate(fields) => {
            validate::run(&fields)?;
            Ok(true)
        }
        Commands::Submit(args) => run_submit(args).await,
    }
}

async fn run_submit(args: SubmitArgs) -> AppResult<bool> {
    let config = AppConfig::load(args.base_url)?;

    let ticket_service = Arc::new(HttpTicketClient::new(config.base_url.clone()));
    let context = AppContext::new(config, ticket_service, Arc::new(ConsoleNotifier));

    submit::run(
        &context,
        SubmitCommandArgs::new(args.fields, args.no_input),
    )
    .await
}
