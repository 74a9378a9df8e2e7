mod interactive;
mod notifier;
mod render;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use ziplookup_client::LookupClient;
use ziplookup_core::{parse_address, AppConfig};
use ziplookup_search::SearchOrchestrator;

use crate::notifier::TerminalNotifier;

#[derive(Debug, Parser)]
#[command(name = "ziplookup")]
#[command(about = "Look up ZIP codes for a street address")]
struct Cli {
    /// Lookup Service endpoint (overrides `ZIPLOOKUP_API_URL`)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search once for an address and print the candidates
    Search {
        /// Street and house number, a comma, then the city
        #[arg(required = true, num_args = 1..)]
        address: Vec<String>,

        /// Print the raw service response instead of the candidate list
        #[arg(long)]
        json: bool,
    },
    /// Parse an address without contacting the Lookup Service
    Parse {
        #[arg(required = true, num_args = 1..)]
        address: Vec<String>,
    },
    /// Read addresses from stdin, one per line (the default)
    Interactive,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = ziplookup_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let api_url = cli.api_url.as_deref().unwrap_or(&config.api_url);

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Parse { address } => Ok(run_parse(&address.join(" "))),
        Commands::Search { address, json } => {
            let client = build_client(&config, api_url)?;
            run_search(&client, &address.join(" "), json).await
        }
        Commands::Interactive => {
            let client = build_client(&config, api_url)?;
            interactive::run(&client).await
        }
    }
}

fn build_client(config: &AppConfig, api_url: &str) -> anyhow::Result<LookupClient> {
    tracing::debug!(env = %config.env, api_url, "building lookup client");
    let client = LookupClient::new(api_url, config.request_timeout_secs, &config.user_agent)?;
    Ok(client)
}

fn run_parse(address: &str) -> ExitCode {
    match parse_address(address) {
        Ok(parsed) => {
            println!("street:       {}", parsed.street_name);
            println!("house number: {}", parsed.house_number);
            println!("city:         {}", parsed.city_name);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run_search(client: &LookupClient, address: &str, json: bool) -> anyhow::Result<ExitCode> {
    let mut orchestrator = SearchOrchestrator::new(TerminalNotifier::new(std::io::stderr()));
    orchestrator.search(client, address).await;

    let mut out = std::io::stdout().lock();
    if json {
        if let Some(results) = orchestrator.state().results() {
            render::render_json(&mut out, results)?;
        }
    } else {
        render::render(&mut out, orchestrator.render_input())?;
    }

    if orchestrator.state().failure().is_some() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

#[cfg(test)]
mod tests;
