use std::process::ExitCode;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tokenwright_auth::JwtMaker;
use tokenwright_cli::commands;
use tokenwright_client::TokenClient;
use tokenwright_config::{AcquireConfig, TokenConfig};
use tokenwright_observability::init_basic_console_logging;
use tracing::debug;

#[derive(Parser)]
#[command(name = "tokenwright")]
#[command(about = "Issue, verify and acquire access tokens", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Issue a signed token for a user
    Issue {
        /// Subject the token asserts
        #[arg(short = 'u', long)]
        username: String,

        /// Lifetime in seconds (defaults to TOKEN_LIFETIME_SECONDS)
        #[arg(short = 't', long, allow_hyphen_values = true)]
        ttl: Option<i64>,
    },
    /// Verify a token and print its payload
    Verify {
        /// Token to verify
        token: String,
    },
    /// Decode a token WITHOUT verifying its signature or expiry
    Inspect {
        /// Token to decode
        token: String,
    },
    /// Fetch a bearer token from a remote endpoint
    Acquire {
        /// Token endpoint URL
        #[arg(long)]
        url: String,

        /// Form parameter as key=value (repeatable)
        #[arg(short = 'p', long = "param", value_parser = commands::parse_param)]
        params: Vec<(String, String)>,
    },
}

fn run(cli: Cli) -> anyhow::Result<String> {
    match cli.command {
        Commands::Issue { username, ttl } => {
            let config = TokenConfig::from_env();
            let maker = JwtMaker::from_config(&config)?;
            commands::issue(&maker, &username, ttl.unwrap_or(config.token_lifetime))
        }
        Commands::Verify { token } => {
            let maker = JwtMaker::from_config(&TokenConfig::from_env())?;
            commands::verify(&maker, &token)
        }
        Commands::Inspect { token } => commands::inspect(&token),
        Commands::Acquire { url, params } => {
            let client = TokenClient::new(&AcquireConfig::from_env())?;
            commands::acquire(&client, &url, &params)
        }
    }
}

fn main() -> ExitCode {
    dotenv().ok();
    init_basic_console_logging();

    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(error = ?e, "Command failed");
            eprintln!("❌ {:#}", e);
            ExitCode::from(commands::exit_code(&e))
        }
    }
}
