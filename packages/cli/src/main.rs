#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Terminal front end for the legal portal.
//!
//! Run without a subcommand for the interactive menu, or name a page to
//! print it once (useful for scripting). Backend failures are shown inline
//! and do not change the exit status; only configuration and terminal
//! errors (and a failed `health` check) exit non-zero.
//!
//! Uses `indicatif-log-bridge` (via [`legal_portal_cli_utils::init_logger`])
//! so that log lines and loading spinners never fight for the terminal.

mod commands;
mod interactive;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use legal_portal_api_models::{CaseType, EvidenceStrength, PastRecord};
use legal_portal_client::{ClientConfig, ConfigError, HttpDataSource};
use legal_portal_views::pages::CaseForm;

#[derive(Parser, Debug)]
#[command(
    name = "legal-portal",
    about = "Browse Indian crime statistics, IPC sections, judgments and legal rights"
)]
struct Cli {
    /// Path to a TOML client configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Backend base URL (overrides config and `LEGAL_PORTAL_API_URL`)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Request timeout in seconds (overrides config and `LEGAL_PORTAL_TIMEOUT_SECS`)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// National crime summary
    Overview,

    /// IPC crime distribution and top districts
    IpcDashboard {
        /// Year (defaults to the first available)
        #[arg(long)]
        year: Option<i32>,

        /// State or UT (defaults to the first available)
        #[arg(long)]
        state: Option<String>,
    },

    /// Crimes against women, ranked
    Women {
        /// Year (defaults to the first available)
        #[arg(long)]
        year: Option<i32>,

        /// State (defaults to the first available)
        #[arg(long)]
        state: Option<String>,
    },

    /// Search IPC sections by number, title or text
    Search {
        /// Section number or keyword
        query: String,
    },

    /// Explain an IPC section in plain language
    Explain {
        /// Section number, e.g. 302
        section: String,
    },

    /// Ask the Supreme Court judgment explorer a question
    Ask {
        /// Legal question
        question: String,
    },

    /// Predict a case outcome (educational prototype)
    Predict {
        /// Criminal, Civil, Family or Property
        #[arg(long)]
        case_type: Option<CaseType>,

        /// Relevant IPC section, e.g. "IPC 420"
        #[arg(long, default_value = "")]
        ipc_section: String,

        /// Summary of the case facts
        #[arg(long, default_value = "")]
        facts: String,

        /// Strong, Moderate or Weak
        #[arg(long)]
        evidence: Option<EvidenceStrength>,

        /// None, Minor or Serious
        #[arg(long)]
        past_record: Option<PastRecord>,
    },

    /// Rights by category, FAQs and helplines
    Awareness {
        /// Category to open
        #[arg(long)]
        category: Option<String>,
    },

    /// Check that the backend is reachable
    Health,
}

/// Builds the client configuration: file, then environment, then flags.
fn client_config(cli: &Cli) -> Result<ClientConfig, ConfigError> {
    let mut config = ClientConfig::load(cli.config.as_deref())?;
    config.apply_overrides(cli.api_url.clone(), cli.timeout.map(|t| t.to_string()))?;
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = legal_portal_cli_utils::init_logger();
    let cli = Cli::parse();

    let config = client_config(&cli)?;
    log::debug!("Using backend at {}", config.base_url);
    let source = HttpDataSource::new(config)?;

    let Some(command) = cli.command else {
        println!("Legal Portal");
        return interactive::run(&source, &multi).await;
    };

    match command {
        Commands::Overview => commands::overview(&source, &multi).await,
        Commands::IpcDashboard { year, state } => {
            commands::ipc_dashboard(&source, &multi, year, state).await;
        }
        Commands::Women { year, state } => commands::women(&source, &multi, year, state).await,
        Commands::Search { query } => commands::search(&source, &multi, &query).await,
        Commands::Explain { section } => commands::explain(&source, &multi, &section).await,
        Commands::Ask { question } => commands::ask(&source, &multi, &question).await,
        Commands::Predict {
            case_type,
            ipc_section,
            facts,
            evidence,
            past_record,
        } => {
            let form = CaseForm {
                case_type,
                ipc_section,
                case_facts_summary: facts,
                evidence_strength: evidence.unwrap_or_default(),
                past_record: past_record.unwrap_or_default(),
            };
            commands::predict(&source, &multi, &form).await;
        }
        Commands::Awareness { category } => {
            commands::awareness(&source, &multi, category.as_deref()).await;
        }
        Commands::Health => commands::health(&source, &multi).await?,
    }

    Ok(())
}
