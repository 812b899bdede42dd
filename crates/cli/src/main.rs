//! VamShop E2E CLI - run the end-to-end suite outside `cargo test`.
//!
//! # Usage
//!
//! ```bash
//! # List scenarios
//! vamshop-e2e list
//!
//! # Validate the JSON resources
//! vamshop-e2e check-resources --resources resources
//!
//! # Run every scenario against the demo site
//! vamshop-e2e run
//!
//! # Run selected scenarios in a visible Firefox window
//! vamshop-e2e run -s admin_login_success -s coupon_creation --browser firefox --headed
//! ```
//!
//! # Commands
//!
//! - `list` - Print the scenario catalogue
//! - `check-resources` - Load and validate the resource files
//! - `run` - Run scenarios, one browser session each; exits 1 if any failed

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;
use vamshop_e2e_browser::BrowserKind;
use vamshop_e2e_integration_tests::Scenario;

mod commands;

#[derive(Parser)]
#[command(name = "vamshop-e2e")]
#[command(author, version, about = "VamShop end-to-end suite")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available scenarios
    List,
    /// Validate the JSON resource files
    CheckResources {
        /// Resources directory (overrides `VAMSHOP_RESOURCES_DIR`)
        #[arg(short, long)]
        resources: Option<PathBuf>,
    },
    /// Run scenarios against the site
    Run(RunArgs),
}

/// Overrides for the environment configuration.
#[derive(clap::Args)]
struct RunArgs {
    /// Scenario to run (repeatable; default: all)
    #[arg(short, long = "scenario", value_name = "NAME")]
    scenarios: Vec<Scenario>,

    /// Site under test (overrides `VAMSHOP_BASE_URL`)
    #[arg(long)]
    base_url: Option<Url>,

    /// WebDriver server (overrides `WEBDRIVER_URL`)
    #[arg(long)]
    webdriver_url: Option<Url>,

    /// Browser to launch (overrides `WEBDRIVER_BROWSER`)
    #[arg(long)]
    browser: Option<BrowserKind>,

    /// Show the browser window
    #[arg(long)]
    headed: bool,

    /// Resources directory (overrides `VAMSHOP_RESOURCES_DIR`)
    #[arg(short, long)]
    resources: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result: Result<bool, Box<dyn std::error::Error>> = run(cli).await;

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            tracing::error!("Command failed: {e}");
            std::process::exit(1);
        }
    }
}

/// Returns whether the command succeeded.
async fn run(cli: Cli) -> Result<bool, Box<dyn std::error::Error>> {
    match cli.command {
        Commands::List => {
            commands::list::print_scenarios();
            Ok(true)
        }
        Commands::CheckResources { resources } => {
            commands::check::check_resources(resources)?;
            Ok(true)
        }
        Commands::Run(args) => Ok(commands::run::run(args).await?),
    }
}

/// Text logs by default, JSON with `LOG_FORMAT=json`.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "vamshop_e2e=info".into());

    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let json_layer = json.then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!json).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}
