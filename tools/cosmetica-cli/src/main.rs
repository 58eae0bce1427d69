//! Cosmetica CLI - browse and manage the cosmetics catalog.
//!
//! Commands:
//! - `cosmetica products` - List, show, add, update and delete products
//! - `cosmetica catalog reset` - Restore the sample catalog
//! - `cosmetica login` / `logout` / `whoami` - Manage the session
//! - `cosmetica config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CatalogArgs, ConfigArgs, LoginArgs, ProductsArgs};

/// Environment variable holding tracing filter directives.
const LOG_ENV: &str = "COSMETICA_LOG";

/// Cosmetica CLI - Browse and manage the cosmetics catalog
#[derive(Parser)]
#[command(name = "cosmetica")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Data directory (overrides storage.data_dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and edit products
    Products(ProductsArgs),

    /// Catalog maintenance
    Catalog(CatalogArgs),

    /// Log in with an email and role
    Login(LoginArgs),

    /// Log out
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Manage configuration
    Config(ConfigArgs),
}

/// Send library logs to stderr so stdout stays clean for `--json`.
fn initialize_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = match context::Context::load(cli.config.as_deref(), cli.data_dir, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx),
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Login(args) => commands::session::login(args, &ctx),
        Commands::Logout => commands::session::logout(&ctx),
        Commands::Whoami => commands::session::whoami(&ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
