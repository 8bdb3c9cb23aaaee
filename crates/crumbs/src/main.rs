//! crumbs CLI - breadcrumb navigation for documentation pages.
//!
//! Provides commands for:
//! - `render`: Prepend a breadcrumb trail to a rendered page

mod commands;
mod error;

use clap::{Parser, Subcommand};
use console::{Term, style};
use tracing_subscriber::EnvFilter;

use commands::RenderArgs;

/// crumbs - breadcrumb navigation for documentation pages.
#[derive(Parser)]
#[command(name = "crumbs", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the breadcrumb for a page and prepend it to the page HTML.
    Render(RenderArgs),
}

fn main() {
    let cli = Cli::parse();

    let verbose = matches!(&cli.command, Commands::Render(args) if args.verbose);
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
    };

    if let Err(err) = result {
        let _ = Term::stderr().write_line(&style(format!("Error: {err}")).red().to_string());
        std::process::exit(1);
    }
}

/// `--verbose` enables INFO level, otherwise use `RUST_LOG` or default to WARN.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}
