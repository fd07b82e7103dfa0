//! siteshell CLI entry point.
//!
//! Usage:
//!   siteshell                  # Interactive shell
//!   siteshell -c <command>     # Execute one command and exit

use std::env;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use siteshell_kernel::{KernelConfig, Settings};

fn main() -> ExitCode {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        None => {
            siteshell_repl::run(config())?;
            Ok(ExitCode::SUCCESS)
        }

        Some("--help" | "-h") => {
            print_help();
            Ok(ExitCode::SUCCESS)
        }

        Some("--version" | "-V") => {
            println!("siteshell {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }

        Some("-c") => {
            let cmd = args.get(2).context("-c requires a command argument")?;
            siteshell_repl::run_command(config(), cmd)
        }

        Some(unknown) => {
            eprintln!("Unknown option: {unknown}");
            eprintln!("Run 'siteshell --help' for usage.");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Kernel config with settings loaded from disk; problems fall back to
/// the defaults with a warning.
fn config() -> KernelConfig {
    let settings = match Settings::default_path() {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("failed to load settings: {e:#}");
                Settings::default()
            }
        },
        None => Settings::default(),
    };
    KernelConfig::with_settings(settings)
}

fn print_help() {
    println!(
        r#"siteshell v{}

Usage:
  siteshell                    Interactive shell
  siteshell -c <command>       Execute one command and exit

Options:
  -c <command>                 Execute command string and exit
  -h, --help                   Show this help
  -V, --version                Show version

Examples:
  siteshell                    # Start the interactive shell
  siteshell -c 'plugin list'   # List plugins
  siteshell -c 'site info'     # Show site information
"#,
        env!("CARGO_PKG_VERSION")
    );
}
