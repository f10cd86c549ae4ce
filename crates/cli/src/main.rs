//! # Fortimac
//!
//! Turns pasted MAC address lists into firewall address-object scripts,
//! served over HTTP for the web form or run once from the command line.

mod bootstrap;
mod commands;
mod di;
mod server;

use clap::{Parser, Subcommand};
use fortimac_domain::CliOverrides;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "fortimac")]
#[command(version)]
#[command(about = "Generate firewall MAC address scripts from free-form text")]
struct Cli {
    /// Path to configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the HTTP API (default)
    Serve,

    /// Generate a script from a file and print it to stdout
    Generate {
        /// File holding the address list, or `-` for stdin
        #[arg(short, long, default_value = "-")]
        input: PathBuf,

        /// Firewall name used in the dynamic mapping
        #[arg(short, long)]
        name: String,

        /// Address group selector (1-4, anything else means 1)
        #[arg(short, long, default_value_t = 1)]
        group: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        web_port: cli.port,
        bind_address: cli.bind,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        web_port = config.server.web_port,
        bind = %config.server.bind_address,
        "Configuration loaded"
    );

    let use_cases = di::UseCases::new();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            info!("Fortimac starting");
            server::start_web_server(use_cases.app_state(), &config.server).await
        }
        Command::Generate { input, name, group } => commands::run_generate(
            &use_cases.generate_script,
            &input,
            &name,
            group,
            &mut std::io::stdout().lock(),
        ),
    }
}
