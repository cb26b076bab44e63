//! Climate Dashboard Server
//!
//! Serves the compiled `climate-ui` bundle.
//!
//! Run with: cargo run -- serve --dist climate-ui/dist
//!
//! # Configuration
//!
//! Settings come from `--config`, else the first config file found in the
//! default locations, else built-in defaults. A config file that exists but
//! does not parse stops startup. Environment variables override
//! the file and command-line flags override both:
//! - `CLIMATE_DASHBOARD_HOST`: Host to bind to (default: 0.0.0.0)
//! - `CLIMATE_DASHBOARD_PORT`: Port to listen on (default: 8084)
//! - `CLIMATE_DASHBOARD_DIST_DIR`: Bundle directory (default: climate-ui/dist)
//! - `CLIMATE_DASHBOARD_LOG_LEVEL`: Log level (default: info)
//! - `CLIMATE_DASHBOARD_LOG_FORMAT`: pretty or json (default: pretty)
//! - `RUST_LOG`: Full filter directives, wins over the log level

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use climate_dashboard::config::{generate_default_config, Config, ConfigSource};
use climate_dashboard::server::{serve, AppState};
use climate_dashboard::logging;

#[derive(Parser, Debug)]
#[command(name = "climate-dashboard", version, about = "Climate Engineering Dashboard server")]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the frontend bundle (default)
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Bundle directory
        #[arg(short, long)]
        dist: Option<PathBuf>,
    },

    /// Print a default configuration file
    PrintConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
        dist: None,
    });

    match command {
        Command::PrintConfig => {
            print!("{}", generate_default_config());
            Ok(())
        }
        Command::Serve { host, port, dist } => {
            let (mut config, source) = match &cli.config {
                Some(path) => (
                    Config::load_with_env(path)
                        .with_context(|| format!("loading config from {}", path.display()))?,
                    ConfigSource::File(path.clone()),
                ),
                None => Config::load_default().context("loading default config")?,
            };

            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(dist) = dist {
                config.server.dist_dir = dist;
            }

            logging::init(&config.logging);

            tracing::info!(
                "Starting Climate Dashboard server v{}",
                env!("CARGO_PKG_VERSION")
            );
            tracing::info!("Config loaded from {}", source);
            tracing::info!("Bundle directory: {:?}", config.server.dist_dir);

            serve(AppState::new(config.server))
                .await
                .context("running server")?;

            Ok(())
        }
    }
}
