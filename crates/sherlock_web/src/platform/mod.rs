//! Binary wiring: command line, configuration, logging and the two front doors
//! (the relay server and the headless search).

mod app;
mod config;
mod effects;
mod relay;
mod render;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use sherlock_core::Catalog;
use sherlock_engine::ReqwestUpstream;
use sherlock_logging::sherlock_info;

use app::SearchArgs;
use config::AppConfig;
use relay::RelayState;

#[derive(Debug, Parser)]
#[command(name = "sherlock-web", version, about = "Username search front end and relay")]
struct Cli {
    /// RON configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Site catalog (JSON), overriding the configured path.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the relay HTTP server.
    Serve {
        #[arg(long)]
        listen: Option<SocketAddr>,
        /// Lookup service address.
        #[arg(long)]
        upstream: Option<String>,
    },
    /// Search for a username through a running relay.
    Search {
        username: String,
        /// Include a site by name; repeatable.
        #[arg(long = "site")]
        sites: Vec<String>,
        /// Include every visible site.
        #[arg(long, conflicts_with = "sites")]
        all: bool,
        /// Show and allow NSFW sites.
        #[arg(long)]
        nsfw: bool,
        /// Relay address, overriding the configured one.
        #[arg(long)]
        relay: Option<String>,
        /// Save the results as <username>.txt in the export directory.
        #[arg(long)]
        export: bool,
    },
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(catalog) = cli.catalog {
        config.catalog_path = catalog;
    }

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    sherlock_logging::initialize(config.log_destination, level, &config.log_file);

    let catalog = Arc::new(
        Catalog::load(&config.catalog_path)
            .with_context(|| format!("loading catalog {:?}", config.catalog_path))?,
    );
    sherlock_info!(
        "Loaded {} sites from {:?}",
        catalog.len(),
        config.catalog_path
    );

    match cli.command {
        Command::Serve { listen, upstream } => {
            if let Some(listen) = listen {
                config.listen_addr = listen;
            }
            if let Some(upstream) = upstream {
                config.upstream_url = upstream;
            }
            let state = RelayState {
                catalog,
                upstream: Arc::new(ReqwestUpstream::new(config.forward_settings())),
            };
            let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
            runtime
                .block_on(relay::serve(config.listen_addr, state))
                .context("relay server")?;
            Ok(())
        }
        Command::Search {
            username,
            sites,
            all,
            nsfw,
            relay,
            export,
        } => {
            if let Some(relay) = relay {
                config.relay_url = relay;
            }
            let args = SearchArgs {
                username,
                sites,
                all,
                nsfw,
                export,
            };
            app::run_search(&config, catalog, args)
        }
    }
}
