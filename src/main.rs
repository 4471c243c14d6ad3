//! Cricket Dashboard - command line entry point.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cricket_dashboard::config::{DEFAULT_DELIVERIES_PATH, DEFAULT_MATCHES_PATH, DEFAULT_PORT};
use cricket_dashboard::web::{serve, AppState};
use cricket_dashboard::{
    Dashboard, DashboardConfig, DashboardReport, ListenConfig, RequestContext,
};
use std::net::IpAddr;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "cricket_dashboard")]
#[command(about = "Cricket match analytics dashboard", long_about = None)]
struct Cli {
    /// Match table (season, team1, team2, winner)
    #[arg(long, global = true, default_value = DEFAULT_MATCHES_PATH)]
    matches: PathBuf,

    /// Delivery table (batter, batsman_runs, player_dismissed, dismissal_kind)
    #[arg(long, global = true, default_value = DEFAULT_DELIVERIES_PATH)]
    deliveries: PathBuf,

    /// Verbose logging and error details in HTTP responses
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the dashboard page (default)
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,

        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Render the dashboard page once and write it to a file
    Render {
        #[arg(short, long, default_value = "dashboard.html")]
        output: PathBuf,
    },
    /// Print summary statistics and rankings as JSON
    Summary,
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = DashboardConfig {
        matches_path: cli.matches,
        deliveries_path: cli.deliveries,
        debug: cli.debug,
    };

    match cli.command.unwrap_or(Commands::Serve {
        host: ListenConfig::default().host,
        port: DEFAULT_PORT,
    }) {
        Commands::Serve { host, port } => {
            serve(ListenConfig { host, port }, AppState::new(config))
                .await
                .context("server stopped with an error")?;
        }
        Commands::Render { output } => {
            let html = tokio::task::spawn_blocking(move || Dashboard::render_page(&config))
                .await??;
            std::fs::write(&output, html)
                .with_context(|| format!("failed to write {}", output.display()))?;
            info!(path = %output.display(), "dashboard written");
        }
        Commands::Summary => {
            let ctx = RequestContext::load(&config)?;
            let report = DashboardReport::compute(&ctx.dataset);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
