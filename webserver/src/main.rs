//! Artistly directory server entry point

use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::signal;

use artistly_shared::{Component, SeedData, TransitionPolicy, WebServerConfig, component_info, logging};
use artistly_webserver::{InMemoryCatalog, InMemorySubmissionStore, RealStaticFileServer, WebServer};

/// Command line arguments; every flag can also come from the environment
#[derive(Parser, Debug)]
#[command(name = "artistly")]
#[command(about = "Performer directory, onboarding intake and review dashboard server")]
struct Args {
    /// Port for HTTP server
    #[arg(long, env = "ARTISTLY_PORT", default_value = "8080")]
    port: u16,

    /// Interface to bind
    #[arg(long, env = "ARTISTLY_BIND_HOST", default_value = "127.0.0.1")]
    bind_host: IpAddr,

    /// Static files directory
    #[arg(long, env = "ARTISTLY_STATIC_DIR", default_value = "./static")]
    static_dir: PathBuf,

    /// JSON file with `artists` and `submissions` replacing the built-in demo data
    #[arg(long, env = "ARTISTLY_SEED_FILE")]
    seed_file: Option<PathBuf>,

    /// Whether resolved submissions may flip status (permissive, strict)
    #[arg(long, env = "ARTISTLY_TRANSITION_POLICY", default_value = "permissive")]
    transition_policy: TransitionPolicy,

    /// Simulated processing time of an onboarding application
    #[arg(long, env = "ARTISTLY_ONBOARD_DELAY_MS", default_value = "1500")]
    onboard_delay_ms: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "ARTISTLY_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl From<Args> for WebServerConfig {
    fn from(args: Args) -> Self {
        Self {
            bind_host: args.bind_host,
            bind_port: args.port,
            static_file_root: args.static_dir,
            seed_file: args.seed_file,
            transition_policy: args.transition_policy,
            onboard_delay_ms: args.onboard_delay_ms,
            log_level: args.log_level,
        }
    }
}

async fn load_seed(config: &WebServerConfig) -> anyhow::Result<SeedData> {
    match &config.seed_file {
        Some(path) => {
            let body = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read seed file {}", path.display()))?;
            let seed = SeedData::from_json(&body).with_context(|| format!("Invalid seed file {}", path.display()))?;
            component_info!(
                Component::WebServer,
                "🌱 Seed file {} loaded: {} artists, {} submissions",
                path.display(),
                seed.artists.len(),
                seed.submissions.len()
            );
            Ok(seed)
        }
        None => Ok(SeedData::builtin()),
    }
}

/// Resolves on Ctrl+C; a broken signal handler keeps the server up
async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => logging::log_shutdown(Component::WebServer, "Received Ctrl+C signal"),
        Err(err) => {
            logging::log_error(Component::WebServer, "Signal handling", &err);
            std::future::pending::<()>().await;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = WebServerConfig::from(Args::parse());
    config.validate().context("Invalid configuration")?;

    logging::init_tracing_with_level(Some(&config.log_level));
    logging::log_startup(
        Component::WebServer,
        &format!(
            "Artistly on {} (transition policy: {})",
            config.bind_address(),
            config.transition_policy
        ),
    );

    let seed = load_seed(&config).await?;

    // Initialize services with dependency injection
    let catalog = InMemoryCatalog::new(seed.artists);
    let submissions = InMemorySubmissionStore::new(seed.submissions, config.transition_policy);
    let static_server = RealStaticFileServer::new(&config.static_file_root);

    let webserver = WebServer::new(&config, catalog, submissions, static_server);
    webserver.run(shutdown_signal()).await?;

    logging::log_success(Component::WebServer, "WebServer stopped gracefully");
    Ok(())
}
