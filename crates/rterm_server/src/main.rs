use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use rterm_builtins::RegistryProfile;
use rterm_server::{http, logging, AppState, ServerConfig, SessionMode};
use tracing::info;

/// Remote command-line interpreter over HTTP.
#[derive(Parser, Debug)]
#[command(name = "rtermd", author, version, about = "rterm remote command-line server", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Address to listen on (default 127.0.0.1:8000).
    #[arg(short, long)]
    bind: Option<SocketAddr>,

    /// Starting directory for interpreters (default: current directory).
    #[arg(short, long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// `shared` or `per-session`.
    #[arg(long)]
    session_mode: Option<SessionMode>,

    /// Command table: `core` or `extended`.
    #[arg(long)]
    profile: Option<RegistryProfile>,

    /// Log filter used when RUST_LOG is unset, e.g. `debug` or `rterm_core=trace`.
    #[arg(long)]
    log_level: Option<String>,

    /// Emit JSON logs on the console.
    #[arg(long)]
    json_logs: bool,

    /// Extra CORS origin; may be repeated.
    #[arg(long = "allow-origin", value_name = "ORIGIN")]
    allow_origins: Vec<String>,
}

impl Cli {
    fn apply(self, config: &mut ServerConfig) {
        if let Some(bind) = self.bind {
            config.bind = bind;
        }
        if let Some(root) = self.root {
            config.root_dir = Some(root);
        }
        if let Some(mode) = self.session_mode {
            config.session_mode = mode;
        }
        if let Some(profile) = self.profile {
            config.registry_profile = profile;
        }
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }
        if self.json_logs {
            config.logging.json = true;
        }
        for origin in &self.allow_origins {
            config.add_origin(origin);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = ServerConfig::load(cli.config.as_deref())?;
    config.apply_env()?;
    cli.apply(&mut config);

    let _guard = logging::init(&config.logging)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        session_mode = %config.session_mode,
        profile = %config.registry_profile,
        origins = ?config.allowed_origins,
        "starting rtermd"
    );

    let state = Arc::new(AppState::from_config(&config)?);
    http::serve(&config, state, shutdown_signal()).await?;

    info!("rtermd stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
