use anyhow::Result;
use clap::Parser;
use prosafe_exporter::{config::Config, server};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/Default.toml")]
    config: String,

    /// Switch host or IP (overrides config)
    #[arg(long, env = "SWITCH_HOST")]
    switch_host: Option<String>,

    /// Switch web UI password (overrides config)
    #[arg(long, env = "SWITCH_PASSWORD", hide_env_values = true)]
    switch_password: Option<String>,

    /// Port to listen on for metrics
    #[arg(short, long, env = "PORT", default_value = "9493")]
    port: u16,

    /// Address to bind to
    #[arg(short, long, env = "EXPORTER_ADDR", default_value = "0.0.0.0")]
    addr: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ProSafe Web Exporter v{}", env!("CARGO_PKG_VERSION"));

    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let mut config = Config::load(&args.config)?;

    // Override with CLI arguments if provided
    if let Some(host) = args.switch_host {
        config.switch.host = host;
    }
    if let Some(password) = args.switch_password {
        config.switch.password = Some(secrecy::SecretString::new(password.into()));
    }
    config.server.port = args.port;
    config.server.addr = args.addr;

    if let Err(e) = config.switch.credential() {
        error!("{}", e);
        std::process::exit(1);
    }

    info!("Switch host: {}", config.switch.host);
    info!("Listening on port: {}", config.server.port);

    // Start the metrics server
    if let Err(e) = server::start(config).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
