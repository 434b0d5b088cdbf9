use clap::Parser;
use std::path::PathBuf;

use skilldex_config::ConfigLoader;
use skilldex_store::SkillStore;

/// skilldex — read-only HTTP query service over a skills dataset
#[derive(Parser)]
#[command(name = "skilldex", version, about, long_about = None)]
struct Cli {
    /// Path to skilldex.toml config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen port override (keeps the configured host)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level override (e.g. debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all log output (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    async fn run(self) -> skilldex_core::Result<()> {
        // Load config first so we can use it for log format
        let config_loader = ConfigLoader::load(self.config.as_deref())?;
        let mut config = config_loader.get();

        // Resolve log level: --verbose > --quiet > --log-level > config default
        let log_level = if self.verbose {
            "debug".to_string()
        } else if self.quiet {
            "error".to_string()
        } else {
            self.log_level
                .clone()
                .unwrap_or_else(|| config.logging.level.clone())
        };

        // Initialize tracing with the configured format
        let env_filter = || {
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level))
        };
        match config.logging.format.as_str() {
            "json" => tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .json()
                .with_target(true)
                .init(),
            "compact" => tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .compact()
                .with_target(false)
                .init(),
            _ => tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .init(),
        }

        if let Some(port) = self.port {
            config.server.set_port(port);
        }

        let store = SkillStore::new(config.data.path.clone());
        skilldex_server::start_server(config.server, store).await
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
