use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "dine")]
#[command(about = "Restaurant ordering session CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute layered config hash + print canonical JSON
    ConfigHash {
        /// Paths in merge order (base -> venue -> local overrides...)
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// List the menu items visible under a category / search filter
    Menu {
        /// Layered config paths in merge order
        #[arg(long = "config")]
        config_paths: Vec<String>,

        /// Fail when the config contains keys nothing reads
        #[arg(long, default_value_t = false)]
        strict_config: bool,

        /// Category id, or "all"
        #[arg(long, default_value = "all")]
        category: String,

        /// Case-insensitive substring of the item name
        #[arg(long, default_value = "")]
        query: String,
    },

    /// Run a scripted visit through a live session and print the final view
    Play {
        /// Layered config paths in merge order
        #[arg(long = "config")]
        config_paths: Vec<String>,

        /// Fail when the config contains keys nothing reads
        #[arg(long, default_value_t = false)]
        strict_config: bool,

        /// YAML list of intents
        #[arg(long)]
        script: String,

        /// Let the countdown run this many wall-clock seconds before stopping
        #[arg(long, default_value_t = 0)]
        wait_secs: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env.local if present (dev only; silently ignored if missing).
    let _ = dotenvy::from_filename(".env.local");
    init_tracing();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::ConfigHash { paths } => {
            let loaded = dine_config::load_layered_yaml(&paths)?;
            println!("config_hash={}", loaded.config_hash);
            println!("{}", loaded.canonical_json);
        }

        Commands::Menu {
            config_paths,
            strict_config,
            category,
            query,
        } => {
            let cfg = commands::load_config(&config_paths, strict_config)?;
            commands::menu::print_menu(&cfg, &category, &query)?;
        }

        Commands::Play {
            config_paths,
            strict_config,
            script,
            wait_secs,
        } => {
            let cfg = commands::load_config(&config_paths, strict_config)?;
            commands::play::play_script(&cfg, &script, wait_secs).await?;
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
