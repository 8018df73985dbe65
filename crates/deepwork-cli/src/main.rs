use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "deepwork", version, about = "Deepwork CLI")]
struct Cli {
    /// Directory holding deepwork.db and config.toml
    #[arg(long, global = true, env = "DEEPWORK_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a completed deep-work session
    Achieve(commands::achieve::AchieveArgs),
    /// Achievement log
    Log {
        #[command(subcommand)]
        action: commands::log::LogAction,
    },
    /// Workday streak
    Streak {
        #[command(subcommand)]
        action: commands::streak::StreakAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = commands::Context::new(cli.data_dir).and_then(|ctx| match cli.command {
        Commands::Achieve(args) => commands::achieve::run(&ctx, args),
        Commands::Log { action } => commands::log::run(&ctx, action),
        Commands::Streak { action } => commands::streak::run(&ctx, action),
        Commands::Config { action } => commands::config::run(&ctx, action),
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
