mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::config::ConfigSubcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "roster",
    about = "Map a commit email to its Slack notification targets from the team roster sheet",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .roster/ or .git/)
    #[arg(long, global = true, env = "ROSTER_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize roster config in the current project
    Init,

    /// Look up the notification targets for one commit email
    Lookup {
        /// Commit email to resolve
        #[arg(long)]
        email: String,

        /// Also write the JSON result to this file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print the full email-to-targets mapping
    Dump,

    /// Inspect and validate the roster configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root),
        Commands::Lookup { email, output } => {
            cmd::lookup::run(&root, &email, output.as_deref())
        }
        Commands::Dump => cmd::dump::run(&root, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
