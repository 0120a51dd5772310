use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

mod commands;

/// Deterministic outpatient triage routing.
#[derive(Parser, Debug)]
#[command(name = "carepath", author, version, about, long_about = None)]
struct Cli {
    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true, default_value_t = false)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Route an intake form read from a JSON file
    Evaluate {
        intake: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Route one of the built-in demo presets
    Preset {
        id: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Route every built-in preset and list the outcomes
    Presets,
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Print the evaluation as JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Ask the configured model for a plain-language explanation
    #[arg(long, default_value_t = false)]
    explain: bool,

    /// Write an export bundle; without DIR, uses the configured export dir
    #[arg(long, value_name = "DIR", num_args = 0..=1)]
    export: Option<Option<PathBuf>>,
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the effective config, env overrides applied
    Show,
    /// Write a default config file
    Init {
        /// Overwrite an existing config
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    match cli.command {
        Command::Evaluate { intake, output } => commands::evaluate(&intake, &output).await,
        Command::Preset { id, output } => commands::preset(&id, &output).await,
        Command::Presets => commands::presets(),
        Command::Config { action } => match action {
            ConfigAction::Show => commands::config_show(),
            ConfigAction::Init { force } => commands::config_init(force),
        },
    }
}
