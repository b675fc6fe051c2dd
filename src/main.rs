use clap::{ArgAction, Parser, builder::styling};
use eyre::Result;
use kibana_sync::cli::{self, Action};
use owo_colors::OwoColorize;

// CLI Styling
const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::BrightWhite.on_default())
    .usage(styling::AnsiColor::BrightWhite.on_default())
    .literal(styling::AnsiColor::Green.on_default())
    .placeholder(styling::AnsiColor::Cyan.on_default());

/// Import and export Kibana information
#[derive(Parser)]
#[command(name = "kibana-sync", version, styles = STYLES)]
struct Cli {
    /// Action to be performed
    action: Action,

    /// File to be imported/exported
    #[arg(long, default_value = "data.json")]
    filename: String,

    /// URL to Elasticsearch
    #[arg(long, default_value = "http://localhost:9200")]
    es_uri: String,

    /// Username to be used with Elasticsearch
    #[arg(long)]
    user: Option<String>,

    /// Password to be used with Elasticsearch
    #[arg(long)]
    password: Option<String>,

    /// The dotenv file to source credentials from
    #[arg(short, long, default_value = ".env")]
    env: String,

    /// Increases log verbosity for each occurrence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let env = env_logger::Env::default().filter_or("LOG_LEVEL", cli::log_level(cli.verbose));
    env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .init();

    match dotenvy::from_filename(&cli.env) {
        Ok(path) => log::debug!("Loaded environment from {}", path.display().bright_black()),
        Err(e) if e.not_found() => log::debug!("No dotenv file at {}", cli.env.bright_black()),
        Err(e) => return Err(e.into()),
    }

    let sync = cli::load_kibana_sync(&cli.es_uri, cli.user, cli.password)?;
    cli::run(&sync, cli.action, &cli.filename).await?;

    Ok(())
}
