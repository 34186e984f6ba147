use clap::Parser;
use converse::LogLevel;
use converse::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "converse", about = "Chat with a conversation endpoint from your terminal")]
struct Args {
    /// Base URL of the dashboard serving the conversation endpoint
    #[arg(long)]
    base_url: Option<String>,

    /// Path of the conversation endpoint
    #[arg(long)]
    endpoint: Option<String>,

    /// Name used for the user avatar initials
    #[arg(long)]
    user_name: Option<String>,

    /// File log verbosity
    #[arg(long, default_value_t, value_enum)]
    log_level: LogLevel,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to converse.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("converse.log") {
        let _ = WriteLogger::init(args.log_level.into(), log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        config::ConverseConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            base_url: args.base_url,
            endpoint: args.endpoint,
            user_name: args.user_name,
        },
    );

    log::info!(
        "Converse starting up against {}{}",
        resolved.base_url,
        resolved.endpoint
    );

    converse::tui::run(resolved)
}
