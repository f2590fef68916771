// ABOUTME: Entry point for the textlog binary.
// ABOUTME: Parses CLI arguments, initializes tracing, and runs a one-shot command or the HTTP session.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use textlog_core::{Action, LogName};
use textlog_server::{AppState, TextlogConfig, session};
use textlog_store::StorageManager;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Application data directory (overrides TEXTLOG_HOME)
    #[arg(long, global = true)]
    home: Option<PathBuf>,

    /// Name of the backing text file (overrides TEXTLOG_FILE)
    #[arg(long, global = true)]
    file: Option<LogName>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Command {
    /// Run the HTTP session until save-and-exit or Ctrl-C
    Serve,
    /// Append a line and print the accumulated contents
    Append { text: String },
    /// Print the accumulated contents
    Show,
    /// Discard all contents
    Clear,
}

impl Cli {
    /// Layer the command-line flags over the environment configuration.
    fn apply_overrides(&self, mut config: TextlogConfig) -> TextlogConfig {
        if let Some(home) = &self.home {
            config.home = home.clone();
        }
        if let Some(file) = &self.file {
            config.log_name = file.clone();
        }
        config
    }

    fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }
}

impl Command {
    /// The session action a one-shot command runs, or None for `serve`.
    fn action(self) -> Option<Action> {
        match self {
            Command::Serve => None,
            Command::Append { text } => Some(Action::Append { text }),
            Command::Show => Some(Action::Read),
            Command::Clear => Some(Action::Clear),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "textlog=debug,textlog_server=debug,textlog_store=debug,tower_http=debug"
                    .parse()
                    .expect("static filter directive is valid")
            }),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.apply_overrides(TextlogConfig::from_env()?);

    let storage = StorageManager::new(config.home.clone())?;
    let log = storage.open_log(&config.log_name);
    tracing::debug!("using text log at {}", log.path().display());

    match cli.command().action() {
        None => {
            tracing::info!("textlog starting up");
            let state = Arc::new(AppState::new(log));
            textlog_server::serve(config.bind, state).await?;
        }
        Some(action) => {
            let contents = session::apply(&log, &action)?;
            print!("{}", contents);
        }
    }
    Ok(())
}
