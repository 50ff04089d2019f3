use anyhow::Context;
use clap::{Parser, Subcommand};
use padcalc::config::Config;
use padcalc::session::Session;
use padcalc::theme::Theme;
use padcalc::{keypad, logging, repl};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "padcalc", version, about = "Pocket calculator for the terminal")]
struct Cli {
    /// Read single key presses instead of lines
    #[arg(long)]
    keypad: bool,

    #[arg(long, value_enum)]
    theme: Option<Theme>,

    /// Config file, defaults to <config dir>/padcalc/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log every calculator transition to stderr
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Press the given keys and print the final display
    Eval {
        #[arg(required = true, allow_hyphen_values = true)]
        keys: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log = logging::init(cli.debug);

    let mut config = match cli.config.or_else(Config::default_path) {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    config.keypad |= cli.keypad;
    debug!(?config, "Starting");

    let mut session = Session::new(&config, Some(log));
    match cli.command {
        Some(Commands::Eval { keys }) => repl::eval(&mut session, &keys.join(" "))?,
        None if config.keypad => keypad::run(&mut session).context("keypad mode")?,
        None => repl::run(&mut session).context("line mode")?,
    }
    Ok(())
}
