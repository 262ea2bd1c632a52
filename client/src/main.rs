mod app;
mod command;
mod config;
mod ui;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use common::GameError;
use common::config::Validate;
use common::games::tictactoe::{Difficulty, TicTacToeSession};
use common::logger::{LogLevel, init_logger};
use common::{log, log_error};

use app::Outcome;
use command::{Command, HELP};
use config::{Config, get_config_manager};

#[derive(Parser, Debug)]
#[command(name = "tictactoe_client")]
#[command(about = "Tic-tac-toe with time travel and a computer opponent", long_about = None)]
struct Args {
    /// Settings file (defaults to tictactoe_client_config.yaml next to the executable)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Computer difficulty: easy or hard
    #[arg(long)]
    difficulty: Option<String>,

    /// Seed for the easy computer's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Play X and O yourself instead of against the computer
    #[arg(long)]
    two_players: bool,

    /// List moves newest first
    #[arg(long)]
    descending: bool,

    /// Log level: error, info or debug
    #[arg(long)]
    log_level: Option<String>,

    /// Write the effective settings back to the settings file
    #[arg(long)]
    save_config: bool,
}

fn apply_overrides(mut config: Config, args: &Args) -> Result<Config, GameError> {
    if let Some(difficulty) = &args.difficulty {
        config.game.difficulty = difficulty.parse::<Difficulty>()?;
    }
    if let Some(seed) = args.seed {
        config.game.seed = Some(seed);
    }
    if args.two_players {
        config.game.computer_opponent = false;
    }
    if args.descending {
        config.game.descending = true;
    }
    if let Some(level) = &args.log_level {
        config.log_level = level.parse::<LogLevel>().map_err(GameError::Config)?;
    }
    config.validate().map_err(GameError::Config)?;
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.as_deref());
    let config = config_manager.get_config().map_err(GameError::Config)?;
    let config = apply_overrides(config, &args)?;

    init_logger(config.log_prefix.clone(), config.log_level);

    if args.save_config {
        config_manager
            .set_config(&config)
            .map_err(GameError::Config)?;
        log!("Settings saved");
    }

    let mut session = TicTacToeSession::create(config.game.session_settings());
    run(&mut session)?;
    session.dispose();

    Ok(())
}

fn run(session: &mut TicTacToeSession) -> std::io::Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    writeln!(stdout, "{}\n", HELP)?;
    write!(stdout, "{}\n> ", ui::render_screen(session))?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(stdout, "> ")?;
            stdout.flush()?;
            continue;
        }

        let outcome = Command::parse(&line).and_then(|command| app::apply(session, command));
        match outcome {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Redraw) => write!(stdout, "\n{}", ui::render_screen(session))?,
            Ok(Outcome::Message(message)) => writeln!(stdout, "{}", message)?,
            Err(err) => {
                log_error!("{}", err);
                writeln!(stdout, "{}", err)?;
            }
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["tictactoe_client"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_cli_flags_override_config() {
        let config = apply_overrides(
            Config::default(),
            &args(&["--difficulty", "hard", "--seed", "5", "--two-players", "--descending"]),
        )
        .unwrap();
        assert_eq!(config.game.difficulty, Difficulty::Hard);
        assert_eq!(config.game.seed, Some(5));
        assert!(!config.game.computer_opponent);
        assert!(config.game.descending);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let config = apply_overrides(Config::default(), &args(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_bad_flags_are_rejected() {
        assert_eq!(
            apply_overrides(Config::default(), &args(&["--difficulty", "extreme"])),
            Err(GameError::UnsupportedDifficulty("extreme".to_string()))
        );
        assert!(apply_overrides(Config::default(), &args(&["--log-level", "loud"])).is_err());
    }
}
