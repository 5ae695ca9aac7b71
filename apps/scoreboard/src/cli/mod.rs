//! Command-line front end over [`Scoreboard`].

pub mod render;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use migration::MigrationCommand;
use tracing::debug;

use crate::config::db::{DbKind, DbSettings};
use crate::domain::colors::Color;
use crate::domain::dice::Dice;
use crate::domain::ring::NewPlayer;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;
use crate::infra::db::build_pool;
use crate::infra::state::build_state;
use crate::services::scoreboard::Scoreboard;

#[derive(Debug, Parser)]
#[command(name = "scoreboard")]
#[command(about = "Track turns, time and winners of tabletop game sessions")]
pub struct Cli {
    /// SQLite database file (overrides SCOREBOARD_DB_PATH)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Use a throwaway in-memory database
    #[arg(long, global = true, conflicts_with = "db")]
    pub memory: bool,

    /// Run the command but roll back instead of committing
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start a game; seating follows the order of --player flags
    Start {
        /// Player as NAME:COLOR (e.g. Alice:red); NAME may be empty
        #[arg(long = "player", short = 'p', required = true, value_parser = parse_player)]
        players: Vec<NewPlayer>,
    },
    /// Record the current player's turn
    Turn(DiceArgs),
    /// Record the final turn and end the game
    Complete(DiceArgs),
    /// Undo the most recent turn (reopens a completed game)
    Abort { game: i64 },
    Pause { game: i64 },
    Resume { game: i64 },
    /// Show one game
    Show {
        game: i64,
        /// Print JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// List all games, newest first
    List,
    /// Delete a game with its players, turns and picture
    Delete { game: i64 },
    /// Manage the board picture of a completed game
    #[command(subcommand)]
    Picture(PictureCommand),
    /// Apply or inspect schema migrations
    Migrate {
        #[arg(value_enum)]
        command: MigrateArg,
    },
}

#[derive(Debug, Args)]
pub struct DiceArgs {
    pub game: i64,
    /// White die (1-6)
    pub white: i16,
    /// Red die (1-6)
    pub red: i16,
    /// Event die: A-D or yellow/blue/green/black
    pub event: String,
}

impl DiceArgs {
    fn dice(&self) -> Result<Dice, AppError> {
        Ok(Dice::from_raw(self.white, self.red, &self.event)?)
    }
}

#[derive(Debug, Subcommand)]
pub enum PictureCommand {
    Upload {
        game: i64,
        file: PathBuf,
        /// Defaults to a guess from the file extension
        #[arg(long)]
        content_type: Option<String>,
    },
    /// Write the stored picture to FILE
    Save { game: i64, file: PathBuf },
    Delete { game: i64 },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MigrateArg {
    Up,
    Down,
    Fresh,
    Reset,
    Status,
}

impl From<MigrateArg> for MigrationCommand {
    fn from(arg: MigrateArg) -> Self {
        match arg {
            MigrateArg::Up => MigrationCommand::Up,
            MigrateArg::Down => MigrationCommand::Down,
            MigrateArg::Fresh => MigrationCommand::Fresh,
            MigrateArg::Reset => MigrationCommand::Reset,
            MigrateArg::Status => MigrationCommand::Status,
        }
    }
}

/// Parse `NAME:COLOR`. The color is taken after the last colon.
pub fn parse_player(raw: &str) -> Result<NewPlayer, String> {
    let (name, color) = raw
        .rsplit_once(':')
        .ok_or_else(|| format!("expected NAME:COLOR, got '{raw}'"))?;
    let color: Color = color.parse().map_err(|e: DomainError| e.to_string())?;
    Ok(NewPlayer::new(name, color))
}

/// Best-effort MIME type from a file extension.
pub fn guess_content_type(path: &std::path::Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("heic") => "image/heic",
        _ => "application/octet-stream",
    }
}

/// Database settings from the environment with command-line overrides applied.
pub fn db_settings(cli: &Cli) -> Result<DbSettings, AppError> {
    let mut settings = DbSettings::from_env()?;
    if cli.memory {
        settings.kind = DbKind::SqliteMemory;
    } else if let Some(path) = &cli.db {
        settings.kind = DbKind::SqliteFile;
        settings.path = path.clone();
    }
    Ok(settings)
}

fn io_error(context: &str, path: &std::path::Path, e: std::io::Error) -> AppError {
    AppError::internal(format!("{context} {}: {e}", path.display()))
}

/// Execute one command and return what should be printed.
pub async fn run(cli: Cli) -> Result<String, AppError> {
    let settings = db_settings(&cli)?;
    debug!(db_kind = %settings.kind, path = %settings.path.display(), "cli settings");

    if let Command::Migrate { command } = cli.command {
        let db = build_pool(&settings).await?;
        migration::migrate(&db, command.into()).await?;
        let applied = migration::count_applied_migrations(&db).await?;
        return Ok(format!("migrations applied: {applied}"));
    }

    let state = build_state().with_settings(settings).build().await?;
    let board = Scoreboard::new(state);
    let now = board.state().now();

    match cli.command {
        Command::Start { players } => {
            let snapshot = board.start_game(players).await?;
            Ok(render::summary(&snapshot, now))
        }
        Command::Turn(args) => {
            let turn = board.record_turn(args.game, args.dice()?).await?;
            let snapshot = board.get_game(args.game).await?;
            Ok(format!(
                "{}\n{}",
                render::turn_line(&snapshot, &turn),
                render::summary(&snapshot, now)
            ))
        }
        Command::Complete(args) => {
            board.complete_game(args.game, args.dice()?).await?;
            let snapshot = board.get_game(args.game).await?;
            Ok(render::summary(&snapshot, now))
        }
        Command::Abort { game } => {
            let turn = board.abort_last_turn(game).await?;
            let snapshot = board.get_game(game).await?;
            Ok(format!(
                "aborted turn #{} ({})\n{}",
                turn.id,
                turn.dice,
                render::summary(&snapshot, now)
            ))
        }
        Command::Pause { game } => {
            let changed = board.pause_game(game).await?;
            Ok(if changed { "paused" } else { "already paused" }.to_string())
        }
        Command::Resume { game } => {
            let changed = board.resume_game(game).await?;
            Ok(if changed { "resumed" } else { "not paused" }.to_string())
        }
        Command::Show { game, json } => {
            let snapshot = board.get_game(game).await?;
            if json {
                serde_json::to_string_pretty(&snapshot)
                    .map_err(|e| AppError::internal(format!("failed to encode game: {e}")))
            } else {
                Ok(render::summary(&snapshot, now))
            }
        }
        Command::List => {
            let games = board.get_all_games().await?;
            Ok(render::listing(&games, now))
        }
        Command::Delete { game } => {
            board.delete_game(game).await?;
            Ok(format!("deleted game #{game}"))
        }
        Command::Picture(PictureCommand::Upload {
            game,
            file,
            content_type,
        }) => {
            let data = std::fs::read(&file).map_err(|e| io_error("failed to read", &file, e))?;
            let content_type =
                content_type.unwrap_or_else(|| guess_content_type(&file).to_string());
            let picture = board.upload_board_picture(game, content_type, data).await?;
            Ok(format!(
                "stored picture for game #{game} ({}, {} bytes)",
                picture.content_type,
                picture.data.len()
            ))
        }
        Command::Picture(PictureCommand::Save { game, file }) => {
            let picture = board.get_board_picture(game).await?.ok_or_else(|| {
                AppError::not_found(
                    ErrorCode::PictureNotFound,
                    format!("Game {game} has no board picture"),
                )
            })?;
            std::fs::write(&file, &picture.data)
                .map_err(|e| io_error("failed to write", &file, e))?;
            Ok(format!("wrote {} bytes to {}", picture.data.len(), file.display()))
        }
        Command::Picture(PictureCommand::Delete { game }) => {
            let removed = board.delete_board_picture(game).await?;
            Ok(if removed {
                format!("deleted picture of game #{game}")
            } else {
                format!("game #{game} has no picture")
            })
        }
        Command::Migrate { .. } => Err(AppError::internal("migrate handled above")),
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    fn player_args() {
        let p = parse_player("Alice:red").unwrap();
        assert_eq!(p, NewPlayer::new("Alice", Color::Red));

        let blank = parse_player(":Blue").unwrap();
        assert_eq!(blank.display_name(), "Blue");

        assert!(parse_player("Alice").is_err());
        assert!(parse_player("Alice:purple").is_err());
    }

    #[test]
    fn content_type_from_extension() {
        assert_eq!(guess_content_type(std::path::Path::new("b.JPG")), "image/jpeg");
        assert_eq!(
            guess_content_type(std::path::Path::new("board")),
            "application/octet-stream"
        );
    }

    #[test]
    fn parses_turn_command() {
        let cli = Cli::try_parse_from(["scoreboard", "--memory", "turn", "3", "4", "5", "B"])
            .unwrap();
        assert!(cli.memory);
        match cli.command {
            Command::Turn(args) => {
                assert_eq!(args.game, 3);
                assert_eq!(args.dice().unwrap().total(), 9);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn bad_dice_report_invalid_dice() {
        let cli =
            Cli::try_parse_from(["scoreboard", "complete", "1", "7", "1", "A"]).unwrap();
        let Command::Complete(args) = cli.command else {
            panic!("expected complete");
        };
        assert_eq!(args.dice().unwrap_err().code(), ErrorCode::InvalidDice);
    }

    #[test]
    fn start_requires_players() {
        assert!(Cli::try_parse_from(["scoreboard", "start"]).is_err());
        let cli = Cli::try_parse_from([
            "scoreboard", "start", "-p", "Alice:red", "-p", "Bob:blue",
        ])
        .unwrap();
        let Command::Start { players } = cli.command else {
            panic!("expected start");
        };
        assert_eq!(players.len(), 2);
    }

    #[tokio::test]
    #[serial]
    async fn runs_against_memory_db() -> Result<(), AppError> {
        let cli = Cli::try_parse_from(["scoreboard", "--memory", "list"])
            .map_err(|e| AppError::internal(e.to_string()))?;
        let out = run(cli).await?;
        assert_eq!(out, "no games yet");
        Ok(())
    }
}
