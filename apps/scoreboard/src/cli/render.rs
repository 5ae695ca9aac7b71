//! Plain-text summaries for the terminal.

use std::fmt::Write;

use time::macros::format_description;
use time::OffsetDateTime;

use crate::domain::duration::format_duration_ms;
use crate::domain::snapshot::{GameSnapshot, GameStatus};
use crate::repos::turns::Turn;

fn timestamp(at: OffsetDateTime) -> String {
    at.format(format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second]"
    ))
    .unwrap_or_else(|_| at.to_string())
}

fn player_label(snapshot: &GameSnapshot, player_id: i64) -> String {
    snapshot
        .player(player_id)
        .map(|p| format!("{} ({})", p.name, p.color))
        .unwrap_or_else(|| format!("player #{player_id}"))
}

/// One-line state: running/paused/completed.
pub fn status_line(snapshot: &GameSnapshot) -> String {
    match snapshot.status() {
        GameStatus::Ongoing {
            is_paused: true, ..
        } => "ongoing (paused)".to_string(),
        GameStatus::Ongoing { .. } => "ongoing".to_string(),
        GameStatus::Completed {
            winner_player_id, ..
        } => format!("won by {}", player_label(snapshot, winner_player_id)),
    }
}

pub fn turn_line(snapshot: &GameSnapshot, turn: &Turn) -> String {
    format!(
        "turn #{} {} rolled {} (total {}) in {}",
        turn.id,
        player_label(snapshot, turn.player_id),
        turn.dice,
        turn.dice.total(),
        format_duration_ms(turn.duration_ms)
    )
}

/// Multi-line summary of one game as of `now`.
pub fn summary(snapshot: &GameSnapshot, now: OffsetDateTime) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "game #{}  {}  started {}",
        snapshot.id(),
        status_line(snapshot),
        timestamp(snapshot.game.start_time)
    );
    let _ = write!(
        out,
        "elapsed {}",
        format_duration_ms(snapshot.total_elapsed_ms(now))
    );
    if let Some(current) = snapshot.current_player() {
        let _ = write!(
            out,
            "  current turn {}  up next: {} ({})",
            format_duration_ms(snapshot.current_turn_elapsed_ms(now)),
            current.name,
            current.color
        );
    }
    if let Some(end) = snapshot.game.end_time {
        let _ = write!(out, "  ended {}", timestamp(end));
    }
    let _ = writeln!(out);

    for (player, turns) in snapshot.turns_by_player() {
        let _ = writeln!(out, "  {:<16} {:<7} {turns} turns", player.name, player.color.label());
    }
    for turn in snapshot.turns.iter().take(5) {
        let _ = writeln!(out, "  {}", turn_line(snapshot, turn));
    }
    if snapshot.has_picture {
        let _ = writeln!(out, "  board picture attached");
    }
    out.trim_end().to_string()
}

/// One line per game.
pub fn listing(games: &[GameSnapshot], now: OffsetDateTime) -> String {
    if games.is_empty() {
        return "no games yet".to_string();
    }
    games
        .iter()
        .map(|g| {
            format!(
                "#{:<5} {}  {} players  {} turns  {}  {}",
                g.id(),
                timestamp(g.game.start_time),
                g.players.len(),
                g.turns.len(),
                format_duration_ms(g.total_elapsed_ms(now)),
                status_line(g)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
