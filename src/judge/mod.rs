//! Reconciliation judge.
//!
//! Two clients advance the same game independently and may disagree about
//! how it ended. The judge replays each side's claimed history and decides:
//!
//! - each side's starting string is decoded (a malformed one is no claim)
//! - its `-`-separated move log is replayed entry by entry; entries the
//!   rules reject are skipped
//! - if both replays agree on the winner, that is the result
//! - otherwise the strictly more advanced replay decides, and equal
//!   progress is `Undetermined`
//!
//! Everything here is pure: the same four strings always give the same
//! answer.

use tracing::{debug, warn};

use crate::core::{split_move_log, Color, Position};
use crate::rules::{GameResult, Output};

/// Outcome of replaying one side's history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Replay {
    pub position: Position,
    /// Log entries that resolved into events.
    pub applied: usize,
    /// Log entries the rules rejected or left incomplete.
    pub skipped: usize,
}

/// Replay `log` from the position encoded in `start`.
///
/// Returns `None` when `start` is not a valid position.
#[must_use]
pub fn replay(start: &str, log: &str) -> Option<Replay> {
    let mut position = match Position::from_fen(start) {
        Ok(position) => position,
        Err(error) => {
            warn!(%error, "Undecodable starting position");
            return None;
        }
    };

    let mut applied = 0;
    let mut skipped = 0;
    for (index, entry) in split_move_log(log).into_iter().enumerate() {
        match position.process_fen(entry) {
            Output::Events(_) => applied += 1,
            other => {
                skipped += 1;
                debug!(index, entry, output = ?other, "Skipped log entry");
            }
        }
    }

    Some(Replay {
        position,
        applied,
        skipped,
    })
}

/// Decide the winner from both sides' starting positions and move logs.
#[must_use]
pub fn winner(start_w: &str, start_b: &str, log_w: &str, log_b: &str) -> GameResult {
    let white = replay(start_w, log_w);
    let black = replay(start_b, log_b);

    let result = match (white, black) {
        (None, None) => GameResult::Undetermined,
        (Some(only), None) | (None, Some(only)) => {
            GameResult::from_winner(only.position.winner_color())
        }
        (Some(white), Some(black)) => reconcile(&white.position, &black.position),
    };
    debug!(%result, "Judged game");
    result
}

fn reconcile(white: &Position, black: &Position) -> GameResult {
    let white_claim = white.winner_color();
    let black_claim = black.winner_color();
    if white_claim == black_claim {
        return GameResult::from_winner(white_claim);
    }

    if white.is_later_than(black) {
        GameResult::from_winner(white_claim)
    } else if black.is_later_than(white) {
        GameResult::from_winner(black_claim)
    } else {
        GameResult::Undetermined
    }
}

/// Check that replaying both per-color logs from the opening reproduces
/// `position`.
///
/// Moves are taken from whichever log belongs to the color to move. Running
/// out of moves for the color to move while the other log still has entries
/// fails the check.
#[must_use]
pub fn verify_moves(position: &Position, log_w: &str, log_b: &str) -> bool {
    let moves_w = split_move_log(log_w);
    let moves_b = split_move_log(log_b);
    let mut next_w = moves_w.iter();
    let mut next_b = moves_b.iter();
    let mut remaining = moves_w.len() + moves_b.len();

    let mut fresh = Position::with_config(*position.config());
    while remaining > 0 {
        let entry = match fresh.active_color() {
            Color::White => next_w.next(),
            Color::Black => next_b.next(),
        };
        let Some(entry) = entry else {
            return false;
        };
        fresh.process_fen(entry);
        remaining -= 1;
    }

    fresh.fen() == position.fen()
}
