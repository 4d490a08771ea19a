//! Plain-text presentation of a session snapshot.
use std::fmt::Write as _;

use wumpus_core::{Cue, Position, SessionSnapshot, Status};

const PLAYER: char = '@';
const EXPLORED: char = '.';
const UNKNOWN: char = '#';

/// Draws the board, north row first.
pub fn render_board(snapshot: &SessionSnapshot) -> String {
    let size = snapshot.grid_size as i32;
    let mut board = String::with_capacity(((size + 1) * size) as usize);
    for y in 0..size {
        for x in 0..size {
            let tile = Position::new(x, y);
            board.push(if tile == snapshot.player {
                PLAYER
            } else if snapshot.is_explored(tile) {
                EXPLORED
            } else {
                UNKNOWN
            });
        }
        board.push('\n');
    }
    board
}

/// Comma-separated active cues, or `none`.
pub fn describe_senses(snapshot: &SessionSnapshot) -> String {
    let active: Vec<&'static str> = Cue::PRIORITY
        .into_iter()
        .filter(|cue| snapshot.senses.is_active(*cue))
        .map(<&'static str>::from)
        .collect();
    if active.is_empty() {
        "none".to_string()
    } else {
        active.join(", ")
    }
}

/// Board, status line, senses and the latest message.
///
/// `status` overrides the snapshot status, which lets the live client show
/// its local aim overlay.
pub fn render_snapshot(snapshot: &SessionSnapshot, status: Status) -> String {
    let mut out = render_board(snapshot);
    let _ = writeln!(
        out,
        "Turn {} | Arrows {} | {}",
        snapshot.turn, snapshot.arrows_remaining, status
    );
    let _ = writeln!(out, "Senses: {}", describe_senses(snapshot));
    if !snapshot.message.is_empty() {
        let _ = writeln!(out, "{}", snapshot.message);
    }
    out
}
