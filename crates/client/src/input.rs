//! Line-to-command mapping for the terminal client.
//!
//! Drivers stay agnostic about concrete key bindings: they only ever see a
//! [`KeyAction`].
use std::str::FromStr;

use wumpus_core::Direction;

/// High-level outcome of reading one input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Move, or fire when aiming.
    DirectionalInput(Direction),
    ToggleAim,
    /// Dismiss the current popup or terminal screen.
    Acknowledge,
    /// Discard the session and start a fresh one.
    Reset,
    /// No meaningful command was produced.
    None,
}

/// Converts a raw input line into a command.
///
/// Blank lines acknowledge, so pressing Enter advances popups.
pub fn parse_line(line: &str) -> KeyAction {
    let word = line.trim();
    if word.is_empty() {
        return KeyAction::Acknowledge;
    }
    // Lines are trimmed, so the aim key is spelled out as "space".
    match word.to_ascii_lowercase().as_str() {
        "w" | "k" => KeyAction::DirectionalInput(Direction::North),
        "s" | "j" => KeyAction::DirectionalInput(Direction::South),
        "d" | "l" => KeyAction::DirectionalInput(Direction::East),
        "a" | "h" => KeyAction::DirectionalInput(Direction::West),
        "f" | "aim" | "space" => KeyAction::ToggleAim,
        "ok" | "e" | "enter" => KeyAction::Acknowledge,
        "r" | "reset" => KeyAction::Reset,
        "q" | "quit" | "exit" => KeyAction::Quit,
        other => Direction::from_str(other)
            .map(KeyAction::DirectionalInput)
            .unwrap_or(KeyAction::None),
    }
}

/// One-line key reference shown under the board.
pub const HELP: &str =
    "w/a/s/d move (or fire while aiming) | f aim | Enter ok | r reset | q quit";
