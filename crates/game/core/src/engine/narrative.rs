//! Player-facing narrative text.

use crate::action::Direction;
use crate::config::Mode;
use crate::engine::Objective;
use crate::perception::Senses;

pub const REVERTED: &str = "You were stepped back one tile. Continue carefully.";
pub const AIM_ON: &str = "Aim mode on. Press a direction to fire.";
pub const AIM_OFF: &str = "Aim mode off. Movement restored.";
pub const WON: &str = "You found the gold and escaped. Victory.";
pub const LOST_PIT: &str = "The ground gave way. There was no bottom.";
pub const LOST_WUMPUS: &str = "The Wumpus found you in the dark.";
pub const SHOT_HIT: &str = "Your arrow finds its mark. The Wumpus is dead.";

pub fn opening(mode: Mode) -> &'static str {
    match mode {
        Mode::Practice => "Dismiss the tutorial prompts to begin.",
        Mode::Authoritative => "The hunt begins. Find the gold. Survive.",
    }
}

/// Describes the strongest cue on a tile; empty when nothing is sensed.
pub fn senses(senses: Senses) -> &'static str {
    match (senses.breeze, senses.stench, senses.shine) {
        (true, true, _) => "You feel both a draft and a stench. Tread carefully.",
        (true, false, _) => "You feel a cold draft. A pit may be nearby.",
        (false, true, _) => "Something foul is close. The Wumpus is near.",
        (false, false, true) => "A faint glimmer catches your eye.",
        (false, false, false) => "",
    }
}

pub fn hint(objective: Objective, wumpus_alive: bool) -> &'static str {
    match objective {
        Objective::Survey => "Explore safely. Use clues before committing to unknown tiles.",
        Objective::Hunt => "Press Space to enter Aim Mode, then fire with a direction key.",
        Objective::Treasure if wumpus_alive => "Gold is close. Step carefully and claim it.",
        Objective::Treasure => "The Wumpus is down. Keep hunting for the gold.",
    }
}

pub fn missed(direction: Direction, senses_after: Senses) -> String {
    let mut message =
        format!("Your arrow flies {direction} through the corridor but finds nothing.");
    let cue = self::senses(senses_after);
    if !cue.is_empty() {
        message.push(' ');
        message.push_str(cue);
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_cues_take_precedence() {
        let both = Senses {
            breeze: true,
            stench: true,
            shine: true,
        };
        assert!(senses(both).contains("draft and a stench"));
        assert_eq!(senses(Senses::NONE), "");
    }

    #[test]
    fn miss_names_the_direction_and_appends_cues() {
        let message = missed(
            Direction::North,
            Senses {
                breeze: true,
                ..Senses::NONE
            },
        );
        assert_eq!(
            message,
            "Your arrow flies NORTH through the corridor but finds nothing. \
             You feel a cold draft. A pit may be nearby."
        );
    }
}
