use crate::action::{ActionTransition, Input};
use crate::engine::{Phase, Rejection, StepEvent, narrative};
use crate::perception::Cue;
use crate::state::{Grid, Position, Revert, Session};

/// Cardinal direction. NORTH decreases `y`, EAST increases `x`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}

/// One step in `direction`, clamped to the grid.
///
/// Returns `position` unchanged when the step would leave the grid.
pub fn resolve_move(grid: Grid, position: Position, direction: Direction) -> Position {
    let (dx, dy) = direction.delta();
    grid.clamp(Position::new(position.x + dx, position.y + dy))
}

/// Move transition. Only accepted while exploring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveAction {
    pub direction: Direction,
}

impl MoveAction {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }

    /// Picks the phase entered after a safe step and narrates the tile.
    ///
    /// With interrupts enabled the first unseen active cue (in priority order)
    /// claims a one-shot lesson; only that cue is marked seen so the others
    /// still get their lesson later.
    fn settle(session: &mut Session) -> Phase {
        let Some(objective) = session.phase.objective() else {
            return session.phase;
        };
        let senses = session.senses();
        let fresh = if session.config.interrupts {
            Cue::PRIORITY
                .into_iter()
                .find(|cue| senses.is_active(*cue) && !session.seen.contains(cue.flag()))
        } else {
            None
        };

        match fresh {
            Some(cue) => session.seen |= cue.flag(),
            None => session.seen |= senses.flags(),
        }

        let text = match narrative::senses(senses) {
            "" => session.hint(objective),
            text => text,
        };
        session.narrate(text);

        match fresh {
            Some(cue) => Phase::Interrupt {
                cue,
                resume: objective,
            },
            None => Phase::Exploring(objective),
        }
    }
}

impl ActionTransition for MoveAction {
    fn pre_validate(&self, session: &Session) -> Result<(), Rejection> {
        match session.phase {
            Phase::Exploring(_) => Ok(()),
            phase => Err(Rejection::NotPermitted {
                input: Input::Move(self.direction),
                phase,
            }),
        }
    }

    fn apply(&self, session: &mut Session) -> StepEvent {
        let from = session.player.position;
        let to = resolve_move(session.grid(), from, self.direction);
        if to == from {
            return StepEvent::Blocked {
                at: from,
                direction: self.direction,
            };
        }

        let resume = session.phase.objective();
        session.player.step_to(to);
        session.turn += 1;

        let fatal = if session.layout.is_pit(to) {
            Some((Phase::LostPit, narrative::LOST_PIT))
        } else if session.wumpus.occupies(to) {
            Some((Phase::LostWumpus, narrative::LOST_WUMPUS))
        } else {
            None
        };

        if let Some((phase, text)) = fatal {
            if session.config.is_practice() {
                session.revert = resume.map(|resume| Revert {
                    position: from,
                    resume,
                });
            }
            session.phase = phase;
            session.narrate(text);
        } else if to == session.layout.gold() {
            session.phase = Phase::Won;
            session.narrate(narrative::WON);
        } else {
            session.phase = Self::settle(session);
        }

        StepEvent::Moved { from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    #[test]
    fn direction_labels_match_the_wire_verbs() {
        assert_eq!(Direction::North.to_string(), "NORTH");
        assert_eq!(Direction::from_str("west").unwrap(), Direction::West);
        assert_eq!(Direction::from_str("EAST").unwrap(), Direction::East);
    }

    #[test]
    fn north_decreases_y() {
        let grid = Grid::new(4).unwrap();
        let start = Position::new(1, 1);
        assert_eq!(resolve_move(grid, start, Direction::North), Position::new(1, 0));
        assert_eq!(resolve_move(grid, start, Direction::South), Position::new(1, 2));
        assert_eq!(resolve_move(grid, start, Direction::East), Position::new(2, 1));
        assert_eq!(resolve_move(grid, start, Direction::West), Position::new(0, 1));
    }

    #[test]
    fn boundary_moves_are_clamped() {
        let grid = Grid::new(3).unwrap();
        assert_eq!(
            resolve_move(grid, Position::ORIGIN, Direction::West),
            Position::ORIGIN
        );
        assert_eq!(
            resolve_move(grid, Position::new(2, 2), Direction::South),
            Position::new(2, 2)
        );
    }

    fn direction() -> impl Strategy<Value = Direction> {
        prop::sample::select(Direction::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn resolved_moves_stay_on_the_grid(
            size in 2u32..=16,
            x in 0i32..16,
            y in 0i32..16,
            dir in direction(),
        ) {
            let grid = Grid::new(size).unwrap();
            let start = grid.clamp(Position::new(x, y));
            let end = resolve_move(grid, start, dir);
            prop_assert!(grid.contains(end));
            prop_assert!(end.manhattan(start) <= 1);
        }
    }
}
