//! Arrow combat.
//!
//! An arrow flies from the shooter to the edge of the grid along one axis.
//! There are no walls, so anything on that half-line is in the line of fire.

use crate::action::{ActionTransition, Direction, Input};
use crate::engine::{Objective, Phase, Rejection, StepEvent, narrative};
use crate::state::{Position, Session, Wumpus};

/// Result of a resolved shot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shot {
    pub hit: bool,
}

/// True when `target` lies strictly beyond `shooter` in `direction`.
pub fn on_ray(shooter: Position, direction: Direction, target: Position) -> bool {
    match direction {
        Direction::North => target.x == shooter.x && target.y < shooter.y,
        Direction::South => target.x == shooter.x && target.y > shooter.y,
        Direction::East => target.y == shooter.y && target.x > shooter.x,
        Direction::West => target.y == shooter.y && target.x < shooter.x,
    }
}

/// Fires along `direction`, killing the Wumpus if it is alive and in line.
pub fn resolve_shot(shooter: Position, direction: Direction, wumpus: &mut Wumpus) -> Shot {
    let hit = wumpus.alive && on_ray(shooter, direction, wumpus.position);
    if hit {
        wumpus.slay();
    }
    Shot { hit }
}

/// Shoot transition. Only accepted while aiming.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShootAction {
    pub direction: Direction,
}

impl ShootAction {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }
}

impl ActionTransition for ShootAction {
    fn pre_validate(&self, session: &Session) -> Result<(), Rejection> {
        if !session.phase.is_aiming() {
            return Err(Rejection::NotPermitted {
                input: Input::Shoot(self.direction),
                phase: session.phase,
            });
        }
        if session.player.arrows == 0 {
            return Err(Rejection::NoArrows);
        }
        Ok(())
    }

    fn apply(&self, session: &mut Session) -> StepEvent {
        let shot = resolve_shot(
            session.player.position,
            self.direction,
            &mut session.wumpus,
        );
        // The quiver holds one arrow; any shot empties it.
        session.player.arrows = 0;
        session.turn += 1;

        if shot.hit {
            session.phase = Phase::WumpusKilled;
            session.narrate(narrative::SHOT_HIT);
        } else {
            let objective = session.phase.objective().unwrap_or(Objective::Survey);
            session.phase = Phase::Exploring(objective);
            let message = narrative::missed(self.direction, session.senses());
            session.narrate(message);
        }

        StepEvent::ShotResolved {
            direction: self.direction,
            hit: shot.hit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_requires_same_axis_and_correct_side() {
        let shooter = Position::new(2, 2);
        assert!(on_ray(shooter, Direction::East, Position::new(5, 2)));
        assert!(!on_ray(shooter, Direction::East, Position::new(1, 2)));
        assert!(!on_ray(shooter, Direction::East, Position::new(5, 3)));
        assert!(on_ray(shooter, Direction::North, Position::new(2, 0)));
        assert!(!on_ray(shooter, Direction::South, Position::new(2, 0)));
        assert!(!on_ray(shooter, Direction::West, shooter));
    }

    #[test]
    fn hit_kills_and_dead_wumpus_cannot_be_hit_again() {
        let mut wumpus = Wumpus::new(Position::new(2, 3));
        let shot = resolve_shot(Position::new(2, 0), Direction::South, &mut wumpus);
        assert!(shot.hit);
        assert!(!wumpus.alive);

        let again = resolve_shot(Position::new(2, 0), Direction::South, &mut wumpus);
        assert!(!again.hit);
    }

    #[test]
    fn miss_leaves_the_wumpus_alive() {
        let mut wumpus = Wumpus::new(Position::new(3, 3));
        let shot = resolve_shot(Position::ORIGIN, Direction::East, &mut wumpus);
        assert!(!shot.hit);
        assert!(wumpus.alive);
    }
}
