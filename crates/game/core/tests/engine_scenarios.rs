//! End-to-end rule scenarios driven through the public engine API.

use proptest::prelude::*;
use wumpus_core::{
    Cue, Direction, GameConfig, GameEngine, Grid, Handoff, Input, Layout, Objective,
    OnboardingStep, Phase, Position, Rejection, Session, SessionId, Status, StepEvent,
};

fn layout(size: u32, pits: &[(i32, i32)], wumpus: (i32, i32), gold: (i32, i32)) -> Layout {
    Layout::new(
        Grid::new(size).unwrap(),
        pits.iter().copied().map(Position::from),
        wumpus.into(),
        gold.into(),
    )
    .unwrap()
}

/// 4x4 board with pit (2,1), Wumpus (2,2) and gold (0,3).
fn corridor(config: GameConfig) -> Session {
    Session::new(
        SessionId::new("corridor"),
        layout(4, &[(2, 1)], (2, 2), (0, 3)),
        config,
    )
}

fn practice_without_onboarding() -> GameConfig {
    GameConfig::practice().with_onboarding(false)
}

fn run(session: &mut Session, inputs: &[Input]) {
    let mut engine = GameEngine::new(session);
    for input in inputs {
        engine.execute(*input).unwrap();
    }
}

#[test]
fn stepping_into_a_pit_is_reverted_in_practice() {
    let mut session = corridor(practice_without_onboarding());
    let mut engine = GameEngine::new(&mut session);

    engine.execute(Input::Move(Direction::East)).unwrap();
    let step = engine.execute(Input::Move(Direction::East)).unwrap();
    assert_eq!(
        step.event,
        StepEvent::Moved {
            from: Position::new(1, 0),
            to: Position::new(2, 0)
        }
    );
    assert!(engine.session().senses().breeze);
    assert_eq!(
        step.phase,
        Phase::Interrupt {
            cue: Cue::Breeze,
            resume: Objective::Survey
        }
    );
    engine.execute(Input::Acknowledge).unwrap();

    let fatal = engine.execute(Input::Move(Direction::South)).unwrap();
    assert_eq!(fatal.phase, Phase::LostPit);
    assert_eq!(engine.session().snapshot().status, Status::LostPit);

    let revert = engine.execute(Input::Acknowledge).unwrap();
    assert_eq!(
        revert.event,
        StepEvent::Reverted {
            to: Position::new(2, 0)
        }
    );
    assert_eq!(revert.phase, Phase::Exploring(Objective::Survey));
    assert_eq!(engine.session().player().position(), Position::new(2, 0));
    assert_eq!(
        engine.session().log().latest(),
        Some("You were stepped back one tile. Continue carefully.")
    );
    // The revert itself does not consume a turn.
    assert_eq!(engine.session().turn(), 3);
}

#[test]
fn arrow_passes_over_the_pit_and_kills_the_wumpus() {
    let mut session = corridor(practice_without_onboarding().with_interrupts(false));
    run(
        &mut session,
        &[Input::Move(Direction::East), Input::Move(Direction::East)],
    );

    let mut engine = GameEngine::new(&mut session);
    let aim = engine.execute(Input::ToggleAim).unwrap();
    assert_eq!(aim.event, StepEvent::AimToggled { aiming: true });
    assert_eq!(aim.phase, Phase::Aiming(Objective::Survey));

    let shot = engine.execute(Input::Shoot(Direction::South)).unwrap();
    assert_eq!(
        shot.event,
        StepEvent::ShotResolved {
            direction: Direction::South,
            hit: true
        }
    );
    assert_eq!(shot.phase, Phase::WumpusKilled);
    assert!(!engine.session().wumpus().alive);
    assert_eq!(engine.session().player().arrows(), 0);
    assert_eq!(shot.turn, 3);

    let resumed = engine.execute(Input::Acknowledge).unwrap();
    assert_eq!(resumed.phase, Phase::Exploring(Objective::Treasure));
    assert!(!engine.session().senses().stench);
}

#[test]
fn aiming_is_refused_once_the_arrow_is_spent() {
    let mut session = corridor(GameConfig::authoritative());
    run(
        &mut session,
        &[Input::ToggleAim, Input::Shoot(Direction::North)],
    );
    assert!(session.wumpus().alive);
    assert_eq!(session.phase(), Phase::Exploring(Objective::Survey));

    let before = session.clone();
    let rejection = GameEngine::new(&mut session)
        .execute(Input::ToggleAim)
        .unwrap_err();
    assert_eq!(rejection, Rejection::NoArrows);
    assert_eq!(session, before);
}

#[test]
fn walking_into_the_west_wall_changes_nothing() {
    let mut session = corridor(GameConfig::authoritative());
    let before = session.snapshot();

    let step = GameEngine::new(&mut session)
        .execute(Input::Move(Direction::West))
        .unwrap();
    assert_eq!(
        step.event,
        StepEvent::Blocked {
            at: Position::ORIGIN,
            direction: Direction::West
        }
    );
    assert_eq!(session.snapshot(), before);
}

#[test]
fn shooting_outside_aim_mode_is_rejected() {
    let mut session = corridor(GameConfig::authoritative());
    let before = session.clone();
    let rejection = GameEngine::new(&mut session)
        .execute(Input::Shoot(Direction::South))
        .unwrap_err();
    assert!(matches!(rejection, Rejection::NotPermitted { .. }));
    assert_eq!(session, before);
}

#[test]
fn moving_while_aiming_is_rejected_and_cancel_costs_nothing() {
    let mut session = corridor(GameConfig::authoritative());
    let mut engine = GameEngine::new(&mut session);
    engine.execute(Input::ToggleAim).unwrap();
    assert!(engine.execute(Input::Move(Direction::East)).is_err());

    let cancel = engine.execute(Input::ToggleAim).unwrap();
    assert_eq!(cancel.event, StepEvent::AimToggled { aiming: false });
    assert_eq!(engine.session().player().arrows(), 1);
    assert_eq!(engine.session().turn(), 0);
}

#[test]
fn live_deaths_are_terminal_until_reset() {
    let mut session = Session::new(
        SessionId::new("den"),
        layout(4, &[(3, 3)], (1, 0), (0, 3)),
        GameConfig::authoritative(),
    );
    let mut engine = GameEngine::new(&mut session);
    let fatal = engine.execute(Input::Move(Direction::East)).unwrap();
    assert_eq!(fatal.phase, Phase::LostWumpus);

    let before = engine.session().clone();
    let ack = engine.execute(Input::Acknowledge).unwrap();
    assert_eq!(ack.event, StepEvent::Handoff(Handoff::RequireReset));
    assert_eq!(engine.session(), &before);
    assert!(engine.execute(Input::Move(Direction::South)).is_err());
}

#[test]
fn finding_the_gold_hands_off() {
    let mut live = corridor(GameConfig::authoritative());
    run(
        &mut live,
        &[
            Input::Move(Direction::South),
            Input::Move(Direction::South),
            Input::Move(Direction::South),
        ],
    );
    assert_eq!(live.phase(), Phase::Won);
    let ack = GameEngine::new(&mut live).execute(Input::Acknowledge).unwrap();
    assert_eq!(ack.event, StepEvent::Handoff(Handoff::OfferReplay));

    let mut practice = corridor(practice_without_onboarding().with_interrupts(false));
    run(
        &mut practice,
        &[
            Input::Move(Direction::South),
            Input::Move(Direction::South),
            Input::Move(Direction::South),
        ],
    );
    let ack = GameEngine::new(&mut practice)
        .execute(Input::Acknowledge)
        .unwrap();
    assert_eq!(ack.event, StepEvent::Handoff(Handoff::ExitPractice));
    assert_eq!(practice.phase(), Phase::Won);
}

#[test]
fn practice_opens_with_onboarding_popups() {
    let mut session = Session::practice();
    assert_eq!(session.phase(), Phase::Onboarding(OnboardingStep::Welcome));
    assert_eq!(session.snapshot().status, Status::Onboarding);

    let mut engine = GameEngine::new(&mut session);
    assert!(engine.execute(Input::Move(Direction::East)).is_err());
    assert_eq!(
        engine.execute(Input::Acknowledge).unwrap().phase,
        Phase::Onboarding(OnboardingStep::Controls)
    );
    assert_eq!(
        engine.execute(Input::Acknowledge).unwrap().phase,
        Phase::Exploring(Objective::Survey)
    );
    assert!(engine.execute(Input::Acknowledge).is_err());
}

#[test]
fn stench_lesson_switches_to_the_hunt_once() {
    // Wumpus two tiles east; stepping east puts it adjacent.
    let mut session = Session::new(
        SessionId::new("stench"),
        layout(5, &[(4, 4)], (2, 0), (0, 4)),
        practice_without_onboarding(),
    );
    let mut engine = GameEngine::new(&mut session);

    let step = engine.execute(Input::Move(Direction::East)).unwrap();
    assert_eq!(
        step.phase,
        Phase::Interrupt {
            cue: Cue::Stench,
            resume: Objective::Survey
        }
    );
    assert_eq!(
        engine.execute(Input::Acknowledge).unwrap().phase,
        Phase::Exploring(Objective::Hunt)
    );

    // Leaving and returning does not repeat the lesson.
    engine.execute(Input::Move(Direction::West)).unwrap();
    let again = engine.execute(Input::Move(Direction::East)).unwrap();
    assert_eq!(again.phase, Phase::Exploring(Objective::Hunt));
    assert_eq!(
        engine.session().log().latest(),
        Some("Something foul is close. The Wumpus is near.")
    );
}

#[test]
fn live_sessions_skip_lessons_but_remember_cues() {
    let mut session = corridor(GameConfig::authoritative());
    run(
        &mut session,
        &[Input::Move(Direction::East), Input::Move(Direction::East)],
    );
    assert_eq!(session.phase(), Phase::Exploring(Objective::Survey));
    assert!(session.seen().contains(Cue::Breeze.flag()));
}

#[test]
fn narrative_log_keeps_the_three_latest_distinct_lines() {
    let mut session = corridor(GameConfig::authoritative());
    run(
        &mut session,
        &[
            Input::ToggleAim,
            Input::ToggleAim,
            Input::ToggleAim,
            Input::ToggleAim,
        ],
    );
    let lines: Vec<&str> = session.log().iter().collect();
    assert_eq!(
        lines,
        vec![
            "Aim mode off. Movement restored.",
            "Aim mode on. Press a direction to fire.",
            "Aim mode off. Movement restored.",
        ]
    );
}

fn any_input() -> impl Strategy<Value = Input> {
    let direction = prop::sample::select(Direction::ALL.to_vec());
    prop_oneof![
        4 => direction.clone().prop_map(Input::Move),
        1 => direction.prop_map(Input::Shoot),
        1 => Just(Input::ToggleAim),
        2 => Just(Input::Acknowledge),
    ]
}

proptest! {
    #[test]
    fn random_play_preserves_session_invariants(
        inputs in prop::collection::vec(any_input(), 0..80),
        practice in any::<bool>(),
    ) {
        let config = if practice {
            GameConfig::practice()
        } else {
            GameConfig::authoritative()
        };
        let mut session = Session::new(SessionId::new("fuzz"), Layout::practice(), config);
        let area = session.grid().area();

        for input in inputs {
            let before = session.clone();
            let result = GameEngine::new(&mut session).execute(input);

            match result {
                Ok(step) => {
                    prop_assert!(session.turn() >= before.turn());
                    prop_assert!(before.player().explored().is_subset(session.player().explored()));
                    if let StepEvent::ShotResolved { .. } = step.event {
                        prop_assert!(!step.phase.is_aiming());
                    }
                }
                Err(rejection) => {
                    prop_assert!(!matches!(rejection, Rejection::InvariantViolated(_)));
                    prop_assert_eq!(&session, &before);
                }
            }
            prop_assert!(session.check_invariants().is_ok());
            prop_assert!(session.player().explored().len() <= area);
            prop_assert!(session.snapshot().validate().is_ok());
        }
    }
}
