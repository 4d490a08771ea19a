use std::collections::HashMap;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::Mutex;
use tracing::{debug, info};

use wumpus_core::{
    GameConfig, GameEngine, Input, Layout, Phase, Rejection, Session, SessionId,
    SessionSnapshot, Step,
};

use super::layout::random_layout;
use crate::api::{RemoteAction, SessionAuthority, TransportError};

/// In-process session authority backed by the core rules engine.
///
/// Sessions run under the authoritative rule set: no onboarding, no lesson
/// interrupts, deaths are final. The Wumpus stays in its den.
pub struct LocalAuthority {
    state: Mutex<State>,
}

struct State {
    sessions: HashMap<SessionId, Session>,
    rng: StdRng,
}

impl LocalAuthority {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic layouts and session ids for tests and replays.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            state: Mutex::new(State {
                sessions: HashMap::new(),
                rng,
            }),
        }
    }

    /// Registers a session on a caller-provided layout.
    pub async fn insert(&self, id: SessionId, layout: Layout) -> SessionSnapshot {
        let session = Session::new(id.clone(), layout, GameConfig::authoritative());
        let snapshot = session.snapshot();
        self.state.lock().await.sessions.insert(id, session);
        snapshot
    }

}

/// Runs `action` against `session` the way a remote client means it.
///
/// The kill popup is acknowledged implicitly and a shot enters aim mode
/// first, since remote clients aim locally.
fn evaluate(session: &mut Session, action: RemoteAction) -> Result<Step, Rejection> {
    let mut engine = GameEngine::new(session);
    if engine.session().phase() == Phase::WumpusKilled {
        engine.execute(Input::Acknowledge)?;
    }
    if action.is_shot() && engine.session().phase().is_exploring() {
        engine.execute(Input::ToggleAim)?;
    }
    engine.execute(action.input())
}

impl Default for LocalAuthority {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    fn fresh_id(&mut self) -> SessionId {
        let mut bytes = [0u8; 8];
        loop {
            self.rng.fill(&mut bytes);
            let id = SessionId::new(hex::encode(bytes));
            if !self.sessions.contains_key(&id) {
                return id;
            }
        }
    }
}

#[async_trait]
impl SessionAuthority for LocalAuthority {
    async fn start(&self, grid_size: u32) -> Result<SessionSnapshot, TransportError> {
        let mut state = self.state.lock().await;
        let layout = random_layout(&mut state.rng, grid_size)
            .map_err(|err| TransportError::Refused(err.to_string()))?;
        let id = state.fresh_id();

        info!(
            target: "wumpus_runtime::authority",
            session = %id,
            grid_size = layout.grid().size(),
            pits = layout.pits().len(),
            "Session created"
        );
        let session = Session::new(id.clone(), layout, GameConfig::authoritative());
        let snapshot = session.snapshot();
        state.sessions.insert(id, session);
        Ok(snapshot)
    }

    async fn submit(
        &self,
        session_id: &SessionId,
        action: RemoteAction,
    ) -> Result<SessionSnapshot, TransportError> {
        let mut state = self.state.lock().await;
        let session = state
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| TransportError::Refused("Game not found.".into()))?;

        if session.phase().is_terminal() {
            return Err(TransportError::Refused("Game is already over.".into()));
        }

        // Implicit steps commit together with the verb or not at all.
        let mut next = session.clone();
        let step = evaluate(&mut next, action)
            .map_err(|rejection| TransportError::Refused(rejection.to_string()))?;
        *session = next;
        debug!(
            target: "wumpus_runtime::authority",
            session = %session_id,
            %action,
            phase = %step.phase,
            turn = step.turn,
            "Action evaluated"
        );
        Ok(session.snapshot())
    }

    async fn status(&self, session_id: &SessionId) -> Result<SessionSnapshot, TransportError> {
        self.state
            .lock()
            .await
            .sessions
            .get(session_id)
            .map(Session::snapshot)
            .ok_or_else(|| TransportError::Refused("Game not found.".into()))
    }
}
