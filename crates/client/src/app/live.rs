//! Live game driven through the runtime handle.
use anyhow::Result;
use wumpus_core::Status;
use wumpus_runtime::{RuntimeError, RuntimeHandle};

use super::Flow;
use crate::input::KeyAction;
use crate::render;

pub struct LiveDriver {
    handle: RuntimeHandle,
    notice: Option<String>,
}

impl LiveDriver {
    pub fn new(handle: RuntimeHandle) -> Self {
        Self {
            handle,
            notice: None,
        }
    }

    /// Opens the first live session.
    pub async fn start(&mut self) -> Result<()> {
        let outcome = self.handle.start().await.map(|_| ());
        self.settle(outcome)
    }

    /// Applies one command against the authority.
    pub async fn handle(&mut self, action: KeyAction) -> Result<Flow> {
        let outcome = match action {
            KeyAction::Quit => return Ok(Flow::Quit),
            KeyAction::None => return Ok(Flow::Continue),
            KeyAction::DirectionalInput(direction) => {
                self.handle.act(direction).await.map(|_| ())
            }
            KeyAction::ToggleAim => self.handle.toggle_aim().await.map(|_| ()),
            KeyAction::Reset => self.handle.reset().await.map(|_| ()),
            KeyAction::Acknowledge => return self.acknowledge().await,
        };
        self.settle(outcome)?;
        Ok(Flow::Continue)
    }

    /// Terminal screens start a fresh round; the kill popup clears on the
    /// next direction. After a failed round-trip the session is resynced
    /// from the authority instead.
    async fn acknowledge(&mut self) -> Result<Flow> {
        let live = self.handle.query().await?;
        if live.snapshot().is_some() && live.last_error().is_some() {
            tracing::info!("Resyncing live session after a failure");
            let outcome = self.handle.refresh().await.map(|_| ());
            self.settle(outcome)?;
            return Ok(Flow::Continue);
        }
        match live.snapshot().map(|snapshot| snapshot.status) {
            Some(status) if status.is_terminal() => {
                tracing::info!(%status, "Starting a new live round");
                let outcome = self.handle.reset().await.map(|_| ());
                self.settle(outcome)?;
            }
            Some(Status::WumpusKilled) => {
                self.notice = Some("Press a direction to keep hunting for the gold.".into());
            }
            None => {
                let outcome = self.handle.start().await.map(|_| ());
                self.settle(outcome)?;
            }
            Some(_) => self.notice = Some("Nothing to acknowledge.".into()),
        }
        Ok(Flow::Continue)
    }

    /// Worker failures end the client; everything else is shown and play
    /// continues.
    fn settle(&mut self, outcome: std::result::Result<(), RuntimeError>) -> Result<()> {
        match outcome {
            Ok(()) => Ok(()),
            Err(
                err @ (RuntimeError::CommandChannelClosed
                | RuntimeError::ReplyChannelClosed(_)
                | RuntimeError::WorkerJoin(_)),
            ) => Err(err.into()),
            // The live session already carries the user-facing message.
            Err(RuntimeError::Transport(err)) => {
                tracing::warn!(error = %err, "Live action failed");
                Ok(())
            }
            Err(err) => {
                self.notice = Some(err.to_string());
                Ok(())
            }
        }
    }

    /// Current screen built from the last confirmed snapshot.
    pub async fn view(&mut self) -> Result<String> {
        let live = self.handle.query().await?;
        let mut out = match (live.snapshot(), live.phase()) {
            (Some(snapshot), Some(status)) => render::render_snapshot(snapshot, status),
            _ => "No live session. Press Enter to start one.\n".to_string(),
        };
        if let Some(error) = live.last_error() {
            out.push_str(&format!("! {error} (Enter to resync)\n"));
        }
        if let Some(notice) = self.notice.take() {
            out.push_str(&format!("! {notice}\n"));
        }
        if live.snapshot().is_some_and(|snapshot| snapshot.status.is_terminal()) {
            out.push_str("Press Enter for a new round.\n");
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;
    use wumpus_core::{Direction, Grid, Layout, Position, SessionId, SessionSnapshot};
    use wumpus_runtime::{
        LocalAuthority, RemoteAction, Runtime, RuntimeConfig, SessionAuthority, TransportError,
    };

    /// Applies the first submission but reports it as lost.
    struct LossyAuthority {
        inner: LocalAuthority,
        lose_next: AtomicBool,
    }

    #[async_trait]
    impl SessionAuthority for LossyAuthority {
        async fn start(
            &self,
            _grid_size: u32,
        ) -> std::result::Result<SessionSnapshot, TransportError> {
            let layout = Layout::new(
                Grid::new(4).unwrap(),
                [Position::new(2, 1)],
                Position::new(2, 2),
                Position::new(0, 3),
            )
            .unwrap();
            Ok(self.inner.insert(SessionId::new("lossy"), layout).await)
        }

        async fn submit(
            &self,
            session_id: &SessionId,
            action: RemoteAction,
        ) -> std::result::Result<SessionSnapshot, TransportError> {
            let snapshot = self.inner.submit(session_id, action).await?;
            if self.lose_next.swap(false, Ordering::SeqCst) {
                return Err(TransportError::Unavailable("response lost".into()));
            }
            Ok(snapshot)
        }

        async fn status(
            &self,
            session_id: &SessionId,
        ) -> std::result::Result<SessionSnapshot, TransportError> {
            self.inner.status(session_id).await
        }
    }

    fn runtime() -> Runtime {
        Runtime::builder()
            .config(RuntimeConfig {
                grid_size: 4,
                ..RuntimeConfig::default()
            })
            .authority(LocalAuthority::with_seed(21))
            .build()
    }

    #[tokio::test]
    async fn starts_and_renders_the_live_board() {
        let runtime = runtime();
        let mut driver = LiveDriver::new(runtime.handle());
        driver.start().await.unwrap();

        let view = driver.view().await.unwrap();
        assert!(view.starts_with("@###\n"));
        assert!(view.contains("Turn 0 | Arrows 1 | EXPLORING"));
    }

    #[tokio::test]
    async fn aim_overlay_and_validation_notices() {
        let runtime = runtime();
        let mut driver = LiveDriver::new(runtime.handle());
        driver.start().await.unwrap();

        assert_eq!(
            driver.handle(KeyAction::ToggleAim).await.unwrap(),
            Flow::Continue
        );
        assert!(driver.view().await.unwrap().contains("| AIMING"));

        driver.handle(KeyAction::Acknowledge).await.unwrap();
        assert!(driver.view().await.unwrap().contains("! Nothing to acknowledge."));

        assert_eq!(driver.handle(KeyAction::Quit).await.unwrap(), Flow::Quit);
    }

    #[tokio::test]
    async fn blocked_moves_keep_the_player_in_place() {
        let runtime = runtime();
        let handle = runtime.handle();
        let mut driver = LiveDriver::new(handle.clone());
        driver.start().await.unwrap();

        driver
            .handle(KeyAction::DirectionalInput(Direction::North))
            .await
            .unwrap();
        let live = handle.query().await.unwrap();
        let snapshot = live.snapshot().unwrap();
        assert_eq!(snapshot.player, Position::ORIGIN);
        assert_eq!(snapshot.turn, 0);
    }

    #[tokio::test]
    async fn enter_after_a_lost_response_resyncs_the_board() {
        let runtime = Runtime::builder()
            .authority(LossyAuthority {
                inner: LocalAuthority::with_seed(3),
                lose_next: AtomicBool::new(true),
            })
            .build();
        let handle = runtime.handle();
        let mut driver = LiveDriver::new(handle.clone());
        driver.start().await.unwrap();

        driver
            .handle(KeyAction::DirectionalInput(Direction::East))
            .await
            .unwrap();
        let view = driver.view().await.unwrap();
        assert!(view.starts_with("@###\n"));
        assert!(view.contains("(Enter to resync)"));

        driver.handle(KeyAction::Acknowledge).await.unwrap();
        let view = driver.view().await.unwrap();
        assert!(view.starts_with(".@##\n"));
        assert!(view.contains("Turn 1 | Arrows 1 | EXPLORING"));
        assert!(!view.contains("resync"));

        let live = handle.query().await.unwrap();
        assert_eq!(live.snapshot().unwrap().player, Position::new(1, 0));
        assert!(live.last_error().is_none());
    }
}
