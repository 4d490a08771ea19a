//! Glue code tying the runtime, the practice engine and the terminal together.
mod live;
mod practice;

pub use live::LiveDriver;
pub use practice::PracticeDriver;

use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use wumpus_core::{Handoff, Mode};
use wumpus_runtime::Runtime;

use crate::config::ClientConfig;
use crate::input::{self, KeyAction};

/// What the driver loop should do after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Handoff(Handoff),
    Quit,
}

pub struct App {
    config: ClientConfig,
    runtime: Runtime,
}

impl App {
    pub fn new(config: ClientConfig, runtime: Runtime) -> Self {
        Self { config, runtime }
    }

    /// Runs the tutorial (in practice mode) and then the live game until the
    /// input ends or the player quits.
    pub async fn run<R, W>(self, input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        tracing::info!(mode = ?self.config.mode, "Client starting");
        let mut lines = input.lines();

        if self.config.mode == Mode::Practice {
            let mut practice = PracticeDriver::new();
            write!(out, "{}", practice.view())?;
            loop {
                let Some(line) = lines.next_line().await? else {
                    return self.finish().await;
                };
                match practice.handle(input::parse_line(&line)) {
                    Flow::Quit => return self.finish().await,
                    Flow::Handoff(Handoff::ExitPractice) => {
                        tracing::info!("Practice complete; entering the live game");
                        writeln!(out, "Practice complete. The real hunt begins.")?;
                        break;
                    }
                    Flow::Handoff(_) | Flow::Continue => write!(out, "{}", practice.view())?,
                }
            }
        }

        self.play_live(&mut lines, out).await?;
        self.finish().await
    }

    async fn play_live<R, W>(&self, lines: &mut Lines<R>, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut live = LiveDriver::new(self.runtime.handle());
        live.start().await?;
        write!(out, "{}", live.view().await?)?;
        while let Some(line) = lines.next_line().await? {
            let action = input::parse_line(&line);
            if action == KeyAction::Quit {
                break;
            }
            live.handle(action).await?;
            write!(out, "{}", live.view().await?)?;
            out.flush()?;
        }
        Ok(())
    }

    /// Waits for the session worker; every handle clone must be gone by now.
    async fn finish(self) -> Result<()> {
        tracing::info!("Client shutting down");
        self.runtime.shutdown().await?;
        Ok(())
    }
}
