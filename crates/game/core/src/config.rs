/// Which rule set a session is played under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Mode {
    /// Offline tutorial: fatal moves are reverted on acknowledgment.
    Practice,
    /// Live game: fatal phases are terminal until the session is reset.
    Authoritative,
}

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub mode: Mode,
    /// Number of narrative entries kept in the session log.
    pub log_capacity: usize,
    /// Enter a one-shot interrupt the first time each cue is sensed.
    pub interrupts: bool,
    /// Start the session with the onboarding popups.
    pub onboarding: bool,
}

impl GameConfig {
    // ===== fixed rules =====
    pub const STARTING_ARROWS: u32 = 1;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_LOG_CAPACITY: usize = 3;

    /// Tutorial rules: onboarding, educational interrupts, death revert.
    pub fn practice() -> Self {
        Self {
            mode: Mode::Practice,
            log_capacity: Self::DEFAULT_LOG_CAPACITY,
            interrupts: true,
            onboarding: true,
        }
    }

    /// Live rules as evaluated by the session authority.
    pub fn authoritative() -> Self {
        Self {
            mode: Mode::Authoritative,
            log_capacity: Self::DEFAULT_LOG_CAPACITY,
            interrupts: false,
            onboarding: false,
        }
    }

    #[must_use]
    pub fn with_log_capacity(mut self, log_capacity: usize) -> Self {
        self.log_capacity = log_capacity.max(1);
        self
    }

    #[must_use]
    pub fn with_interrupts(mut self, interrupts: bool) -> Self {
        self.interrupts = interrupts;
        self
    }

    #[must_use]
    pub fn with_onboarding(mut self, onboarding: bool) -> Self {
        self.onboarding = onboarding;
        self
    }

    pub fn is_practice(&self) -> bool {
        self.mode == Mode::Practice
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::authoritative()
    }
}
