//! Game tuning.

use crate::time::TimeDuration;

/// Default debounce interval in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Default number of scored guesses allowed before the game is lost.
pub const DEFAULT_MAX_TRIES: u32 = 20;

/// Default time the welcome screen is shown, in milliseconds.
pub const DEFAULT_WELCOME_MS: u64 = 1000;

/// Default time the instructions are shown, in milliseconds.
pub const DEFAULT_INSTRUCTIONS_MS: u64 = 5000;

/// Timing and rule settings for a game.
///
/// Construct with [`GameConfig::default`] and adjust with the builder methods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig<D: TimeDuration> {
    debounce: D,
    max_tries: u32,
    welcome_duration: D,
    instructions_duration: D,
}

impl<D: TimeDuration> GameConfig<D> {
    /// How long a colour button must stay pressed before the press counts.
    pub fn debounce(mut self, debounce: D) -> Self {
        self.debounce = debounce;
        self
    }

    /// Scored guesses allowed. The game is lost on the first non-winning guess past this.
    pub fn max_tries(mut self, max_tries: u32) -> Self {
        self.max_tries = max_tries;
        self
    }

    /// How long each intro screen is held. Zero skips it.
    pub fn intro(mut self, welcome: D, instructions: D) -> Self {
        self.welcome_duration = welcome;
        self.instructions_duration = instructions;
        self
    }

    /// Returns the debounce interval.
    pub fn debounce_interval(&self) -> D {
        self.debounce
    }

    /// Returns the try limit.
    pub fn try_limit(&self) -> u32 {
        self.max_tries
    }

    /// Returns the welcome screen duration.
    pub fn welcome_duration(&self) -> D {
        self.welcome_duration
    }

    /// Returns the instructions screen duration.
    pub fn instructions_duration(&self) -> D {
        self.instructions_duration
    }
}

impl<D: TimeDuration> Default for GameConfig<D> {
    fn default() -> Self {
        Self {
            debounce: D::from_millis(DEFAULT_DEBOUNCE_MS),
            max_tries: DEFAULT_MAX_TRIES,
            welcome_duration: D::from_millis(DEFAULT_WELCOME_MS),
            instructions_duration: D::from_millis(DEFAULT_INSTRUCTIONS_MS),
        }
    }
}
