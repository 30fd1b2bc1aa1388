//! Game controller: turn loop, try accounting and terminal states.
//!
//! Provides [`GameController`], which owns the buttons, LED strip and display,
//! and advances the game one [`tick`](GameController::tick) at a time. It never
//! blocks; the host calls `tick` from its main loop at whatever rate it likes.

use core::fmt::Write;

use heapless::String;
use rand::RngCore;

use crate::code::{CODE_LENGTH, SecretCode};
use crate::colour::{Colour, colour_at};
use crate::config::GameConfig;
use crate::cycler::ColourCycler;
use crate::hal::{Button, ButtonInput, LedStrip, TextDisplay};
use crate::score::{Guess, Score, ScoreResult, score};
use crate::time::{TimeInstant, TimeSource, has_elapsed};

const WELCOME: [&str; 2] = ["Welcome to", "CRYPTOCOLOURS!"];
const INSTRUCTIONS: [&str; 2] = [
    "Press the buttons to cycle through colours.",
    "When you think that you've guessed the combination, press the submit button.",
];
const REJECTED: &str = "Error, no repeating colours.";
const WON: &str = "Congratulations! You have won the game!!";
const LOST: [&str; 2] = ["Sorry, you ran out of tries.", "The correct colours were: "];

/// Capacity of a formatted feedback line.
const LINE_CAPACITY: usize = 48;

/// Intro screens shown while the game is being set up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IntroScreen {
    Welcome,
    Instructions,
}

/// Where the controller is in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GamePhase {
    /// No game started yet.
    NotStarted,
    /// Code generated, intro screens showing. Buttons are ignored.
    Setup(IntroScreen),
    /// Player is choosing colours. Submit evaluates the guess.
    AwaitingGuess,
    /// Code guessed. Terminal.
    Won,
    /// Out of tries, code revealed. Terminal.
    Lost,
}

/// Coarse game result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameOutcome {
    InProgress,
    Won,
    Lost,
}

impl GamePhase {
    /// Collapses the phase into an outcome.
    pub fn outcome(self) -> GameOutcome {
        match self {
            GamePhase::Won => GameOutcome::Won,
            GamePhase::Lost => GameOutcome::Lost,
            _ => GameOutcome::InProgress,
        }
    }
}

/// Errors returned by controller operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameError {
    /// Operation called from an invalid phase.
    InvalidState {
        /// Description of the expected phase(s)
        expected: &'static str,
        /// The actual current phase
        actual: GamePhase,
    },
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidState { expected, actual } => {
                write!(
                    f,
                    "invalid state: expected {}, but game is in {:?}",
                    expected, actual
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

/// Runs one code-breaking game at a time.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `B` - Button input implementation
/// * `L` - LED strip implementation
/// * `D` - Text display implementation
/// * `T` - Time source implementation
pub struct GameController<'t, I, B, L, D, T>
where
    I: TimeInstant,
    B: ButtonInput,
    L: LedStrip,
    D: TextDisplay,
    T: TimeSource<I>,
{
    buttons: B,
    strip: L,
    display: D,
    time_source: &'t T,
    config: GameConfig<I::Duration>,
    cyclers: [ColourCycler<I>; CODE_LENGTH],
    secret: Option<SecretCode>,
    tries: u32,
    phase: GamePhase,
    phase_start: Option<I>,
    submit_held: bool,
    last_score: Option<ScoreResult>,
}

impl<'t, I, B, L, D, T> GameController<'t, I, B, L, D, T>
where
    I: TimeInstant,
    B: ButtonInput,
    L: LedStrip,
    D: TextDisplay,
    T: TimeSource<I>,
{
    /// Creates a controller with no game running.
    pub fn new(
        buttons: B,
        strip: L,
        display: D,
        time_source: &'t T,
        config: GameConfig<I::Duration>,
    ) -> Self {
        let debounce = config.debounce_interval();

        Self {
            buttons,
            strip,
            display,
            time_source,
            config,
            cyclers: core::array::from_fn(|position| ColourCycler::new(position, debounce)),
            secret: None,
            tries: 0,
            phase: GamePhase::NotStarted,
            phase_start: None,
            submit_held: false,
            last_score: None,
        }
    }

    /// Starts a new game with a code drawn from `rng`. Can be called from any phase.
    pub fn start<R: RngCore + ?Sized>(&mut self, rng: &mut R) {
        let code = SecretCode::generate(rng);
        self.start_with_code(code);
    }

    /// Starts a new game with a known code. Can be called from any phase.
    ///
    /// Resets the try counter and every cycler, sets all LEDs to the first
    /// palette colour and shows the welcome screen.
    pub fn start_with_code(&mut self, code: SecretCode) {
        #[cfg(feature = "defmt")]
        defmt::debug!("new game, code {}", code);

        self.secret = Some(code);
        self.tries = 0;
        self.submit_held = false;
        self.last_score = None;

        for cycler in self.cyclers.iter_mut() {
            cycler.reset();
            self.strip.set_colour(cycler.position(), colour_at(0));
        }
        self.strip.flush();

        self.show(&WELCOME);
        let now = self.time_source.now();
        self.phase = GamePhase::Setup(IntroScreen::Welcome);
        self.phase_start = Some(now);
        self.advance_intro(now);
    }

    /// Advances the game by one scheduling step.
    ///
    /// During setup this only moves through the intro screens. While awaiting a
    /// guess it samples all three colour buttons and then the submit button; a
    /// submit press is evaluated once, on the tick it is first seen held. In a
    /// terminal phase nothing is touched and the outcome is returned unchanged.
    ///
    /// # Returns
    /// * `Ok(outcome)` - Outcome after this tick
    /// * `Err` - No game has been started
    pub fn tick(&mut self) -> Result<GameOutcome, GameError> {
        let now = self.time_source.now();

        match self.phase {
            GamePhase::NotStarted => {
                return Err(GameError::InvalidState {
                    expected: "Setup, AwaitingGuess, Won or Lost",
                    actual: self.phase,
                });
            }
            GamePhase::Setup(_) => self.advance_intro(now),
            GamePhase::AwaitingGuess => {
                self.poll_cyclers(now);

                let submit = self.buttons.is_pressed(Button::Submit);
                if submit && !self.submit_held {
                    self.evaluate();
                }
                self.submit_held = submit;
            }
            GamePhase::Won | GamePhase::Lost => {}
        }

        Ok(self.phase.outcome())
    }

    fn advance_intro(&mut self, now: I) {
        loop {
            let Some(since) = self.phase_start else {
                return;
            };

            match self.phase {
                GamePhase::Setup(IntroScreen::Welcome)
                    if has_elapsed(since, now, self.config.welcome_duration()) =>
                {
                    self.show(&INSTRUCTIONS);
                    self.phase = GamePhase::Setup(IntroScreen::Instructions);
                    self.phase_start = Some(now);
                }
                GamePhase::Setup(IntroScreen::Instructions)
                    if has_elapsed(since, now, self.config.instructions_duration()) =>
                {
                    self.display.clear();
                    self.phase = GamePhase::AwaitingGuess;
                    self.phase_start = None;

                    #[cfg(feature = "defmt")]
                    defmt::info!("awaiting guess");
                }
                _ => return,
            }
        }
    }

    fn poll_cyclers(&mut self, now: I) {
        for cycler in self.cyclers.iter_mut() {
            let pressed = self.buttons.is_pressed(Button::for_position(cycler.position()));
            let changed = cycler.poll(pressed, now, &mut self.strip);

            #[cfg(feature = "defmt")]
            if let Some(colour) = changed {
                defmt::debug!("LED {} -> {}", cycler.position(), colour);
            }
            #[cfg(not(feature = "defmt"))]
            let _ = changed;
        }
    }

    fn evaluate(&mut self) {
        let Some(secret) = self.secret else {
            return;
        };

        let result = score(&secret, &self.guess());
        self.last_score = Some(result);
        self.display.clear();

        match result {
            ScoreResult::Rejected => {
                #[cfg(feature = "defmt")]
                defmt::info!("guess rejected: repeated colour");

                self.display.write_line(REJECTED);
            }
            ScoreResult::Scored(scored) => {
                self.tries += 1;

                #[cfg(feature = "defmt")]
                defmt::info!("try {}: {} exact", self.tries, scored.exact);

                self.show_feedback(&scored);

                if scored.is_win() {
                    self.win();
                } else if self.tries > self.config.try_limit() {
                    self.lose(&secret);
                }
            }
        }
    }

    fn show_feedback(&mut self, score: &Score) {
        for (position, feedback) in score.feedback.iter().enumerate() {
            let mut line: String<LINE_CAPACITY> = String::new();
            // Longest line is well under capacity.
            let _ = write!(line, "Button {}: {}", position + 1, feedback.message());
            self.display.write_line(&line);
        }
    }

    fn win(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::info!("won after {} tries", self.tries);

        self.show(&[WON]);
        self.phase = GamePhase::Won;
    }

    fn lose(&mut self, secret: &SecretCode) {
        #[cfg(feature = "defmt")]
        defmt::info!("lost, code was {}", secret);

        self.show(&LOST);
        for (position, colour) in secret.colours().iter().enumerate() {
            self.display.write_line(colour.name());
            self.strip.set_colour(position, *colour);
        }
        self.strip.flush();
        self.phase = GamePhase::Lost;
    }

    fn show(&mut self, lines: &[&str]) {
        self.display.clear();
        for line in lines {
            self.display.write_line(line);
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> GameOutcome {
        self.phase.outcome()
    }

    /// Number of scored (non-rejected) guesses this game.
    pub fn tries(&self) -> u32 {
        self.tries
    }

    /// Scored guesses left before the next non-winning one loses the game.
    pub fn tries_remaining(&self) -> u32 {
        self.config.try_limit().saturating_sub(self.tries)
    }

    /// The colours currently shown on the strip.
    pub fn guess(&self) -> Guess {
        Guess(core::array::from_fn(|position| self.strip.colour(position)))
    }

    /// Colour currently selected at `position`.
    pub fn selected(&self, position: usize) -> Colour {
        self.cyclers[position].colour()
    }

    /// Result of the most recent evaluation this game.
    pub fn last_score(&self) -> Option<ScoreResult> {
        self.last_score
    }

    /// The secret code of the current game, if one has been started.
    pub fn secret_code(&self) -> Option<&SecretCode> {
        self.secret.as_ref()
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &GameConfig<I::Duration> {
        &self.config
    }

    /// Returns the button input.
    pub fn buttons_mut(&mut self) -> &mut B {
        &mut self.buttons
    }

    /// Returns the LED strip.
    pub fn strip(&self) -> &L {
        &self.strip
    }

    /// Returns the display.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Consumes the controller and returns its collaborators.
    pub fn release(self) -> (B, L, D) {
        (self.buttons, self.strip, self.display)
    }
}
