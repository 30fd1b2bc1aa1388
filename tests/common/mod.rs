//! Shared test infrastructure for cryptocolours integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use cryptocolours::{
    Button, ButtonInput, CODE_LENGTH, Colour, GameConfig, GameController, GameOutcome, LedStrip,
    TextDisplay, TimeDuration, TimeInstant, TimeSource,
};
use heapless::{String, Vec};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Hardware
// ============================================================================

/// Buttons whose levels are set directly by the test
#[derive(Debug, Default)]
pub struct MockButtons {
    held: [bool; CODE_LENGTH + 1],
}

impl MockButtons {
    fn slot(button: Button) -> usize {
        match button {
            Button::Colour(n) => n as usize,
            Button::Submit => CODE_LENGTH,
        }
    }

    pub fn press(&mut self, button: Button) {
        self.held[Self::slot(button)] = true;
    }

    pub fn release(&mut self, button: Button) {
        self.held[Self::slot(button)] = false;
    }
}

impl ButtonInput for MockButtons {
    fn is_pressed(&mut self, button: Button) -> bool {
        self.held[Self::slot(button)]
    }
}

/// LED strip that records what was last pushed to the hardware
pub struct MockStrip {
    buffer: [Colour; CODE_LENGTH],
    shown: [Colour; CODE_LENGTH],
    flushes: u32,
}

impl MockStrip {
    /// Every LED starts pink so the reset on game start is observable
    pub fn new() -> Self {
        Self {
            buffer: [Colour::Pink; CODE_LENGTH],
            shown: [Colour::Pink; CODE_LENGTH],
            flushes: 0,
        }
    }

    pub fn shown(&self) -> [Colour; CODE_LENGTH] {
        self.shown
    }

    pub fn flushes(&self) -> u32 {
        self.flushes
    }
}

impl LedStrip for MockStrip {
    fn set_colour(&mut self, position: usize, colour: Colour) {
        self.buffer[position] = colour;
    }

    fn colour(&self, position: usize) -> Colour {
        self.buffer[position]
    }

    fn flush(&mut self) {
        self.shown = self.buffer;
        self.flushes += 1;
    }
}

/// Display that keeps the lines of the current screen
pub struct MockDisplay {
    lines: Vec<String<96>, 16>,
    clears: u32,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            clears: 0,
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.as_str())
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(|line| line.as_str())
    }

    pub fn shows(&self, text: &str) -> bool {
        self.lines().any(|line| line == text)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn clears(&self) -> u32 {
        self.clears
    }
}

impl TextDisplay for MockDisplay {
    fn clear(&mut self) {
        self.lines.clear();
        self.clears += 1;
    }

    fn write_line(&mut self, text: &str) {
        let mut line = String::new();
        line.push_str(text).expect("display line too long for mock");
        self.lines.push(line).expect("too many lines for mock display");
    }
}

// ============================================================================
// Game Helpers
// ============================================================================

pub type TestGame<'t> =
    GameController<'t, TestInstant, MockButtons, MockStrip, MockDisplay, MockTimeSource>;

/// Reference debounce interval
pub const DEBOUNCE_MS: u64 = 300;

/// Reference config without the intro screens
pub fn quick_config() -> GameConfig<TestDuration> {
    GameConfig::default().intro(TestDuration::ZERO, TestDuration::ZERO)
}

pub fn new_game(timer: &MockTimeSource, config: GameConfig<TestDuration>) -> TestGame<'_> {
    GameController::new(
        MockButtons::default(),
        MockStrip::new(),
        MockDisplay::new(),
        timer,
        config,
    )
}

/// Presses the colour button at `position` long enough to count, `times` times
pub fn cycle(game: &mut TestGame<'_>, timer: &MockTimeSource, position: usize, times: usize) {
    let button = Button::for_position(position);
    for _ in 0..times {
        game.buttons_mut().press(button);
        game.tick().unwrap();
        timer.advance(DEBOUNCE_MS);
        game.tick().unwrap();
        game.buttons_mut().release(button);
        game.tick().unwrap();
    }
}

/// Cycles each LED forward until the strip shows `target`
pub fn set_guess(game: &mut TestGame<'_>, timer: &MockTimeSource, target: [Colour; CODE_LENGTH]) {
    for (position, colour) in target.iter().enumerate() {
        let current = game.selected(position).index();
        let steps = (colour.index() + cryptocolours::PALETTE_SIZE - current)
            % cryptocolours::PALETTE_SIZE;
        cycle(game, timer, position, steps);
    }
}

/// Presses and releases submit, returning the outcome seen on the press tick
pub fn submit(game: &mut TestGame<'_>) -> GameOutcome {
    game.buttons_mut().press(Button::Submit);
    let outcome = game.tick().unwrap();
    game.buttons_mut().release(Button::Submit);
    game.tick().unwrap();
    outcome
}
