//! Per-button colour cycling with non-blocking debounce.
//!
//! Each [`ColourCycler`] owns one button/LED pair. A press is recognised on the
//! released-to-pressed edge, then confirmed on a later poll once the button has
//! stayed down for the debounce interval. A release before that cancels it.
//! Holding the button never produces more than one step.

use crate::code::CODE_LENGTH;
use crate::colour::{Colour, PALETTE_SIZE, colour_at};
use crate::hal::LedStrip;
use crate::time::{TimeInstant, has_elapsed};

/// Debounced colour selector for one LED position.
#[derive(Clone, Copy)]
pub struct ColourCycler<I: TimeInstant> {
    position: usize,
    index: usize,
    was_pressed: bool,
    pressed_since: Option<I>,
    debounce: I::Duration,
}

impl<I: TimeInstant> ColourCycler<I> {
    /// Creates a cycler for LED `position`, starting at the first palette colour.
    ///
    /// # Panics
    /// Panics if `position >= CODE_LENGTH`.
    pub fn new(position: usize, debounce: I::Duration) -> Self {
        assert!(position < CODE_LENGTH, "LED position out of range");
        Self {
            position,
            index: 0,
            was_pressed: false,
            pressed_since: None,
            debounce,
        }
    }

    /// Samples the button once.
    ///
    /// `pressed` is the raw button level at `now`. When a press is confirmed the
    /// palette index advances by one (wrapping after the last colour) and the
    /// new colour is buffered on the strip. The strip is flushed on every call.
    ///
    /// # Returns
    /// * `Some(colour)` - A press was confirmed and the LED now shows `colour`
    /// * `None` - No change
    pub fn poll<L: LedStrip>(&mut self, pressed: bool, now: I, strip: &mut L) -> Option<Colour> {
        let mut committed = None;

        if pressed && !self.was_pressed {
            self.pressed_since = Some(now);
        }

        if let Some(since) = self.pressed_since {
            if !pressed {
                // Released inside the window: noise.
                self.pressed_since = None;
            } else if has_elapsed(since, now, self.debounce) {
                self.pressed_since = None;
                self.index = (self.index + 1) % PALETTE_SIZE;
                let colour = colour_at(self.index);
                strip.set_colour(self.position, colour);
                committed = Some(colour);
            }
        }

        self.was_pressed = pressed;
        strip.flush();
        committed
    }

    /// Returns to the first palette colour and forgets any pending press.
    pub fn reset(&mut self) {
        self.index = 0;
        self.was_pressed = false;
        self.pressed_since = None;
    }

    /// LED position this cycler drives.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current colour.
    pub fn colour(&self) -> Colour {
        colour_at(self.index)
    }

    /// Returns true while a press is waiting out the debounce interval.
    pub fn is_debouncing(&self) -> bool {
        self.pressed_since.is_some()
    }
}
