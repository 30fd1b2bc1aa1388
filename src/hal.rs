//! Hardware seams.
//!
//! The game owns one implementation of each trait and never talks to a
//! peripheral directly. Implementations should handle their own hardware
//! errors; none of these methods can fail.

use crate::code::CODE_LENGTH;
use crate::colour::Colour;
use embedded_hal::digital::InputPin;

/// Logical buttons: one per LED plus submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Cycles the colour of the LED at this position (0..3).
    Colour(u8),
    /// Submits the current guess.
    Submit,
}

impl Button {
    /// Colour button driving LED `position`.
    ///
    /// # Panics
    /// Panics if `position >= CODE_LENGTH`.
    pub fn for_position(position: usize) -> Self {
        assert!(position < CODE_LENGTH, "LED position out of range");
        Button::Colour(position as u8)
    }
}

/// Trait for reading button levels.
pub trait ButtonInput {
    /// Returns true while `button` is held down.
    fn is_pressed(&mut self, button: Button) -> bool;
}

/// Trait for an addressable LED strip with one LED per code position.
///
/// `set_colour` only updates a buffer; nothing is visible until `flush`.
pub trait LedStrip {
    /// Buffers `colour` for the LED at `position`.
    fn set_colour(&mut self, position: usize, colour: Colour);

    /// Returns the buffered colour at `position`.
    fn colour(&self, position: usize) -> Colour;

    /// Pushes the buffer to the hardware.
    fn flush(&mut self);
}

/// Trait for a line-oriented text display.
pub trait TextDisplay {
    /// Blanks the screen and moves the cursor to the top.
    fn clear(&mut self);

    /// Writes `text` on the next line.
    fn write_line(&mut self, text: &str);
}

/// [`ButtonInput`] over four active-low GPIO inputs.
///
/// A button reads as pressed while its pin is low. A pin read error is
/// treated as released.
pub struct ActiveLowButtons<P0, P1, P2, PS> {
    colour_pins: (P0, P1, P2),
    submit_pin: PS,
}

impl<P0, P1, P2, PS> ActiveLowButtons<P0, P1, P2, PS>
where
    P0: InputPin,
    P1: InputPin,
    P2: InputPin,
    PS: InputPin,
{
    /// Wraps the pins for LED positions 0, 1, 2 and the submit button.
    pub fn new(pin_0: P0, pin_1: P1, pin_2: P2, submit: PS) -> Self {
        Self {
            colour_pins: (pin_0, pin_1, pin_2),
            submit_pin: submit,
        }
    }

    /// Returns the pins.
    pub fn release(self) -> (P0, P1, P2, PS) {
        let (p0, p1, p2) = self.colour_pins;
        (p0, p1, p2, self.submit_pin)
    }
}

fn is_low<P: InputPin>(pin: &mut P) -> bool {
    pin.is_low().unwrap_or(false)
}

impl<P0, P1, P2, PS> ButtonInput for ActiveLowButtons<P0, P1, P2, PS>
where
    P0: InputPin,
    P1: InputPin,
    P2: InputPin,
    PS: InputPin,
{
    fn is_pressed(&mut self, button: Button) -> bool {
        match button {
            Button::Colour(0) => is_low(&mut self.colour_pins.0),
            Button::Colour(1) => is_low(&mut self.colour_pins.1),
            Button::Colour(2) => is_low(&mut self.colour_pins.2),
            Button::Colour(_) => false,
            Button::Submit => is_low(&mut self.submit_pin),
        }
    }
}
