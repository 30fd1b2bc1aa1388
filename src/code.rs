//! Secret code generation.

use crate::colour::{Colour, PALETTE_SIZE, colour_at};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

/// Number of colours in a code (and LEDs on the strip).
pub const CODE_LENGTH: usize = 3;

/// Errors from constructing a code by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CodeError {
    /// Two positions share the same colour.
    RepeatedColour(Colour),
}

impl core::fmt::Display for CodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CodeError::RepeatedColour(colour) => {
                write!(f, "colour {} appears more than once in the code", colour)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CodeError {}

/// The hidden answer: three pairwise-distinct colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SecretCode {
    colours: [Colour; CODE_LENGTH],
}

impl SecretCode {
    /// Builds a code from explicit colours.
    ///
    /// # Errors
    /// * `RepeatedColour` - Two positions hold the same colour
    pub fn new(colours: [Colour; CODE_LENGTH]) -> Result<Self, CodeError> {
        match first_repeat(&colours) {
            Some(colour) => Err(CodeError::RepeatedColour(colour)),
            None => Ok(Self { colours }),
        }
    }

    /// Draws a random code from `rng`.
    ///
    /// Each position is sampled uniformly from the palette; the whole triple is
    /// redrawn until all three colours differ.
    pub fn generate<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        loop {
            let colours = [draw(rng), draw(rng), draw(rng)];
            if let Ok(code) = Self::new(colours) {
                return code;
            }
        }
    }

    /// Colours in LED order.
    pub fn colours(&self) -> &[Colour; CODE_LENGTH] {
        &self.colours
    }

    /// Colour at `position`.
    ///
    /// # Panics
    /// Panics if `position >= CODE_LENGTH`.
    pub fn colour(&self, position: usize) -> Colour {
        self.colours[position]
    }

    /// Returns true if `colour` appears anywhere in the code other than `position`.
    pub(crate) fn contains_elsewhere(&self, colour: Colour, position: usize) -> bool {
        self.colours
            .iter()
            .enumerate()
            .any(|(i, c)| i != position && *c == colour)
    }
}

/// Builds the game's random source from an externally sampled seed,
/// e.g. a floating analog pin reading.
pub fn seeded_rng(entropy: u64) -> SmallRng {
    SmallRng::seed_from_u64(entropy)
}

/// Samples 1..=8 and maps it onto a palette index.
fn draw<R: RngCore + ?Sized>(rng: &mut R) -> Colour {
    let sample: usize = rng.gen_range(1..=PALETTE_SIZE);
    colour_at(sample - 1)
}

/// First colour found at two positions, if any.
pub(crate) fn first_repeat(colours: &[Colour; CODE_LENGTH]) -> Option<Colour> {
    for i in 0..CODE_LENGTH {
        for j in (i + 1)..CODE_LENGTH {
            if colours[i] == colours[j] {
                return Some(colours[i]);
            }
        }
    }
    None
}
