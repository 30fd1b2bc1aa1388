//! The fixed eight-colour palette.
//!
//! [`Colour`] is an opaque identity used for comparing guesses against the
//! secret code. Conversion to something an LED driver understands goes through
//! an explicit table ([`Colour::rgb`], [`Colour::packed`]) so the game logic
//! never depends on a particular colour encoding.

use palette::Srgb;

/// Number of colours in the palette.
pub const PALETTE_SIZE: usize = 8;

/// One of the eight selectable colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Colour {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    Pink,
}

/// All palette colours in cycling order.
pub const PALETTE: [Colour; PALETTE_SIZE] = [
    Colour::Red,
    Colour::Orange,
    Colour::Yellow,
    Colour::Green,
    Colour::Cyan,
    Colour::Blue,
    Colour::Purple,
    Colour::Pink,
];

/// Returns the colour at `index` in cycling order.
///
/// # Panics
/// Panics if `index` is not in `0..PALETTE_SIZE`.
#[inline]
pub fn colour_at(index: usize) -> Colour {
    match PALETTE.get(index) {
        Some(colour) => *colour,
        None => panic!("palette index out of range"),
    }
}

impl Colour {
    /// Position of this colour in [`PALETTE`].
    pub const fn index(self) -> usize {
        match self {
            Colour::Red => 0,
            Colour::Orange => 1,
            Colour::Yellow => 2,
            Colour::Green => 3,
            Colour::Cyan => 4,
            Colour::Blue => 5,
            Colour::Purple => 6,
            Colour::Pink => 7,
        }
    }

    /// 8-bit RGB value to drive an LED with.
    pub const fn rgb(self) -> Srgb<u8> {
        match self {
            Colour::Red => Srgb::new(255, 0, 0),
            Colour::Orange => Srgb::new(255, 128, 0),
            Colour::Yellow => Srgb::new(255, 255, 0),
            Colour::Green => Srgb::new(0, 255, 0),
            Colour::Cyan => Srgb::new(0, 255, 255),
            Colour::Blue => Srgb::new(0, 0, 255),
            Colour::Purple => Srgb::new(127, 0, 255),
            Colour::Pink => Srgb::new(255, 20, 147),
        }
    }

    /// RGB value packed as `0x00RRGGBB`, the layout most WS2812 drivers take.
    pub const fn packed(self) -> u32 {
        let rgb = self.rgb();
        ((rgb.red as u32) << 16) | ((rgb.green as u32) << 8) | rgb.blue as u32
    }

    /// Human-readable name, used on the loss screen.
    pub const fn name(self) -> &'static str {
        match self {
            Colour::Red => "Red",
            Colour::Orange => "Orange",
            Colour::Yellow => "Yellow",
            Colour::Green => "Green",
            Colour::Cyan => "Cyan",
            Colour::Blue => "Blue",
            Colour::Purple => "Purple",
            Colour::Pink => "Pink",
        }
    }

    /// The colour after this one, wrapping from `Pink` back to `Red`.
    #[inline]
    pub fn next(self) -> Colour {
        colour_at((self.index() + 1) % PALETTE_SIZE)
    }
}

impl Default for Colour {
    fn default() -> Self {
        PALETTE[0]
    }
}

impl core::fmt::Display for Colour {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
