//! Guess validation and feedback scoring.
//!
//! Guesses with a repeated colour are rejected outright, which means the
//! per-position check below never has to decide how to pair up duplicates.

use crate::code::{CODE_LENGTH, SecretCode, first_repeat};
use crate::colour::Colour;

/// Snapshot of the player's current selection, one colour per LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Guess(pub [Colour; CODE_LENGTH]);

impl Guess {
    /// Returns true if any two positions share a colour.
    pub fn has_repeats(&self) -> bool {
        first_repeat(&self.0).is_some()
    }
}

/// Feedback for a single position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PositionFeedback {
    /// Right colour, right place.
    ExactMatch,
    /// Colour is in the code at another position.
    PresentWrongPlace,
    /// Colour is not in the code.
    Absent,
}

impl PositionFeedback {
    /// Display text following the "Button N: " prefix.
    pub const fn message(self) -> &'static str {
        match self {
            PositionFeedback::ExactMatch => "correct colour",
            PositionFeedback::PresentWrongPlace => "correct colour, wrong place",
            PositionFeedback::Absent => "wrong colour",
        }
    }
}

/// Feedback for an accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Score {
    /// Number of exact matches (0..=3).
    pub exact: u8,
    /// Per-position feedback in LED order.
    pub feedback: [PositionFeedback; CODE_LENGTH],
}

impl Score {
    /// True when every position is an exact match.
    pub fn is_win(&self) -> bool {
        self.exact as usize == CODE_LENGTH
    }
}

/// Result of scoring a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScoreResult {
    /// The guess repeats a colour. Nothing was scored.
    Rejected,
    /// The guess was scored.
    Scored(Score),
}

/// Scores `guess` against `secret`.
pub fn score(secret: &SecretCode, guess: &Guess) -> ScoreResult {
    if guess.has_repeats() {
        return ScoreResult::Rejected;
    }

    let mut exact = 0;
    let mut feedback = [PositionFeedback::Absent; CODE_LENGTH];

    for (position, colour) in guess.0.iter().enumerate() {
        feedback[position] = if *colour == secret.colour(position) {
            exact += 1;
            PositionFeedback::ExactMatch
        } else if secret.contains_elsewhere(*colour, position) {
            PositionFeedback::PresentWrongPlace
        } else {
            PositionFeedback::Absent
        };
    }

    ScoreResult::Scored(Score { exact, feedback })
}
