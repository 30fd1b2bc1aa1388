#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Colour`**: One of the eight palette colours, with its LED encoding
//! - **`SecretCode`**: The hidden answer, three distinct colours
//! - **`ColourCycler`**: Debounced per-button colour selection for one LED
//! - **`score`**: Compares a `Guess` against the code, rejecting repeated colours
//! - **`GameController`**: Turn loop, try limit and win/lose handling
//! - **`ButtonInput`**, **`LedStrip`**, **`TextDisplay`**: Traits to implement for your hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`GameConfig`**: Debounce interval, try limit and intro timings
//!
//! The crate never blocks or sleeps. Call [`GameController::tick`] from your
//! main loop; debounce and the intro screens are resolved by comparing
//! instants across ticks.

pub mod time;
pub mod colour;
pub mod code;
pub mod score;
pub mod cycler;
pub mod hal;
pub mod config;
pub mod game;

pub use colour::{Colour, PALETTE, PALETTE_SIZE, colour_at};
pub use code::{CODE_LENGTH, CodeError, SecretCode, seeded_rng};
pub use score::{Guess, PositionFeedback, Score, ScoreResult, score};
pub use cycler::ColourCycler;
pub use hal::{ActiveLowButtons, Button, ButtonInput, LedStrip, TextDisplay};
pub use config::GameConfig;
pub use game::{GameController, GameError, GameOutcome, GamePhase, IntroScreen};
pub use time::{TimeDuration, TimeInstant, TimeSource};
