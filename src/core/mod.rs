//! Core types: colors, modes, randomness, configuration, errors.
//!
//! Everything here is free of round logic. The generator and engine build
//! on these types.

pub mod color;
pub mod config;
pub mod error;
pub mod rng;

pub use color::{Color, ColorSet, GameMode};
pub use config::{RoundConfig, DEFAULT_DURATION_MS, DEFAULT_TICK_INTERVAL_MS};
pub use error::{ConfigIssue, GameError, Result};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedSource};
