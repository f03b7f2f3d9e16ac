#![no_std]
//! Haptic feedback patterns for host applications.
//! Provides the stock platform feedback kinds, a procedural confetti
//! synthesizer and a playback facade over a pluggable [`HapticEngine`].

mod confetti;
mod engine;
mod envelope;
mod feedback;
mod pattern;
mod player;

pub use confetti::{ConfettiSettings, generate_confetti};
pub use engine::HapticEngine;
pub use envelope::{Envelope, unit_progress};
pub use feedback::NativeFeedback;
pub use pattern::{HapticEvent, HapticPattern, PatternBuilder, PatternError};
pub use player::{HapticError, HapticPlayer};

pub type Seconds = f32;
pub type Level = f32;
