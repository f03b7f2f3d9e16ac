use core::fmt::Debug;

use log::debug;
use rand::Rng;
use thiserror::Error;

use crate::Seconds;
use crate::confetti::{ConfettiSettings, generate_confetti};
use crate::engine::HapticEngine;
use crate::feedback::NativeFeedback;
use crate::pattern::HapticPattern;

#[derive(Error, Debug)]
pub enum HapticError<E: Debug> {
    /// The host has no haptic hardware. Reported before any pattern is
    /// generated or handed to the engine
    #[error("haptics are not supported on this host")]
    Unsupported,
    /// The engine failed to start or to begin playback. Haptic feedback is
    /// best effort, callers typically log this and move on
    #[error("haptic engine failure: {0:?}")]
    Engine(E),
}

/// The main interface for playing haptic feedback.
///
/// Owns the platform engine, the random source feeding the synthesizers
/// and the confetti tuning. Inject a seeded random source to make the
/// generated patterns reproducible.
pub struct HapticPlayer<E, R> {
    engine: E,
    rng: R,
    settings: ConfettiSettings,
}

impl<E, R> HapticPlayer<E, R>
where
    E: HapticEngine,
    R: Rng,
{
    /// Create a new player around a platform `engine` with the stock
    /// confetti tuning
    pub fn new(engine: E, rng: R) -> Self {
        Self {
            engine,
            rng,
            settings: ConfettiSettings::default(),
        }
    }

    /// Replace the confetti tuning of this player
    pub fn with_settings(mut self, settings: ConfettiSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Access the underlying engine
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Play one of the stock platform feedback kinds
    pub async fn native(&mut self, kind: NativeFeedback) -> Result<(), HapticError<E::Error>> {
        self.play(&kind.pattern()).await
    }

    /// Synthesize a confetti shower lasting `duration` seconds and play it
    pub async fn confetti(&mut self, duration: Seconds) -> Result<(), HapticError<E::Error>> {
        self.ensure_supported()?;
        let pattern = generate_confetti(duration, &self.settings, &mut self.rng);
        self.play(&pattern).await
    }

    /// Play an arbitrary pattern: wait for the engine to start, trigger the
    /// pattern at time zero and leave shutdown to the engine.
    ///
    /// Empty patterns complete without touching the engine
    pub async fn play(&mut self, pattern: &HapticPattern) -> Result<(), HapticError<E::Error>> {
        self.ensure_supported()?;
        if pattern.is_empty() {
            debug!("skipping playback of an empty pattern");
            return Ok(());
        }
        self.engine.start().await.map_err(HapticError::Engine)?;
        self.engine.play(pattern, 0.0).map_err(HapticError::Engine)?;
        self.engine.stop_when_finished();
        Ok(())
    }

    fn ensure_supported(&self) -> Result<(), HapticError<E::Error>> {
        if self.engine.supports_haptics() {
            Ok(())
        } else {
            Err(HapticError::Unsupported)
        }
    }
}
