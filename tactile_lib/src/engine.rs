use core::fmt::Debug;
use core::future;

use crate::Seconds;
use crate::pattern::HapticPattern;

/// Capability interface of a platform haptic engine.
///
/// Implementors wrap whatever actually actuates: a mobile haptics service,
/// a rumble driver or a recording fake in tests. The library only ever
/// schedules whole patterns, per event timing is the engine's job.
pub trait HapticEngine {
    type Error: Debug;

    /// Whether the host has haptic hardware this engine can drive.
    /// Checked once per playback call, before anything else happens
    fn supports_haptics(&self) -> bool;

    /// Bring the engine into a running state. Patterns are only handed
    /// over once the returned future completes successfully
    fn start(&mut self) -> impl future::Future<Output = Result<(), Self::Error>>;

    /// Schedule `pattern` for playback `at` seconds after engine start and
    /// begin actuation
    fn play(&mut self, pattern: &HapticPattern, at: Seconds) -> Result<(), Self::Error>;

    /// Ask the engine to shut itself down once all scheduled patterns have
    /// finished playing
    fn stop_when_finished(&mut self);
}
