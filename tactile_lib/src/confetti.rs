extern crate alloc;

use alloc::vec::Vec;
use core::ops::RangeInclusive;

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::Seconds;
use crate::envelope::{Envelope, unit_progress};
use crate::pattern::{HapticEvent, HapticPattern};

/// Tuning values for the confetti synthesizer.
/// The defaults are hand tuned; note the asymmetric intensity and
/// sharpness ranges.
#[derive(Debug, PartialEq, Clone, Deserialize, Serialize)]
pub struct ConfettiSettings {
    /// Range the raw intensity of an event is drawn from, before the
    /// envelope weight is applied
    pub intensity: RangeInclusive<f32>,
    /// Range the raw sharpness of an event is drawn from, before the
    /// envelope weight is applied
    pub sharpness: RangeInclusive<f32>,
    /// Range the raw spacing between two events is drawn from, in seconds
    pub step: RangeInclusive<f32>,
    /// Spacing is scaled by `step_bias - envelope`, packing events tighter
    /// where the envelope is high. Must stay above the envelope's peak so
    /// spacing remains positive
    pub step_bias: f32,
    /// Envelope weighting event strength and density over the pattern
    pub envelope: Envelope,
}

impl Default for ConfettiSettings {
    fn default() -> Self {
        Self {
            intensity: 0.3..=0.8,
            sharpness: 0.3..=0.7,
            step: 0.005..=0.05,
            step_bias: 1.65,
            envelope: Envelope::Bell,
        }
    }
}

/// Synthesize a confetti style pattern: a shower of small transient taps
/// whose strength and density swell towards the middle of `duration` and
/// fall off again towards its end.
///
/// Every call draws fresh randomness from `rng`, so two showers never feel
/// identical unless the caller seeds them identically. A `duration` of
/// zero or less produces an empty pattern.
pub fn generate_confetti(
    duration: Seconds,
    settings: &ConfettiSettings,
    rng: &mut impl Rng,
) -> HapticPattern {
    let mut events: Vec<HapticEvent> = Vec::new();
    let mut current: Seconds = 0.0;

    while current < duration {
        let progress = unit_progress(current, 0.0..=duration, false);
        let envelope = settings.envelope.at_normalized(progress);
        // The weight never silences an event completely, it only pulls the
        // edges down to half strength
        let weight = 0.5 + envelope * 0.5;
        events.push(HapticEvent::transient(
            current,
            rng.gen_range(settings.intensity.clone()) * weight,
            rng.gen_range(settings.sharpness.clone()) * weight,
        ));
        let next =
            current + rng.gen_range(settings.step.clone()) * (settings.step_bias - envelope);
        // at large offsets a short step can round to nothing, advance by at
        // least one representable value so event times keep increasing
        current = if next > current { next } else { current.next_up() };
    }

    debug!("synthesized {} confetti events over {duration}s", events.len());
    HapticPattern::from_ordered(events)
}
