use core::f32::consts::PI;
use core::ops::RangeInclusive;

use libm::sinf;
use serde::{Deserialize, Serialize};

/// Weighting curve shaping how strong and how densely packed events are
/// over the length of a generated pattern.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Deserialize, Serialize)]
pub enum Envelope {
    /// Half sine bell: half weight at the edges, full weight in the middle
    Bell,
    /// No shaping, events keep their full weight over the whole pattern
    Flat,
}

impl Envelope {
    /// Evaluate the envelope at a normalized progress between 0.0 and 1.0
    pub fn at_normalized(&self, progress: f32) -> f32 {
        match self {
            Envelope::Bell => sinf(progress * PI),
            Envelope::Flat => 1.0,
        }
    }
}

/// Map `value` onto the unit interval spanned by `range`, clamped at both
/// ends. With `descending` set the mapping is flipped and 1.0 sits at the
/// lower bound.
///
/// A degenerate range maps values below it to 0.0, on it to 0.5 and above
/// it to 1.0, regardless of direction.
pub fn unit_progress(value: f32, range: RangeInclusive<f32>, descending: bool) -> f32 {
    let low = *range.start();
    let high = *range.end();
    if low == high {
        return if value < low {
            0.0
        } else if value == low {
            0.5
        } else {
            1.0
        };
    }
    let position = ((value - low) / (high - low)).clamp(0.0, 1.0);
    if descending { 1.0 - position } else { position }
}
