extern crate alloc;

use alloc::vec;

use serde::{Deserialize, Serialize};

use crate::pattern::{HapticEvent, HapticPattern};

/// The stock feedback vocabulary most platforms ship: three notification
/// outcomes, three impact weights and the tick of a selection change.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Deserialize, Serialize)]
pub enum NativeFeedback {
    /// Notification that an operation failed
    Error,
    /// Notification that an operation succeeded
    Success,
    /// Notification that an operation completed with a caveat
    Warning,
    /// A light collision tap
    Light,
    /// A medium collision tap
    Medium,
    /// A heavy collision tap
    Heavy,
    /// The subtle tick of a selection change
    Selection,
}

impl NativeFeedback {
    /// Expand this feedback kind into the transient pattern approximating
    /// the platform generator it names. Impacts and selection are a single
    /// tap, notifications are short multi tap motifs
    pub fn pattern(&self) -> HapticPattern {
        let events = match self {
            NativeFeedback::Error => vec![
                HapticEvent::transient(0.0, 0.6, 0.6),
                HapticEvent::transient(0.1, 0.6, 0.6),
                HapticEvent::transient(0.2, 0.85, 0.7),
                HapticEvent::transient(0.32, 0.5, 0.5),
            ],
            NativeFeedback::Success => vec![
                HapticEvent::transient(0.0, 0.5, 0.45),
                HapticEvent::transient(0.15, 0.85, 0.65),
            ],
            NativeFeedback::Warning => vec![
                HapticEvent::transient(0.0, 0.8, 0.55),
                HapticEvent::transient(0.15, 0.55, 0.4),
            ],
            NativeFeedback::Light => vec![HapticEvent::transient(0.0, 0.4, 0.5)],
            NativeFeedback::Medium => vec![HapticEvent::transient(0.0, 0.7, 0.55)],
            NativeFeedback::Heavy => vec![HapticEvent::transient(0.0, 1.0, 0.6)],
            NativeFeedback::Selection => vec![HapticEvent::transient(0.0, 0.4, 0.8)],
        };
        HapticPattern::from_ordered(events)
    }
}
