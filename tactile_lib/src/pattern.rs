extern crate alloc;

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Level, Seconds};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PatternError {
    #[error("event at index {0} does not come after its predecessor")]
    OutOfOrder(usize),
    #[error("event at index {0} has a negative time offset")]
    NegativeTime(usize),
    #[error(
        "Intensity and sharpness must be in range of 0.0 to 1.0, but the event at index {0} was out of range"
    )]
    LevelOutOfRange(usize),
}

/// A single transient tap.
/// `intensity` controls how strong the tap feels, `sharpness` how crisp;
/// low sharpness feels like a dull thud, high sharpness like a precise tick.
#[derive(Debug, PartialEq, Copy, Clone, Deserialize, Serialize)]
pub struct HapticEvent {
    /// Offset in seconds from the start of the pattern
    pub time: Seconds,
    /// Strength of the tap in the range of 0.0 to 1.0
    pub intensity: Level,
    /// Crispness of the tap in the range of 0.0 to 1.0
    pub sharpness: Level,
}

impl HapticEvent {
    /// Create a new transient event `time` seconds after pattern start
    pub fn transient(time: Seconds, intensity: Level, sharpness: Level) -> Self {
        Self {
            time,
            intensity,
            sharpness,
        }
    }

    fn levels_valid(&self) -> bool {
        (0.0..=1.0).contains(&self.intensity) && (0.0..=1.0).contains(&self.sharpness)
    }
}

/// An ordered sequence of haptic events.
/// Patterns always play front to back and are never re-sorted, so
/// construction fails if events are handed over out of order.
#[derive(Debug, PartialEq, Clone, Default, Deserialize, Serialize)]
pub struct HapticPattern {
    events: Vec<HapticEvent>,
}

impl HapticPattern {
    /// Create a pattern from a list of events with strictly increasing
    /// time offsets
    pub fn new(events: Vec<HapticEvent>) -> Result<Self, PatternError> {
        let mut previous: Option<Seconds> = None;
        for (index, event) in events.iter().enumerate() {
            if event.time < 0.0 || event.time.is_nan() {
                return Err(PatternError::NegativeTime(index));
            }
            if !event.levels_valid() {
                return Err(PatternError::LevelOutOfRange(index));
            }
            if let Some(previous) = previous
                && event.time <= previous
            {
                return Err(PatternError::OutOfOrder(index));
            }
            previous = Some(event.time);
        }
        Ok(Self { events })
    }

    /// Start constructing a new pattern event by event
    pub fn builder() -> PatternBuilder {
        PatternBuilder::new()
    }

    /// Constructor for generators which already emit ordered, in range events
    pub(crate) fn from_ordered(events: Vec<HapticEvent>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[HapticEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Time offset of the last event. An empty pattern has zero duration
    pub fn duration(&self) -> Seconds {
        self.events.last().map_or(0.0, |event| event.time)
    }
}

/// Builder used to construct a [`HapticPattern`] one event at a time.
/// Invalid events are remembered and reported once [`build`](Self::build)
/// is called, so calls can be chained without intermediate checks.
#[derive(Debug, Default)]
pub struct PatternBuilder {
    events: Vec<HapticEvent>,
    error: Option<PatternError>,
}

impl PatternBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transient event. `time` must lie strictly after the
    /// previously added event
    pub fn transient(mut self, time: Seconds, intensity: Level, sharpness: Level) -> Self {
        if self.error.is_some() {
            return self;
        }
        let event = HapticEvent::transient(time, intensity, sharpness);
        let index = self.events.len();
        if time < 0.0 || time.is_nan() {
            self.error = Some(PatternError::NegativeTime(index));
        } else if !event.levels_valid() {
            self.error = Some(PatternError::LevelOutOfRange(index));
        } else if let Some(last) = self.events.last()
            && time <= last.time
        {
            self.error = Some(PatternError::OutOfOrder(index));
        } else {
            self.events.push(event);
        }
        self
    }

    /// Append a transient event `delay` seconds after the previous one.
    /// The delay must be positive
    pub fn after(self, delay: Seconds, intensity: Level, sharpness: Level) -> Self {
        let time = self.events.last().map_or(0.0, |event| event.time) + delay;
        self.transient(time, intensity, sharpness)
    }

    /// Finalize the pattern building process
    pub fn build(self) -> Result<HapticPattern, PatternError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        Ok(HapticPattern {
            events: self.events,
        })
    }
}
