//! Wall-clock source.

use chrono::{DateTime, FixedOffset, Local, Utc};
use pixface_core::FaceTime;

/// One sample of the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    /// Local time shown on the face.
    pub time: FaceTime,
    /// Milliseconds since the Unix epoch, for timer alignment.
    pub epoch_millis: i64,
}

/// Reads the system clock in the local zone or a fixed offset.
///
/// The zone is resolved on every read, so a change to the system timezone
/// shows up on the next frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    offset: Option<FixedOffset>,
}

impl SystemClock {
    pub fn new(offset: Option<FixedOffset>) -> Self {
        Self { offset }
    }

    pub fn now(&self) -> Reading {
        self.reading_at(Utc::now())
    }

    pub fn reading_at(&self, utc: DateTime<Utc>) -> Reading {
        let time = match self.offset {
            Some(offset) => FaceTime::from_timelike(&utc.with_timezone(&offset)),
            None => FaceTime::from_timelike(&utc.with_timezone(&Local)),
        };
        Reading {
            time,
            epoch_millis: utc.timestamp_millis(),
        }
    }
}
