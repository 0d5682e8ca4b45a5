use core::{fmt::Write, time::Duration};

use arrayvec::ArrayString;
use chrono::{NaiveTime, Timelike};

/// Stack buffer holding a rendered `HH:MM:SS`.
pub type Timestamp = ArrayString<16>;

/// A platform clock sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockReading {
    /// Time since boot. Rendered as hours mod 24, minutes mod 60, seconds mod 60.
    Uptime(Duration),
    /// Synchronised time of day.
    WallClock(NaiveTime),
}

impl ClockReading {
    pub fn from_millis(ms: u64) -> Self {
        ClockReading::Uptime(Duration::from_millis(ms))
    }

    /// Hours, minutes and seconds shown for this reading.
    pub fn hms(&self) -> (u64, u64, u64) {
        match self {
            ClockReading::Uptime(uptime) => {
                let secs = uptime.as_secs();
                ((secs / 3600) % 24, (secs / 60) % 60, secs % 60)
            }
            ClockReading::WallClock(time) => (
                time.hour() as u64,
                time.minute() as u64,
                time.second() as u64,
            ),
        }
    }
}

pub fn render(reading: &ClockReading) -> Timestamp {
    let (hours, minutes, seconds) = reading.hms();
    let mut buf = Timestamp::new();
    // Each field is below 100, eight bytes always fit
    let _: Result<_, _> = write!(buf, "{:02}:{:02}:{:02}", hours, minutes, seconds);
    buf
}
