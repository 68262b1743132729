// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wall-clock reading shown in the dashboard header.

use std::fmt;

use chrono::{Local, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// A time of day truncated to whole seconds, displayed as `HH:MM:SS`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use greenhouse_sim::types::ClockReading;
///
/// let time = NaiveTime::from_hms_opt(9, 5, 3).unwrap();
/// assert_eq!(ClockReading::from_time(time).to_string(), "09:05:03");
///
/// // Before the first clock tick the header shows midnight
/// assert_eq!(ClockReading::default().to_string(), "00:00:00");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawClock")]
pub struct ClockReading {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

/// Unvalidated wire form of [`ClockReading`].
#[derive(Deserialize)]
struct RawClock {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl TryFrom<RawClock> for ClockReading {
    type Error = ValueError;

    fn try_from(raw: RawClock) -> Result<Self, Self::Error> {
        Self::new(raw.hours, raw.minutes, raw.seconds)
    }
}

impl ClockReading {
    /// Creates a reading from its components.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if `hours` exceeds 23 or `minutes`
    /// or `seconds` exceed 59.
    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Result<Self, ValueError> {
        for (value, max) in [(hours, 23), (minutes, 59), (seconds, 59)] {
            if value > max {
                return Err(ValueError::OutOfRange {
                    min: 0,
                    max: u16::from(max),
                    actual: u16::from(value),
                });
            }
        }
        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }

    /// Creates a reading from a time of day, dropping sub-second precision.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_time(time: NaiveTime) -> Self {
        // hour() < 24, minute() < 60, second() < 60
        Self {
            hours: time.hour() as u8,
            minutes: time.minute() as u8,
            seconds: time.second() as u8,
        }
    }

    /// Reads the local wall clock.
    #[must_use]
    pub fn now() -> Self {
        Self::from_time(Local::now().time())
    }

    /// Returns the hour (0-23).
    #[must_use]
    pub const fn hours(&self) -> u8 {
        self.hours
    }

    /// Returns the minute (0-59).
    #[must_use]
    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Returns the second (0-59).
    #[must_use]
    pub const fn seconds(&self) -> u8 {
        self.seconds
    }
}

impl fmt::Display for ClockReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

impl From<NaiveTime> for ClockReading {
    fn from(time: NaiveTime) -> Self {
        Self::from_time(time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_single_digits() {
        let time = NaiveTime::from_hms_opt(1, 2, 3).unwrap();
        assert_eq!(ClockReading::from_time(time).to_string(), "01:02:03");
    }

    #[test]
    fn drops_fraction_of_second() {
        let time = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap();
        let reading = ClockReading::from(time);
        assert_eq!(reading.to_string(), "23:59:59");
        assert_eq!(reading.hours(), 23);
        assert_eq!(reading.minutes(), 59);
        assert_eq!(reading.seconds(), 59);
    }

    #[test]
    fn now_is_well_formed() {
        let text = ClockReading::now().to_string();
        assert_eq!(text.len(), 8);
        assert_eq!(&text[2..3], ":");
        assert_eq!(&text[5..6], ":");
    }

    #[test]
    fn new_validates_components() {
        assert_eq!(ClockReading::new(23, 59, 59).unwrap().to_string(), "23:59:59");
        assert_eq!(
            ClockReading::new(24, 0, 0),
            Err(ValueError::OutOfRange {
                min: 0,
                max: 23,
                actual: 24
            })
        );
        assert!(ClockReading::new(0, 60, 0).is_err());
        assert!(ClockReading::new(0, 0, 60).is_err());
    }

    #[test]
    fn deserialize_rejects_out_of_range() {
        let result =
            serde_json::from_str::<ClockReading>(r#"{"hours":99,"minutes":99,"seconds":99}"#);
        assert!(result.is_err());

        let reading: ClockReading =
            serde_json::from_str(r#"{"hours":7,"minutes":45,"seconds":0}"#).unwrap();
        assert_eq!(reading.to_string(), "07:45:00");
        assert_eq!(serde_json::to_value(reading).unwrap()["minutes"], 45);
    }

    #[test]
    fn default_is_midnight() {
        assert_eq!(ClockReading::default().to_string(), "00:00:00");
    }
}
