// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shade curtain deployment level.
//!
//! This module provides a type-safe representation of how far the shade
//! curtain is drawn, ensuring values are always within 0-100%.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Shade curtain deployment as a percentage (0-100).
///
/// 0 means fully open, 100 means fully closed.
///
/// # Examples
///
/// ```
/// use greenhouse_sim::types::ShadeLevel;
///
/// let level = ShadeLevel::new(45).unwrap();
/// assert_eq!(level.value(), 45);
///
/// assert_eq!(ShadeLevel::OPEN.value(), 0);
/// assert_eq!(ShadeLevel::CLOSED.value(), 100);
///
/// // Invalid values return error
/// assert!(ShadeLevel::new(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ShadeLevel(u8);

impl ShadeLevel {
    /// Fully retracted curtain (0%).
    pub const OPEN: Self = Self(0);

    /// Fully deployed curtain (100%).
    pub const CLOSED: Self = Self(100);

    /// Level the dashboard starts with.
    pub const INITIAL: Self = Self(45);

    /// Creates a new shade level.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 100.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > 100 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: u16::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Creates a shade level, clamping to the valid range.
    ///
    /// ```
    /// use greenhouse_sim::types::ShadeLevel;
    ///
    /// assert_eq!(ShadeLevel::clamped(150).value(), 100);
    /// ```
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > 100 { Self(100) } else { Self(value) }
    }

    /// Returns the deployment percentage.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns the deployment as a fraction between 0.0 and 1.0.
    #[must_use]
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Returns `true` if the curtain is fully retracted.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.0 == 0
    }
}

impl Default for ShadeLevel {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl fmt::Display for ShadeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for ShadeLevel {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ShadeLevel> for u8 {
    fn from(level: ShadeLevel) -> Self {
        level.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shade_valid_values() {
        for v in 0..=100 {
            assert_eq!(ShadeLevel::new(v).unwrap().value(), v);
        }
    }

    #[test]
    fn shade_invalid_value() {
        assert_eq!(
            ShadeLevel::new(101),
            Err(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: 101
            })
        );
    }

    #[test]
    fn shade_clamped() {
        assert_eq!(ShadeLevel::clamped(50).value(), 50);
        assert_eq!(ShadeLevel::clamped(255).value(), 100);
    }

    #[test]
    fn shade_default_is_initial() {
        assert_eq!(ShadeLevel::default().value(), 45);
        assert!(!ShadeLevel::default().is_open());
        assert!(ShadeLevel::OPEN.is_open());
    }

    #[test]
    fn shade_as_fraction() {
        assert!((ShadeLevel::CLOSED.as_fraction() - 1.0).abs() < f64::EPSILON);
        assert!((ShadeLevel::INITIAL.as_fraction() - 0.45).abs() < f64::EPSILON);
    }

    #[test]
    fn shade_display() {
        assert_eq!(ShadeLevel::INITIAL.to_string(), "45%");
    }

    #[test]
    fn shade_serde_rejects_out_of_range() {
        let level: ShadeLevel = serde_json::from_str("80").unwrap();
        assert_eq!(level.value(), 80);
        assert!(serde_json::from_str::<ShadeLevel>("120").is_err());
        assert_eq!(serde_json::to_string(&level).unwrap(), "80");
    }
}
