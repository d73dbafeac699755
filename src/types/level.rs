// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Brightness, hue and saturation levels.
//!
//! The bridge stores these as integers in fixed native ranges. User code
//! usually thinks in fractions, so each type is built from a fraction
//! between 0.0 and 1.0 and scaled with `clamp(round(fraction * max), 0, max)`.
//! Native values can be used directly through `from_native`, which clamps as
//! well. Out-of-range inputs are saturated, never rejected. Values read
//! back from the bridge are kept as reported.

use std::fmt;

use crate::error::ValueError;

/// Scales a finite fraction into `0..=max`, rounding half away from zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn scale_fraction(fraction: f64, max: u16) -> u16 {
    let max_f = f64::from(max);
    // Safe: clamped into [0, max] before the cast
    (fraction * max_f).round().clamp(0.0, max_f) as u16
}

fn finite(fraction: f64) -> Result<f64, ValueError> {
    if fraction.is_finite() {
        Ok(fraction)
    } else {
        Err(ValueError::NotFinite(fraction))
    }
}

/// Light brightness in the bridge's native range (0-254).
///
/// # Examples
///
/// ```
/// use hue_bridge_lib::types::Brightness;
///
/// assert_eq!(Brightness::from_fraction(0.0).unwrap().value(), 0);
/// assert_eq!(Brightness::from_fraction(1.0).unwrap().value(), 254);
/// assert_eq!(Brightness::from_fraction(1.5).unwrap().value(), 254);
/// assert_eq!(Brightness::from_fraction(-1.0).unwrap().value(), 0);
///
/// assert!(Brightness::from_fraction(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Brightness(u8);

impl Brightness {
    /// Largest native value.
    pub const NATIVE_MAX: u8 = 254;

    /// Lowest brightness.
    pub const MIN: Self = Self(0);

    /// Full brightness.
    pub const MAX: Self = Self(Self::NATIVE_MAX);

    /// Creates a brightness from a native value, clamping to 254.
    #[must_use]
    pub const fn from_native(value: u8) -> Self {
        if value > Self::NATIVE_MAX {
            Self::MAX
        } else {
            Self(value)
        }
    }

    /// Keeps a value read back from the bridge as reported.
    pub(crate) const fn reported(value: u8) -> Self {
        Self(value)
    }

    /// Creates a brightness from a fraction, clamping to [0.0, 1.0].
    ///
    /// # Errors
    ///
    /// Returns `ValueError::NotFinite` for NaN or infinite input.
    pub fn from_fraction(fraction: f64) -> Result<Self, ValueError> {
        Ok(Self::scaled(finite(fraction)?))
    }

    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn scaled(fraction: f64) -> Self {
        // Safe: scale_fraction never exceeds NATIVE_MAX
        Self(scale_fraction(fraction, u16::from(Self::NATIVE_MAX)) as u8)
    }

    /// Returns the native value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a fraction between 0.0 and 1.0.
    #[must_use]
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / f64::from(Self::NATIVE_MAX)
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::NATIVE_MAX)
    }
}

/// Hue in the bridge's native range (0-65535).
///
/// Both ends of the range are red; 21845 is green and 43690 is blue.
///
/// # Examples
///
/// ```
/// use hue_bridge_lib::types::Hue;
///
/// assert_eq!(Hue::from_fraction(0.5).unwrap().value(), 32768);
/// assert_eq!(Hue::from_fraction(2.0).unwrap().value(), 65535);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hue(u16);

impl Hue {
    /// Largest native value.
    pub const NATIVE_MAX: u16 = u16::MAX;

    /// Creates a hue from a native value. Every `u16` is in range.
    #[must_use]
    pub const fn from_native(value: u16) -> Self {
        Self(value)
    }

    /// Creates a hue from a fraction of the color wheel, clamping to [0.0, 1.0].
    ///
    /// # Errors
    ///
    /// Returns `ValueError::NotFinite` for NaN or infinite input.
    pub fn from_fraction(fraction: f64) -> Result<Self, ValueError> {
        Ok(Self::scaled(finite(fraction)?))
    }

    pub(crate) fn scaled(fraction: f64) -> Self {
        Self(scale_fraction(fraction, Self::NATIVE_MAX))
    }

    /// Returns the native value.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }

    /// Returns the value as a fraction between 0.0 and 1.0.
    #[must_use]
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / f64::from(Self::NATIVE_MAX)
    }
}

impl fmt::Display for Hue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Color saturation in the bridge's native range (0-254).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Saturation(u8);

impl Saturation {
    /// Largest native value.
    pub const NATIVE_MAX: u8 = 254;

    /// Creates a saturation from a native value, clamping to 254.
    #[must_use]
    pub const fn from_native(value: u8) -> Self {
        if value > Self::NATIVE_MAX {
            Self(Self::NATIVE_MAX)
        } else {
            Self(value)
        }
    }

    /// Keeps a value read back from the bridge as reported.
    pub(crate) const fn reported(value: u8) -> Self {
        Self(value)
    }

    /// Creates a saturation from a fraction, clamping to [0.0, 1.0].
    ///
    /// # Errors
    ///
    /// Returns `ValueError::NotFinite` for NaN or infinite input.
    pub fn from_fraction(fraction: f64) -> Result<Self, ValueError> {
        Ok(Self::scaled(finite(fraction)?))
    }

    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn scaled(fraction: f64) -> Self {
        Self(scale_fraction(fraction, u16::from(Self::NATIVE_MAX)) as u8)
    }

    /// Returns the native value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a fraction between 0.0 and 1.0.
    #[must_use]
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / f64::from(Self::NATIVE_MAX)
    }
}

impl fmt::Display for Saturation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::NATIVE_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_from_fraction_bounds() {
        assert_eq!(Brightness::from_fraction(0.0).unwrap().value(), 0);
        assert_eq!(Brightness::from_fraction(1.0).unwrap().value(), 254);
        assert_eq!(Brightness::from_fraction(1.5).unwrap().value(), 254);
        assert_eq!(Brightness::from_fraction(-1.0).unwrap().value(), 0);
    }

    #[test]
    fn brightness_rounds_to_nearest() {
        // 0.5 * 254 = 127 exactly, 0.3 * 254 = 76.2
        assert_eq!(Brightness::from_fraction(0.5).unwrap().value(), 127);
        assert_eq!(Brightness::from_fraction(0.3).unwrap().value(), 76);
        // 0.999 * 254 = 253.746
        assert_eq!(Brightness::from_fraction(0.999).unwrap().value(), 254);
    }

    #[test]
    fn brightness_rejects_non_finite() {
        assert!(matches!(
            Brightness::from_fraction(f64::NAN),
            Err(ValueError::NotFinite(_))
        ));
        assert!(Brightness::from_fraction(f64::INFINITY).is_err());
        assert!(Brightness::from_fraction(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn brightness_from_native_clamps() {
        assert_eq!(Brightness::from_native(100).value(), 100);
        assert_eq!(Brightness::from_native(255), Brightness::MAX);
    }

    #[test]
    fn brightness_is_deterministic() {
        let first = Brightness::from_fraction(0.5).unwrap();
        let second = Brightness::from_fraction(0.5).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn hue_from_fraction() {
        assert_eq!(Hue::from_fraction(0.0).unwrap().value(), 0);
        assert_eq!(Hue::from_fraction(0.5).unwrap().value(), 32768);
        assert_eq!(Hue::from_fraction(1.0).unwrap().value(), 65535);
        assert_eq!(Hue::from_fraction(2.0).unwrap().value(), 65535);
        assert_eq!(Hue::from_fraction(-0.2).unwrap().value(), 0);
    }

    #[test]
    fn saturation_from_fraction() {
        assert_eq!(Saturation::from_fraction(0.25).unwrap().value(), 64);
        assert_eq!(Saturation::from_fraction(3.0).unwrap().value(), 254);
        assert_eq!(Saturation::from_native(255).value(), 254);
    }

    #[test]
    fn as_fraction_round_trips_ends() {
        assert!((Brightness::MAX.as_fraction() - 1.0).abs() < f64::EPSILON);
        assert!(Hue::from_native(0).as_fraction().abs() < f64::EPSILON);
    }

    #[test]
    fn display() {
        assert_eq!(Brightness::from_native(127).to_string(), "127/254");
        assert_eq!(Hue::from_native(8456).to_string(), "8456");
    }
}
