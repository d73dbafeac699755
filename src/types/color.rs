// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! White color temperature.

use std::fmt;

use crate::error::ValueError;

/// Converts a Kelvin temperature to mired, rounding to the nearest integer.
///
/// The result is not clamped; see [`Mired::from_kelvin`] for a value the
/// bridge accepts.
///
/// # Errors
///
/// Returns `ValueError::ZeroKelvin` if `kelvin` is zero.
///
/// # Examples
///
/// ```
/// use hue_bridge_lib::types::kelvin_to_mired;
///
/// assert_eq!(kelvin_to_mired(2000).unwrap(), 500);
/// assert_eq!(kelvin_to_mired(6500).unwrap(), 154);
/// ```
pub fn kelvin_to_mired(kelvin: u32) -> Result<u32, ValueError> {
    if kelvin == 0 {
        return Err(ValueError::ZeroKelvin);
    }
    Ok((1_000_000 + kelvin / 2) / kelvin)
}

/// Color temperature in mired.
///
/// Values built with [`Mired::clamped`] or [`Mired::from_kelvin`] are within
/// the bridge's write range (154-500).
///
/// Lower values are cooler (bluer), higher values warmer.
///
/// - 154 (~6500K) - Cool daylight
/// - 250 (4000K) - Neutral white
/// - 500 (2000K) - Warm candlelight
///
/// # Examples
///
/// ```
/// use hue_bridge_lib::types::Mired;
///
/// assert_eq!(Mired::clamped(100).value(), 154);
/// assert_eq!(Mired::clamped(600).value(), 500);
/// assert_eq!(Mired::clamped(300).value(), 300);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mired(u16);

impl Mired {
    /// Minimum color temperature (coolest).
    pub const MIN: u16 = 154;

    /// Maximum color temperature (warmest).
    pub const MAX: u16 = 500;

    /// Cool daylight.
    pub const COOL: Self = Self(154);

    /// Neutral white.
    pub const NEUTRAL: Self = Self(250);

    /// Warm white (~2700K).
    pub const WARM: Self = Self(370);

    /// Candlelight.
    pub const CANDLE: Self = Self(500);

    /// Creates a color temperature, clamping to [154, 500].
    #[must_use]
    pub const fn clamped(value: u16) -> Self {
        if value < Self::MIN {
            Self(Self::MIN)
        } else if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    /// Keeps a value read back from the bridge as reported.
    ///
    /// Lamps may report values just outside the accepted write range, such
    /// as 153 for their coolest setting.
    pub(crate) const fn reported(value: u16) -> Self {
        Self(value)
    }

    /// Creates a color temperature from Kelvin, clamping to the bridge range.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::ZeroKelvin` if `kelvin` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_bridge_lib::types::Mired;
    ///
    /// assert_eq!(Mired::from_kelvin(4000).unwrap().value(), 250);
    /// assert_eq!(Mired::from_kelvin(10_000).unwrap().value(), 154);
    /// ```
    pub fn from_kelvin(kelvin: u32) -> Result<Self, ValueError> {
        let mired = kelvin_to_mired(kelvin)?;
        Ok(Self::clamped(u16::try_from(mired).unwrap_or(u16::MAX)))
    }

    /// Returns the value in mired.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }

    /// Returns the approximate color temperature in Kelvin.
    #[must_use]
    pub fn to_kelvin(&self) -> u32 {
        1_000_000 / u32::from(self.0).max(1)
    }
}

impl Default for Mired {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for Mired {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mired", self.0)
    }
}
