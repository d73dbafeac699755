// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB color type with hex parsing and conversion to native bridge values.
//!
//! The conversion goes through HSV and is approximate: the bridge renders
//! hue/saturation within each lamp's gamut, so the emitted color only
//! resembles the requested RGB value, and converting back does not give the
//! original bytes.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

use super::{Brightness, Hue, Saturation};

/// RGB color with 8-bit channels (0-255).
///
/// # Examples
///
/// ```
/// use hue_bridge_lib::types::RgbColor;
///
/// let color = RgbColor::new(255, 128, 0);
/// assert_eq!(color.red(), 255);
///
/// let red = RgbColor::from_hex("#FF0000").unwrap();
/// assert_eq!(red, RgbColor::new(255, 0, 0));
/// assert_eq!(red.to_hex(), "FF0000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RgbColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RgbColor {
    /// Creates a new RGB color.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses an RGB color from a hex string.
    ///
    /// Accepts formats: `#RRGGBB`, `RRGGBB`, `#RGB`, `RGB`
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidHexColor` if the string is not a valid
    /// hex color.
    pub fn from_hex(hex: &str) -> Result<Self, ValueError> {
        let digits = hex.trim_start_matches('#');
        let invalid = || ValueError::InvalidHexColor(hex.to_string());

        if !digits.is_ascii() {
            return Err(invalid());
        }

        match digits.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (channel, c) in channels.iter_mut().zip(digits.chars()) {
                    let digit = c.to_digit(16).ok_or_else(invalid)?;
                    // Expand 0-F to 0-255
                    *channel = u8::try_from(digit * 17).map_err(|_| invalid())?;
                }
                Ok(Self::new(channels[0], channels[1], channels[2]))
            }
            6 => {
                let pair = |range: std::ops::Range<usize>| {
                    u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
                };
                Ok(Self::new(pair(0..2)?, pair(2..4)?, pair(4..6)?))
            }
            _ => Err(invalid()),
        }
    }

    /// Returns the red component.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green component.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue component.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Returns the color as an uppercase hex string without `#`.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Converts to the bridge's native hue, saturation and brightness.
    ///
    /// See [`rgb_to_native`].
    #[must_use]
    pub fn to_native(&self) -> NativeColor {
        rgb_to_native(self.red, self.green, self.blue)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl FromStr for RgbColor {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

/// A color expressed in the bridge's native ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeColor {
    /// Hue (0-65535).
    pub hue: Hue,
    /// Saturation (0-254).
    pub saturation: Saturation,
    /// Brightness (0-254).
    pub brightness: Brightness,
}

/// Converts an RGB color to native hue, saturation and brightness.
///
/// Uses the standard RGB to HSV conversion and scales each component into
/// the bridge's range with rounding. This mapping is lossy.
///
/// # Examples
///
/// ```
/// use hue_bridge_lib::types::rgb_to_native;
///
/// let native = rgb_to_native(255, 220, 100);
/// assert_eq!(native.hue.value(), 8456);
/// assert_eq!(native.saturation.value(), 154);
/// assert_eq!(native.brightness.value(), 254);
/// ```
#[must_use]
#[allow(clippy::many_single_char_names, clippy::float_cmp)]
pub fn rgb_to_native(red: u8, green: u8, blue: u8) -> NativeColor {
    let r = f64::from(red) / 255.0;
    let g = f64::from(green) / 255.0;
    let b = f64::from(blue) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let (hue, saturation) = if delta == 0.0 {
        (0.0, 0.0)
    } else {
        // Sector offsets on a 0-6 wheel: red 0, green 2, blue 4
        let h = if max == r {
            (g - b) / delta
        } else if max == g {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };
        ((h / 6.0).rem_euclid(1.0), delta / max)
    };

    NativeColor {
        hue: Hue::scaled(hue),
        saturation: Saturation::scaled(saturation),
        brightness: Brightness::scaled(max),
    }
}
