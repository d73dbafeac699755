// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for bridge device control.
//!
//! These types map user-facing units onto the integer ranges the bridge
//! accepts. Out-of-range input is clamped at construction, so a value
//! built by caller code is always safe to send. Getters return the value
//! the bridge reported, unclamped.
//!
//! # Types
//!
//! | Type | Native range | Built from |
//! |------|--------------|------------|
//! | [`Brightness`] | 0-254 | fraction 0.0-1.0 |
//! | [`Hue`] | 0-65535 | fraction 0.0-1.0 |
//! | [`Saturation`] | 0-254 | fraction 0.0-1.0 |
//! | [`Mired`] | 154-500 | mired or Kelvin |
//! | [`RgbColor`] | - | 8-bit RGB, converted with [`rgb_to_native`] |
//! | [`Alert`] | - | `select` / `lselect` / `none` |

mod alert;
mod color;
mod level;
mod rgb_color;

pub use alert::Alert;
pub use color::{Mired, kelvin_to_mired};
pub use level::{Brightness, Hue, Saturation};
pub use rgb_color::{NativeColor, RgbColor, rgb_to_native};
