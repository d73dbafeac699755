// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device kinds and their field routing.
//!
//! The bridge does not expose fields uniformly: a light keeps its brightness
//! under `state`, a group reads and writes it under `action`, and a sensor
//! keeps its settings under `config`. [`DeviceKind::read_section`] and
//! [`DeviceKind::write_section`] encode that table field by field; a `None`
//! means the kind does not have the field at all.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a bridge device.
///
/// Lights, groups and sensors have separate index spaces: light 1 and group
/// 1 are unrelated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    /// A single light.
    Light,
    /// A room, zone or other light group.
    Group,
    /// A sensor, such as a motion sensor.
    Sensor,
}

impl DeviceKind {
    /// Returns the collection segment used in API URLs.
    #[must_use]
    pub const fn collection(&self) -> &'static str {
        match self {
            Self::Light => "lights",
            Self::Group => "groups",
            Self::Sensor => "sensors",
        }
    }

    /// Returns the section a field is read from, if the kind has that field.
    #[must_use]
    pub const fn read_section(&self, field: Field) -> Option<Section> {
        match (*self, field) {
            (
                Self::Light,
                Field::On
                | Field::Reachable
                | Field::Brightness
                | Field::Hue
                | Field::Saturation
                | Field::ColorTemperature,
            )
            | (Self::Group, Field::AnyOn | Field::AllOn)
            | (Self::Sensor, Field::Presence) => Some(Section::State),
            (
                Self::Group,
                Field::Brightness | Field::Hue | Field::Saturation | Field::ColorTemperature,
            ) => Some(Section::Action),
            (
                Self::Sensor,
                Field::On
                | Field::Reachable
                | Field::Battery
                | Field::Sensitivity
                | Field::SensitivityMax
                | Field::LedIndication,
            ) => Some(Section::Config),
            _ => None,
        }
    }

    /// Returns the section a field is written to, if the kind accepts writes
    /// to that field.
    #[must_use]
    pub const fn write_section(&self, field: Field) -> Option<Section> {
        match (*self, field) {
            (
                Self::Light,
                Field::On
                | Field::Brightness
                | Field::Hue
                | Field::Saturation
                | Field::ColorTemperature
                | Field::Alert,
            ) => Some(Section::State),
            (
                Self::Group,
                Field::On
                | Field::Brightness
                | Field::Hue
                | Field::Saturation
                | Field::ColorTemperature
                | Field::Alert,
            ) => Some(Section::Action),
            (Self::Sensor, Field::On | Field::Sensitivity | Field::LedIndication) => {
                Some(Section::Config)
            }
            _ => None,
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Group => "group",
            Self::Sensor => "sensor",
        })
    }
}

/// The JSON sub-object of a resource that holds a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Current state of a light or sensor, and group summary flags.
    State,
    /// Last action applied to a group.
    Action,
    /// Sensor configuration.
    Config,
}

impl Section {
    /// Returns the key of the sub-object, also used as URL suffix for writes.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::State => "state",
            Self::Action => "action",
            Self::Config => "config",
        }
    }
}

/// A device field addressed by this library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// On/off switch (`on`).
    On,
    /// Whether any light of a group is on (`any_on`).
    AnyOn,
    /// Whether all lights of a group are on (`all_on`).
    AllOn,
    /// Whether the bridge can reach the device (`reachable`).
    Reachable,
    /// Brightness, 0-254 (`bri`).
    Brightness,
    /// Hue, 0-65535 (`hue`).
    Hue,
    /// Saturation, 0-254 (`sat`).
    Saturation,
    /// Color temperature in mired, 154-500 (`ct`).
    ColorTemperature,
    /// Alert effect, write-only (`alert`).
    Alert,
    /// Battery level in percent (`battery`).
    Battery,
    /// Motion sensitivity (`sensitivity`).
    Sensitivity,
    /// Highest accepted sensitivity (`sensitivitymax`).
    SensitivityMax,
    /// Status LED (`ledindication`).
    LedIndication,
    /// Motion detected (`presence`).
    Presence,
}

impl Field {
    /// Returns the JSON key of the field.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::On => "on",
            Self::AnyOn => "any_on",
            Self::AllOn => "all_on",
            Self::Reachable => "reachable",
            Self::Brightness => "bri",
            Self::Hue => "hue",
            Self::Saturation => "sat",
            Self::ColorTemperature => "ct",
            Self::Alert => "alert",
            Self::Battery => "battery",
            Self::Sensitivity => "sensitivity",
            Self::SensitivityMax => "sensitivitymax",
            Self::LedIndication => "ledindication",
            Self::Presence => "presence",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
