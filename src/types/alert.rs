// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Alert effects for lights and groups.

use std::fmt;

/// A temporary alert effect.
///
/// # Examples
///
/// ```
/// use hue_bridge_lib::types::Alert;
///
/// assert_eq!(Alert::Select.as_str(), "select");
/// assert_eq!(Alert::LongSelect.as_str(), "lselect");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alert {
    /// Stop an ongoing alert.
    None,
    /// A single breathe cycle.
    Select,
    /// Breathe cycles for about 15 seconds.
    LongSelect,
}

impl Alert {
    /// Returns the value sent to the bridge.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Select => "select",
            Self::LongSelect => "lselect",
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Alert> for serde_json::Value {
    fn from(alert: Alert) -> Self {
        Self::String(alert.as_str().to_string())
    }
}
