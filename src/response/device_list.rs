// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parsing of "list all" responses.

use serde::Deserialize;
use serde_json::Value;

/// Index and name of one device in a bridge listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceSummary {
    /// The device's numeric index on the bridge.
    pub index: u32,
    /// The device's configured name.
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct ListedDevice {
    name: String,
}

/// Reads a listing such as `{"1": {"name": "Desk", ...}, "2": {...}}`.
///
/// Entries are returned in the order the bridge sent them. Entries whose key
/// is not a non-negative integer, or that have no string `name`, are skipped.
/// Anything other than a JSON object yields `None`.
///
/// # Examples
///
/// ```
/// use hue_bridge_lib::response::parse_device_list;
/// use serde_json::json;
///
/// let devices = parse_device_list(&json!({"2": {"name": "Desk"}, "1": {"name": "Hall"}})).unwrap();
/// assert_eq!(devices[0].index, 2);
/// assert_eq!(devices[1].name, "Hall");
/// ```
#[must_use]
pub fn parse_device_list(response: &Value) -> Option<Vec<DeviceSummary>> {
    let entries = response.as_object()?;

    let devices = entries
        .iter()
        .filter_map(|(key, entry)| {
            let Ok(index) = key.parse::<u32>() else {
                tracing::warn!(key = %key, "Skipping listing entry with non-numeric index");
                return None;
            };
            match ListedDevice::deserialize(entry) {
                Ok(listed) => Some(DeviceSummary {
                    index,
                    name: listed.name,
                }),
                Err(e) => {
                    tracing::warn!(index, error = %e, "Skipping listing entry without a name");
                    None
                }
            }
        })
        .collect();

    Some(devices)
}
