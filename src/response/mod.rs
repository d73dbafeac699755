// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Interpretation of bridge JSON responses.
//!
//! Every response first goes through [`classify`], which separates payloads
//! from bridge-reported errors. Typed values are then pulled out of the
//! payload with the [`FromField`] conversions, and device listings are read
//! with [`parse_device_list`].

mod device_list;
mod field;

pub use device_list::{DeviceSummary, parse_device_list};
pub use field::FromField;
pub(crate) use field::{extract, extract_top_level};

use serde_json::Value;

use crate::error::BridgeError;

/// Separates a bridge payload from a bridge-reported error.
///
/// The bridge acknowledges writes with a list holding one report per field.
/// When the first report carries an `"error"` key the whole call is treated
/// as failed; later reports are not inspected. Any other value, including
/// malformed ones, passes through unchanged.
///
/// # Errors
///
/// Returns `BridgeError` carrying the full response when the first report
/// is an error.
///
/// # Examples
///
/// ```
/// use hue_bridge_lib::response::classify;
/// use serde_json::json;
///
/// assert!(classify(json!([{"success": {"/lights/1/state/on": true}}])).is_ok());
/// assert!(classify(json!([{"error": {"type": 3}}])).is_err());
/// assert!(classify(json!({"state": {"on": true}})).is_ok());
/// ```
pub fn classify(response: Value) -> Result<Value, BridgeError> {
    let is_error = response
        .as_array()
        .and_then(|reports| reports.first())
        .is_some_and(|first| first.get("error").is_some());

    if is_error {
        tracing::debug!(response = %response, "Bridge reported an error");
        return Err(BridgeError::new(response));
    }

    Ok(response)
}
