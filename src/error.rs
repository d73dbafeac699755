// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the bridge client.
//!
//! Failures are split by the layer that detects them: argument validation
//! ([`ValueError`]), the network exchange ([`TransportError`]), and errors the
//! bridge reports in its acknowledgement sequence ([`BridgeError`]). All of
//! them fold into the top-level [`Error`].

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::device::{DeviceKind, Field};

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied value was rejected before any request was sent.
    #[error("invalid argument: {0}")]
    Value(#[from] ValueError),

    /// The HTTP exchange with the bridge failed.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The bridge accepted the request but reported an error.
    #[error(transparent)]
    Bridge(#[from] BridgeError),

    /// Name resolution found no device with the requested name.
    #[error("no {kind} named {name:?} on the bridge")]
    DeviceNotFound {
        /// The kind of device that was searched.
        kind: DeviceKind,
        /// The name that was looked up.
        name: String,
    },

    /// An expected field is absent from an otherwise successful response.
    #[error("missing field in response: {0}")]
    FieldMissing(String),

    /// A field is present but holds a value of the wrong JSON type.
    #[error("field {field} is not {expected}")]
    InvalidField {
        /// Dotted path of the offending field.
        field: String,
        /// Description of the expected JSON type.
        expected: &'static str,
    },

    /// The device kind has no route for the requested field.
    #[error("{kind} does not support {field}")]
    UnsupportedField {
        /// The kind of the addressed device.
        kind: DeviceKind,
        /// The field that was requested.
        field: Field,
    },
}

/// Errors related to caller-supplied values.
///
/// Out-of-range numbers are never an error: they are clamped into the
/// bridge's native range. Only values with no meaningful mapping are
/// rejected.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A fractional input was NaN or infinite.
    #[error("value {0} is not a finite number")]
    NotFinite(f64),

    /// A Kelvin value of zero has no Mired equivalent.
    #[error("color temperature of 0 K cannot be converted to mired")]
    ZeroKelvin,

    /// A hex color string could not be parsed.
    #[error("invalid hex color: {0}")]
    InvalidHexColor(String),
}

/// Errors related to the HTTP exchange with the bridge.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP request failed (connection, TLS handshake, timeout, ...).
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The bridge answered with a non-success status and no JSON body.
    #[error("HTTP {status}: {body}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The raw response body.
        body: String,
    },

    /// The response body is not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// An error reported by the bridge in its acknowledgement sequence.
///
/// The bridge answers writes with a list such as
/// `[{"error": {"type": 7, "address": "/lights/1/state/bri", "description": "..."}}]`.
/// The full list is kept for diagnostics; the accessors read the first
/// entry's error object.
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeError {
    payload: Value,
}

impl BridgeError {
    /// Wraps a raw bridge response that carries an error marker.
    #[must_use]
    pub fn new(payload: Value) -> Self {
        Self { payload }
    }

    /// Returns the raw response the bridge sent.
    #[must_use]
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Returns the bridge error code of the first reported error.
    #[must_use]
    pub fn error_type(&self) -> Option<u64> {
        self.first_error()?.get("type")?.as_u64()
    }

    /// Returns the resource address the first error refers to.
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.first_error()?.get("address")?.as_str()
    }

    /// Returns the human readable description of the first error.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.first_error()?.get("description")?.as_str()
    }

    fn first_error(&self) -> Option<&Value> {
        self.payload.as_array()?.first()?.get("error")
    }
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bridge error")?;
        if let Some(code) = self.error_type() {
            write!(f, " {code}")?;
        }
        if let Some(address) = self.address() {
            write!(f, " at {address}")?;
        }
        match self.description() {
            Some(description) => write!(f, ": {description}"),
            None => write!(f, ": {}", self.payload),
        }
    }
}

impl std::error::Error for BridgeError {}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
