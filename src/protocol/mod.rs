// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport layer for talking to the bridge.
//!
//! A [`Transport`] performs exactly one request/response exchange per call and
//! returns the parsed JSON body. It knows nothing about devices or bridge
//! error semantics; those live in [`crate::device`] and [`crate::response`].
//!
//! # Implementations
//!
//! - [`HttpTransport`]: reqwest-based HTTPS client (feature `http`)
//!
//! Any other type can implement [`Transport`] to stand in for the bridge,
//! for example a recording double in tests.

#[cfg(feature = "http")]
mod http;
#[cfg(test)]
pub(crate) mod mock;

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

#[cfg(feature = "http")]
pub use http::{CertificatePolicy, HttpConfig, HttpTransport};

use crate::error::TransportError;

/// HTTP method of a bridge request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Reads a resource. Never carries a body.
    Get,
    /// Writes a resource. Always carries a JSON body.
    Put,
}

impl Method {
    /// Returns the method name as used on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single request to the bridge.
///
/// The constructors tie the body to the method: GET requests have none, PUT
/// requests always have one.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    method: Method,
    url: String,
    body: Option<Value>,
}

impl Request {
    /// Creates a GET request for the given URL.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            body: None,
        }
    }

    /// Creates a PUT request carrying a JSON body.
    #[must_use]
    pub fn put(url: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Put,
            url: url.into(),
            body: Some(body),
        }
    }

    /// Returns the HTTP method.
    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    /// Returns the full request URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the JSON body, present for PUT requests only.
    #[must_use]
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}

/// Trait for anything that can carry a request to the bridge.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Sends the request and returns the parsed JSON response.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the exchange fails or the body is not
    /// JSON. Bridge-reported errors inside a valid JSON body are not
    /// errors at this layer.
    async fn call(&self, request: Request) -> Result<Value, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    async fn call(&self, request: Request) -> Result<Value, TransportError> {
        (**self).call(request).await
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn call(&self, request: Request) -> Result<Value, TransportError> {
        (**self).call(request).await
    }
}
