// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bridge addressing: endpoints and device handles.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{DeviceKind, Section};

/// URL scheme used to reach the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// HTTPS, the only scheme real bridges should be reached with.
    #[default]
    Https,
    /// Plain HTTP, for bridge emulators and local test servers.
    Http,
}

impl Scheme {
    /// Returns the scheme name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Https => "https",
            Self::Http => "http",
        }
    }
}

/// Address of a bridge and the API user to act as.
///
/// Reachability is not checked on construction. The endpoint can be
/// deserialized from configuration:
///
/// ```
/// use hue_bridge_lib::BridgeEndpoint;
///
/// let endpoint: BridgeEndpoint =
///     serde_json::from_str(r#"{"host": "192.168.1.2", "username": "s3cr3t"}"#).unwrap();
/// assert_eq!(endpoint.base_url(), "https://192.168.1.2/api/s3cr3t");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BridgeEndpoint {
    host: String,
    username: String,
    #[serde(default)]
    scheme: Scheme,
}

impl BridgeEndpoint {
    /// Creates an HTTPS endpoint.
    ///
    /// # Arguments
    ///
    /// * `host` - Host name or IP address of the bridge, optionally with `:port`
    /// * `username` - API user token issued by the bridge
    #[must_use]
    pub fn new(host: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            username: username.into(),
            scheme: Scheme::Https,
        }
    }

    /// Sets the URL scheme.
    #[must_use]
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the API user token.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the scheme.
    #[must_use]
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Returns `{scheme}://{host}/api/{username}`.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!(
            "{}://{}/api/{}",
            self.scheme.as_str(),
            self.host,
            urlencoding::encode(&self.username)
        )
    }

    /// Returns the URL listing every device of a kind.
    #[must_use]
    pub fn collection_url(&self, kind: DeviceKind) -> String {
        format!("{}/{}", self.base_url(), kind.collection())
    }
}

// The username is a credential; keep it out of logs.
impl fmt::Debug for BridgeEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BridgeEndpoint")
            .field("host", &self.host)
            .field("username", &"<redacted>")
            .field("scheme", &self.scheme)
            .finish()
    }
}

/// Identifies one device on one bridge.
///
/// The index is not checked against the bridge; an unknown index surfaces
/// as a bridge error on the first operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceHandle {
    kind: DeviceKind,
    index: u32,
    endpoint: BridgeEndpoint,
}

impl DeviceHandle {
    /// Creates a handle from a known index.
    #[must_use]
    pub fn new(kind: DeviceKind, index: u32, endpoint: BridgeEndpoint) -> Self {
        Self {
            kind,
            index,
            endpoint,
        }
    }

    /// Returns the device kind.
    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    /// Returns the device index.
    #[must_use]
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Returns the bridge endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &BridgeEndpoint {
        &self.endpoint
    }

    /// Returns the URL of the device resource, used for reads.
    #[must_use]
    pub fn resource_url(&self) -> String {
        format!("{}/{}", self.endpoint.collection_url(self.kind), self.index)
    }

    /// Returns the URL of one section of the device, used for writes.
    #[must_use]
    pub fn section_url(&self, section: Section) -> String {
        format!("{}/{}", self.resource_url(), section.as_str())
    }
}

impl fmt::Display for DeviceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} on {}", self.kind, self.index, self.endpoint.host)
    }
}
