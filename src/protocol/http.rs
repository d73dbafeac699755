// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the bridge API.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::error::TransportError;
use crate::protocol::{Method, Request, Transport};

/// How the transport treats the bridge's TLS certificate.
///
/// Bridges ship with a self-signed certificate that no public chain
/// validates. Talking to one over HTTPS therefore requires
/// [`AcceptSelfSigned`](Self::AcceptSelfSigned). This only skips certificate
/// validation: the session is still encrypted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CertificatePolicy {
    /// Validate the certificate chain and host name.
    #[default]
    Verify,
    /// Accept any certificate the peer presents, including self-signed ones.
    AcceptSelfSigned,
}

/// Configuration for an [`HttpTransport`].
///
/// # Examples
///
/// ```
/// use hue_bridge_lib::protocol::{CertificatePolicy, HttpConfig};
/// use std::time::Duration;
///
/// let config = HttpConfig::new()
///     .accept_self_signed()
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(config.certificate_policy(), CertificatePolicy::AcceptSelfSigned);
/// assert_eq!(config.timeout(), Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    timeout: Duration,
    certificate_policy: CertificatePolicy,
}

impl HttpConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration with the default timeout and certificate
    /// verification enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            timeout: Self::DEFAULT_TIMEOUT,
            certificate_policy: CertificatePolicy::Verify,
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the certificate policy.
    #[must_use]
    pub fn with_certificate_policy(mut self, policy: CertificatePolicy) -> Self {
        self.certificate_policy = policy;
        self
    }

    /// Accepts the bridge's self-signed certificate.
    ///
    /// Shorthand for `with_certificate_policy(CertificatePolicy::AcceptSelfSigned)`.
    #[must_use]
    pub fn accept_self_signed(self) -> Self {
        self.with_certificate_policy(CertificatePolicy::AcceptSelfSigned)
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the certificate policy.
    #[must_use]
    pub fn certificate_policy(&self) -> CertificatePolicy {
        self.certificate_policy
    }

    /// Creates an `HttpTransport` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn into_transport(self) -> Result<HttpTransport, TransportError> {
        let mut builder = Client::builder().timeout(self.timeout);

        if self.certificate_policy == CertificatePolicy::AcceptSelfSigned {
            tracing::warn!("Certificate verification disabled for bridge transport");
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder.build().map_err(TransportError::Http)?;

        Ok(HttpTransport {
            client,
            certificate_policy: self.certificate_policy,
        })
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP transport backed by a reqwest client.
///
/// Cloning is cheap and clones share the underlying connection pool.
///
/// # Examples
///
/// ```no_run
/// use hue_bridge_lib::protocol::{HttpConfig, Request, Transport};
///
/// # async fn example() -> hue_bridge_lib::Result<()> {
/// let transport = HttpConfig::new().accept_self_signed().into_transport()?;
/// let lights = transport
///     .call(Request::get("https://192.168.1.2/api/my-user/lights"))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    certificate_policy: CertificatePolicy,
}

impl HttpTransport {
    /// Creates a transport with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new() -> Result<Self, TransportError> {
        HttpConfig::new().into_transport()
    }

    /// Returns the certificate policy this transport was built with.
    #[must_use]
    pub fn certificate_policy(&self) -> CertificatePolicy {
        self.certificate_policy
    }
}

impl Transport for HttpTransport {
    async fn call(&self, request: Request) -> Result<Value, TransportError> {
        tracing::debug!(method = %request.method(), url = %request.url(), "Sending bridge request");

        let builder = match (request.method(), request.body()) {
            (Method::Put, Some(body)) => self.client.put(request.url()).json(body),
            (Method::Put, None) => self.client.put(request.url()),
            (Method::Get, _) => self.client.get(request.url()),
        };

        let response = builder.send().await.map_err(TransportError::Http)?;
        let status = response.status();
        let body = response.text().await.map_err(TransportError::Http)?;

        tracing::debug!(status = status.as_u16(), body = %body, "Received bridge response");

        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(e) if status.is_success() => Err(TransportError::Json(e)),
            Err(_) => Err(TransportError::Status {
                status: status.as_u16(),
                body,
            }),
        }
    }
}
