// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device controllers.
//!
//! [`Device`] is the shared core: it owns a [`DeviceHandle`] and a
//! [`Transport`], and turns field reads and writes into single bridge
//! requests, routed through the kind's table (see [`DeviceKind`]).
//!
//! [`Light`], [`Group`] and [`Sensor`] wrap a `Device` and expose only what
//! their kind supports, through the capability traits in
//! [`crate::capabilities`] plus a few inherent methods.
//!
//! ```no_run
//! use hue_bridge_lib::prelude::*;
//!
//! # async fn example() -> hue_bridge_lib::Result<()> {
//! let transport = HttpConfig::new().accept_self_signed().into_transport()?;
//! let endpoint = BridgeEndpoint::new("192.168.1.2", "my-api-user");
//!
//! let desk = Light::from_name("Desk", endpoint, transport).await?;
//! desk.set_on(true).await?;
//! desk.set_brightness(0.5).await?;
//! # Ok(())
//! # }
//! ```

mod endpoint;
mod group;
mod kind;
mod light;
mod resolve;
mod sensor;

pub use endpoint::{BridgeEndpoint, DeviceHandle, Scheme};
pub use group::Group;
pub use kind::{DeviceKind, Field, Section};
pub use light::Light;
pub use resolve::{list, resolve};
pub use sensor::Sensor;

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::protocol::{Request, Transport};
use crate::response::{self, FromField};

/// A device of any kind, addressed through its handle.
///
/// All operations are stateless: every read fetches the resource and every
/// write sends one PUT. Fields the kind does not support are rejected before
/// anything is sent.
#[derive(Debug, Clone)]
pub struct Device<T> {
    handle: DeviceHandle,
    transport: T,
}

impl<T: Transport> Device<T> {
    /// Creates a device from a handle and a transport.
    #[must_use]
    pub fn new(handle: DeviceHandle, transport: T) -> Self {
        Self { handle, transport }
    }

    /// Returns the device handle.
    #[must_use]
    pub fn handle(&self) -> &DeviceHandle {
        &self.handle
    }

    /// Returns the transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches the full resource description.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the bridge reports an error.
    pub async fn describe(&self) -> Result<Value> {
        let reply = self
            .transport
            .call(Request::get(self.handle.resource_url()))
            .await?;
        Ok(response::classify(reply)?)
    }

    /// Fetches the device's configured name.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the bridge reports an error, or
    /// the resource has no string `name`.
    pub async fn name(&self) -> Result<String> {
        let resource = self.describe().await?;
        response::extract_top_level(&resource, "name")
    }

    /// Reads a field as raw JSON.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedField` if the kind has no such field,
    /// `Error::FieldMissing` if the bridge omitted it, or any transport or
    /// bridge error.
    pub async fn get(&self, field: Field) -> Result<Value> {
        self.read(field).await
    }

    /// Writes a single field without any normalization.
    ///
    /// Prefer the typed setters on [`Light`], [`Group`] and [`Sensor`],
    /// which clamp values into range first.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedField` if the kind does not accept writes
    /// to the field, or any transport or bridge error.
    pub async fn set(&self, field: Field, value: impl Into<Value>) -> Result<()> {
        self.write(&[(field, value.into())]).await
    }

    pub(crate) async fn read<V: FromField>(&self, field: Field) -> Result<V> {
        let section = self.read_section(field)?;
        let resource = self.describe().await?;
        response::extract(&resource, section, field.key())
    }

    /// Writes several fields of the same section in one request.
    pub(crate) async fn write(&self, fields: &[(Field, Value)]) -> Result<()> {
        let Some((first, _)) = fields.first() else {
            return Ok(());
        };
        let section = self.write_section(*first)?;

        let mut body = Map::new();
        for (field, value) in fields {
            if self.write_section(*field)? != section {
                return Err(self.unsupported(*field));
            }
            body.insert(field.key().to_string(), value.clone());
        }

        let reply = self
            .transport
            .call(Request::put(self.handle.section_url(section), Value::Object(body)))
            .await?;
        response::classify(reply)?;
        Ok(())
    }

    fn read_section(&self, field: Field) -> Result<Section> {
        self.handle
            .kind()
            .read_section(field)
            .ok_or_else(|| self.unsupported(field))
    }

    fn write_section(&self, field: Field) -> Result<Section> {
        self.handle
            .kind()
            .write_section(field)
            .ok_or_else(|| self.unsupported(field))
    }

    fn unsupported(&self, field: Field) -> Error {
        Error::UnsupportedField {
            kind: self.handle.kind(),
            field,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::protocol::Method;
    use crate::protocol::mock::ScriptedTransport;

    fn endpoint() -> BridgeEndpoint {
        BridgeEndpoint::new("bridge", "user")
    }

    fn device(kind: DeviceKind, transport: &ScriptedTransport) -> Device<&ScriptedTransport> {
        Device::new(DeviceHandle::new(kind, 1, endpoint()), transport)
    }

    #[tokio::test]
    async fn get_reads_routed_field() {
        let transport = ScriptedTransport::new().respond(json!({"action": {"bri": 80}}));
        let group = device(DeviceKind::Group, &transport);

        assert_eq!(group.get(Field::Brightness).await.unwrap(), json!(80));

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method(), Method::Get);
        assert_eq!(requests[0].url(), "https://bridge/api/user/groups/1");
    }

    #[tokio::test]
    async fn set_sends_single_key_body_to_section() {
        let transport = ScriptedTransport::new();
        let sensor = device(DeviceKind::Sensor, &transport);

        sensor.set(Field::LedIndication, true).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].method(), Method::Put);
        assert_eq!(requests[0].url(), "https://bridge/api/user/sensors/1/config");
        assert_eq!(requests[0].body(), Some(&json!({"ledindication": true})));
    }

    #[tokio::test]
    async fn unsupported_field_is_rejected_before_sending() {
        let transport = ScriptedTransport::new();
        let sensor = device(DeviceKind::Sensor, &transport);

        let err = sensor.set(Field::Brightness, 10).await.unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedField {
                kind: DeviceKind::Sensor,
                field: Field::Brightness
            }
        ));
        assert!(sensor.get(Field::Hue).await.is_err());
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn mixed_sections_are_rejected() {
        let transport = ScriptedTransport::new();
        let sensor = device(DeviceKind::Sensor, &transport);

        let err = sensor
            .write(&[(Field::On, json!(true)), (Field::Presence, json!(true))])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedField { .. }));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn missing_field_is_distinct_from_bridge_error() {
        let transport = ScriptedTransport::new()
            .respond(json!({"state": {}}))
            .respond(json!([{"error": {"type": 3, "description": "resource not available"}}]));
        let light = device(DeviceKind::Light, &transport);

        let missing = light.get(Field::Brightness).await.unwrap_err();
        assert!(matches!(missing, Error::FieldMissing(path) if path == "state.bri"));

        let bridge = light.get(Field::Brightness).await.unwrap_err();
        assert!(matches!(bridge, Error::Bridge(_)));
    }

    #[tokio::test]
    async fn write_error_acknowledgement_is_propagated() {
        let transport = ScriptedTransport::new().respond(json!([
            {"error": {"type": 201, "address": "/lights/1/state/bri", "description": "device is off"}}
        ]));
        let light = device(DeviceKind::Light, &transport);

        let err = light.set(Field::Brightness, 100).await.unwrap_err();
        let Error::Bridge(bridge) = err else {
            panic!("expected bridge error, got {err:?}");
        };
        assert_eq!(bridge.error_type(), Some(201));
    }

    #[tokio::test]
    async fn transport_failure_is_propagated() {
        let transport = ScriptedTransport::new().fail(crate::error::TransportError::Status {
            status: 503,
            body: "busy".to_string(),
        });
        let light = device(DeviceKind::Light, &transport);

        let err = light.describe().await.unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }

    #[tokio::test]
    async fn name_reads_top_level_field() {
        let transport = ScriptedTransport::new().respond(json!({"name": "Hallway", "state": {}}));
        let light = device(DeviceKind::Light, &transport);
        assert_eq!(light.name().await.unwrap(), "Hallway");
    }
}
