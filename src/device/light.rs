// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Single light controller.

use crate::capabilities::{Alerting, ColorControl, Controller, Dimmable, Reachable, Switchable};
use crate::error::Result;
use crate::protocol::Transport;

use super::{BridgeEndpoint, Device, DeviceHandle, DeviceKind, Field, resolve};

/// A single light.
///
/// Reads and writes go through the light's `state` object.
///
/// # Examples
///
/// ```no_run
/// use hue_bridge_lib::prelude::*;
///
/// # async fn example() -> hue_bridge_lib::Result<()> {
/// let transport = HttpConfig::new().accept_self_signed().into_transport()?;
/// let endpoint = BridgeEndpoint::new("192.168.1.2", "my-api-user");
///
/// let light = Light::new(3, endpoint, transport);
/// if !light.is_on().await? {
///     light.turn_on().await?;
/// }
/// light.set_color_temperature_kelvin(2700).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Light<T> {
    device: Device<T>,
}

impl<T: Transport> Light<T> {
    /// Creates a controller for the light with the given index.
    ///
    /// The index is not checked; an unknown index surfaces as a bridge
    /// error on the first operation.
    #[must_use]
    pub fn new(index: u32, endpoint: BridgeEndpoint, transport: T) -> Self {
        Self::from_handle(DeviceHandle::new(DeviceKind::Light, index, endpoint), transport)
    }

    /// Looks up a light by name and creates a controller for it.
    ///
    /// When several lights share the name, the first one listed by the
    /// bridge is used.
    ///
    /// # Errors
    ///
    /// Returns `Error::DeviceNotFound` if no light has this name, or any
    /// request error.
    pub async fn from_name(name: &str, endpoint: BridgeEndpoint, transport: T) -> Result<Self> {
        let handle = resolve(&transport, &endpoint, DeviceKind::Light, name).await?;
        Ok(Self::from_handle(handle, transport))
    }

    fn from_handle(handle: DeviceHandle, transport: T) -> Self {
        Self {
            device: Device::new(handle, transport),
        }
    }

    /// Returns the light's index on the bridge.
    #[must_use]
    pub fn index(&self) -> u32 {
        self.device.handle().index()
    }

    /// Returns whether the light is on.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the field is missing.
    pub async fn is_on(&self) -> Result<bool> {
        self.device.read(Field::On).await
    }
}

impl<T: Transport> Controller for Light<T> {
    type Transport = T;

    fn device(&self) -> &Device<T> {
        &self.device
    }
}

impl<T: Transport> Switchable for Light<T> {}
impl<T: Transport> Reachable for Light<T> {}
impl<T: Transport> Dimmable for Light<T> {}
impl<T: Transport> ColorControl for Light<T> {}
impl<T: Transport> Alerting for Light<T> {}
