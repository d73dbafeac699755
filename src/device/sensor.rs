// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sensor controller.

use crate::capabilities::{Controller, Reachable, Switchable};
use crate::error::Result;
use crate::protocol::Transport;

use super::{BridgeEndpoint, Device, DeviceHandle, DeviceKind, Field, resolve};

/// A sensor, such as a motion sensor.
///
/// Settings live in the sensor's `config` object; presence is the only
/// field read from `state`. Switching a sensor off disables it on the
/// bridge.
#[derive(Debug, Clone)]
pub struct Sensor<T> {
    device: Device<T>,
}

impl<T: Transport> Sensor<T> {
    /// Creates a controller for the sensor with the given index.
    #[must_use]
    pub fn new(index: u32, endpoint: BridgeEndpoint, transport: T) -> Self {
        Self::from_handle(DeviceHandle::new(DeviceKind::Sensor, index, endpoint), transport)
    }

    /// Looks up a sensor by name and creates a controller for it.
    ///
    /// # Errors
    ///
    /// Returns `Error::DeviceNotFound` if no sensor has this name, or any
    /// request error.
    pub async fn from_name(name: &str, endpoint: BridgeEndpoint, transport: T) -> Result<Self> {
        let handle = resolve(&transport, &endpoint, DeviceKind::Sensor, name).await?;
        Ok(Self::from_handle(handle, transport))
    }

    fn from_handle(handle: DeviceHandle, transport: T) -> Self {
        Self {
            device: Device::new(handle, transport),
        }
    }

    /// Returns the sensor's index on the bridge.
    #[must_use]
    pub fn index(&self) -> u32 {
        self.device.handle().index()
    }

    /// Returns whether the sensor is enabled.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the field is missing.
    pub async fn is_on(&self) -> Result<bool> {
        self.device.read(Field::On).await
    }

    /// Returns the battery level in percent.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the field is missing.
    pub async fn battery(&self) -> Result<u8> {
        self.device.read(Field::Battery).await
    }

    /// Returns whether motion is currently detected.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the field is missing.
    pub async fn presence(&self) -> Result<bool> {
        self.device.read(Field::Presence).await
    }

    // ========== Sensitivity ==========

    /// Returns the configured motion sensitivity.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the field is missing.
    pub async fn sensitivity(&self) -> Result<u32> {
        self.device.read(Field::Sensitivity).await
    }

    /// Returns the highest sensitivity the sensor accepts.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the field is missing.
    pub async fn sensitivity_max(&self) -> Result<u32> {
        self.device.read(Field::SensitivityMax).await
    }

    /// Sets the motion sensitivity, clamped to the sensor's maximum.
    ///
    /// The maximum is read from the sensor first, so this sends two requests.
    /// Returns the value actually written.
    ///
    /// # Errors
    ///
    /// Returns error if either request fails. Nothing is written if reading
    /// the maximum fails.
    pub async fn set_sensitivity(&self, sensitivity: u32) -> Result<u32> {
        let max = self.sensitivity_max().await?;
        let value = sensitivity.min(max);
        self.device.set(Field::Sensitivity, value).await?;
        Ok(value)
    }

    // ========== LED indicator ==========

    /// Returns whether the status LED is enabled.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the field is missing.
    pub async fn led_indication(&self) -> Result<bool> {
        self.device.read(Field::LedIndication).await
    }

    /// Enables or disables the status LED.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the bridge reports an error.
    pub async fn set_led_indication(&self, enabled: bool) -> Result<()> {
        self.device.set(Field::LedIndication, enabled).await
    }
}

impl<T: Transport> Controller for Sensor<T> {
    type Transport = T;

    fn device(&self) -> &Device<T> {
        &self.device
    }
}

impl<T: Transport> Switchable for Sensor<T> {}
impl<T: Transport> Reachable for Sensor<T> {}
