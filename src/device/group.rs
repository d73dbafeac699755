// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light group controller (rooms, zones).

use crate::capabilities::{Alerting, ColorControl, Controller, Dimmable, Switchable};
use crate::error::Result;
use crate::protocol::Transport;

use super::{BridgeEndpoint, Device, DeviceHandle, DeviceKind, Field, resolve};

/// A group of lights controlled as one unit.
///
/// Writes go to the group's `action` object and apply to every member.
/// Levels are read back from `action` as well, which holds the last values
/// sent to the group rather than a live aggregate of its members. A group
/// has no single on/off state: use [`Group::is_any_on`] or
/// [`Group::is_all_on`].
#[derive(Debug, Clone)]
pub struct Group<T> {
    device: Device<T>,
}

impl<T: Transport> Group<T> {
    /// Creates a controller for the group with the given index.
    #[must_use]
    pub fn new(index: u32, endpoint: BridgeEndpoint, transport: T) -> Self {
        Self::from_handle(DeviceHandle::new(DeviceKind::Group, index, endpoint), transport)
    }

    /// Looks up a group by name and creates a controller for it.
    ///
    /// # Errors
    ///
    /// Returns `Error::DeviceNotFound` if no group has this name, or any
    /// request error.
    pub async fn from_name(name: &str, endpoint: BridgeEndpoint, transport: T) -> Result<Self> {
        let handle = resolve(&transport, &endpoint, DeviceKind::Group, name).await?;
        Ok(Self::from_handle(handle, transport))
    }

    fn from_handle(handle: DeviceHandle, transport: T) -> Self {
        Self {
            device: Device::new(handle, transport),
        }
    }

    /// Returns the group's index on the bridge.
    #[must_use]
    pub fn index(&self) -> u32 {
        self.device.handle().index()
    }

    /// Returns whether at least one light of the group is on.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the field is missing.
    pub async fn is_any_on(&self) -> Result<bool> {
        self.device.read(Field::AnyOn).await
    }

    /// Returns whether every light of the group is on.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the field is missing.
    pub async fn is_all_on(&self) -> Result<bool> {
        self.device.read(Field::AllOn).await
    }
}

impl<T: Transport> Controller for Group<T> {
    type Transport = T;

    fn device(&self) -> &Device<T> {
        &self.device
    }
}

impl<T: Transport> Switchable for Group<T> {}
impl<T: Transport> Dimmable for Group<T> {}
impl<T: Transport> ColorControl for Group<T> {}
impl<T: Transport> Alerting for Group<T> {}
