// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Name resolution over the bridge's device listings.

use crate::device::{BridgeEndpoint, DeviceHandle, DeviceKind};
use crate::error::{Error, Result};
use crate::protocol::{Request, Transport};
use crate::response::{self, DeviceSummary};

/// Lists every device of a kind, in the order the bridge returns them.
///
/// # Errors
///
/// Returns error if the request fails, the bridge reports an error, or the
/// listing is not a JSON object.
pub async fn list<T: Transport>(
    transport: &T,
    endpoint: &BridgeEndpoint,
    kind: DeviceKind,
) -> Result<Vec<DeviceSummary>> {
    let reply = transport
        .call(Request::get(endpoint.collection_url(kind)))
        .await?;
    let listing = response::classify(reply)?;

    response::parse_device_list(&listing).ok_or_else(|| Error::InvalidField {
        field: kind.collection().to_string(),
        expected: "an object keyed by device index",
    })
}

/// Finds the device of `kind` whose name equals `name`.
///
/// The comparison is exact and case-sensitive. When several devices share
/// the name, the first one in the bridge's listing wins.
///
/// # Errors
///
/// Returns `Error::DeviceNotFound` if no device matches, or any error from
/// [`list`].
pub async fn resolve<T: Transport>(
    transport: &T,
    endpoint: &BridgeEndpoint,
    kind: DeviceKind,
    name: &str,
) -> Result<DeviceHandle> {
    let devices = list(transport, endpoint, kind).await?;

    let index = devices
        .into_iter()
        .find(|device| device.name == name)
        .map(|device| device.index)
        .ok_or_else(|| Error::DeviceNotFound {
            kind,
            name: name.to_string(),
        })?;

    tracing::debug!(%kind, name, index, "Resolved device name");

    Ok(DeviceHandle::new(kind, index, endpoint.clone()))
}
