// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hue Bridge Lib - A Rust library to control lights, groups and sensors
//! through a Hue bridge.
//!
//! This library provides async APIs over the bridge's local HTTP/JSON
//! interface. Every operation is a single request (or two, for
//! [`Sensor::set_sensitivity`]); the bridge holds all state.
//!
//! # Supported Features
//!
//! - **Lights**: on/off, reachability, brightness, hue, saturation, color
//!   temperature, RGB colors, alerts
//! - **Groups**: the same controls applied to every member, plus any-on and
//!   all-on flags
//! - **Sensors**: on/off, reachability, battery, presence, motion
//!   sensitivity, status LED
//! - **Name lookup**: address any device by its configured name
//!
//! # Value Conventions
//!
//! Brightness, hue and saturation setters take fractions between 0.0 and
//! 1.0 and scale them into the bridge's ranges. The `*_native` setters take
//! [`types::Brightness`], [`types::Hue`] and [`types::Saturation`] for callers
//! that already have native values. Color temperature is given in mired
//! (154-500) or Kelvin. Out-of-range values are clamped, not rejected.
//!
//! # Certificates
//!
//! Bridges serve HTTPS with a self-signed certificate. Certificate
//! verification stays on unless the transport is built with
//! [`HttpConfig::accept_self_signed`].
//!
//! # Quick Start
//!
//! ```no_run
//! use hue_bridge_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> hue_bridge_lib::Result<()> {
//!     let transport = HttpConfig::new().accept_self_signed().into_transport()?;
//!     let endpoint = BridgeEndpoint::new("192.168.1.2", "my-api-user");
//!
//!     let living_room = Group::from_name("Living room", endpoint.clone(), transport.clone()).await?;
//!     living_room.turn_on().await?;
//!     living_room.set_color_temperature(370).await?;
//!
//!     let motion = Sensor::new(5, endpoint, transport);
//!     let applied = motion.set_sensitivity(2).await?;
//!     println!("sensitivity set to {applied}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Custom Transports
//!
//! Controllers are generic over [`protocol::Transport`]. The default
//! [`HttpTransport`] is built on reqwest; any other implementation can be
//! substituted, which is how bridge emulators and test doubles plug in.

pub mod capabilities;
pub mod device;
pub mod error;
pub mod protocol;
pub mod response;
pub mod types;

pub use capabilities::{Alerting, ColorControl, Controller, Dimmable, Reachable, Switchable};
pub use device::{
    BridgeEndpoint, Device, DeviceHandle, DeviceKind, Field, Group, Light, Scheme, Section, Sensor,
};
pub use error::{BridgeError, Error, Result, TransportError, ValueError};
#[cfg(feature = "http")]
pub use protocol::{CertificatePolicy, HttpConfig, HttpTransport};
pub use protocol::{Method, Request, Transport};
pub use response::DeviceSummary;
pub use types::{Alert, Brightness, Hue, Mired, NativeColor, RgbColor, Saturation};

/// Everything needed to control devices, for glob import.
pub mod prelude {
    pub use crate::capabilities::{
        Alerting, ColorControl, Controller, Dimmable, Reachable, Switchable,
    };
    pub use crate::device::{BridgeEndpoint, Group, Light, Scheme, Sensor};
    #[cfg(feature = "http")]
    pub use crate::protocol::{CertificatePolicy, HttpConfig, HttpTransport};
    pub use crate::types::{Alert, Brightness, Hue, Mired, RgbColor, Saturation};
}
