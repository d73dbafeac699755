// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Capability traits implemented by the device controllers.
//!
//! Each trait groups the operations of one row family of the capability
//! matrix. A controller implements only the traits its kind supports:
//!
//! | Trait | Light | Group | Sensor |
//! |-------|-------|-------|--------|
//! | [`Controller`] | yes | yes | yes |
//! | [`Switchable`] | yes | yes | yes |
//! | [`Reachable`] | yes | - | yes |
//! | [`Dimmable`] | yes | yes | - |
//! | [`ColorControl`] | yes | yes | - |
//! | [`Alerting`] | yes | yes | - |
//!
//! All methods have default implementations over [`Controller::device`], so
//! routing to `state`, `action` or `config` is decided by the device kind
//! alone.
//!
//! Setters taking `f64` use fractions between 0.0 and 1.0; the `*_native`
//! variants take the bridge's own integer ranges through the level types.

use serde_json::Value;

use crate::device::{Device, Field};
use crate::error::Result;
use crate::protocol;
use crate::types::{Alert, Brightness, Hue, Mired, RgbColor, Saturation};

/// Base trait of every controller.
#[allow(async_fn_in_trait)]
pub trait Controller {
    /// Transport the controller sends its requests through.
    type Transport: protocol::Transport;

    /// Returns the shared device core.
    fn device(&self) -> &Device<Self::Transport>;

    /// Fetches the device's configured name.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the resource has no name.
    async fn name(&self) -> Result<String> {
        self.device().name().await
    }

    /// Fetches the full resource description.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the bridge reports an error.
    async fn describe(&self) -> Result<Value> {
        self.device().describe().await
    }
}

// ========== Power ==========

/// Devices that can be switched on and off.
///
/// For a group the write applies to every member light.
#[allow(async_fn_in_trait)]
pub trait Switchable: Controller {
    /// Switches the device on or off.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the bridge reports an error.
    async fn set_on(&self, on: bool) -> Result<()> {
        self.device().set(Field::On, on).await
    }

    /// Switches the device on.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the bridge reports an error.
    async fn turn_on(&self) -> Result<()> {
        self.set_on(true).await
    }

    /// Switches the device off.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the bridge reports an error.
    async fn turn_off(&self) -> Result<()> {
        self.set_on(false).await
    }
}

/// Devices that report whether the bridge can reach them.
#[allow(async_fn_in_trait)]
pub trait Reachable: Controller {
    /// Returns whether the bridge can currently reach the device.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the field is missing.
    async fn is_reachable(&self) -> Result<bool> {
        self.device().read(Field::Reachable).await
    }
}

// ========== Brightness ==========

/// Devices with adjustable brightness.
#[allow(async_fn_in_trait)]
pub trait Dimmable: Controller {
    /// Reads the current brightness.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the field is missing.
    async fn brightness(&self) -> Result<Brightness> {
        let value: u8 = self.device().read(Field::Brightness).await?;
        Ok(Brightness::reported(value))
    }

    /// Sets the brightness from a fraction, clamped to [0.0, 1.0].
    ///
    /// # Errors
    ///
    /// Returns `Error::Value` for a non-finite fraction, before anything is
    /// sent, or any request error.
    async fn set_brightness(&self, fraction: f64) -> Result<()> {
        let brightness = Brightness::from_fraction(fraction)?;
        self.set_brightness_native(brightness).await
    }

    /// Sets the brightness to a native level.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the bridge reports an error.
    async fn set_brightness_native(&self, brightness: Brightness) -> Result<()> {
        self.device()
            .set(Field::Brightness, brightness.value())
            .await
    }
}

// ========== Color ==========

/// Devices with hue, saturation and white color temperature.
#[allow(async_fn_in_trait)]
pub trait ColorControl: Controller {
    /// Reads the current hue.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the field is missing.
    async fn hue(&self) -> Result<Hue> {
        let value: u16 = self.device().read(Field::Hue).await?;
        Ok(Hue::from_native(value))
    }

    /// Sets the hue from a fraction of the color wheel, clamped to [0.0, 1.0].
    ///
    /// # Errors
    ///
    /// Returns `Error::Value` for a non-finite fraction, or any request error.
    async fn set_hue(&self, fraction: f64) -> Result<()> {
        let hue = Hue::from_fraction(fraction)?;
        self.set_hue_native(hue).await
    }

    /// Sets the hue to a native value.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the bridge reports an error.
    async fn set_hue_native(&self, hue: Hue) -> Result<()> {
        self.device().set(Field::Hue, hue.value()).await
    }

    /// Reads the current saturation.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the field is missing.
    async fn saturation(&self) -> Result<Saturation> {
        let value: u8 = self.device().read(Field::Saturation).await?;
        Ok(Saturation::reported(value))
    }

    /// Sets the saturation from a fraction, clamped to [0.0, 1.0].
    ///
    /// # Errors
    ///
    /// Returns `Error::Value` for a non-finite fraction, or any request error.
    async fn set_saturation(&self, fraction: f64) -> Result<()> {
        let saturation = Saturation::from_fraction(fraction)?;
        self.set_saturation_native(saturation).await
    }

    /// Sets the saturation to a native value.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the bridge reports an error.
    async fn set_saturation_native(&self, saturation: Saturation) -> Result<()> {
        self.device()
            .set(Field::Saturation, saturation.value())
            .await
    }

    /// Reads the current color temperature as the bridge reports it.
    ///
    /// The value is not clamped; lamps may report 153 at their coolest.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the field is missing.
    async fn color_temperature(&self) -> Result<Mired> {
        let value: u16 = self.device().read(Field::ColorTemperature).await?;
        Ok(Mired::reported(value))
    }

    /// Sets the color temperature in mired, clamped to [154, 500].
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the bridge reports an error.
    async fn set_color_temperature(&self, mired: u16) -> Result<()> {
        self.device()
            .set(Field::ColorTemperature, Mired::clamped(mired).value())
            .await
    }

    /// Sets the color temperature in Kelvin, converted to mired and clamped.
    ///
    /// # Errors
    ///
    /// Returns `Error::Value` if `kelvin` is zero, or any request error.
    async fn set_color_temperature_kelvin(&self, kelvin: u32) -> Result<()> {
        let mired = Mired::from_kelvin(kelvin)?;
        self.set_color_temperature(mired.value()).await
    }

    /// Sets hue, saturation and brightness from an RGB color in one request.
    ///
    /// The conversion is approximate; see [`crate::types::rgb_to_native`].
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the bridge reports an error.
    async fn set_color(&self, color: RgbColor) -> Result<()> {
        let native = color.to_native();
        self.device()
            .write(&[
                (Field::Hue, native.hue.value().into()),
                (Field::Saturation, native.saturation.value().into()),
                (Field::Brightness, native.brightness.value().into()),
            ])
            .await
    }
}

// ========== Alerts ==========

/// Devices that can play a temporary alert effect.
#[allow(async_fn_in_trait)]
pub trait Alerting: Controller {
    /// Sends an alert effect.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the bridge reports an error.
    async fn set_alert(&self, alert: Alert) -> Result<()> {
        self.device().set(Field::Alert, alert).await
    }

    /// Plays a single breathe cycle.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the bridge reports an error.
    async fn alert(&self) -> Result<()> {
        self.set_alert(Alert::Select).await
    }

    /// Plays breathe cycles for about 15 seconds.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the bridge reports an error.
    async fn alert_long(&self) -> Result<()> {
        self.set_alert(Alert::LongSelect).await
    }

    /// Stops an ongoing alert.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the bridge reports an error.
    async fn stop_alert(&self) -> Result<()> {
        self.set_alert(Alert::None).await
    }
}
