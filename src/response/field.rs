// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed field extraction from resource objects.

use serde_json::Value;

use crate::device::Section;
use crate::error::Error;

/// Conversion from a single JSON field value.
pub trait FromField: Sized {
    /// Description of the expected JSON type, used in error messages.
    const EXPECTED: &'static str;

    /// Converts the value, or returns `None` if it has the wrong type or
    /// does not fit.
    fn from_field(value: &Value) -> Option<Self>;
}

impl FromField for bool {
    const EXPECTED: &'static str = "a boolean";

    fn from_field(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FromField for String {
    const EXPECTED: &'static str = "a string";

    fn from_field(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl FromField for Value {
    const EXPECTED: &'static str = "a JSON value";

    fn from_field(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

macro_rules! impl_from_field_unsigned {
    ($($ty:ty => $expected:literal),* $(,)?) => {
        $(
            impl FromField for $ty {
                const EXPECTED: &'static str = $expected;

                fn from_field(value: &Value) -> Option<Self> {
                    value.as_u64().and_then(|v| <$ty>::try_from(v).ok())
                }
            }
        )*
    };
}

impl_from_field_unsigned! {
    u8 => "an integer in 0..=255",
    u16 => "an integer in 0..=65535",
    u32 => "a non-negative 32-bit integer",
}

/// Reads `<section>.<key>` from a resource object.
pub(crate) fn extract<V: FromField>(
    resource: &Value,
    section: Section,
    key: &str,
) -> Result<V, Error> {
    let path = format!("{}.{key}", section.as_str());
    let value = resource
        .get(section.as_str())
        .and_then(|object| object.get(key))
        .ok_or_else(|| Error::FieldMissing(path.clone()))?;

    V::from_field(value).ok_or(Error::InvalidField {
        field: path,
        expected: V::EXPECTED,
    })
}

/// Reads a top-level `key` from a resource object.
pub(crate) fn extract_top_level<V: FromField>(resource: &Value, key: &str) -> Result<V, Error> {
    let value = resource
        .get(key)
        .ok_or_else(|| Error::FieldMissing(key.to_string()))?;

    V::from_field(value).ok_or_else(|| Error::InvalidField {
        field: key.to_string(),
        expected: V::EXPECTED,
    })
}
