// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light variant tag.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// The kind of light, as written in the `type` attribute of a light record.
///
/// # Examples
///
/// ```
/// use lumen_lights::types::LightType;
///
/// assert_eq!(LightType::Cct.as_str(), "cct");
/// assert_eq!("rgb".parse::<LightType>().unwrap(), LightType::Rgb);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LightType {
    /// Plain light: state and intensity only.
    #[default]
    Light,
    /// Correlated color temperature light.
    Cct,
    /// RGB/HSB color light.
    Rgb,
}

impl LightType {
    /// Returns the record tag for this type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Cct => "cct",
            Self::Rgb => "rgb",
        }
    }
}

impl fmt::Display for LightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LightType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "cct" => Ok(Self::Cct),
            "rgb" => Ok(Self::Rgb),
            other => Err(ParseError::UnexpectedFormat(format!(
                "unknown light type '{other}'"
            ))),
        }
    }
}
