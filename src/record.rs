// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Serializable snapshot of a light.
//!
//! A [`LightRecord`] carries the attributes of the `Light` element handed to
//! persistence or transport layers. It renders as an XML element with
//! [`LightRecord::to_xml`] and as JSON with [`LightRecord::to_json`]; both use
//! the same attribute names.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, Result};
use crate::light::LightCore;
use crate::types::{LightType, PackedColor};

/// Attributes of one light.
///
/// Variant fields are `None` for lights that do not have them and are left
/// out of every rendering.
///
/// # Examples
///
/// ```
/// use lumen_lights::{CctLight, LightControl};
///
/// let mut light = CctLight::new();
/// light.set_light_id(2);
/// assert_eq!(
///     light.to_record().to_xml(),
///     r#"<Light type="cct" lightid="2" state="true" intensity="255" min_intensity="0" max_intensity="255" cct="128" min_cct="0" max_cct="255" />"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightRecord {
    /// Variant tag.
    #[serde(rename = "type")]
    pub light_type: LightType,
    /// Light identifier.
    #[serde(rename = "lightid")]
    pub light_id: i32,
    /// On/off state.
    pub state: bool,
    /// Current intensity.
    pub intensity: i32,
    /// Lower intensity bound.
    pub min_intensity: i32,
    /// Upper intensity bound.
    pub max_intensity: i32,
    /// Color temperature (CCT lights only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cct: Option<i32>,
    /// Lower color temperature bound (CCT lights only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_cct: Option<i32>,
    /// Upper color temperature bound (CCT lights only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cct: Option<i32>,
    /// Packed 24-bit color (color lights only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<PackedColor>,
}

impl LightRecord {
    /// Name of the rendered element.
    pub const ELEMENT: &'static str = "Light";

    /// Creates a record holding the base attributes of `core`.
    #[must_use]
    pub fn from_core(light_type: LightType, core: &LightCore) -> Self {
        let range = core.intensity_range();
        Self {
            light_type,
            light_id: core.light_id(),
            state: core.is_on(),
            intensity: core.intensity(),
            min_intensity: range.min(),
            max_intensity: range.max(),
            cct: None,
            min_cct: None,
            max_cct: None,
            color: None,
        }
    }

    /// Returns the attributes in rendering order, skipping absent ones.
    #[must_use]
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attributes = vec![
            ("type", self.light_type.as_str().to_owned()),
            ("lightid", self.light_id.to_string()),
            ("state", self.state.to_string()),
            ("intensity", self.intensity.to_string()),
            ("min_intensity", self.min_intensity.to_string()),
            ("max_intensity", self.max_intensity.to_string()),
        ];
        let optional = [
            ("cct", self.cct),
            ("min_cct", self.min_cct),
            ("max_cct", self.max_cct),
        ];
        attributes.extend(
            optional
                .into_iter()
                .filter_map(|(name, value)| value.map(|value| (name, value.to_string()))),
        );
        if let Some(color) = self.color {
            attributes.push(("color", color.value().to_string()));
        }
        attributes
    }

    /// Renders the record as a self-closing `Light` element.
    ///
    /// The color is written as a decimal integer.
    #[must_use]
    pub fn to_xml(&self) -> String {
        let mut xml = format!("<{}", Self::ELEMENT);
        for (name, value) in self.attributes() {
            // Writing into a String cannot fail.
            let _ = write!(xml, " {name}=\"{value}\"");
        }
        xml.push_str(" />");
        xml
    }

    /// Serializes the record to JSON.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| ParseError::Json(e).into())
    }

    /// Deserializes a record from JSON.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if `json` is not a valid record.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ParseError::Json(e).into())
    }
}
