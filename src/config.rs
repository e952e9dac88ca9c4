// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Declarative light construction.

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, Result};
use crate::light::{AnyLight, CctLight, ColorLight, Light, LightControl};
use crate::record::LightRecord;
use crate::types::{HsbColor, LightType, PackedColor, ParameterRange};

/// Initial color of a color light, in either color model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSetting {
    /// A packed 24-bit color.
    Packed(PackedColor),
    /// RGB channels on a 0-255 scale.
    Rgb {
        /// Red channel.
        red: i32,
        /// Green channel.
        green: i32,
        /// Blue channel.
        blue: i32,
    },
    /// HSB components on a 0-255 scale.
    Hsb {
        /// Hue.
        hue: i32,
        /// Saturation.
        saturation: i32,
        /// Brightness.
        brightness: i32,
    },
}

/// Describes how to construct a light.
///
/// Unset fields keep the defaults of the light constructors.
///
/// # Examples
///
/// ```
/// use lumen_lights::{ColorSetting, LightConfig, LightControl};
///
/// let light = LightConfig::rgb()
///     .with_light_id(4)
///     .with_intensity(200)
///     .with_color(ColorSetting::Rgb { red: 255, green: 0, blue: 0 })
///     .build()
///     .unwrap();
///
/// assert_eq!(light.light_id(), 4);
/// assert_eq!(light.as_color().map(|c| c.hue()), Some(0));
///
/// let json = r#"{"type": "cct", "cct_range": {"min": 0, "max": 1000}, "cct": 640}"#;
/// let light = lumen_lights::LightConfig::from_json(json).unwrap().build().unwrap();
/// assert_eq!(light.as_cct().map(|c| c.cct()), Some(640));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    /// Variant to build.
    #[serde(rename = "type")]
    pub light_type: LightType,
    /// Identifier; when set, the identifier is also marked as in use.
    pub light_id: Option<i32>,
    /// Initial on/off state.
    pub state: bool,
    /// Intensity bounds.
    pub intensity_range: ParameterRange,
    /// Initial intensity; defaults to the upper bound.
    pub intensity: Option<i32>,
    /// Color temperature bounds (CCT lights only).
    pub cct_range: ParameterRange,
    /// Initial color temperature (CCT lights only), clamped into range.
    pub cct: Option<i32>,
    /// Initial color (color lights only).
    pub color: Option<ColorSetting>,
}

impl LightConfig {
    /// Creates a configuration for a plain light.
    #[must_use]
    pub fn plain() -> Self {
        Self::default()
    }

    /// Creates a configuration for a CCT light.
    #[must_use]
    pub fn cct() -> Self {
        Self {
            light_type: LightType::Cct,
            ..Self::default()
        }
    }

    /// Creates a configuration for a color light.
    #[must_use]
    pub fn rgb() -> Self {
        Self {
            light_type: LightType::Rgb,
            ..Self::default()
        }
    }

    /// Sets the identifier.
    #[must_use]
    pub const fn with_light_id(mut self, light_id: i32) -> Self {
        self.light_id = Some(light_id);
        self
    }

    /// Sets the initial on/off state.
    #[must_use]
    pub const fn with_state(mut self, on: bool) -> Self {
        self.state = on;
        self
    }

    /// Sets the intensity bounds.
    #[must_use]
    pub const fn with_intensity_range(mut self, min: i32, max: i32) -> Self {
        self.intensity_range = ParameterRange::new(min, max);
        self
    }

    /// Sets the initial intensity.
    #[must_use]
    pub const fn with_intensity(mut self, intensity: i32) -> Self {
        self.intensity = Some(intensity);
        self
    }

    /// Sets the color temperature bounds.
    #[must_use]
    pub const fn with_cct_range(mut self, min: i32, max: i32) -> Self {
        self.cct_range = ParameterRange::new(min, max);
        self
    }

    /// Sets the initial color temperature.
    #[must_use]
    pub const fn with_cct(mut self, cct: i32) -> Self {
        self.cct = Some(cct);
        self
    }

    /// Sets the initial color.
    #[must_use]
    pub const fn with_color(mut self, color: ColorSetting) -> Self {
        self.color = Some(color);
        self
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if `json` is not a valid configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ParseError::Json(e).into())
    }

    /// Builds the light. No events are fired during construction.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the initial intensity lies outside
    /// the intensity bounds.
    pub fn build(&self) -> Result<AnyLight> {
        let mut light = self.assemble();
        let intensity = self.intensity.unwrap_or_else(|| self.intensity_range.max());
        light.try_set_intensity(intensity, false)?;

        tracing::debug!(
            light_type = %self.light_type,
            light_id = light.light_id(),
            "Built light from configuration"
        );
        Ok(light)
    }

    /// Creates the light with everything but its intensity applied.
    pub(crate) fn assemble(&self) -> AnyLight {
        let mut light = match self.light_type {
            LightType::Light => AnyLight::Plain(Light::new()),
            LightType::Cct => AnyLight::Cct(self.build_cct()),
            LightType::Rgb => AnyLight::Color(self.build_color()),
        };
        self.warn_unused_fields();

        if let Some(light_id) = self.light_id {
            light.set_light_id(light_id);
        }
        light.set_range(self.intensity_range.min(), self.intensity_range.max());
        light.set_state(self.state, false);
        light
    }

    fn build_cct(&self) -> CctLight {
        let mut light = CctLight::new();
        light.set_range_cct(self.cct_range.min(), self.cct_range.max());
        if let Some(cct) = self.cct {
            light.set_cct(cct, false);
        }
        light
    }

    fn build_color(&self) -> ColorLight {
        let mut light = ColorLight::new();
        match self.color {
            Some(ColorSetting::Packed(color)) => {
                light.set_color(color, false);
            }
            Some(ColorSetting::Rgb { red, green, blue }) => {
                light.write_rgb(red, green, blue);
            }
            Some(ColorSetting::Hsb {
                hue,
                saturation,
                brightness,
            }) => {
                light.write_hsb(HsbColor::new(hue, saturation, brightness));
            }
            None => {}
        }
        light
    }

    fn warn_unused_fields(&self) {
        let has_cct_fields = self.cct.is_some() || self.cct_range != ParameterRange::BYTE;
        if self.light_type != LightType::Cct && has_cct_fields {
            tracing::warn!(
                light_type = %self.light_type,
                "Ignoring color temperature settings for a light without CCT"
            );
        }
        if self.light_type != LightType::Rgb && self.color.is_some() {
            tracing::warn!(
                light_type = %self.light_type,
                "Ignoring color setting for a light without color"
            );
        }
    }
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            light_type: LightType::Light,
            light_id: None,
            state: true,
            intensity_range: ParameterRange::BYTE,
            intensity: None,
            cct_range: ParameterRange::BYTE,
            cct: None,
            color: None,
        }
    }
}

impl TryFrom<&LightRecord> for LightConfig {
    type Error = crate::Error;

    fn try_from(record: &LightRecord) -> Result<Self> {
        fn required(value: Option<i32>, name: &str) -> Result<i32> {
            value.ok_or_else(|| ParseError::MissingField(name.to_owned()).into())
        }

        let mut config = Self {
            light_type: record.light_type,
            light_id: (record.light_id != 0).then_some(record.light_id),
            state: record.state,
            intensity_range: ParameterRange::new(record.min_intensity, record.max_intensity),
            intensity: Some(record.intensity),
            ..Self::default()
        };
        match record.light_type {
            LightType::Light => {}
            LightType::Cct => {
                config.cct_range = ParameterRange::new(
                    required(record.min_cct, "min_cct")?,
                    required(record.max_cct, "max_cct")?,
                );
                config.cct = Some(required(record.cct, "cct")?);
            }
            LightType::Rgb => {
                let color = record
                    .color
                    .ok_or_else(|| ParseError::MissingField("color".to_owned()))?;
                config.color = Some(ColorSetting::Packed(color));
            }
        }
        Ok(config)
    }
}
