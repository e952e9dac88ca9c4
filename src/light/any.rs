// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tagged union over the light variants.

use std::fmt;

use crate::config::LightConfig;
use crate::error::Result;
use crate::event::LightRef;
use crate::record::LightRecord;
use crate::types::LightType;

use super::{CctLight, ColorLight, Light, LightControl, LightCore};

/// Any kind of light.
///
/// Useful when lights of different kinds are kept in one collection or
/// restored from records.
///
/// # Examples
///
/// ```
/// use lumen_lights::{AnyLight, CctLight, LightControl};
/// use lumen_lights::types::LightType;
///
/// let mut lights = vec![AnyLight::from(CctLight::new()), AnyLight::default()];
/// for light in &mut lights {
///     light.turn_off(true);
/// }
/// assert_eq!(lights[0].light_type(), LightType::Cct);
/// assert!(lights.iter().all(|light| light.is_off()));
/// ```
#[derive(Debug)]
pub enum AnyLight {
    /// A plain light.
    Plain(Light),
    /// A color temperature light.
    Cct(CctLight),
    /// An RGB/HSB color light.
    Color(ColorLight),
}

impl AnyLight {
    /// Returns the variant tag.
    #[must_use]
    pub const fn light_type(&self) -> LightType {
        match self {
            Self::Plain(_) => LightType::Light,
            Self::Cct(_) => LightType::Cct,
            Self::Color(_) => LightType::Rgb,
        }
    }

    /// Returns the CCT light, if this is one.
    #[must_use]
    pub const fn as_cct(&self) -> Option<&CctLight> {
        match self {
            Self::Cct(light) => Some(light),
            _ => None,
        }
    }

    /// Returns the CCT light mutably, if this is one.
    pub fn as_cct_mut(&mut self) -> Option<&mut CctLight> {
        match self {
            Self::Cct(light) => Some(light),
            _ => None,
        }
    }

    /// Returns the color light, if this is one.
    #[must_use]
    pub const fn as_color(&self) -> Option<&ColorLight> {
        match self {
            Self::Color(light) => Some(light),
            _ => None,
        }
    }

    /// Returns the color light mutably, if this is one.
    pub fn as_color_mut(&mut self) -> Option<&mut ColorLight> {
        match self {
            Self::Color(light) => Some(light),
            _ => None,
        }
    }

    /// Returns the serializable record of this light.
    #[must_use]
    pub fn to_record(&self) -> LightRecord {
        match self {
            Self::Plain(light) => light.to_record(),
            Self::Cct(light) => light.to_record(),
            Self::Color(light) => light.to_record(),
        }
    }

    /// Rebuilds a light from a record.
    ///
    /// The stored intensity and color temperature are written as-is, even
    /// when they lie outside the stored bounds, since the setters that
    /// change bounds never reclamp. Listeners are not part of a record; the
    /// restored light has none.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if the record lacks a field its
    /// type requires.
    pub fn from_record(record: &LightRecord) -> Result<Self> {
        let mut light = LightConfig::try_from(record)?.assemble();
        light.core_mut().restore_intensity(record.intensity);
        if let (Some(cct_light), Some(cct)) = (light.as_cct_mut(), record.cct) {
            cct_light.restore_cct(cct);
        }
        tracing::debug!(
            light_type = %record.light_type,
            light_id = record.light_id,
            "Restored light from record"
        );
        Ok(light)
    }
}

impl Default for AnyLight {
    fn default() -> Self {
        Self::Plain(Light::new())
    }
}

impl LightControl for AnyLight {
    fn core(&self) -> &LightCore {
        match self {
            Self::Plain(light) => light.core(),
            Self::Cct(light) => light.core(),
            Self::Color(light) => light.core(),
        }
    }

    fn core_mut(&mut self) -> &mut LightCore {
        match self {
            Self::Plain(light) => light.core_mut(),
            Self::Cct(light) => light.core_mut(),
            Self::Color(light) => light.core_mut(),
        }
    }

    fn as_source(&self) -> LightRef<'_> {
        match self {
            Self::Plain(light) => light.as_source(),
            Self::Cct(light) => light.as_source(),
            Self::Color(light) => light.as_source(),
        }
    }
}

impl fmt::Display for AnyLight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(light) => light.fmt(f),
            Self::Cct(light) => light.fmt(f),
            Self::Color(light) => light.fmt(f),
        }
    }
}

impl From<Light> for AnyLight {
    fn from(light: Light) -> Self {
        Self::Plain(light)
    }
}

impl From<CctLight> for AnyLight {
    fn from(light: CctLight) -> Self {
        Self::Cct(light)
    }
}

impl From<ColorLight> for AnyLight {
    fn from(light: ColorLight) -> Self {
        Self::Color(light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{LightEvent, LightEventKind};
    use crate::types::PackedColor;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn events_carry_the_concrete_source() {
        let mut light = AnyLight::from(CctLight::new());
        let cct_seen = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&cct_seen);
        light.on_event(move |event: &LightEvent<'_>| {
            if let Some(cct) = event.cct() {
                sink.store(usize::try_from(cct).unwrap_or(0), Ordering::SeqCst);
            }
        });

        light
            .as_cct_mut()
            .map(|cct| cct.set_cct(42, true))
            .expect("cct light");
        assert_eq!(cct_seen.load(Ordering::SeqCst), 42);
        assert_eq!(light.fire_event(LightEventKind::State), 1);
    }

    #[test]
    fn variant_accessors() {
        let light = AnyLight::from(ColorLight::new());
        assert_eq!(light.light_type(), LightType::Rgb);
        assert!(light.as_color().is_some());
        assert!(light.as_cct().is_none());
        assert_eq!(light.as_source().light_type(), LightType::Rgb);
    }

    #[test]
    fn display_delegates() {
        let light = AnyLight::default();
        assert!(light.to_string().starts_with("(type: Light)"));
    }

    #[test]
    fn record_roundtrip_preserves_parameters() {
        let mut original = ColorLight::new();
        original.set_light_id(9);
        original.set_parameters(false, 77, PackedColor::new(0x33_6699), false);

        let restored = AnyLight::from_record(&original.to_record()).unwrap();
        let restored = restored.as_color().expect("color light");
        assert_eq!(restored.light_id(), 9);
        assert!(restored.is_off());
        assert_eq!(restored.intensity(), 77);
        assert_eq!(restored.color(), PackedColor::new(0x33_6699));
    }

    #[test]
    fn record_roundtrip_keeps_intensity_outside_bounds() {
        let mut original = Light::new();
        original.set_range(0, 100);
        assert_eq!(original.intensity(), 255);

        let restored = AnyLight::from_record(&original.to_record()).unwrap();
        assert_eq!(restored.intensity(), 255);
        assert_eq!(restored.max_intensity(), 100);
        assert_eq!(restored.to_record(), original.to_record());
    }

    #[test]
    fn record_roundtrip_keeps_inverted_ranges() {
        let mut original = CctLight::new();
        original.set_range(200, 10);
        original.set_intensity(50, false);
        original.set_max_cct(20);

        let restored = AnyLight::from_record(&original.to_record()).unwrap();
        let restored = restored.as_cct().expect("cct light");
        assert_eq!(restored.intensity(), 255);
        assert_eq!(restored.min_intensity(), 200);
        assert_eq!(restored.cct(), 128);
        assert_eq!(restored.max_cct(), 20);
        assert_eq!(restored.to_record(), original.to_record());
    }
}
