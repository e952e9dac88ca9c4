// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event payload delivered to listeners.

use crate::light::{CctLight, ColorLight, Light, LightControl, LightCore};
use crate::types::{LightType, PackedColor};

use super::LightEventKind;

/// Borrowed reference to the light that fired an event.
///
/// The borrow ties the reference to the dispatch call, so an event can
/// never outlive the light it describes.
#[derive(Debug, Clone, Copy)]
pub enum LightRef<'a> {
    /// A plain light.
    Plain(&'a Light),
    /// A color temperature light.
    Cct(&'a CctLight),
    /// An RGB/HSB color light.
    Color(&'a ColorLight),
}

impl<'a> LightRef<'a> {
    /// Returns the shared base record of the referenced light.
    #[must_use]
    pub fn core(&self) -> &'a LightCore {
        match *self {
            Self::Plain(light) => light.core(),
            Self::Cct(light) => light.core(),
            Self::Color(light) => light.core(),
        }
    }

    /// Returns the variant tag of the referenced light.
    #[must_use]
    pub const fn light_type(&self) -> LightType {
        match self {
            Self::Plain(_) => LightType::Light,
            Self::Cct(_) => LightType::Cct,
            Self::Color(_) => LightType::Rgb,
        }
    }

    /// Returns the light as a CCT light, if it is one.
    #[must_use]
    pub const fn as_cct(&self) -> Option<&'a CctLight> {
        match *self {
            Self::Cct(light) => Some(light),
            _ => None,
        }
    }

    /// Returns the light as a color light, if it is one.
    #[must_use]
    pub const fn as_color(&self) -> Option<&'a ColorLight> {
        match *self {
            Self::Color(light) => Some(light),
            _ => None,
        }
    }
}

/// Notification that a parameter of a light changed.
///
/// Events are created fresh for each dispatch pass and dropped once every
/// listener has seen them. Query the source for the new values.
///
/// # Examples
///
/// ```
/// use lumen_lights::{Light, LightControl, LightEventKind};
///
/// let mut light = Light::new();
/// light.on_event(|event| {
///     assert_eq!(event.kind(), LightEventKind::Intensity);
///     assert_eq!(event.intensity(), 42);
/// });
/// assert!(light.set_intensity(42, true));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LightEvent<'a> {
    source: LightRef<'a>,
    kind: LightEventKind,
}

impl<'a> LightEvent<'a> {
    /// Creates an event for `source`.
    #[must_use]
    pub const fn new(source: LightRef<'a>, kind: LightEventKind) -> Self {
        Self { source, kind }
    }

    /// Returns the light that fired this event.
    #[must_use]
    pub const fn source(&self) -> LightRef<'a> {
        self.source
    }

    /// Returns what changed.
    #[must_use]
    pub const fn kind(&self) -> LightEventKind {
        self.kind
    }

    /// Returns the on/off state of the source.
    #[must_use]
    pub fn state(&self) -> bool {
        self.source.core().is_on()
    }

    /// Returns the identifier of the source.
    #[must_use]
    pub fn light_id(&self) -> i32 {
        self.source.core().light_id()
    }

    /// Returns the intensity of the source.
    #[must_use]
    pub fn intensity(&self) -> i32 {
        self.source.core().intensity()
    }

    /// Returns the color temperature when the source is a CCT light.
    #[must_use]
    pub fn cct(&self) -> Option<i32> {
        self.source.as_cct().map(CctLight::cct)
    }

    /// Returns the packed color when the source is a color light.
    #[must_use]
    pub fn color(&self) -> Option<PackedColor> {
        self.source.as_color().map(ColorLight::color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_read_through_to_source() {
        let mut light = CctLight::new();
        light.set_light_id(7);
        light.set_cct(200, false);

        let event = LightEvent::new(LightRef::Cct(&light), LightEventKind::Cct);
        assert_eq!(event.kind(), LightEventKind::Cct);
        assert_eq!(event.light_id(), 7);
        assert!(event.state());
        assert_eq!(event.intensity(), 255);
        assert_eq!(event.cct(), Some(200));
        assert_eq!(event.color(), None);
        assert_eq!(event.source().light_type(), LightType::Cct);
    }

    #[test]
    fn color_available_only_for_color_lights() {
        let light = ColorLight::with_color(100, PackedColor::new(0x12_3456));
        let event = LightEvent::new(LightRef::Color(&light), LightEventKind::Color);
        assert_eq!(event.color(), Some(PackedColor::new(0x12_3456)));
        assert_eq!(event.cct(), None);

        let plain = Light::new();
        let event = LightEvent::new(LightRef::Plain(&plain), LightEventKind::State);
        assert_eq!(event.color(), None);
        assert!(event.source().as_color().is_none());
    }
}
