// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB/HSB color light.
//!
//! A [`ColorLight`] keeps two views of one color: RGB channels and an HSB
//! triple, both on a 0-255 scale. Writing any RGB channel recomputes the
//! HSB triple from the full RGB triple, and writing any HSB component
//! recomputes the RGB channels. Both conversions truncate, so a value
//! written through one view may read back slightly off through the other.
//!
//! Listeners always observe both views already synchronized.

use std::fmt;

use crate::event::{LightEventKind, LightRef};
use crate::record::LightRecord;
use crate::types::{HsbColor, LightType, PackedColor};

use super::{LightControl, LightCore};

/// A light with a color settable through RGB or HSB.
///
/// Channel and component values are stored as given, without range checks.
///
/// # Examples
///
/// ```
/// use lumen_lights::{ColorLight, LightControl};
/// use lumen_lights::types::PackedColor;
///
/// let mut light = ColorLight::new();
/// light.set_color(PackedColor::new(0xFF0000), true);
/// assert_eq!((light.hue(), light.saturation(), light.brightness()), (0, 255, 255));
///
/// light.set_hue(85, true);
/// assert_eq!(light.green(), 255);
/// ```
#[derive(Debug)]
pub struct ColorLight {
    core: LightCore,
    red: i32,
    green: i32,
    blue: i32,
    hsb: HsbColor,
}

impl ColorLight {
    /// Creates a white light at full intensity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            core: LightCore::new(),
            red: 255,
            green: 255,
            blue: 255,
            hsb: HsbColor::default(),
        }
    }

    /// Creates a light with the given intensity and RGB channels.
    #[must_use]
    pub fn with_rgb(intensity: i32, red: i32, green: i32, blue: i32) -> Self {
        let mut light = Self::new();
        light.set_intensity(intensity, false);
        light.write_rgb(red, green, blue);
        light
    }

    /// Creates a light with the given intensity and HSB components.
    #[must_use]
    pub fn with_hsb(intensity: i32, hue: i32, saturation: i32, brightness: i32) -> Self {
        let mut light = Self::new();
        light.set_intensity(intensity, false);
        light.write_hsb(HsbColor::new(hue, saturation, brightness));
        light
    }

    /// Creates a light with the given intensity and packed color.
    #[must_use]
    pub fn with_color(intensity: i32, color: PackedColor) -> Self {
        let mut light = Self::new();
        light.set_intensity(intensity, false);
        light.set_color(color, false);
        light
    }

    /// Returns the red channel.
    #[must_use]
    pub const fn red(&self) -> i32 {
        self.red
    }

    /// Returns the green channel.
    #[must_use]
    pub const fn green(&self) -> i32 {
        self.green
    }

    /// Returns the blue channel.
    #[must_use]
    pub const fn blue(&self) -> i32 {
        self.blue
    }

    /// Returns the HSB view of the color.
    #[must_use]
    pub const fn hsb(&self) -> HsbColor {
        self.hsb
    }

    /// Returns the hue.
    #[must_use]
    pub const fn hue(&self) -> i32 {
        self.hsb.hue()
    }

    /// Returns the saturation.
    #[must_use]
    pub const fn saturation(&self) -> i32 {
        self.hsb.saturation()
    }

    /// Returns the brightness.
    #[must_use]
    pub const fn brightness(&self) -> i32 {
        self.hsb.brightness()
    }

    /// Returns the RGB channels packed as `0xRRGGBB`.
    #[must_use]
    pub const fn color(&self) -> PackedColor {
        PackedColor::from_channels(self.red, self.green, self.blue)
    }

    /// Writes the red channel and returns the new packed color.
    pub fn set_red(&mut self, red: i32, fire_event: bool) -> PackedColor {
        self.write_rgb(red, self.green, self.blue);
        self.announce(LightEventKind::Red, fire_event)
    }

    /// Writes the green channel and returns the new packed color.
    pub fn set_green(&mut self, green: i32, fire_event: bool) -> PackedColor {
        self.write_rgb(self.red, green, self.blue);
        self.announce(LightEventKind::Green, fire_event)
    }

    /// Writes the blue channel and returns the new packed color.
    pub fn set_blue(&mut self, blue: i32, fire_event: bool) -> PackedColor {
        self.write_rgb(self.red, self.green, blue);
        self.announce(LightEventKind::Blue, fire_event)
    }

    /// Writes the hue and returns the new packed color.
    pub fn set_hue(&mut self, hue: i32, fire_event: bool) -> PackedColor {
        self.write_hsb(self.hsb.with_hue(hue));
        self.announce(LightEventKind::Hue, fire_event)
    }

    /// Writes the saturation and returns the new packed color.
    pub fn set_saturation(&mut self, saturation: i32, fire_event: bool) -> PackedColor {
        self.write_hsb(self.hsb.with_saturation(saturation));
        self.announce(LightEventKind::Saturation, fire_event)
    }

    /// Writes the brightness and returns the new packed color.
    pub fn set_brightness(&mut self, brightness: i32, fire_event: bool) -> PackedColor {
        self.write_hsb(self.hsb.with_brightness(brightness));
        self.announce(LightEventKind::Brightness, fire_event)
    }

    /// Replaces the whole color.
    ///
    /// Fires a single [`LightEventKind::Color`] and returns `true` only if
    /// the packed color changed.
    ///
    /// The comparison is against [`color`](Self::color), which keeps only the
    /// low 8 bits of each channel. A light holding an out-of-range channel
    /// (for example red 300 written through [`set_red`](Self::set_red))
    /// therefore compares equal to the masked color, and writing that color
    /// returns `false` without normalizing the stored channel.
    pub fn set_color(&mut self, color: PackedColor, fire_event: bool) -> bool {
        if color == self.color() {
            return false;
        }
        self.write_rgb(
            i32::from(color.red()),
            i32::from(color.green()),
            i32::from(color.blue()),
        );
        if fire_event {
            self.fire_event(LightEventKind::Color);
        }
        true
    }

    /// Writes state, intensity and color together.
    ///
    /// Fires one [`LightEventKind::AllParametersRgb`] instead of per-field events.
    pub fn set_parameters(
        &mut self,
        on: bool,
        intensity: i32,
        color: PackedColor,
        fire_event: bool,
    ) {
        self.set_state(on, false);
        self.set_intensity(intensity, false);
        self.set_color(color, false);
        if fire_event {
            self.fire_event(LightEventKind::AllParametersRgb);
        }
    }

    /// Returns the serializable record of this light.
    #[must_use]
    pub fn to_record(&self) -> LightRecord {
        let mut record = LightRecord::from_core(LightType::Rgb, &self.core);
        record.color = Some(self.color());
        record
    }

    pub(crate) fn write_rgb(&mut self, red: i32, green: i32, blue: i32) {
        self.red = red;
        self.green = green;
        self.blue = blue;
        self.hsb = HsbColor::from_rgb(red, green, blue);
    }

    pub(crate) fn write_hsb(&mut self, hsb: HsbColor) {
        self.hsb = hsb;
        (self.red, self.green, self.blue) = hsb.to_rgb();
    }

    fn announce(&self, kind: LightEventKind, fire_event: bool) -> PackedColor {
        if fire_event {
            self.fire_event(kind);
        }
        self.color()
    }
}

impl Default for ColorLight {
    fn default() -> Self {
        Self::new()
    }
}

impl LightControl for ColorLight {
    fn core(&self) -> &LightCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut LightCore {
        &mut self.core
    }

    fn as_source(&self) -> LightRef<'_> {
        LightRef::Color(self)
    }
}

impl fmt::Display for ColorLight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(type: ColorLight) {} [r:{} g:{} b:{}] [{}]",
            self.core, self.red, self.green, self.blue, self.hsb
        )
    }
}
