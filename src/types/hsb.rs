// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HSB color on a 0-255 scale and its conversions to and from RGB.
//!
//! All three components share the byte scale used by the RGB channels:
//! hue 0-255 covers the full color wheel, saturation and brightness 0-255
//! cover 0-100%.
//!
//! Both conversions truncate at every integer step. Converting RGB to HSB
//! and back is therefore lossy and may be off by a unit or two per channel.

use std::fmt;

/// HSB color with byte-scaled components.
///
/// Components are stored as given; nothing restricts them to 0-255.
///
/// # Examples
///
/// ```
/// use lumen_lights::types::HsbColor;
///
/// let red = HsbColor::from_rgb(255, 0, 0);
/// assert_eq!(red, HsbColor::new(0, 255, 255));
/// assert_eq!(red.to_rgb(), (255, 0, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct HsbColor {
    hue: i32,
    saturation: i32,
    brightness: i32,
}

impl HsbColor {
    /// Creates a new HSB color.
    #[must_use]
    pub const fn new(hue: i32, saturation: i32, brightness: i32) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }

    /// Returns the hue (0-255 spans the color wheel).
    #[must_use]
    pub const fn hue(&self) -> i32 {
        self.hue
    }

    /// Returns the saturation (0-255).
    #[must_use]
    pub const fn saturation(&self) -> i32 {
        self.saturation
    }

    /// Returns the brightness (0-255).
    #[must_use]
    pub const fn brightness(&self) -> i32 {
        self.brightness
    }

    /// Returns a copy with the hue replaced.
    #[must_use]
    pub const fn with_hue(self, hue: i32) -> Self {
        Self { hue, ..self }
    }

    /// Returns a copy with the saturation replaced.
    #[must_use]
    pub const fn with_saturation(self, saturation: i32) -> Self {
        Self { saturation, ..self }
    }

    /// Returns a copy with the brightness replaced.
    #[must_use]
    pub const fn with_brightness(self, brightness: i32) -> Self {
        Self { brightness, ..self }
    }

    /// Converts RGB channels to HSB.
    ///
    /// Brightness is the largest channel and saturation its relative
    /// spread; gray colors get hue 0.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::float_cmp,
        clippy::many_single_char_names
    )]
    pub fn from_rgb(red: i32, green: i32, blue: i32) -> Self {
        let r = red as f32 / 255.0;
        let g = green as f32 / 255.0;
        let b = blue as f32 / 255.0;

        let max = r.max(g.max(b));
        let min = r.min(g.min(b));
        let delta = max - min;

        let saturation = if max == 0.0 { 0.0 } else { delta / max };

        let hue = if max == min {
            0.0
        } else {
            let sector = if max == r {
                (g - b) / delta + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / delta + 2.0
            } else {
                (r - g) / delta + 4.0
            };
            sector / 6.0
        };

        Self {
            hue: (hue * 255.0) as i32,
            saturation: (saturation * 255.0) as i32,
            brightness: (max * 255.0) as i32,
        }
    }

    /// Converts this color to `(red, green, blue)` channels.
    ///
    /// The hue is spread over 0-359 degrees and split into six 60 degree
    /// phases; within a phase one channel sits at the brightness, one at the
    /// floor set by the saturation, and the third ramps between them. A hue
    /// outside 0-255 lands in no phase and yields white.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn to_rgb(&self) -> (i32, i32, i32) {
        let degrees = (359.0 * (self.hue as f32 / 255.0)) as i64;
        let phase = degrees / 60;
        let offset = degrees % 60;

        let top = i64::from(self.brightness);
        let bottom = ((255.0 - f64::from(self.saturation)) * (f64::from(self.brightness) / 255.0))
            as i64;
        let rising = (top - bottom) * offset / 60 + bottom;
        let falling = (top - bottom) * (60 - offset) / 60 + bottom;

        let (r, g, b) = match phase {
            0 => (top, rising, bottom),
            1 => (falling, top, bottom),
            2 => (bottom, top, rising),
            3 => (bottom, falling, top),
            4 => (rising, bottom, top),
            5 => (top, bottom, falling),
            _ => (255, 255, 255),
        };
        (r as i32, g as i32, b as i32)
    }
}

impl Default for HsbColor {
    /// Unsaturated full-brightness white.
    fn default() -> Self {
        Self::new(127, 0, 255)
    }
}

impl fmt::Display for HsbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "h:{} s:{} b:{}",
            self.hue, self.saturation, self.brightness
        )
    }
}
