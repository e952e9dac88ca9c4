// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! 24-bit packed RGB color.
//!
//! Lights expose their color as a single integer laid out as
//! `(red << 16) | (green << 8) | blue`. [`PackedColor`] wraps that integer
//! and provides channel access, hex formatting and linear blending.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// RGB color packed into the low 24 bits of a `u32`.
///
/// # Examples
///
/// ```
/// use lumen_lights::types::PackedColor;
///
/// let orange = PackedColor::from_rgb(255, 128, 0);
/// assert_eq!(orange.value(), 0xFF8000);
/// assert_eq!(orange.green(), 128);
///
/// let parsed: PackedColor = "#FF8000".parse().unwrap();
/// assert_eq!(parsed, orange);
/// assert_eq!(orange.to_string(), "#FF8000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct PackedColor(u32);

impl PackedColor {
    /// Black (`0x000000`).
    pub const BLACK: Self = Self(0x00_0000);

    /// White (`0xFFFFFF`).
    pub const WHITE: Self = Self(0xFF_FFFF);

    /// Creates a packed color, discarding any bits above the low 24.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value & 0xFF_FFFF)
    }

    /// Creates a packed color from 8-bit channels.
    #[must_use]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self(((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    /// Packs unvalidated integer channels.
    ///
    /// Each channel keeps only its low 8 bits, so an out-of-range channel
    /// never bleeds into its neighbours.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub const fn from_channels(red: i32, green: i32, blue: i32) -> Self {
        let r = (red & 0xFF) as u32;
        let g = (green & 0xFF) as u32;
        let b = (blue & 0xFF) as u32;
        Self((r << 16) | (g << 8) | b)
    }

    /// Returns the packed integer value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Returns the red channel.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn red(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Returns the green channel.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn green(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Returns the blue channel.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn blue(&self) -> u8 {
        self.0 as u8
    }

    /// Blends each channel linearly from `self` toward `other`.
    ///
    /// `amount` is clamped to `[0.0, 1.0]`; intermediate channels are
    /// truncated, not rounded.
    ///
    /// # Examples
    ///
    /// ```
    /// use lumen_lights::types::PackedColor;
    ///
    /// let mid = PackedColor::BLACK.lerp(PackedColor::WHITE, 0.5);
    /// assert_eq!(mid, PackedColor::from_rgb(127, 127, 127));
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn lerp(self, other: Self, amount: f32) -> Self {
        let amount = if amount.is_nan() {
            0.0
        } else {
            amount.clamp(0.0, 1.0)
        };
        let blend = |from: u8, to: u8| -> u8 {
            let from = f32::from(from);
            (from + (f32::from(to) - from) * amount) as u8
        };
        Self::from_rgb(
            blend(self.red(), other.red()),
            blend(self.green(), other.green()),
            blend(self.blue(), other.blue()),
        )
    }

    /// Parses a hex string in `#RRGGBB` or `RRGGBB` form.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidHexColor` if the string is not six hex digits.
    pub fn from_hex(hex: &str) -> Result<Self, ValueError> {
        let digits = hex.trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ValueError::InvalidHexColor(hex.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| ValueError::InvalidHexColor(hex.to_string()))
    }

    /// Returns the color as an upper-case hex string without a hash prefix.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("{:06X}", self.0)
    }
}

impl fmt::Display for PackedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

impl FromStr for PackedColor {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<u32> for PackedColor {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<PackedColor> for u32 {
    fn from(color: PackedColor) -> Self {
        color.0
    }
}

impl From<(u8, u8, u8)> for PackedColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::from_rgb(red, green, blue)
    }
}
