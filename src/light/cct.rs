// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Correlated color temperature light.
//!
//! The low end of the CCT range is warm white, the high end cool white.

use std::fmt;

use crate::event::{LightEventKind, LightRef};
use crate::record::LightRecord;
use crate::types::{LightType, PackedColor, ParameterRange};

use super::{LightControl, LightCore};

/// Display color at the warm end of the range.
pub const WARM_WHITE: PackedColor = PackedColor::new(0xF9_E9B7);

/// Display color at the middle of the range.
pub const NEUTRAL_WHITE: PackedColor = PackedColor::new(0xF9_F9ED);

/// Display color at the cool end of the range.
pub const COOL_WHITE: PackedColor = PackedColor::new(0x96_C3E2);

/// A light with a color temperature between warm and cool white.
///
/// # Examples
///
/// ```
/// use lumen_lights::{CctLight, LightControl};
/// use lumen_lights::light::{COOL_WHITE, WARM_WHITE};
///
/// let mut light = CctLight::new();
/// light.set_cct(0, true);
/// assert_eq!(light.display_color(), WARM_WHITE);
///
/// light.set_cct(1000, true); // clamped
/// assert_eq!(light.cct(), 255);
/// assert_eq!(light.display_color(), COOL_WHITE);
/// ```
#[derive(Debug)]
pub struct CctLight {
    core: LightCore,
    cct: i32,
    cct_range: ParameterRange,
}

impl CctLight {
    /// Creates a light at full intensity with the CCT in the middle of `[0, 255]`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            core: LightCore::new(),
            cct: 128,
            cct_range: ParameterRange::BYTE,
        }
    }

    /// Creates a light with the given intensity and color temperature.
    ///
    /// An out-of-range intensity is ignored; the CCT is clamped.
    #[must_use]
    pub fn with_parameters(intensity: i32, cct: i32) -> Self {
        let mut light = Self::new();
        light.set_intensity(intensity, false);
        light.set_cct(cct, false);
        light
    }

    /// Returns the color temperature.
    #[must_use]
    pub const fn cct(&self) -> i32 {
        self.cct
    }

    /// Returns the color temperature bounds.
    #[must_use]
    pub const fn cct_range(&self) -> ParameterRange {
        self.cct_range
    }

    /// Returns the lower color temperature bound.
    #[must_use]
    pub const fn min_cct(&self) -> i32 {
        self.cct_range.min()
    }

    /// Returns the upper color temperature bound.
    #[must_use]
    pub const fn max_cct(&self) -> i32 {
        self.cct_range.max()
    }

    /// Writes the color temperature, clamped into the CCT range.
    ///
    /// Fires [`LightEventKind::Cct`] and returns `true` only if the clamped
    /// value differs from the current one.
    pub fn set_cct(&mut self, value: i32, fire_event: bool) -> bool {
        let clamped = self.cct_range.clamp(value);
        if clamped == self.cct {
            return false;
        }
        self.cct = clamped;
        if fire_event {
            self.fire_event(LightEventKind::Cct);
        }
        true
    }

    /// Overwrites the lower CCT bound without touching the current value.
    pub fn set_min_cct(&mut self, min: i32) {
        self.cct_range.set_min(min);
    }

    /// Overwrites the upper CCT bound without touching the current value.
    pub fn set_max_cct(&mut self, max: i32) {
        self.cct_range.set_max(max);
    }

    /// Replaces the CCT range, keeping the current value at the same
    /// relative position.
    ///
    /// The rescale is silent. If the old range has zero width the current
    /// value is only clamped into the new range.
    pub fn set_range_cct(&mut self, min: i32, max: i32) {
        let target = ParameterRange::new(min, max);
        let rescaled = self.cct_range.map_to(self.cct, &target).unwrap_or(self.cct);
        tracing::debug!(
            light_id = self.light_id(),
            from = %self.cct_range,
            to = %target,
            cct = self.cct,
            rescaled,
            "Rescaling color temperature range"
        );
        self.cct_range = target;
        self.cct = target.clamp(rescaled);
    }

    /// Overwrites the color temperature without clamping or firing.
    pub(crate) fn restore_cct(&mut self, value: i32) {
        self.cct = value;
    }

    /// Returns an RGB approximation of the current color temperature.
    ///
    /// Blends warm white into neutral white over the lower half of
    /// `[0, max_cct]` and neutral white into cool white over the upper half.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn display_color(&self) -> PackedColor {
        let max = self.cct_range.max();
        let half = max / 2;
        // A zero-width half divides to NaN or infinity, which lerp pins to an end.
        if self.cct <= half {
            let amount = self.cct as f32 / half as f32;
            WARM_WHITE.lerp(NEUTRAL_WHITE, amount)
        } else {
            let amount = (i64::from(self.cct) - i64::from(half)) as f32 / (max - half) as f32;
            NEUTRAL_WHITE.lerp(COOL_WHITE, amount)
        }
    }

    /// Writes state, intensity and color temperature together.
    ///
    /// Fires one [`LightEventKind::AllParametersCct`] instead of per-field events.
    pub fn set_parameters(&mut self, on: bool, intensity: i32, cct: i32, fire_event: bool) {
        self.set_state(on, false);
        self.set_intensity(intensity, false);
        self.set_cct(cct, false);
        if fire_event {
            self.fire_event(LightEventKind::AllParametersCct);
        }
    }

    /// Returns the serializable record of this light.
    #[must_use]
    pub fn to_record(&self) -> LightRecord {
        let mut record = LightRecord::from_core(LightType::Cct, &self.core);
        record.cct = Some(self.cct);
        record.min_cct = Some(self.cct_range.min());
        record.max_cct = Some(self.cct_range.max());
        record
    }
}

impl Default for CctLight {
    fn default() -> Self {
        Self::new()
    }
}

impl LightControl for CctLight {
    fn core(&self) -> &LightCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut LightCore {
        &mut self.core
    }

    fn as_source(&self) -> LightRef<'_> {
        LightRef::Cct(self)
    }
}

impl fmt::Display for CctLight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(type: CCTLight) {} [cct: ({})-{}({})]",
            self.core,
            self.cct_range.min(),
            self.cct,
            self.cct_range.max()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::LightEvent;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn recorder(light: &CctLight) -> Arc<Mutex<Vec<LightEventKind>>> {
        let kinds = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&kinds);
        light.on_event(move |event: &LightEvent<'_>| sink.lock().push(event.kind()));
        kinds
    }

    fn channel_distance(a: PackedColor, b: PackedColor) -> u8 {
        [
            a.red().abs_diff(b.red()),
            a.green().abs_diff(b.green()),
            a.blue().abs_diff(b.blue()),
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }

    #[test]
    fn defaults() {
        let light = CctLight::new();
        assert_eq!(light.cct(), 128);
        assert_eq!(light.min_cct(), 0);
        assert_eq!(light.max_cct(), 255);
        assert_eq!(light.intensity(), 255);
        assert!(light.is_on());
    }

    #[test]
    fn with_parameters_applies_both() {
        let light = CctLight::with_parameters(100, 30);
        assert_eq!(light.intensity(), 100);
        assert_eq!(light.cct(), 30);
    }

    #[test]
    fn set_cct_clamps_and_fires_on_change() {
        let mut light = CctLight::new();
        let kinds = recorder(&light);

        assert!(light.set_cct(300, true));
        assert_eq!(light.cct(), 255);
        assert!(!light.set_cct(999, true)); // clamps to the same value
        assert!(light.set_cct(-4, true));
        assert_eq!(light.cct(), 0);
        assert_eq!(*kinds.lock(), vec![LightEventKind::Cct, LightEventKind::Cct]);
    }

    #[test]
    fn display_color_anchors() {
        let mut light = CctLight::new();

        light.set_cct(0, false);
        assert_eq!(light.display_color(), WARM_WHITE);

        light.set_cct(255, false);
        assert_eq!(light.display_color(), COOL_WHITE);

        light.set_cct(127, false);
        assert_eq!(light.display_color(), NEUTRAL_WHITE);

        light.set_cct(128, false);
        assert!(channel_distance(light.display_color(), NEUTRAL_WHITE) <= 1);
    }

    #[test]
    fn display_color_is_monotonic_toward_cool() {
        let mut light = CctLight::new();
        light.set_cct(192, false);
        let color = light.display_color();
        assert!(color.red() < NEUTRAL_WHITE.red());
        assert!(color.red() > COOL_WHITE.red());
    }

    #[test]
    fn display_color_with_zero_max() {
        let mut light = CctLight::new();
        light.set_range_cct(0, 0);
        assert_eq!(light.cct(), 0);
        assert_eq!(light.display_color(), WARM_WHITE);
    }

    #[test]
    fn set_range_cct_rescales_silently() {
        let mut light = CctLight::new();
        let kinds = recorder(&light);

        light.set_range_cct(0, 255);
        light.set_cct(64, false);
        light.set_range_cct(0, 1000);

        assert!((250..=251).contains(&light.cct()), "cct = {}", light.cct());
        assert_eq!(light.min_cct(), 0);
        assert_eq!(light.max_cct(), 1000);
        assert!(kinds.lock().is_empty());
    }

    #[test]
    fn set_range_cct_keeps_relative_position_when_growing() {
        let mut light = CctLight::new();
        light.set_cct(200, false);
        light.set_range_cct(0, 1000);
        assert_eq!(light.cct(), 784);
    }

    #[test]
    fn set_range_cct_from_degenerate_range_clamps() {
        let mut light = CctLight::new();
        light.set_min_cct(128);
        light.set_max_cct(128);
        light.set_range_cct(0, 100);
        assert_eq!(light.cct(), 100);
    }

    #[test]
    fn set_parameters_fires_one_composite_event() {
        let mut light = CctLight::new();
        let kinds = recorder(&light);

        light.set_parameters(false, 50, 20, true);
        assert!(light.is_off());
        assert_eq!(light.intensity(), 50);
        assert_eq!(light.cct(), 20);
        assert_eq!(*kinds.lock(), vec![LightEventKind::AllParametersCct]);
    }

    #[test]
    fn display() {
        let light = CctLight::new();
        assert_eq!(
            light.to_string(),
            "(type: CCTLight) [id:0] [on] [intensity: (0)-255(255)] [cct: (0)-128(255)]"
        );
    }

    #[test]
    fn extreme_ranges_do_not_overflow() {
        let mut light = CctLight::new();
        light.set_range_cct(-2_000_000_000, 2_000_000_000);
        light.set_range_cct(0, 255);
        assert!((0..=255).contains(&light.cct()));

        light.set_range_cct(i32::MIN, i32::MAX);
        light.set_cct(i32::MAX, false);
        light.set_max_cct(-2_000_000_000);
        // Negative blend amount, pinned to the neutral end.
        assert_eq!(light.display_color(), NEUTRAL_WHITE);
    }
}
