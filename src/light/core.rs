// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Base record shared by every light variant.

use std::fmt;

use crate::error::ValueError;
use crate::subscription::ListenerRegistry;
use crate::types::ParameterRange;

/// State common to all lights: identifier, on/off, bounded intensity and
/// the listener registry.
///
/// Writes go through [`LightControl`](super::LightControl), which adds
/// event dispatch on top of the raw field updates here.
#[derive(Debug)]
pub struct LightCore {
    light_id: i32,
    uses_light_id: bool,
    on: bool,
    intensity: i32,
    intensity_range: ParameterRange,
    listeners: ListenerRegistry,
}

impl LightCore {
    /// Creates a core that is on, at full intensity in `[0, 255]`, with id 0.
    #[must_use]
    pub fn new() -> Self {
        let intensity_range = ParameterRange::BYTE;
        Self {
            light_id: 0,
            uses_light_id: false,
            on: true,
            intensity: intensity_range.max(),
            intensity_range,
            listeners: ListenerRegistry::new(),
        }
    }

    /// Returns the light identifier.
    #[must_use]
    pub const fn light_id(&self) -> i32 {
        self.light_id
    }

    /// Returns `true` once an identifier has been assigned or enabled.
    #[must_use]
    pub const fn uses_light_id(&self) -> bool {
        self.uses_light_id
    }

    /// Returns `true` if the light is on.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.on
    }

    /// Returns the current intensity.
    #[must_use]
    pub const fn intensity(&self) -> i32 {
        self.intensity
    }

    /// Returns the intensity bounds.
    #[must_use]
    pub const fn intensity_range(&self) -> ParameterRange {
        self.intensity_range
    }

    /// Returns the listener registry.
    #[must_use]
    pub const fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    pub(crate) fn set_light_id(&mut self, light_id: i32) {
        self.light_id = light_id.max(0);
        self.uses_light_id = true;
    }

    pub(crate) fn set_uses_light_id(&mut self, uses: bool) {
        self.uses_light_id = uses;
    }

    pub(crate) fn set_on(&mut self, on: bool) {
        self.on = on;
    }

    pub(crate) fn intensity_range_mut(&mut self) -> &mut ParameterRange {
        &mut self.intensity_range
    }

    /// Overwrites the intensity without consulting the range.
    pub(crate) fn restore_intensity(&mut self, value: i32) {
        self.intensity = value;
    }

    /// Writes the intensity if it lies within the range and differs from
    /// the current value. Returns whether the value changed.
    pub(crate) fn write_intensity(&mut self, value: i32) -> Result<bool, ValueError> {
        let value = self.intensity_range.check(value)?;
        if value == self.intensity {
            return Ok(false);
        }
        self.intensity = self.intensity_range.clamp(value);
        Ok(true)
    }
}

impl Default for LightCore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LightCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[id:{}] [{}] [intensity: ({})-{}({})]",
            self.light_id,
            if self.on { "on" } else { "off" },
            self.intensity_range.min(),
            self.intensity,
            self.intensity_range.max()
        )
    }
}
