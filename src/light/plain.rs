// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plain light with on/off state and intensity.

use std::fmt;

use crate::event::LightRef;
use crate::record::LightRecord;
use crate::types::LightType;

use super::{LightControl, LightCore};

/// A light with only an on/off state and a bounded intensity.
///
/// # Examples
///
/// ```
/// use lumen_lights::{Light, LightControl};
///
/// let mut light = Light::with_intensity(128);
/// light.set_light_id(3);
/// assert_eq!(
///     light.to_string(),
///     "(type: Light) [id:3] [on] [intensity: (0)-128(255)]"
/// );
/// ```
#[derive(Debug, Default)]
pub struct Light {
    core: LightCore,
}

impl Light {
    /// Creates a light that is on at full intensity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a light with the given intensity.
    ///
    /// An out-of-range intensity is ignored and the light stays at full
    /// intensity.
    #[must_use]
    pub fn with_intensity(intensity: i32) -> Self {
        let mut light = Self::new();
        light.set_intensity(intensity, false);
        light
    }

    /// Writes state and intensity and fires one `AllParameters` event.
    pub fn set_parameters(&mut self, on: bool, intensity: i32, fire_event: bool) {
        self.set_state_and_intensity(on, intensity, fire_event);
    }

    /// Returns the serializable record of this light.
    #[must_use]
    pub fn to_record(&self) -> LightRecord {
        LightRecord::from_core(LightType::Light, &self.core)
    }
}

impl LightControl for Light {
    fn core(&self) -> &LightCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut LightCore {
        &mut self.core
    }

    fn as_source(&self) -> LightRef<'_> {
        LightRef::Plain(self)
    }
}

impl fmt::Display for Light {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(type: Light) {}", self.core)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{LightEvent, LightEventKind};
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn recorder(light: &Light) -> Arc<Mutex<Vec<LightEventKind>>> {
        let kinds = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&kinds);
        light.on_event(move |event: &LightEvent<'_>| sink.lock().push(event.kind()));
        kinds
    }

    #[test]
    fn defaults() {
        let light = Light::new();
        assert!(light.is_on());
        assert!(!light.is_off());
        assert_eq!(light.intensity(), 255);
        assert_eq!(light.min_intensity(), 0);
        assert_eq!(light.max_intensity(), 255);
        assert_eq!(light.light_id(), 0);
        assert!(!light.uses_light_id());
    }

    #[test]
    fn with_intensity_ignores_out_of_range() {
        assert_eq!(Light::with_intensity(40).intensity(), 40);
        assert_eq!(Light::with_intensity(400).intensity(), 255);
    }

    #[test]
    fn set_intensity_rejections_are_silent() {
        let mut light = Light::new();
        let kinds = recorder(&light);

        assert!(!light.set_intensity(255, true));
        assert!(!light.set_intensity(-1, true));
        assert!(!light.set_intensity(256, true));
        assert!(kinds.lock().is_empty());
        assert_eq!(light.intensity(), 255);

        assert!(light.set_intensity(12, true));
        assert_eq!(*kinds.lock(), vec![LightEventKind::Intensity]);
    }

    #[test]
    fn set_intensity_without_event() {
        let mut light = Light::new();
        let kinds = recorder(&light);
        assert!(light.set_intensity(12, false));
        assert_eq!(light.intensity(), 12);
        assert!(kinds.lock().is_empty());
    }

    #[test]
    fn try_set_intensity_reports_range() {
        let mut light = Light::new();
        light.set_range(10, 20);
        let err = light.try_set_intensity(30, true).unwrap_err();
        assert_eq!(
            err,
            crate::error::ValueError::OutOfRange {
                min: 10,
                max: 20,
                actual: 30
            }
        );
        assert_eq!(light.try_set_intensity(15, true), Ok(true));
        assert_eq!(light.try_set_intensity(15, true), Ok(false));
    }

    #[test]
    fn set_range_does_not_reclamp() {
        let mut light = Light::new();
        light.set_range(0, 100);
        assert_eq!(light.intensity(), 255);
        assert_eq!(light.max_intensity(), 100);

        light.set_min_intensity(5);
        light.set_max_intensity(50);
        assert_eq!(light.min_intensity(), 5);
        assert_eq!(light.max_intensity(), 50);
    }

    #[test]
    fn set_state_always_fires() {
        let mut light = Light::new();
        let kinds = recorder(&light);

        assert!(light.set_state(true, true));
        assert!(!light.set_state(false, true));
        assert!(light.is_off());
        assert_eq!(
            *kinds.lock(),
            vec![LightEventKind::State, LightEventKind::State]
        );
    }

    #[test]
    fn turn_on_fires_once_at_max_intensity() {
        let mut light = Light::new();
        light.set_parameters(false, 10, false);
        let kinds = recorder(&light);

        light.turn_on(true);
        assert!(light.is_on());
        assert_eq!(light.intensity(), 255);
        assert_eq!(*kinds.lock(), vec![LightEventKind::TurnOn]);
    }

    #[test]
    fn turn_off_reports_state() {
        let mut light = Light::new();
        let kinds = recorder(&light);

        assert!(!light.turn_off(true));
        assert!(light.is_off());
        assert_eq!(*kinds.lock(), vec![LightEventKind::State]);

        light.turn_off(false);
        assert_eq!(kinds.lock().len(), 1);
    }

    #[test]
    fn set_parameters_fires_one_composite_event() {
        let mut light = Light::new();
        let kinds = recorder(&light);

        light.set_parameters(false, 99, true);
        assert!(light.is_off());
        assert_eq!(light.intensity(), 99);
        assert_eq!(*kinds.lock(), vec![LightEventKind::AllParameters]);
    }

    #[test]
    fn light_id_flags() {
        let mut light = Light::new();
        light.set_light_id(-3);
        assert_eq!(light.light_id(), 0);
        assert!(light.uses_light_id());

        light.disable_light_id();
        assert!(!light.uses_light_id());
        light.enable_light_id();
        assert!(light.uses_light_id());

        light.set_light_id(12);
        assert_eq!(light.light_id(), 12);
    }

    #[test]
    fn display_off() {
        let mut light = Light::new();
        light.turn_off(false);
        assert_eq!(
            light.to_string(),
            "(type: Light) [id:0] [off] [intensity: (0)-255(255)]"
        );
    }
}
