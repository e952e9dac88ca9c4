// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operations shared by every light variant.

use std::sync::Arc;

use crate::error::ValueError;
use crate::event::{LightEvent, LightEventKind, LightRef};
use crate::subscription::{LightListener, SubscriptionId};
use crate::types::ParameterRange;

use super::LightCore;

/// Base light operations: identifier, on/off state, bounded intensity and
/// listener management.
///
/// Implementors only provide access to their [`LightCore`] and a
/// [`LightRef`] to themselves; every operation is a provided method.
///
/// Setters taking `fire_event` notify listeners only when it is `true`.
/// Compound operations such as [`turn_on`](Self::turn_on) fire a single
/// event for the whole change.
///
/// # Examples
///
/// ```
/// use lumen_lights::{Light, LightControl};
///
/// let mut light = Light::new();
/// assert!(light.set_intensity(100, true));
/// assert!(!light.set_intensity(300, true)); // out of range, ignored
/// assert_eq!(light.intensity(), 100);
///
/// light.turn_on(true);
/// assert_eq!(light.intensity(), light.max_intensity());
/// ```
pub trait LightControl {
    /// Returns the shared base record.
    fn core(&self) -> &LightCore;

    /// Returns the shared base record mutably.
    fn core_mut(&mut self) -> &mut LightCore;

    /// Returns a reference to this light for use as an event source.
    fn as_source(&self) -> LightRef<'_>;

    /// Returns the light identifier.
    fn light_id(&self) -> i32 {
        self.core().light_id()
    }

    /// Sets the identifier, clamped to be non-negative, and enables its use.
    fn set_light_id(&mut self, light_id: i32) {
        self.core_mut().set_light_id(light_id);
    }

    /// Returns `true` if the identifier is in use.
    fn uses_light_id(&self) -> bool {
        self.core().uses_light_id()
    }

    /// Marks the identifier as in use.
    fn enable_light_id(&mut self) {
        self.core_mut().set_uses_light_id(true);
    }

    /// Marks the identifier as unused.
    fn disable_light_id(&mut self) {
        self.core_mut().set_uses_light_id(false);
    }

    /// Returns the on/off state.
    fn state(&self) -> bool {
        self.core().is_on()
    }

    /// Returns `true` if the light is on.
    fn is_on(&self) -> bool {
        self.core().is_on()
    }

    /// Returns `true` if the light is off.
    fn is_off(&self) -> bool {
        !self.core().is_on()
    }

    /// Overwrites the on/off state and returns it.
    ///
    /// Fires [`LightEventKind::State`] even when the state did not change.
    fn set_state(&mut self, on: bool, fire_event: bool) -> bool {
        self.core_mut().set_on(on);
        if fire_event {
            self.fire_event(LightEventKind::State);
        }
        on
    }

    /// Switches the light on at maximum intensity.
    ///
    /// Fires one [`LightEventKind::TurnOn`] for both changes.
    fn turn_on(&mut self, fire_event: bool) {
        let max = self.max_intensity();
        // Already at max or an inverted range: nothing to write.
        let _ = self.core_mut().write_intensity(max);
        self.core_mut().set_on(true);
        if fire_event {
            self.fire_event(LightEventKind::TurnOn);
        }
    }

    /// Switches the light off and returns the new state.
    ///
    /// Reports [`LightEventKind::State`]; `TurnOff` is never emitted.
    fn turn_off(&mut self, fire_event: bool) -> bool {
        self.set_state(false, fire_event)
    }

    /// Returns the current intensity.
    fn intensity(&self) -> i32 {
        self.core().intensity()
    }

    /// Returns the intensity bounds.
    fn intensity_range(&self) -> ParameterRange {
        self.core().intensity_range()
    }

    /// Returns the lower intensity bound.
    fn min_intensity(&self) -> i32 {
        self.core().intensity_range().min()
    }

    /// Returns the upper intensity bound.
    fn max_intensity(&self) -> i32 {
        self.core().intensity_range().max()
    }

    /// Overwrites the lower intensity bound without reclamping.
    fn set_min_intensity(&mut self, min: i32) {
        self.core_mut().intensity_range_mut().set_min(min);
    }

    /// Overwrites the upper intensity bound without reclamping.
    fn set_max_intensity(&mut self, max: i32) {
        self.core_mut().intensity_range_mut().set_max(max);
    }

    /// Overwrites both intensity bounds.
    ///
    /// Neither `min <= max` nor the current intensity is checked against the
    /// new bounds.
    fn set_range(&mut self, min: i32, max: i32) {
        tracing::debug!(light_id = self.light_id(), min, max, "Setting intensity range");
        *self.core_mut().intensity_range_mut() = ParameterRange::new(min, max);
    }

    /// Writes the intensity, reporting why a write was refused.
    ///
    /// Returns `Ok(true)` when the intensity changed and `Ok(false)` when it
    /// already had this value. Fires [`LightEventKind::Intensity`] only on
    /// change.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if `value` lies outside the intensity
    /// range. The light is left untouched.
    fn try_set_intensity(&mut self, value: i32, fire_event: bool) -> Result<bool, ValueError> {
        let changed = self.core_mut().write_intensity(value)?;
        if changed && fire_event {
            self.fire_event(LightEventKind::Intensity);
        }
        Ok(changed)
    }

    /// Writes the intensity if it is in range and differs from the current
    /// value. Returns `true` on change.
    fn set_intensity(&mut self, value: i32, fire_event: bool) -> bool {
        match self.try_set_intensity(value, fire_event) {
            Ok(changed) => changed,
            Err(error) => {
                tracing::debug!(
                    light_id = self.light_id(),
                    error = %error,
                    "Rejected intensity write"
                );
                false
            }
        }
    }

    /// Writes state and intensity together.
    ///
    /// Fires one [`LightEventKind::AllParameters`] instead of per-field events.
    fn set_state_and_intensity(&mut self, on: bool, intensity: i32, fire_event: bool) {
        self.set_state(on, false);
        self.set_intensity(intensity, false);
        if fire_event {
            self.fire_event(LightEventKind::AllParameters);
        }
    }

    /// Registers a listener. Listeners are notified in registration order.
    fn add_listener(&self, listener: Arc<dyn LightListener>) -> SubscriptionId {
        self.core().listeners().add(listener)
    }

    /// Registers a closure as a listener.
    fn on_event<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&LightEvent<'_>) + Send + Sync + 'static,
        Self: Sized,
    {
        self.add_listener(Arc::new(callback))
    }

    /// Unregisters a listener. Returns `true` if it was registered.
    fn remove_listener(&self, id: SubscriptionId) -> bool {
        self.core().listeners().remove(id)
    }

    /// Unregisters every listener.
    fn clear_listeners(&self) {
        self.core().listeners().clear();
    }

    /// Returns the number of registered listeners.
    fn listener_count(&self) -> usize {
        self.core().listeners().len()
    }

    /// Notifies every listener that `kind` changed on this light.
    ///
    /// Returns the number of listeners notified.
    fn fire_event(&self, kind: LightEventKind) -> usize {
        let event = LightEvent::new(self.as_source(), kind);
        self.core().listeners().dispatch(&event)
    }
}
