// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Listener protocol.

use crate::event::LightEvent;

/// Receives change notifications from lights.
///
/// Listeners run synchronously on the thread that mutated the light, while
/// that light's dispatch lock is held. A listener that blocks stalls the
/// mutator and every other thread registering on the same light, so keep
/// implementations short.
///
/// Any `Fn(&LightEvent)` closure that is `Send + Sync` is a listener.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use lumen_lights::{Light, LightControl, LightEvent, LightListener};
///
/// struct Counter(AtomicUsize);
///
/// impl LightListener for Counter {
///     fn light_event_received(&self, _event: &LightEvent<'_>) {
///         self.0.fetch_add(1, Ordering::SeqCst);
///     }
/// }
///
/// let counter = Arc::new(Counter(AtomicUsize::new(0)));
/// let mut light = Light::new();
/// light.add_listener(counter.clone());
/// light.turn_off(true);
/// assert_eq!(counter.0.load(Ordering::SeqCst), 1);
/// ```
pub trait LightListener: Send + Sync {
    /// Called once per event, in registration order.
    fn light_event_received(&self, event: &LightEvent<'_>);
}

impl<F> LightListener for F
where
    F: Fn(&LightEvent<'_>) + Send + Sync,
{
    fn light_event_received(&self, event: &LightEvent<'_>) {
        self(event);
    }
}
