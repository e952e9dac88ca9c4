// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-light listener registry.
//!
//! - [`SubscriptionId`] - Handle returned on registration, used to unsubscribe
//! - [`ListenerRegistry`] - Ordered listener list with serialized dispatch

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::{Mutex, ReentrantMutex};

use crate::event::LightEvent;

use super::LightListener;

/// Unique identifier for a registered listener.
///
/// IDs are unique within one registry. Registering the same listener twice
/// yields two IDs and two deliveries per event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    #[must_use]
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

type Entry = (SubscriptionId, Arc<dyn LightListener>);

/// Ordered set of listeners owned by one light.
///
/// Registration, removal and each full dispatch pass run under a per-registry
/// reentrant lock, so they never interleave across threads. Dispatch iterates
/// a snapshot of the list: a listener that registers or removes listeners on
/// the same light from inside its callback affects the next pass, not the
/// current one.
pub struct ListenerRegistry {
    next_id: AtomicU64,
    listeners: Mutex<Vec<Entry>>,
    pass: ReentrantMutex<()>,
}

impl ListenerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            listeners: Mutex::new(Vec::new()),
            pass: ReentrantMutex::new(()),
        }
    }

    fn next_id(&self) -> SubscriptionId {
        SubscriptionId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Appends a listener; it is notified after every listener added before it.
    pub fn add(&self, listener: Arc<dyn LightListener>) -> SubscriptionId {
        let _pass = self.pass.lock();
        let id = self.next_id();
        self.listeners.lock().push((id, listener));
        tracing::trace!(subscription = %id, "Registered light listener");
        id
    }

    /// Removes a listener by its subscription ID.
    ///
    /// Returns `true` if a listener was found and removed.
    pub fn remove(&self, id: SubscriptionId) -> bool {
        let _pass = self.pass.lock();
        let mut listeners = self.listeners.lock();
        let Some(position) = listeners.iter().position(|(entry, _)| *entry == id) else {
            return false;
        };
        listeners.remove(position);
        tracing::trace!(subscription = %id, "Removed light listener");
        true
    }

    /// Removes every listener.
    pub fn clear(&self) {
        let _pass = self.pass.lock();
        self.listeners.lock().clear();
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.lock().len()
    }

    /// Returns `true` if no listener is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Delivers `event` to every listener in registration order.
    ///
    /// Returns the number of listeners notified.
    pub fn dispatch(&self, event: &LightEvent<'_>) -> usize {
        let _pass = self.pass.lock();
        let snapshot: Vec<Arc<dyn LightListener>> = self
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        tracing::trace!(
            kind = %event.kind(),
            listeners = snapshot.len(),
            "Dispatching light event"
        );
        for listener in &snapshot {
            listener.light_event_received(event);
        }
        snapshot.len()
    }
}

impl Default for ListenerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listener_count", &self.len())
            .finish()
    }
}
