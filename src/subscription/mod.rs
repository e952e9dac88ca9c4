// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Listener registration and synchronous event delivery.
//!
//! - [`LightListener`] - The capability of receiving light events
//! - [`ListenerRegistry`] - Per-light ordered listener list
//! - [`SubscriptionId`] - Handle used to unsubscribe
//!
//! Each light owns one registry. Lights never share a lock, so dispatch on
//! one light does not wait for another.

mod listener;
mod registry;

pub use listener::LightListener;
pub use registry::{ListenerRegistry, SubscriptionId};
