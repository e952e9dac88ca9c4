// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Change notifications fired by lights.
//!
//! A [`LightEvent`] pairs a [`LightEventKind`] with a borrowed
//! [`LightRef`] to the light that changed. Listeners read the new values
//! through the event or its source while the dispatch call is running.

mod kind;
mod light_event;

pub use kind::LightEventKind;
pub use light_event::{LightEvent, LightRef};
