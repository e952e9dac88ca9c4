// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light models.
//!
//! Every light embeds a [`LightCore`] (identifier, on/off state, bounded
//! intensity, listeners) and gets the base operations from
//! [`LightControl`]. The variants add their own parameters:
//!
//! - [`Light`] - State and intensity only
//! - [`CctLight`] - Adds a color temperature between warm and cool white
//! - [`ColorLight`] - Adds a color kept in sync between RGB and HSB
//! - [`AnyLight`] - Any of the above

mod any;
mod cct;
mod color;
mod control;
mod core;
mod plain;

pub use any::AnyLight;
pub use cct::{COOL_WHITE, CctLight, NEUTRAL_WHITE, WARM_WHITE};
pub use color::ColorLight;
pub use control::LightControl;
pub use core::LightCore;
pub use plain::Light;
