// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lumen Lights - In-memory light models with change notification.
//!
//! This library models controllable lights as plain values that notify
//! registered listeners whenever one of their parameters changes. It is meant
//! to sit between a user interface and a device driver: the UI mutates a
//! light, and every interested party hears about it synchronously.
//!
//! # Supported Features
//!
//! - **Plain lights**: On/off state and an intensity with adjustable bounds
//! - **CCT lights**: Color temperature between warm and cool white, with an
//!   RGB display approximation
//! - **Color lights**: Color kept in sync between RGB and HSB (0-255 scale)
//! - **Listeners**: Per-light registration with typed event kinds
//! - **Serialization**: `Light` records as XML elements or JSON
//!
//! # Quick Start
//!
//! ```
//! use lumen_lights::{Light, LightControl, LightEventKind};
//!
//! let mut light = Light::new();
//! light.on_event(|event| {
//!     println!("{} changed, intensity is now {}", event.kind(), event.intensity());
//! });
//!
//! light.set_intensity(80, true); // one INTENSITY event
//! light.turn_on(true); // one TURN_ON event, intensity back at max
//! assert_eq!(light.intensity(), 255);
//! ```
//!
//! ## Listener Objects
//!
//! Anything implementing [`LightListener`] can be registered, not only
//! closures:
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicI32, Ordering};
//! use lumen_lights::{CctLight, LightControl, LightEvent, LightListener};
//!
//! #[derive(Default)]
//! struct LastCct(AtomicI32);
//!
//! impl LightListener for LastCct {
//!     fn light_event_received(&self, event: &LightEvent<'_>) {
//!         if let Some(cct) = event.cct() {
//!             self.0.store(cct, Ordering::SeqCst);
//!         }
//!     }
//! }
//!
//! let mut light = CctLight::new();
//! let last = Arc::new(LastCct::default());
//! let id = light.add_listener(last.clone());
//!
//! light.set_cct(30, true);
//! assert_eq!(last.0.load(Ordering::SeqCst), 30);
//!
//! light.remove_listener(id);
//! light.set_cct(60, true);
//! assert_eq!(last.0.load(Ordering::SeqCst), 30);
//! ```
//!
//! ## Color Lights
//!
//! ```
//! use lumen_lights::{ColorLight, LightControl};
//! use lumen_lights::types::PackedColor;
//!
//! let mut light = ColorLight::new();
//! light.set_color(PackedColor::new(0xFF0000), true);
//! assert_eq!((light.hue(), light.saturation(), light.brightness()), (0, 255, 255));
//!
//! light.set_brightness(0, true);
//! assert_eq!(light.color(), PackedColor::BLACK);
//! ```
//!
//! # Threading
//!
//! Lights are `Send` and `Sync`. Registration, removal and each dispatch
//! pass on one light never interleave across threads. Listeners run on the
//! thread that changed the light and must not block.

pub mod config;
pub mod error;
pub mod event;
pub mod light;
pub mod record;
pub mod subscription;
pub mod types;

pub use config::{ColorSetting, LightConfig};
pub use error::{Error, ParseError, Result, ValueError};
pub use event::{LightEvent, LightEventKind, LightRef};
pub use light::{AnyLight, CctLight, ColorLight, Light, LightControl, LightCore};
pub use record::LightRecord;
pub use subscription::{LightListener, ListenerRegistry, SubscriptionId};
pub use types::{HsbColor, LightType, PackedColor, ParameterRange};
