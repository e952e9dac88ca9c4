// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types shared by the light models.
//!
//! # Types
//!
//! - [`ParameterRange`] - Inclusive integer bounds for intensity and CCT
//! - [`PackedColor`] - 24-bit `0xRRGGBB` color
//! - [`HsbColor`] - Hue, saturation and brightness on a 0-255 scale
//! - [`LightType`] - Variant tag used in serialized records

mod hsb;
mod light_type;
mod packed_color;
mod range;

pub use hsb::HsbColor;
pub use light_type::LightType;
pub use packed_color::PackedColor;
pub use range::ParameterRange;
