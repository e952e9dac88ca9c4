// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event kind taxonomy.

use std::fmt;

/// What changed on a light.
///
/// Every kind carries a stable numeric code so listeners written against
/// integer tags can keep matching on them.
///
/// Some kinds are reserved: [`TurnOff`](Self::TurnOff),
/// [`MinIntensity`](Self::MinIntensity), [`MaxIntensity`](Self::MaxIntensity),
/// [`MinCct`](Self::MinCct), [`MaxCct`](Self::MaxCct) and
/// [`AllParametersHsb`](Self::AllParametersHsb) are never emitted by any
/// light operation. `turn_off` reports [`State`](Self::State) and range
/// setters are silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LightEventKind {
    /// The on/off state was written.
    State,
    /// The light was turned on at full intensity.
    TurnOn,
    /// Reserved.
    TurnOff,
    /// The intensity changed.
    Intensity,
    /// Reserved.
    MinIntensity,
    /// Reserved.
    MaxIntensity,
    /// The color temperature changed.
    Cct,
    /// Reserved.
    MinCct,
    /// Reserved.
    MaxCct,
    /// The packed color changed as a whole.
    Color,
    /// The red channel was written.
    Red,
    /// The green channel was written.
    Green,
    /// The blue channel was written.
    Blue,
    /// The hue was written.
    Hue,
    /// The saturation was written.
    Saturation,
    /// The brightness was written.
    Brightness,
    /// State and intensity were written together.
    AllParameters,
    /// State, intensity and color temperature were written together.
    AllParametersCct,
    /// State, intensity and color were written together.
    AllParametersRgb,
    /// Reserved.
    AllParametersHsb,
}

impl LightEventKind {
    /// All kinds, in code order.
    pub const ALL: [Self; 20] = [
        Self::State,
        Self::TurnOn,
        Self::TurnOff,
        Self::Intensity,
        Self::MinIntensity,
        Self::MaxIntensity,
        Self::Cct,
        Self::MinCct,
        Self::MaxCct,
        Self::Color,
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Hue,
        Self::Saturation,
        Self::Brightness,
        Self::AllParameters,
        Self::AllParametersCct,
        Self::AllParametersRgb,
        Self::AllParametersHsb,
    ];

    /// Returns the numeric code of this kind.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::State => 1,
            Self::TurnOn => 2,
            Self::TurnOff => 3,
            Self::Intensity => 20,
            Self::MinIntensity => 21,
            Self::MaxIntensity => 22,
            Self::Cct => 30,
            Self::MinCct => 31,
            Self::MaxCct => 32,
            Self::Color => 40,
            Self::Red => 51,
            Self::Green => 52,
            Self::Blue => 53,
            Self::Hue => 54,
            Self::Saturation => 55,
            Self::Brightness => 56,
            Self::AllParameters => 60,
            Self::AllParametersCct => 61,
            Self::AllParametersRgb => 62,
            Self::AllParametersHsb => 63,
        }
    }

    /// Looks up a kind by its numeric code.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Returns `true` for kinds no light operation emits.
    #[must_use]
    pub const fn is_reserved(&self) -> bool {
        matches!(
            self,
            Self::TurnOff
                | Self::MinIntensity
                | Self::MaxIntensity
                | Self::MinCct
                | Self::MaxCct
                | Self::AllParametersHsb
        )
    }

    /// Returns `true` for the composite "all parameters" kinds.
    #[must_use]
    pub const fn is_composite(&self) -> bool {
        matches!(
            self,
            Self::AllParameters
                | Self::AllParametersCct
                | Self::AllParametersRgb
                | Self::AllParametersHsb
        )
    }
}

impl fmt::Display for LightEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::State => "STATE",
            Self::TurnOn => "TURN_ON",
            Self::TurnOff => "TURN_OFF",
            Self::Intensity => "INTENSITY",
            Self::MinIntensity => "MIN_INTENSITY",
            Self::MaxIntensity => "MAX_INTENSITY",
            Self::Cct => "CCT",
            Self::MinCct => "MIN_CCT",
            Self::MaxCct => "MAX_CCT",
            Self::Color => "COLOR",
            Self::Red => "RED",
            Self::Green => "GREEN",
            Self::Blue => "BLUE",
            Self::Hue => "HUE",
            Self::Saturation => "SATURATION",
            Self::Brightness => "BRIGHTNESS",
            Self::AllParameters => "ALL_PARAMETERS",
            Self::AllParametersCct => "ALL_PARAMETERS_CCT",
            Self::AllParametersRgb => "ALL_PARAMETERS_RGB",
            Self::AllParametersHsb => "ALL_PARAMETERS_HSB",
        };
        f.write_str(name)
    }
}
