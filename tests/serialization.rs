// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for records and configuration.

use lumen_lights::types::{LightType, PackedColor};
use lumen_lights::{
    AnyLight, CctLight, ColorLight, ColorSetting, Error, Light, LightConfig, LightControl,
    LightRecord, ParseError,
};

#[test]
fn xml_for_each_variant() {
    let mut plain = Light::new();
    plain.set_light_id(1);
    assert_eq!(
        plain.to_record().to_xml(),
        r#"<Light type="light" lightid="1" state="true" intensity="255" min_intensity="0" max_intensity="255" />"#
    );

    let mut cct = CctLight::with_parameters(100, 10);
    cct.set_light_id(2);
    assert_eq!(
        cct.to_record().to_xml(),
        r#"<Light type="cct" lightid="2" state="true" intensity="100" min_intensity="0" max_intensity="255" cct="10" min_cct="0" max_cct="255" />"#
    );

    let mut color = ColorLight::with_color(50, PackedColor::new(0x00_00FF));
    color.set_light_id(3);
    color.turn_off(false);
    assert_eq!(
        color.to_record().to_xml(),
        r#"<Light type="rgb" lightid="3" state="false" intensity="50" min_intensity="0" max_intensity="255" color="255" />"#
    );
}

#[test]
fn json_roundtrip_restores_cct_light() {
    let mut original = CctLight::new();
    original.set_light_id(8);
    original.set_range(10, 90);
    original.set_intensity(40, false);
    original.set_range_cct(0, 1000);
    original.set_cct(700, false);

    let json = original.to_record().to_json().unwrap();
    let record = LightRecord::from_json(&json).unwrap();
    let restored = AnyLight::from_record(&record).unwrap();

    assert_eq!(restored.light_type(), LightType::Cct);
    assert_eq!(restored.to_record(), original.to_record());
    assert_eq!(restored.to_string(), original.to_string());
}

#[test]
fn restored_lights_start_without_listeners() {
    let original = Light::new();
    original.on_event(|_| {});
    let restored = AnyLight::from_record(&original.to_record()).unwrap();
    assert_eq!(original.listener_count(), 1);
    assert_eq!(restored.listener_count(), 0);
}

#[test]
fn record_with_intensity_outside_bounds_is_restored_verbatim() {
    let mut original = Light::new();
    original.set_range(0, 100);

    let json = original.to_record().to_json().unwrap();
    let restored = AnyLight::from_record(&LightRecord::from_json(&json).unwrap()).unwrap();
    assert_eq!(restored.intensity(), 255);
    assert_eq!(restored.to_string(), original.to_string());

    // A hand-written config with the same values is still rejected.
    let err = LightConfig::plain()
        .with_intensity_range(0, 100)
        .with_intensity(255)
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::Value(_)));
}

#[test]
fn record_missing_variant_field_is_rejected() {
    let json = r#"{"type":"cct","lightid":0,"state":true,"intensity":255,
        "min_intensity":0,"max_intensity":255,"min_cct":0,"max_cct":255}"#;
    let record = LightRecord::from_json(json).unwrap();
    let err = AnyLight::from_record(&record).unwrap_err();
    assert!(matches!(err, Error::Parse(ParseError::MissingField(ref f)) if f == "cct"));
}

#[test]
fn config_from_json_builds_color_light() {
    let json = r#"{
        "type": "rgb",
        "light_id": 12,
        "state": false,
        "intensity": 30,
        "color": {"rgb": {"red": 0, "green": 255, "blue": 0}}
    }"#;
    let config = LightConfig::from_json(json).unwrap();
    assert_eq!(
        config.color,
        Some(ColorSetting::Rgb {
            red: 0,
            green: 255,
            blue: 0
        })
    );

    let light = config.build().unwrap();
    assert_eq!(light.light_id(), 12);
    assert!(light.is_off());
    assert_eq!(light.intensity(), 30);
    let color = light.as_color().unwrap();
    assert_eq!(color.color(), PackedColor::new(0x00_FF00));
    assert_eq!(color.hue(), 85);
}

#[test]
fn config_rejects_malformed_json() {
    let err = LightConfig::from_json("{\"type\": 3}").unwrap_err();
    assert!(matches!(err, Error::Parse(ParseError::Json(_))));
}
