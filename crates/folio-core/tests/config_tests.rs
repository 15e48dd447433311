use folio_core::config::{BackdropConfig, CanvasConfig, ConfigError, SceneConfig};
use folio_core::Rgb;
use std::error::Error;

#[test]
fn test_defaults_are_valid() {
    assert!(BackdropConfig::default().validate().is_ok());
    let scene = SceneConfig::default();
    assert_eq!(scene.shape_count, 15);
    assert_eq!(scene.point_count, 1500);
    assert_eq!(scene.pointer_easing, 0.0005);
    assert_eq!(CanvasConfig::default().particle_count, 50);
    assert_eq!(CanvasConfig::default().link_distance, 100.0);
}

#[test]
fn test_empty_json_uses_defaults() {
    let config = BackdropConfig::from_json("{}").unwrap();
    assert_eq!(config.scene.point_count, 1500);
    assert_eq!(config.canvas.palette.len(), 4);
}

#[test]
fn test_partial_json_overrides() {
    let json = r##"{
        "scene": { "point_count": 200, "point_palette": ["#ffffff", "0x000000"] },
        "canvas": { "particle_count": 12, "link_distance": 80.0 }
    }"##;
    let config = BackdropConfig::from_json(json).unwrap();
    assert_eq!(config.scene.point_count, 200);
    assert_eq!(config.scene.shape_count, 15, "untouched keys keep defaults");
    assert_eq!(
        config.scene.point_palette,
        vec![Rgb::new(1.0, 1.0, 1.0), Rgb::new(0.0, 0.0, 0.0)]
    );
    assert_eq!(config.canvas.particle_count, 12);
    assert_eq!(config.canvas.link_distance, 80.0);
}

#[test]
fn test_vector_fields_parse_as_arrays() {
    let json = r#"{ "scene": { "point_extent": [10.0, 20.0, 30.0] } }"#;
    let config = BackdropConfig::from_json(json).unwrap();
    assert_eq!(config.scene.point_extent.to_array(), [10.0, 20.0, 30.0]);
}

#[test]
fn test_material_list_parses() {
    let json = r##"{ "scene": { "shape_materials": [{ "color": "#4285F4", "opacity": 0.5 }] } }"##;
    let config = BackdropConfig::from_json(json).unwrap();
    assert_eq!(config.scene.shape_materials.len(), 1);
    assert_eq!(config.scene.shape_materials[0].opacity, 0.5);
}

#[test]
fn test_malformed_json_is_parse_error() {
    let err = BackdropConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.source().is_some(), "parse errors expose their cause");
}

#[test]
fn test_bad_colour_is_parse_error() {
    let err = BackdropConfig::from_json(r##"{ "canvas": { "palette": ["#12"] } }"##).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().contains("#12"), "message names the bad entry: {}", err);
}

#[test]
fn test_empty_palette_rejected() {
    let err = BackdropConfig::from_json(r#"{ "canvas": { "palette": [] } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyPalette("palette")));
}

#[test]
fn test_empty_palette_allowed_with_no_particles() {
    let json = r#"{ "canvas": { "palette": [], "particle_count": 0 } }"#;
    assert!(BackdropConfig::from_json(json).is_ok());
}

#[test]
fn test_out_of_range_values_rejected() {
    let cases = [
        (r#"{ "canvas": { "link_distance": 0.0 } }"#, "link_distance"),
        (r#"{ "scene": { "pointer_easing": 1.5 } }"#, "pointer_easing"),
        (r#"{ "scene": { "fov_y_degrees": 180.0 } }"#, "fov_y_degrees"),
        (r#"{ "scene": { "near": 10.0, "far": 5.0 } }"#, "far"),
    ];
    for (json, expected) in cases {
        match BackdropConfig::from_json(json) {
            Err(ConfigError::OutOfRange { field, .. }) => assert_eq!(field, expected),
            other => panic!("{} should be rejected as out of range, got {:?}", json, other),
        }
    }
}
