use physics_json::*;
use std::sync::Arc;

const SCENARIO: &str = include_str!("data/scenario.physics3.json");

fn parse(text: &str) -> Result<PhysicsJson> {
    PhysicsJson::parse_str(text, Arc::new(IdRegistry::new()))
}

#[test]
fn malformed_json_is_reported() {
    let err = parse("{ \"Meta\": ").unwrap_err();
    assert!(matches!(err, PhysicsJsonError::Malformed { .. }), "{err:?}");

    let err = parse("{ \"Meta\": } ").unwrap_err();
    assert!(matches!(err, PhysicsJsonError::Malformed { .. }), "{err:?}");
}

#[test]
fn truncated_buffer_is_reported() {
    let bytes = SCENARIO.as_bytes();
    let err = PhysicsJson::new(bytes, bytes.len() + 1, Arc::new(IdRegistry::new())).unwrap_err();
    assert!(matches!(
        err,
        PhysicsJsonError::TruncatedBuffer { size, available } if size == available + 1
    ));

    let err = PhysicsJson::new(bytes, bytes.len() / 2, Arc::new(IdRegistry::new())).unwrap_err();
    assert!(matches!(err, PhysicsJsonError::Malformed { .. }), "{err:?}");
}

#[test]
fn missing_key_is_reported() {
    let text = SCENARIO.replace("\"Mobility\": 0.95,", "");
    let err = parse(&text).unwrap_err();
    match err {
        PhysicsJsonError::SchemaKeyMissing { message, .. } => {
            assert!(message.contains("Mobility"), "{message}");
        }
        other => panic!("expected SchemaKeyMissing, got {other:?}"),
    }
}

#[test]
fn wrong_value_type_is_reported() {
    let text = SCENARIO.replace("\"Weight\": 10,", "\"Weight\": \"heavy\",");
    let err = parse(&text).unwrap_err();
    assert!(matches!(err, PhysicsJsonError::TypeCoercionFailed { .. }), "{err:?}");

    let text = SCENARIO.replace("\"VertexCount\": 2,", "\"VertexCount\": -2,");
    let err = parse(&text).unwrap_err();
    assert!(matches!(err, PhysicsJsonError::TypeCoercionFailed { .. }), "{err:?}");
}

#[test]
fn fractional_integer_fields_truncate() {
    let text = SCENARIO.replace("\"VertexIndex\": 2,", "\"VertexIndex\": 1.0,");
    let physics = parse(&text).unwrap();
    assert_eq!(physics.output_vertex_index(0, 0).unwrap(), 1);
}

#[test]
fn leading_byte_order_mark_is_accepted() {
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(SCENARIO.as_bytes());

    let physics = PhysicsJson::from_slice(&bytes, Arc::new(IdRegistry::new())).unwrap();
    assert_eq!(physics.gravity(), Vec2::new(0.0, -1.0));
}

#[test]
fn unknown_component_tag_is_reported() {
    let text = SCENARIO.replace("\"Type\": \"X\",", "\"Type\": \"Z\",");
    let physics = parse(&text).unwrap();

    assert_eq!(physics.input_type(0, 0).unwrap(), "Z");
    assert!(matches!(
        physics.input_component(0, 0),
        Err(PhysicsJsonError::UnknownComponentType(tag)) if tag == "Z"
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = PhysicsJson::from_path(
        "/nonexistent/model.physics3.json",
        Arc::new(IdRegistry::new()),
    )
    .unwrap_err();
    assert!(matches!(err, PhysicsJsonError::Io(_)));
}
