use physics_json::*;
use serde_json::json;
use std::sync::Arc;

fn setting(inputs: usize, particles: usize) -> serde_json::Value {
    json!({
        "Input": (0..inputs).map(|i| json!({
            "Source": { "Target": "Parameter", "Id": format!("ParamIn{i}") },
            "Weight": 10 * (i + 1),
            "Type": "X",
            "Reflect": false
        })).collect::<Vec<_>>(),
        "Output": [],
        "Vertices": (0..particles).map(|i| json!({
            "Position": { "X": 0, "Y": i as f32 * 3.0 },
            "Mobility": 1, "Delay": 1, "Acceleration": 1, "Radius": 3
        })).collect::<Vec<_>>(),
        "Normalization": {
            "Position": { "Minimum": -1, "Default": 0, "Maximum": 1 },
            "Angle": { "Minimum": -1, "Default": 0, "Maximum": 1 }
        }
    })
}

fn document(declared_settings: usize, settings: Vec<serde_json::Value>) -> PhysicsJson {
    let doc = json!({
        "Meta": {
            "PhysicsSettingCount": declared_settings,
            "TotalInputCount": 0,
            "TotalOutputCount": 0,
            "VertexCount": 0,
            "EffectiveForces": {
                "Gravity": { "X": 0, "Y": -1 },
                "Wind": { "X": 0, "Y": 0 }
            }
        },
        "PhysicsSettings": settings
    });
    PhysicsJson::parse_str(&doc.to_string(), Arc::new(IdRegistry::new())).unwrap()
}

#[test]
fn input_count_matches_literal_length() {
    let physics = document(3, vec![setting(0, 1), setting(2, 1), setting(5, 1)]);

    for (index, expected) in [0usize, 2, 5].into_iter().enumerate() {
        assert_eq!(physics.input_count(index).unwrap(), expected);
    }
}

#[test]
fn declared_and_actual_setting_counts_are_independent() {
    let physics = document(5, vec![setting(1, 1), setting(1, 1)]);

    assert_eq!(physics.sub_rig_count(), 5);
    assert_eq!(physics.physics_settings_len(), 2);

    let err = physics.input_count(2).unwrap_err();
    assert!(matches!(
        err,
        PhysicsJsonError::IndexOutOfRange { collection: "PhysicsSettings", index: 2, len: 2 }
    ));
}

#[test]
fn input_index_equal_to_count_is_rejected() {
    let physics = document(1, vec![setting(2, 1)]);
    let count = physics.input_count(0).unwrap();

    let err = physics.input_weight(0, count).unwrap_err();
    assert!(matches!(
        err,
        PhysicsJsonError::IndexOutOfRange { collection: "Input", index: 2, len: 2 }
    ));
}

#[test]
fn output_and_particle_indices_are_checked() {
    let physics = document(1, vec![setting(0, 2)]);

    assert!(matches!(
        physics.output_weight(0, 0),
        Err(PhysicsJsonError::IndexOutOfRange { collection: "Output", .. })
    ));
    assert!(matches!(
        physics.particle_position(0, 2),
        Err(PhysicsJsonError::IndexOutOfRange { collection: "Vertices", index: 2, len: 2 })
    ));
    assert_eq!(physics.particle_position(0, 1).unwrap(), Vec2::new(0.0, 3.0));
}

#[test]
fn setting_name_falls_back_to_position_without_ids() {
    let doc = json!({
        "Meta": {
            "PhysicsSettingCount": 1,
            "TotalInputCount": 0,
            "TotalOutputCount": 0,
            "VertexCount": 0,
            "EffectiveForces": {
                "Gravity": { "X": 0, "Y": -1 },
                "Wind": { "X": 0, "Y": 0 }
            },
            "PhysicsDictionary": [{ "Id": "PhysicsSetting1", "Name": "Hair" }]
        },
        "PhysicsSettings": [setting(0, 0)]
    });
    let physics = PhysicsJson::parse_str(&doc.to_string(), Arc::new(IdRegistry::new())).unwrap();

    assert_eq!(physics.setting_id(0).unwrap(), None);
    assert_eq!(physics.setting_name(0).unwrap(), Some("Hair"));
    assert!(physics.setting_name(1).is_err());
}
