use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::utils::coerce::deserialize_truncated_usize;

/// `{ "X": .., "Y": .. }` pair as written in the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Vector2Record {
    pub x: f32,
    pub y: f32,
}

impl From<Vector2Record> for Vec2 {
    fn from(record: Vector2Record) -> Self {
        Vec2::new(record.x, record.y)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EffectiveForces {
    pub gravity: Vector2Record,
    pub wind: Vector2Record,
}

/// Human readable name attached to a physics setting id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DictionaryEntry {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetaRecord {
    #[serde(deserialize_with = "deserialize_truncated_usize")]
    pub physics_setting_count: usize,
    #[serde(deserialize_with = "deserialize_truncated_usize")]
    pub total_input_count: usize,
    #[serde(deserialize_with = "deserialize_truncated_usize")]
    pub total_output_count: usize,
    #[serde(deserialize_with = "deserialize_truncated_usize")]
    pub vertex_count: usize,
    pub effective_forces: EffectiveForces,
    /// Simulation rate hint; older exports omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fps: Option<f32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub physics_dictionary: Vec<DictionaryEntry>,
}
