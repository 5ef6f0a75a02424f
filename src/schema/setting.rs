use serde::{Deserialize, Serialize};

use super::meta::Vector2Record;
use crate::utils::coerce::deserialize_truncated_usize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NormalizationRangeRecord {
    pub minimum: f32,
    pub maximum: f32,
    pub default: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NormalizationRecord {
    pub position: NormalizationRangeRecord,
    pub angle: NormalizationRangeRecord,
}

/// `Source` / `Destination` object naming a model parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParameterRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InputRecord {
    pub source: ParameterRef,
    pub weight: f32,
    #[serde(rename = "Type")]
    pub kind: String,
    pub reflect: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputRecord {
    pub destination: ParameterRef,
    #[serde(deserialize_with = "deserialize_truncated_usize")]
    pub vertex_index: usize,
    pub scale: f32,
    pub weight: f32,
    #[serde(rename = "Type")]
    pub kind: String,
    pub reflect: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParticleRecord {
    pub position: Vector2Record,
    pub mobility: f32,
    pub delay: f32,
    pub acceleration: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PhysicsSettingRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub normalization: NormalizationRecord,
    pub input: Vec<InputRecord>,
    pub output: Vec<OutputRecord>,
    pub vertices: Vec<ParticleRecord>,
}
