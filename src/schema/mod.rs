//! Serde records mirroring the on-disk shape of a physics document.
//!
//! Field names follow the document's PascalCase keys. These records are the
//! raw deserialization target; [`crate::core`] holds the resolved view the
//! reader hands out.

pub mod meta;
pub mod setting;

pub use meta::{DictionaryEntry, EffectiveForces, MetaRecord, Vector2Record};
pub use setting::{
    InputRecord, NormalizationRecord, NormalizationRangeRecord, OutputRecord, ParameterRef,
    ParticleRecord, PhysicsSettingRecord,
};

use serde::{Deserialize, Serialize};

use crate::utils::coerce::deserialize_optional_truncated_u32;

/// Root object of a physics document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PhysicsDocument {
    #[serde(
        default,
        deserialize_with = "deserialize_optional_truncated_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<u32>,
    pub meta: MetaRecord,
    pub physics_settings: Vec<PhysicsSettingRecord>,
}
