use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::{COMPONENT_TAG_ANGLE, COMPONENT_TAG_X, COMPONENT_TAG_Y};
use crate::error::PhysicsJsonError;
use crate::schema::{NormalizationRangeRecord, NormalizationRecord};

/// Common math types re-exported for convenience.
pub use glam::Vec2;

/// Which component of a parameter an input reads or an output drives.
///
/// Documents store this as a raw `Type` tag; the reader keeps the tag and
/// offers this enum for consumers that want it interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentType {
    X,
    Y,
    Angle,
}

impl ComponentType {
    pub fn tag(&self) -> &'static str {
        match self {
            ComponentType::X => COMPONENT_TAG_X,
            ComponentType::Y => COMPONENT_TAG_Y,
            ComponentType::Angle => COMPONENT_TAG_ANGLE,
        }
    }
}

impl FromStr for ComponentType {
    type Err = PhysicsJsonError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            COMPONENT_TAG_X => Ok(ComponentType::X),
            COMPONENT_TAG_Y => Ok(ComponentType::Y),
            COMPONENT_TAG_ANGLE => Ok(ComponentType::Angle),
            other => Err(PhysicsJsonError::UnknownComponentType(other.to_owned())),
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Bounds used to map a driving parameter into simulation-local units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizationRange {
    pub minimum: f32,
    pub maximum: f32,
    pub default: f32,
}

impl From<NormalizationRangeRecord> for NormalizationRange {
    fn from(record: NormalizationRangeRecord) -> Self {
        Self {
            minimum: record.minimum,
            maximum: record.maximum,
            default: record.default,
        }
    }
}

/// Position and angle normalization of one physics setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Normalization {
    pub position: NormalizationRange,
    pub angle: NormalizationRange,
}

impl From<NormalizationRecord> for Normalization {
    fn from(record: NormalizationRecord) -> Self {
        Self {
            position: record.position.into(),
            angle: record.angle.into(),
        }
    }
}
