use glam::Vec2;

use crate::{
    core::types::Normalization,
    schema::{InputRecord, OutputRecord, ParticleRecord, PhysicsSettingRecord},
    utils::registry::{IdRegistry, ParameterId},
};

/// Maps an external driving parameter into a setting's simulation space.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsInput {
    pub source_id: ParameterId,
    pub source_name: String,
    pub source_target: Option<String>,
    pub weight: f32,
    pub kind: String,
    pub reflect: bool,
}

impl PhysicsInput {
    fn resolve(record: InputRecord, ids: &IdRegistry) -> Self {
        Self {
            source_id: ids.get_id(&record.source.id),
            source_name: record.source.id,
            source_target: record.source.target,
            weight: record.weight,
            kind: record.kind,
            reflect: record.reflect,
        }
    }
}

/// Maps a simulated particle back onto an external parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsOutput {
    pub destination_id: ParameterId,
    pub destination_name: String,
    pub destination_target: Option<String>,
    pub vertex_index: usize,
    pub angle_scale: f32,
    pub weight: f32,
    pub kind: String,
    pub reflect: bool,
}

impl PhysicsOutput {
    fn resolve(record: OutputRecord, ids: &IdRegistry) -> Self {
        Self {
            destination_id: ids.get_id(&record.destination.id),
            destination_name: record.destination.id,
            destination_target: record.destination.target,
            vertex_index: record.vertex_index,
            angle_scale: record.scale,
            weight: record.weight,
            kind: record.kind,
            reflect: record.reflect,
        }
    }
}

/// One point mass of a simulated chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsParticle {
    pub position: Vec2,
    pub mobility: f32,
    pub delay: f32,
    pub acceleration: f32,
    /// Stored as written; [`crate::PhysicsJson::particle_radius`] truncates.
    pub radius: f32,
}

impl From<ParticleRecord> for PhysicsParticle {
    fn from(record: ParticleRecord) -> Self {
        Self {
            position: record.position.into(),
            mobility: record.mobility,
            delay: record.delay,
            acceleration: record.acceleration,
            radius: record.radius,
        }
    }
}

/// One independently configured simulation group, e.g. a hair strand.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsSetting {
    pub id: Option<String>,
    pub normalization: Normalization,
    pub inputs: Vec<PhysicsInput>,
    pub outputs: Vec<PhysicsOutput>,
    pub particles: Vec<PhysicsParticle>,
}

impl PhysicsSetting {
    /// Converts a raw record, interning every parameter name through `ids`.
    pub fn resolve(record: PhysicsSettingRecord, ids: &IdRegistry) -> Self {
        Self {
            id: record.id,
            normalization: record.normalization.into(),
            inputs: record
                .input
                .into_iter()
                .map(|input| PhysicsInput::resolve(input, ids))
                .collect(),
            outputs: record
                .output
                .into_iter()
                .map(|output| PhysicsOutput::resolve(output, ids))
                .collect(),
            particles: record.vertices.into_iter().map(PhysicsParticle::from).collect(),
        }
    }
}
