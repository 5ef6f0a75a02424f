//! Resolved view of a physics document handed out by the reader.

pub mod setting;
pub mod types;

pub use setting::{PhysicsInput, PhysicsOutput, PhysicsParticle, PhysicsSetting};
pub use types::{ComponentType, Normalization, NormalizationRange};
