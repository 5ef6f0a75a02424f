//! Typed reader for rig physics documents (`*.physics3.json`).
//!
//! A physics document describes gravity and wind, per-setting normalization
//! ranges, the parameter inputs and outputs of each setting, and the particle
//! chains a simulation stepper advances. This crate parses the document once
//! into typed records and exposes index-keyed accessors over them; it does not
//! simulate anything itself.
//!
//! ```no_run
//! use physics_json::{IdRegistry, PhysicsJson};
//!
//! let ids = IdRegistry::global();
//! let physics = PhysicsJson::from_path("hiyori.physics3.json", ids)?;
//! for setting in 0..physics.physics_settings_len() {
//!     println!("{} particles", physics.particle_count(setting)?);
//! }
//! # Ok::<(), physics_json::PhysicsJsonError>(())
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod reader;
pub mod schema;
pub mod utils;

pub use glam::Vec2;

pub use crate::core::{
    setting::{PhysicsInput, PhysicsOutput, PhysicsParticle, PhysicsSetting},
    types::{ComponentType, Normalization, NormalizationRange},
};
pub use error::{PhysicsJsonError, Result};
pub use reader::PhysicsJson;
pub use schema::{DictionaryEntry, PhysicsDocument};
pub use utils::registry::{IdRegistry, ParameterId};
