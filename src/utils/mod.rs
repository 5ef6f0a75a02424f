//! Utility helpers: identifier interning, numeric coercion, and logging.

pub mod coerce;
pub mod logging;
pub mod registry;

pub use registry::{IdRegistry, ParameterId};
