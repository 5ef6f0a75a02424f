//! Global configuration constants for the physics document reader.

/// Initial slot capacity of a freshly created [`crate::IdRegistry`].
pub const DEFAULT_REGISTRY_CAPACITY: usize = 64;

/// Byte order mark some authoring tools prepend to exported documents.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Conventional file suffix of rig physics documents.
pub const PHYSICS_JSON_SUFFIX: &str = ".physics3.json";

/// Type tag selecting the horizontal component of a parameter mapping.
pub const COMPONENT_TAG_X: &str = "X";

/// Type tag selecting the vertical component of a parameter mapping.
pub const COMPONENT_TAG_Y: &str = "Y";

/// Type tag selecting the angular component of a parameter mapping.
pub const COMPONENT_TAG_ANGLE: &str = "Angle";
