use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_REGISTRY_CAPACITY;

/// Interned handle standing in for a parameter name.
///
/// Handles are only meaningful for the registry that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct ParameterId(u32);

impl ParameterId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ParameterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Default)]
struct RegistryTable {
    names: Vec<String>,
    lookup: HashMap<String, ParameterId>,
}

/// Thread-safe interning table mapping parameter names to [`ParameterId`]s.
///
/// Handles stay valid for the registry's lifetime; names are never removed.
pub struct IdRegistry {
    table: RwLock<RegistryTable>,
}

impl Default for IdRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_REGISTRY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: RwLock::new(RegistryTable {
                names: Vec::with_capacity(capacity),
                lookup: HashMap::with_capacity(capacity),
            }),
        }
    }

    /// Process-wide registry for hosts that do not thread their own through.
    pub fn global() -> Arc<IdRegistry> {
        static GLOBAL: OnceLock<Arc<IdRegistry>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(IdRegistry::new())))
    }

    /// Returns the handle for `name`, interning it on first sight.
    pub fn get_id(&self, name: &str) -> ParameterId {
        if let Some(id) = self.table.read().lookup.get(name) {
            return *id;
        }

        let mut table = self.table.write();
        // Another writer may have interned it between the two locks.
        if let Some(id) = table.lookup.get(name) {
            return *id;
        }

        let id = ParameterId(table.names.len() as u32);
        table.names.push(name.to_owned());
        table.lookup.insert(name.to_owned(), id);
        log::trace!("interned parameter {name:?} as {id}");
        id
    }

    /// Looks up an already interned name without inserting it.
    pub fn find(&self, name: &str) -> Option<ParameterId> {
        self.table.read().lookup.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn name(&self, id: ParameterId) -> Option<String> {
        self.table.read().names.get(id.index()).cloned()
    }

    pub fn len(&self) -> usize {
        self.table.read().names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for IdRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdRegistry")
            .field("len", &self.len())
            .finish()
    }
}
