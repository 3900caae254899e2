use serde::{Serialize, Deserialize};
use std::collections::HashMap;

use super::types::{ParamId, Parameter};

/// The parameter arena: records in registration order plus the identifier
/// index that maps public string ids to handles.
///
/// Identifiers are the primary key of the public contract, so a colliding
/// `insert` is refused rather than renamed or overwritten. Records are
/// never removed; handles stay valid for the life of the registry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registry {
    records: Vec<Parameter>,
    index: HashMap<String, ParamId>,
}

impl Registry {
    pub fn new() -> Self { Self::default() }

    pub fn count(&self) -> usize { self.records.len() }

    /// Registers a new parameter, returning its handle.
    ///
    /// Returns `None` without touching the store when the identifier is
    /// already registered.
    pub fn insert(&mut self, param: Parameter) -> Option<ParamId> {
        if self.index.contains_key(&param.id) {
            return None;
        }
        let id = ParamId::new(self.records.len());
        self.index.insert(param.id.clone(), id);
        self.records.push(param);
        Some(id)
    }

    /// Maps a public identifier to its handle.
    #[inline]
    pub fn resolve(&self, id: &str) -> Option<ParamId> {
        self.index.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    #[inline(always)]
    pub fn get(&self, id: ParamId) -> &Parameter {
        &self.records[id.index()]
    }

    #[inline(always)]
    pub fn get_mut(&mut self, id: ParamId) -> &mut Parameter {
        &mut self.records[id.index()]
    }

    /// Records in handle (registration) order.
    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.records.iter()
    }
}
