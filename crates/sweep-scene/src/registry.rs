//! Name registry shared by curves and surfaces.

use std::collections::HashMap;

use slotmap::new_key_type;
use sweep_core::{Result, SweepError};

// --- SlotMap key types ---

new_key_type! {
    pub struct CurveId;
    pub struct SurfaceId;
}

/// Name of objects that are stored but never registered.
pub const ANONYMOUS: &str = ".";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Curve(CurveId),
    Surface(SurfaceId),
}

/// Unique names across curves and surfaces combined.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    names: HashMap<String, Handle>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_anonymous(name: &str) -> bool {
        name == ANONYMOUS
    }

    /// Fail with `DuplicateName` if `name` is already taken.
    pub fn ensure_available(&self, name: &str) -> Result<()> {
        if self.names.contains_key(name) {
            return Err(SweepError::DuplicateName(name.to_string()));
        }
        Ok(())
    }

    /// Register `name`; anonymous names are accepted and ignored.
    pub fn insert(&mut self, name: &str, handle: Handle) -> Result<()> {
        self.ensure_available(name)?;
        if !Self::is_anonymous(name) {
            self.names.insert(name.to_string(), handle);
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Handle> {
        self.names.get(name).copied()
    }

    /// Resolve a curve reference. Surfaces do not satisfy it.
    pub fn curve(&self, name: &str) -> Result<CurveId> {
        match self.get(name) {
            Some(Handle::Curve(id)) => Ok(id),
            _ => Err(SweepError::MissingReference(name.to_string())),
        }
    }

    pub fn surface(&self, name: &str) -> Result<SurfaceId> {
        match self.get(name) {
            Some(Handle::Surface(id)) => Ok(id),
            _ => Err(SweepError::MissingReference(name.to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
