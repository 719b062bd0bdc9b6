use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::entity::Described;
use crate::error::{CoreError, CoreResult};

/// Minimum similarity score for a "did you mean" suggestion (0.0-1.0).
const SUGGEST_THRESHOLD: f64 = 0.8;

/// Name-unique store for one entity category.
///
/// Iteration follows registration order. Lookups are case-insensitive, so
/// names differing only in case collide.
#[derive(Debug, Clone)]
pub struct Registry<T> {
    entries: Vec<T>,
    by_name_lower: HashMap<String, usize>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            by_name_lower: HashMap::new(),
        }
    }
}

impl<T: Described> Registry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity. Fails without changing anything if the name is taken.
    ///
    /// Surrounding whitespace is ignored when comparing names, so `"Apple "`
    /// and `"apple"` collide.
    pub fn insert(&mut self, entity: T) -> CoreResult<()> {
        let name_lower = normalize(entity.name());
        if self.by_name_lower.contains_key(&name_lower) {
            return Err(CoreError::DuplicateName {
                kind: T::KIND,
                name: entity.name().to_string(),
            });
        }
        self.by_name_lower.insert(name_lower, self.entries.len());
        self.entries.push(entity);
        Ok(())
    }

    /// Find an entity by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&T> {
        self.index_of(name).map(|idx| &self.entries[idx])
    }

    /// Find an entity by name (case-insensitive) for mutation.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        let idx = self.index_of(name)?;
        Some(&mut self.entries[idx])
    }

    /// Resolve a name or fail with [`CoreError::UnknownEntity`].
    pub fn resolve(&self, name: &str) -> CoreResult<&T> {
        self.get(name).ok_or_else(|| CoreError::UnknownEntity {
            kind: T::KIND,
            name: name.to_string(),
        })
    }

    /// Whether an entity with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// The closest registered name, if any is similar enough.
    pub fn suggest(&self, name: &str) -> Option<&str> {
        let input = normalize(name);
        self.entries
            .iter()
            .map(|e| (e.name(), jaro_winkler(&input, &e.name().to_lowercase())))
            .filter(|(_, score)| *score >= SUGGEST_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(name, _)| name)
    }

    /// Iterate in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    /// Number of registered entities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name_lower.get(&normalize(name)).copied()
    }
}

/// Lookup key for a name.
fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
