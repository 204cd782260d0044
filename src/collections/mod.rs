//! Collections of domain models
//!
//! This module provides a generic `Arc`-sharing collection keyed by entity
//! id, plus specialized collections for individuals, relationships, and
//! events. Collections are materialized snapshots: the pure algorithms read
//! them, the store adapter produces them.

use crate::models::EntityModel;
use std::collections::HashMap;
use std::sync::Arc;

pub mod event;
pub mod individual;
pub mod relationship;

pub use event::EventCollection;
pub use individual::IndividualCollection;
pub use relationship::RelationshipCollection;

/// Core trait for model collections
///
/// This trait provides the fundamental operations that all model collections
/// support, including adding, getting, and filtering items.
pub trait ModelCollection<T: EntityModel>: Send + Sync + std::fmt::Debug {
    /// Add a model to the collection
    fn add(&mut self, model: T);

    /// Get a model by its identifier
    fn get(&self, id: &T::Id) -> Option<Arc<T>>;

    /// Get all models in the collection
    fn all(&self) -> Vec<Arc<T>>;

    /// Count the total number of models in the collection
    fn count(&self) -> usize;

    /// Filter models by a predicate function
    fn filter<F>(&self, predicate: F) -> Vec<Arc<T>>
    where
        F: Fn(&T) -> bool;

    /// Check if the collection contains a model with the given ID
    fn contains(&self, id: &T::Id) -> bool {
        self.get(id).is_some()
    }

    /// Add multiple models to the collection
    fn add_all(&mut self, models: Vec<T>) {
        for model in models {
            self.add(model);
        }
    }
}

/// Generic model collection implementation
///
/// Stores models in a `HashMap` indexed by their ID for efficient access,
/// sharing each model behind an `Arc` so snapshots stay cheap to hand out.
#[derive(Debug)]
pub struct GenericCollection<T: EntityModel> {
    /// Models indexed by ID
    items: HashMap<T::Id, Arc<T>>,
}

impl<T: EntityModel> GenericCollection<T> {
    /// Create a new empty collection
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Create a collection from a vector of models
    #[must_use]
    pub fn from_models(models: Vec<T>) -> Self {
        let mut collection = Self::new();
        for model in models {
            collection.add(model);
        }
        collection
    }

    /// Create a collection from already-shared models
    #[must_use]
    pub fn from_shared(models: Vec<Arc<T>>) -> Self {
        let mut collection = Self::new();
        for model in models {
            collection.add_shared(model);
        }
        collection
    }

    /// Add an already-shared model without re-wrapping it
    pub fn add_shared(&mut self, model: Arc<T>) {
        let id = model.id().clone();
        self.items.insert(id, model);
    }

    /// Get all model IDs in the collection
    #[must_use]
    pub fn ids(&self) -> Vec<T::Id> {
        self.items.keys().cloned().collect()
    }

    /// Remove a model from the collection
    pub fn remove(&mut self, id: &T::Id) -> Option<Arc<T>> {
        self.items.remove(id)
    }

    /// Clear all models from the collection
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Get a map of all items by their ID
    #[must_use]
    pub const fn as_map(&self) -> &HashMap<T::Id, Arc<T>> {
        &self.items
    }
}

impl<T: EntityModel> Default for GenericCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: EntityModel> ModelCollection<T> for GenericCollection<T> {
    fn add(&mut self, model: T) {
        let id = model.id().clone();
        self.items.insert(id, Arc::new(model));
    }

    fn get(&self, id: &T::Id) -> Option<Arc<T>> {
        self.items.get(id).cloned()
    }

    fn all(&self) -> Vec<Arc<T>> {
        self.items.values().cloned().collect()
    }

    fn count(&self) -> usize {
        self.items.len()
    }

    fn filter<F>(&self, predicate: F) -> Vec<Arc<T>>
    where
        F: Fn(&T) -> bool,
    {
        self.items
            .values()
            .filter(|model| predicate(model))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::individual::Individual;
    use crate::models::types::Gender;
    use chrono::NaiveDate;

    fn person(id: i64, name: &str) -> Individual {
        Individual::new(
            id,
            name,
            Gender::Unknown,
            NaiveDate::from_ymd_opt(1960, 1, 1).unwrap(),
        )
    }

    #[test]
    fn add_and_get_by_id() {
        let mut collection = GenericCollection::new();
        collection.add(person(1, "Chen Jing"));
        collection.add(person(2, "Chen Hao"));

        assert_eq!(collection.count(), 2);
        assert!(collection.contains(&1));
        assert_eq!(collection.get(&2).unwrap().full_name, "Chen Hao");
        assert!(collection.get(&3).is_none());
    }

    #[test]
    fn adding_same_id_replaces_the_model() {
        let mut collection = GenericCollection::new();
        collection.add(person(1, "Old Name"));
        collection.add(person(1, "New Name"));

        assert_eq!(collection.count(), 1);
        assert_eq!(collection.get(&1).unwrap().full_name, "New Name");
    }

    #[test]
    fn remove_returns_the_model() {
        let mut collection = GenericCollection::from_models(vec![person(1, "Chen Jing")]);
        let removed = collection.remove(&1);
        assert_eq!(removed.unwrap().full_name, "Chen Jing");
        assert_eq!(collection.count(), 0);
    }
}
