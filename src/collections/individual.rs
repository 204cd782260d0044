//! Individual model collection
//!
//! This module provides a specialized collection implementation for
//! Individual models, with the lookups the register screens and the
//! subgraph builder rely on.

use crate::collections::{GenericCollection, ModelCollection};
use crate::models::individual::Individual;
use crate::models::types::Gender;
use std::sync::Arc;

/// Specialized collection for Individual models
#[derive(Debug, Default)]
pub struct IndividualCollection {
    /// Base generic collection implementation
    inner: GenericCollection<Individual>,
}

impl IndividualCollection {
    /// Create a new empty individual collection
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: GenericCollection::new(),
        }
    }

    /// Create a collection from a vector of individuals
    #[must_use]
    pub fn from_individuals(individuals: Vec<Individual>) -> Self {
        Self {
            inner: GenericCollection::from_models(individuals),
        }
    }

    /// Create a collection from already-shared individuals
    #[must_use]
    pub fn from_shared(individuals: Vec<Arc<Individual>>) -> Self {
        Self {
            inner: GenericCollection::from_shared(individuals),
        }
    }

    /// Add an individual to the collection
    pub fn add(&mut self, individual: Individual) {
        self.inner.add(individual);
    }

    /// Look up an individual by id
    #[must_use]
    pub fn get(&self, id: i64) -> Option<Arc<Individual>> {
        self.inner.get(&id)
    }

    /// Check whether an individual with the given id exists
    #[must_use]
    pub fn contains(&self, id: i64) -> bool {
        self.inner.contains(&id)
    }

    /// Remove an individual by id
    pub fn remove(&mut self, id: i64) -> Option<Arc<Individual>> {
        self.inner.remove(&id)
    }

    /// All individuals, ordered by id
    #[must_use]
    pub fn all(&self) -> Vec<Arc<Individual>> {
        let mut items = self.inner.all();
        items.sort_by_key(|person| person.id);
        items
    }

    /// Number of individuals in the collection
    #[must_use]
    pub fn count(&self) -> usize {
        self.inner.count()
    }

    /// Individuals recorded as living (no death date)
    #[must_use]
    pub fn living(&self) -> Vec<Arc<Individual>> {
        self.inner.filter(Individual::is_living)
    }

    /// Individuals of a given gender
    #[must_use]
    pub fn by_gender(&self, gender: Gender) -> Vec<Arc<Individual>> {
        self.inner.filter(|person| person.gender == gender)
    }

    /// Case-insensitive substring search over full names, ordered by id
    #[must_use]
    pub fn search_name(&self, term: &str) -> Vec<Arc<Individual>> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return self.all();
        }
        let mut matches = self
            .inner
            .filter(|person| person.full_name.to_lowercase().contains(&term));
        matches.sort_by_key(|person| person.id);
        matches
    }

    /// Get the raw collection
    #[must_use]
    pub const fn raw(&self) -> &GenericCollection<Individual> {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, 3, 1).unwrap()
    }

    fn sample() -> IndividualCollection {
        IndividualCollection::from_individuals(vec![
            Individual::new(1, "Wang Lei", Gender::Male, date(1950)),
            Individual::new(2, "Li Na", Gender::Female, date(1952))
                .with_death_date(date(2020)),
            Individual::new(3, "Wang Fang", Gender::Female, date(1975)),
        ])
    }

    #[test]
    fn living_excludes_deceased() {
        let collection = sample();
        let living = collection.living();
        assert_eq!(living.len(), 2);
        assert!(living.iter().all(|p| p.death_date.is_none()));
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let collection = sample();
        let hits = collection.search_name("wang");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, 1);
        assert_eq!(hits[1].id, 3);
    }

    #[test]
    fn blank_search_returns_everyone() {
        let collection = sample();
        assert_eq!(collection.search_name("  ").len(), 3);
    }

    #[test]
    fn by_gender_filters() {
        let collection = sample();
        assert_eq!(collection.by_gender(Gender::Female).len(), 2);
        assert_eq!(collection.by_gender(Gender::Unknown).len(), 0);
    }
}
