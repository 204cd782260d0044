//! Family event collection

use crate::collections::{GenericCollection, ModelCollection};
use crate::models::event::FamilyEvent;
use std::sync::Arc;

/// Specialized collection for family events
#[derive(Debug, Default)]
pub struct EventCollection {
    /// Base generic collection implementation
    inner: GenericCollection<FamilyEvent>,
}

impl EventCollection {
    /// Create a new empty event collection
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: GenericCollection::new(),
        }
    }

    /// Create a collection from a vector of events
    #[must_use]
    pub fn from_events(events: Vec<FamilyEvent>) -> Self {
        Self {
            inner: GenericCollection::from_models(events),
        }
    }

    /// Create a collection from already-shared events
    #[must_use]
    pub fn from_shared(events: Vec<Arc<FamilyEvent>>) -> Self {
        Self {
            inner: GenericCollection::from_shared(events),
        }
    }

    /// Add an event to the collection
    pub fn add(&mut self, event: FamilyEvent) {
        self.inner.add(event);
    }

    /// Look up an event by id
    #[must_use]
    pub fn get(&self, id: i64) -> Option<Arc<FamilyEvent>> {
        self.inner.get(&id)
    }

    /// Remove an event by id
    pub fn remove(&mut self, id: i64) -> Option<Arc<FamilyEvent>> {
        self.inner.remove(&id)
    }

    /// All events, ordered by event date then id
    #[must_use]
    pub fn all(&self) -> Vec<Arc<FamilyEvent>> {
        let mut events = self.inner.all();
        events.sort_by_key(|event| (event.date, event.id));
        events
    }

    /// Number of events in the collection
    #[must_use]
    pub fn count(&self) -> usize {
        self.inner.count()
    }

    /// Case-insensitive search over title and description
    ///
    /// A blank term returns every event.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<Arc<FamilyEvent>> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return self.all();
        }
        let mut matches = self.inner.filter(|event| {
            event.title.to_lowercase().contains(&term)
                || event.description.to_lowercase().contains(&term)
        });
        matches.sort_by_key(|event| (event.date, event.id));
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> EventCollection {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        EventCollection::from_events(vec![
            FamilyEvent::new(1, "Wedding of Wang Lei and Li Na", date(1974, 5, 1), "Ceremony in Beijing"),
            FamilyEvent::new(2, "Family reunion", date(2005, 10, 2), "First full gathering"),
            FamilyEvent::new(3, "Move to Shanghai", date(1990, 3, 12), "The family relocated"),
        ])
    }

    #[test]
    fn search_matches_title_or_description() {
        let collection = sample();
        assert_eq!(collection.search("wedding").len(), 1);
        assert_eq!(collection.search("FAMILY").len(), 2);
        assert_eq!(collection.search("beijing")[0].id, 1);
    }

    #[test]
    fn blank_term_returns_all_in_date_order() {
        let collection = sample();
        let events = collection.search("");
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].id, 1);
        assert_eq!(events[1].id, 3);
        assert_eq!(events[2].id, 2);
    }

    #[test]
    fn unmatched_term_returns_nothing() {
        let collection = sample();
        assert!(collection.search("funeral").is_empty());
    }
}
