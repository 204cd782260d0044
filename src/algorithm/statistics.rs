//! Register statistics and summaries
//!
//! Pure aggregation over the individual snapshot: headline counts, the
//! decade histogram of births, and recent register growth by record
//! creation month.

use crate::collections::IndividualCollection;
use crate::models::types::Gender;
use chrono::Datelike;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// How many trailing months the growth series keeps
const GROWTH_MONTHS: usize = 12;

/// Functions for register statistics and summaries
pub struct FamilyStatistics;

impl FamilyStatistics {
    /// Calculate register statistics for an individual collection
    #[must_use]
    pub fn calculate(individuals: &IndividualCollection) -> PopulationStats {
        let all = individuals.all();
        let total = all.len();
        let male = all.iter().filter(|p| p.gender == Gender::Male).count();
        let female = all.iter().filter(|p| p.gender == Gender::Female).count();
        let living = all.iter().filter(|p| p.is_living()).count();

        let births_by_decade: Vec<(i32, usize)> = all
            .iter()
            .counts_by(|p| p.birth_date.year().div_euclid(10) * 10)
            .into_iter()
            .sorted_by_key(|(decade, _)| *decade)
            .collect();

        let mut monthly_growth: Vec<(String, usize)> = all
            .iter()
            .counts_by(|p| format!("{:04}-{:02}", p.created_at.year(), p.created_at.month()))
            .into_iter()
            .sorted_by(|a, b| a.0.cmp(&b.0))
            .collect();
        if monthly_growth.len() > GROWTH_MONTHS {
            monthly_growth.drain(..monthly_growth.len() - GROWTH_MONTHS);
        }

        PopulationStats {
            total,
            male,
            female,
            living,
            births_by_decade,
            monthly_growth,
        }
    }

    /// Generate a human-readable register summary
    #[must_use]
    pub fn generate_summary(stats: &PopulationStats) -> String {
        let mut summary = String::new();
        summary.push_str("Family Register Summary:\n");
        summary.push_str(&format!("  Total Individuals: {}\n", stats.total));
        summary.push_str(&format!(
            "  Male: {} ({:.1}%)\n",
            stats.male,
            stats.male_percent()
        ));
        summary.push_str(&format!(
            "  Female: {} ({:.1}%)\n",
            stats.female,
            stats.female_percent()
        ));
        summary.push_str(&format!(
            "  Living: {} ({:.1}%)\n",
            stats.living,
            stats.living_percent()
        ));

        if !stats.births_by_decade.is_empty() {
            summary.push_str("  Births by Decade:\n");
            for (decade, count) in &stats.births_by_decade {
                summary.push_str(&format!("    {decade}s: {count}\n"));
            }
        }

        if !stats.monthly_growth.is_empty() {
            summary.push_str("  Recent Monthly Growth:\n");
            for (month, count) in &stats.monthly_growth {
                summary.push_str(&format!("    {month}: {count}\n"));
            }
        }

        summary
    }
}

/// Aggregated register statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationStats {
    /// Total number of individuals
    pub total: usize,
    /// Number of male individuals
    pub male: usize,
    /// Number of female individuals
    pub female: usize,
    /// Number of individuals with no recorded death date
    pub living: usize,
    /// Birth counts per decade, ascending
    pub births_by_decade: Vec<(i32, usize)>,
    /// Record creation counts per "YYYY-MM" month, most recent 12 present
    pub monthly_growth: Vec<(String, usize)>,
}

impl PopulationStats {
    /// Male share of the register in percent
    #[must_use]
    pub fn male_percent(&self) -> f64 {
        Self::percent(self.male, self.total)
    }

    /// Female share of the register in percent
    #[must_use]
    pub fn female_percent(&self) -> f64 {
        Self::percent(self.female, self.total)
    }

    /// Living share of the register in percent
    #[must_use]
    pub fn living_percent(&self) -> f64 {
        Self::percent(self.living, self.total)
    }

    fn percent(part: usize, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            part as f64 / total as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::individual::Individual;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn person(id: i64, gender: Gender, birth_year: i32, created_month: u32) -> Individual {
        Individual::new(
            id,
            format!("Person {id}"),
            gender,
            NaiveDate::from_ymd_opt(birth_year, 4, 2).unwrap(),
        )
        .with_created_at(Utc.with_ymd_and_hms(2024, created_month, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn counts_and_percentages() {
        let collection = IndividualCollection::from_individuals(vec![
            person(1, Gender::Male, 1950, 1),
            person(2, Gender::Female, 1952, 1),
            person(3, Gender::Female, 1975, 2).with_death_date(
                NaiveDate::from_ymd_opt(2001, 8, 1).unwrap(),
            ),
            person(4, Gender::Unknown, 1980, 3),
        ]);
        let stats = FamilyStatistics::calculate(&collection);

        assert_eq!(stats.total, 4);
        assert_eq!(stats.male, 1);
        assert_eq!(stats.female, 2);
        assert_eq!(stats.living, 3);
        assert!((stats.male_percent() - 25.0).abs() < f64::EPSILON);
        assert!((stats.living_percent() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn births_group_into_ascending_decades() {
        let collection = IndividualCollection::from_individuals(vec![
            person(1, Gender::Male, 1959, 1),
            person(2, Gender::Female, 1950, 1),
            person(3, Gender::Female, 1975, 1),
        ]);
        let stats = FamilyStatistics::calculate(&collection);
        assert_eq!(stats.births_by_decade, vec![(1950, 2), (1970, 1)]);
    }

    #[test]
    fn growth_keeps_only_the_last_twelve_months() {
        let mut individuals = Vec::new();
        for month in 1..=12 {
            individuals.push(person(i64::from(month), Gender::Male, 1980, month));
        }
        // One record from the prior year must be dropped from the window
        individuals.push(
            person(13, Gender::Female, 1981, 1)
                .with_created_at(Utc.with_ymd_and_hms(2023, 11, 5, 9, 0, 0).unwrap()),
        );
        let collection = IndividualCollection::from_individuals(individuals);
        let stats = FamilyStatistics::calculate(&collection);

        assert_eq!(stats.monthly_growth.len(), 12);
        assert_eq!(stats.monthly_growth[0].0, "2024-01");
        assert_eq!(stats.monthly_growth[11].0, "2024-12");
    }

    #[test]
    fn empty_register_has_zero_percentages() {
        let stats = FamilyStatistics::calculate(&IndividualCollection::new());
        assert_eq!(stats.total, 0);
        assert!(stats.male_percent().abs() < f64::EPSILON);
        assert_eq!(
            FamilyStatistics::generate_summary(&stats),
            "Family Register Summary:\n  Total Individuals: 0\n  Male: 0 (0.0%)\n  Female: 0 (0.0%)\n  Living: 0 (0.0%)\n"
        );
    }

    #[test]
    fn summary_lists_decades() {
        let collection = IndividualCollection::from_individuals(vec![person(
            1,
            Gender::Male,
            1950,
            1,
        )]);
        let stats = FamilyStatistics::calculate(&collection);
        let summary = FamilyStatistics::generate_summary(&stats);
        assert!(summary.contains("  Births by Decade:\n    1950s: 1\n"));
        assert!(summary.contains("Total Individuals: 1"));
    }
}
