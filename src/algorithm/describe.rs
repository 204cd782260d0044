//! Role descriptions for relationships
//!
//! Maps a relationship row plus the two individuals' genders into a
//! natural-language description. Pure function of its inputs: the same
//! arguments always yield the same string, so callers can cache and tests
//! can assert exact output.

use crate::models::individual::Individual;
use crate::models::relationship::Relationship;
use crate::models::types::{Gender, RelationshipKind};

/// Describe a relationship in natural language
///
/// For `parent`, the role word follows person1's gender, with a neutral
/// "a parent of" when the gender is outside the two recognized values.
/// Unrecognized genders are expected input from the free-text data layer,
/// never an error. For `spouse`, husband/wife is used only when exactly one
/// side is male; otherwise the neutral spouse phrasing. Unrecognized kinds
/// get a generic rendering so future kinds degrade gracefully.
#[must_use]
pub fn describe_relationship(
    relationship: &Relationship,
    person1: &Individual,
    person2: &Individual,
) -> String {
    match &relationship.kind {
        RelationshipKind::Parent => match person1.gender {
            Gender::Male => format!(
                "{} is the father of {}",
                person1.full_name, person2.full_name
            ),
            Gender::Female => format!(
                "{} is the mother of {}",
                person1.full_name, person2.full_name
            ),
            Gender::Unknown => format!(
                "{} is a parent of {}",
                person1.full_name, person2.full_name
            ),
        },
        RelationshipKind::Spouse => {
            let first_is_male = person1.gender == Gender::Male;
            let second_is_male = person2.gender == Gender::Male;
            if first_is_male && !second_is_male {
                format!(
                    "{} is the husband of {}",
                    person1.full_name, person2.full_name
                )
            } else if !first_is_male && second_is_male {
                format!("{} is the wife of {}", person1.full_name, person2.full_name)
            } else {
                format!(
                    "{} and {} are spouses",
                    person1.full_name, person2.full_name
                )
            }
        }
        RelationshipKind::Other(kind) => {
            format!("{} and {}: {}", person1.full_name, person2.full_name, kind)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn person(id: i64, name: &str, gender: Gender) -> Individual {
        Individual::new(
            id,
            name,
            gender,
            NaiveDate::from_ymd_opt(1950, 1, 1).unwrap(),
        )
    }

    fn rel(kind: RelationshipKind) -> Relationship {
        Relationship::new(1, 1, 2, kind)
    }

    #[test]
    fn parent_role_follows_person1_gender() {
        let child = person(2, "Wang Fang", Gender::Female);

        let father = person(1, "Wang Lei", Gender::Male);
        assert_eq!(
            describe_relationship(&rel(RelationshipKind::Parent), &father, &child),
            "Wang Lei is the father of Wang Fang"
        );

        let mother = person(1, "Li Na", Gender::Female);
        assert_eq!(
            describe_relationship(&rel(RelationshipKind::Parent), &mother, &child),
            "Li Na is the mother of Wang Fang"
        );
    }

    #[test]
    fn unrecognized_gender_uses_neutral_parent_phrasing() {
        let parent = person(1, "Lin Qing", Gender::Unknown);
        let child = person(2, "Lin Yu", Gender::Male);
        assert_eq!(
            describe_relationship(&rel(RelationshipKind::Parent), &parent, &child),
            "Lin Qing is a parent of Lin Yu"
        );
    }

    #[test]
    fn spouse_roles_require_exactly_one_male() {
        let husband = person(1, "Wang Lei", Gender::Male);
        let wife = person(2, "Li Na", Gender::Female);

        assert_eq!(
            describe_relationship(&rel(RelationshipKind::Spouse), &husband, &wife),
            "Wang Lei is the husband of Li Na"
        );
        assert_eq!(
            describe_relationship(&rel(RelationshipKind::Spouse), &wife, &husband),
            "Li Na is the wife of Wang Lei"
        );
    }

    #[test]
    fn ambiguous_spouse_genders_use_neutral_phrasing() {
        let a = person(1, "Chen Hao", Gender::Male);
        let b = person(2, "Liu Yang", Gender::Male);
        assert_eq!(
            describe_relationship(&rel(RelationshipKind::Spouse), &a, &b),
            "Chen Hao and Liu Yang are spouses"
        );

        let c = person(1, "Xu Jing", Gender::Unknown);
        let d = person(2, "Zhao Min", Gender::Female);
        assert_eq!(
            describe_relationship(&rel(RelationshipKind::Spouse), &c, &d),
            "Xu Jing and Zhao Min are spouses"
        );
    }

    #[test]
    fn unrecognized_kind_renders_generically() {
        let a = person(1, "Wang Lei", Gender::Male);
        let b = person(2, "Wang Fang", Gender::Female);
        assert_eq!(
            describe_relationship(
                &rel(RelationshipKind::Other("godparent".into())),
                &a,
                &b
            ),
            "Wang Lei and Wang Fang: godparent"
        );
    }

    #[test]
    fn description_is_deterministic() {
        let a = person(1, "Wang Lei", Gender::Male);
        let b = person(2, "Li Na", Gender::Female);
        let relationship = rel(RelationshipKind::Spouse);
        let first = describe_relationship(&relationship, &a, &b);
        let second = describe_relationship(&relationship, &a, &b);
        assert_eq!(first, second);
    }
}
