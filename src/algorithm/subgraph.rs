//! Family tree subgraph construction
//!
//! Expands one root individual into the bounded node/edge lists consumed by
//! the diagram renderer: the root, its parents, its children, and spouses,
//! one hop out and no further (no grandparents, no in-laws). Every build is
//! a pure pass over the materialized snapshots; nothing is cached between
//! selections.

use crate::collections::{IndividualCollection, RelationshipCollection};
use crate::config::TreeConfig;
use crate::error::{KinGraphError, Result};
use crate::models::individual::Individual;
use crate::models::relationship::Relationship;
use crate::models::types::{Gender, RelationshipKind};
use chrono::Datelike;
use log::{debug, warn};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::sync::Arc;

/// Logical 2-D position hint for a node
///
/// Coordinates are handed through to the rendering layer, which owns actual
/// pixel placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

/// Line style tag for an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    /// Stepped connector used for parent and child edges
    Smoothstep,
    /// Straight connector used for spouse edges
    Straight,
}

/// A renderable node wrapping one individual
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Stable string identity (the individual's decimal id)
    pub id: String,
    /// Display label: name plus birth year, or year range when deceased
    pub label: String,
    /// Logical position hint
    pub position: Position,
    /// Fill color keyed by gender
    pub fill: String,
    /// Border color
    pub border: String,
}

/// A renderable edge between two node ids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeEdge {
    /// Stable identity derived from the relationship row
    pub id: String,
    /// Source node id
    pub source: String,
    /// Target node id
    pub target: String,
    /// Role label: "parent", "child", or "spouse"
    pub label: String,
    /// Line style tag
    pub line: LineStyle,
    /// Stroke color keyed by role
    pub stroke: String,
}

/// Bounded one-hop family subgraph around a root individual
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subgraph {
    /// Emitted nodes, root first
    pub nodes: Vec<TreeNode>,
    /// Emitted edges: parents, then children, then spouses
    pub edges: Vec<TreeEdge>,
}

impl Subgraph {
    /// Look up an emitted node by id
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&TreeNode> {
        self.nodes.iter().find(|node| node.id == id)
    }
}

/// Build the one-hop family subgraph around `root_id`
///
/// Node emission is idempotent: an individual reachable through several
/// relationship rows appears exactly once, while every resolvable row still
/// contributes its edge. Rows referencing unknown individuals are treated
/// as stale, logged at warn level, and skipped; a partial graph is always
/// preferred over no graph. Spouse relationships whose two parties are both
/// already in the picture (the root's married parents) contribute an edge
/// between the existing nodes without pulling anyone else in.
pub fn build_family_tree(
    root_id: i64,
    individuals: &IndividualCollection,
    relationships: &RelationshipCollection,
    config: &TreeConfig,
) -> Result<Subgraph> {
    let root = individuals
        .get(root_id)
        .ok_or(KinGraphError::UnknownIndividual(root_id))?;
    debug!("building family tree around individual {root_id}");

    // Single-pass partition over the snapshot; rows arrive ordered by id so
    // ordinal position assignment stays deterministic.
    let mut parent_rows: SmallVec<[Arc<Relationship>; 2]> = SmallVec::new();
    let mut child_rows: SmallVec<[Arc<Relationship>; 4]> = SmallVec::new();
    let mut spouse_rows: SmallVec<[Arc<Relationship>; 2]> = SmallVec::new();
    let mut linked_spouse_rows: Vec<Arc<Relationship>> = Vec::new();

    for rel in relationships.all() {
        if rel.kind == RelationshipKind::Parent && rel.person2_id == root_id {
            parent_rows.push(rel);
        } else if rel.kind == RelationshipKind::Parent && rel.person1_id == root_id {
            child_rows.push(rel);
        } else if rel.kind == RelationshipKind::Spouse {
            if rel.involves(root_id) {
                spouse_rows.push(rel);
            } else {
                linked_spouse_rows.push(rel);
            }
        }
    }

    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    let mut visited = FxHashSet::default();

    emit_node(
        &mut nodes,
        &mut visited,
        &root,
        config.root_position.0,
        config.root_position.1,
        config,
    );

    // Parents above the root. The ordinal index runs over matched rows, so
    // a skipped stale row leaves a gap instead of shifting its siblings.
    for (index, rel) in parent_rows.iter().enumerate() {
        if let Some(parent) = individuals.get(rel.person1_id) {
            let x = config.parent_row_x + index as f64 * config.parent_spacing;
            emit_node(&mut nodes, &mut visited, &parent, x, config.parent_row_y, config);
            edges.push(TreeEdge {
                id: format!("parent-{}", rel.id),
                source: parent.id.to_string(),
                target: root.id.to_string(),
                label: "parent".to_string(),
                line: LineStyle::Smoothstep,
                stroke: config.parent_stroke.to_string(),
            });
        } else {
            warn!(
                "skipping parent relationship {}: unknown individual {}",
                rel.id, rel.person1_id
            );
        }
    }

    // Children below the root
    for (index, rel) in child_rows.iter().enumerate() {
        if let Some(child) = individuals.get(rel.person2_id) {
            let x = config.child_row_x + index as f64 * config.child_spacing;
            emit_node(&mut nodes, &mut visited, &child, x, config.child_row_y, config);
            edges.push(TreeEdge {
                id: format!("child-{}", rel.id),
                source: root.id.to_string(),
                target: child.id.to_string(),
                label: "child".to_string(),
                line: LineStyle::Smoothstep,
                stroke: config.child_stroke.to_string(),
            });
        } else {
            warn!(
                "skipping child relationship {}: unknown individual {}",
                rel.id, rel.person2_id
            );
        }
    }

    // Spouses beside the root
    for rel in &spouse_rows {
        let other_id = if rel.person1_id == root_id {
            rel.person2_id
        } else {
            rel.person1_id
        };
        if let Some(spouse) = individuals.get(other_id) {
            emit_node(
                &mut nodes,
                &mut visited,
                &spouse,
                config.spouse_position.0,
                config.spouse_position.1,
                config,
            );
            edges.push(spouse_edge(rel, config));
        } else {
            warn!(
                "skipping spouse relationship {}: unknown individual {other_id}",
                rel.id
            );
        }
    }

    // Marriages already inside the picture, linked without adding nodes
    for rel in &linked_spouse_rows {
        if visited.contains(&rel.person1_id) && visited.contains(&rel.person2_id) {
            edges.push(spouse_edge(rel, config));
        }
    }

    Ok(Subgraph { nodes, edges })
}

/// Spouse edges follow the stored row direction; the relation is symmetric
/// and the direction is presentational only.
fn spouse_edge(rel: &Relationship, config: &TreeConfig) -> TreeEdge {
    TreeEdge {
        id: format!("spouse-{}", rel.id),
        source: rel.person1_id.to_string(),
        target: rel.person2_id.to_string(),
        label: "spouse".to_string(),
        line: LineStyle::Straight,
        stroke: config.spouse_stroke.to_string(),
    }
}

fn emit_node(
    nodes: &mut Vec<TreeNode>,
    visited: &mut FxHashSet<i64>,
    person: &Individual,
    x: f64,
    y: f64,
    config: &TreeConfig,
) {
    if !visited.insert(person.id) {
        return;
    }
    let fill = if person.gender == Gender::Male {
        config.male_fill
    } else {
        config.default_fill
    };
    nodes.push(TreeNode {
        id: person.id.to_string(),
        label: node_label(person),
        position: Position { x, y },
        fill: fill.to_string(),
        border: config.node_border.to_string(),
    });
}

fn node_label(person: &Individual) -> String {
    match person.death_date {
        Some(death) => format!(
            "{}\n({}-{})",
            person.full_name,
            person.birth_year(),
            death.year()
        ),
        None => format!("{}\n({})", person.full_name, person.birth_year()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn birth(year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, 6, 1).unwrap()
    }

    fn person(id: i64, name: &str, gender: Gender, year: i32) -> Individual {
        Individual::new(id, name, gender, birth(year))
    }

    #[test]
    fn unknown_root_is_an_error() {
        let individuals = IndividualCollection::new();
        let relationships = RelationshipCollection::new();
        let result = build_family_tree(7, &individuals, &relationships, &TreeConfig::default());
        assert!(matches!(result, Err(KinGraphError::UnknownIndividual(7))));
    }

    #[test]
    fn lone_root_yields_single_anchored_node() {
        let individuals = IndividualCollection::from_individuals(vec![person(
            1,
            "Wang Lei",
            Gender::Male,
            1950,
        )]);
        let relationships = RelationshipCollection::new();
        let graph =
            build_family_tree(1, &individuals, &relationships, &TreeConfig::default()).unwrap();

        assert_eq!(graph.nodes.len(), 1);
        assert!(graph.edges.is_empty());
        let node = &graph.nodes[0];
        assert_eq!(node.id, "1");
        assert_eq!(node.label, "Wang Lei\n(1950)");
        assert_eq!(node.position, Position { x: 400.0, y: 300.0 });
        assert_eq!(node.fill, "#dbeafe");
    }

    #[test]
    fn duplicate_rows_to_same_parent_emit_one_node_and_two_edges() {
        let individuals = IndividualCollection::from_individuals(vec![
            person(1, "Wang Lei", Gender::Male, 1950),
            person(2, "Wang Fang", Gender::Female, 1975),
        ]);
        let relationships = RelationshipCollection::from_relationships(vec![
            Relationship::new(1, 1, 2, RelationshipKind::Parent),
            Relationship::new(2, 1, 2, RelationshipKind::Parent),
        ]);
        let graph =
            build_family_tree(2, &individuals, &relationships, &TreeConfig::default()).unwrap();

        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges.len(), 2);
        assert_eq!(graph.edges[0].id, "parent-1");
        assert_eq!(graph.edges[1].id, "parent-2");
    }

    #[test]
    fn stale_row_is_skipped_but_keeps_sibling_ordinals() {
        let individuals = IndividualCollection::from_individuals(vec![
            person(2, "Li Na", Gender::Female, 1952),
            person(3, "Wang Fang", Gender::Female, 1975),
        ]);
        // Row 1 references a deleted parent; row 2 still lands at the
        // second parent slot
        let relationships = RelationshipCollection::from_relationships(vec![
            Relationship::new(1, 99, 3, RelationshipKind::Parent),
            Relationship::new(2, 2, 3, RelationshipKind::Parent),
        ]);
        let graph =
            build_family_tree(3, &individuals, &relationships, &TreeConfig::default()).unwrap();

        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges.len(), 1);
        let mother = graph.node("2").unwrap();
        assert_eq!(mother.position, Position { x: 500.0, y: 150.0 });
    }

    #[test]
    fn deceased_individuals_label_with_year_range() {
        let deceased = person(1, "Li Na", Gender::Female, 1920)
            .with_death_date(NaiveDate::from_ymd_opt(1999, 1, 2).unwrap());
        let individuals = IndividualCollection::from_individuals(vec![deceased]);
        let relationships = RelationshipCollection::new();
        let graph =
            build_family_tree(1, &individuals, &relationships, &TreeConfig::default()).unwrap();

        assert_eq!(graph.nodes[0].label, "Li Na\n(1920-1999)");
        assert_eq!(graph.nodes[0].fill, "#fce7f3");
    }

    #[test]
    fn spouse_edge_follows_stored_direction() {
        let individuals = IndividualCollection::from_individuals(vec![
            person(1, "Wang Lei", Gender::Male, 1950),
            person(2, "Li Na", Gender::Female, 1952),
        ]);
        // Stored as (2, 1): building from 1 must keep 2 as the source
        let relationships = RelationshipCollection::from_relationships(vec![Relationship::new(
            1,
            2,
            1,
            RelationshipKind::Spouse,
        )]);
        let graph =
            build_family_tree(1, &individuals, &relationships, &TreeConfig::default()).unwrap();

        assert_eq!(graph.edges.len(), 1);
        let edge = &graph.edges[0];
        assert_eq!(edge.source, "2");
        assert_eq!(edge.target, "1");
        assert_eq!(edge.line, LineStyle::Straight);
        assert_eq!(graph.node("2").unwrap().position, Position { x: 600.0, y: 300.0 });
    }

    #[test]
    fn marriages_outside_the_picture_are_ignored() {
        let individuals = IndividualCollection::from_individuals(vec![
            person(1, "Wang Lei", Gender::Male, 1950),
            person(5, "Zhou Min", Gender::Female, 1960),
            person(6, "Sun Tao", Gender::Male, 1958),
        ]);
        // A marriage between two strangers must not leak into the build
        let relationships = RelationshipCollection::from_relationships(vec![Relationship::new(
            1,
            5,
            6,
            RelationshipKind::Spouse,
        )]);
        let graph =
            build_family_tree(1, &individuals, &relationships, &TreeConfig::default()).unwrap();

        assert_eq!(graph.nodes.len(), 1);
        assert!(graph.edges.is_empty());
    }
}
