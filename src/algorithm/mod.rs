//! Core algorithms of the family graph engine
//!
//! Pure, synchronous transformations over materialized snapshots: candidate
//! validation, role description, subgraph construction, and register
//! statistics. None of them hold state or perform I/O.

pub mod describe;
pub mod statistics;
pub mod subgraph;
pub mod validate;

pub use describe::describe_relationship;
pub use statistics::{FamilyStatistics, PopulationStats};
pub use subgraph::{LineStyle, Position, Subgraph, TreeEdge, TreeNode, build_family_tree};
pub use validate::validate_relationship;
