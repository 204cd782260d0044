//! Configuration for family tree rendering output
//!
//! The subgraph builder attaches positions and styling hints to every node
//! and edge it emits. This module defines the layout anchors and palette
//! those hints are drawn from, with defaults matching the reference diagram.

/// Layout anchors and styling palette for a built family tree
///
/// Positions are logical 2-D coordinates handed to the rendering layer;
/// the renderer owns actual pixel placement, panning, and zooming.
#[derive(Debug, Clone)]
pub struct TreeConfig {
    /// Anchor position of the root node
    pub root_position: (f64, f64),
    /// Vertical position of the parent row
    pub parent_row_y: f64,
    /// Horizontal position of the first parent
    pub parent_row_x: f64,
    /// Horizontal spacing between parents
    pub parent_spacing: f64,
    /// Vertical position of the child row
    pub child_row_y: f64,
    /// Horizontal position of the first child
    pub child_row_x: f64,
    /// Horizontal spacing between children
    pub child_spacing: f64,
    /// Anchor position shared by spouse nodes
    pub spouse_position: (f64, f64),
    /// Node fill color for male individuals
    pub male_fill: &'static str,
    /// Node fill color for female and unrecognized genders
    pub default_fill: &'static str,
    /// Node border color
    pub node_border: &'static str,
    /// Stroke color for parent edges
    pub parent_stroke: &'static str,
    /// Stroke color for child edges
    pub child_stroke: &'static str,
    /// Stroke color for spouse edges
    pub spouse_stroke: &'static str,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            root_position: (400.0, 300.0),
            parent_row_y: 150.0,
            parent_row_x: 300.0,
            parent_spacing: 200.0,
            child_row_y: 450.0,
            child_row_x: 300.0,
            child_spacing: 150.0,
            spouse_position: (600.0, 300.0),
            male_fill: "#dbeafe",
            default_fill: "#fce7f3",
            node_border: "#6366f1",
            parent_stroke: "#6366f1",
            child_stroke: "#10b981",
            spouse_stroke: "#f59e0b",
        }
    }
}

impl TreeConfig {
    /// Create a new instance with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root anchor position
    #[must_use]
    pub const fn with_root_position(mut self, x: f64, y: f64) -> Self {
        self.root_position = (x, y);
        self
    }

    /// Set the spouse anchor position
    #[must_use]
    pub const fn with_spouse_position(mut self, x: f64, y: f64) -> Self {
        self.spouse_position = (x, y);
        self
    }

    /// Set the parent row placement (first x, y, spacing)
    #[must_use]
    pub const fn with_parent_row(mut self, x: f64, y: f64, spacing: f64) -> Self {
        self.parent_row_x = x;
        self.parent_row_y = y;
        self.parent_spacing = spacing;
        self
    }

    /// Set the child row placement (first x, y, spacing)
    #[must_use]
    pub const fn with_child_row(mut self, x: f64, y: f64, spacing: f64) -> Self {
        self.child_row_x = x;
        self.child_row_y = y;
        self.child_spacing = spacing;
        self
    }

    /// Set the node fill colors (male, fallback)
    #[must_use]
    pub const fn with_fills(mut self, male: &'static str, fallback: &'static str) -> Self {
        self.male_fill = male;
        self.default_fill = fallback;
        self
    }
}
