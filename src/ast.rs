pub mod node;
pub mod quantifier;

pub use self::{node::Node, quantifier::Quantifier};

/// A parsed pattern.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Pattern {
    nodes: Vec<Node>,
    max_depth: usize,
}

impl Pattern {
    #[must_use]
    pub(crate) fn new(nodes: Vec<Node>, max_depth: usize) -> Self {
        Self { nodes, max_depth }
    }

    /// The deepest group nesting in the pattern, or 0 without groups.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl std::ops::Deref for Pattern {
    type Target = [Node];

    fn deref(&self) -> &Self::Target {
        &self.nodes
    }
}
