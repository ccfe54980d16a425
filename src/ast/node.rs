use super::{super::CharSet, Quantifier};

/// One element of a parsed pattern.
///
/// A pattern is a flat sequence of nodes. Groups are not nested nodes but a
/// `GroupStart`/`GroupEnd` pair around an [`Node::Alternation`], and a
/// quantifier applies to whatever item precedes it in the sequence.
#[derive(Clone, PartialEq, Debug)]
pub enum Node {
    /// Exactly one output character, drawn from the set.
    Set(CharSet),

    // Group markers, labelled by nesting depth (1-based). Sibling groups at
    // the same depth share a label and overwrite each other's capture.
    GroupStart(usize),
    GroupEnd(usize),

    /// The body of a group: one alternative is chosen per path.
    Alternation(Vec<Vec<Node>>),

    /// Repeats the preceding item.
    Quantifier(Quantifier),

    /// `\1`..`\9`: replays the text captured by the group at that depth.
    Backref(usize),
}

impl Node {
    /// Returns `true` for nodes that may remain unconsumed once the target
    /// length has been reached.
    #[must_use]
    pub const fn is_group_end(&self) -> bool {
        matches!(self, Node::GroupEnd(_))
    }
}
