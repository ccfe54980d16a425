/// A repetition suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    /// `+`: one or more, bounded by the remaining length budget.
    Plus,
}
