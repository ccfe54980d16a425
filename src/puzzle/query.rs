use super::Position;
use crate::{Pattern, Result, generator, parse_pattern};

/// One pattern of a puzzle together with the positions its characters fill.
#[derive(Debug, Clone)]
pub struct Query {
    source: String,
    pattern: Pattern,
    positions: Vec<Position>,
    pub(super) candidates: Vec<String>,
}

impl Query {
    /// Parses `pattern` for a run of cells at `positions`.
    pub fn new(pattern: &str, positions: Vec<Position>) -> Result<Self> {
        Ok(Query {
            source: pattern.to_owned(),
            pattern: parse_pattern(pattern)?,
            positions,
            candidates: Vec::new(),
        })
    }

    /// The pattern as written.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Every candidate must be exactly this long.
    #[must_use]
    pub fn target_len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Replaces the candidate list with every string the pattern generates.
    pub fn generate(&mut self) {
        let mut candidates = Vec::new();
        generator::generate(&self.pattern, self.target_len(), |s| {
            candidates.push(s.to_owned());
        });
        log::debug!(
            "{}: {} candidate(s) of length {}",
            self.source,
            candidates.len(),
            self.target_len()
        );
        self.candidates = candidates;
    }

    /// Pairs each position with the character `candidate` puts there.
    pub fn cells<'a>(&'a self, candidate: &'a str) -> impl Iterator<Item = (Position, char)> + 'a {
        self.positions.iter().copied().zip(candidate.chars())
    }

    /// Keeps only the candidates for which `keep` returns `true`, returning
    /// how many were removed.
    pub(super) fn retain(&mut self, mut keep: impl FnMut(&[Position], &str) -> bool) -> usize {
        let before = self.candidates.len();
        let positions = &self.positions;
        self.candidates.retain(|candidate| keep(positions, candidate));
        let removed = before - self.candidates.len();
        if removed > 0 {
            log::trace!("{}: removed {removed} candidate(s)", self.source);
        }
        removed
    }
}
