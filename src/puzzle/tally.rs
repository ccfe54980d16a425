use super::{Position, Query};
use std::collections::BTreeMap;

/// Per position, how many surviving candidates put each character there.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tally {
    counts: BTreeMap<Position, BTreeMap<char, usize>>,
}

impl Tally {
    /// Counts the characters of every remaining candidate of `queries`.
    pub fn from_queries<'a>(queries: impl IntoIterator<Item = &'a Query>) -> Self {
        let mut tally = Tally::default();
        for query in queries {
            for candidate in query.candidates() {
                for (pos, c) in query.cells(candidate) {
                    *tally.counts.entry(pos).or_default().entry(c).or_default() += 1;
                }
            }
        }
        tally
    }

    #[must_use]
    pub fn count(&self, pos: Position, c: char) -> usize {
        self.counts
            .get(&pos)
            .and_then(|chars| chars.get(&c))
            .copied()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn counts(&self, pos: Position) -> Option<&BTreeMap<char, usize>> {
        self.counts.get(&pos)
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.counts.keys().copied()
    }

    /// The most frequent character at `pos`. Ties go to the lowest character.
    #[must_use]
    pub fn top(&self, pos: Position) -> Option<char> {
        let mut best: Option<(char, usize)> = None;
        for (&c, &count) in self.counts.get(&pos)? {
            if best.is_none_or(|(_, n)| count > n) {
                best = Some((c, count));
            }
        }
        best.map(|(c, _)| c)
    }

    /// The top character of every tallied position.
    #[must_use]
    pub fn ranking(&self) -> BTreeMap<Position, char> {
        self.positions()
            .filter_map(|pos| Some((pos, self.top(pos)?)))
            .collect()
    }
}
