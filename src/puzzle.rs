//! Puzzle files, cross-referencing of candidates and letter ranking.
//!
//! A puzzle file holds one query per line: a pattern, a tab, and a comma
//! separated list of the positions its characters fill. Positions live in a
//! coordinate space shared by all queries, so a position listed by two
//! queries is a crossing that both must agree on.

use super::{Error, Result};
use std::{
    collections::{BTreeMap, BTreeSet, btree_map::Entry},
    path::Path,
    str::FromStr,
};

mod query;
mod tally;

pub use self::{query::Query, tally::Tally};

/// A cell coordinate shared by all queries of a puzzle.
pub type Position = i64;

/// How candidates are checked against each other at shared positions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Consistency {
    /// A candidate survives if any query can place its character at each
    /// checked position. Only fixed letters actually remove candidates.
    #[default]
    Any,
    /// A character is allowed at a position only if every query touching
    /// that position can place it there. Filtering repeats until stable.
    All,
}

#[derive(Debug, Default, Clone)]
pub struct SolveOptions {
    /// Positions whose letter is known in advance.
    pub fixed: BTreeMap<Position, char>,
    pub consistency: Consistency,
}

/// The queries of one puzzle.
#[derive(Debug, Default, Clone)]
pub struct Puzzle {
    queries: Vec<Query>,
}

type Allowed = BTreeMap<Position, BTreeSet<char>>;

impl Puzzle {
    #[must_use]
    pub fn new(queries: Vec<Query>) -> Self {
        Puzzle { queries }
    }

    /// Reads a puzzle file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        std::fs::read_to_string(path)?.parse()
    }

    #[must_use]
    pub fn queries(&self) -> &[Query] {
        &self.queries
    }

    /// Generates candidates for every query, cross-references them and
    /// tallies the survivors.
    pub fn solve(&mut self, options: &SolveOptions) -> Tally {
        self.generate();
        self.cross_reference(options);
        self.tally()
    }

    pub fn generate(&mut self) {
        for query in &mut self.queries {
            query.generate();
        }
    }

    /// Removes candidates that disagree at shared positions.
    pub fn cross_reference(&mut self, options: &SolveOptions) {
        let removed = match options.consistency {
            Consistency::Any => self.cross_reference_any(&options.fixed),
            Consistency::All => self.cross_reference_all(&options.fixed),
        };
        log::debug!("cross-referencing removed {removed} candidate(s)");
    }

    #[must_use]
    pub fn tally(&self) -> Tally {
        Tally::from_queries(&self.queries)
    }

    fn cross_reference_any(&mut self, fixed: &BTreeMap<Position, char>) -> usize {
        let mut allowed = Allowed::new();
        for query in &self.queries {
            for candidate in query.candidates() {
                for (pos, c) in query.cells(candidate) {
                    if fixed.get(&pos).is_some_and(|&f| f != c) {
                        continue;
                    }
                    allowed.entry(pos).or_default().insert(c);
                }
            }
        }

        // Only the first occurrence of a position within a query is checked.
        let mut removed = 0;
        for (pos, chars) in &allowed {
            for query in &mut self.queries {
                let Some(index) = query.positions().iter().position(|p| p == pos) else {
                    continue;
                };
                removed += query.retain(|_, candidate| {
                    candidate.chars().nth(index).is_some_and(|c| chars.contains(&c))
                });
            }
        }
        removed
    }

    fn cross_reference_all(&mut self, fixed: &BTreeMap<Position, char>) -> usize {
        let mut total = 0;
        loop {
            let allowed = self.allowed_by_all(fixed);
            let mut removed = 0;
            for query in &mut self.queries {
                removed += query.retain(|positions, candidate| {
                    positions
                        .iter()
                        .zip(candidate.chars())
                        .all(|(pos, c)| allowed.get(pos).is_none_or(|chars| chars.contains(&c)))
                });
            }
            if removed == 0 {
                return total;
            }
            total += removed;
        }
    }

    fn allowed_by_all(&self, fixed: &BTreeMap<Position, char>) -> Allowed {
        let mut allowed = Allowed::new();
        for query in &self.queries {
            if query.candidates().is_empty() {
                log::warn!("{}: no candidates, not used for cross-checking", query.source());
                continue;
            }

            let mut placed = Allowed::new();
            for candidate in query.candidates() {
                for (pos, c) in query.cells(candidate) {
                    placed.entry(pos).or_default().insert(c);
                }
            }

            for (pos, chars) in placed {
                match allowed.entry(pos) {
                    Entry::Vacant(entry) => {
                        entry.insert(chars);
                    }
                    Entry::Occupied(mut entry) => entry.get_mut().retain(|c| chars.contains(c)),
                }
            }
        }

        for (pos, &f) in fixed {
            if let Some(chars) = allowed.get_mut(pos) {
                chars.retain(|&c| c == f);
            }
        }
        allowed
    }
}

impl FromStr for Puzzle {
    type Err = Error;

    /// Parses puzzle text. Blank lines and lines starting with `#` are
    /// skipped; any malformed line fails the whole puzzle.
    fn from_str(s: &str) -> Result<Self> {
        let mut queries = Vec::new();

        for (index, line) in s.lines().enumerate() {
            let line_no = index + 1;
            if line.starts_with('#') || line.trim().is_empty() {
                continue;
            }

            let Some((pattern, positions)) = line.split_once('\t') else {
                return Err(Error::MissingPositions { line: line_no });
            };

            let positions = positions
                .trim_end()
                .split(',')
                .map(|value| {
                    value
                        .trim()
                        .parse::<Position>()
                        .map_err(|source| Error::InvalidPosition {
                            line: line_no,
                            value: value.to_owned(),
                            source,
                        })
                })
                .collect::<Result<Vec<_>>>()?;

            let query = Query::new(pattern, positions).map_err(|err| Error::Pattern {
                line: line_no,
                source: Box::new(err),
            })?;
            queries.push(query);
        }

        log::debug!("loaded {} queries", queries.len());
        Ok(Puzzle { queries })
    }
}

/// Parses a fixed letter written as `POS=CHAR`, e.g. `43=K`.
pub fn parse_fixed(value: &str) -> Result<(Position, char)> {
    let invalid = || Error::Config {
        what: "fixed letter",
        value: value.to_owned(),
    };

    let (pos, letter) = value.split_once('=').ok_or_else(invalid)?;
    let pos = pos.trim().parse().map_err(|_| invalid())?;
    let mut chars = letter.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok((pos, c)),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fixed() {
        assert_eq!(parse_fixed("43=K").unwrap(), (43, 'K'));
        assert_eq!(parse_fixed(" -2 = Q ").unwrap(), (-2, 'Q'));
        assert!(matches!(parse_fixed("43"), Err(Error::Config { .. })));
        assert!(matches!(parse_fixed("43=KI"), Err(Error::Config { .. })));
        assert!(matches!(parse_fixed("x=K"), Err(Error::Config { .. })));
    }

    #[test]
    fn test_from_str_skips_comments_and_blank_lines() {
        let puzzle: Puzzle = "# header\n\nAB\t1,2\r\n# another\nA.\t1,3\n".parse().unwrap();
        let queries = puzzle.queries();
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[0].source(), "AB");
        assert_eq!(queries[0].positions(), &[1, 2]);
        assert_eq!(queries[1].positions(), &[1, 3]);
    }
}
