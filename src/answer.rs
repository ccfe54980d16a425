//! Rendering the ranked letters as an answer string.

use super::{Error, Position, Result};
use std::{collections::BTreeMap, str::FromStr};

/// The widest `a-b` range a layout may use.
pub const MAX_RANGE_SPAN: Position = 10_000;

/// Which positions make up the answer, in groups printed space-separated.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Layout {
    groups: Vec<Vec<Position>>,
}

impl Layout {
    #[must_use]
    pub fn new(groups: Vec<Vec<Position>>) -> Self {
        Layout { groups }
    }

    /// A single group of every ranked position, in ascending order.
    #[must_use]
    pub fn all(ranking: &BTreeMap<Position, char>) -> Self {
        Layout {
            groups: vec![ranking.keys().copied().collect()],
        }
    }

    #[must_use]
    pub fn groups(&self) -> &[Vec<Position>] {
        &self.groups
    }

    /// Concatenates the top letter of each position. A position without a
    /// ranked letter shows as `?`.
    #[must_use]
    pub fn render(&self, ranking: &BTreeMap<Position, char>) -> String {
        self.groups
            .iter()
            .map(|group| {
                group
                    .iter()
                    .map(|pos| ranking.get(pos).copied().unwrap_or('?'))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl FromStr for Layout {
    type Err = Error;

    /// Parses groups separated by whitespace. Within a group, positions are
    /// separated by commas and `a-b` stands for every position from `a` to
    /// `b` inclusive.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::Config {
            what: "layout",
            value: s.to_owned(),
        };

        let mut groups = Vec::new();
        for word in s.split_whitespace() {
            let mut group = Vec::new();
            for entry in word.split(',') {
                // Skip the first character so a leading minus sign is not
                // taken for a range.
                let dash = entry
                    .char_indices()
                    .skip(1)
                    .find_map(|(i, c)| (c == '-').then_some(i));

                match dash {
                    Some(i) => {
                        let start: Position = entry[..i].parse().map_err(|_| invalid())?;
                        let end: Position = entry[i + 1..].parse().map_err(|_| invalid())?;
                        let span = end.checked_sub(start).ok_or_else(invalid)?;
                        if !(0..MAX_RANGE_SPAN).contains(&span) {
                            return Err(invalid());
                        }
                        group.extend(start..=end);
                    }
                    None => group.push(entry.parse().map_err(|_| invalid())?),
                }
            }
            groups.push(group);
        }

        if groups.is_empty() {
            return Err(invalid());
        }
        Ok(Layout { groups })
    }
}
