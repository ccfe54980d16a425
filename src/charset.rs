//! Ordered character sets.

/// An ordered, de-duplicated set of characters.
///
/// Unlike a membership bitmap, a `CharSet` remembers the order in which
/// characters were added. Generation walks the set in that order, so the
/// order determines the order candidates are emitted in.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct CharSet {
    chars: Vec<char>,
}

impl CharSet {
    /// Creates a new empty character set.
    #[must_use]
    pub const fn new() -> Self {
        CharSet { chars: Vec::new() }
    }

    /// The alphabet used by `.` and negated classes: `A`–`Z` then `0`–`9`.
    #[must_use]
    pub fn alphanumeric() -> Self {
        ('A'..='Z').chain('0'..='9').collect()
    }

    /// The alphabet used by `\d`.
    #[must_use]
    pub fn digits() -> Self {
        ('0'..='9').collect()
    }

    /// Adds `c` unless it is already present.
    pub fn add_char(&mut self, c: char) {
        if !self.contains(c) {
            self.chars.push(c);
        }
    }

    /// Returns every character of `alphabet` that is not in this set, in
    /// alphabet order.
    #[must_use]
    pub fn complement(&self, alphabet: &CharSet) -> CharSet {
        alphabet.iter().filter(|&c| !self.contains(c)).collect()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = CharSet::new();
        for c in iter {
            set.add_char(c);
        }
        set
    }
}

impl From<&str> for CharSet {
    fn from(value: &str) -> Self {
        value.chars().collect()
    }
}

impl From<char> for CharSet {
    fn from(value: char) -> Self {
        CharSet { chars: vec![value] }
    }
}
