use crate::MAX_GROUP_DEPTH;

/// The byte offsets captured for one group depth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capture {
    pub start: Option<usize>,
    pub end: Option<usize>,
}

/// Everything one generation path carries. Cloned at every branch so sibling
/// paths never see each other's captures.
#[derive(Clone, Debug, Default)]
pub struct State {
    pub prefix: String,
    /// Length of `prefix` in characters.
    pub len: usize,
    pub captures: [Capture; MAX_GROUP_DEPTH + 1],
}

impl State {
    pub fn push(&mut self, c: char) {
        self.prefix.push(c);
        self.len += 1;
    }

    pub fn open_group(&mut self, depth: usize) {
        if let Some(capture) = self.captures.get_mut(depth) {
            *capture = Capture {
                start: Some(self.prefix.len()),
                end: None,
            };
        }
    }

    pub fn close_group(&mut self, depth: usize) {
        if let Some(capture) = self.captures.get_mut(depth) {
            capture.end = Some(self.prefix.len());
        }
    }

    /// Appends the text captured at `depth` again. Returns `false` if the
    /// group has not been both opened and closed on this path.
    pub fn replay(&mut self, depth: usize) -> bool {
        let Some(&Capture {
            start: Some(start),
            end: Some(end),
        }) = self.captures.get(depth)
        else {
            return false;
        };
        let Some(text) = self.prefix.get(start..end) else {
            return false;
        };

        let text = text.to_owned();
        self.len += text.chars().count();
        self.prefix.push_str(&text);
        true
    }
}
