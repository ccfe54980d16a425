//! Enumerates every string of an exact length that a [`Pattern`] can build.

use super::ast::{Node, Pattern};

mod state;

use state::State;

/// Calls `emit` once for every way of playing `pattern` that produces exactly
/// `target_len` characters.
///
/// The search is a depth-first backtrack over the node sequence. Any path
/// whose output grows past `target_len` is abandoned, which is what keeps
/// repetition bounded. A path that cannot continue (a backreference to a
/// group that has not been captured, a quantifier with nothing before it) is
/// dropped silently; generation itself never fails.
pub fn generate<F>(pattern: &Pattern, target_len: usize, mut emit: F)
where
    F: FnMut(&str),
{
    let seq: Vec<&Node> = pattern.iter().collect();
    generate_recursive(&seq, 0, State::default(), target_len, &mut emit);
}

/// Collects every candidate of `pattern` at `target_len` in emission order.
#[must_use]
pub fn candidates(pattern: &Pattern, target_len: usize) -> Vec<String> {
    let mut out = Vec::new();
    generate(pattern, target_len, |s| out.push(s.to_owned()));
    out
}

fn generate_recursive<'a, F>(
    seq: &[&'a Node],
    mut index: usize,
    mut state: State,
    target_len: usize,
    emit: &mut F,
) where
    F: FnMut(&str),
{
    loop {
        if state.len > target_len {
            return;
        }
        if state.len == target_len {
            if seq[index..].iter().all(|node| node.is_group_end()) {
                emit(&state.prefix);
            }
            return;
        }

        let Some(&node) = seq.get(index) else {
            return;
        };

        match node {
            Node::Set(set) => {
                for c in set.iter() {
                    let mut next = state.clone();
                    next.push(c);
                    generate_recursive(seq, index + 1, next, target_len, emit);
                }
                return;
            }
            Node::Alternation(alternatives) => {
                let rest = &seq[index + 1..];
                for alternative in alternatives {
                    let expanded: Vec<&Node> =
                        alternative.iter().chain(rest.iter().copied()).collect();
                    generate_recursive(&expanded, 0, state.clone(), target_len, emit);
                }
                return;
            }
            Node::Quantifier(_) => {
                // The preceding node has already been played once; add one or
                // more further copies of it. After a group that node is the
                // group end marker, so a quantified group repeats nothing.
                let Some(previous) = index.checked_sub(1).map(|i| seq[i]) else {
                    return;
                };
                let rest = &seq[index + 1..];
                for count in 1..=target_len - state.len {
                    let mut expanded = Vec::with_capacity(count + rest.len());
                    expanded.extend(std::iter::repeat_n(previous, count));
                    expanded.extend_from_slice(rest);
                    generate_recursive(&expanded, 0, state.clone(), target_len, emit);
                }
                return;
            }
            &Node::Backref(depth) => {
                if !state.replay(depth) {
                    return;
                }
            }
            &Node::GroupStart(depth) => state.open_group(depth),
            &Node::GroupEnd(depth) => {
                // An empty alternative puts its group end first; the group
                // stays unclosed, so backreferences to it fail.
                if index > 0 {
                    state.close_group(depth);
                }
            }
        }
        index += 1;
    }
}
