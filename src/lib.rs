//! Generates every fixed-length string a small regex-like pattern can produce,
//! and cross-checks candidates of several patterns that share positions, as
//! used to solve regex crossword puzzles.
//!
//! # Pattern syntax
//!
//! | Token      | Meaning                                          |
//! |------------|--------------------------------------------------|
//! | `X`        | The literal character `X`                        |
//! | `.`        | Any character of the alphabet (`A`–`Z`, `0`–`9`) |
//! | `[XYZ]`    | One of the listed characters                     |
//! | `[^XYZ]`   | Any alphabet character except the listed ones    |
//! | `\d`       | A digit                                          |
//! | `(A\|B)`   | Group with alternation                           |
//! | `X+`       | `X`, then one or more further copies of `X`      |
//! | `\1`..`\9` | The text captured by the group at that depth     |

#![warn(clippy::pedantic, rust_2018_idioms)]
#![allow(clippy::missing_errors_doc, clippy::too_many_lines)]

pub mod answer;
pub mod ast;
pub mod charset;
pub mod generator;
pub mod lexer;
pub mod parser;
pub mod puzzle;

pub use self::{
    answer::Layout,
    ast::{Node, Pattern, Quantifier},
    charset::CharSet,
    generator::{candidates, generate},
    lexer::{Lexer, Token},
    parser::{Parser, parse_pattern},
    puzzle::{Consistency, Position, Puzzle, Query, SolveOptions, Tally},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The pattern contains an unrecognised escape sequence.
    #[error("invalid token: \\{lit} at {pos}")]
    InvalidEscape { pos: usize, lit: char },

    /// The pattern ends with a lone backslash.
    #[error("malformed pattern (ends with '\\') at {pos}")]
    TrailingEscape { pos: usize },

    /// Groups are nested deeper than backreferences can address.
    #[error("groups nested too deeply ({depth} > {MAX_GROUP_DEPTH}) at {pos}")]
    TooDeep { pos: usize, depth: usize },

    /// A puzzle line has no tab-separated position list.
    #[error("line {line}: missing position list")]
    MissingPositions { line: usize },

    /// A puzzle line has a position that is not an integer.
    #[error("line {line}: invalid position '{value}'")]
    InvalidPosition {
        line: usize,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// A puzzle line has a pattern that does not parse.
    #[error("line {line}: {source}")]
    Pattern {
        line: usize,
        #[source]
        source: Box<Error>,
    },

    /// An answer layout or fixed letter could not be parsed.
    #[error("invalid {what} '{value}'")]
    Config { what: &'static str, value: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// The deepest group nesting a pattern may use. Groups are addressed by
/// depth, and a backreference is a single digit.
pub const MAX_GROUP_DEPTH: usize = 9;
