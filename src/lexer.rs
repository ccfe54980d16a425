use super::{Error, Result};

pub mod token;

pub use token::{PosToken, Token};

/// Splits a pattern string into [`Token`]s.
///
/// The lexer tracks whether it is inside a group or a bracket class, because
/// `)`, `|` and `]` are only special in those contexts and every character
/// of a class body is taken literally.
pub struct Lexer {
    input: Vec<char>,
    pos: usize,
    group_depth: usize,
    in_set: bool,
    set_start: bool,
    peeked: Option<PosToken>,
}

impl Lexer {
    #[must_use]
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            pos: 0,
            group_depth: 0,
            in_set: false,
            set_start: false,
            peeked: None,
        }
    }

    /// Returns the character index of the next unread input.
    #[must_use]
    pub fn tell(&self) -> usize {
        self.peeked.map_or(self.pos, |t| t.pos)
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.input.get(self.pos).copied();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> Result<Option<PosToken>> {
        if self.peeked.is_none() {
            self.peeked = self.lex()?;
        }
        Ok(self.peeked)
    }

    /// Consumes and returns the next token.
    pub fn next_token(&mut self) -> Result<Option<PosToken>> {
        match self.peeked.take() {
            Some(token) => Ok(Some(token)),
            None => self.lex(),
        }
    }

    /// Consumes the next token if it is `token`.
    pub fn consume(&mut self, token: Token) -> Result<bool> {
        if self.peek()?.is_some_and(|t| t.token == token) {
            self.peeked = None;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn lex(&mut self) -> Result<Option<PosToken>> {
        let pos = self.pos;
        let Some(c) = self.advance() else {
            return Ok(None);
        };

        let token = if self.in_set {
            let at_start = std::mem::take(&mut self.set_start);
            match c {
                '^' if at_start => Token::Caret,
                ']' => {
                    self.in_set = false;
                    Token::RBracket
                }
                _ => Token::Literal(c),
            }
        } else {
            match c {
                '(' => {
                    self.group_depth += 1;
                    Token::LParen
                }
                ')' if self.group_depth > 0 => {
                    self.group_depth -= 1;
                    Token::RParen
                }
                '|' if self.group_depth > 0 => Token::Pipe,
                '.' => Token::Any,
                '[' => {
                    self.in_set = true;
                    self.set_start = true;
                    Token::LBracket
                }
                '+' => Token::Plus,
                '\\' => match self.advance() {
                    None => return Err(Error::TrailingEscape { pos }),
                    Some('d') => Token::Digit,
                    Some(d @ '0'..='9') => Token::Backref(d as u8 - b'0'),
                    Some(lit) => return Err(Error::InvalidEscape { pos, lit }),
                },
                _ => Token::Literal(c),
            }
        };

        Ok(Some(PosToken { pos, token }))
    }
}

impl Iterator for Lexer {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(Some(t)) => Some(Ok(t.token)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
