/// A pattern string token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A character matched as itself.
    Literal(char),
    /// `.`
    Any,
    /// `\d`
    Digit,
    /// `\0` ... `\9`.
    Backref(u8),
    /// `(`
    LParen,
    /// `)`. Only produced inside a group; a stray `)` is a literal.
    RParen,
    /// `|`. Only produced inside a group; a stray `|` is a literal.
    Pipe,
    /// `[`
    LBracket,
    /// `]`. Only produced inside a class.
    RBracket,
    /// `^` directly after `[`.
    Caret,
    /// `+`
    Plus,
}

impl Token {
    /// Returns the character the token was lexed from.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Token::Literal(c) => c,
            Token::Any => '.',
            Token::Digit => 'd',
            Token::Backref(d) => (b'0' + d) as char,
            Token::LParen => '(',
            Token::RParen => ')',
            Token::Pipe => '|',
            Token::LBracket => '[',
            Token::RBracket => ']',
            Token::Caret => '^',
            Token::Plus => '+',
        }
    }
}

/// A [`Token`] with associated position information.
#[derive(Clone, Copy, Debug, Eq)]
pub struct PosToken {
    /// The character index of the token in the pattern string.
    pub pos: usize,
    /// The token.
    pub token: Token,
}

impl core::ops::Deref for PosToken {
    type Target = Token;

    fn deref(&self) -> &Self::Target {
        &self.token
    }
}

impl PartialEq for PosToken {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}
