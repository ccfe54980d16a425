use super::{
    Error, MAX_GROUP_DEPTH, Result,
    ast::{Node, Pattern, Quantifier},
    charset::CharSet,
    lexer::{Lexer, PosToken, Token},
};

/// Parses a pattern string into a [`Pattern`], using the alphanumeric
/// alphabet for `.` and negated classes.
///
/// # Errors
///
/// If the pattern string cannot be parsed, an [`Error`] is returned.
pub fn parse_pattern(pattern: &str) -> Result<Pattern> {
    Parser::new(pattern).parse()
}

/// Converts a pattern string into a [`Pattern`].
///
/// Parsing is lenient about structure: an unterminated class or group runs
/// to the end of the pattern. Only bad escapes and excessive nesting are
/// rejected.
pub struct Parser {
    lexer: Lexer,
    alphabet: CharSet,
    depth: usize,
    max_depth: usize,
}

impl Parser {
    /// Creates a new parser for the given `pattern`.
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        Self::with_alphabet(pattern, CharSet::alphanumeric())
    }

    /// Creates a parser whose `.` and `[^...]` draw from `alphabet`.
    #[must_use]
    pub fn with_alphabet(pattern: &str, alphabet: CharSet) -> Self {
        Parser {
            lexer: Lexer::new(pattern),
            alphabet,
            depth: 0,
            max_depth: 0,
        }
    }

    /// Converts the pattern into a [`Pattern`], consuming the parser.
    ///
    /// # Errors
    ///
    /// If the pattern string is invalid, an [`Error`] is returned.
    pub fn parse(mut self) -> Result<Pattern> {
        // `)` and `|` are only lexed as such inside a group, so the top-level
        // sequence always runs to the end of the input.
        let nodes = self.parse_sequence()?;
        Ok(Pattern::new(nodes, self.max_depth))
    }

    fn parse_sequence(&mut self) -> Result<Vec<Node>> {
        let mut nodes = Vec::new();

        while let Some(PosToken { token, .. }) = self.lexer.peek()?
            && !matches!(token, Token::Pipe | Token::RParen)
        {
            self.parse_item(&mut nodes)?;
        }

        Ok(nodes)
    }

    fn parse_item(&mut self, nodes: &mut Vec<Node>) -> Result<()> {
        let Some(PosToken { pos, token }) = self.lexer.next_token()? else {
            return Ok(());
        };

        let node = match token {
            Token::Any => Node::Set(self.alphabet.clone()),
            Token::Digit => Node::Set(CharSet::digits()),
            Token::Backref(d) => Node::Backref(usize::from(d)),
            Token::Plus => Node::Quantifier(Quantifier::Plus),
            Token::LBracket => self.parse_set()?,
            Token::LParen => return self.parse_group(pos, nodes),
            Token::Literal(_)
            | Token::RParen
            | Token::Pipe
            | Token::RBracket
            | Token::Caret => Node::Set(CharSet::from(token.to_char())),
        };

        nodes.push(node);
        Ok(())
    }

    fn parse_set(&mut self) -> Result<Node> {
        let negated = self.lexer.consume(Token::Caret)?;

        let mut set = CharSet::new();
        while let Some(PosToken { token, .. }) = self.lexer.next_token()? {
            if token == Token::RBracket {
                break;
            }
            set.add_char(token.to_char());
        }

        if negated {
            set = set.complement(&self.alphabet);
        }

        Ok(Node::Set(set))
    }

    fn parse_group(&mut self, pos: usize, nodes: &mut Vec<Node>) -> Result<()> {
        self.depth += 1;
        let depth = self.depth;
        if depth > MAX_GROUP_DEPTH {
            return Err(Error::TooDeep { pos, depth });
        }
        self.max_depth = self.max_depth.max(depth);

        let mut alternatives = vec![self.parse_sequence()?];
        while self.lexer.consume(Token::Pipe)? {
            alternatives.push(self.parse_sequence()?);
        }
        self.lexer.consume(Token::RParen)?;

        self.depth -= 1;

        nodes.push(Node::GroupStart(depth));
        nodes.push(Node::Alternation(alternatives));
        nodes.push(Node::GroupEnd(depth));
        Ok(())
    }
}
