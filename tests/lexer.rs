use rxword::{
    Error, Result,
    lexer::{Lexer, token::Token},
};

fn lex_all(input: &str) -> Result<Vec<Token>> {
    Lexer::new(input).collect()
}

#[test]
fn test_basic_tokens_lexer() -> Result<()> {
    assert_eq!(
        lex_all("AB1")?,
        vec![Token::Literal('A'), Token::Literal('B'), Token::Literal('1')]
    );
    assert_eq!(
        lex_all("A.+")?,
        vec![Token::Literal('A'), Token::Any, Token::Plus]
    );
    assert_eq!(
        lex_all("(A|B)")?,
        vec![
            Token::LParen,
            Token::Literal('A'),
            Token::Pipe,
            Token::Literal('B'),
            Token::RParen
        ]
    );
    Ok(())
}

#[test]
fn test_context_sensitive_tokens_lexer() -> Result<()> {
    // Outside a group, `)` and `|` are plain characters.
    assert_eq!(
        lex_all("A|B)")?,
        vec![
            Token::Literal('A'),
            Token::Literal('|'),
            Token::Literal('B'),
            Token::Literal(')')
        ]
    );
    // Outside a class, `]` and `^` are plain characters.
    assert_eq!(lex_all("]^")?, vec![Token::Literal(']'), Token::Literal('^')]);
    Ok(())
}

#[test]
fn test_set_tokens_lexer() -> Result<()> {
    assert_eq!(
        lex_all("[^A^]")?,
        vec![
            Token::LBracket,
            Token::Caret,
            Token::Literal('A'),
            Token::Literal('^'),
            Token::RBracket
        ]
    );
    // Everything inside a class is literal.
    assert_eq!(
        lex_all("[.+(|\\]")?,
        vec![
            Token::LBracket,
            Token::Literal('.'),
            Token::Literal('+'),
            Token::Literal('('),
            Token::Literal('|'),
            Token::Literal('\\'),
            Token::RBracket
        ]
    );
    Ok(())
}

#[test]
fn test_escape_tokens_lexer() -> Result<()> {
    assert_eq!(
        lex_all("\\d\\1\\0")?,
        vec![Token::Digit, Token::Backref(1), Token::Backref(0)]
    );
    Ok(())
}

#[test]
fn test_invalid_escape_lexer() {
    assert!(matches!(
        lex_all("AB\\w"),
        Err(Error::InvalidEscape { pos: 2, lit: 'w' })
    ));
    assert!(matches!(
        lex_all("A\\"),
        Err(Error::TrailingEscape { pos: 1 })
    ));
    assert_eq!(
        Error::InvalidEscape { pos: 0, lit: 'x' }.to_string(),
        "invalid token: \\x at 0"
    );
}

#[test]
fn test_peek_and_consume_lexer() -> Result<()> {
    let mut lexer = Lexer::new("[^B]");
    assert_eq!(lexer.peek()?.map(|t| t.token), Some(Token::LBracket));
    assert_eq!(lexer.tell(), 0);
    assert!(lexer.consume(Token::LBracket)?);
    assert!(!lexer.consume(Token::RBracket)?);
    assert!(lexer.consume(Token::Caret)?);
    assert_eq!(lexer.next_token()?.map(|t| t.pos), Some(2));
    assert_eq!(lexer.tell(), 3);
    Ok(())
}
