use std::fmt;

use logos::Logos;

/// Represents a lexical token in one line of input.
///
/// Every punctuation character is a token of its own. Any other run of
/// characters up to the next space or punctuation character is a
/// [`Token::Word`]; whether a word is a number, a keyword or a matrix name is
/// decided by the parser.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `!`
    #[token("!")]
    Bang,
    /// `|`
    #[token("|")]
    Pipe,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `=`
    #[token("=")]
    Equals,
    /// `\`
    #[token("\\")]
    Backslash,
    /// Numbers, keywords and matrix names, such as `3.5`, `det` or `a`.
    #[regex(r"[^ \t\r\n\f+\-*/^()\[\]!|&=\\]+", |lex| lex.slice().to_string(), allow_greedy = true)]
    Word(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Caret => "^",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Bang => "!",
            Self::Pipe => "|",
            Self::Ampersand => "&",
            Self::Equals => "=",
            Self::Backslash => "\\",
            Self::Word(word) => word,
        };
        f.write_str(text)
    }
}

/// Splits one line into tokens, each paired with the byte column it starts
/// at.
///
/// Tokenizing never fails: anything outside the grammar still becomes a
/// token and is rejected by the parser.
///
/// # Example
/// ```
/// use matix::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("a = [1 2]");
/// assert_eq!(tokens,
///            vec![(Token::Word("a".into()), 0),
///                 (Token::Equals, 2),
///                 (Token::LBracket, 4),
///                 (Token::Word("1".into()), 5),
///                 (Token::Word("2".into()), 7),
///                 (Token::RBracket, 8)]);
/// ```
#[must_use]
pub fn tokenize(line: &str) -> Vec<(Token, usize)> {
    let mut lexer = Token::lexer(line);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        let token = token.unwrap_or_else(|()| Token::Word(lexer.slice().to_string()));
        tokens.push((token, lexer.span().start));
    }
    tokens
}
