//! SQL tokens - the atomic units of rendered stimulus text.
//!
//! Stimuli use bare lowercase identifiers and fixed whitespace, so tokens
//! serialize without quoting; the renderers control layout exclusively
//! through `Newline` and `Indent`, which keeps line numbering exact.

use crate::chain::AggFunc;

/// Every element that can appear in a rendered stimulus.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // === Keywords ===
    Select,
    From,
    With,
    As,
    GroupBy,
    Aggregate,

    // === Punctuation ===
    /// The pipe-stage operator `|>`.
    PipeOp,
    Star,
    Comma,
    Semicolon,
    LParen,
    RParen,

    // === Whitespace / Formatting ===
    Space,
    Newline,
    /// `n` spaces. The renderers use uneven indents (2/4 in CTE bodies,
    /// 3/5 in pipe stages), so this is a raw count, not a level.
    Indent(usize),

    // === Dynamic content ===
    /// Bare identifier (column, alias, CTE name).
    Ident(String),
    /// Aggregate function name.
    Func(AggFunc),
}

impl Token {
    pub fn serialize(&self) -> String {
        match self {
            Token::Select => "SELECT".into(),
            Token::From => "FROM".into(),
            Token::With => "WITH".into(),
            Token::As => "AS".into(),
            Token::GroupBy => "GROUP BY".into(),
            Token::Aggregate => "AGGREGATE".into(),

            Token::PipeOp => "|>".into(),
            Token::Star => "*".into(),
            Token::Comma => ",".into(),
            Token::Semicolon => ";".into(),
            Token::LParen => "(".into(),
            Token::RParen => ")".into(),

            Token::Space => " ".into(),
            Token::Newline => "\n".into(),
            Token::Indent(n) => " ".repeat(*n),

            Token::Ident(name) => name.clone(),
            Token::Func(f) => f.as_str().into(),
        }
    }
}

/// A stream of tokens that serializes to stimulus text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn new() -> Self {
        Self { tokens: vec![] }
    }

    pub fn push(&mut self, token: Token) -> &mut Self {
        self.tokens.push(token);
        self
    }

    pub fn serialize(&self) -> String {
        self.tokens.iter().map(Token::serialize).collect()
    }

    // Convenience methods for common tokens
    pub fn ident(&mut self, name: &str) -> &mut Self {
        self.push(Token::Ident(name.into()))
    }
    pub fn space(&mut self) -> &mut Self {
        self.push(Token::Space)
    }
    pub fn newline(&mut self) -> &mut Self {
        self.push(Token::Newline)
    }
    pub fn indent(&mut self, n: usize) -> &mut Self {
        self.push(Token::Indent(n))
    }
    pub fn comma(&mut self) -> &mut Self {
        self.push(Token::Comma)
    }
    pub fn lparen(&mut self) -> &mut Self {
        self.push(Token::LParen)
    }
    pub fn rparen(&mut self) -> &mut Self {
        self.push(Token::RParen)
    }
}
