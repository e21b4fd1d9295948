//! Lexical tokens - the shared currency between the lexer and the parser.
//!
//! Tokens are produced once per scan and consumed once by the parser.
//! Whitespace and newlines are never materialized; the scan folds them
//! into the line/column bookkeeping instead.

use std::fmt;

/// Keyword lexemes and the token kinds they classify as.
///
/// Compiled once into the binary; the scan probes it by prefix at each
/// position, ahead of the bare-identifier category.
pub static KEYWORDS: phf::Map<&'static str, TokenKind> = phf::phf_map! {
    "true" => TokenKind::True,
    "false" => TokenKind::False,
    "null" => TokenKind::Null,
};

/// The closed set of token kinds.
///
/// `Eof` is a real token: every scan ends with exactly one, positioned at
/// the end of input, so the parser can anchor its trailing-content check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// A quoted string literal, escapes already decoded.
    String,
    /// A numeric literal, already decoded to an f64.
    Number,
    /// End of input.
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::Colon => "COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Null => "NULL",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::Eof => "EOF",
        };
        f.write_str(name)
    }
}

/// Decoded payload carried by literal-bearing tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// `true` / `false`.
    Bool(bool),
    /// NUMBER payload: the full lexeme read as a 64-bit float.
    Number(f64),
    /// STRING payload: the unescaped text between the quotes.
    Str(String),
}

/// A classified, positioned unit of lexical input.
///
/// `lexeme` is the raw matched source text (quotes included for strings);
/// `literal` holds the decoded payload where one exists. `line` is 1-based,
/// `col` is the 0-based character offset from the most recent line start.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<Literal>,
    pub line: usize,
    pub col: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_match_grammar() {
        assert_eq!(TokenKind::LBrace.to_string(), "LBRACE");
        assert_eq!(TokenKind::String.to_string(), "STRING");
        assert_eq!(TokenKind::Eof.to_string(), "EOF");
    }

    #[test]
    fn keyword_table_is_exact() {
        assert_eq!(KEYWORDS.get("true"), Some(&TokenKind::True));
        assert_eq!(KEYWORDS.get("false"), Some(&TokenKind::False));
        assert_eq!(KEYWORDS.get("null"), Some(&TokenKind::Null));
        assert_eq!(KEYWORDS.get("nil"), None);
        assert_eq!(KEYWORDS.len(), 3);
    }
}
