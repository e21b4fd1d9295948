//! Recursive descent over the token sequence.
//!
//! One grammar rule per method, strict single-token lookahead, no
//! backtracking:
//!
//! ```text
//! start       := value EOF
//! value       := '{' object_rest | '[' array_rest | primitive
//! object_rest := '}' | pair (',' pair)* '}'
//! pair        := STRING ':' value
//! array_rest  := ']' | value (',' value)* ']'
//! primitive   := STRING | NUMBER | TRUE | FALSE | NULL
//! ```
//!
//! The cursor only moves forward; re-peeks of the current token are served
//! from the [`LazySeq`] cache, so each token is scanned exactly once.

use crate::error::{Result, SyntaxError};
use crate::lazy::LazySeq;
use crate::lexer::Lexer;
use crate::token::{Literal, Token, TokenKind};
use crate::value::{Object, Value};

const PRIMITIVE_KINDS: [TokenKind; 5] = [
    TokenKind::String,
    TokenKind::Number,
    TokenKind::True,
    TokenKind::False,
    TokenKind::Null,
];

/// Read a JSON document into a [`Value`] tree.
///
/// Fail-fast: the first lexical or structural error aborts the whole read
/// and is returned with the exact source position; there is no partial
/// tree alongside an error.
pub fn parse(src: &str) -> Result<Value> {
    Parser::new(src).parse()
}

/// A single-use recursive descent parser.
pub struct Parser<'a> {
    tokens: LazySeq<Lexer<'a>>,
    cursor: usize,
}

impl<'a> Parser<'a> {
    pub fn new(src: &'a str) -> Self {
        Parser {
            tokens: LazySeq::new(Lexer::new(src)),
            cursor: 0,
        }
    }

    /// start := value EOF
    pub fn parse(mut self) -> Result<Value> {
        let value = self.value()?;
        self.expect(&[TokenKind::Eof])?;
        Ok(value)
    }

    /// value := '{' object_rest | '[' array_rest | primitive
    fn value(&mut self) -> Result<Value> {
        match self.peek()?.kind {
            TokenKind::LBrace => {
                self.advance();
                self.object_rest()
            }
            TokenKind::LBracket => {
                self.advance();
                self.array_rest()
            }
            _ => self.primitive(),
        }
    }

    /// object_rest := '}' | pair (',' pair)* '}'
    ///
    /// Pairs are inserted in encounter order; a repeated key overwrites the
    /// previously stored value (last-write-wins).
    fn object_rest(&mut self) -> Result<Value> {
        let mut map = Object::new();
        if self.peek()?.kind != TokenKind::RBrace {
            let (key, value) = self.pair()?;
            map.insert(key, value);
            while self.peek()?.kind == TokenKind::Comma {
                self.advance();
                let (key, value) = self.pair()?;
                map.insert(key, value);
            }
        }
        self.expect(&[TokenKind::RBrace])?;
        self.advance();
        Ok(Value::Object(map))
    }

    /// pair := STRING ':' value
    fn pair(&mut self) -> Result<(String, Value)> {
        self.expect(&[TokenKind::String])?;
        let key = match &self.peek()?.literal {
            Some(Literal::Str(s)) => s.clone(),
            _ => unreachable!("STRING tokens always carry a decoded string"),
        };
        self.advance();
        self.expect(&[TokenKind::Colon])?;
        self.advance();
        let value = self.value()?;
        Ok((key, value))
    }

    /// array_rest := ']' | value (',' value)* ']'
    fn array_rest(&mut self) -> Result<Value> {
        let mut items = Vec::new();
        // A value never starts with ']'.
        if self.peek()?.kind != TokenKind::RBracket {
            items.push(self.value()?);
            while self.peek()?.kind == TokenKind::Comma {
                self.advance();
                items.push(self.value()?);
            }
        }
        self.expect(&[TokenKind::RBracket])?;
        self.advance();
        Ok(Value::Array(items))
    }

    /// primitive := STRING | NUMBER | TRUE | FALSE | NULL
    fn primitive(&mut self) -> Result<Value> {
        self.expect(&PRIMITIVE_KINDS)?;
        let token = self.peek()?;
        let value = match (token.kind, &token.literal) {
            (TokenKind::String, Some(Literal::Str(s))) => Value::String(s.clone()),
            (TokenKind::Number, Some(Literal::Number(n))) => Value::Number(*n),
            (TokenKind::True | TokenKind::False, Some(Literal::Bool(b))) => Value::Bool(*b),
            (TokenKind::Null, _) => Value::Null,
            _ => unreachable!("literal payload matches the token kind"),
        };
        self.advance();
        Ok(value)
    }

    /// The not-yet-consumed token under the cursor.
    ///
    /// A scan error surfaces here, the moment the parser reaches it.
    fn peek(&mut self) -> Result<&Token> {
        match self.tokens.get(self.cursor) {
            Some(Ok(token)) => Ok(token),
            Some(Err(err)) => Err(err.clone()),
            // The scan always terminates with an EOF token and the cursor
            // never moves past one.
            None => unreachable!("token sequence exhausted without EOF"),
        }
    }

    fn expect(&mut self, kinds: &[TokenKind]) -> Result<()> {
        let token = self.peek()?;
        if kinds.contains(&token.kind) {
            return Ok(());
        }
        let wanted = if kinds.len() == 1 {
            kinds[0].to_string()
        } else {
            let names: Vec<String> = kinds.iter().map(TokenKind::to_string).collect();
            format!("any of {}", names.join(", "))
        };
        Err(SyntaxError::new(
            token.line,
            token.col,
            format!("Expect {}, got {}", wanted, token.kind),
        ))
    }

    fn advance(&mut self) {
        self.cursor += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expect_message_for_a_single_kind() {
        let err = parse("{1: 2}").unwrap_err();
        assert_eq!((err.line, err.col), (1, 1));
        assert_eq!(err.message, "Expect STRING, got NUMBER");
    }

    #[test]
    fn expect_message_for_a_kind_set() {
        let err = parse("}").unwrap_err();
        assert_eq!((err.line, err.col), (1, 0));
        assert_eq!(
            err.message,
            "Expect any of STRING, NUMBER, TRUE, FALSE, NULL, got RBRACE"
        );
    }

    #[test]
    fn trailing_token_errors_at_its_own_position() {
        let err = parse("42 true").unwrap_err();
        assert_eq!((err.line, err.col), (1, 3));
        assert_eq!(err.message, "Expect EOF, got TRUE");
    }

    #[test]
    fn empty_input_expects_a_value_at_eof() {
        let err = parse("").unwrap_err();
        assert_eq!((err.line, err.col), (1, 0));
        assert_eq!(
            err.message,
            "Expect any of STRING, NUMBER, TRUE, FALSE, NULL, got EOF"
        );
    }

    #[test]
    fn scan_errors_surface_through_the_parser() {
        let err = parse("[1, @]").unwrap_err();
        assert_eq!((err.line, err.col), (1, 4));
        assert_eq!(err.message, "Invalid character");
    }
}
