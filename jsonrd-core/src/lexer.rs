//! Single forward scan turning source text into positioned tokens.
//!
//! Categories are tried as an ordered alternation at each position:
//! punctuation, `true`, `false`, `null`, string, number, whitespace run,
//! newline, bare identifier, catch-all single character. The first category
//! that matches wins, taking the longest match it can. Whitespace and
//! newlines are consumed silently; everything else becomes a token or a
//! positioned error.
//!
//! String and number decoding happen inline: the coarse scan only finds the
//! extent of the lexeme, the decoder walking it is authoritative and raises
//! errors pointing at the exact offending character within the lexeme.

use memchr::memchr2;
use unicode_xid::UnicodeXID;

use crate::error::{Result, SyntaxError};
use crate::token::{Literal, Token, TokenKind, KEYWORDS};

/// Escape letters that decode to a control character.
static SPECIAL_ESCAPES: phf::Map<char, char> = phf::phf_map! {
    'b' => '\u{0008}',
    'f' => '\u{000C}',
    'r' => '\r',
    'n' => '\n',
    't' => '\t',
};

/// Escapes that decode to themselves.
const LITERAL_ESCAPES: [char; 3] = ['\\', '"', '/'];

/// The tokenizer. One forward pass, one EOF token, not restartable.
///
/// Iterating yields `Ok(Token)` until the trailing EOF token has been
/// produced, or a single `Err` after which the iterator is fused.
pub struct Lexer<'a> {
    src: &'a str,
    /// Byte offset of the scan position.
    pos: usize,
    /// 1-based line of the scan position.
    line: usize,
    /// 0-based character offset from the most recent line start.
    col: usize,
    eof_emitted: bool,
    failed: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Lexer {
            src,
            pos: 0,
            line: 1,
            col: 0,
            eof_emitted: false,
            failed: false,
        }
    }

    fn token(&self, kind: TokenKind, lexeme: &str, literal: Option<Literal>) -> Token {
        Token {
            kind,
            lexeme: lexeme.to_string(),
            literal,
            line: self.line,
            col: self.col,
        }
    }

    /// Structural punctuation, the first category in the alternation.
    fn punctuation(c: char) -> Option<TokenKind> {
        match c {
            '{' => Some(TokenKind::LBrace),
            '}' => Some(TokenKind::RBrace),
            '[' => Some(TokenKind::LBracket),
            ']' => Some(TokenKind::RBracket),
            ':' => Some(TokenKind::Colon),
            ',' => Some(TokenKind::Comma),
            _ => None,
        }
    }

    /// Scan a string literal starting at the opening quote.
    ///
    /// The coarse scan finds the lexeme extent: up to the first quote not
    /// immediately preceded by a backslash character, or to the end of the
    /// line or input if there is none. The decode walk over that lexeme is
    /// what actually validates the string.
    fn scan_string(&mut self) -> Result<Token> {
        let src = self.src;
        let bytes = src.as_bytes();
        let start = self.pos;
        let mut probe = start + 1;
        let end = loop {
            match memchr2(b'"', b'\n', &bytes[probe..]) {
                Some(offset) => {
                    let at = probe + offset;
                    if bytes[at] == b'\n' {
                        break at;
                    }
                    // A quote directly after a backslash byte never closes,
                    // even when that backslash is itself escaped; the decode
                    // walk below sorts the difference out.
                    if bytes[at - 1] == b'\\' {
                        probe = at + 1;
                        continue;
                    }
                    break at + 1;
                }
                None => break bytes.len(),
            }
        };
        let lexeme = &src[start..end];

        let (line, col) = (self.line, self.col);
        let chars: Vec<char> = lexeme.chars().collect();
        let mut decoded = String::with_capacity(lexeme.len());
        let mut i = 1; // char index, past the opening quote
        loop {
            if i >= chars.len() {
                return Err(SyntaxError::new(line, col, "Unbalanced string"));
            }
            let c = chars[i];
            if c == '\\' {
                i += 1;
                if i >= chars.len() {
                    return Err(SyntaxError::new(
                        line,
                        col + i - 1,
                        "Unescaped backslash at the end of string",
                    ));
                }
                let esc = chars[i];
                if LITERAL_ESCAPES.contains(&esc) {
                    decoded.push(esc);
                    i += 1;
                } else if let Some(&control) = SPECIAL_ESCAPES.get(&esc) {
                    decoded.push(control);
                    i += 1;
                } else if esc == 'u' {
                    let escape_at = i;
                    i += 1;
                    let mut code = 0u32;
                    for _ in 0..4 {
                        if i >= chars.len() {
                            return Err(SyntaxError::new(
                                line,
                                col + i - 1,
                                "Unicode escape incomplete",
                            ));
                        }
                        let digit = chars[i].to_digit(16).ok_or_else(|| {
                            SyntaxError::new(line, col + i, "Invalid character for Unicode escape")
                        })?;
                        code = code * 16 + digit;
                        i += 1;
                    }
                    // Surrogate halves are not representable in a Rust
                    // string, so they are rejected rather than decoded.
                    let c = char::from_u32(code).ok_or_else(|| {
                        SyntaxError::new(line, col + escape_at, "Invalid Unicode escape")
                    })?;
                    decoded.push(c);
                } else {
                    return Err(SyntaxError::new(line, col + i, "Invalid escape character"));
                }
            } else if c == '"' {
                break;
            } else if (c as u32) < 0x20 || (0x80..0xA0).contains(&(c as u32)) {
                return Err(SyntaxError::new(
                    line,
                    col + i,
                    "Unescaped control character",
                ));
            } else {
                decoded.push(c);
                i += 1;
            }
        }

        let token = self.token(TokenKind::String, lexeme, Some(Literal::Str(decoded)));
        // Advance past the whole lexeme, decoded extent notwithstanding.
        self.pos += lexeme.len();
        self.col += chars.len();
        Ok(token)
    }

    /// Longest match for `[+-]? digits (. digits)? ([eE] [+-]? digits)?`.
    ///
    /// A trailing `.` or exponent marker without digits is left unconsumed,
    /// the way a longest-match alternation behaves.
    fn number_len(rest: &str) -> Option<usize> {
        let b = rest.as_bytes();
        let mut i = 0;
        if matches!(b.first(), Some(b'+' | b'-')) {
            i += 1;
        }
        let int_start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        if i == int_start {
            return None;
        }
        if b.get(i) == Some(&b'.') {
            let mut j = i + 1;
            while j < b.len() && b[j].is_ascii_digit() {
                j += 1;
            }
            if j > i + 1 {
                i = j;
            }
        }
        if matches!(b.get(i), Some(b'e' | b'E')) {
            let mut j = i + 1;
            if matches!(b.get(j), Some(b'+' | b'-')) {
                j += 1;
            }
            let digits_start = j;
            while j < b.len() && b[j].is_ascii_digit() {
                j += 1;
            }
            if j > digits_start {
                i = j;
            }
        }
        Some(i)
    }

    fn scan_number(&mut self, len: usize) -> Result<Token> {
        let src = self.src;
        let lexeme = &src[self.pos..self.pos + len];
        let b = lexeme.as_bytes();

        let mut i = 0;
        if matches!(b[i], b'+' | b'-') {
            i += 1;
        }
        if b[i] == b'0' && b.get(i + 1).is_some_and(u8::is_ascii_digit) {
            return Err(SyntaxError::new(
                self.line,
                self.col,
                "Leading zeros are disallowed",
            ));
        }

        let value: f64 = lexeme
            .parse()
            .map_err(|_| SyntaxError::new(self.line, self.col, "Malformed number"))?;

        let token = self.token(TokenKind::Number, lexeme, Some(Literal::Number(value)));
        self.pos += len;
        self.col += len;
        Ok(token)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.eof_emitted {
            return None;
        }
        let src = self.src;
        loop {
            let rest = &src[self.pos..];
            let Some(c) = rest.chars().next() else {
                self.eof_emitted = true;
                return Some(Ok(self.token(TokenKind::Eof, "", None)));
            };

            let result = if let Some(kind) = Self::punctuation(c) {
                let token = self.token(kind, &rest[..1], None);
                self.pos += 1;
                self.col += 1;
                Ok(token)
            } else if let Some((word, kind)) = KEYWORDS
                .entries()
                .find(|(word, _)| rest.starts_with(**word))
            {
                let literal = match kind {
                    TokenKind::True => Some(Literal::Bool(true)),
                    TokenKind::False => Some(Literal::Bool(false)),
                    _ => None,
                };
                let token = self.token(*kind, word, literal);
                self.pos += word.len();
                self.col += word.len();
                Ok(token)
            } else if c == '"' {
                self.scan_string()
            } else if let Some(len) = Self::number_len(rest) {
                self.scan_number(len)
            } else if c == ' ' || c == '\t' {
                let run = rest
                    .bytes()
                    .take_while(|&b| b == b' ' || b == b'\t')
                    .count();
                self.pos += run;
                self.col += run;
                continue;
            } else if c == '\n' {
                self.pos += 1;
                self.line += 1;
                self.col = 0;
                continue;
            } else if c.is_xid_start() || c == '_' {
                let err = SyntaxError::new(
                    self.line,
                    self.col,
                    "Only allowed identifiers are 'true', 'false' and 'null'",
                );
                for ch in rest.chars().take_while(|ch| ch.is_xid_continue()) {
                    self.pos += ch.len_utf8();
                    self.col += 1;
                }
                Err(err)
            } else {
                let err = SyntaxError::new(self.line, self.col, "Invalid character");
                self.pos += c.len_utf8();
                self.col += 1;
                Err(err)
            };

            if result.is_err() {
                self.failed = true;
            }
            return Some(result);
        }
    }
}
