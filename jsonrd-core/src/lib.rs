//! jsonrd Core Reader
//!
//! Reads JSON text into a dynamically-typed [`Value`] tree, reporting the
//! first malformed construct as a [`SyntaxError`] carrying a 1-based line
//! and 0-based column. There is no serializer, no schema validation and no
//! I/O here: the input is one fully-buffered text slice, the output is the
//! tree or the error.
//!
//! # Architecture
//!
//! - **lexer.rs** - single forward scan producing positioned tokens,
//!   string escapes and numbers decoded inline
//! - **lazy.rs** - LazySeq, monotonic caching over the token iterator
//! - **parser.rs** - LL(1) recursive descent consuming the token sequence
//! - **token.rs** / **value.rs** - the shared data model
//! - **error.rs** - the single positioned failure type
//!
//! # Example
//!
//! ```
//! use jsonrd_core::{parse, Value};
//!
//! let tree = parse(r#"{"a": 1, "b": [true, null]}"#).unwrap();
//! assert_eq!(tree.get("a").and_then(Value::as_f64), Some(1.0));
//!
//! let err = parse("01").unwrap_err();
//! assert_eq!((err.line, err.col), (1, 0));
//! ```

pub mod error;
pub mod lazy;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod value;

pub use error::{Result, SyntaxError};
pub use lazy::LazySeq;
pub use lexer::Lexer;
pub use parser::{parse, Parser};
pub use token::{Literal, Token, TokenKind};
pub use value::{Object, Value};
