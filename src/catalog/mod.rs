//! TS catalog handling: model, parsing, serialization, and validation.
//!
//! A Qt Linguist `.ts` file is a declarative table of `(context, source,
//! translation)` triples. This module owns everything about the file format
//! itself:
//!
//! - `model`: parsed document types
//! - `parser`: pull parsing with fail-fast diagnostics
//! - `writer`: canonical serialization (round-trip safe)
//! - `placeholders`: `%1`/`%2`/`%%` token scanning and positional rendering
//! - `validator`: duplicate and placeholder-preservation checks

pub mod model;
pub mod parser;
pub mod placeholders;
pub mod validator;
pub mod writer;

pub use model::{Message, MessageContext, TranslationState, TsDocument};
pub use parser::parse_document;
pub use placeholders::Placeholder;
pub use validator::{validate_document, ValidationReport};
pub use writer::write_document;
