//! # glyph-parser
//!
//! ast-grep-based icon-name extraction for Glyphset.
//!
//! Source files are parsed with the TSX grammar (JSX plus TypeScript syntax)
//! and every JSX element is inspected:
//! - elements whose `className` contains the variant's marker class
//!   contribute their text and expression children
//! - elements carrying one of the configured icon props contribute that
//!   prop's value
//!
//! Values are resolved by a conservative walker over string literals,
//! conditionals, logical expressions, single-segment templates and call
//! arguments. Anything dynamic is ignored rather than guessed.

pub mod error;
pub(crate) mod helpers;
pub mod matcher;
pub mod parser;
pub mod processor;
pub mod scanner;
pub mod walker;

pub use error::ParserError;
pub use matcher::class_matches;
pub use parser::{AstTree, parse_tsx};
pub use processor::IconExtractor;
pub use scanner::scan_elements;
pub use walker::extract_literals;
