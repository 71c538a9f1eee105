//! vCard parsing (RFC 6350).
//!
//! Text flows through [`split_lines`] (unfolding), [`parse_content_line`]
//! (tokenizing, parameters, unescaping) and the assembler in [`parse`],
//! which enforces the BEGIN/END grammar and the required properties.

mod error;
mod lexer;
mod parser;
mod values;


pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{LogicalLine, parse_content_line, parse_parameters, split_lines, unfold};
pub use parser::{parse, parse_single};
pub use values::{decompose, split_structured, unescape_text};
