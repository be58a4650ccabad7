//! A single-pass markdown → HTML fragment converter.
//!
//! `mdfrag` renders a small markdown dialect (code spans, `$`-delimited math,
//! ATX headers, blockquotes, links, footnote references and definitions,
//! emphasis) to an HTML fragment in one forward scan over the input, with
//! recursive re-entry for nested emphasis and blockquote bodies. There is no
//! intermediate tree; each construct is emitted as soon as its closing
//! delimiter is found.
//!
//! ```
//! let html = mdfrag::markdown_to_html("**hi**\n").unwrap();
//! assert_eq!(html, "<b>hi</b>\n<br>\n");
//! ```
//!
//! Malformed input (an opening delimiter with no closer, or a trailing
//! backslash with nothing to escape) aborts the whole transform with a
//! [`ParseError`]; no partial output is produced.

mod error;
mod html;
mod scanner;
mod strings;
#[cfg(test)]
mod tests;

pub use error::{ConstructKind, ParseError};

/// Render a markdown document to an HTML fragment.
pub fn markdown_to_html(input: &str) -> Result<String, ParseError> {
    html::format_document(input)
}
