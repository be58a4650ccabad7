use std::fmt;

use thiserror::Error;

/// The construct a [`ParseError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructKind {
    CodeSpan,
    MathSpan,
    Heading,
    Footnote,
    Link,
    Emphasis,
}

impl fmt::Display for ConstructKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ConstructKind::CodeSpan => "code span",
            ConstructKind::MathSpan => "math span",
            ConstructKind::Heading => "heading",
            ConstructKind::Footnote => "footnote",
            ConstructKind::Link => "link",
            ConstructKind::Emphasis => "emphasis",
        })
    }
}

/// Why a transform was aborted. Any of these is fatal for the whole pass;
/// nothing is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// An opening delimiter had no matching closer before end of input.
    #[error("unterminated {kind} starting at byte {position}")]
    UnterminatedConstruct {
        kind: ConstructKind,
        position: usize,
    },

    /// A construct required another byte but the input ended.
    #[error("unexpected end of input at byte {position}")]
    UnexpectedEnd { position: usize },

    /// Blockquotes or emphasis nested past the fixed depth cap.
    #[error("markup nested too deeply at byte {position}")]
    NestingTooDeep { position: usize },
}
