//! The scanning transformer: one forward pass over the input bytes,
//! dispatching on the byte under the cursor and emitting HTML as each
//! construct closes.
//!
//! All construct delimiters are ASCII, so every construct boundary falls on a
//! UTF-8 character boundary; multibyte sequences flow through the default
//! branch byte by byte and arrive in the output intact.

use std::io::Write;

use crate::error::{ConstructKind, ParseError};
use crate::scanner::{find_bracket_close, find_byte, find_delimiter_run};
use crate::strings::{escape_byte, escape_text};

/// Cap on blockquote/emphasis nesting. Recursion depth tracks input nesting
/// depth, so adversarial input must hit a defined error instead of exhausting
/// the call stack.
const MAX_NESTING: usize = 64;

/// Render a whole document to an HTML fragment.
pub fn format_document(input: &str) -> Result<String, ParseError> {
    let mut f = HtmlFormatter::new(input.len());
    f.format(input.as_bytes(), 0, 0)?;
    Ok(String::from_utf8(f.output).unwrap())
}

struct HtmlFormatter {
    output: Vec<u8>,
}

impl HtmlFormatter {
    fn new(input_len: usize) -> Self {
        HtmlFormatter {
            output: Vec::with_capacity(input_len + input_len / 4),
        }
    }

    /// One scanning pass over `s`. `base` is the offset of `s` within the
    /// whole document, keeping error positions document-absolute across
    /// recursive calls; `depth` is the construct nesting depth.
    ///
    /// Invariant: each handler returns the index one past the last byte it
    /// consumed, delimiters included, so the next dispatch decision is made
    /// on the first byte genuinely following the construct.
    fn format(&mut self, s: &[u8], base: usize, depth: usize) -> Result<(), ParseError> {
        if depth > MAX_NESTING {
            return Err(ParseError::NestingTooDeep { position: base });
        }

        let mut i = 0;
        while i < s.len() {
            match s[i] {
                b'\\' => i = self.escaped_char(s, base, i)?,
                b'`' => i = self.code_span(s, base, i)?,
                b'$' => i = self.math_span(s, base, i)?,
                b'\n' => {
                    self.output.extend_from_slice(b"\n<br>\n");
                    i += 1;
                }
                b'-' => i = self.dash(s, i),
                b'>' => i = self.block_quote(s, base, i, depth)?,
                b'#' => i = self.heading(s, base, i)?,
                b'[' => i = self.bracket(s, base, i)?,
                b'*' => i = self.emphasis(s, base, i, depth)?,
                b => {
                    escape_byte(&mut self.output, b);
                    i += 1;
                }
            }
        }
        Ok(())
    }

    /// `\X` emits `X` through the escaper, bypassing dispatch. A backslash
    /// before a line end is ordinary text.
    fn escaped_char(&mut self, s: &[u8], base: usize, i: usize) -> Result<usize, ParseError> {
        match s.get(i + 1) {
            None => Err(ParseError::UnexpectedEnd {
                position: base + i + 1,
            }),
            Some(&b'\r') | Some(&b'\n') => {
                escape_byte(&mut self.output, b'\\');
                Ok(i + 1)
            }
            Some(&next) => {
                escape_byte(&mut self.output, next);
                Ok(i + 2)
            }
        }
    }

    fn code_span(&mut self, s: &[u8], base: usize, i: usize) -> Result<usize, ParseError> {
        let width = if s.get(i + 1) == Some(&b'`') && s.get(i + 2) == Some(&b'`') {
            3
        } else {
            1
        };
        let inner = delimited_inner(s, base, i, b'`', width, ConstructKind::CodeSpan)?;
        self.output.extend_from_slice(b"<code>");
        escape_text(&mut self.output, inner);
        self.output.extend_from_slice(b"</code>");
        Ok(i + 2 * width + inner.len())
    }

    /// Math bodies are passed through raw for a downstream LaTeX renderer;
    /// only the delimiters are rewritten.
    fn math_span(&mut self, s: &[u8], base: usize, i: usize) -> Result<usize, ParseError> {
        let width = if s.get(i + 1) == Some(&b'$') { 2 } else { 1 };
        let inner = delimited_inner(s, base, i, b'$', width, ConstructKind::MathSpan)?;
        let (open, close): (&[u8], &[u8]) = if width == 1 {
            (b"\\(", b"\\)")
        } else {
            (b"\\[", b"\\]")
        };
        self.output.extend_from_slice(open);
        self.output.extend_from_slice(inner);
        self.output.extend_from_slice(close);
        Ok(i + 2 * width + inner.len())
    }

    /// `- ` is a list marker this dialect deliberately drops; `---` is a
    /// thematic break; any other dash is ordinary text.
    fn dash(&mut self, s: &[u8], i: usize) -> usize {
        if s.get(i + 1) == Some(&b' ') {
            return i + 1;
        }
        if s.get(i + 1) == Some(&b'-') && s.get(i + 2) == Some(&b'-') {
            self.output.extend_from_slice(b"<hr />");
            return i + 3;
        }
        escape_byte(&mut self.output, b'-');
        i + 1
    }

    /// The rest of the line is re-parsed recursively and wrapped in the
    /// dialect's `<qoute>` tag (sic; the spelling is part of the produced
    /// vocabulary and downstream consumers match on it).
    fn block_quote(
        &mut self,
        s: &[u8],
        base: usize,
        i: usize,
        depth: usize,
    ) -> Result<usize, ParseError> {
        let mut start = i + 1;
        if s.get(start) == Some(&b' ') {
            start += 1;
        }
        let end = find_byte(s, b'\n', start).unwrap_or(s.len());
        self.output.extend_from_slice(b"<qoute>");
        self.format(&s[start..end], base + start, depth + 1)?;
        self.output.extend_from_slice(b"</qoute>");
        // the trailing newline belongs to the quote
        Ok((end + 1).min(s.len()))
    }

    /// Header level is the distance from the first `#` to the following
    /// space. Content runs to the end of the line and is emitted raw:
    /// neither escaped nor re-parsed. The newline itself is left for the
    /// newline rule.
    fn heading(&mut self, s: &[u8], base: usize, i: usize) -> Result<usize, ParseError> {
        let space = find_byte(s, b' ', i).ok_or(ParseError::UnterminatedConstruct {
            kind: ConstructKind::Heading,
            position: base + i,
        })?;
        let level = space - i;
        let start = space + 1;
        let end = find_byte(s, b'\n', start).unwrap_or(s.len());
        write!(self.output, "<h{}>", level).unwrap();
        self.output.extend_from_slice(&s[start..end]);
        write!(self.output, "</h{}>", level).unwrap();
        Ok(end)
    }

    fn bracket(&mut self, s: &[u8], base: usize, i: usize) -> Result<usize, ParseError> {
        if s.get(i + 1) == Some(&b'^') {
            self.footnote(s, base, i)
        } else {
            self.link(s, base, i)
        }
    }

    /// `[^label]` references a footnote anchor; `[^label]:` declares it. The
    /// label doubles as the anchor id, raw in the attribute and escaped in
    /// the visible text.
    fn footnote(&mut self, s: &[u8], base: usize, i: usize) -> Result<usize, ParseError> {
        let close =
            find_bracket_close(s, i + 2).ok_or(ParseError::UnterminatedConstruct {
                kind: ConstructKind::Footnote,
                position: base + i,
            })?;
        let label = &s[i + 2..close];

        let definition = s.get(close + 1) == Some(&b':');
        if definition {
            self.output.extend_from_slice(b"<sup><a id=\"");
        } else {
            self.output.extend_from_slice(b"<sup><a href=\"#");
        }
        self.output.extend_from_slice(label);
        self.output.extend_from_slice(b"\">");
        escape_text(&mut self.output, label);
        self.output.extend_from_slice(b"</a></sup>");

        Ok(if definition { close + 2 } else { close + 1 })
    }

    /// `[alias](target)`. The target is emitted raw; the alias goes through
    /// the escaper.
    fn link(&mut self, s: &[u8], base: usize, i: usize) -> Result<usize, ParseError> {
        let unterminated = ParseError::UnterminatedConstruct {
            kind: ConstructKind::Link,
            position: base + i,
        };
        let close = find_bracket_close(s, i + 1).ok_or(unterminated)?;
        if s.get(close + 1) != Some(&b'(') {
            return Err(unterminated);
        }
        let target_end = find_byte(s, b')', close + 2).ok_or(unterminated)?;

        let alias = &s[i + 1..close];
        let target = &s[close + 2..target_end];
        self.output.extend_from_slice(b"<a href=\"");
        self.output.extend_from_slice(target);
        self.output.extend_from_slice(b"\">");
        escape_text(&mut self.output, alias);
        self.output.extend_from_slice(b"</a>");
        Ok(target_end + 1)
    }

    /// `*…*` is italic, `**…**` bold. The body is re-parsed recursively, so
    /// emphasis nests arbitrarily.
    fn emphasis(
        &mut self,
        s: &[u8],
        base: usize,
        i: usize,
        depth: usize,
    ) -> Result<usize, ParseError> {
        let width = if s.get(i + 1) == Some(&b'*') { 2 } else { 1 };
        let inner = delimited_inner(s, base, i, b'*', width, ConstructKind::Emphasis)?;
        let tag: &[u8] = if width == 1 { b"i" } else { b"b" };
        self.output.push(b'<');
        self.output.extend_from_slice(tag);
        self.output.push(b'>');
        self.format(inner, base + i + width, depth + 1)?;
        self.output.extend_from_slice(b"</");
        self.output.extend_from_slice(tag);
        self.output.push(b'>');
        Ok(i + 2 * width + inner.len())
    }
}

/// Inner text of the span opened at `i` by a run of `width` `delim` bytes,
/// closed by the next run of the same width.
fn delimited_inner<'s>(
    s: &'s [u8],
    base: usize,
    i: usize,
    delim: u8,
    width: usize,
    kind: ConstructKind,
) -> Result<&'s [u8], ParseError> {
    let start = i + width;
    let close = find_delimiter_run(s, delim, width, start).ok_or(
        ParseError::UnterminatedConstruct {
            kind,
            position: base + i,
        },
    )?;
    Ok(&s[start..close])
}
