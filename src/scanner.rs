use memchr::memchr;

/// Position of the next `delim` at or after `from`.
pub fn find_byte(s: &[u8], delim: u8, from: usize) -> Option<usize> {
    memchr(delim, &s[from..]).map(|p| from + p)
}

/// Position of the next run of at least `width` consecutive `delim` bytes at
/// or after `from`.
///
/// Closing a span on a run rather than a lone byte is what lets `**…**` hold
/// a nested `*…*` without closing on its first asterisk.
pub fn find_delimiter_run(s: &[u8], delim: u8, width: usize, from: usize) -> Option<usize> {
    let mut pos = from;
    while let Some(start) = find_byte(s, delim, pos) {
        let mut end = start + 1;
        while end < s.len() && s[end] == delim {
            end += 1;
        }
        if end - start >= width {
            return Some(start);
        }
        pos = end;
    }
    None
}

/// Position of the next unescaped `]` at or after `from`. A `]` immediately
/// preceded by a backslash belongs to the bracketed text.
pub fn find_bracket_close(s: &[u8], from: usize) -> Option<usize> {
    let mut pos = from;
    loop {
        let close = find_byte(s, b']', pos)?;
        if close > 0 && s[close - 1] == b'\\' {
            pos = close + 1;
            continue;
        }
        return Some(close);
    }
}
