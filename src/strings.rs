/// Appends the html-safe rendering of one byte.
pub fn escape_byte(out: &mut Vec<u8>, b: u8) {
    match b {
        b'&' => out.extend_from_slice(b"&amp;"),
        b'>' => out.extend_from_slice(b"&gt;"),
        b'<' => out.extend_from_slice(b"&lt;"),
        _ => out.push(b),
    }
}

/// Appends the html-safe rendering of `s`.
///
/// A literal backslash is this path's escape marker and is dropped
/// unconditionally, whether or not a special character follows it.
pub fn escape_text(out: &mut Vec<u8>, s: &[u8]) {
    for &b in s {
        if b == b'\\' {
            continue;
        }
        escape_byte(out, b);
    }
}
