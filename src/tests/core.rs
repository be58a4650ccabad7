use super::*;

use pretty_assertions::assert_eq;

#[test]
fn plain_text_passes_through() {
    compare("hello, world.", "hello, world.");
}

#[test]
fn special_characters_are_escaped() {
    compare("a & b < c", "a &amp; b &lt; c");
}

#[test]
fn newline_becomes_br() {
    compare("a\nb", "a\n<br>\nb");
}

#[test]
fn three_dashes_are_a_thematic_break() {
    compare("---", "<hr />");
    compare("before\n---\nafter", "before\n<br>\n<hr />\n<br>\nafter");
}

#[test]
fn lone_dash_is_plain_text() {
    compare("a-b\n", "a-b\n<br>\n");
}

#[test]
fn list_marker_is_dropped() {
    // `- ` is recognized but list rendering is deliberately unimplemented;
    // the marker vanishes and the rest of the line is ordinary text.
    compare("- item", " item");
}

#[test]
fn multibyte_text_is_untouched() {
    compare("héllo wörld → ok", "héllo wörld → ok");
}

#[test]
fn render_is_deterministic() {
    let input = "# T\n> q *a **b** c*\n`x` $y$ [^z]\n";
    let first = markdown_to_html(input).unwrap();
    let second = markdown_to_html(input).unwrap();
    assert_eq!(first, second);
}
