use super::*;

#[test]
fn link() {
    compare("[label](http://x)", "<a href=\"http://x\">label</a>");
}

#[test]
fn link_alias_is_escaped() {
    compare("[a&b](u)", "<a href=\"u\">a&amp;b</a>");
}

#[test]
fn escaped_bracket_in_alias() {
    compare("[a\\]b](u)", "<a href=\"u\">a]b</a>");
}

#[test]
fn escaped_bracket_in_footnote_label() {
    compare("[^a\\]b]", "<sup><a href=\"#a\\]b\">a]b</a></sup>");
}

#[test]
fn footnote_reference() {
    compare("[^note]", "<sup><a href=\"#note\">note</a></sup>");
}

#[test]
fn footnote_definition() {
    compare("[^note]:", "<sup><a id=\"note\">note</a></sup>");
}

#[test]
fn footnote_reference_in_running_text() {
    compare("see [^1] x", "see <sup><a href=\"#1\">1</a></sup> x");
}

#[test]
fn footnote_definition_keeps_following_text() {
    compare(
        "[^a]: details\n",
        "<sup><a id=\"a\">a</a></sup> details\n<br>\n",
    );
}
