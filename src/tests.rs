use crate::{markdown_to_html, ConstructKind, ParseError};

use pretty_assertions::assert_eq;

mod core;
mod links;

#[track_caller]
fn compare(input: &str, expected: &str) {
    let html = markdown_to_html(input).unwrap();
    assert_eq!(html, expected);
}

#[track_caller]
fn expect_error(input: &str, expected: ParseError) {
    assert_eq!(markdown_to_html(input), Err(expected));
}
