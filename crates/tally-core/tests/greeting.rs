//! Greeting rendering vectors.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use tally_core::counter::{greeting, DISPLAY_MULTIPLIER};

#[test]
fn first_hit() {
    assert_eq!(greeting(1), "Hello World! I have been seen 10000000 times.\n");
}

#[test]
fn forty_second_hit() {
    assert_eq!(
        greeting(42),
        "Hello World! I have been seen 420000000 times.\n"
    );
}

#[test]
fn trailing_newline_present() {
    assert!(greeting(7).ends_with(".\n"));
}

#[test]
fn multiplier_is_literal() {
    assert_eq!(DISPLAY_MULTIPLIER, 10_000_000);
}

#[test]
fn huge_count_saturates_instead_of_wrapping() {
    let body = greeting(i64::MAX);
    assert_eq!(
        body,
        format!("Hello World! I have been seen {} times.\n", i64::MAX)
    );
}
