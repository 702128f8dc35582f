#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_token_is_none_in_non_hydrate_tests() {
    assert!(read_token().is_none());
}

#[test]
fn write_token_is_noop_but_callable() {
    write_token("abc123");
    assert!(read_token().is_none());
}

#[test]
fn clear_token_is_noop_but_callable() {
    clear_token();
    assert!(read_token().is_none());
}
