pub mod common;
pub use common::*;

#[test]
fn test_simple_success() {
    parse_success("http://www.example.com/foo/bar");
    parse_success("http://www.example.com/#\u{1D100}ss");
    parse_success("http://www.\u{043F}\u{0440}\u{0438}\u{043C}\u{0435}\u{0440}.com/#\u{1D100}ss");
    // The fragment production is a catch-all (RFC 3986 Appendix B), so commas and extra
    // '#' characters after the first are just part of the fragment, not parse failures.
    parse_success("http://www.example.com/#hello, world");
    parse_success("http://www.example.com/#asdf#qwer");
    parse_success("http://www.example.com/##asdf");
}

#[test]
fn test_simple_failure() {
    parse_failure("");
}
