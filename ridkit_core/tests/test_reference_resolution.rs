//! The RFC 3986 §5.4.1 "Normal Examples" reference-resolution battery, run against
//! `Identifier::abs`, plus a couple of the §5.4.2 "Abnormal Examples".

use ridkit_core::Identifier;
use std::str::FromStr;

fn resolve_and_compare(base: &str, reference: &str, expected: &str) {
    let base = Identifier::from_str(base).unwrap();
    let reference = Identifier::from_str(reference).unwrap();
    let resolved = reference.abs(&base).unwrap();
    assert_eq!(resolved.normalized(), expected, "resolving {:?}", reference);
}

const BASE: &str = "http://a/b/c/d;p?q";

#[test]
fn test_normal_examples() {
    resolve_and_compare(BASE, "g", "http://a/b/c/g");
    resolve_and_compare(BASE, "./g", "http://a/b/c/g");
    resolve_and_compare(BASE, "g/", "http://a/b/c/g/");
    resolve_and_compare(BASE, "/g", "http://a/g");
    // An authority with an empty path normalizes its path to "/" (RFC 3986 §6.2.3), same as a
    // directly-parsed "http://g" would.
    resolve_and_compare(BASE, "//g", "http://g/");
    resolve_and_compare(BASE, "?y", "http://a/b/c/d;p?y");
    resolve_and_compare(BASE, "g?y", "http://a/b/c/g?y");
    resolve_and_compare(BASE, "#s", "http://a/b/c/d;p?q#s");
    resolve_and_compare(BASE, "g#s", "http://a/b/c/g#s");
    resolve_and_compare(BASE, "g?y#s", "http://a/b/c/g?y#s");
    resolve_and_compare(BASE, ";x", "http://a/b/c/;x");
    resolve_and_compare(BASE, "g;x", "http://a/b/c/g;x");
    resolve_and_compare(BASE, "g;x?y#s", "http://a/b/c/g;x?y#s");
}

#[test]
fn test_dot_segment_examples() {
    resolve_and_compare(BASE, ".", "http://a/b/c/");
    resolve_and_compare(BASE, "./", "http://a/b/c/");
    resolve_and_compare(BASE, "..", "http://a/b/");
    resolve_and_compare(BASE, "../", "http://a/b/");
    resolve_and_compare(BASE, "../g", "http://a/b/g");
    resolve_and_compare(BASE, "../..", "http://a/");
    resolve_and_compare(BASE, "../../", "http://a/");
    resolve_and_compare(BASE, "../../g", "http://a/g");
}

#[test]
fn test_abnormal_examples_excess_dot_dot_segments_clamp_at_root() {
    resolve_and_compare(BASE, "../../../g", "http://a/g");
    resolve_and_compare(BASE, "../../../../g", "http://a/g");
}
