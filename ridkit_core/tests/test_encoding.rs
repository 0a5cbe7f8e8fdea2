use regex::Regex;
use ridkit_core::pct_encoding::{percent_encode, unescape};

fn unreserved() -> Regex {
    Regex::new(r"^[A-Za-z0-9\-._~]$").unwrap()
}

#[test]
fn test_percent_encode_non_ascii_path_segment() {
    let to_encode = Regex::new(r"[^\x00-\x7F]+").unwrap();
    assert_eq!(
        percent_encode("/translate/café", &to_encode),
        "/translate/caf%C3%A9"
    );
}

#[test]
fn test_unescape_restores_unreserved_characters() {
    assert_eq!(unescape("%7Euser", &unreserved()), "~user");
}

#[test]
fn test_unescape_leaves_reserved_characters_encoded() {
    assert_eq!(unescape("%2Fa%2Fb", &unreserved()), "%2Fa%2Fb");
}

#[test]
fn test_unescape_roundtrip_with_percent_encode() {
    let to_encode = Regex::new(r"[^A-Za-z0-9\-._~]").unwrap();
    let encoded = percent_encode("a b/c", &to_encode);
    assert_eq!(unescape(&encoded, &unreserved()), "a%20b%2Fc");
}
