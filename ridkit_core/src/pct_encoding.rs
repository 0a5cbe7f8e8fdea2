/*!
Percent-encoding and percent-decoding, unicode-safe.

`percent_encode` turns every run of characters matching a supplied predicate regex into its
UTF-8 byte sequence expressed as uppercase `%HH` triplets. `unescape` is its approximate inverse:
it finds maximal runs of `%HH` triplets, decodes and UTF-8-validates them, and for each resulting
code point either substitutes the literal character (if it is `unreserved`) or restores the
original percent-encoded bytes. Decoding never fails outward: a malformed run is left untouched
rather than corrupting the rest of the value — the codec is deliberately tolerant.

# Example

```rust
use ridkit_core::pct_encoding::unescape;
use regex::Regex;

let unreserved = Regex::new(r"^[A-Za-z0-9\-._~]$").unwrap();
assert_eq!(unescape("%7Euser", &unreserved), "~user");
assert_eq!(unescape("%2F", &unreserved), "%2F"); // '/' is reserved, stays encoded
```
*/

use regex::Regex;

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

lazy_static! {
    static ref PCT_RUN: Regex = Regex::new("(?:%[0-9A-Fa-f]{2})+").unwrap();
}

///
/// Replace every substring of `s` matched by `to_encode` with its UTF-8 byte sequence, expressed
/// as uppercase `%HH` triplets.
///
pub fn percent_encode(s: &str, to_encode: &Regex) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last = 0;
    for m in to_encode.find_iter(s) {
        out.push_str(&s[last..m.start()]);
        for byte in m.as_str().bytes() {
            out.push_str(&format!("%{:02X}", byte));
        }
        last = m.end();
    }
    out.push_str(&s[last..]);
    out
}

///
/// Decode maximal runs of `%HH` triplets in `value`, validate the decoded bytes as UTF-8, and for
/// each resulting code point emit the literal character if it matches `unreserved`, otherwise the
/// original `%HH` bytes that produced it. A run that fails to decode or validate is copied through
/// unchanged.
///
pub fn unescape(value: &str, unreserved: &Regex) -> String {
    let mut out = String::with_capacity(value.len());
    let mut last = 0;
    for m in PCT_RUN.find_iter(value) {
        out.push_str(&value[last..m.start()]);
        out.push_str(&unescape_run(m.as_str(), unreserved));
        last = m.end();
    }
    out.push_str(&value[last..]);
    out
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn unescape_run(run: &str, unreserved: &Regex) -> String {
    match decode_run(run) {
        Some(decoded) => {
            let mut out = String::with_capacity(run.len());
            let mut byte_offset = 0;
            for ch in decoded.chars() {
                let mut buf = [0u8; 4];
                let encoded = ch.encode_utf8(&mut buf);
                let width = encoded.len();
                if unreserved.is_match(encoded) {
                    out.push(ch);
                } else {
                    // Re-emit exactly the original %HH bytes this code point came from, rather
                    // than re-encoding, so a non-minimal or unusual percent sequence is preserved
                    // verbatim.
                    out.push_str(&run[byte_offset * 3..(byte_offset + width) * 3]);
                }
                byte_offset += width;
            }
            out
        }
        None => {
            tracing::warn!(run, "percent-decoding run failed UTF-8 validation; keeping as-is");
            run.to_string()
        }
    }
}

fn decode_run(run: &str) -> Option<String> {
    let bytes: Vec<u8> = run
        .as_bytes()
        .chunks(3)
        .map(|triplet| u8::from_str_radix(std::str::from_utf8(&triplet[1..3]).ok()?, 16).ok())
        .collect::<Option<Vec<u8>>>()?;
    String::from_utf8(bytes).ok()
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------
