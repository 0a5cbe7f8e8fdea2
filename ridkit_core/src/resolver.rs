/*!
Reference resolution, RFC 3986 §5.2-§5.3.

Operates purely on RAW-index (`index 0`) [`GenericRecord`] values: [`transform`] produces the
target's components, [`merge`] implements §5.3's path-merge rule, [`remove_dot_segments`] is the
buffer-rewriting state machine of §5.2.4, and [`recompose`] turns a set of components back into a
single string.
*/

use crate::types::GenericRecord;

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

///
/// Resolve reference `r` against base `b`, both RAW records of the generic kind, yielding the
/// target's components. Callers are expected to have already checked that `b` carries a scheme;
/// this function does not itself validate that precondition.
///
pub fn transform(r: &GenericRecord, b: &GenericRecord) -> GenericRecord {
    let mut t = GenericRecord::default();

    if let Some(scheme) = &r.scheme {
        t.scheme = Some(scheme.clone());
        t.authority = r.authority.clone();
        t.path = Some(remove_dot_segments(r.path.as_deref().unwrap_or("")));
        t.query = r.query.clone();
    } else if r.authority.is_some() {
        t.authority = r.authority.clone();
        t.path = Some(remove_dot_segments(r.path.as_deref().unwrap_or("")));
        t.query = r.query.clone();
        t.scheme = b.scheme.clone();
    } else if r.path.as_deref().unwrap_or("").is_empty() {
        t.path = b.path.clone();
        t.query = if r.query.is_some() {
            r.query.clone()
        } else {
            b.query.clone()
        };
        t.authority = b.authority.clone();
        t.scheme = b.scheme.clone();
    } else if r.path.as_deref().unwrap_or("").starts_with('/') {
        t.path = Some(remove_dot_segments(r.path.as_deref().unwrap_or("")));
        t.authority = b.authority.clone();
        t.scheme = b.scheme.clone();
        t.query = r.query.clone();
    } else {
        t.path = Some(remove_dot_segments(&merge(b, r)));
        t.authority = b.authority.clone();
        t.scheme = b.scheme.clone();
        t.query = r.query.clone();
    }

    t.fragment = r.fragment.clone();
    t
}

///
/// RFC 3986 §5.3's merge rule: when the base has an authority and an empty path, the merged path
/// is `"/"` plus the reference's path; otherwise it is the base path up to and including its
/// right-most `/` (or empty if there is none), with the reference's path appended.
///
pub fn merge(b: &GenericRecord, r: &GenericRecord) -> String {
    let r_path = r.path.as_deref().unwrap_or("");
    if b.authority.is_some() && b.path.as_deref().unwrap_or("").is_empty() {
        return format!("/{}", r_path);
    }
    let b_path = b.path.as_deref().unwrap_or("");
    match b_path.rfind('/') {
        Some(idx) => format!("{}{}", &b_path[..=idx], r_path),
        None => r_path.to_string(),
    }
}

///
/// RFC 3986 §5.2.4's dot-segment removal, an iterative buffer rewrite. Idempotent: applying it
/// twice yields the same result as applying it once.
///
pub fn remove_dot_segments(input: &str) -> String {
    let mut input = input.to_string();
    let mut output = String::new();

    while !input.is_empty() {
        if input.starts_with("../") {
            input.replace_range(..3, "");
        } else if input.starts_with("./") {
            input.replace_range(..2, "");
        } else if input.starts_with("/./") {
            input.replace_range(..3, "/");
        } else if input == "/." {
            input.replace_range(..2, "/");
        } else if input.starts_with("/../") {
            input.replace_range(..4, "/");
            pop_last_segment(&mut output);
        } else if input == "/.." {
            input.replace_range(..3, "/");
            pop_last_segment(&mut output);
        } else if input == "." || input == ".." {
            input.clear();
        } else {
            let take = first_segment_len(&input);
            output.push_str(&input[..take]);
            input.replace_range(..take, "");
        }
    }

    output
}

///
/// Recompose a set of components into a single string, per RFC 3986 §5.3:
/// `(scheme? + ":") ∥ ("//" + authority?) ∥ path ∥ ("?" + query?) ∥ ("#" + fragment?)`.
///
pub fn recompose(t: &GenericRecord) -> String {
    let mut out = String::new();
    if let Some(scheme) = &t.scheme {
        out.push_str(scheme);
        out.push(':');
    }
    if let Some(authority) = &t.authority {
        out.push_str("//");
        out.push_str(authority);
    }
    if let Some(path) = &t.path {
        out.push_str(path);
    }
    if let Some(query) = &t.query {
        out.push('?');
        out.push_str(query);
    }
    if let Some(fragment) = &t.fragment {
        out.push('#');
        out.push_str(fragment);
    }
    out
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

/// Remove the output buffer's last path segment, plus its preceding `/` if any.
fn pop_last_segment(output: &mut String) {
    match output.rfind('/') {
        Some(idx) => output.truncate(idx),
        None => output.clear(),
    }
}

/// The length, in bytes, of the first path segment: an optional leading `/` plus characters up to
/// (but not including) the next `/`.
fn first_segment_len(input: &str) -> usize {
    let bytes = input.as_bytes();
    let mut i = 0;
    if bytes.first() == Some(&b'/') {
        i += 1;
    }
    while i < bytes.len() && bytes[i] != b'/' {
        i += 1;
    }
    i
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------
