/*!
Standalone predicate checks exposed alongside the identifier types.
*/

use crate::identifier::Identifier;
use regex::Regex;

lazy_static! {
    static ref SCHEME_LIKE: Regex = Regex::new("^[A-Za-z][A-Za-z0-9+.-]*$").unwrap();
}

/// `true` when `s` has the lexical shape of a scheme name, independent of whether it is a
/// registered scheme.
pub fn scheme_like(s: &str) -> bool {
    SCHEME_LIKE.is_match(s)
}

/// `true` when `identifier` has a scheme defined at its RAW snapshot.
pub fn absolute_reference(identifier: &Identifier) -> bool {
    identifier.is_absolute()
}

/// `true` when `s`, parsed by `constructor`, yields an absolute reference. `constructor` failing
/// to parse `s` counts as not absolute.
pub fn stringified_absolute_reference<F>(s: &str, constructor: F) -> bool
where
    F: FnOnce(&str) -> crate::error::Result<Identifier>,
{
    constructor(s).map(|id| absolute_reference(&id)).unwrap_or(false)
}
