/*!
Grammar-driven parsing, nine-stage ladder normalization, and RFC 3986/3987
reference resolution for Resource Identifiers.

A [`Identifier`] is built from one grammar traversal over an input string (or
an [`input::InputSpec`] describing octets plus a declared encoding). That
traversal produces a fixed-width [`types::LadderSnapshot`] holding nine
parallel forms of the same identifier: the raw decomposition, two independent
"convert" stages (URI- and IRI-facing), and six cumulative "normalize" stages
running case, character, percent-encoding, path-segment, scheme-based, and
protocol-based rules in sequence. Which callbacks run at each stage, and
which grammar fields exist at all, is supplied by a [`parameterization::Binding`]
— the generic RFC 3986/3987 grammar is just the default binding; scheme
overlays (`ridkit_schemes`) build their own.

The free-standing component types (`Scheme`, `Authority`, `Host`, `Port`,
`Path`, `UserInfo`) remain available for callers who want to construct and
validate a single component in isolation, independent of a full parse.

# Example

```rust
use ridkit_core::Identifier;

let id = Identifier::parse("HTTP://Example.COM:80/a/b/c").unwrap();
assert_eq!(id.normalized(), "http://example.com:80/a/b/c");
```
*/

#![warn(
    unknown_lints,
    // Rustic
    absolute_paths_not_starting_with_crate,
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    ellipsis_inclusive_range_patterns,
    keyword_idents,
    missing_copy_implementations,
    missing_debug_implementations,
    no_mangle_generic_items,
    non_ascii_idents,
    noop_method_call,
    rust_2018_idioms,
    single_use_lifetimes,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications,
    variant_size_differences,
    // Clippy
    clippy::all,
    clippy::cargo
)]
#![deny(unsafe_code, broken_intra_doc_links, private_intra_doc_links)]

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate lazy_static;

pub mod authority;
pub mod builder;
pub mod error;
pub mod grammar;
pub mod identifier;
pub mod input;
pub mod ladder;
pub mod normalize;
pub mod parameterization;
mod parse;
pub mod path;
pub mod pct_encoding;
pub mod predicates;
pub mod resolver;
pub mod scheme;
pub mod setup;
pub mod types;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

pub use authority::{Authority, Host, HostKind, Port, UserInfo};
pub use builder::IdentifierBuilder;
pub use error::{Error, ErrorKind, Result};
pub use identifier::Identifier;
pub use input::{DecodeStrategy, InputSpec};
pub use path::Path;
pub use scheme::Scheme;
pub use setup::Setup;

// ------------------------------------------------------------------------------------------------
// Traits
// ------------------------------------------------------------------------------------------------

///
/// Implemented by component types (`Scheme`, `Path`, `Authority`, ...) that can validate a raw
/// string against their own grammar production before wrapping it. The default accepts anything;
/// components with no syntax of their own beyond their sub-components (e.g. `Authority`, which
/// defers to `Host`/`Port`/`UserInfo`) simply don't override it.
///
pub trait ValidateStr {
    fn is_valid(_s: &str) -> bool {
        true
    }
}

///
/// Implemented by component types that carry a component-local normalization rule independent of
/// the ladder engine, e.g. lower-casing a `Scheme` or removing dot-segments from a `Path`. The
/// ladder engine's own normalizer tables (see [`ladder::NormalizerTables`]) are the general
/// mechanism used during a full parse; this trait exists for components callers construct and
/// normalize standalone.
///
pub trait Normalize {
    fn normalize(self) -> error::Result<Self>
    where
        Self: Sized;
}
