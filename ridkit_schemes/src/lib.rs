/*!
Built-in scheme overlays: a `ParameterizationDescriptor` per well-known scheme, layered over
`ridkit_core`'s generic RFC 3986/3987 grammar and ladder tables via [`overlay!`].

Each overlay only supplies the handful of knobs a scheme actually changes — its default port (so
`http://example.com:80/` and `http://example.com/` normalize to the same output) and whether its
`reg_name` host component should be treated as a domain name subject to IDN ToASCII conversion.
Everything else (grammar, six normalizer tables, two converter tables) is inherited from
`ridkit_core::normalize::generic_normalizers`/`generic_converters` unchanged, the same
"extend by composition, not replacement" contract `ladder::CallbackTable::extended_with`
implements.

# Example

```rust
use ridkit_schemes::http;

let id = http::parse("HTTP://Example.COM:80/a/b").unwrap();
assert_eq!(id.normalized(), "http://example.com/a/b");
```
*/

#![warn(
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    missing_debug_implementations,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications
)]

#[macro_use]
extern crate lazy_static;

// ------------------------------------------------------------------------------------------------
// Macros
// ------------------------------------------------------------------------------------------------

///
/// Declares one scheme overlay module. Generates `$mod_name::binding()` (the bound descriptor,
/// for embedding in a custom driver) and `$mod_name::parse(s)` (parse `s` under that binding).
///
/// # Example
///
/// ```rust
/// use ridkit_schemes::overlay;
///
/// overlay!(gopher, "gopher", Some("70"), true);
///
/// let id = gopher::parse("gopher://gopher.floodgap.com/").unwrap();
/// assert_eq!(id.scheme(), Some("gopher"));
/// ```
///
#[macro_export]
macro_rules! overlay {
    ($mod_name:ident, $scheme:expr, $default_port:expr, $reg_name_is_domain_name:expr) => {
        #[doc = concat!(
            "The `",
            $scheme,
            "` scheme overlay: a bound `ParameterizationDescriptor` layered over the generic ",
            "RFC 3986/3987 grammar."
        )]
        pub mod $mod_name {
            use ::ridkit_core::error::Result;
            use ::ridkit_core::identifier::Identifier;
            use ::ridkit_core::parameterization::{Binding, ParameterizationDescriptor, GENERIC_FIELDS};
            use ::ridkit_core::types::IdentifierKind;

            fn mapping() -> ::std::vec::Vec<(::std::string::String, ::std::string::String)> {
                GENERIC_FIELDS
                    .iter()
                    .map(|f| (format!("<{}>", f), (*f).to_string()))
                    .collect()
            }

            fn build() -> Binding {
                ParameterizationDescriptor {
                    whoami: $scheme.to_string(),
                    kind: IdentifierKind::Generic,
                    bnf: ::std::string::String::new(),
                    reserved: ::regex::Regex::new(r"[:/?#\[\]@!$&'()*+,;=]").unwrap(),
                    unreserved: ::regex::Regex::new(r"[A-Za-z0-9\-._~]").unwrap(),
                    pct_encoded: ::std::option::Option::Some("<pct-encoded>".to_string()),
                    mapping: mapping(),
                    default_port: $default_port.map(|p: &str| p.to_string()),
                    reg_name_is_domain_name: $reg_name_is_domain_name,
                }
                .bind()
                .expect(concat!(
                    "the `",
                    $scheme,
                    "` overlay's mapping is complete by construction"
                ))
            }

            ::lazy_static::lazy_static! {
                #[doc(hidden)]
                static ref BINDING: Binding = build();
            }

            /// This overlay's bound descriptor, for callers assembling their own driver.
            pub fn binding() -> Binding {
                BINDING.clone()
            }

            #[doc = concat!("Parse `s` under the `", $scheme, "` overlay.")]
            pub fn parse(s: &str) -> Result<Identifier> {
                Identifier::with_binding(s, binding())
            }
        }
    };
}

// ------------------------------------------------------------------------------------------------
// Built-in overlays
// ------------------------------------------------------------------------------------------------
// Default ports are the IANA-registered well-known ports for each scheme (RFC 3986 §3.2.3's
// "default port" concept); a reference with an explicit, matching port normalizes identically to
// one with the port omitted (see `normalize::strip_default_port`).

overlay!(http, "http", Some("80"), true);
overlay!(https, "https", Some("443"), true);
overlay!(ftp, "ftp", Some("21"), true);
overlay!(ldap, "ldap", Some("389"), true);
overlay!(ldaps, "ldaps", Some("636"), true);
overlay!(ws, "ws", Some("80"), true);
overlay!(wss, "wss", Some("443"), true);
overlay!(file, "file", None, true);

// These schemes never carry an authority (RFC 6068, RFC 5538/1738, RFC 3966, RFC 8141), so there
// is no default port to strip and no `reg_name` host to IDN-convert.
overlay!(mailto, "mailto", None, false);
overlay!(urn, "urn", None, false);
overlay!(tel, "tel", None, false);
overlay!(news, "news", None, false);

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------
