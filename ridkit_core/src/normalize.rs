/*!
Built-in normalizer and converter tables, generic and common kind.

These are the default [`CallbackTable`]s a [`crate::parameterization::ParameterizationDescriptor`]
installs at binding time. A scheme overlay extends them with [`CallbackTable::extended_with`]
rather than replacing them outright.
*/

use crate::ladder::{CallbackTable, ConverterTables, NormalizerTables, ReductionContext};
use crate::pct_encoding;
use std::sync::Arc;

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

/// The six default normalizer tables for a `generic`-kind identifier.
///
/// `character_normalizer`, `path_segment_normalizer` and `protocol_based_normalizer` are identity
/// by default; dot-segment removal is a property of reference resolution
/// ([`crate::resolver::remove_dot_segments`]), not of normalizing an already-parsed identifier. A
/// scheme overlay may still register a `path_segment_normalizer` entry if that scheme's
/// normalization form calls for it.
pub fn generic_normalizers() -> NormalizerTables {
    NormalizerTables {
        case_normalizer: generic_case_normalizer(),
        character_normalizer: CallbackTable::new(),
        percent_encoding_normalizer: generic_percent_encoding_normalizer(),
        path_segment_normalizer: CallbackTable::new(),
        scheme_based_normalizer: generic_scheme_based_normalizer(),
        protocol_based_normalizer: CallbackTable::new(),
    }
}

/// The two default converter tables for a `generic`-kind identifier.
pub fn generic_converters() -> ConverterTables {
    ConverterTables {
        uri_converter: idn_converter(false),
        iri_converter: idn_converter(true),
    }
}

/// `common`-kind defaults: only the `opaque` hex-uppercase rule; everything else identity.
pub fn common_normalizers() -> NormalizerTables {
    NormalizerTables {
        case_normalizer: common_case_normalizer(),
        character_normalizer: CallbackTable::new(),
        percent_encoding_normalizer: CallbackTable::new(),
        path_segment_normalizer: CallbackTable::new(),
        scheme_based_normalizer: CallbackTable::new(),
        protocol_based_normalizer: CallbackTable::new(),
    }
}

pub fn common_converters() -> ConverterTables {
    ConverterTables {
        uri_converter: CallbackTable::new(),
        iri_converter: CallbackTable::new(),
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn uppercase_pct_encoded(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            out.push('%');
            out.push(bytes[i + 1].to_ascii_uppercase() as char);
            out.push(bytes[i + 2].to_ascii_uppercase() as char);
            i += 3;
        } else {
            out.push(bytes[i] as char);
            i += 1;
        }
    }
    out
}

/// Fields whose value may contain a literal `%HH` sequence and so need the hex-uppercase /
/// unescape rules applied; each is a string [`crate::grammar::parse_generic`] reduces directly
/// under its own name as the criteria key, not under a separate `<pct-encoded>` grammar symbol —
/// the regex-based grammar captures whole fields rather than reducing character by character.
const PCT_BEARING_FIELDS: &[&str] = &["path", "query", "fragment", "userinfo", "segment"];

fn generic_case_normalizer() -> CallbackTable {
    let mut table = CallbackTable::new();
    table.insert(
        "scheme",
        Arc::new(|_, _, current: &str, _| current.to_lowercase()),
    );
    table.insert(
        "host",
        Arc::new(|_, _, current: &str, _| lowercase_ascii_host(&uppercase_pct_encoded(current))),
    );
    table.insert(
        "authority",
        Arc::new(|_, _, current: &str, _| lowercase_authority_host(&uppercase_pct_encoded(current))),
    );
    for field in PCT_BEARING_FIELDS {
        table.insert(
            *field,
            Arc::new(|_, _, current: &str, _| uppercase_pct_encoded(current)),
        );
    }
    table
}

fn lowercase_ascii_host(host: &str) -> String {
    if host.is_ascii() {
        host.to_lowercase()
    } else {
        host.to_string()
    }
}

/// Lower-case only the host portion of a `[userinfo@]host[:port]` authority value, leaving
/// userinfo and port untouched. Mirrors [`crate::grammar`]'s own userinfo/host/port split so the
/// recomposed authority output matches what the `host` field would show on its own.
fn lowercase_authority_host(authority: &str) -> String {
    let (userinfo, host_port) = match authority.split_once('@') {
        Some((u, rest)) => (Some(u), rest),
        None => (None, authority),
    };
    let (host, port) = if let Some(stripped) = host_port.strip_prefix('[') {
        match stripped.find(']') {
            Some(close) => (&host_port[..close + 2], &host_port[close + 2..]),
            None => (host_port, ""),
        }
    } else {
        match host_port.split_once(':') {
            Some((h, _)) => (h, &host_port[h.len()..]),
            None => (host_port, ""),
        }
    };

    let mut out = String::new();
    if let Some(userinfo) = userinfo {
        out.push_str(userinfo);
        out.push('@');
    }
    out.push_str(&lowercase_ascii_host(host));
    out.push_str(port);
    out
}

fn common_case_normalizer() -> CallbackTable {
    let mut table = CallbackTable::new();
    table.insert(
        "opaque",
        Arc::new(|_, _, current: &str, _| uppercase_pct_encoded(current)),
    );
    table
}

fn generic_percent_encoding_normalizer() -> CallbackTable {
    let mut table = CallbackTable::new();
    for field in PCT_BEARING_FIELDS.iter().chain(["host", "authority"].iter()) {
        table.insert(
            *field,
            Arc::new(|ctx: &ReductionContext, _, current: &str, _| {
                pct_encoding::unescape(current, &ctx.unreserved)
            }),
        );
    }
    table
}

fn generic_scheme_based_normalizer() -> CallbackTable {
    let mut table = CallbackTable::new();
    table.insert(
        "path",
        Arc::new(|_, _, current: &str, _| {
            if current.is_empty() {
                "/".to_string()
            } else {
                current.to_string()
            }
        }),
    );
    table.insert(
        "authority",
        Arc::new(|ctx: &ReductionContext, _, current: &str, _| strip_default_port(ctx, current)),
    );
    table
}

/// Strip a trailing `:<default_port>` or bare trailing `:` from an authority value. Strips
/// exactly `:default_port` or a bare trailing `:`, never a shorter numeric prefix of the
/// default port.
fn strip_default_port(ctx: &ReductionContext, current: &str) -> String {
    if let Some(stripped) = current.strip_suffix(':') {
        return stripped.to_string();
    }
    if let Some(default_port) = &ctx.default_port {
        let suffix = format!(":{}", default_port);
        if let Some(stripped) = current.strip_suffix(&suffix) {
            return stripped.to_string();
        }
    }
    current.to_string()
}

/// The `uri_converter`/`iri_converter` default: IDN ToASCII on `reg_name` when the binding marks
/// it as a domain name, identity everywhere else. The URI side uses the strict/STD3 profile
/// (`UseSTD3ASCIIRules = true`); the IRI side uses the lenient profile that allows unassigned code
/// points.
fn idn_converter(lenient: bool) -> CallbackTable {
    let mut table = CallbackTable::new();
    table.insert(
        "reg_name",
        Arc::new(move |ctx: &ReductionContext, _, current: &str, _| {
            if !ctx.reg_name_is_domain_name {
                return current.to_string();
            }
            let result = if lenient {
                idna::domain_to_ascii(current)
            } else {
                idna::domain_to_ascii_strict(current)
            };
            match result {
                Ok(ascii) => ascii,
                Err(_) => {
                    tracing::warn!(host = current, "IDN ToASCII failed; keeping original reg_name");
                    current.to_string()
                }
            }
        }),
    );
    table
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn ctx(default_port: Option<&str>) -> ReductionContext {
        ReductionContext {
            reserved: Regex::new(r"^[:/?#\[\]@!$&'()*+,;=]$").unwrap(),
            unreserved: Regex::new(r"^[A-Za-z0-9\-._~]$").unwrap(),
            default_port: default_port.map(String::from),
            reg_name_is_domain_name: true,
        }
    }

    #[test]
    fn test_uppercase_pct_encoded() {
        assert_eq!(uppercase_pct_encoded("%7e"), "%7E");
    }

    #[test]
    fn test_host_case_normalizer_ascii_only() {
        let table = generic_case_normalizer();
        let c = ctx(None);
        assert_eq!(table.call(&c, "host", "EXAMPLE.COM", "<host>"), "example.com");
        assert_eq!(table.call(&c, "host", "Ex\u{e4}mple", "<host>"), "Ex\u{e4}mple");
    }

    #[test]
    fn test_lowercase_authority_host_preserves_userinfo_and_port() {
        assert_eq!(
            lowercase_authority_host("John.Doe@GoOgLe.CoM:8080"),
            "John.Doe@google.com:8080"
        );
        assert_eq!(lowercase_authority_host("GoOgLe.CoM"), "google.com");
        assert_eq!(
            lowercase_authority_host("[2001:DB8::7]:80"),
            "[2001:db8::7]:80"
        );
    }

    #[test]
    fn test_strip_default_port() {
        let c = ctx(Some("80"));
        assert_eq!(strip_default_port(&c, "example.com:80"), "example.com");
        assert_eq!(strip_default_port(&c, "example.com:"), "example.com");
        assert_eq!(strip_default_port(&c, "example.com:8080"), "example.com:8080");
    }

    #[test]
    fn test_scheme_based_path_defaulting() {
        let table = generic_scheme_based_normalizer();
        assert_eq!(table.call(&ctx(None), "path", "", "<path>"), "/");
        assert_eq!(table.call(&ctx(None), "path", "/a", "<path>"), "/a");
    }
}
