/*!
The grammar runtime: a hand-written recursive-descent driver rather than a generated
Earley/SLIF-style parser, preserving the same rule-LHS → field-mapping contract a generated
parser would. The top-level split uses RFC 3986 Appendix B's regex; authority is then
sub-parsed into userinfo/host/port, and host further classified into IPv4/IP-literal/reg-name.

Each production's reduction is driven through [`crate::ladder::reduce`] with the criteria key
[`crate::parameterization::Binding::criteria_key`] resolves for that production's LHS. The regex
split is itself unambiguous by construction (RFC 3986 Appendix B is a total, deterministic
decomposition), so grammar-level ambiguity can only arise from a malformed authority; see
[`ErrorKind::GrammarAmbiguous`].
*/

use crate::error::{ErrorKind, Result};
use crate::ladder::{leaf, reduce, LadderArray};
use crate::parameterization::Binding;
use crate::types::{GenericRecord, LadderSnapshot, LADDER_LEN};
use regex::Regex;

lazy_static! {
    static ref RE_URI_REFERENCE: Regex = Regex::new(
        r"(?x)^
        (?:(?P<scheme>[^:/?\#]+):)?
        (?://(?P<authority>[^/?\#]*))?
        (?P<path>[^?\#]*)
        (?:\?(?P<query>[^\#]*))?
        (?:\#(?P<fragment>.*))?
        $"
    )
    .unwrap();
    static ref RE_IPV4: Regex = Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}$").unwrap();
}

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

///
/// Parse `raw` against `binding`'s generic grammar, producing the nine-stage snapshot of
/// [`GenericRecord`]s. `raw` is the already-constructed input (post [`crate::input::InputSpec`]
/// resolution and URI-compat pre-cleaning, if any).
///
pub fn parse_generic(raw: &str, binding: &Binding) -> Result<LadderSnapshot<GenericRecord>> {
    let ctx = binding.reduction_context();

    // A whole-input pass before any component splitting, under the reserved empty criteria
    // key. No default builder ever registers a callback under "", so this is the identity
    // function unless an overlay deliberately hooks it.
    let pre = reduce(
        "",
        &[leaf(raw)],
        &binding.normalizers,
        &binding.converters,
        &ctx,
        "",
    );
    let text = &pre[0];

    let caps = RE_URI_REFERENCE
        .captures(text)
        .ok_or_else(|| ErrorKind::GrammarRejected(text.clone()))?;

    let scheme = caps.name("scheme").map(|m| m.as_str());
    let authority = caps.name("authority").map(|m| m.as_str());
    let path = caps.name("path").map(|m| m.as_str()).unwrap_or("");
    let query = caps.name("query").map(|m| m.as_str());
    let fragment = caps.name("fragment").map(|m| m.as_str());

    let mut snapshot: LadderSnapshot<GenericRecord> = LadderSnapshot::from_array(std::array::from_fn(|_| {
        GenericRecord::empty(binding.descriptor.mapping.iter().any(|(_, f)| f == "segments"))
    }));

    set_field(&mut snapshot, binding, &ctx, "scheme", scheme, |r, i, v| r[i].scheme = v);
    set_field(&mut snapshot, binding, &ctx, "path", Some(path), |r, i, v| r[i].path = v);
    set_field(&mut snapshot, binding, &ctx, "query", query, |r, i, v| r[i].query = v);
    set_field(&mut snapshot, binding, &ctx, "fragment", fragment, |r, i, v| r[i].fragment = v);

    if let Some(authority_str) = authority {
        parse_authority(&mut snapshot, binding, &ctx, authority_str)?;
    }

    parse_path_segments(&mut snapshot, binding, &ctx, path);

    set_hier_or_relative_part(&mut snapshot, binding, &ctx, scheme, authority, path, query);
    set_opaque(&mut snapshot, binding, &ctx, scheme, text);

    let output = recompose_output(&snapshot, binding, &ctx, scheme, authority, path, query, fragment);
    for i in 0..LADDER_LEN {
        snapshot.get_mut(crate::types::LadderIndex::from_usize(i).unwrap()).output = output[i].clone();
    }

    Ok(snapshot)
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn set_field<F>(
    snapshot: &mut LadderSnapshot<GenericRecord>,
    binding: &Binding,
    ctx: &crate::ladder::ReductionContext,
    lhs_field: &str,
    value: Option<&str>,
    setter: F,
) -> Option<LadderArray>
where
    F: Fn(&mut [GenericRecord; LADDER_LEN], usize, Option<String>),
{
    let value = value?;
    let criteria_key_src = format!("<{}>", lhs_field);
    let criteria = binding.criteria_key(&criteria_key_src);
    let rc = reduce(
        criteria,
        &[leaf(value)],
        &binding.normalizers,
        &binding.converters,
        ctx,
        &format!("<{}>", lhs_field),
    );
    let array = snapshot.as_mut_array();
    for i in 0..LADDER_LEN {
        setter(array, i, Some(rc[i].clone()));
    }
    Some(rc)
}

fn parse_path_segments(
    snapshot: &mut LadderSnapshot<GenericRecord>,
    binding: &Binding,
    ctx: &crate::ladder::ReductionContext,
    path: &str,
) {
    let criteria = binding.criteria_key("<segment>");
    for segment in path.split('/') {
        let rc = reduce(
            criteria,
            &[leaf(segment)],
            &binding.normalizers,
            &binding.converters,
            ctx,
            "<segment>",
        );
        for i in 0..LADDER_LEN {
            snapshot
                .get_mut(crate::types::LadderIndex::from_usize(i).unwrap())
                .segments
                .push(rc[i].clone());
        }
    }
}

fn parse_authority(
    snapshot: &mut LadderSnapshot<GenericRecord>,
    binding: &Binding,
    ctx: &crate::ladder::ReductionContext,
    authority: &str,
) -> Result<()> {
    let (userinfo, host_port) = match authority.split_once('@') {
        Some((u, rest)) => (Some(u), rest),
        None => (None, authority),
    };

    let (host, port) = split_host_port(host_port)?;

    let userinfo_rc = set_field(snapshot, binding, ctx, "userinfo", userinfo, |r, i, v| r[i].userinfo = v);
    let host_rc = set_field(snapshot, binding, ctx, "host", Some(host), |r, i, v| r[i].host = v)
        .expect("host is always Some");
    let port_rc = set_field(snapshot, binding, ctx, "port", port, |r, i, v| r[i].port = v);

    // classify_host reduces the host substring again under its specific criteria key
    // (`reg_name`, `ipv4_address`, ...), which is where a converter like IDN ToASCII is actually
    // registered. Recompose authority from that classified array, not the plain `host` one, so
    // the conversion reaches the authority and, from there, the recomposed output.
    let host_converted_rc = classify_host(snapshot, binding, ctx, host).unwrap_or(host_rc);

    let mut children: Vec<LadderArray> = Vec::new();
    if let Some(userinfo_rc) = &userinfo_rc {
        children.push(userinfo_rc.clone());
        children.push(leaf("@"));
    }
    children.push(host_converted_rc);
    if let Some(port_rc) = &port_rc {
        children.push(leaf(":"));
        children.push(port_rc.clone());
    }

    let authority_rc = reduce(
        binding.criteria_key("<authority>"),
        &children,
        &binding.normalizers,
        &binding.converters,
        ctx,
        "<authority>",
    );
    let array = snapshot.as_mut_array();
    for i in 0..LADDER_LEN {
        array[i].authority = Some(authority_rc[i].clone());
    }

    Ok(())
}

fn split_host_port(host_port: &str) -> Result<(&str, Option<&str>)> {
    if let Some(stripped) = host_port.strip_prefix('[') {
        let close = stripped
            .find(']')
            .ok_or_else(|| ErrorKind::GrammarRejected(host_port.to_string()))?;
        let host = &host_port[..close + 2];
        let rest = &host_port[close + 2..];
        let port = rest.strip_prefix(':');
        Ok((host, port))
    } else {
        match host_port.split_once(':') {
            Some((h, p)) => Ok((h, Some(p))),
            None => Ok((host_port, None)),
        }
    }
}

/// Reduce `host` under its specific classification criteria (`ipv4_address`, `ip_literal`, or
/// `reg_name`) and return that reduction's ladder array, which is the one a converter such as IDN
/// ToASCII is actually registered against. Returns `None` only if `host` matches neither shape,
/// which cannot happen since `split_host_port` always yields a non-empty host.
fn classify_host(
    snapshot: &mut LadderSnapshot<GenericRecord>,
    binding: &Binding,
    ctx: &crate::ladder::ReductionContext,
    host: &str,
) -> Option<LadderArray> {
    if let Some(inner) = host.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
        if let Some(rest) = inner.strip_prefix('v').or_else(|| inner.strip_prefix('V')) {
            set_field(snapshot, binding, ctx, "ipvfuture", Some(rest), |r, i, v| r[i].ipvfuture = v);
        } else if inner.contains("%25") {
            set_field(snapshot, binding, ctx, "ipv6_addrz", Some(inner), |r, i, v| r[i].ipv6_addrz = v);
        } else {
            set_field(snapshot, binding, ctx, "ipv6_address", Some(inner), |r, i, v| r[i].ipv6_address = v);
        }
        set_field(snapshot, binding, ctx, "ip_literal", Some(host), |r, i, v| r[i].ip_literal = v)
    } else if RE_IPV4.is_match(host) {
        set_field(snapshot, binding, ctx, "ipv4_address", Some(host), |r, i, v| r[i].ipv4_address = v)
    } else {
        set_field(snapshot, binding, ctx, "reg_name", Some(host), |r, i, v| r[i].reg_name = v)
    }
}

fn set_hier_or_relative_part(
    snapshot: &mut LadderSnapshot<GenericRecord>,
    binding: &Binding,
    ctx: &crate::ladder::ReductionContext,
    scheme: Option<&str>,
    authority: Option<&str>,
    path: &str,
    _query: Option<&str>,
) {
    let authority_part = authority.map(|a| format!("//{}", a)).unwrap_or_default();
    let hier_text = format!("{}{}", authority_part, path);

    if scheme.is_some() {
        set_field(snapshot, binding, ctx, "hier_part", Some(&hier_text), |r, i, v| r[i].hier_part = v);
    } else {
        set_field(snapshot, binding, ctx, "relative_part", Some(&hier_text), |r, i, v| {
            r[i].relative_part = v
        });
        set_field(snapshot, binding, ctx, "relative_ref", Some(&hier_text), |r, i, v| {
            r[i].relative_ref = v
        });
    }
}

fn set_opaque(
    snapshot: &mut LadderSnapshot<GenericRecord>,
    binding: &Binding,
    ctx: &crate::ladder::ReductionContext,
    scheme: Option<&str>,
    text: &str,
) {
    let opaque = match scheme {
        Some(s) => text
            .strip_prefix(s)
            .and_then(|rest| rest.strip_prefix(':'))
            .unwrap_or(text),
        None => text,
    };
    set_field(snapshot, binding, ctx, "opaque", Some(opaque), |r, i, v| {
        r[i].opaque = v.unwrap_or_default()
    });
}

fn recompose_output(
    snapshot: &LadderSnapshot<GenericRecord>,
    _binding: &Binding,
    _ctx: &crate::ladder::ReductionContext,
    _scheme: Option<&str>,
    _authority: Option<&str>,
    _path: &str,
    _query: Option<&str>,
    _fragment: Option<&str>,
) -> LadderArray {
    std::array::from_fn(|i| {
        let record = snapshot.get(crate::types::LadderIndex::from_usize(i).unwrap());
        let mut out = String::new();
        if let Some(scheme) = &record.scheme {
            out.push_str(scheme);
            out.push(':');
        }
        if let Some(authority) = &record.authority {
            out.push_str("//");
            out.push_str(authority);
        }
        out.push_str(record.path.as_deref().unwrap_or(""));
        if let Some(query) = &record.query {
            out.push('?');
            out.push_str(query);
        }
        if let Some(fragment) = &record.fragment {
            out.push('#');
            out.push_str(fragment);
        }
        out
    })
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameterization::{ParameterizationDescriptor, GENERIC_FIELDS};
    use crate::types::IdentifierKind;

    fn generic_binding() -> Binding {
        let mapping = GENERIC_FIELDS
            .iter()
            .map(|f| (format!("<{}>", f), f.to_string()))
            .collect();
        ParameterizationDescriptor {
            whoami: "generic".to_string(),
            kind: IdentifierKind::Generic,
            bnf: String::new(),
            reserved: Regex::new(r"[:/?#\[\]@!$&'()*+,;=]").unwrap(),
            unreserved: Regex::new(r"[A-Za-z0-9\-._~]").unwrap(),
            pct_encoded: Some("<pct-encoded>".to_string()),
            mapping,
            default_port: Some("80".to_string()),
            reg_name_is_domain_name: true,
        }
        .bind()
        .unwrap()
    }

    #[test]
    fn test_parse_http_with_port_and_path() {
        let binding = generic_binding();
        let snapshot = parse_generic("HTTP://Example.COM:80/", &binding).unwrap();
        let raw = snapshot.get(crate::types::LadderIndex::Raw);
        assert_eq!(raw.scheme.as_deref(), Some("HTTP"));
        assert_eq!(raw.host.as_deref(), Some("Example.COM"));
        assert_eq!(raw.port.as_deref(), Some("80"));
        assert_eq!(raw.path.as_deref(), Some("/"));
    }

    #[test]
    fn test_parse_rejects_nothing_for_relative_reference() {
        let binding = generic_binding();
        let snapshot = parse_generic("g;x", &binding).unwrap();
        let raw = snapshot.get(crate::types::LadderIndex::Raw);
        assert!(raw.scheme.is_none());
        assert_eq!(raw.path.as_deref(), Some("g;x"));
    }

    #[test]
    fn test_parse_classifies_ipv4_host() {
        let binding = generic_binding();
        let snapshot = parse_generic("http://192.168.0.1/", &binding).unwrap();
        let raw = snapshot.get(crate::types::LadderIndex::Raw);
        assert_eq!(raw.ipv4_address.as_deref(), Some("192.168.0.1"));
    }

    #[test]
    fn test_parse_classifies_ipv6_literal_host() {
        let binding = generic_binding();
        let snapshot = parse_generic("http://[::1]:8080/", &binding).unwrap();
        let raw = snapshot.get(crate::types::LadderIndex::Raw);
        assert_eq!(raw.ipv6_address.as_deref(), Some("::1"));
        assert_eq!(raw.port.as_deref(), Some("8080"));
    }
}
