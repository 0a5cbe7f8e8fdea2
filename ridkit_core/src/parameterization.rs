/*!
Parameterization: binding a kind (common/generic), a grammar, and a field mapping into a concrete
identifier type.

A [`ParameterizationDescriptor`] names the grammar, the record kind, the default predicates, and
the criteria-key → struct-field mapping. [`ParameterizationDescriptor::bind`] runs the sanity
checks a descriptor must pass before it is usable, and installs the default builder
callbacks (identity normalizers/converters, `reserved`/`unreserved` predicates, `default_port`,
`reg_name_is_domain_name`). A scheme overlay wraps a bound descriptor and extends its tables.
*/

use crate::error::{ErrorKind, Result};
use crate::ladder::{ConverterTables, NormalizerTables, ReductionContext};
use crate::normalize;
use crate::types::IdentifierKind;
use regex::Regex;
use std::collections::HashSet;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// The fields a `generic`-kind record declares; `bind` checks the mapping covers exactly this
/// set. `common`-kind fields are a strict subset (the first four).
///
pub const GENERIC_FIELDS: &[&str] = &[
    "output",
    "scheme",
    "opaque",
    "fragment",
    "hier_part",
    "query",
    "segment",
    "authority",
    "path",
    "relative_ref",
    "relative_part",
    "userinfo",
    "host",
    "port",
    "ip_literal",
    "ipv4_address",
    "reg_name",
    "ipv6_address",
    "ipv6_addrz",
    "ipvfuture",
    "zoneid",
    "segments",
];

pub const COMMON_FIELDS: &[&str] = &["output", "scheme", "opaque", "fragment"];

///
/// Names the grammar, field mapping, and default predicates for one identifier kind or scheme.
/// `whoami` is a human-readable label used in error messages and logs.
///
#[derive(Clone, Debug)]
pub struct ParameterizationDescriptor {
    pub whoami: String,
    pub kind: IdentifierKind,
    pub bnf: String,
    pub reserved: Regex,
    pub unreserved: Regex,
    pub pct_encoded: Option<String>,
    pub mapping: Vec<(String, String)>,
    pub default_port: Option<String>,
    pub reg_name_is_domain_name: bool,
}

///
/// The result of binding a descriptor: the validated field mapping plus the normalizer/converter
/// tables and reduction context ready to drive the ladder engine.
///
#[derive(Clone, Debug)]
pub struct Binding {
    pub descriptor: ParameterizationDescriptor,
    pub normalizers: NormalizerTables,
    pub converters: ConverterTables,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl ParameterizationDescriptor {
    ///
    /// Run the binding-time sanity checks, then install the default builder callbacks.
    /// Fails with `BindingInvalid` on a malformed symbol key, an unknown field value, or a field
    /// left unmapped.
    ///
    pub fn bind(self) -> Result<Binding> {
        let known_fields: HashSet<&str> = match self.kind {
            IdentifierKind::Common => COMMON_FIELDS.iter().copied().collect(),
            IdentifierKind::Generic => GENERIC_FIELDS.iter().copied().collect(),
        };

        let mut mapped_fields: HashSet<&str> = HashSet::new();
        for (symbol, field) in &self.mapping {
            if !(symbol.starts_with('<') && symbol.ends_with('>') && symbol.len() > 2) {
                return Err(ErrorKind::BindingInvalid(format!(
                    "mapping key `{}` is not of the form <name>",
                    symbol
                ))
                .into());
            }
            if !known_fields.contains(field.as_str()) {
                return Err(ErrorKind::BindingInvalid(format!(
                    "mapping value `{}` is not a known field of `{:?}`",
                    field, self.kind
                ))
                .into());
            }
            mapped_fields.insert(field.as_str());
        }

        let missing: Vec<&str> = known_fields
            .iter()
            .filter(|f| !mapped_fields.contains(*f))
            .copied()
            .collect();
        if !missing.is_empty() {
            return Err(ErrorKind::BindingInvalid(format!(
                "fields left unmapped: {}",
                missing.join(", ")
            ))
            .into());
        }

        let (normalizers, converters) = match self.kind {
            IdentifierKind::Common => (normalize::common_normalizers(), normalize::common_converters()),
            IdentifierKind::Generic => (normalize::generic_normalizers(), normalize::generic_converters()),
        };

        Ok(Binding {
            descriptor: self,
            normalizers,
            converters,
        })
    }
}

impl Binding {
    pub fn reduction_context(&self) -> ReductionContext {
        ReductionContext {
            reserved: self.descriptor.reserved.clone(),
            unreserved: self.descriptor.unreserved.clone(),
            default_port: self.descriptor.default_port.clone(),
            reg_name_is_domain_name: self.descriptor.reg_name_is_domain_name,
        }
    }

    /// Resolve the criteria key for a reduction: the mapped field name for `lhs`, if mapped, else
    /// `lhs` itself.
    pub fn criteria_key<'a>(&'a self, lhs: &'a str) -> &'a str {
        self.descriptor
            .mapping
            .iter()
            .find(|(symbol, _)| symbol == lhs)
            .map(|(_, field)| field.as_str())
            .unwrap_or(lhs)
    }
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------
