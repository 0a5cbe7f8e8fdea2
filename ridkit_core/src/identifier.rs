/*!
The top-level public identifier type: construction, read-only accessors, indexed/named access
into the nine-stage ladder, and reference resolution.
*/

use crate::error::{Error, ErrorKind, Result};
use crate::grammar;
use crate::input::InputSpec;
use crate::parameterization::{Binding, ParameterizationDescriptor, GENERIC_FIELDS};
use crate::resolver;
use crate::types::{GenericRecord, IdentifierKind, LadderIndex, LadderSnapshot};
use regex::Regex;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// A parsed Resource Identifier: the nine-stage ladder snapshot produced by one grammar traversal,
/// together with the binding that produced it. Immutable after construction except that parsing a
/// new input replaces the whole snapshot atomically (there is no in-place field mutation).
///
#[derive(Clone)]
pub struct Identifier {
    binding: Binding,
    snapshot: LadderSnapshot<GenericRecord>,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl Identifier {
    ///
    /// Parse `s` as a generic identifier using the default RFC 3986/3987 predicates (no
    /// scheme-specific overlay). Scheme overlays construct via [`Identifier::with_binding`]
    /// instead.
    ///
    pub fn parse(s: &str) -> Result<Self> {
        Self::with_binding(s, default_generic_binding())
    }

    /// Parse from an [`InputSpec`] (string or octets+encoding configuration set).
    pub fn from_input(spec: &InputSpec) -> Result<Self> {
        let resolved = spec.resolve()?;
        Self::with_binding(&resolved, default_generic_binding())
    }

    /// Parse `s` under a caller-supplied binding, e.g. a scheme overlay's bound descriptor.
    pub fn with_binding(s: &str, binding: Binding) -> Result<Self> {
        if s.is_empty() {
            return Err(ErrorKind::GrammarRejected(s.to_string()).into());
        }
        let snapshot = grammar::parse_generic(s, &binding)?;
        Ok(Self { binding, snapshot })
    }

    // --------------------------------------------------------------------------------------
    // Accessors (RAW / index 0)
    // --------------------------------------------------------------------------------------

    fn raw(&self) -> &GenericRecord {
        self.snapshot.get(LadderIndex::Raw)
    }

    pub fn scheme(&self) -> Option<&str> {
        self.raw().scheme.as_deref()
    }

    pub fn authority(&self) -> Option<&str> {
        self.raw().authority.as_deref()
    }

    pub fn host(&self) -> Option<&str> {
        self.raw().host.as_deref()
    }

    pub fn port(&self) -> Option<&str> {
        self.raw().port.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.raw().path.as_deref()
    }

    pub fn query(&self) -> Option<&str> {
        self.raw().query.as_deref()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.raw().fragment.as_deref()
    }

    pub fn segments(&self) -> &[String] {
        &self.raw().segments
    }

    pub fn is_absolute(&self) -> bool {
        self.raw().is_absolute()
    }

    // --------------------------------------------------------------------------------------
    // Indexed / named ladder access
    // --------------------------------------------------------------------------------------

    pub fn output_by_indice(&self, i: usize) -> Result<&str> {
        let idx = LadderIndex::from_usize(i)
            .ok_or_else(|| ErrorKind::IndiceUnknown(i.to_string()))?;
        Ok(&self.snapshot.get(idx).output)
    }

    pub fn struct_by_indice(&self, i: usize) -> Result<&GenericRecord> {
        let idx = LadderIndex::from_usize(i)
            .ok_or_else(|| ErrorKind::IndiceUnknown(i.to_string()))?;
        Ok(self.snapshot.get(idx))
    }

    pub fn output_by_type(&self, name: &str) -> Result<&str> {
        let idx = LadderIndex::from_name(name)
            .ok_or_else(|| ErrorKind::IndiceUnknown(name.to_string()))?;
        Ok(&self.snapshot.get(idx).output)
    }

    pub fn struct_by_type(&self, name: &str) -> Result<&GenericRecord> {
        let idx = LadderIndex::from_name(name)
            .ok_or_else(|| ErrorKind::IndiceUnknown(name.to_string()))?;
        Ok(self.snapshot.get(idx))
    }

    /// The normalized form exposed to external callers: index 8, `PROTOCOL_BASED_NORMALIZED`.
    pub fn normalized(&self) -> &str {
        &self.snapshot.get(LadderIndex::NORMALIZED).output
    }

    // --------------------------------------------------------------------------------------
    // Reference resolution
    // --------------------------------------------------------------------------------------

    ///
    /// Resolve `self` against `base` per RFC 3986 §5.2-§5.3. Returns `self` unchanged when `self`
    /// already has a scheme at RAW. Fails with `NotAbsolute` if `base` has no scheme, and this
    /// function always operates on generic-kind RAW records, so `WrongKind` cannot arise from the
    /// single identifier type this crate exposes; it is retained in [`crate::error::ErrorKind`]
    /// for implementations that add a `common`-kind identifier type.
    ///
    pub fn abs(&self, base: &Identifier) -> Result<Identifier> {
        if self.is_absolute() {
            return Ok(self.clone());
        }
        if !base.is_absolute() {
            return Err(ErrorKind::NotAbsolute.into());
        }

        let target = resolver::transform(self.raw(), base.raw());
        let recomposed = resolver::recompose(&target);
        Identifier::with_binding(&recomposed, self.binding.clone())
    }

    /// Byte-equality of index-8 outputs, the externally documented equality contract.
    pub fn eq_by_output(&self, other: &Identifier) -> bool {
        self.normalized() == other.normalized()
    }

    // --------------------------------------------------------------------------------------
    // Namespaced-name convenience (IRI-as-namespace usage)
    // --------------------------------------------------------------------------------------

    /// A copy of this identifier with its path replaced by `path`, reparsed under the same
    /// binding.
    pub fn with_new_path<S: AsRef<str>>(&self, path: S) -> Result<Identifier> {
        let mut record = self.raw().clone();
        record.path = Some(path.as_ref().to_string());
        Identifier::with_binding(&resolver::recompose(&record), self.binding.clone())
    }

    /// A copy of this identifier with its fragment replaced by `fragment`, reparsed under the
    /// same binding.
    pub fn with_new_fragment<S: AsRef<str>>(&self, fragment: S) -> Result<Identifier> {
        let mut record = self.raw().clone();
        record.fragment = Some(fragment.as_ref().to_string());
        Identifier::with_binding(&resolver::recompose(&record), self.binding.clone())
    }

    ///
    /// `true` if this identifier may be used as a namespace: it has an empty but present
    /// fragment, or its path ends in `/` and it has no query.
    ///
    pub fn looks_like_namespace(&self) -> bool {
        self.fragment() == Some("")
            || (self.path().unwrap_or("").ends_with('/') && self.query().is_none())
    }

    ///
    /// If this identifier is a namespaced name, split it into the namespace identifier and the
    /// trailing name. `None` if the path/fragment shape doesn't match a namespaced-name form.
    ///
    pub fn split(&self) -> Option<(Identifier, String)> {
        if let Some(fragment) = self.fragment().filter(|f| !f.is_empty()) {
            let name = fragment.to_string();
            Some((self.with_new_fragment("").ok()?, name))
        } else {
            let path = self.path().unwrap_or("");
            if !path.is_empty() && !path.ends_with('/') && self.query().is_none() {
                let split_at = path.rfind('/').map(|i| i + 1).unwrap_or(0);
                let name = path[split_at..].to_string();
                Some((self.with_new_path(&path[..split_at]).ok()?, name))
            } else {
                None
            }
        }
    }

    /// The namespace half of [`Identifier::split`], if any.
    pub fn namespace(&self) -> Option<Identifier> {
        self.split().map(|(ns, _)| ns)
    }

    /// The name half of [`Identifier::split`], if any.
    pub fn name(&self) -> Option<String> {
        self.split().map(|(_, name)| name)
    }

    /// Assuming this identifier is a namespace ([`Identifier::looks_like_namespace`]), append
    /// `name` to it. `None` if it isn't.
    pub fn make_name<S: AsRef<str>>(&self, name: S) -> Option<Identifier> {
        if self.fragment() == Some("") {
            self.with_new_fragment(name.as_ref()).ok()
        } else if self.path().unwrap_or("").ends_with('/') && self.query().is_none() {
            let new_path = format!("{}{}", self.path().unwrap_or(""), name.as_ref());
            self.with_new_path(new_path).ok()
        } else {
            None
        }
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.eq_by_output(other)
    }
}

impl Eq for Identifier {}

impl std::str::FromStr for Identifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.normalized())
    }
}

impl std::fmt::Debug for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Identifier")
            .field("whoami", &self.binding.descriptor.whoami)
            .field("raw", &self.raw().output)
            .finish()
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn default_generic_binding() -> Binding {
    lazy_static! {
        static ref BINDING: Binding = build_default_generic_binding();
    }
    BINDING.clone()
}

fn build_default_generic_binding() -> Binding {
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
        default_port: None,
        reg_name_is_domain_name: true,
    }
    .bind()
    .expect("the built-in generic descriptor's mapping is complete by construction")
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------
