/*!
The ladder engine: nine parallel output strings maintained across a single grammar traversal.

Every grammar reduction (see [`crate::grammar`]) concatenates its children's ladder arrays index
by index, then runs the cumulative normalizer chain over indices 3..8 and the two independent
converters over indices 1..2. [`CallbackTable`] is the per-stage criteria-key → callback lookup
that [`crate::normalize`]'s built-in tables and a scheme overlay's extensions both populate.
*/

use crate::types::LADDER_LEN;
use regex::Regex;
use std::collections::HashMap;
use std::sync::Arc;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

/// One ladder snapshot value: nine strings, indexed per [`crate::types::LadderIndex`].
pub type LadderArray = [String; LADDER_LEN];

///
/// The inputs a normalizer or converter callback may consult beyond the current value: the
/// predicates and defaults bound at parameterization time.
///
#[derive(Clone, Debug)]
pub struct ReductionContext {
    pub reserved: Regex,
    pub unreserved: Regex,
    pub default_port: Option<String>,
    pub reg_name_is_domain_name: bool,
}

///
/// Signature shared by normalizer and converter callbacks: `(context, criteria, current, lhs) ->
/// new value`. Lookups fall through to the identity function when a criteria key is unregistered,
/// so every callback a table returns is total.
///
pub type Callback = Arc<dyn Fn(&ReductionContext, &str, &str, &str) -> String + Send + Sync>;

///
/// A criteria-key → callback table for one ladder stage. Overlays compose by wrapping an inner
/// table and layering their own entries on top ("extend the above tables
/// by composition, not replacement").
///
#[derive(Clone)]
pub struct CallbackTable {
    entries: HashMap<String, Callback>,
}

impl std::fmt::Debug for CallbackTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackTable")
            .field("entries", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl CallbackTable {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, criteria: impl Into<String>, f: Callback) -> &mut Self {
        self.entries.insert(criteria.into(), f);
        self
    }

    /// A table with `f` bound to every key in `criteria`.
    pub fn with_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Callback)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (k, f) in entries {
            table.insert(k, f);
        }
        table
    }

    /// Layer `overlay`'s entries over `self`; overlay entries win on key collision. Matches the
    /// "extend by composition, not replacement" overlay contract: `self` is untouched, callers
    /// already holding a clone keep seeing the unextended table.
    pub fn extended_with(&self, overlay: &CallbackTable) -> CallbackTable {
        let mut merged = self.entries.clone();
        for (k, v) in &overlay.entries {
            merged.insert(k.clone(), v.clone());
        }
        CallbackTable { entries: merged }
    }

    /// Invoke the callback bound to `criteria`, or the identity function if none is bound.
    pub fn call(&self, ctx: &ReductionContext, criteria: &str, current: &str, lhs: &str) -> String {
        match self.entries.get(criteria) {
            Some(f) => f(ctx, criteria, current, lhs),
            None => current.to_string(),
        }
    }
}

impl Default for CallbackTable {
    fn default() -> Self {
        Self::new()
    }
}

///
/// The six normalizer tables, one per ladder index 3..8, applied cumulatively and in order.
///
#[derive(Clone, Debug)]
pub struct NormalizerTables {
    pub case_normalizer: CallbackTable,
    pub character_normalizer: CallbackTable,
    pub percent_encoding_normalizer: CallbackTable,
    pub path_segment_normalizer: CallbackTable,
    pub scheme_based_normalizer: CallbackTable,
    pub protocol_based_normalizer: CallbackTable,
}

impl NormalizerTables {
    /// The tables in ladder order, indices 3..8 inclusive.
    fn ordered(&self) -> [&CallbackTable; 6] {
        [
            &self.case_normalizer,
            &self.character_normalizer,
            &self.percent_encoding_normalizer,
            &self.path_segment_normalizer,
            &self.scheme_based_normalizer,
            &self.protocol_based_normalizer,
        ]
    }
}

///
/// The two converter tables, applied independently to indices 1 and 2.
///
#[derive(Clone, Debug)]
pub struct ConverterTables {
    pub uri_converter: CallbackTable,
    pub iri_converter: CallbackTable,
}

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

/// A leaf terminal's ladder contribution: the same string at every index.
pub fn leaf(s: &str) -> LadderArray {
    std::array::from_fn(|_| s.to_string())
}

///
/// Run one grammar reduction through the ladder pipeline: concatenate children at every index,
/// chain the normalizers cumulatively over indices 3..8, then apply the two converters
/// independently over indices 1..2. This is the shared reduction algorithm, applied both to
/// ordinary grammar reductions (`lhs` is the rule's LHS symbol) and, once, to the whole input
/// string before parsing (`criteria == ""`, a single leaf child, `lhs == ""`).
///
pub fn reduce(
    criteria: &str,
    children: &[LadderArray],
    normalizers: &NormalizerTables,
    converters: &ConverterTables,
    ctx: &ReductionContext,
    lhs: &str,
) -> LadderArray {
    let mut rc: LadderArray = std::array::from_fn(|_| String::new());

    for i in 0..LADDER_LEN {
        let mut acc = String::new();
        for child in children {
            acc.push_str(&child[i]);
        }
        rc[i] = acc;
    }

    let mut current = rc[3].clone();
    for (offset, table) in normalizers.ordered().into_iter().enumerate() {
        current = table.call(ctx, criteria, &current, lhs);
        rc[3 + offset] = current.clone();
    }

    rc[1] = converters.uri_converter.call(ctx, criteria, &rc[1], lhs);
    rc[2] = converters.iri_converter.call(ctx, criteria, &rc[2], lhs);

    rc
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------
