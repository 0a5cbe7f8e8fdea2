/*!
The process-wide `Setup` singleton: read-mostly configuration captured once at engine
initialization and treated as an immutable snapshot thereafter so that parses stay reproducible.
*/

use std::sync::RwLock;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

#[derive(Clone, Debug)]
pub struct Setup {
    pub marpa_trace_terminals: i32,
    pub marpa_trace_values: i32,
    pub marpa_trace: i32,
    pub uri_compat: bool,
    pub plugins_dirname: String,
    pub impl_dirname: String,
    pub can_scheme_methodname: String,
    pub abs_remote_leading_dots: bool,
    pub remove_dot_segments_strict: bool,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl Default for Setup {
    fn default() -> Self {
        Self {
            marpa_trace_terminals: 0,
            marpa_trace_values: 0,
            marpa_trace: 0,
            uri_compat: false,
            plugins_dirname: "Plugins".to_string(),
            impl_dirname: "Impl".to_string(),
            can_scheme_methodname: "can_scheme".to_string(),
            abs_remote_leading_dots: false,
            remove_dot_segments_strict: true,
        }
    }
}

lazy_static! {
    static ref SETUP: RwLock<Setup> = RwLock::new(Setup::default());
}

/// A snapshot of the current process-wide configuration.
pub fn current() -> Setup {
    SETUP.read().expect("setup lock poisoned").clone()
}

/// Replace the process-wide configuration. Intended to be called once, early, by the embedding
/// application; parses started after this call observe the new values.
pub fn configure(setup: Setup) {
    *SETUP.write().expect("setup lock poisoned") = setup;
    tracing::debug!("setup reconfigured");
}

/// `true` when URI-compat mode is enabled.
pub fn uri_compat() -> bool {
    current().uri_compat
}
