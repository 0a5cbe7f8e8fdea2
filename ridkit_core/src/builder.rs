/*!
Provides a fluent builder for assembling an [`Identifier`](crate::Identifier) from its
components rather than parsing a complete string. The builder only assembles a candidate
string; the actual grammar traversal runs, as always, inside [`Identifier::parse`].

# Example

```rust
use ridkit_core::builder::IdentifierBuilder;

let id = IdentifierBuilder::default()
    .scheme("https")
    .user_name("john.doe")
    .host("www.example.com")
    .port(123)
    .path("/forum/questions/")
    .query("tag=networking&order=newest")
    .fragment("top")
    .build()
    .unwrap();

assert_eq!(id.scheme(), Some("https"));
```
*/

#![allow(clippy::module_name_repetitions)]

use crate::error::Result as IriResult;
use crate::Identifier;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// Assembles scheme, userinfo, host, port, path, query, and fragment into a single string and
/// hands it to [`Identifier::parse`]. Components are not individually validated here; whatever
/// the grammar rejects, `build()` rejects.
///
#[derive(Clone, Debug, Default)]
pub struct IdentifierBuilder {
    scheme: Option<String>,
    user_name: Option<String>,
    password: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    path: Option<String>,
    query: Option<String>,
    fragment: Option<String>,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl IdentifierBuilder {
    /// Use the provided scheme for this identifier.
    pub fn scheme(mut self, scheme: &str) -> Self {
        self.scheme = Some(scheme.to_string());
        self
    }

    /// Use the provided host for this identifier's authority.
    pub fn host(mut self, host: &str) -> Self {
        self.host = Some(host.to_string());
        self
    }

    /// Use the provided port for this identifier's authority.
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Use the provided user name for this identifier's authority.
    pub fn user_name(mut self, user_name: &str) -> Self {
        self.user_name = Some(user_name.to_string());
        self
    }

    /// Use the provided user name and password for this identifier's authority.
    pub fn user(mut self, user_name: &str, password: &str) -> Self {
        self.user_name = Some(user_name.to_string());
        self.password = Some(password.to_string());
        self
    }

    /// Use the provided password for this identifier's authority.
    pub fn password(mut self, password: &str) -> Self {
        self.password = Some(password.to_string());
        self
    }

    /// Use the provided path for this identifier.
    pub fn path(mut self, path: &str) -> Self {
        self.path = Some(path.to_string());
        self
    }

    /// Use the root path ("/") for this identifier.
    pub fn path_root(self) -> Self {
        self.path("/")
    }

    /// Use the provided query for this identifier.
    pub fn query(mut self, query: &str) -> Self {
        self.query = Some(query.to_string());
        self
    }

    /// Use the provided fragment for this identifier.
    pub fn fragment(mut self, fragment: &str) -> Self {
        self.fragment = Some(fragment.to_string());
        self
    }

    /// Assemble the configured components into a string and parse it.
    pub fn build(self) -> IriResult<Identifier> {
        let mut out = String::new();

        if let Some(scheme) = &self.scheme {
            out.push_str(scheme);
            out.push(':');
        }

        if self.host.is_some() || self.user_name.is_some() {
            out.push_str("//");
            if let Some(user_name) = &self.user_name {
                out.push_str(user_name);
                if let Some(password) = &self.password {
                    out.push(':');
                    out.push_str(password);
                }
                out.push('@');
            }
            if let Some(host) = &self.host {
                out.push_str(host);
            }
            if let Some(port) = self.port {
                out.push(':');
                out.push_str(&port.to_string());
            }
        }

        if let Some(path) = &self.path {
            out.push_str(path);
        }

        if let Some(query) = &self.query {
            out.push('?');
            out.push_str(query);
        }

        if let Some(fragment) = &self.fragment {
            out.push('#');
            out.push_str(fragment);
        }

        Identifier::parse(&out)
    }
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------
