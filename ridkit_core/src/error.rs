/*!
Error types for the parse/normalize/resolve engine.

The top-level `ErrorKind` enumerates the eight failure kinds a caller can
observe (`InputShape`, `DecodeFailed`, `GrammarRejected`, `GrammarAmbiguous`,
`NotAbsolute`, `WrongKind`, `BindingInvalid`, `IndiceUnknown`), plus a set of
finer-grained component-parse kinds used by the generic/common record
accessors and builders.

# Example

```rust
use ridkit_core::error::ErrorKind;
use ridkit_core::Identifier;

let err = Identifier::parse("").unwrap_err();
match err.kind() {
    ErrorKind::GrammarRejected(_) | ErrorKind::IsEmpty => (),
    other => panic!("unexpected error kind: {:?}", other),
}
```
*/

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

#[derive(Debug)]
pub enum Component {
    Scheme,
    Authority,
    Path,
    Query,
    Fragment,
}

error_chain! {
    errors {
        #[doc = "Neither `input` nor `octets` was supplied, both were, or `octets` was supplied without `encoding`."]
        InputShape(detail: String) {
            description("the input configuration is malformed")
            display("input shape error: {}", detail)
        }
        #[doc = "Decoding the supplied octets under the declared encoding failed."]
        DecodeFailed(encoding: String) {
            description("byte decode failed under the chosen strategy")
            display("failed to decode input octets as `{}`", encoding)
        }
        #[doc = "The input does not match the bound grammar."]
        GrammarRejected(input: String) {
            description("the input does not match the grammar")
            display("input `{}` was rejected by the grammar", input)
        }
        #[doc = "The input matches the bound grammar in more than one way."]
        GrammarAmbiguous(input: String) {
            description("the input matched the grammar ambiguously")
            display("input `{}` is ambiguous under the grammar", input)
        }
        #[doc = "`abs()` was invoked with a base that has no scheme."]
        NotAbsolute {
            description("the base reference has no scheme")
            display("cannot resolve against a base reference with no scheme")
        }
        #[doc = "`abs()` was invoked on a `common`-kind identifier."]
        WrongKind {
            description("operation requires a generic-kind identifier")
            display("reference resolution requires a generic-kind identifier")
        }
        #[doc = "A parameterization binding is invalid."]
        BindingInvalid(detail: String) {
            description("the parameterization mapping is invalid")
            display("invalid parameterization binding: {}", detail)
        }
        #[doc = "`output_by_indice`/`struct_by_indice` etc. were called with an unknown stage."]
        IndiceUnknown(name: String) {
            description("unrecognized ladder stage name")
            display("unrecognized ladder stage name `{}`", name)
        }
        #[doc = "A URI cannot be constructed from the empty string."]
        IsEmpty {
            description("a URI cannot be constructed from the empty string")
            display("a URI cannot be constructed from the empty string")
        }
        #[doc = "An invalid character was found."]
        InvalidChar(c: Component) {
            description("an invalid character was found")
            display("an invalid character was found in the {:?} component", c)
        }
        #[doc = "Provided string value failed a component-level grammar check."]
        Syntax(s: String) {
            description("provided string value is not valid for this component")
            display("provided string value `{}` is not valid", s)
        }
        #[doc = "A scheme string failed validation."]
        ParseSchemeError(s: String) {
            description("invalid scheme syntax")
            display("`{}` is not a valid scheme", s)
        }
        #[doc = "A port string failed validation."]
        ParsePortError(s: String) {
            description("invalid port syntax")
            display("`{}` is not a valid port", s)
        }
        #[doc = "A host string failed validation."]
        ParseHostError(s: String) {
            description("invalid host syntax")
            display("`{}` is not a valid host", s)
        }
        #[doc = "An IP address literal failed validation."]
        ParseIpAddressError(s: String) {
            description("invalid IP address literal")
            display("`{}` is not a valid IP address literal", s)
        }
        #[doc = "An authority string failed validation."]
        ParseAuthorityError(s: String) {
            description("invalid authority syntax")
            display("`{}` is not a valid authority", s)
        }
        #[doc = "A userinfo string failed validation."]
        ParseUserInfoError(s: String) {
            description("invalid userinfo syntax")
            display("`{}` is not a valid userinfo", s)
        }
    }
}
