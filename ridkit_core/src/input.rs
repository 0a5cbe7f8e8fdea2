/*!
Input construction: accept either a plain string or a `{input, octets, encoding,
decode_strategy, is_character_normalized}` configuration, and apply URI-compat pre-cleaning when
that mode is enabled.
*/

use crate::error::{ErrorKind, Result};
use crate::setup;
use encoding_rs::Encoding;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeStrategy {
    FailOnInvalid,
    Lossy,
}

impl Default for DecodeStrategy {
    fn default() -> Self {
        DecodeStrategy::FailOnInvalid
    }
}

///
/// The configuration-set form of input construction. Exactly one of `input`/`octets` must be
/// present; `encoding` is required alongside `octets`.
///
#[derive(Clone, Debug, Default)]
pub struct InputSpec {
    pub input: Option<String>,
    pub octets: Option<Vec<u8>>,
    pub encoding: Option<String>,
    pub decode_strategy: DecodeStrategy,
    pub is_character_normalized: Option<bool>,
}

const UCS_ENCODINGS: &[&str] = &[
    "UTF-8", "UTF-16", "UTF-16BE", "UTF-16LE", "UTF-32", "UTF-32BE", "UTF-32LE",
];

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

impl InputSpec {
    pub fn from_str(s: impl Into<String>) -> Self {
        Self {
            input: Some(s.into()),
            ..Self::default()
        }
    }

    pub fn from_octets(octets: Vec<u8>, encoding: impl Into<String>) -> Self {
        Self {
            octets: Some(octets),
            encoding: Some(encoding.into()),
            ..Self::default()
        }
    }

    ///
    /// Resolve this spec to a single input string: validate the `input`/`octets` shape, decode
    /// octets under the declared encoding and strategy, then apply URI-compat pre-cleaning when
    /// [`setup::uri_compat`] is enabled.
    ///
    pub fn resolve(&self) -> Result<String> {
        let decoded = match (&self.input, &self.octets) {
            (Some(_), Some(_)) => {
                return Err(ErrorKind::InputShape("both `input` and `octets` were supplied".into()).into())
            }
            (None, None) => {
                return Err(ErrorKind::InputShape("neither `input` nor `octets` was supplied".into()).into())
            }
            (Some(s), None) => s.clone(),
            (None, Some(octets)) => {
                let encoding_name = self.encoding.as_ref().ok_or_else(|| {
                    ErrorKind::InputShape("`octets` was supplied without `encoding`".to_string())
                })?;
                decode_octets(octets, encoding_name, self.decode_strategy)?
            }
        };

        Ok(pre_clean(decoded))
    }

    /// Whether the resolved input should be treated as already character-normalized: the explicit
    /// flag if set, else inferred from the encoding's membership in the UCS set. The encoding is
    /// resolved to its canonical name first, mirroring [`decode_octets`], so a WHATWG alias like
    /// `"utf8"` or `"unicode-1-1-utf-8"` is recognized the same way it is for decoding.
    pub fn is_character_normalized(&self) -> bool {
        if let Some(flag) = self.is_character_normalized {
            return flag;
        }
        match &self.encoding {
            Some(name) => match Encoding::for_label(name.as_bytes()) {
                Some(encoding) => UCS_ENCODINGS
                    .iter()
                    .any(|ucs| ucs.eq_ignore_ascii_case(encoding.name())),
                None => false,
            },
            None => true,
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn decode_octets(octets: &[u8], encoding_name: &str, strategy: DecodeStrategy) -> Result<String> {
    let encoding = Encoding::for_label(encoding_name.as_bytes())
        .ok_or_else(|| ErrorKind::DecodeFailed(encoding_name.to_string()))?;
    let (decoded, _, had_errors) = encoding.decode(octets);
    if had_errors && strategy == DecodeStrategy::FailOnInvalid {
        return Err(ErrorKind::DecodeFailed(encoding_name.to_string()).into());
    }
    Ok(decoded.into_owned())
}

/// Strip a `<URL:...>`/`<...>` wrapper, strip surrounding double quotes, and trim ASCII
/// whitespace, when URI-compat mode is enabled.
fn pre_clean(input: String) -> String {
    if !setup::uri_compat() {
        return input;
    }

    let trimmed = input.trim_matches(|c: char| c == ' ' || c == '\t' || c == '\r' || c == '\n');
    let unwrapped = if let Some(inner) = trimmed.strip_prefix('<').and_then(|s| s.strip_suffix('>')) {
        inner.strip_prefix("URL:").unwrap_or(inner)
    } else {
        trimmed
    };
    let unquoted = unwrapped
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(unwrapped);
    unquoted
        .trim_matches(|c: char| c == ' ' || c == '\t' || c == '\r' || c == '\n')
        .to_string()
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_shape_requires_exactly_one_source() {
        assert!(matches!(
            InputSpec::default().resolve().unwrap_err().kind(),
            ErrorKind::InputShape(_)
        ));
        assert!(matches!(
            InputSpec {
                input: Some("http://example.com".into()),
                octets: Some(vec![1]),
                ..InputSpec::default()
            }
            .resolve()
            .unwrap_err()
            .kind(),
            ErrorKind::InputShape(_)
        ));
    }

    #[test]
    fn test_octets_without_encoding_is_input_shape_error() {
        let spec = InputSpec {
            octets: Some(vec![b'a']),
            ..InputSpec::default()
        };
        assert!(matches!(spec.resolve().unwrap_err().kind(), ErrorKind::InputShape(_)));
    }

    #[test]
    fn test_is_character_normalized_infers_from_ucs_encoding() {
        let utf8 = InputSpec::from_octets(vec![], "UTF-8");
        assert!(utf8.is_character_normalized());

        let latin1 = InputSpec::from_octets(vec![], "windows-1252");
        assert!(!latin1.is_character_normalized());
    }

    #[test]
    fn test_is_character_normalized_resolves_encoding_aliases() {
        let alias = InputSpec::from_octets(vec![], "utf8");
        assert!(alias.is_character_normalized());

        let alias = InputSpec::from_octets(vec![], "unicode-1-1-utf-8");
        assert!(alias.is_character_normalized());

        let alias = InputSpec::from_octets(vec![], "iso-8859-1");
        assert!(!alias.is_character_normalized());
    }

    #[test]
    fn test_decode_octets_roundtrip() {
        let spec = InputSpec::from_octets("http://example.com".as_bytes().to_vec(), "UTF-8");
        assert_eq!(spec.resolve().unwrap(), "http://example.com");
    }
}
