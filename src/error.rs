//! Error types.

use core::fmt;

/// A grammar production an input can be matched against.
///
/// The first three are the ABNF rules of [RFC 3986]; the last three are
/// their counterparts over the extended alphabet of [RFC 3987].
///
/// [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986#appendix-A
/// [RFC 3987]: https://datatracker.ietf.org/doc/html/rfc3987#section-2.2
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Production {
    /// The `URI` rule.
    Uri,
    /// The `URI-reference` rule.
    UriReference,
    /// The `absolute-URI` rule, with the authority required.
    AbsoluteUri,
    /// The `IRI` rule.
    Iri,
    /// The `IRI-reference` rule.
    IriReference,
    /// The `absolute-IRI` rule, with the authority required.
    AbsoluteIri,
}

impl Production {
    /// Returns the ABNF rule name of the production.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Production::Uri => "URI",
            Production::UriReference => "URI-reference",
            Production::AbsoluteUri => "absolute-URI",
            Production::Iri => "IRI",
            Production::IriReference => "IRI-reference",
            Production::AbsoluteIri => "absolute-IRI",
        }
    }
}

/// An error occurred when an input failed to fully match the requested
/// grammar production.
///
/// Matching is anchored at both ends; there is no partial-match mode.
///
/// # Examples
///
/// ```
/// use strict_uri::Production;
///
/// let e = strict_uri::parse_uri("not a uri").unwrap_err();
/// assert_eq!(e.production(), Production::Uri);
/// assert_eq!(e.input(), "not a uri");
/// assert_eq!(e.to_string(), r#"invalid URI: "not a uri""#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidIdentifier {
    production: Production,
    input: String,
}

impl InvalidIdentifier {
    pub(crate) fn new(production: Production, input: &str) -> Self {
        Self {
            production,
            input: input.to_owned(),
        }
    }

    /// Returns the production the input was matched against.
    #[must_use]
    pub fn production(&self) -> Production {
        self.production
    }

    /// Returns the offending input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for InvalidIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {:?}", self.production.name(), self.input)
    }
}

impl std::error::Error for InvalidIdentifier {}
