#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]

//! Spec-exact handling of URIs ([RFC 3986]) and IRIs ([RFC 3987]):
//! recognition, parsing, normalization, reference resolution and
//! relativization.
//!
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986
//! [RFC 3987]: https://datatracker.ietf.org/doc/html/rfc3987
//!
//! Every operation is a pure function over its input strings: matching is
//! anchored at both ends, single-pass, and linear in the input length.
//! Three productions are supported per alphabet, each parsing into its own
//! component record:
//!
//! | Production | URI | IRI | Record |
//! |---|---|---|---|
//! | scheme required, fragment allowed | [`parse_uri`] | [`parse_iri`] | [`Identifier`] |
//! | everything optional except path | [`parse_uri_reference`] | [`parse_iri_reference`] | [`Reference`] |
//! | scheme and authority required, no fragment | [`parse_absolute_uri`] | [`parse_absolute_iri`] | [`Absolute`] |
//!
//! # Examples
//!
//! Parse and normalize:
//!
//! ```
//! use strict_uri::{normalize_uri, parse_uri};
//!
//! let id = parse_uri("HTTP://www.EXAMPLE.com/%7esmith/home.html")?;
//! assert_eq!(id.scheme(), "HTTP");
//!
//! let canonical = normalize_uri("HTTP://www.EXAMPLE.com/%7esmith/home.html")?;
//! assert_eq!(canonical, "http://www.example.com/~smith/home.html");
//! # Ok::<_, strict_uri::InvalidIdentifier>(())
//! ```
//!
//! Resolve a relative reference against an absolute base:
//!
//! ```
//! use strict_uri::resolve_uri;
//!
//! assert_eq!(resolve_uri("../g", "http://a/b/c/d;p?q")?, "http://a/b/g");
//! # Ok::<_, strict_uri::InvalidIdentifier>(())
//! ```
//!
//! And go the other way:
//!
//! ```
//! use strict_uri::to_relative_uri;
//!
//! assert_eq!(to_relative_uri("http://a/b/c/d", "http://a/b/x")?, "../x");
//! # Ok::<_, strict_uri::InvalidIdentifier>(())
//! ```
//!
//! # Feature flags
//!
//! - `serde`: `Serialize` and `Deserialize` implementations for the
//!   component records.

pub mod component;

mod error;
mod normalize;
mod parser;
mod relativize;
mod resolve;
mod table;

pub use component::{Absolute, Authority, Identifier, Reference};
pub use error::{InvalidIdentifier, Production};

use normalize::Target;
use parser::Parsed;
use table::Alphabet;

type Result<T> = core::result::Result<T, InvalidIdentifier>;

fn parse_production(input: &str, production: Production) -> Result<Parsed> {
    parser::parse(input, production.criteria())
        .ok_or_else(|| InvalidIdentifier::new(production, input))
}

fn matches_production(input: &str, production: Production) -> bool {
    parser::parse(input, production.criteria()).is_some()
}

/// Checks whether the input fully matches the `URI` production.
#[must_use]
pub fn is_uri(input: &str) -> bool {
    matches_production(input, Production::Uri)
}

/// Checks whether the input fully matches the `URI-reference` production.
///
/// ```
/// assert!(strict_uri::is_uri_reference("../g?x#y"));
/// assert!(strict_uri::is_uri_reference(""));
/// // The first segment of a schemeless reference must not contain a colon.
/// assert!(!strict_uri::is_uri_reference("1st:segment"));
/// ```
#[must_use]
pub fn is_uri_reference(input: &str) -> bool {
    matches_production(input, Production::UriReference)
}

/// Checks whether the input fully matches the `absolute-URI` production,
/// with an authority required and no fragment allowed.
#[must_use]
pub fn is_absolute_uri(input: &str) -> bool {
    matches_production(input, Production::AbsoluteUri)
}

/// Checks whether the input fully matches the `IRI` production.
///
/// ```
/// assert!(strict_uri::is_iri("http://résumé.example/papiers"));
/// assert!(!strict_uri::is_uri("http://résumé.example/papiers"));
/// ```
#[must_use]
pub fn is_iri(input: &str) -> bool {
    matches_production(input, Production::Iri)
}

/// Checks whether the input fully matches the `IRI-reference` production.
#[must_use]
pub fn is_iri_reference(input: &str) -> bool {
    matches_production(input, Production::IriReference)
}

/// Checks whether the input fully matches the `absolute-IRI` production,
/// with an authority required and no fragment allowed.
#[must_use]
pub fn is_absolute_iri(input: &str) -> bool {
    matches_production(input, Production::AbsoluteIri)
}

/// Parses the input under the `URI` production.
///
/// # Errors
///
/// Returns [`InvalidIdentifier`] if the input does not fully match.
pub fn parse_uri(input: &str) -> Result<Identifier> {
    parse_production(input, Production::Uri).map(Identifier::from_parsed)
}

/// Parses the input under the `URI-reference` production.
///
/// # Errors
///
/// Returns [`InvalidIdentifier`] if the input does not fully match.
pub fn parse_uri_reference(input: &str) -> Result<Reference> {
    parse_production(input, Production::UriReference).map(Reference::from_parsed)
}

/// Parses the input under the `absolute-URI` production: scheme and
/// authority required, no fragment.
///
/// # Errors
///
/// Returns [`InvalidIdentifier`] if the input does not fully match.
pub fn parse_absolute_uri(input: &str) -> Result<Absolute> {
    parse_production(input, Production::AbsoluteUri).map(Absolute::from_parsed)
}

/// Parses the input under the `IRI` production.
///
/// # Errors
///
/// Returns [`InvalidIdentifier`] if the input does not fully match.
pub fn parse_iri(input: &str) -> Result<Identifier> {
    parse_production(input, Production::Iri).map(Identifier::from_parsed)
}

/// Parses the input under the `IRI-reference` production.
///
/// # Errors
///
/// Returns [`InvalidIdentifier`] if the input does not fully match.
pub fn parse_iri_reference(input: &str) -> Result<Reference> {
    parse_production(input, Production::IriReference).map(Reference::from_parsed)
}

/// Parses the input under the `absolute-IRI` production: scheme and
/// authority required, no fragment.
///
/// # Errors
///
/// Returns [`InvalidIdentifier`] if the input does not fully match.
pub fn parse_absolute_iri(input: &str) -> Result<Absolute> {
    parse_production(input, Production::AbsoluteIri).map(Absolute::from_parsed)
}

fn recompose(
    input: &str,
    production: Production,
    alphabet: Alphabet,
    keep_fragment: bool,
) -> Result<String> {
    let id = parse_production(input, production).map(Identifier::from_parsed)?;
    Ok(normalize::compose(
        &Target {
            scheme: id.scheme(),
            authority: id.authority(),
            path: id.path(),
            query: id.query(),
            fragment: id.fragment().filter(|_| keep_fragment),
        },
        alphabet,
    ))
}

/// Returns the canonical form of a URI: lowercased scheme and authority,
/// dot segments removed, percent-encoding normalized per component.
///
/// Normalization is idempotent.
///
/// ```
/// assert_eq!(strict_uri::normalize_uri("http://a/%7Euser")?, "http://a/~user");
/// assert_eq!(strict_uri::normalize_uri("http://a/%2f")?, "http://a/%2F");
/// # Ok::<_, strict_uri::InvalidIdentifier>(())
/// ```
///
/// # Errors
///
/// Returns [`InvalidIdentifier`] if the input does not match the `URI`
/// production.
pub fn normalize_uri(input: &str) -> Result<String> {
    recompose(input, Production::Uri, Alphabet::Uri, true)
}

/// Returns the canonical form of an IRI, like [`normalize_uri`] but over the
/// extended alphabet, so e.g. `%C3%A9` in a path decodes to `é`.
///
/// # Errors
///
/// Returns [`InvalidIdentifier`] if the input does not match the `IRI`
/// production.
pub fn normalize_iri(input: &str) -> Result<String> {
    recompose(input, Production::Iri, Alphabet::Iri, true)
}

/// Parses a URI, drops its fragment and recomposes it canonically.
///
/// ```
/// let s = strict_uri::to_absolute_uri("http://example.com/a#intro")?;
/// assert_eq!(s, "http://example.com/a");
/// # Ok::<_, strict_uri::InvalidIdentifier>(())
/// ```
///
/// # Errors
///
/// Returns [`InvalidIdentifier`] if the input does not match the `URI`
/// production.
pub fn to_absolute_uri(input: &str) -> Result<String> {
    recompose(input, Production::Uri, Alphabet::Uri, false)
}

/// Parses an IRI, drops its fragment and recomposes it canonically.
///
/// # Errors
///
/// Returns [`InvalidIdentifier`] if the input does not match the `IRI`
/// production.
pub fn to_absolute_iri(input: &str) -> Result<String> {
    recompose(input, Production::Iri, Alphabet::Iri, false)
}

/// Resolves `reference` against the absolute base URI `base`, per
/// Section 5.2 of RFC 3986. The result is composed canonically; the
/// fragment is never inherited from the base.
///
/// ```
/// let base = "http://a/b/c/d;p?q";
/// assert_eq!(strict_uri::resolve_uri("g", base)?, "http://a/b/c/g");
/// assert_eq!(strict_uri::resolve_uri("?y", base)?, "http://a/b/c/d;p?y");
/// assert_eq!(strict_uri::resolve_uri("../../../g", base)?, "http://a/g");
/// # Ok::<_, strict_uri::InvalidIdentifier>(())
/// ```
///
/// # Errors
///
/// Returns [`InvalidIdentifier`] if `reference` does not match
/// `URI-reference` or `base` does not match `absolute-URI`.
pub fn resolve_uri(reference: &str, base: &str) -> Result<String> {
    let r = parse_uri_reference(reference)?;
    let b = parse_absolute_uri(base)?;
    Ok(resolve::resolve(&r, &b, Alphabet::Uri))
}

/// Resolves `reference` against the absolute base IRI `base`, like
/// [`resolve_uri`] but over the extended alphabet.
///
/// # Errors
///
/// Returns [`InvalidIdentifier`] if `reference` does not match
/// `IRI-reference` or `base` does not match `absolute-IRI`.
pub fn resolve_iri(reference: &str, base: &str) -> Result<String> {
    let r = parse_iri_reference(reference)?;
    let b = parse_absolute_iri(base)?;
    Ok(resolve::resolve(&r, &b, Alphabet::Iri))
}

/// Computes the shortest reference that resolves, against `uri`, back to
/// `relative_to`.
///
/// When the scheme or authority of the two differ, no useful relative form
/// exists and `relative_to` is returned unchanged; this is a fallback, not
/// an error. The target's query and fragment are appended verbatim.
///
/// # Errors
///
/// Returns [`InvalidIdentifier`] if either argument does not match the
/// `URI` production.
pub fn to_relative_uri(uri: &str, relative_to: &str) -> Result<String> {
    let base = parse_uri(uri)?;
    let target = parse_uri(relative_to)?;
    Ok(relativize::relativize(&base, &target, relative_to))
}

/// Computes the shortest reference that resolves, against `iri`, back to
/// `relative_to`, like [`to_relative_uri`] but over the extended alphabet.
///
/// # Errors
///
/// Returns [`InvalidIdentifier`] if either argument does not match the
/// `IRI` production.
pub fn to_relative_iri(iri: &str, relative_to: &str) -> Result<String> {
    let base = parse_iri(iri)?;
    let target = parse_iri(relative_to)?;
    Ok(relativize::relativize(&base, &target, relative_to))
}
