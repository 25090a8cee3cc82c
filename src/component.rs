//! Parsed URI/IRI components.
//!
//! Each grammar production parses into its own record type, so that which
//! components may be absent is part of the type rather than a runtime
//! convention:
//!
//! - [`Identifier`] for `URI` / `IRI`: scheme required, fragment allowed.
//! - [`Reference`] for `URI-reference` / `IRI-reference`: everything optional
//!   except the path.
//! - [`Absolute`] for `absolute-URI` / `absolute-IRI`: scheme and authority
//!   required, no fragment.
//!
//! All records are immutable owned values created fresh per parse call.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::parser::Parsed;

/// An [authority] component: `[userinfo "@"] host [":" port]`.
///
/// The host is always present when the authority is, though it may be an
/// empty registered name as in `file:///etc/hosts`. The userinfo and port
/// are captured only when their `@` / `:` delimiters appear in the input.
///
/// [authority]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Authority {
    pub(crate) userinfo: Option<String>,
    pub(crate) host: String,
    pub(crate) port: Option<String>,
}

impl Authority {
    /// Returns the userinfo subcomponent.
    #[must_use]
    pub fn userinfo(&self) -> Option<&str> {
        self.userinfo.as_deref()
    }

    /// Returns the host subcomponent, possibly empty.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port subcomponent.
    ///
    /// An empty string is returned for an authority such as `example.com:`
    /// where the delimiter is present but the port is empty.
    #[must_use]
    pub fn port(&self) -> Option<&str> {
        self.port.as_deref()
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(userinfo) = &self.userinfo {
            write!(f, "{userinfo}@")?;
        }
        f.write_str(&self.host)?;
        if let Some(port) = &self.port {
            write!(f, ":{port}")?;
        }
        Ok(())
    }
}

/// Components of an identifier parsed under the `URI` or `IRI` production.
///
/// # Examples
///
/// ```
/// let id = strict_uri::parse_uri("foo://user@example.com:8042/over/there?name=ferret#nose")?;
///
/// assert_eq!(id.scheme(), "foo");
/// let auth = id.authority().unwrap();
/// assert_eq!(auth.userinfo(), Some("user"));
/// assert_eq!(auth.host(), "example.com");
/// assert_eq!(auth.port(), Some("8042"));
/// assert_eq!(id.path(), "/over/there");
/// assert_eq!(id.query(), Some("name=ferret"));
/// assert_eq!(id.fragment(), Some("nose"));
/// # Ok::<_, strict_uri::InvalidIdentifier>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Identifier {
    scheme: String,
    authority: Option<Authority>,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl Identifier {
    pub(crate) fn from_parsed(p: Parsed) -> Self {
        Self {
            scheme: p.scheme.unwrap(),
            authority: p.authority,
            path: p.path,
            query: p.query,
            fragment: p.fragment,
        }
    }

    /// Returns the scheme component.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the authority component.
    #[must_use]
    pub fn authority(&self) -> Option<&Authority> {
        self.authority.as_ref()
    }

    /// Returns the path component, possibly empty.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the query component.
    ///
    /// `None` means the `?` delimiter was absent, which is distinct from an
    /// empty query.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Returns the fragment component.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }
}

/// Components of a reference parsed under the `URI-reference` or
/// `IRI-reference` production.
///
/// A reference may omit the scheme and authority; the missing components are
/// inherited from a base identifier during [resolution](crate::resolve_uri).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Reference {
    scheme: Option<String>,
    authority: Option<Authority>,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl Reference {
    pub(crate) fn from_parsed(p: Parsed) -> Self {
        Self {
            scheme: p.scheme,
            authority: p.authority,
            path: p.path,
            query: p.query,
            fragment: p.fragment,
        }
    }

    /// Returns the scheme component.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Returns the authority component.
    #[must_use]
    pub fn authority(&self) -> Option<&Authority> {
        self.authority.as_ref()
    }

    /// Returns the path component, possibly empty.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the query component.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Returns the fragment component.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }
}

/// Components of an identifier parsed under the `absolute-URI` or
/// `absolute-IRI` production: scheme and authority present, no fragment.
///
/// This is the form required of a base identifier for
/// [resolution](crate::resolve_uri).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Absolute {
    scheme: String,
    authority: Authority,
    path: String,
    query: Option<String>,
}

impl Absolute {
    pub(crate) fn from_parsed(p: Parsed) -> Self {
        Self {
            scheme: p.scheme.unwrap(),
            authority: p.authority.unwrap(),
            path: p.path,
            query: p.query,
        }
    }

    /// Returns the scheme component.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the authority component.
    #[must_use]
    pub fn authority(&self) -> &Authority {
        &self.authority
    }

    /// Returns the path component, possibly empty.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the query component.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }
}
