//! Reference resolution per RFC 3986, Section 5.2.

use crate::{
    component::{Absolute, Reference},
    normalize::{compose, Target},
    table::Alphabet,
};

/// Resolves `reference` against `base` and returns the composed result.
///
/// The transform-references algorithm: a reference with a scheme stands on
/// its own; otherwise the scheme, and possibly authority, path and query,
/// are inherited from the base. The fragment is always the reference's own.
/// Dot segments in the picked path are removed by composition, not here.
pub(crate) fn resolve(reference: &Reference, base: &Absolute, alphabet: Alphabet) -> String {
    let (scheme, authority, path, query);
    let merged;

    if let Some(r_scheme) = reference.scheme() {
        scheme = r_scheme;
        authority = reference.authority();
        path = reference.path();
        query = reference.query();
    } else {
        scheme = base.scheme();
        if reference.authority().is_some() {
            authority = reference.authority();
            path = reference.path();
            query = reference.query();
        } else {
            authority = Some(base.authority());
            if reference.path().is_empty() {
                path = base.path();
                query = reference.query().or(base.query());
            } else if reference.path().starts_with('/') {
                path = reference.path();
                query = reference.query();
            } else {
                merged = merge_paths(base, reference.path());
                path = &merged;
                query = reference.query();
            }
        }
    }

    compose(
        &Target {
            scheme,
            authority,
            path,
            query,
            fragment: reference.fragment(),
        },
        alphabet,
    )
}

/// Merges a relative path with the base path, per Section 5.3 of RFC 3986.
/// The base always carries an authority here.
fn merge_paths(base: &Absolute, r_path: &str) -> String {
    if base.path().is_empty() {
        return format!("/{r_path}");
    }
    match base.path().rfind('/') {
        Some(i) => format!("{}{r_path}", &base.path()[..=i]),
        None => r_path.to_owned(),
    }
}
