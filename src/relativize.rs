//! Relativization: the inverse of reference resolution.

use crate::component::Identifier;

/// Computes the shortest reference that, resolved against `base`, yields
/// `target` again.
///
/// When the scheme or authority differs no useful relative form exists and
/// `target_str` (the target as given) is returned unchanged. The target's
/// query and fragment are appended verbatim, not re-normalized.
pub(crate) fn relativize(base: &Identifier, target: &Identifier, target_str: &str) -> String {
    if base.scheme() != target.scheme() || base.authority() != target.authority() {
        return target_str.to_owned();
    }

    let mut out = String::new();
    if base.path() != target.path() {
        out = relative_path(base.path(), target.path());
    }
    if let Some(query) = target.query() {
        out.push('?');
        out.push_str(query);
    }
    if let Some(fragment) = target.fragment() {
        out.push('#');
        out.push_str(fragment);
    }
    out
}

/// Walks up from the base's directory to the longest common ancestor, then
/// down the target's remaining segments.
fn relative_path(base: &str, target: &str) -> String {
    let base_segs: Vec<&str> = base.split('/').collect();
    let target_segs: Vec<&str> = target.split('/').collect();

    // Common prefix of the two directories, final segments excluded.
    let prefix = base_segs[..base_segs.len() - 1]
        .iter()
        .zip(&target_segs[..target_segs.len() - 1])
        .take_while(|(a, b)| a == b)
        .count();

    let ups = base_segs.len() - 1 - prefix;
    let mut parts: Vec<&str> = vec![".."; ups];
    parts.extend(&target_segs[prefix..]);
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::relative_path;

    #[test]
    fn paths() {
        assert_eq!(relative_path("/a/b/c/d", "/a/b/x"), "../x");
        assert_eq!(relative_path("/a/b/c/d", "/a/b/c/g"), "g");
        assert_eq!(relative_path("/a/b", "/a/b/c"), "b/c");
        assert_eq!(relative_path("/a/b/c/d", "/a/x"), "../../x");
        assert_eq!(relative_path("/a", "/b/c"), "b/c");
    }
}
