use strict_uri::{resolve_uri, to_relative_iri, to_relative_uri};

#[track_caller]
fn pass(base: &str, target: &str, expected: &str) {
    assert_eq!(to_relative_uri(base, target).unwrap(), expected);
}

#[test]
fn sibling_and_ancestor_paths() {
    pass("http://a/b/c/d", "http://a/b/c/g", "g");
    pass("http://a/b/c/d", "http://a/b/x", "../x");
    pass("http://a/b/c/d", "http://a/x", "../../x");
    pass("http://a/b", "http://a/b/c", "b/c");
    pass("http://a/b/c/", "http://a/b/c/d", "d");
    pass("http://a/b/c/d", "http://a/b/c/", "");
}

#[test]
fn identical_targets() {
    pass("http://a/b/c", "http://a/b/c", "");
    // Equal paths leave only the target's query and fragment.
    pass("http://a/b?x", "http://a/b?y#s", "?y#s");
    pass("http://a/b", "http://a/b#s", "#s");
}

#[test]
fn mismatch_falls_back_to_target() {
    pass("http://a/b", "https://a/b", "https://a/b");
    pass("http://a/b", "http://other/x", "http://other/x");
    pass("http://u@a/b", "http://a/b", "http://a/b");
    pass("http://a:80/b", "http://a/b", "http://a/b");
}

#[test]
fn query_and_fragment_verbatim() {
    // Not re-normalized on the way through.
    pass("http://a/z", "http://a/b?%7e#%2f", "b?%7e#%2f");
}

#[test]
fn round_trips_through_resolution() {
    let cases = [
        ("http://a/b/c/d", "http://a/b/x"),
        ("http://a/b/c/d", "http://a/b/c/g?y#s"),
        ("http://a/b", "http://a/b/c"),
        ("http://a/b/c/d", "http://a/x"),
        ("http://a/b?q", "http://a/b?q"),
        ("http://a", "http://a/x/y"),
    ];
    for (base, target) in cases {
        let r = to_relative_uri(base, target).unwrap();
        assert_eq!(
            resolve_uri(&r, base).unwrap(),
            target,
            "{r:?} against {base} should give {target}"
        );
    }
}

#[test]
fn iri_paths() {
    assert_eq!(
        to_relative_iri("http://a/α/β/γ", "http://a/α/δ").unwrap(),
        "../δ"
    );
}

#[test]
fn rejects_invalid() {
    assert!(to_relative_uri("not a uri", "http://a/b").is_err());
    assert!(to_relative_uri("http://a/b", "../g").is_err());
}
