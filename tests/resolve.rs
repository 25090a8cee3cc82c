use strict_uri::{resolve_iri, resolve_uri, Production};

const BASE: &str = "http://a/b/c/d;p?q";

#[track_caller]
fn pass(reference: &str, expected: &str) {
    assert_eq!(resolve_uri(reference, BASE).unwrap(), expected);
}

#[test]
fn normal_examples() {
    // Section 5.4.1 of RFC 3986.
    pass("g:h", "g:h");
    pass("g", "http://a/b/c/g");
    pass("./g", "http://a/b/c/g");
    pass("g/", "http://a/b/c/g/");
    pass("/g", "http://a/g");
    pass("//g", "http://g");
    pass("?y", "http://a/b/c/d;p?y");
    pass("g?y", "http://a/b/c/g?y");
    pass("#s", "http://a/b/c/d;p?q#s");
    pass("g#s", "http://a/b/c/g#s");
    pass("g?y#s", "http://a/b/c/g?y#s");
    pass(";x", "http://a/b/c/;x");
    pass("g;x", "http://a/b/c/g;x");
    pass("g;x?y#s", "http://a/b/c/g;x?y#s");
    pass("", "http://a/b/c/d;p?q");
    pass(".", "http://a/b/c/");
    pass("./", "http://a/b/c/");
    pass("..", "http://a/b/");
    pass("../", "http://a/b/");
    pass("../g", "http://a/b/g");
    pass("../..", "http://a/");
    pass("../../", "http://a/");
    pass("../../g", "http://a/g");
}

#[test]
fn abnormal_examples() {
    // Section 5.4.2 of RFC 3986.
    pass("../../../g", "http://a/g");
    pass("../../../../g", "http://a/g");

    pass("/./g", "http://a/g");
    pass("/../g", "http://a/g");
    pass("g.", "http://a/b/c/g.");
    pass(".g", "http://a/b/c/.g");
    pass("g..", "http://a/b/c/g..");
    pass("..g", "http://a/b/c/..g");

    pass("./../g", "http://a/b/g");
    pass("./g/.", "http://a/b/c/g/");
    pass("g/./h", "http://a/b/c/g/h");
    pass("g/../h", "http://a/b/c/h");
    pass("g;x=1/./y", "http://a/b/c/g;x=1/y");
    pass("g;x=1/../y", "http://a/b/c/y");

    // Dot segments in query and fragment are data, not navigation.
    pass("g?y/./x", "http://a/b/c/g?y/./x");
    pass("g?y/../x", "http://a/b/c/g?y/../x");
    pass("g#s/./x", "http://a/b/c/g#s/./x");
    pass("g#s/../x", "http://a/b/c/g#s/../x");

    // Strict parsing: the reference's scheme wins even when it matches.
    pass("http:g", "http:g");
}

#[test]
fn empty_base_path() {
    assert_eq!(resolve_uri("g", "http://a").unwrap(), "http://a/g");
    assert_eq!(resolve_uri("?q", "http://a").unwrap(), "http://a?q");
    assert_eq!(resolve_uri("", "http://a").unwrap(), "http://a");
}

#[test]
fn fragment_never_inherited() {
    // The base carries no fragment by construction; the result's fragment
    // is always the reference's own.
    assert_eq!(resolve_uri("", "http://a/b?q").unwrap(), "http://a/b?q");
    assert_eq!(resolve_uri("#s", "http://a/b?q").unwrap(), "http://a/b?q#s");
}

#[test]
fn result_is_canonical() {
    assert_eq!(resolve_uri("%7e", "http://a/b/").unwrap(), "http://a/b/~");
    assert_eq!(
        resolve_uri("x%2fy", "HTTP://A/b/").unwrap(),
        "http://a/b/x%2Fy"
    );
}

#[test]
fn iri_references() {
    assert_eq!(
        resolve_iri("café", "http://a/b/").unwrap(),
        "http://a/b/café"
    );
    assert_eq!(
        resolve_iri("../ros%C3%A9", "http://a/b/c").unwrap(),
        "http://a/rosé"
    );
}

#[test]
fn base_must_be_absolute() {
    let e = resolve_uri("g", "mailto:x@y").unwrap_err();
    assert_eq!(e.production(), Production::AbsoluteUri);

    let e = resolve_uri("g", "http://a/b#frag").unwrap_err();
    assert_eq!(e.production(), Production::AbsoluteUri);

    let e = resolve_uri("%", BASE).unwrap_err();
    assert_eq!(e.production(), Production::UriReference);
}
