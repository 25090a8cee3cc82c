#![cfg(feature = "serde")]

use strict_uri::{parse_uri, parse_uri_reference, Identifier, Reference};

#[test]
fn identifier_round_trip() {
    let id = parse_uri("foo://user@example.com:8042/over/there?name=ferret#nose").unwrap();
    let json = serde_json::to_string(&id).unwrap();
    let back: Identifier = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

#[test]
fn reference_round_trip() {
    for r in ["", "//g?y#s", "../g", "x?#"] {
        let parsed = parse_uri_reference(r).unwrap();
        let json = serde_json::to_string(&parsed).unwrap();
        let back: Reference = serde_json::from_str(&json).unwrap();
        assert_eq!(back, parsed);
    }
}

#[test]
fn optional_components_are_nullable() {
    let id = parse_uri("mailto:x@y").unwrap();
    let value = serde_json::to_value(&id).unwrap();
    assert_eq!(value["scheme"], "mailto");
    assert!(value["authority"].is_null());
    assert_eq!(value["path"], "x@y");
    assert!(value["query"].is_null());
    assert!(value["fragment"].is_null());
}
