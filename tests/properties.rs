use proptest::prelude::*;

use strict_uri::{is_iri, is_uri, normalize_iri, normalize_uri, resolve_uri, to_relative_uri};

/// A valid URI assembled from generated components. Segments draw from
/// pchar minus the delimiters plus well-formed percent triplets.
fn uri() -> impl Strategy<Value = String> {
    (
        "[a-z][a-z0-9+.-]{0,3}",
        "[a-z0-9.-]{0,8}",
        prop::collection::vec("(?:[a-zA-Z0-9._~!$&'()*+,;=:@-]|%[0-9a-fA-F]{2}){0,4}", 0..4),
        prop::option::of("[a-z0-9/?=&]{0,8}"),
        prop::option::of("[a-z0-9/?]{0,4}"),
    )
        .prop_map(|(scheme, host, segments, query, fragment)| {
            let mut s = format!("{scheme}://{host}");
            for segment in &segments {
                s.push('/');
                s.push_str(segment);
            }
            if let Some(q) = &query {
                s.push('?');
                s.push_str(q);
            }
            if let Some(f) = &fragment {
                s.push('#');
                s.push_str(f);
            }
            s
        })
}

proptest! {
    #[test]
    fn generated_uris_are_recognized(s in uri()) {
        prop_assert!(is_uri(&s));
        // Every URI is also an IRI.
        prop_assert!(is_iri(&s));
    }

    #[test]
    fn normalization_is_idempotent(s in uri()) {
        let once = normalize_uri(&s).unwrap();
        prop_assert!(is_uri(&once));
        prop_assert_eq!(normalize_uri(&once).unwrap(), once);
    }

    #[test]
    fn iri_normalization_is_idempotent(s in uri()) {
        let once = normalize_iri(&s).unwrap();
        prop_assert!(is_iri(&once));
        prop_assert_eq!(normalize_iri(&once).unwrap(), once);
    }

    /// Relativization inverts resolution for already-canonical targets
    /// whose path does not end in an empty segment.
    #[test]
    fn relativize_resolves_back(
        scheme in "[a-z]{1,4}",
        host in "[a-z0-9]{1,6}",
        base_segments in prop::collection::vec("[a-z0-9]{0,2}", 0..4),
        target_segments in prop::collection::vec("[a-z0-9]{1,3}", 1..4),
        query in prop::option::of("[a-z0-9]{0,3}"),
        fragment in prop::option::of("[a-z0-9]{0,3}"),
    ) {
        let mut base = format!("{scheme}://{host}");
        for segment in &base_segments {
            base.push('/');
            base.push_str(segment);
        }
        let mut target = format!("{scheme}://{host}");
        for segment in &target_segments {
            target.push('/');
            target.push_str(segment);
        }
        if let Some(q) = &query {
            target.push('?');
            target.push_str(q);
        }
        if let Some(f) = &fragment {
            target.push('#');
            target.push_str(f);
        }

        let r = to_relative_uri(&base, &target).unwrap();
        prop_assert_eq!(resolve_uri(&r, &base).unwrap(), target);
    }
}
