use std::collections::BTreeMap;

use proptest::prelude::*;

use particular_purl_parse::*;

/// Package names: lowercase ASCII, digits, and dashes, starting with a letter.
const NAME: &str = r"[a-z][a-z0-9-]{0,15}";

/// Ecosystem types other than `oci`.
const NON_OCI_TYPE: &str = r"(npm|pypi|gem|cargo|rpm|deb|nuget|golang)";

/// A value with no `/` in it.
const SEGMENT: &str = r"[a-z0-9.]{1,12}";

fn fixture(purl_type: &str, name: &str, qualifiers: BTreeMap<String, String>) -> ParsedPurl {
    ParsedPurl::builder()
        .package_type(purl_type)
        .name(name)
        .qualifiers(qualifiers)
        .build()
}

proptest! {
    /// PURLs without special handling resolve to their name.
    #[test]
    fn plain_is_name(purl_type in NON_OCI_TYPE, name in NAME) {
        let resolved = ComponentNameResolver::new()
            .resolve_parsed(&fixture(&purl_type, &name, BTreeMap::new()))
            .expect("must resolve");
        prop_assert_eq!(resolved.as_str(), name.as_str());
    }

    /// PURLs with a module stream are prefixed with it.
    #[test]
    fn rpmmod_is_prefixed(purl_type in NON_OCI_TYPE, name in NAME, module in SEGMENT) {
        let qualifiers = BTreeMap::from([(RPMMOD.to_string(), module.clone())]);
        let resolved = ComponentNameResolver::new()
            .resolve_parsed(&fixture(&purl_type, &name, qualifiers))
            .expect("must resolve");
        prop_assert_eq!(resolved.to_string(), format!("{module}/{name}"));
    }

    /// OCI PURLs are prefixed with the second segment of `repository_url`.
    #[test]
    fn oci_takes_second_segment(
        name in NAME,
        host in SEGMENT,
        path in SEGMENT,
        rest in proptest::collection::vec(SEGMENT, 0..3),
    ) {
        let url = [host, path.clone()].into_iter().chain(rest).collect::<Vec<_>>().join("/");
        let qualifiers = BTreeMap::from([(REPOSITORY_URL.to_string(), url)]);
        let resolved = ComponentNameResolver::new()
            .resolve_parsed(&fixture(OCI, &name, qualifiers))
            .expect("must resolve");
        prop_assert_eq!(resolved.to_string(), format!("{path}/{name}"));
    }

    /// OCI PURLs with a single-segment `repository_url` fail.
    #[test]
    fn oci_single_segment_fails(name in NAME, url in SEGMENT) {
        let qualifiers = BTreeMap::from([(REPOSITORY_URL.to_string(), url)]);
        let result = ComponentNameResolver::new().resolve_parsed(&fixture(OCI, &name, qualifiers));
        prop_assert!(matches!(result, Err(Error::InvalidRepositoryUrl { .. })), "expected InvalidRepositoryUrl, got {:?}", result);
    }

    /// Resolving a PURL string is deterministic and matches the parsed form.
    #[test]
    fn oci_string_is_idempotent(name in NAME, host in SEGMENT, path in SEGMENT) {
        let input = format!("pkg:oci/{name}@1.0.0?repository_url={host}/{path}");
        let first = resolve_component_name(&input).expect("must resolve");
        let second = resolve_component_name(&input).expect("must resolve");
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.to_string(), format!("{path}/{name}"));
    }
}
