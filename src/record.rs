//! The parsed view of a PURL that component name resolution reads.

use std::collections::BTreeMap;

use bon::Builder;
use purl::GenericPurl;
use serde::{Deserialize, Serialize};

/// The fields of a parsed PURL that are needed to resolve a component name.
///
/// This is implemented for [`GenericPurl<String>`], for
/// [`Purl`](crate::Purl), which is what
/// [`PackageUrlParser`](crate::PackageUrlParser) produces, and for
/// [`ParsedPurl`], which can be built by hand.
pub trait PurlFields {
    /// The ecosystem type of the PURL, e.g. `npm` or `oci`.
    fn purl_type(&self) -> &str;

    /// The package name of the PURL.
    fn package_name(&self) -> &str;

    /// The value of the named qualifier, if present.
    fn qualifier(&self, key: &str) -> Option<&str>;
}

impl PurlFields for GenericPurl<String> {
    fn purl_type(&self) -> &str {
        self.package_type()
    }

    fn package_name(&self) -> &str {
        self.name()
    }

    fn qualifier(&self, key: &str) -> Option<&str> {
        self.qualifiers().get(key)
    }
}

impl<T: PurlFields + ?Sized> PurlFields for &T {
    fn purl_type(&self) -> &str {
        (**self).purl_type()
    }

    fn package_name(&self) -> &str {
        (**self).package_name()
    }

    fn qualifier(&self, key: &str) -> Option<&str> {
        (**self).qualifier(key)
    }
}

/// A PURL that has already been broken into its type, name, and qualifiers.
///
/// Useful when the PURL was parsed elsewhere, or to build fixtures:
/// ```rust
/// # use particular_purl_parse::{ParsedPurl, PurlFields};
/// let purl = ParsedPurl::builder()
///     .package_type("oci")
///     .name("nginx")
///     .qualifiers([("repository_url".to_string(), "docker.io/library".to_string())].into())
///     .build();
/// assert_eq!(purl.qualifier("repository_url"), Some("docker.io/library"));
/// ```
///
/// The qualifiers are never absent; a PURL without qualifiers has an empty map.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize, Builder)]
pub struct ParsedPurl {
    /// The ecosystem type.
    #[builder(into)]
    #[serde(rename = "type")]
    package_type: String,

    /// The package name.
    #[builder(into)]
    name: String,

    /// Qualifier keys mapped to their values.
    #[builder(default)]
    #[serde(default)]
    qualifiers: BTreeMap<String, String>,
}

impl PurlFields for ParsedPurl {
    fn purl_type(&self) -> &str {
        &self.package_type
    }

    fn package_name(&self) -> &str {
        &self.name
    }

    fn qualifier(&self, key: &str) -> Option<&str> {
        self.qualifiers.get(key).map(String::as_str)
    }
}
