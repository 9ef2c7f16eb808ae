//! Parsing PURL strings into records the resolver can read.
//!
//! See the [Package URL specification](https://github.com/package-url/purl-spec).

use std::str::FromStr;

use derive_more::{Deref, DerefMut, From};
use purl::GenericPurl;

use crate::PurlFields;

/// A Package URL (PURL), as produced by [`PackageUrlParser`].
///
/// This is a thin wrapper around [`purl::GenericPurl`] with the package type
/// kept as a plain string:
/// ```rust
/// # use particular_purl_parse::{Purl, PurlFields};
/// # use std::str::FromStr;
/// let purl = Purl::from_str("pkg:oci/nginx@1.21.0?repository_url=docker.io/library").unwrap();
/// assert_eq!(purl.purl_type(), "oci");
/// assert_eq!(purl.version(), Some("1.21.0"));
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Deref, DerefMut, From)]
pub struct Purl(GenericPurl<String>);

impl FromStr for Purl {
    type Err = purl::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let generic_purl = GenericPurl::from_str(s)?;
        Ok(Purl(generic_purl))
    }
}

impl PurlFields for Purl {
    fn purl_type(&self) -> &str {
        self.0.purl_type()
    }

    fn package_name(&self) -> &str {
        self.0.package_name()
    }

    fn qualifier(&self, key: &str) -> Option<&str> {
        self.0.qualifier(key)
    }
}

/// Parses a PURL string into a record exposing [`PurlFields`].
///
/// [`PackageUrlParser`] is the default. Any function or closure with the
/// signature `Fn(&str) -> Result<R, E>` is also a parser, which makes it
/// easy to substitute fixtures:
/// ```rust
/// # use particular_purl_parse::{ComponentNameResolver, ParsedPurl};
/// let resolver = ComponentNameResolver::with_parser(|_: &str| {
///     Ok::<_, std::convert::Infallible>(ParsedPurl::builder().package_type("npm").name("lodash").build())
/// });
/// assert_eq!(resolver.resolve("anything").unwrap(), "lodash");
/// ```
pub trait PurlParser {
    /// The parsed record.
    type Record: PurlFields;

    /// The error reported when the input is rejected.
    type Error: Into<Box<dyn std::error::Error + Send + Sync>>;

    /// Parse the input.
    fn parse(&self, input: &str) -> Result<Self::Record, Self::Error>;
}

impl<F, R, E> PurlParser for F
where
    F: Fn(&str) -> Result<R, E>,
    R: PurlFields,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    type Record = R;
    type Error = E;

    fn parse(&self, input: &str) -> Result<Self::Record, Self::Error> {
        self(input)
    }
}

/// Parses PURLs with the [`purl`] crate.
///
/// The package type is kept as a plain string, so PURLs of any type parse
/// as long as they are syntactically valid.
#[derive(Clone, Copy, Debug, Default)]
pub struct PackageUrlParser;

impl PurlParser for PackageUrlParser {
    type Record = Purl;
    type Error = purl::ParseError;

    fn parse(&self, input: &str) -> Result<Self::Record, Self::Error> {
        Purl::from_str(input)
    }
}
