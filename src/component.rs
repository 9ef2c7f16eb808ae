//! Resolving component names from Package URLs (PURLs).
//!
//! Ecosystems name the same kind of thing differently. A component name
//! normalizes them:
//! - `oci` PURLs are prefixed with the registry path from their
//!   `repository_url` qualifier (`docker.io/library` gives `library/<name>`).
//! - PURLs with an `rpmmod` qualifier are prefixed with the module stream.
//! - Everything else is just the package name.

use std::borrow::Cow;

use compact_str::{CompactString, format_compact};
use derive_more::{Debug, Display};
use documented::Documented;
use duplicate::duplicate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{
    PartialSchema, ToSchema,
    openapi::{ObjectBuilder, Type},
};

use crate::{Error, PackageUrlParser, PurlFields, PurlParser, error};

mod oci;
mod rpm;

pub use oci::REPOSITORY_URL;
pub use rpm::RPMMOD;

/// The PURL type of OCI container images.
pub const OCI: &str = "oci";

/// Resolve the component name of a PURL string using the default
/// [`ComponentNameResolver`].
///
/// ```rust
/// # use particular_purl_parse::resolve_component_name;
/// let name = resolve_component_name("pkg:oci/nginx@1.21.0?repository_url=docker.io/library").unwrap();
/// assert_eq!(name, "library/nginx");
///
/// let name = resolve_component_name("pkg:rpm/redhat/nginx@1.21.0?rpmmod=nginx").unwrap();
/// assert_eq!(name, "nginx/nginx");
///
/// let name = resolve_component_name("pkg:npm/lodash@4.17.21").unwrap();
/// assert_eq!(name, "lodash");
/// ```
///
/// See [`ComponentNameResolver::resolve`] for the errors this can return.
pub fn resolve_component_name(purl: &str) -> Result<ComponentName, Error> {
    ComponentNameResolver::new().resolve(purl)
}

/// The human-readable name of a component, derived from a PURL.
#[derive(
    Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Display, Debug, Serialize, Deserialize, Documented,
)]
#[display("{}", self.0)]
#[serde(transparent)]
pub struct ComponentName(CompactString);

impl ComponentName {
    /// View the item as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn prefixed(prefix: &str, name: &str) -> Self {
        Self(format_compact!("{prefix}/{name}"))
    }
}

impl From<&str> for ComponentName {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl From<ComponentName> for String {
    fn from(value: ComponentName) -> Self {
        value.0.into()
    }
}

impl AsRef<str> for ComponentName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

duplicate! {
    [
        other;
        [ str ];
        [ &str ];
        [ String ];
    ]
    impl PartialEq<other> for ComponentName {
        fn eq(&self, other: &other) -> bool {
            self.as_str() == AsRef::<str>::as_ref(other)
        }
    }
}

impl PartialSchema for ComponentName {
    fn schema() -> utoipa::openapi::RefOr<utoipa::openapi::schema::Schema> {
        ObjectBuilder::new()
            .description(Some(Self::DOCS))
            .examples([json!("library/nginx"), json!("nginx/nginx"), json!("lodash")])
            .min_length(Some(1))
            .schema_type(Type::String)
            .build()
            .into()
    }
}

impl ToSchema for ComponentName {
    fn name() -> Cow<'static, str> {
        Cow::Borrowed("ComponentName")
    }
}

/// Options for resolving component names.
///
/// The `fallback_*` fields provide values to use when the corresponding
/// parts are missing from the PURL. Without them, resolution fails.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Registry path to use if an OCI PURL has no usable `repository_url`.
    /// An empty string is treated as unset.
    pub fallback_oci_repository: Option<String>,
}

/// Resolves component names from PURLs.
///
/// Parsing is delegated to a [`PurlParser`], [`PackageUrlParser`] by default.
/// ```rust
/// # use particular_purl_parse::{ComponentNameResolver, ResolveOptions};
/// let resolver = ComponentNameResolver::new().with_options(ResolveOptions {
///     fallback_oci_repository: Some("library".to_string()),
/// });
/// let name = resolver.resolve("pkg:oci/nginx@1.21.0").unwrap();
/// assert_eq!(name, "library/nginx");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ComponentNameResolver<P = PackageUrlParser> {
    parser: P,
    options: ResolveOptions,
}

impl ComponentNameResolver {
    /// Create a resolver using [`PackageUrlParser`] and default options.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: PurlParser> ComponentNameResolver<P> {
    /// Create a resolver using the provided parser and default options.
    pub fn with_parser(parser: P) -> Self {
        Self {
            parser,
            options: ResolveOptions::default(),
        }
    }

    /// Replace the options used by this resolver.
    pub fn with_options(self, options: ResolveOptions) -> Self {
        Self { options, ..self }
    }

    /// The options used by this resolver.
    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    /// Parse a PURL string and resolve its component name.
    ///
    /// Returns [`Error::Empty`] for an empty string, [`Error::Parse`] if the
    /// parser rejects it, and otherwise behaves like [`Self::resolve_parsed`].
    pub fn resolve(&self, purl: &str) -> Result<ComponentName, Error> {
        if purl.is_empty() {
            return Err(Error::Empty);
        }

        let parsed = self
            .parser
            .parse(purl)
            .map_err(|err| error::parse!(purl, err))?;
        self.resolve_parsed(&parsed)
    }

    /// Resolve the component name of an already parsed PURL.
    ///
    /// The first matching rule wins:
    /// 1. `oci` PURLs resolve to `<registry path>/<name>`, where the registry
    ///    path is the second `/`-separated segment of `repository_url`. If
    ///    there is no such segment, this falls back to
    ///    [`ResolveOptions::fallback_oci_repository`] or returns
    ///    [`Error::InvalidRepositoryUrl`].
    /// 2. PURLs with a non-empty `rpmmod` resolve to `<rpmmod>/<name>`.
    /// 3. Everything else resolves to `<name>`.
    pub fn resolve_parsed(&self, purl: &impl PurlFields) -> Result<ComponentName, Error> {
        if purl.purl_type() == OCI {
            tracing::trace!(name = purl.package_name(), "resolving oci component");
            return oci::component_name(purl, &self.options);
        }

        if let Some(name) = rpm::component_name(purl) {
            tracing::trace!(%name, "resolved rpm module component");
            return Ok(name);
        }

        Ok(ComponentName::from(purl.package_name()))
    }
}
