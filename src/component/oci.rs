use crate::{ComponentName, Error, PurlFields, ResolveOptions};

/// The qualifier naming the registry an OCI image is pulled from.
pub const REPOSITORY_URL: &str = "repository_url";

pub fn component_name(
    purl: &impl PurlFields,
    options: &ResolveOptions,
) -> Result<ComponentName, Error> {
    let repository_url = purl.qualifier(REPOSITORY_URL);

    // Qualifier values look like `docker.io/library`; the host is dropped.
    let prefix = repository_url
        .and_then(|url| url.split('/').nth(1))
        .filter(|segment| !segment.is_empty())
        .or_else(|| {
            options
                .fallback_oci_repository
                .as_deref()
                .filter(|fallback| !fallback.is_empty())
        });

    match prefix {
        Some(prefix) => Ok(ComponentName::prefixed(prefix, purl.package_name())),
        None => {
            tracing::debug!(
                ?repository_url,
                name = purl.package_name(),
                "no registry path for oci purl"
            );
            Err(Error::InvalidRepositoryUrl {
                repository_url: repository_url.map(String::from),
            })
        }
    }
}
