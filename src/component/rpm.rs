use crate::{ComponentName, PurlFields};

/// The qualifier naming the RPM module stream a package belongs to.
pub const RPMMOD: &str = "rpmmod";

/// Returns `<rpmmod>/<name>`, or `None` if the PURL has no module stream.
/// An empty `rpmmod` is the same as no `rpmmod`.
pub fn component_name(purl: &impl PurlFields) -> Option<ComponentName> {
    purl.qualifier(RPMMOD)
        .filter(|module| !module.is_empty())
        .map(|module| ComponentName::prefixed(module, purl.package_name()))
}
