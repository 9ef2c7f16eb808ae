#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![warn(rust_2018_idioms)]

mod component;
mod error;
mod parser;
mod record;

pub use component::{
    ComponentName, ComponentNameResolver, OCI, REPOSITORY_URL, RPMMOD, ResolveOptions,
    resolve_component_name,
};
pub use error::Error;
pub use parser::{PackageUrlParser, Purl, PurlParser};
pub use record::{ParsedPurl, PurlFields};

/// The PURL parser this crate builds on.
///
/// Its public API is also re-exported at the root of this crate, so both the
/// resolver and the raw parser are available from one place.
pub use ::purl;
#[doc(no_inline)]
pub use ::purl::*;
