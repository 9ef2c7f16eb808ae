use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Records all errors reported by this library.
#[derive(Error, Diagnostic, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The provided PURL was empty.
    #[error("input was empty, which is not a valid package url")]
    Empty,

    /// The PURL parser rejected the input.
    #[error("input '{input}' is not a valid package url: {error}")]
    Parse {
        /// The input originally provided.
        #[source_code]
        input: String,

        /// The error reported by the parser.
        #[source]
        error: Box<dyn std::error::Error + Send + Sync>,

        /// The location of the error.
        #[label("purl")]
        span: SourceSpan,
    },

    /// An OCI PURL has no `repository_url` qualifier from which a
    /// registry path can be taken.
    ///
    /// The qualifier must contain at least one `/`, and the segment after
    /// the first `/` must be non-empty: `docker.io/library` is valid,
    /// `docker.io` is not.
    #[error("Invalid repository_url in OCI PURL")]
    #[diagnostic(help(
        "repository_url must look like '<host>/<path>', e.g. 'docker.io/library'"
    ))]
    InvalidRepositoryUrl {
        /// The qualifier value, if one was present.
        repository_url: Option<String>,
    },
}

/// Construct and return a new [`Error::Parse`].
///
/// Provide the input and the parser error; the span covers the whole input.
///
/// ```ignore
/// error::parse!(input, err);
/// ```
macro_rules! parse {
    ($input:expr, $error:expr) => {{
        let input = String::from($input);
        let span = (0, input.len());
        $crate::Error::Parse {
            input,
            span: span.into(),
            error: $error.into(),
        }
    }};
}
pub(crate) use parse;
