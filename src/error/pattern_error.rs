use thiserror::Error;

/// A wildcard pattern that could not be compiled.
#[derive(Debug, Error)]
#[error("invalid pattern '{pattern}': {source}")]
pub struct PatternError {
    /// The wildcard pattern as written.
    pub pattern: String,
    /// Why the translated expression was rejected.
    #[source]
    pub source:  regex::Error,
}
