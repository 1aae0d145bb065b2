// ABOUTME: Error type for the extraction engine.
// ABOUTME: Heuristic misses are empty values, never errors; only a bad base URL fails.

/// The error type for extraction entry points that take a source URL.
///
/// Extractors never fail for absent or malformed heuristic matches; a miss is
/// an empty value. The only reportable condition is a source URL that does
/// not parse as an absolute URL, which breaks link resolution before any
/// heuristic runs.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
