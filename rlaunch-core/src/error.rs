//! Precondition violations raised while assembling a request.

use thiserror::Error;

/// Result type for request assembly
pub type RequestResult<T> = Result<T, RequestError>;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("configuration parameter key must not be null or empty")]
    InvalidConfigurationKey,

    #[error("Filter must implement EngineIdFilter, PostDiscoveryFilter or DiscoveryFilter.")]
    UnclassifiableFilter,

    #[error("engine id must not be null or empty")]
    InvalidEngineId,

    #[error("tag list must contain at least one non-blank tag")]
    EmptyTagList,

    #[error("invalid fully qualified method name '{0}': expected 'Class#method' or 'Class#method(Type, ...)'")]
    InvalidMethodName(String),

    #[error("invalid class name pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_precondition_wording() {
        assert_eq!(
            RequestError::InvalidConfigurationKey.to_string(),
            "configuration parameter key must not be null or empty"
        );
        assert_eq!(
            RequestError::UnclassifiableFilter.to_string(),
            "Filter must implement EngineIdFilter, PostDiscoveryFilter or DiscoveryFilter."
        );
    }

    #[test]
    fn test_method_name_error_names_input() {
        let err = RequestError::InvalidMethodName("Foo".into());
        assert!(err.to_string().contains("'Foo'"));
    }
}
