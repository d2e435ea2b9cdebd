use super::{FilterCapabilities, FilterResult};
use crate::error::{RequestError, RequestResult};
use serde::Serialize;
use std::fmt;

/// Restricts discovery to the engine with the given id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EngineIdFilter {
    engine_id: String,
}

impl EngineIdFilter {
    pub fn by_engine_id(engine_id: impl Into<String>) -> Self {
        Self {
            engine_id: engine_id.into(),
        }
    }

    /// Like [`EngineIdFilter::by_engine_id`], rejecting a blank id.
    pub fn try_by_engine_id(engine_id: impl Into<String>) -> RequestResult<Self> {
        let engine_id = engine_id.into();
        if engine_id.trim().is_empty() {
            return Err(RequestError::InvalidEngineId);
        }
        Ok(Self { engine_id })
    }

    pub fn engine_id(&self) -> &str {
        &self.engine_id
    }

    pub fn apply(&self, engine_id: &str) -> FilterResult {
        if self.engine_id == engine_id {
            FilterResult::included_because(format!("engine id '{engine_id}' is included"))
        } else {
            FilterResult::excluded(format!(
                "engine id '{engine_id}' does not match '{}'",
                self.engine_id
            ))
        }
    }
}

impl fmt::Display for EngineIdFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "include engine '{}'", self.engine_id)
    }
}

impl FilterCapabilities for EngineIdFilter {
    fn as_engine_id_filter(&self) -> Option<&EngineIdFilter> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_matches_exact_id() {
        let filter = EngineIdFilter::by_engine_id("junit5");

        assert!(filter.apply("junit5").is_included());
        let excluded = filter.apply("junit4");
        assert!(excluded.is_excluded());
        assert_eq!(
            excluded.reason(),
            Some("engine id 'junit4' does not match 'junit5'")
        );
    }

    #[test]
    fn test_try_by_engine_id_rejects_blank() {
        assert!(matches!(
            EngineIdFilter::try_by_engine_id("  "),
            Err(RequestError::InvalidEngineId)
        ));
        assert_eq!(
            EngineIdFilter::try_by_engine_id("e1").unwrap().engine_id(),
            "e1"
        );
    }
}
