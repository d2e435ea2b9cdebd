use super::{AsAny, FilterCapabilities, FilterResult};
use crate::error::{RequestError, RequestResult};
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// A predicate an engine applies to candidate names while discovering.
///
/// `Display` is what summaries print for the filter.
pub trait DiscoveryFilter: AsAny + fmt::Debug + fmt::Display + Send + Sync {
    fn apply(&self, candidate: &str) -> FilterResult;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PatternMode {
    Include,
    Exclude,
}

/// Includes or excludes class names by regular expression.
///
/// The pattern must match the whole name.
#[derive(Debug, Clone)]
pub struct ClassNameFilter {
    pattern: String,
    regex: Regex,
    mode: PatternMode,
}

impl ClassNameFilter {
    pub fn include_pattern(pattern: &str) -> RequestResult<Self> {
        Self::new(pattern, PatternMode::Include)
    }

    pub fn exclude_pattern(pattern: &str) -> RequestResult<Self> {
        Self::new(pattern, PatternMode::Exclude)
    }

    fn new(pattern: &str, mode: PatternMode) -> RequestResult<Self> {
        let invalid = |source: regex::Error| RequestError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        };
        // Validate alone first: a stray ')' would otherwise close the anchor group.
        Regex::new(pattern).map_err(invalid)?;
        let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(invalid)?;

        Ok(Self {
            pattern: pattern.to_string(),
            regex,
            mode,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_exclusion(&self) -> bool {
        self.mode == PatternMode::Exclude
    }
}

impl DiscoveryFilter for ClassNameFilter {
    fn apply(&self, candidate: &str) -> FilterResult {
        let matches = self.regex.is_match(candidate);
        match (self.mode, matches) {
            (PatternMode::Include, true) => FilterResult::included_because(format!(
                "class name '{candidate}' matches pattern '{}'",
                self.pattern
            )),
            (PatternMode::Include, false) => FilterResult::excluded(format!(
                "class name '{candidate}' does not match pattern '{}'",
                self.pattern
            )),
            (PatternMode::Exclude, true) => FilterResult::excluded(format!(
                "class name '{candidate}' matches excluded pattern '{}'",
                self.pattern
            )),
            (PatternMode::Exclude, false) => FilterResult::included(),
        }
    }
}

impl fmt::Display for ClassNameFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            PatternMode::Include => write!(f, "include class names matching '{}'", self.pattern),
            PatternMode::Exclude => write!(f, "exclude class names matching '{}'", self.pattern),
        }
    }
}

impl FilterCapabilities for ClassNameFilter {
    fn into_discovery_filter(self: Arc<Self>) -> Option<Arc<dyn DiscoveryFilter>> {
        Some(self)
    }
}
