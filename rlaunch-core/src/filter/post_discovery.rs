use super::{AsAny, FilterCapabilities, FilterResult};
use crate::error::{RequestError, RequestResult};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// The view of a discovered test a post-discovery filter gets to see.
pub trait TestDescriptor {
    fn unique_id(&self) -> &str;
    fn display_name(&self) -> &str;
    fn tags(&self) -> &[String];
}

/// A predicate the launcher applies once engines have returned their tests.
pub trait PostDiscoveryFilter: AsAny + fmt::Debug + fmt::Display + Send + Sync {
    fn apply(&self, descriptor: &dyn TestDescriptor) -> FilterResult;
}

/// Plain descriptor value, for engines that have nothing richer to offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestIdentifier {
    pub unique_id: String,
    pub display_name: String,
    pub tags: Vec<String>,
}

impl TestIdentifier {
    pub fn new(unique_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            unique_id: unique_id.into(),
            display_name: display_name.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }
}

impl TestDescriptor for TestIdentifier {
    fn unique_id(&self) -> &str {
        &self.unique_id
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagMode {
    Require,
    Exclude,
}

/// Keeps or drops discovered tests by tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFilter {
    tags: Vec<String>,
    mode: TagMode,
}

impl TagFilter {
    /// Keep tests carrying at least one of `tags`.
    ///
    /// Tags are trimmed and blank ones dropped; nothing left is an error.
    pub fn include_tags<I, S>(tags: I) -> RequestResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(tags, TagMode::Require)
    }

    /// Drop tests carrying any of `tags`.
    pub fn exclude_tags<I, S>(tags: I) -> RequestResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(tags, TagMode::Exclude)
    }

    fn new<I, S>(tags: I, mode: TagMode) -> RequestResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: Vec<String> = tags
            .into_iter()
            .map(|t| t.into().trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        if tags.is_empty() {
            return Err(RequestError::EmptyTagList);
        }
        Ok(Self { tags, mode })
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl PostDiscoveryFilter for TagFilter {
    fn apply(&self, descriptor: &dyn TestDescriptor) -> FilterResult {
        let matched = descriptor.tags().iter().find(|tag| self.tags.contains(tag));
        match (self.mode, matched) {
            (TagMode::Require, Some(tag)) => {
                FilterResult::included_because(format!("carries required tag '{tag}'"))
            }
            (TagMode::Require, None) => FilterResult::excluded(format!(
                "'{}' carries none of the tags [{}]",
                descriptor.display_name(),
                self.tags.join(", ")
            )),
            (TagMode::Exclude, Some(tag)) => {
                FilterResult::excluded(format!("carries excluded tag '{tag}'"))
            }
            (TagMode::Exclude, None) => FilterResult::included(),
        }
    }
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.mode {
            TagMode::Require => "include",
            TagMode::Exclude => "exclude",
        };
        write!(f, "{verb} tags [{}]", self.tags.join(", "))
    }
}

impl FilterCapabilities for TagFilter {
    fn into_post_discovery_filter(self: Arc<Self>) -> Option<Arc<dyn PostDiscoveryFilter>> {
        Some(self)
    }
}
