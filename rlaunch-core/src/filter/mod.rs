//! Filters carried by a discovery request.
//!
//! A [`Filter`] is one of three kinds, each evaluated by a different party:
//! - [`EngineIdFilter`] decides which engines take part at all
//! - [`DiscoveryFilter`] is applied by an engine to its candidates
//! - [`PostDiscoveryFilter`] is applied by the launcher to discovered tests
//!
//! Callers normally construct the enum directly. Objects whose kind is only
//! known through [`FilterCapabilities`] go through [`Filter::classify`].

mod discovery;
mod engine_id;
mod post_discovery;

pub use discovery::{ClassNameFilter, DiscoveryFilter};
pub use engine_id::EngineIdFilter;
pub use post_discovery::{PostDiscoveryFilter, TagFilter, TestDescriptor, TestIdentifier};

use crate::error::{RequestError, RequestResult};
use log::debug;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Outcome of applying a filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterResult {
    included: bool,
    reason: Option<String>,
}

impl FilterResult {
    pub fn included() -> Self {
        Self {
            included: true,
            reason: None,
        }
    }

    pub fn included_because(reason: impl Into<String>) -> Self {
        Self {
            included: true,
            reason: Some(reason.into()),
        }
    }

    pub fn excluded(reason: impl Into<String>) -> Self {
        Self {
            included: false,
            reason: Some(reason.into()),
        }
    }

    pub fn is_included(&self) -> bool {
        self.included
    }

    pub fn is_excluded(&self) -> bool {
        !self.included
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}

/// Downcasting support for filter trait objects.
///
/// Implemented for every `'static` type, so filter implementors never
/// write it by hand.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// The bucket a filter belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    EngineId,
    Discovery,
    PostDiscovery,
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::EngineId => "EngineIdFilter",
            Self::Discovery => "DiscoveryFilter",
            Self::PostDiscovery => "PostDiscoveryFilter",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub enum Filter {
    EngineId(EngineIdFilter),
    Discovery(Arc<dyn DiscoveryFilter>),
    PostDiscovery(Arc<dyn PostDiscoveryFilter>),
}

impl Filter {
    pub fn discovery<F: DiscoveryFilter>(filter: F) -> Self {
        Self::Discovery(Arc::new(filter))
    }

    pub fn post_discovery<F: PostDiscoveryFilter>(filter: F) -> Self {
        Self::PostDiscovery(Arc::new(filter))
    }

    pub fn kind(&self) -> FilterKind {
        match self {
            Self::EngineId(_) => FilterKind::EngineId,
            Self::Discovery(_) => FilterKind::Discovery,
            Self::PostDiscovery(_) => FilterKind::PostDiscovery,
        }
    }

    /// Route an object by the capabilities it exposes.
    ///
    /// An object with several capabilities lands in the first matching
    /// bucket: engine id, then post-discovery, then discovery.
    pub fn classify(object: Arc<dyn FilterCapabilities>) -> RequestResult<Self> {
        if let Some(engine_id_filter) = object.as_engine_id_filter() {
            debug!("Routing filter to engine id bucket: {engine_id_filter}");
            return Ok(Self::EngineId(engine_id_filter.clone()));
        }

        if let Some(filter) = Arc::clone(&object).into_post_discovery_filter() {
            debug!("Routing filter to post-discovery bucket: {filter}");
            return Ok(Self::PostDiscovery(filter));
        }

        if let Some(filter) = object.into_discovery_filter() {
            debug!("Routing filter to discovery bucket: {filter}");
            return Ok(Self::Discovery(filter));
        }

        Err(RequestError::UnclassifiableFilter)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EngineId(filter) => write!(f, "{filter}"),
            Self::Discovery(filter) => write!(f, "{filter}"),
            Self::PostDiscovery(filter) => write!(f, "{filter}"),
        }
    }
}

impl From<EngineIdFilter> for Filter {
    fn from(filter: EngineIdFilter) -> Self {
        Self::EngineId(filter)
    }
}

impl From<ClassNameFilter> for Filter {
    fn from(filter: ClassNameFilter) -> Self {
        Self::discovery(filter)
    }
}

impl From<TagFilter> for Filter {
    fn from(filter: TagFilter) -> Self {
        Self::post_discovery(filter)
    }
}

/// Capability probes for filter objects of unknown kind.
///
/// Every probe defaults to "absent"; a type overrides the ones it supports.
/// A type overriding none of them cannot be classified.
pub trait FilterCapabilities: Send + Sync {
    fn as_engine_id_filter(&self) -> Option<&EngineIdFilter> {
        None
    }

    fn into_post_discovery_filter(self: Arc<Self>) -> Option<Arc<dyn PostDiscoveryFilter>> {
        None
    }

    fn into_discovery_filter(self: Arc<Self>) -> Option<Arc<dyn DiscoveryFilter>> {
        None
    }
}

impl FilterCapabilities for Filter {
    fn as_engine_id_filter(&self) -> Option<&EngineIdFilter> {
        match self {
            Self::EngineId(filter) => Some(filter),
            _ => None,
        }
    }

    fn into_post_discovery_filter(self: Arc<Self>) -> Option<Arc<dyn PostDiscoveryFilter>> {
        match self.as_ref() {
            Self::PostDiscovery(filter) => Some(Arc::clone(filter)),
            _ => None,
        }
    }

    fn into_discovery_filter(self: Arc<Self>) -> Option<Arc<dyn DiscoveryFilter>> {
        match self.as_ref() {
            Self::Discovery(filter) => Some(Arc::clone(filter)),
            _ => None,
        }
    }
}
