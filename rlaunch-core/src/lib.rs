//! Engine-facing contracts for test discovery requests.
//!
//! This crate holds the values a discovery request is made of:
//! - Selectors naming what to look for
//! - Filters restricting engines, candidates and discovered tests
//! - String configuration parameters passed through to engines

pub mod error;
pub mod filter;
pub mod parameters;
pub mod selector;

pub use error::{RequestError, RequestResult};
pub use filter::{
    AsAny, ClassNameFilter, DiscoveryFilter, EngineIdFilter, Filter, FilterCapabilities,
    FilterKind, FilterResult, PostDiscoveryFilter, TagFilter, TestDescriptor, TestIdentifier,
};
pub use parameters::ConfigurationParameters;
pub use selector::{
    ClassOrigin, ClassSelector, DiscoverySelector, MethodSelector, PackageSelector, PathSelector,
    SelectorVariant, UniqueIdSelector,
};
