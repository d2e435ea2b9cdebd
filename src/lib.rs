//! Launcher-side assembly of test discovery requests.
//!
//! Callers describe what to discover with selectors, narrow it with filters
//! and pass engine settings as configuration parameters. Discovery itself is
//! left to the engines that consume the resulting [`DiscoveryRequest`].

pub mod cli;
pub mod config;
pub mod request;
pub mod request_integration;

pub use config::{ConfigError, LauncherConfig};
pub use request::{DiscoveryRequest, DiscoveryRequestBuilder, RequestSummary};
pub use request_integration::{build_request_from_args, display_request, LaunchError};
pub use rlaunch_core::{
    ClassNameFilter, ClassOrigin, ClassSelector, ConfigurationParameters, DiscoveryFilter,
    DiscoverySelector, EngineIdFilter, Filter, FilterCapabilities, FilterKind, FilterResult,
    MethodSelector, PackageSelector, PathSelector, PostDiscoveryFilter, RequestError,
    RequestResult, SelectorVariant, TagFilter, TestDescriptor, TestIdentifier, UniqueIdSelector,
};
