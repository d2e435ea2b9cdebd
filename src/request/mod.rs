//! Discovery request assembly.
//!
//! [`DiscoveryRequestBuilder`] accumulates selectors, filters and
//! configuration parameters; [`DiscoveryRequestBuilder::build`] hands out an
//! immutable [`DiscoveryRequest`] for engines to read.

pub mod builder;
pub mod discovery_request;

pub use builder::DiscoveryRequestBuilder;
pub use discovery_request::{DiscoveryRequest, RequestSummary};
