//! The immutable request handed to discovery engines.

use rlaunch_core::{
    ConfigurationParameters, DiscoveryFilter, DiscoverySelector, EngineIdFilter,
    PostDiscoveryFilter, SelectorVariant,
};
use serde::Serialize;
use std::sync::Arc;

/// What to discover, how to filter it, and engine configuration.
///
/// Exposes no mutation, so it can be shared across threads and read by
/// several engines at once.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryRequest {
    selectors: Vec<DiscoverySelector>,
    engine_id_filters: Vec<EngineIdFilter>,
    discovery_filters: Vec<Arc<dyn DiscoveryFilter>>,
    post_discovery_filters: Vec<Arc<dyn PostDiscoveryFilter>>,
    configuration_parameters: ConfigurationParameters,
}

impl DiscoveryRequest {
    pub fn new(
        selectors: Vec<DiscoverySelector>,
        engine_id_filters: Vec<EngineIdFilter>,
        discovery_filters: Vec<Arc<dyn DiscoveryFilter>>,
        post_discovery_filters: Vec<Arc<dyn PostDiscoveryFilter>>,
        configuration_parameters: ConfigurationParameters,
    ) -> Self {
        Self {
            selectors,
            engine_id_filters,
            discovery_filters,
            post_discovery_filters,
            configuration_parameters,
        }
    }

    pub fn selectors(&self) -> &[DiscoverySelector] {
        &self.selectors
    }

    /// Selectors of one variant, in insertion order
    pub fn selectors_by_type<S: SelectorVariant>(&self) -> Vec<&S> {
        self.selectors
            .iter()
            .filter_map(S::from_selector)
            .collect()
    }

    pub fn engine_id_filters(&self) -> &[EngineIdFilter] {
        &self.engine_id_filters
    }

    pub fn discovery_filters(&self) -> &[Arc<dyn DiscoveryFilter>] {
        &self.discovery_filters
    }

    /// Discovery filters of one concrete type, in insertion order
    pub fn discovery_filters_by_type<F: DiscoveryFilter>(&self) -> Vec<&F> {
        self.discovery_filters
            .iter()
            .filter_map(|filter| (**filter).as_any().downcast_ref::<F>())
            .collect()
    }

    pub fn post_discovery_filters(&self) -> &[Arc<dyn PostDiscoveryFilter>] {
        &self.post_discovery_filters
    }

    pub fn configuration_parameters(&self) -> &ConfigurationParameters {
        &self.configuration_parameters
    }

    pub fn summary(&self) -> RequestSummary {
        RequestSummary {
            selectors: self.selectors.clone(),
            engine_ids: self
                .engine_id_filters
                .iter()
                .map(|f| f.engine_id().to_string())
                .collect(),
            discovery_filters: self.discovery_filters.iter().map(|f| f.to_string()).collect(),
            post_discovery_filters: self
                .post_discovery_filters
                .iter()
                .map(|f| f.to_string())
                .collect(),
            configuration_parameters: self.configuration_parameters.clone(),
        }
    }
}

/// Serializable description of a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestSummary {
    pub selectors: Vec<DiscoverySelector>,
    pub engine_ids: Vec<String>,
    pub discovery_filters: Vec<String>,
    pub post_discovery_filters: Vec<String>,
    pub configuration_parameters: ConfigurationParameters,
}
