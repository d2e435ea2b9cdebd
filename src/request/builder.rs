//! Fluent builder for discovery requests.

use super::discovery_request::DiscoveryRequest;
use log::{debug, trace};
use rlaunch_core::{
    ConfigurationParameters, DiscoveryFilter, DiscoverySelector, EngineIdFilter, Filter,
    FilterCapabilities, PostDiscoveryFilter, RequestResult,
};
use std::sync::Arc;

/// Accumulates the inputs of a [`DiscoveryRequest`].
///
/// ```
/// use rlaunch::{DiscoveryRequestBuilder, DiscoverySelector, EngineIdFilter, TagFilter};
///
/// # fn main() -> Result<(), rlaunch::RequestError> {
/// let request = DiscoveryRequestBuilder::request()
///     .select([
///         DiscoverySelector::package("org.example"),
///         DiscoverySelector::class_name("org.example.SampleTests"),
///     ])
///     .filter([EngineIdFilter::by_engine_id("junit5")])
///     .filter([TagFilter::include_tags(["fast"])?])
///     .configuration_parameter("key1", "value1")?
///     .build();
///
/// assert_eq!(request.selectors().len(), 2);
/// # Ok(())
/// # }
/// ```
///
/// Not meant for concurrent population; the built request is what gets shared.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryRequestBuilder {
    selectors: Vec<DiscoverySelector>,
    engine_id_filters: Vec<EngineIdFilter>,
    discovery_filters: Vec<Arc<dyn DiscoveryFilter>>,
    post_discovery_filters: Vec<Arc<dyn PostDiscoveryFilter>>,
    configuration_parameters: ConfigurationParameters,
}

impl DiscoveryRequestBuilder {
    pub fn request() -> Self {
        Self::default()
    }

    /// Append selectors in order. Nothing is deduplicated.
    pub fn select<I>(&mut self, selectors: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<DiscoverySelector>,
    {
        let before = self.selectors.len();
        self.selectors.extend(selectors.into_iter().map(Into::into));
        trace!("Selected {} selectors", self.selectors.len() - before);
        self
    }

    /// Append filters, each to the bucket of its kind.
    pub fn filter<I>(&mut self, filters: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Filter>,
    {
        for filter in filters {
            self.store_filter(filter.into());
        }
        self
    }

    /// Classify and append filter objects of unknown kind.
    ///
    /// Stops at the first object that cannot be classified. Objects before it
    /// have already been stored and stay stored.
    pub fn filter_objects<I>(&mut self, objects: I) -> RequestResult<&mut Self>
    where
        I: IntoIterator<Item = Arc<dyn FilterCapabilities>>,
    {
        for object in objects {
            let filter = Filter::classify(object)?;
            self.store_filter(filter);
        }
        Ok(self)
    }

    /// Set one parameter. A blank key is rejected and nothing changes.
    pub fn configuration_parameter(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> RequestResult<&mut Self> {
        let key = key.into();
        if let Some(previous) = self.configuration_parameters.insert(key.as_str(), value)? {
            debug!("Configuration parameter {key} overrides previous value {previous}");
        }
        Ok(self)
    }

    /// Set every entry in iteration order; later entries win on equal keys.
    ///
    /// Stops at the first blank key, keeping the entries applied before it.
    pub fn configuration_parameters<I, K, V>(&mut self, parameters: I) -> RequestResult<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in parameters {
            self.configuration_parameter(key, value)?;
        }
        Ok(self)
    }

    /// Snapshot the accumulated state into a request.
    pub fn build(&self) -> DiscoveryRequest {
        debug!(
            "Building discovery request: {} selectors, {} engine id filters, {} discovery filters, {} post-discovery filters, {} configuration parameters",
            self.selectors.len(),
            self.engine_id_filters.len(),
            self.discovery_filters.len(),
            self.post_discovery_filters.len(),
            self.configuration_parameters.len()
        );

        DiscoveryRequest::new(
            self.selectors.clone(),
            self.engine_id_filters.clone(),
            self.discovery_filters.clone(),
            self.post_discovery_filters.clone(),
            self.configuration_parameters.clone(),
        )
    }

    fn store_filter(&mut self, filter: Filter) {
        match filter {
            Filter::EngineId(filter) => self.engine_id_filters.push(filter),
            Filter::Discovery(filter) => self.discovery_filters.push(filter),
            Filter::PostDiscovery(filter) => self.post_discovery_filters.push(filter),
        }
    }
}
