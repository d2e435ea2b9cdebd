//! Common test utilities and helpers.

#![allow(dead_code)]

use rlaunch::{
    DiscoveryFilter, EngineIdFilter, FilterCapabilities, FilterResult, PostDiscoveryFilter,
    TestDescriptor,
};
use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::Arc;
use tempfile::TempDir;

/// Discovery filter that only carries a name.
#[derive(Debug, Clone)]
pub struct DiscoveryFilterStub(pub String);

impl DiscoveryFilterStub {
    pub fn new(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl fmt::Display for DiscoveryFilterStub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl DiscoveryFilter for DiscoveryFilterStub {
    fn apply(&self, _candidate: &str) -> FilterResult {
        FilterResult::included()
    }
}

impl FilterCapabilities for DiscoveryFilterStub {
    fn into_discovery_filter(self: Arc<Self>) -> Option<Arc<dyn DiscoveryFilter>> {
        Some(self)
    }
}

/// Post-discovery filter that only carries a name.
#[derive(Debug, Clone)]
pub struct PostDiscoveryFilterStub(pub String);

impl PostDiscoveryFilterStub {
    pub fn new(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl fmt::Display for PostDiscoveryFilterStub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PostDiscoveryFilter for PostDiscoveryFilterStub {
    fn apply(&self, _descriptor: &dyn TestDescriptor) -> FilterResult {
        FilterResult::included()
    }
}

impl FilterCapabilities for PostDiscoveryFilterStub {
    fn into_post_discovery_filter(self: Arc<Self>) -> Option<Arc<dyn PostDiscoveryFilter>> {
        Some(self)
    }
}

/// A predicate that exposes none of the filter capabilities.
#[derive(Debug)]
pub struct ExcludingPredicate;

impl ExcludingPredicate {
    pub fn test(&self, _candidate: &str) -> FilterResult {
        FilterResult::excluded("reason")
    }
}

impl FilterCapabilities for ExcludingPredicate {}

/// Exposes every capability, so only precedence decides its bucket.
#[derive(Debug)]
pub struct EveryCapabilityFilter {
    pub engine: EngineIdFilter,
}

impl fmt::Display for EveryCapabilityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "every capability ({})", self.engine.engine_id())
    }
}

impl DiscoveryFilter for EveryCapabilityFilter {
    fn apply(&self, _candidate: &str) -> FilterResult {
        FilterResult::included()
    }
}

impl PostDiscoveryFilter for EveryCapabilityFilter {
    fn apply(&self, _descriptor: &dyn TestDescriptor) -> FilterResult {
        FilterResult::included()
    }
}

impl FilterCapabilities for EveryCapabilityFilter {
    fn as_engine_id_filter(&self) -> Option<&EngineIdFilter> {
        Some(&self.engine)
    }

    fn into_post_discovery_filter(self: Arc<Self>) -> Option<Arc<dyn PostDiscoveryFilter>> {
        Some(self)
    }

    fn into_discovery_filter(self: Arc<Self>) -> Option<Arc<dyn DiscoveryFilter>> {
        Some(self)
    }
}

/// Creates an empty working directory for the rlaunch binary.
pub fn create_project_dir() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let project_path = temp_dir.path().join("project");
    std::fs::create_dir_all(&project_path).expect("Failed to create project directory");
    (temp_dir, project_path)
}

/// Runs the rlaunch binary in `dir` with `args`.
pub fn run_rlaunch(dir: &std::path::Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rlaunch"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run rlaunch binary")
}
