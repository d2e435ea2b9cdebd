//! Turns command-line input into a discovery request.

use crate::cli::Args;
use crate::config::{ConfigError, LauncherConfig};
use crate::request::{DiscoveryRequest, DiscoveryRequestBuilder};
use log::debug;
use rlaunch_core::{ClassNameFilter, DiscoverySelector, MethodSelector, RequestError};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("Invalid configuration parameter '{raw}': expected KEY=VALUE")]
    MalformedParameter { raw: String },
}

/// Build the request described by `args`.
///
/// The launcher configuration file is applied first, so parameters given on
/// the command line replace the file's values for the same key. The file's
/// engine and tag lists are defaults: an option given on the command line
/// replaces the matching list instead of adding to it.
pub fn build_request_from_args(args: &Args, rootpath: &Path) -> Result<DiscoveryRequest, LaunchError> {
    let mut config = match &args.config_file {
        Some(path) => LauncherConfig::from_file(path)?,
        None => LauncherConfig::discover(rootpath)?,
    };
    override_defaults(&mut config.engines, &args.engines, "engines");
    override_defaults(&mut config.include_tags, &args.include_tags, "include-tags");
    override_defaults(&mut config.exclude_tags, &args.exclude_tags, "exclude-tags");

    let mut builder = DiscoveryRequestBuilder::request();
    config.apply_to(&mut builder)?;

    let methods = args
        .methods
        .iter()
        .map(|m| MethodSelector::parse(m))
        .collect::<Result<Vec<_>, _>>()?;

    builder
        .select(args.packages.iter().map(DiscoverySelector::package))
        .select(args.classes.iter().map(DiscoverySelector::class_name))
        .select(methods)
        .select(args.paths.iter().map(DiscoverySelector::path))
        .select(args.unique_ids.iter().map(DiscoverySelector::unique_id));

    for pattern in &args.include_classnames {
        builder.filter([ClassNameFilter::include_pattern(pattern)?]);
    }
    for pattern in &args.exclude_classnames {
        builder.filter([ClassNameFilter::exclude_pattern(pattern)?]);
    }

    builder.configuration_parameters(args.configuration_parameters()?)?;

    debug!("Assembled discovery request from command line");
    Ok(builder.build())
}

fn override_defaults(defaults: &mut Vec<String>, given: &[String], option: &str) {
    if given.is_empty() {
        return;
    }
    if !defaults.is_empty() {
        debug!("Command line {option} replace {:?} from the configuration file", defaults);
    }
    *defaults = given.to_vec();
}

/// Display the request in a format similar to a collection listing
pub fn display_request(request: &DiscoveryRequest) {
    if request.selectors().is_empty() {
        println!("No selectors given.");
    } else {
        println!("Selected {} items:", request.selectors().len());
        for selector in request.selectors() {
            println!("  {selector}");
        }
    }

    for filter in request.engine_id_filters() {
        println!("Engine filter: {filter}");
    }
    for filter in request.discovery_filters() {
        println!("Discovery filter: {filter}");
    }
    for filter in request.post_discovery_filters() {
        println!("Post-discovery filter: {filter}");
    }

    let parameters = request.configuration_parameters();
    if !parameters.is_empty() {
        println!("Configuration parameters:");
        for (key, value) in parameters.iter() {
            println!("  {key} = {value}");
        }
    }
}
