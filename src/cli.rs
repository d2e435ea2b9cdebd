use crate::request_integration::LaunchError;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Select every test in a package (e.g., 'org.example.service')
    #[arg(long = "select-package", value_name = "PACKAGE")]
    pub packages: Vec<String>,

    /// Select a class by fully qualified name
    #[arg(long = "select-class", value_name = "CLASS")]
    pub classes: Vec<String>,

    /// Select a method (e.g., 'org.example.SampleTests#test(int)')
    #[arg(long = "select-method", value_name = "CLASS#METHOD")]
    pub methods: Vec<String>,

    /// Select a file system path
    #[arg(long = "select-path", value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Select a test by unique id
    #[arg(long = "select-unique-id", value_name = "UNIQUE_ID")]
    pub unique_ids: Vec<String>,

    /// Only run the engine with this id (repeatable)
    #[arg(long = "include-engine", value_name = "ENGINE_ID")]
    pub engines: Vec<String>,

    /// Only discover classes whose name matches this regular expression
    #[arg(long = "include-classname", value_name = "PATTERN")]
    pub include_classnames: Vec<String>,

    /// Skip classes whose name matches this regular expression
    #[arg(long = "exclude-classname", value_name = "PATTERN")]
    pub exclude_classnames: Vec<String>,

    /// Keep discovered tests carrying one of these tags
    #[arg(long = "include-tag", value_name = "TAG")]
    pub include_tags: Vec<String>,

    /// Drop discovered tests carrying one of these tags
    #[arg(long = "exclude-tag", value_name = "TAG")]
    pub exclude_tags: Vec<String>,

    /// Configuration parameters for the engines (e.g., 'KEY=VALUE')
    #[arg(long = "config", short = 'c', value_name = "KEY=VALUE", num_args = 0..)]
    pub config: Vec<String>,

    /// Launcher configuration file (defaults to ./rlaunch.toml when present)
    #[arg(long)]
    pub config_file: Option<PathBuf>,

    /// Print the request as JSON
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Split `--config` values into key/value pairs.
    ///
    /// Only the first '=' separates; the value may contain more of them.
    pub fn configuration_parameters(&self) -> Result<Vec<(String, String)>, LaunchError> {
        self.config
            .iter()
            .map(|raw| match raw.split_once('=') {
                Some((key, value)) => Ok((key.to_string(), value.to_string())),
                None => Err(LaunchError::MalformedParameter { raw: raw.clone() }),
            })
            .collect()
    }
}
