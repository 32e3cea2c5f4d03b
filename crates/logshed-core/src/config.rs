//! Configuration types for logshed.
//!
//! [`Config::load`] layers an optional TOML file over the embedded
//! defaults. [`Config::defaults`] returns the same defaults without
//! touching the filesystem (useful in tests). CLI flags override both; the
//! binary applies those on top.

use crate::route::RouteTable;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

/// The default binding reproduces the original job's layout: an archive
/// destination plus `output1`/`output2` keyed on logId. A `rejects` name,
/// when non-empty, audits grammar/timestamp rejections to that destination
/// instead of dropping them silently.
const DEFAULT_CONFIG: &str = r#"
[input]
path = "input.txt"

[output]
dir = "out"
archive = "archive"
rejects = ""

[output.secondary]
"1" = "output1"
"2" = "output2"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level run configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[input]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Path of the line source; `-` reads stdin.
    #[serde(default = "default_input_path")]
    pub path: String,
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory that receives one `<name>.txt` artifact per destination.
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    /// Destination name bound to the archive tag.
    #[serde(default = "default_archive")]
    pub archive: String,
    /// Destination name for rejected lines; empty disables auditing.
    #[serde(default)]
    pub rejects: String,
    /// logId digit → secondary destination name.
    #[serde(default = "default_secondary")]
    pub secondary: BTreeMap<String, String>,
}

fn default_input_path() -> String {
    "input.txt".to_string()
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("out")
}
fn default_archive() -> String {
    "archive".to_string()
}
fn default_secondary() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("1".to_string(), "output1".to_string()),
        ("2".to_string(), "output2".to_string()),
    ])
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            archive: default_archive(),
            rejects: String::new(),
            secondary: default_secondary(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load configuration, layering `path` (when given) over the built-in
    /// defaults. An explicitly named file must exist.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder().add_source(config::File::from_str(
            DEFAULT_CONFIG,
            config::FileFormat::Toml,
        ));
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        builder
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Build the validated route table this config describes.
    pub fn route_table(&self) -> anyhow::Result<RouteTable> {
        RouteTable::new(&self.output.archive, &self.output.secondary)
    }

    /// The rejects destination name, if auditing is enabled.
    pub fn rejects(&self) -> Option<&str> {
        if self.output.rejects.is_empty() {
            None
        } else {
            Some(&self.output.rejects)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
