//! Reading the configuration from a file.

use anyhow::{bail, Context, Result};
use rlife_lib::Config;
use std::{fs, path::Path};

/// Supported file formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
    Toml,
}

impl Format {
    /// Guesses the format from the file extension.
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("toml") => Ok(Format::Toml),
            _ => bail!(
                "unknown config format for {}, expected .json, .yaml, .yml or .toml",
                path.display()
            ),
        }
    }
}

fn parse(text: &str, format: Format) -> Result<Config> {
    let config = match format {
        Format::Json => serde_json::from_str(text)?,
        Format::Yaml => serde_yaml::from_str(text)?,
        Format::Toml => toml::from_str(text)?,
    };
    Ok(config)
}

/// Loads a [`Config`] from a JSON, YAML or TOML file.
///
/// Missing fields take their default values.
pub(crate) fn load(path: &Path) -> Result<Config> {
    let format = Format::from_path(path)?;
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    parse(&text, format).with_context(|| format!("invalid config file {}", path.display()))
}
