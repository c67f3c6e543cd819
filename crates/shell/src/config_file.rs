//! Reading and writing simulation configurations.

use std::path::Path;

use bubble_ring::SimulationConfig;

/// File formats for configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// JSON.
    Json,
    /// YAML.
    Yaml,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

impl Format {
    /// Determines the format from the extension of the path.
    ///
    /// # Errors
    ///
    /// - If the path has no extension, or one that is neither JSON nor YAML.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some(ext) => Err(format!("Unknown config format {ext} for path: {}", path.display())),
            None => Err(format!("Could not determine config format without extension for path: {}", path.display())),
        }
    }

    /// Parses a configuration from a string in this format.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// - If the contents cannot be parsed.
    pub fn parse(self, contents: &str) -> Result<SimulationConfig, String> {
        match self {
            Self::Json => serde_json::from_str(contents).map_err(|e| format!("Failed to parse JSON config: {e}")),
            Self::Yaml => serde_yaml::from_str(contents).map_err(|e| format!("Failed to parse YAML config: {e}")),
        }
    }

    /// Serializes a configuration to a string in this format.
    ///
    /// # Errors
    ///
    /// - If the configuration cannot be serialized.
    pub fn render(self, config: &SimulationConfig) -> Result<String, String> {
        match self {
            Self::Json => serde_json::to_string_pretty(config).map_err(|e| format!("Failed to serialize config to JSON: {e}")),
            Self::Yaml => serde_yaml::to_string(config).map_err(|e| format!("Failed to serialize config to YAML: {e}")),
        }
    }
}

/// Reads a configuration from the file at the given path, or returns the default configuration if there is no path.
///
/// # Errors
///
/// - If the file cannot be read or parsed.
/// - If the configuration is malformed.
pub fn read_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<SimulationConfig, String> {
    let config = match path {
        Some(path) => {
            let path = path.as_ref();
            let format = Format::from_path(path)?;
            let contents = std::fs::read_to_string(path).map_err(|e| format!("Failed to read config file {}: {e}", path.display()))?;
            format.parse(&contents)?
        }
        None => SimulationConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

/// Writes a configuration to the file at the given path, in the format given by its extension.
///
/// # Errors
///
/// - If the format cannot be determined.
/// - If the file cannot be written.
pub fn write<P: AsRef<Path>>(config: &SimulationConfig, path: P) -> Result<(), String> {
    let path = path.as_ref();
    let contents = Format::from_path(path)?.render(config)?;
    std::fs::write(path, contents).map_err(|e| format!("Failed to write config file {}: {e}", path.display()))
}
