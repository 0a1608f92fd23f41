// File: src/config.rs
// Purpose: Generator configuration from skpaths.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Generator configuration
///
/// The defaults reproduce the SvelteKit project convention: scan
/// `src/routes` and write the declaration next to the framework's own
/// generated types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Route directory to scan (default: "src/routes")
    #[serde(default = "default_routes_dir")]
    pub routes_dir: PathBuf,

    /// Declaration file to write
    /// (default: ".svelte-kit/types/sveltekit-paths/$types.d.ts")
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Ambient module name declared in the output file
    /// (default: "$sveltekit-paths")
    #[serde(default = "default_module_name")]
    pub module_name: String,
}

// Default values
fn default_routes_dir() -> PathBuf {
    PathBuf::from("src/routes")
}

fn default_output() -> PathBuf {
    PathBuf::from(".svelte-kit/types/sveltekit-paths/$types.d.ts")
}

fn default_module_name() -> String {
    "$sveltekit-paths".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            routes_dir: default_routes_dir(),
            output: default_output(),
            module_name: default_module_name(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a TOML file
    ///
    /// A missing or empty file yields the defaults, so a project without a
    /// config file works out of the box.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: GeneratorConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from the default path (./skpaths.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("skpaths.toml")
    }
}
