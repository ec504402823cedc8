//! Configuration file support for backcc
//!
//! Config file location: ~/.config/backcc/config.toml
//!
//! Example config:
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8000
//! cors = true
//!
//! [pipeline]
//! provider = "command"  # command, simulated
//! ask_command = ["python", "query.py"]
//! build_command = ["python", "ingest.py"]
//! credential_env = "GROQ_API_KEY"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub pipeline: PipelineConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allow cross-origin requests from any origin
    #[serde(default = "default_cors")]
    pub cors: bool,

    /// Largest accepted `/api/ask` body in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors: default_cors(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_cors() -> bool {
    true
}

fn default_max_body_bytes() -> usize {
    2 * 1024 * 1024
}

/// Collaborator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Provider type: command, simulated
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Program and arguments answering a question; the question is appended
    #[serde(default)]
    pub ask_command: Vec<String>,

    /// Program and arguments rebuilding the index
    #[serde(default)]
    pub build_command: Vec<String>,

    /// Working directory for both commands
    pub working_dir: Option<PathBuf>,

    /// Environment variable holding the LLM credential
    #[serde(default = "default_credential_env")]
    pub credential_env: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            ask_command: Vec::new(),
            build_command: Vec::new(),
            working_dir: None,
            credential_env: default_credential_env(),
        }
    }
}

fn default_provider() -> String {
    "command".to_string()
}

fn default_credential_env() -> String {
    "GROQ_API_KEY".to_string()
}

const EXAMPLE_CONFIG: &str = r#"# backcc Configuration
# Location: ~/.config/backcc/config.toml

[server]
# Interface to bind to (default: all interfaces)
host = "0.0.0.0"

# Port (default: 8000, or set API_PORT env var)
port = 8000

# Allow cross-origin requests from any origin
cors = true

# Largest accepted /api/ask body in bytes (default: 2 MiB)
max_body_bytes = 2097152

[pipeline]
# Provider: command, simulated
provider = "command"

# Program answering a question. The question is passed as the last argument
# and the answer is read from stdout.
ask_command = ["python", "query.py"]

# Program rebuilding the search index
build_command = ["python", "ingest.py"]

# Directory to run both commands in
# working_dir = "/srv/rag"

# Environment variable holding the LLM credential
credential_env = "GROQ_API_KEY"
"#;

impl Config {
    /// Get the config file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("backcc")
            .join("config.toml")
    }

    /// Load config from the default location, returning defaults if not found
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`, returning defaults if missing or invalid
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => {
                        tracing::debug!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config file: {}", e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config file: {}", e);
                }
            }
        }
        Self::default()
    }

    /// Write the commented example config to `path`
    pub fn write_example(path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, EXAMPLE_CONFIG)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert!(config.server.cors);
        assert_eq!(config.server.max_body_bytes, 2 * 1024 * 1024);
        assert_eq!(config.pipeline.provider, "command");
        assert_eq!(config.pipeline.credential_env, "GROQ_API_KEY");
        assert!(config.pipeline.ask_command.is_empty());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[server]
port = 9100

[pipeline]
provider = "simulated"
ask_command = ["python3", "query.py"]
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.pipeline.provider, "simulated");
        assert_eq!(config.pipeline.ask_command, vec!["python3", "query.py"]);
        assert!(config.pipeline.build_command.is_empty());
    }

    #[test]
    fn test_example_config_parses() {
        let config: Config = toml::from_str(EXAMPLE_CONFIG).unwrap();
        assert_eq!(config.pipeline.build_command, vec!["python", "ingest.py"]);
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_load_from_missing_and_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert_eq!(Config::load_from(&missing).server.port, 8000);

        let invalid = dir.path().join("bad.toml");
        std::fs::write(&invalid, "[server\nport = ").unwrap();
        assert_eq!(Config::load_from(&invalid).server.port, 8000);
    }

    #[test]
    fn test_write_example_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        Config::write_example(&path).unwrap();
        let config = Config::load_from(&path);
        assert_eq!(config.pipeline.ask_command, vec!["python", "query.py"]);
    }
}
