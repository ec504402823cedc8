//! CLI module - command definitions and handlers

mod ask;
mod config_cmd;
mod rebuild;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;

pub use ask::AskArgs;
pub use config_cmd::ConfigArgs;
pub use rebuild::RebuildArgs;
pub use serve::ServeArgs;

/// backcc - HTTP adapter for a RAG question-answering pipeline
#[derive(Parser)]
#[command(name = "backcc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (default: ~/.config/backcc/config.toml)
    #[arg(long, global = true, env = "BACKCC_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve(ServeArgs),

    /// Ask a question through the pipeline
    Ask(AskArgs),

    /// Rebuild the search index through the pipeline
    Rebuild(RebuildArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = self.load_config();

        match self.command {
            Commands::Serve(args) => serve::run(args, config).await,
            Commands::Ask(args) => ask::run(args, config).await,
            Commands::Rebuild(args) => rebuild::run(args, config).await,
            Commands::Config(args) => {
                let path = self.config.unwrap_or_else(Config::config_path);
                config_cmd::run(args, &path).await
            }
        }
    }

    /// Config from `--config` if given, else the default location
    fn load_config(&self) -> Config {
        match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }
}

/// Apply a `--pipeline` override to the loaded config
fn override_provider(config: &mut Config, provider: Option<String>) {
    if let Some(provider) = provider {
        config.pipeline.provider = provider;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from([
            "backcc", "serve", "--port", "9000", "--no-cors", "--pipeline", "simulated",
        ])
        .unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.port, Some(9000));
                assert!(args.no_cors);
                assert_eq!(args.pipeline.as_deref(), Some("simulated"));
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_unknown_pipeline_rejected() {
        assert!(Cli::try_parse_from(["backcc", "rebuild", "--pipeline", "groq"]).is_err());
    }

    #[test]
    fn test_load_config_from_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("backcc.toml");
        std::fs::write(&path, "[server]\nport = 9300\n").unwrap();

        let cli = Cli::try_parse_from([
            "backcc",
            "--config",
            path.to_str().unwrap(),
            "rebuild",
        ])
        .unwrap();
        assert_eq!(cli.load_config().server.port, 9300);
    }

    #[test]
    fn test_override_provider() {
        let mut config = Config::default();
        override_provider(&mut config, None);
        assert_eq!(config.pipeline.provider, "command");
        override_provider(&mut config, Some("simulated".into()));
        assert_eq!(config.pipeline.provider, "simulated");
    }
}
