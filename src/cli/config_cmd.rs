//! Config command - manage backcc configuration

use std::path::Path;

use clap::{Args, Subcommand};

use crate::config::Config;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Initialize config file with defaults
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Show config file path
    Path,
}

pub async fn run(args: ConfigArgs, path: &Path) -> anyhow::Result<()> {
    match args.command {
        ConfigCommands::Show => {
            let config = Config::load_from(path);

            if path.exists() {
                println!("Config file: {}", path.display());
            } else {
                println!("Config file: {} (not found, using defaults)", path.display());
            }
            println!();
            println!("[server]");
            println!("host = \"{}\"", config.server.host);
            println!("port = {}", config.server.port);
            println!("cors = {}", config.server.cors);
            println!("max_body_bytes = {}", config.server.max_body_bytes);
            println!();
            println!("[pipeline]");
            println!("provider = \"{}\"", config.pipeline.provider);
            println!("ask_command = {:?}", config.pipeline.ask_command);
            println!("build_command = {:?}", config.pipeline.build_command);
            if let Some(dir) = &config.pipeline.working_dir {
                println!("working_dir = \"{}\"", dir.display());
            }
            println!("credential_env = \"{}\"", config.pipeline.credential_env);
        }

        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }

            Config::write_example(path)?;
            println!("Created config file at {}", path.display());
            println!();
            println!("Edit ask_command and build_command to point at your retrieval");
            println!("and ingest programs. The question is passed as the last argument");
            println!("to ask_command and the answer is read from its stdout.");
        }

        ConfigCommands::Path => {
            println!("{}", path.display());
        }
    }

    Ok(())
}
