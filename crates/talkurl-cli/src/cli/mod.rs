//! CLI for composing conference session URLs.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use talkurl_core::config::{self, ComposerConfig};
use talkurl_core::Session;

use commands::{run_batch, run_compose, run_config, run_slug};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "talkurl")]
#[command(about = "talkurl: website URLs for conference sessions", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/talkurl/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the session URL template (one %s placeholder).
    #[arg(long, global = true)]
    pub template: Option<String>,

    /// Override the server backend type (e.g. PENTABARF, PRETALXDGWK).
    #[arg(long, global = true, value_name = "NAME")]
    pub backend: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Session fields given on the command line.
#[derive(Debug, Clone, clap::Args)]
pub struct SessionArgs {
    #[arg(long, default_value = "")]
    pub slug: String,
    #[arg(long, default_value = "")]
    pub session_id: String,
    #[arg(long, default_value = "")]
    pub title: String,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long = "room", default_value = "")]
    pub room_name: String,
    /// Direct URL shipped by the backend, if any.
    #[arg(long, default_value = "")]
    pub url: String,
}

impl From<&SessionArgs> for Session {
    fn from(args: &SessionArgs) -> Self {
        Session {
            slug: args.slug.clone(),
            session_id: args.session_id.clone(),
            title: args.title.clone(),
            description: args.description.clone(),
            room_name: args.room_name.clone(),
            url: args.url.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the website URL of one session (empty line if there is none).
    Compose {
        #[command(flatten)]
        session: SessionArgs,
    },

    /// Print the slug derived from a session title.
    Slug {
        /// Session title.
        title: String,
    },

    /// Compose URLs for a JSON array of sessions; prints "<session id>\t<url>" per line.
    Batch {
        /// Path to the JSON file.
        path: PathBuf,
    },

    /// Show the config file path and effective configuration.
    Config,
}

impl Cli {
    /// Loads configuration and applies command-line overrides.
    fn effective_config(&self) -> Result<ComposerConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        if let Some(template) = &self.template {
            cfg.session_url_template = template.clone();
        }
        if let Some(backend) = &self.backend {
            cfg.server_backend_type = backend.clone();
        }
        tracing::debug!("effective config: {:?}", cfg);
        Ok(cfg)
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let stdout = io::stdout();
        cli.run(&mut stdout.lock())
    }
}

impl Cli {
    /// Dispatches the parsed command, writing its output to `out`.
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        match &self.command {
            CliCommand::Compose { session } => {
                run_compose(&self.effective_config()?, &Session::from(session), out)?
            }
            CliCommand::Slug { title } => run_slug(title, out)?,
            CliCommand::Batch { path } => run_batch(&self.effective_config()?, path, out)?,
            CliCommand::Config => {
                run_config(&self.effective_config()?, self.config.as_deref(), out)?
            }
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
