//! apidocs CLI - publishes API collection documentation into a web project.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "apidocs")]
#[command(about = "Converts an API collection into embedded API documentation")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to apidocs.toml config file
    #[arg(short, long, default_value = "apidocs.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the collection and publish the page and README
    Build {
        /// Path to the API collection JSON file
        #[arg(long)]
        json: String,

        /// Project root receiving the published files. Defaults to config, or
        /// the parent of the working directory when run from the tools directory
        #[arg(long)]
        project_root: Option<PathBuf>,

        /// Renderer executable (defaults to config or "docgen")
        #[arg(long)]
        renderer: Option<String>,

        /// Kill the renderer after this many seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Append the style override without minifying it
        #[arg(long)]
        no_minify: bool,
    },

    /// Write a default apidocs.toml
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,
    },

    /// Validate API test fixtures
    Fixtures {
        /// Directory containing fixture files
        #[arg(default_value = "fixtures")]
        dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Build {
            json,
            project_root,
            renderer,
            timeout,
            no_minify,
        } => {
            let options = commands::build::BuildOptions {
                collection: json,
                project_root,
                renderer,
                timeout_secs: timeout,
                no_minify,
            };
            commands::build::run(&cli.config, options).await?;
        }
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Fixtures { dir } => {
            commands::fixtures::run(&dir)?;
        }
    }

    Ok(())
}
