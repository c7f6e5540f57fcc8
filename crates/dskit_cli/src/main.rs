//! dskit command line
//!
//! ```bash
//! dskit init --name acme
//! dskit generate
//! dskit inspect dist/acme@0.1.0.zip --kind color --mode dark
//! dskit draft set round.m 14px --platform web
//! dskit export --save
//! ```

mod commands;
mod config;
mod project;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dskit::tokens::{Platform, VariationKind};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::commands::Workspace;

#[derive(Parser)]
#[command(name = "dskit")]
#[command(version)]
#[command(about = "Generate, inspect and export multi-platform design-token themes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Project directory holding dskit.toml
    #[arg(long, short = 'C', global = true, default_value = ".")]
    dir: PathBuf,

    /// Log debug output
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create dskit.toml in the project directory
    Init {
        /// Design system name (defaults to the directory name)
        #[arg(long)]
        name: Option<String>,
    },

    /// Write the default theme of the configured palette as an archive
    Generate {
        /// Archive path (defaults to `{output}/{name}@{version}.zip`)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the grouped tokens of an archive
    Inspect {
        archive: PathBuf,

        /// Variation to list: color, gradient, shadow, shape, spacing, typography, fontFamily
        #[arg(short, long)]
        kind: Option<VariationKind>,

        /// Mode to group by (defaults to the first mode of the variation)
        #[arg(short, long)]
        mode: Option<String>,
    },

    /// Load the stored design system, apply drafts and write an archive
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also store the result and drop the applied drafts
        #[arg(long)]
        save: bool,
    },

    /// Manage pending token edits
    #[command(subcommand)]
    Draft(DraftCommand),
}

#[derive(Subcommand)]
enum DraftCommand {
    /// Set one platform value of a token
    Set {
        token: String,
        /// JSON payload; bare words are taken as strings
        value: String,
        #[arg(short, long)]
        platform: Platform,
        #[arg(short, long)]
        kind: Option<VariationKind>,
    },

    /// Enable or disable a token
    Toggle {
        token: String,
        #[arg(short, long)]
        kind: Option<VariationKind>,
    },

    /// Forget the draft of a token
    Remove {
        token: String,
        #[arg(short, long)]
        kind: Option<VariationKind>,
    },

    /// List pending drafts
    List,

    /// Forget every pending draft
    Discard,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Init { name } => {
            let name = match name {
                Some(name) => name,
                None => cli
                    .dir
                    .canonicalize()
                    .ok()
                    .and_then(|path| path.file_name().map(|n| n.to_string_lossy().into_owned()))
                    .context("Cannot infer a design system name, pass --name")?,
            };
            project::create_project(&cli.dir, &name)?;
            println!("Created dskit.toml for {name}");
        }
        Commands::Generate { output } => {
            commands::generate(&Workspace::open(&cli.dir)?, output)?;
        }
        Commands::Inspect {
            archive,
            kind,
            mode,
        } => {
            print!("{}", commands::inspect(&archive, kind, mode)?);
        }
        Commands::Export { output, save } => {
            commands::export(&Workspace::open(&cli.dir)?, output, save)?;
        }
        Commands::Draft(command) => {
            let workspace = Workspace::open(&cli.dir)?;
            match command {
                DraftCommand::Set {
                    token,
                    value,
                    platform,
                    kind,
                } => commands::draft_set(&workspace, &token, kind, platform, &value)?,
                DraftCommand::Toggle { token, kind } => {
                    commands::draft_toggle(&workspace, &token, kind)?
                }
                DraftCommand::Remove { token, kind } => {
                    commands::draft_remove(&workspace, &token, kind)?
                }
                DraftCommand::List => print!("{}", commands::draft_list(&workspace)?),
                DraftCommand::Discard => commands::draft_discard(&workspace)?,
            }
        }
    }

    Ok(())
}
