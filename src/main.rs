use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use layoutkit::{init_logging_with, Axis, Config, DesignerState, Document, LogFormat};

#[derive(Debug, Parser)]
#[command(name = "layoutkit", version, about = "Shape layout tools for vector documents")]
struct Cli {
    /// Emit logs as JSON lines instead of pretty text
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Distribute shapes evenly along an axis and print the undoable command
    Distribute {
        /// Document JSON file
        document: PathBuf,

        /// Axis to distribute along (horizontal/h/x or vertical/v/y)
        #[arg(long, short)]
        axis: Axis,

        /// Comma separated shape ids; defaults to the current page selection
        #[arg(long, value_delimiter = ',')]
        ids: Option<Vec<String>>,

        /// Config file (.toml or .json); defaults to the user config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Save the distributed document back to DOCUMENT
        #[arg(long)]
        write: bool,
    },
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::load_from_file(&path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => match Config::default_path() {
            Some(path) => Config::load_or_default(&path)?,
            None => Config::default(),
        },
    };
    debug!(?config, "Using config");
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging_with(if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    })?;

    match cli.command {
        Commands::Distribute {
            document,
            axis,
            ids,
            config,
            write,
        } => {
            let config = load_config(config)?;
            let doc = Document::load_from_file(&document)
                .with_context(|| format!("loading document {}", document.display()))?;

            let mut state = DesignerState::with_document(doc, &config);
            let cmd = match ids {
                Some(ids) => state.distribute(&ids, axis)?,
                None => state.distribute_selected(axis)?,
            };
            println!("{}", serde_json::to_string_pretty(&cmd)?);

            if write && state.is_modified {
                state.document.save_to_file(&document)?;
            } else if write {
                info!("Nothing moved, document left as is");
            }
        }
    }

    Ok(())
}
