// localctx - local prompt context manager
// Main entry point

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use localctx::cli::{render, Repl, Session};
use localctx::config::{apply_context_dir_override, load_config};
use localctx::context::{inspect, StoreState, TokioFs};
use localctx::logging;

#[derive(Parser)]
#[command(name = "localctx", version, about = "Manage the local prompt context store")]
struct Cli {
    /// Store root (overrides config.toml and LOCALCTX_CONTEXT_DIR)
    #[arg(long, global = true)]
    context_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive REPL (default)
    Repl,
    /// Clear the context file and delete downloaded images
    Clear {
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show store paths and current contents
    Status,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = load_config()?;
    if let Some(dir) = cli.context_dir {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        apply_context_dir_override(&mut config, Some(dir.to_string_lossy().into_owned()), &home);
        config.validate()?;
    }

    logging::init(cli.debug || config.features.debug_logging)?;

    let session = Session::new(Arc::new(TokioFs), &config);

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => {
            let mut repl = Repl::new(session);
            repl.run().await?;
        }
        Commands::Clear { json } => {
            let output = session.clearer().clear().await;
            if json {
                println!("{}", serde_json::to_string(&output)?);
            } else {
                render(&output);
            }
            if output.is_error() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Status => print_status(&session).await?,
    }

    Ok(ExitCode::SUCCESS)
}

async fn print_status(session: &Session) -> Result<()> {
    let paths = session.paths();
    println!("Context dir:  {}", paths.root.display());
    println!("Context file: {}", paths.context_file.display());
    println!("Images dir:   {}", paths.images_dir.display());

    match inspect(session.fs(), paths).await? {
        StoreState::RootMissing => println!("Store: missing"),
        StoreState::ImagesNotDirectory => println!("Store: images path is not a directory"),
        StoreState::Ready(snapshot) => {
            let file_state = match (snapshot.file_exists, snapshot.file_is_empty) {
                (false, _) => "missing",
                (true, true) => "empty",
                (true, false) => "has content",
            };
            let dir_state = if snapshot.dir_exists {
                format!("{} image(s)", snapshot.image_count())
            } else {
                "missing".to_string()
            };
            println!("Store: file {}, {}", file_state, dir_state);
        }
    }
    Ok(())
}
