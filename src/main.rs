//! CLI entry point for inkpress

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "inkpress")]
#[command(version)]
#[command(about = "Build a static blog from dated markdown entries", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Include entries from the drafts folder
    #[arg(long, global = true)]
    drafts: bool,

    /// Defaults to `build`
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the site into the output folder
    #[command(aliases = ["generate", "g"])]
    Build,

    /// Remove the output folder
    Clean,

    /// List entries, newest first
    List,

    /// Create a new entry dated today (in the drafts folder with --drafts)
    New {
        /// Title of the new entry
        title: String,
    },

    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to the base directory)
        folder: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "inkpress=debug,info"
    } else {
        "inkpress=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command.unwrap_or(Commands::Build) {
        Commands::Build => {
            let site = inkpress::Site::new(&base_dir)?;
            tracing::info!("Building site from {:?}", site.base_dir);
            site.build(cli.drafts)?;
            println!("Built successfully into {:?}", site.output_dir);
        }

        Commands::Clean => {
            let site = inkpress::Site::new(&base_dir)?;
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List => {
            let site = inkpress::Site::new(&base_dir)?;
            inkpress::commands::list::run(&site, cli.drafts)?;
        }

        Commands::New { title } => {
            let site = inkpress::Site::new(&base_dir)?;
            let path = site.new_entry(&title, cli.drafts)?;
            println!("Created: {:?}", path);
        }

        Commands::Init { folder } => {
            let target_dir = match folder {
                Some(folder) if folder.is_absolute() => folder,
                Some(folder) => base_dir.join(folder),
                None => base_dir,
            };
            inkpress::commands::init::init_site(&target_dir)?;
            println!("Initialized empty site in {:?}", target_dir);
        }
    }

    Ok(())
}
