//! CLI entry point for clubsite

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clubsite::commands::fetch::FetchTarget;
use clubsite::content::DocumentRoute;

#[derive(Parser)]
#[command(name = "clubsite")]
#[command(version)]
#[command(about = "Build, inspect and preview the 711Club content index", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the content index
    #[command(alias = "g")]
    Build {
        /// Watch for content changes
        #[arg(short, long)]
        watch: bool,
    },

    /// List indexed posts
    List {
        /// Filter label (a category, or the notice/all labels)
        #[arg(short = 'C', long)]
        category: Option<String>,

        /// Print listing cards as HTML
        #[arg(long)]
        html: bool,
    },

    /// Show the most recent announcements
    Latest {
        /// Number of announcements
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Create a new post
    New {
        /// Category directory
        category: String,

        /// Title of the new post
        title: String,
    },

    /// Remove the generated index
    Clean,

    /// Start a local preview server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,

        /// Disable index rebuilds and live reload
        #[arg(long)]
        r#static: bool,
    },

    /// Fetch content from a running site
    Fetch {
        /// Site URL (defaults to the configured url)
        #[arg(short, long, global = true)]
        url: Option<String>,

        #[command(subcommand)]
        target: FetchCommand,
    },
}

#[derive(Subcommand)]
enum FetchCommand {
    /// Fetch and list the content index
    Index {
        /// Filter label
        #[arg(short = 'C', long)]
        category: Option<String>,

        /// Print listing cards as HTML
        #[arg(long)]
        html: bool,
    },

    /// Fetch one document
    Doc {
        /// Content type, e.g. experiences
        kind: String,

        /// File name, e.g. summer-camp.md
        filename: String,

        /// Category directory for experience posts
        #[arg(short = 'C', long)]
        category: Option<String>,

        /// Print rendered HTML instead of text
        #[arg(long)]
        html: bool,
    },

    /// Fetch the member list
    Members {
        /// Print rendered HTML instead of text
        #[arg(long)]
        html: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "clubsite=debug,info"
    } else {
        "clubsite=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let site = clubsite::Site::new(&base_dir)?;

    match cli.command {
        Commands::Build { watch } => {
            let index = site.build()?;
            clubsite::commands::build::print_summary(&site, &index);

            if watch {
                clubsite::commands::build::watch(&site).await?;
            }
        }

        Commands::List { category, html } => {
            clubsite::commands::list::run(&site, category.as_deref(), html)?;
        }

        Commands::Latest { limit } => {
            clubsite::commands::list::latest(&site, limit)?;
        }

        Commands::New { category, title } => {
            let path = site.new_post(&category, &title)?;
            println!("Created: {}", path.display());
        }

        Commands::Clean => {
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Serve {
            port,
            ip,
            open,
            r#static,
        } => {
            tracing::info!("Building content index...");
            site.build()?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            clubsite::server::start(&site, &ip, port, !r#static, open).await?;
        }

        Commands::Fetch { url, target } => {
            let target = match target {
                FetchCommand::Index { category, html } => FetchTarget::Index {
                    label: category,
                    html,
                },
                FetchCommand::Doc {
                    kind,
                    filename,
                    category,
                    html,
                } => FetchTarget::Document {
                    route: DocumentRoute::new(&kind, category.as_deref(), &filename),
                    html,
                },
                FetchCommand::Members { html } => FetchTarget::Members { html },
            };
            clubsite::commands::fetch::run(&site, url.as_deref(), target).await?;
        }
    }

    Ok(())
}
