//! storefront - Eyewear storefront navigation server and tools

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use storefront_core::config::NAV_API_BASE_URL_ENV;
use tracing_subscriber::EnvFilter;

use crate::cli::NavSource;

#[derive(Parser)]
#[command(
    name = "storefront",
    version,
    about = "Eyewear storefront navigation server and tools",
    long_about = "Serves the navigation tree the storefront header fetches, and lets you\n\
                  search it, print it, and check how paths route from the terminal.\n\
                  \n\
                  Examples:\n\
                    storefront serve                         # Serve data/navbar.json on :3001\n\
                    storefront serve --dist crates/storefront-web/dist\n\
                    storefront search rou                    # Search the live /navbar tree\n\
                    storefront search blue --nav-file data/navbar.json --json\n\
                    storefront menu                          # Print categories and items\n\
                    storefront route /Contact-us             # Which page a path renders\n\
                  \n\
                  Environment Variables:\n\
                    STOREFRONT_NAV_API_BASE_URL              # Navigation API base URL\n\
                    RUST_LOG                                 # Log filter (default: info)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to a TOML config file (default: <config_dir>/storefront/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Navigation API base URL (overrides the config file)
    #[arg(long, global = true, env = NAV_API_BASE_URL_ENV)]
    nav_api_base_url: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the navigation endpoint (and the built frontend, if given)
    Serve {
        /// Port for the server
        #[arg(long, default_value = "3001")]
        port: u16,
        /// JSON file holding the navigation tree
        #[arg(long, default_value = "data/navbar.json")]
        nav_file: PathBuf,
        /// Built frontend directory (trunk build output)
        #[arg(long)]
        dist: Option<PathBuf>,
    },
    /// Search navigation items by title
    Search {
        /// Query (case-insensitive substring of the item title)
        query: String,
        /// Read the tree from a file instead of the navigation API
        #[arg(long)]
        nav_file: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the navigation tree
    Menu {
        /// Read the tree from a file instead of the navigation API
        #[arg(long)]
        nav_file: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show which page a URL path resolves to
    Route {
        /// URL path, e.g. /feature
        path: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Only the commands that talk to the navigation API need a valid config
    match cli.command {
        Command::Serve {
            port,
            nav_file,
            dist,
        } => {
            let tree = cli::read_nav_file(&nav_file)?;
            storefront_web::run(tree, dist, port).await?;
        }
        Command::Search {
            query,
            nav_file,
            json,
        } => {
            let config = cli::resolve_config(cli.config.as_deref(), cli.nav_api_base_url)?;
            let tree = cli::load_nav_tree(NavSource::from_file(nav_file), &config).await?;
            cli::run_search(&tree, &query, json)?;
        }
        Command::Menu { nav_file, json } => {
            let config = cli::resolve_config(cli.config.as_deref(), cli.nav_api_base_url)?;
            let tree = cli::load_nav_tree(NavSource::from_file(nav_file), &config).await?;
            cli::run_menu(&tree, json)?;
        }
        Command::Route { path } => {
            cli::run_route(&path);
        }
    }

    Ok(())
}
