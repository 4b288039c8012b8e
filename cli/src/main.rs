mod edit;
mod recipes;
mod settings;

use anyhow::Result;
use clap::{Parser, Subcommand};
use skillet_core::HttpApi;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "skillet")]
#[command(about = "Skillet recipe client", long_about = None)]
struct Cli {
    /// Server URL
    #[arg(
        long,
        global = true,
        env = "SKILLET_SERVER",
        default_value = "http://localhost:8080"
    )]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List recipes, optionally narrowed by search text and category
    List {
        /// Case-insensitive substring to match against recipe names
        #[arg(long)]
        search: Option<String>,
        /// Category name to filter by
        #[arg(long)]
        category: Option<String>,
    },
    /// List recipe categories
    Categories,
    /// Show a recipe with its ingredients
    Show { id: i64 },
    /// Toggle a recipe's favorite flag
    Favorite { id: i64 },
    /// List favorited recipes
    Likes,
    /// Create a recipe
    Add(edit::AddArgs),
    /// Edit an existing recipe
    Edit(edit::EditArgs),
    /// Delete a recipe
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Show or toggle the color theme
    Theme {
        /// Switch between light and dark
        #[arg(long)]
        toggle: bool,
    },
    /// Show or update the local profile
    Profile(settings::ProfileArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let api = HttpApi::new(&cli.server)?;

    match cli.command {
        Commands::List { search, category } => recipes::list(&api, search, category).await,
        Commands::Categories => recipes::categories(&api).await,
        Commands::Show { id } => recipes::show(&api, id).await,
        Commands::Favorite { id } => recipes::favorite(&api, id).await,
        Commands::Likes => recipes::likes(&api).await,
        Commands::Add(args) => edit::add(&api, args).await,
        Commands::Edit(args) => edit::edit(&api, args).await,
        Commands::Delete { id, yes } => edit::delete(&api, id, yes).await,
        Commands::Theme { toggle } => settings::theme(toggle),
        Commands::Profile(args) => settings::profile(args),
    }
}
