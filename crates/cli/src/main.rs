//! Solecraft CLI - migrations, seeding and studio access.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! solecraft migrate
//!
//! # Seed the starter product catalogue
//! solecraft seed products
//!
//! # Ask the AI designer for a color scheme
//! solecraft suggest "sunset vibes with warm oranges"
//!
//! # List, filter and delete saved designs
//! solecraft designs list --query summer
//! solecraft designs delete 3f1c...
//!
//! # Render a preview of a saved design (or the default design)
//! solecraft render --design 3f1c... --out sneaker.svg
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `seed products` - Upsert the starter catalogue
//! - `products` - List the product catalogue
//! - `ideas` - Print quick-idea prompts
//! - `suggest` - Ask the AI designer
//! - `designs list|delete` - Manage saved designs
//! - `render` - Write an SVG preview

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use solecraft_core::DesignId;

mod commands;

#[derive(Parser)]
#[command(name = "solecraft")]
#[command(author, version, about = "Solecraft CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Seed the database
    Seed {
        #[command(subcommand)]
        target: SeedTarget,
    },
    /// List the product catalogue
    Products,
    /// Print ready-made prompts for the AI designer
    Ideas,
    /// Ask the AI designer for a color scheme
    Suggest {
        /// Description of the look you want
        prompt: String,
    },
    /// Manage saved designs (needs `SOLECRAFT_USER_ID`)
    Designs {
        #[command(subcommand)]
        action: DesignsAction,
    },
    /// Write an SVG preview
    Render {
        /// Saved design to render; the built-in default when omitted
        #[arg(short, long)]
        design: Option<DesignId>,

        /// Output file
        #[arg(short, long, default_value = "sneaker.svg")]
        out: PathBuf,
    },
}

#[derive(Subcommand)]
enum SeedTarget {
    /// Upsert the starter product catalogue
    Products,
}

#[derive(Subcommand)]
enum DesignsAction {
    /// List saved designs, newest first
    List {
        /// Only designs whose name or tags contain this text
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Delete a saved design
    Delete {
        /// Design id
        id: DesignId,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed { target } => match target {
            SeedTarget::Products => commands::seed::products().await?,
        },
        Commands::Products => commands::designs::products().await?,
        Commands::Ideas => commands::designs::ideas()?,
        Commands::Suggest { prompt } => commands::designs::suggest(&prompt).await?,
        Commands::Designs { action } => match action {
            DesignsAction::List { query } => commands::designs::list(query.as_deref()).await?,
            DesignsAction::Delete { id } => commands::designs::delete(id).await?,
        },
        Commands::Render { design, out } => commands::render::run(design, &out).await?,
    }
    Ok(())
}
