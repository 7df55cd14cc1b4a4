//! CLI administration tool for code-list-api.
//!
//! Inspects the catalogue and the database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List code lists (optionally only geography ones)
//! cargo run --bin admin -- code-lists
//! cargo run --bin admin -- code-lists --type geography
//!
//! # List the editions of a code list
//! cargo run --bin admin -- editions sex
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Show catalogue size
//! cargo run --bin admin -- db info
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use code_list_api::domain::entities::CodeListFilter;
use code_list_api::domain::repositories::CodeListRepository;
use code_list_api::infrastructure::persistence::PgCodeListRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for inspecting the code-list catalogue.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// List code lists
    CodeLists {
        /// Filter: `geography` or `non-geography`
        #[arg(short = 't', long = "type")]
        code_list_type: Option<String>,
    },

    /// List the editions of a code list
    Editions {
        /// Code list identifier
        code_list_id: String,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show catalogue size
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::CodeLists { code_list_type } => list_code_lists(&pool, code_list_type).await?,
        Commands::Editions { code_list_id } => list_editions(&pool, &code_list_id).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn repository(pool: &PgPool) -> PgCodeListRepository {
    PgCodeListRepository::new(Arc::new(pool.clone()))
}

/// Prints code lists with their code counts.
async fn list_code_lists(pool: &PgPool, code_list_type: Option<String>) -> Result<()> {
    let filter = CodeListFilter::from_type(code_list_type.as_deref()).with_context(|| {
        format!(
            "Unknown code list type '{}', expected 'geography' or 'non-geography'",
            code_list_type.unwrap_or_default()
        )
    })?;

    println!("{}", "Code lists".bright_blue().bold());
    println!();

    let code_lists = repository(pool)
        .list_code_lists(filter)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list code lists: {}", e))?;

    if code_lists.is_empty() {
        println!("{}", "  No code lists found".yellow());
        return Ok(());
    }

    println!(
        "  {:<32} {:<40} {:<10} {:>8}",
        "ID".bright_white().bold(),
        "Label".bright_white().bold(),
        "Geography".bright_white().bold(),
        "Codes".bright_white().bold()
    );
    println!("  {}", "-".repeat(93).bright_black());

    for code_list in &code_lists {
        let geography = if code_list.is_geography {
            "yes".green()
        } else {
            "no".bright_black()
        };
        println!(
            "  {:<32} {:<40} {:<10} {:>8}",
            code_list.id.cyan(),
            code_list.label,
            geography,
            code_list.number_of_codes.unwrap_or(0)
        );
    }

    println!();
    println!(
        "  Total: {}",
        code_lists.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Prints the editions of one code list.
async fn list_editions(pool: &PgPool, code_list_id: &str) -> Result<()> {
    let repo = repository(pool);

    let code_list = repo
        .find_code_list(code_list_id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to look up code list: {}", e))?;

    let Some(code_list) = code_list else {
        println!("{} {}", "Code list not found:".red(), code_list_id.cyan());
        return Ok(());
    };

    println!(
        "{} {}",
        "Editions of".bright_blue().bold(),
        code_list.label.bright_white().bold()
    );
    println!();

    let editions = repo
        .list_editions(code_list_id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list editions: {}", e))?;

    if editions.is_empty() {
        println!("{}", "  No editions found".yellow());
        return Ok(());
    }

    for edition in &editions {
        println!(
            "  {:<20} {:<40} {}",
            edition.id.cyan(),
            edition.label,
            edition.release_date.bright_black()
        );
    }
    println!();

    Ok(())
}

/// Dispatches database operation commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => check_database(pool).await?,
        DbAction::Info => show_database_info(pool).await?,
    }

    Ok(())
}

/// Verifies the database answers queries.
async fn check_database(pool: &PgPool) -> Result<()> {
    print!("Checking database connection... ");

    match repository(pool).ping().await {
        Ok(()) => println!("{}", "OK".green().bold()),
        Err(e) => {
            println!("{}", "FAILED".red().bold());
            anyhow::bail!("Database check failed: {}", e);
        }
    }

    Ok(())
}

/// Prints row counts of the catalogue tables.
async fn show_database_info(pool: &PgPool) -> Result<()> {
    println!("{}", "Database info".bright_blue().bold());
    println!();

    let (code_lists, editions, codes, datasets): (i64, i64, i64, i64) = sqlx::query_as(
        r#"
        SELECT
            (SELECT COUNT(*) FROM code_lists),
            (SELECT COUNT(*) FROM editions),
            (SELECT COUNT(*) FROM codes),
            (SELECT COUNT(DISTINCT dataset_id) FROM code_datasets)
        "#,
    )
    .fetch_one(pool)
    .await
    .context("Failed to query catalogue size")?;

    println!("  Code lists: {}", code_lists.to_string().cyan());
    println!("  Editions:   {}", editions.to_string().cyan());
    println!("  Codes:      {}", codes.to_string().cyan());
    println!("  Datasets:   {}", datasets.to_string().cyan());
    println!();

    Ok(())
}
