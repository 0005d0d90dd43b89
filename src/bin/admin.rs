//! CLI administration tool for petclinic-graph.
//!
//! Reads clinic records straight from the database through the same load
//! pipeline the HTTP API uses.
//!
//! # Usage
//!
//! ```bash
//! # Print one owner with pets and visits (prompts for the id if omitted)
//! cargo run --bin admin -- owner 6
//!
//! # List owners by last name prefix
//! cargo run --bin admin -- owners --last-name Dav
//!
//! # List pet types
//! cargo run --bin admin -- pet-types
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use petclinic_graph::application::services::ClinicService;
use petclinic_graph::domain::entities::Owner;
use petclinic_graph::infrastructure::persistence::PgClinicStore;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for inspecting clinic records.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Show one owner with pets and visits
    Owner {
        /// Owner id (prompted for if omitted)
        id: Option<i32>,
    },

    /// List owners with pets and visits
    Owners {
        /// Last name prefix (all owners if omitted)
        #[arg(short, long)]
        last_name: Option<String>,
    },

    /// List pet types
    PetTypes,

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
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let service = ClinicService::new(Arc::new(PgClinicStore::new(Arc::new(pool))));

    match cli.command {
        Commands::Owner { id } => show_owner(&service, id).await?,
        Commands::Owners { last_name } => list_owners(&service, last_name).await?,
        Commands::PetTypes => list_pet_types(&service).await?,
        Commands::Db { action } => handle_db_action(action, &service).await?,
    }

    Ok(())
}

/// Prints one owner aggregate, prompting for the id when none was given.
async fn show_owner(service: &ClinicService<PgClinicStore>, id: Option<i32>) -> Result<()> {
    let id = match id {
        Some(id) => id,
        None => Input::new().with_prompt("Owner id").interact_text()?,
    };

    let owner = service
        .load_owner(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load owner: {}", e))?;

    match owner {
        Some(owner) => print_owner(&owner),
        None => println!("{}", format!("  Owner {} not found", id).yellow()),
    }

    Ok(())
}

/// Lists owner aggregates matching a last name prefix.
async fn list_owners(
    service: &ClinicService<PgClinicStore>,
    last_name: Option<String>,
) -> Result<()> {
    println!("{}", "Owners".bright_blue().bold());
    println!();

    let owners = service
        .load_owners(last_name.as_deref())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load owners: {}", e))?;

    if owners.is_empty() {
        println!("{}", "  No owners found".yellow());
        return Ok(());
    }

    for owner in &owners {
        print_owner(owner);
    }

    println!(
        "  Total: {}",
        owners.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Prints an owner as a tree of pets and visits.
///
/// ```text
/// #6 Jean Coleman (Monona)
///   #7 Samantha [cat] born 2012-09-04
///     2013-01-04  #4 spayed
///     2013-01-01  #1 rabies shot
/// ```
fn print_owner(owner: &Owner) {
    println!(
        "{} {} {} ({})",
        format!("#{}", owner.id).bright_black(),
        owner.first_name.cyan(),
        owner.last_name.cyan().bold(),
        owner.city
    );

    for pet in owner.pets() {
        println!(
            "  {} {} [{}] born {}",
            format!("#{}", pet.id).bright_black(),
            pet.name.green(),
            pet.pet_type.name,
            pet.birth_date
        );

        for visit in pet.visits() {
            println!(
                "    {}  {} {}",
                visit.date.to_string().bright_white(),
                format!("#{}", visit.id).bright_black(),
                visit.description
            );
        }
    }

    println!();
}

/// Lists pet types.
async fn list_pet_types(service: &ClinicService<PgClinicStore>) -> Result<()> {
    println!("{}", "Pet types".bright_blue().bold());
    println!();

    let types = service
        .list_pet_types()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list pet types: {}", e))?;

    println!(
        "  {:<5} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold()
    );
    println!("  {}", "─".repeat(30).bright_black());

    for t in &types {
        println!("  {:<5} {}", t.id.to_string().bright_black(), t.name.cyan());
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, service: &ClinicService<PgClinicStore>) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            service
                .ping()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;

            println!("{}", "Database connection OK".green().bold());
        }
    }

    Ok(())
}
