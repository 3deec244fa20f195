//! CLI administration tool for linktrack.
//!
//! Registers users and inspects their links and dashboards straight from the
//! database, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Register a user (prompts for missing fields)
//! cargo run --bin admin -- user register --email ada@example.com --name Ada
//!
//! # List the short URLs of a user
//! cargo run --bin admin -- user links ada@example.com
//!
//! # Show the dashboard of a user
//! cargo run --bin admin -- dashboard ada@example.com
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database settings as the server (`DATABASE_URL` or `DB_*`, pool and
//! timeout variables); see `linktrack::config`.

use linktrack::AppState;
use linktrack::api::dto::user::RegisterUserRequest;
use linktrack::config::{self, Config};
use linktrack::domain::repositories::StoreHealth;
use linktrack::infrastructure::persistence::StoreClient;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use validator::Validate;

/// CLI tool for managing linktrack.
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
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show the link activity summary of a user
    Dashboard {
        /// Email of the user
        email: String,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Register a new user
    Register {
        /// Email address (prompted if omitted)
        #[arg(short, long)]
        email: Option<String>,

        /// Display name (prompted if omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List the short URLs owned by a user
    Links {
        /// Email of the owner
        email: String,
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

    let config = config::load_from_env()?;
    let client = connect(&config).await?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, client).await?,
        Commands::Dashboard { email } => show_dashboard(client, &email).await?,
        Commands::Db { action } => handle_db_action(action, client).await?,
    }

    Ok(())
}

async fn connect(config: &Config) -> Result<StoreClient> {
    StoreClient::connect(&config.database_url, &config.store_options())
        .await
        .context("Failed to connect to database")
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, client: StoreClient) -> Result<()> {
    let state = AppState::postgres(client);

    match action {
        UserAction::Register { email, name, yes } => {
            register_user(&state, email, name, yes).await?;
        }
        UserAction::Links { email } => {
            list_links(&state, &email).await?;
        }
    }

    Ok(())
}

/// Registers a user with interactive prompts for missing fields.
async fn register_user(
    state: &AppState,
    email: Option<String>,
    name: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Register User".bright_blue().bold());
    println!();

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Name").interact_text()?,
    };

    let request = checked_registration(email, name)?;

    println!("  Email: {}", request.email.cyan());
    println!("  Name:  {}", request.name.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Register this user?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let user = state
        .user_service
        .register(&request.email, &request.name)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to register user: {}", e))?;

    println!();
    println!(
        "{} (id {})",
        "✅ User registered".green().bold(),
        user.id.to_string().bright_white()
    );
    println!();

    Ok(())
}

/// Applies the `POST /api/users` body rules to prompted values.
fn checked_registration(email: String, name: String) -> Result<RegisterUserRequest> {
    let request = RegisterUserRequest {
        email: email.trim().to_string(),
        name: name.trim().to_string(),
    };
    request.validate().context("Invalid user details")?;

    Ok(request)
}

/// Lists the short URLs of a user.
///
/// # Output Format
///
/// ```text
/// 🔗 Links of ada@example.com
///
///   Code          Clicks  Created           Long URL
///   ────────────────────────────────────────────────────────────────
///   Xb3kq9Lm0aZt  12      2025-03-01 10:30  https://example.com/page
/// ```
async fn list_links(state: &AppState, email: &str) -> Result<()> {
    println!(
        "{} {}",
        "🔗 Links of".bright_blue().bold(),
        email.bright_blue().bold()
    );
    println!();

    let urls = state
        .url_service
        .list_by_owner_email(email)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if urls.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<13} {:<7} {:<17} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "Long URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for url in &urls {
        println!(
            "  {:<13} {:<7} {:<17} {}",
            url.code.cyan(),
            url.click_count.to_string().bright_green(),
            url.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            url.long_url
        );
    }

    println!();
    println!("  Total: {}", urls.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Displays the dashboard summary of a user.
async fn show_dashboard(client: StoreClient, email: &str) -> Result<()> {
    let state = AppState::postgres(client);

    println!("{}", "📊 Dashboard".bright_blue().bold());
    println!();

    let summary = state
        .dashboard_service
        .dashboard(email)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to build dashboard: {}", e))?;

    println!(
        "  Links:        {}",
        summary.total_links.to_string().bright_green().bold()
    );
    println!(
        "  Clicks:       {}",
        summary.total_clicks.to_string().bright_green().bold()
    );

    if summary.most_clicked_link.is_empty() {
        println!("  Most clicked: {}", "-".bright_black());
    } else {
        println!(
            "  Most clicked: {} ({} clicks) → {}",
            summary.most_clicked_link.code.cyan(),
            summary.most_clicked_link.click_count,
            summary.most_clicked_link.long_url
        );
    }
    println!();

    for link in &summary.links {
        let last_click = link
            .clicks
            .last()
            .map(|c| c.clicked_at.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "never".to_string());

        println!(
            "  {:<13} {:>5} events, last {}",
            link.url.code.cyan(),
            link.clicks.len(),
            last_click.bright_black()
        );
    }

    if !summary.links.is_empty() {
        println!();
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, client: StoreClient) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            client
                .ping()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(client.pool())
                .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  PostgreSQL: {}", version.bright_white());
        }
    }

    Ok(())
}
