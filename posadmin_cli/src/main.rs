mod commands;
mod output;

use std::sync::Arc;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use posadmin_lib::{Client, Session};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "posadmin")]
#[command(about = "Admin console for the point-of-sale and inventory backend")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage products
    Products(commands::products::ProductsArgs),
    /// Manage product categories
    Categories(commands::categories::CategoriesArgs),
    /// Manage administrator accounts
    Admins(commands::admins::AdminsArgs),
    /// Manage employees
    Employees(commands::employees::EmployeesArgs),
    /// Browse transaction history
    Transactions(commands::transactions::TransactionsArgs),
    /// List outstanding receivables
    Receivables(commands::receivables::ReceivablesArgs),
    /// Stock movement log
    StockLog(commands::stock_log::StockLogArgs),
    /// User activity log
    ActivityLog(commands::activity_log::ActivityLogArgs),
    /// Interactive incremental search over a resource
    Browse(commands::browse::BrowseArgs),
    /// Log in and print the session token
    Login(commands::login::LoginArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("posadmin=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    // Login is the one command that works without a session.
    if let Commands::Login(args) = &cli.command {
        return commands::login::run(args).await;
    }

    let client = Arc::new(connect()?);

    match &cli.command {
        Commands::Products(args) => commands::products::run(args, &client, &format).await?,
        Commands::Categories(args) => commands::categories::run(args, &client, &format).await?,
        Commands::Admins(args) => commands::admins::run(args, &client, &format).await?,
        Commands::Employees(args) => commands::employees::run(args, &client, &format).await?,
        Commands::Transactions(args) => commands::transactions::run(args, &client, &format).await?,
        Commands::Receivables(args) => commands::receivables::run(args, &client, &format).await?,
        Commands::StockLog(args) => commands::stock_log::run(args, &client, &format).await?,
        Commands::ActivityLog(args) => commands::activity_log::run(args, &client, &format).await?,
        Commands::Browse(args) => commands::browse::run(args, Arc::clone(&client)).await?,
        Commands::Login(_) => unreachable!(),
    }

    Ok(())
}

/// Builds the API client from the environment. The session is injected here
/// once; nothing below this reads ambient state.
fn connect() -> Result<Client> {
    let base_url = match std::env::var("POSADMIN_URL") {
        Ok(url) => url,
        Err(_) => bail!("POSADMIN_URL is not set"),
    };
    let token = match std::env::var("POSADMIN_TOKEN") {
        Ok(token) => token,
        Err(_) => bail!("POSADMIN_TOKEN is not set; run `posadmin login` first"),
    };
    Ok(Client::new(&base_url, Session::new(token))?)
}
