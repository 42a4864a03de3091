use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use posadmin_lib::{Client, ListQuery};

use super::{search_notice, ListArgs};
use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct TransactionsArgs {
    #[command(subcommand)]
    pub command: TransactionsCommand,
}

#[derive(Subcommand)]
pub enum TransactionsCommand {
    /// List transactions
    List(ListArgs),
    /// Export all matching transactions as CSV
    Export {
        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,

        /// Search text
        #[arg(long)]
        search: Option<String>,
    },
}

pub async fn run(args: &TransactionsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        TransactionsCommand::List(list) => {
            let page = client.list_transactions(&list.to_query()).await?;
            search_notice(list, &page);
            output::print_transactions(&page, format);
        }
        TransactionsCommand::Export { out, search } => {
            let transactions = fetch_all(client, search.as_deref()).await?;
            match out {
                Some(path) => {
                    let file = std::fs::File::create(path)?;
                    output::write_transactions_csv(file, &transactions)?;
                    eprintln!("wrote {} transactions to {}", transactions.len(), path.display());
                }
                None => output::write_transactions_csv(std::io::stdout(), &transactions)?,
            }
        }
    }
    Ok(())
}

/// Walks every page of the result set. The server's `last_page` is re-read
/// each round in case the set shrinks mid-export.
async fn fetch_all(
    client: &Client,
    search: Option<&str>,
) -> Result<Vec<posadmin_lib::types::Transaction>> {
    let mut all = Vec::new();
    let mut page_no = 1;
    loop {
        let mut query = ListQuery::default().with_page(page_no);
        if let Some(search) = search {
            query = query.with_search(search);
        }
        let page = client.list_transactions(&query).await?;
        let last_page = page.last_page;
        all.extend(page.data);
        if page_no >= last_page {
            break;
        }
        page_no += 1;
    }
    Ok(all)
}
