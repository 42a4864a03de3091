//! Interactive incremental search: every typed line goes through the list
//! controller, so debounce, page-reset, and stale-response handling behave
//! exactly as on any other screen.

use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Args;
use posadmin_lib::source::sources;
use posadmin_lib::types::Page;
use posadmin_lib::{Client, ListController, ListNotice, PageSource};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::output;

#[derive(Args)]
pub struct BrowseArgs {
    /// One of: products, categories, admins, employees, transactions,
    /// receivables, stock-log, activity-log
    pub resource: String,
}

pub async fn run(args: &BrowseArgs, client: Arc<Client>) -> Result<()> {
    match args.resource.as_str() {
        "products" => browse(sources::products(client), output::print_products_table).await,
        "categories" => browse(sources::categories(client), output::print_categories_table).await,
        "admins" => browse(sources::admins(client), output::print_admins_table).await,
        "employees" => browse(sources::employees(client), output::print_employees_table).await,
        "transactions" => {
            browse(
                sources::transactions(client),
                output::print_transactions_table,
            )
            .await
        }
        "receivables" => {
            browse(sources::receivables(client), output::print_receivables_table).await
        }
        "stock-log" => {
            browse(
                sources::stock_activity(client),
                output::print_stock_activity_table,
            )
            .await
        }
        "activity-log" => {
            browse(
                sources::user_activity(client),
                output::print_user_activity_table,
            )
            .await
        }
        other => bail!("unknown resource: {other}"),
    }
}

async fn browse<S>(source: S, print: fn(&Page<S::Item>)) -> Result<()>
where
    S: PageSource,
{
    let (handle, mut snaps) = ListController::spawn(source);
    handle.refetch();

    eprintln!("type to search; :n next page, :p previous page, :r reload, :q quit");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            changed = snaps.changed() => {
                if changed.is_err() {
                    break;
                }
                let snap = snaps.borrow_and_update().clone();
                if snap.loading {
                    continue;
                }
                if let Some(error) = &snap.error {
                    eprintln!("error: {error}");
                    continue;
                }
                match snap.notice {
                    Some(ListNotice::ResultsFound(n)) => eprintln!("{n} results found"),
                    Some(ListNotice::NoResults) => eprintln!("no results"),
                    None => {}
                }
                print(&snap.result);
                output::paging_footer(&snap.result);
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match line.trim() {
                    ":q" => break,
                    ":r" => handle.refetch(),
                    ":n" => {
                        let snap = snaps.borrow().clone();
                        // Out-of-range transitions are disabled here, not
                        // clamped by the controller.
                        if snap.page < snap.result.last_page {
                            handle.set_page(snap.page + 1);
                        }
                    }
                    ":p" => {
                        let snap = snaps.borrow().clone();
                        if snap.page > 1 {
                            handle.set_page(snap.page - 1);
                        }
                    }
                    text => handle.set_search_text(text),
                }
            }
        }
    }
    Ok(())
}
