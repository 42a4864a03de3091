use anyhow::Result;
use clap::Args;
use posadmin_lib::Client;

use super::{search_notice, ListArgs};
use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct StockLogArgs {
    #[command(flatten)]
    pub list: ListArgs,
}

pub async fn run(args: &StockLogArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let page = client.list_stock_activity(&args.list.to_query()).await?;
    search_notice(&args.list, &page);
    output::print_stock_activity(&page, format);
    Ok(())
}
