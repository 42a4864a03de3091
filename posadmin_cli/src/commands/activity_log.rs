use anyhow::Result;
use clap::Args;
use posadmin_lib::Client;

use super::{search_notice, ListArgs};
use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct ActivityLogArgs {
    #[command(flatten)]
    pub list: ListArgs,
}

pub async fn run(args: &ActivityLogArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let page = client.list_user_activity(&args.list.to_query()).await?;
    search_notice(&args.list, &page);
    output::print_user_activity(&page, format);
    Ok(())
}
