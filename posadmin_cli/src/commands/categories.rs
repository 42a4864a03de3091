use anyhow::Result;
use clap::{Args, Subcommand};
use posadmin_lib::types::CategoryInput;
use posadmin_lib::{Client, ListQuery};

use super::{search_notice, ListArgs};
use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct CategoriesArgs {
    #[command(subcommand)]
    pub command: CategoriesCommand,
}

#[derive(Subcommand)]
pub enum CategoriesCommand {
    /// List categories
    List(ListArgs),
    /// Create a category
    Add(CategoryFields),
    /// Update a category
    Update {
        id: i64,
        #[command(flatten)]
        fields: CategoryFields,
    },
    /// Delete a category
    Delete { id: i64 },
}

#[derive(Args)]
pub struct CategoryFields {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub description: Option<String>,
}

impl CategoryFields {
    fn to_input(&self) -> CategoryInput {
        CategoryInput {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

pub async fn run(args: &CategoriesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        CategoriesCommand::List(list) => {
            let page = client.list_categories(&list.to_query()).await?;
            search_notice(list, &page);
            output::print_categories(&page, format);
        }
        CategoriesCommand::Add(fields) => {
            let created = client.create_category(&fields.to_input()).await?;
            eprintln!("created category #{} \"{}\"", created.data.id, created.data.name);
            relist(client, format).await?;
        }
        CategoriesCommand::Update { id, fields } => {
            let updated = client.update_category(*id, &fields.to_input()).await?;
            eprintln!("updated category #{}", updated.data.id);
            relist(client, format).await?;
        }
        CategoriesCommand::Delete { id } => {
            client.delete_category(*id).await?;
            eprintln!("deleted category #{id}");
            relist(client, format).await?;
        }
    }
    Ok(())
}

async fn relist(client: &Client, format: &OutputFormat) -> Result<()> {
    let page = client.list_categories(&ListQuery::default()).await?;
    output::print_categories(&page, format);
    Ok(())
}
