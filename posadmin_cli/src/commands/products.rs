use anyhow::Result;
use clap::{Args, Subcommand};
use posadmin_lib::types::ProductInput;
use posadmin_lib::{Client, ListQuery};

use super::{search_notice, ListArgs};
use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub command: ProductsCommand,
}

#[derive(Subcommand)]
pub enum ProductsCommand {
    /// List products
    List(ListArgs),
    /// Create a product
    Add(ProductFields),
    /// Update a product
    Update {
        id: i64,
        #[command(flatten)]
        fields: ProductFields,
    },
    /// Delete a product
    Delete {
        id: i64,
        /// Page to show after deleting
        #[arg(long, default_value = "1")]
        page: i64,
    },
}

#[derive(Args)]
pub struct ProductFields {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub barcode: Option<String>,

    #[arg(long)]
    pub category_id: i64,

    #[arg(long)]
    pub purchase_price: f64,

    #[arg(long)]
    pub selling_price: f64,

    #[arg(long, default_value = "0")]
    pub stock: i64,

    /// Sales unit, e.g. pcs or kg
    #[arg(long, default_value = "pcs")]
    pub unit: String,
}

impl ProductFields {
    fn to_input(&self) -> ProductInput {
        ProductInput {
            name: self.name.clone(),
            barcode: self.barcode.clone(),
            category_id: self.category_id,
            purchase_price: self.purchase_price,
            selling_price: self.selling_price,
            stock: self.stock,
            unit: self.unit.clone(),
        }
    }
}

pub async fn run(args: &ProductsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        ProductsCommand::List(list) => {
            let page = client.list_products(&list.to_query()).await?;
            search_notice(list, &page);
            output::print_products(&page, format);
        }
        ProductsCommand::Add(fields) => {
            let created = client.create_product(&fields.to_input()).await?;
            eprintln!("created product #{} \"{}\"", created.data.id, created.data.name);
            relist(client, format, 1).await?;
        }
        ProductsCommand::Update { id, fields } => {
            let updated = client.update_product(*id, &fields.to_input()).await?;
            eprintln!("updated product #{}", updated.data.id);
            relist(client, format, 1).await?;
        }
        ProductsCommand::Delete { id, page } => {
            client.delete_product(*id).await?;
            eprintln!("deleted product #{id}");
            // Refetch so the visible list reflects the delete; the server may
            // clamp the page if this one is now past the end.
            relist(client, format, *page).await?;
        }
    }
    Ok(())
}

async fn relist(client: &Client, format: &OutputFormat, page: i64) -> Result<()> {
    let page = client
        .list_products(&ListQuery::default().with_page(page))
        .await?;
    output::print_products(&page, format);
    Ok(())
}
