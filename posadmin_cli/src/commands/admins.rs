use anyhow::Result;
use clap::{Args, Subcommand};
use posadmin_lib::types::AdminInput;
use posadmin_lib::{Client, ListQuery};

use super::{search_notice, ListArgs};
use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct AdminsArgs {
    #[command(subcommand)]
    pub command: AdminsCommand,
}

#[derive(Subcommand)]
pub enum AdminsCommand {
    /// List administrator accounts
    List(ListArgs),
    /// Create an administrator
    Add(AdminFields),
    /// Update an administrator
    Update {
        id: i64,
        #[command(flatten)]
        fields: AdminFields,
    },
    /// Delete an administrator
    Delete { id: i64 },
}

#[derive(Args)]
pub struct AdminFields {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    /// Role label, e.g. owner or admin
    #[arg(long, default_value = "admin")]
    pub role: String,

    /// Only sent when set; updates keep the old password otherwise
    #[arg(long)]
    pub password: Option<String>,
}

impl AdminFields {
    fn to_input(&self) -> AdminInput {
        AdminInput {
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
            password: self.password.clone(),
        }
    }
}

pub async fn run(args: &AdminsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        AdminsCommand::List(list) => {
            let page = client.list_admins(&list.to_query()).await?;
            search_notice(list, &page);
            output::print_admins(&page, format);
        }
        AdminsCommand::Add(fields) => {
            let created = client.create_admin(&fields.to_input()).await?;
            eprintln!("created admin #{} \"{}\"", created.data.id, created.data.name);
            relist(client, format).await?;
        }
        AdminsCommand::Update { id, fields } => {
            let updated = client.update_admin(*id, &fields.to_input()).await?;
            eprintln!("updated admin #{}", updated.data.id);
            relist(client, format).await?;
        }
        AdminsCommand::Delete { id } => {
            client.delete_admin(*id).await?;
            eprintln!("deleted admin #{id}");
            relist(client, format).await?;
        }
    }
    Ok(())
}

async fn relist(client: &Client, format: &OutputFormat) -> Result<()> {
    let page = client.list_admins(&ListQuery::default()).await?;
    output::print_admins(&page, format);
    Ok(())
}
