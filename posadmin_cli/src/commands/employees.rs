use anyhow::Result;
use clap::{Args, Subcommand};
use posadmin_lib::types::EmployeeInput;
use posadmin_lib::{Client, ListQuery};

use super::{search_notice, ListArgs};
use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct EmployeesArgs {
    #[command(subcommand)]
    pub command: EmployeesCommand,
}

#[derive(Subcommand)]
pub enum EmployeesCommand {
    /// List employees
    List(ListArgs),
    /// Create an employee
    Add(EmployeeFields),
    /// Update an employee
    Update {
        id: i64,
        #[command(flatten)]
        fields: EmployeeFields,
    },
    /// Delete an employee
    Delete { id: i64 },
}

#[derive(Args)]
pub struct EmployeeFields {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub position: Option<String>,
}

impl EmployeeFields {
    fn to_input(&self) -> EmployeeInput {
        EmployeeInput {
            name: self.name.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            position: self.position.clone(),
        }
    }
}

pub async fn run(args: &EmployeesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        EmployeesCommand::List(list) => {
            let page = client.list_employees(&list.to_query()).await?;
            search_notice(list, &page);
            output::print_employees(&page, format);
        }
        EmployeesCommand::Add(fields) => {
            let created = client.create_employee(&fields.to_input()).await?;
            eprintln!(
                "created employee #{} \"{}\"",
                created.data.id, created.data.name
            );
            relist(client, format).await?;
        }
        EmployeesCommand::Update { id, fields } => {
            let updated = client.update_employee(*id, &fields.to_input()).await?;
            eprintln!("updated employee #{}", updated.data.id);
            relist(client, format).await?;
        }
        EmployeesCommand::Delete { id } => {
            client.delete_employee(*id).await?;
            eprintln!("deleted employee #{id}");
            relist(client, format).await?;
        }
    }
    Ok(())
}

async fn relist(client: &Client, format: &OutputFormat) -> Result<()> {
    let page = client.list_employees(&ListQuery::default()).await?;
    output::print_employees(&page, format);
    Ok(())
}
