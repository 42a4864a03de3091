use anyhow::{bail, Result};
use clap::Args;
use posadmin_lib::Client;

#[derive(Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,

    /// Password; read from POSADMIN_PASSWORD when omitted
    #[arg(long)]
    pub password: Option<String>,

    /// Backend URL; defaults to POSADMIN_URL
    #[arg(long)]
    pub url: Option<String>,
}

pub async fn run(args: &LoginArgs) -> Result<()> {
    let url = match args.url.clone().or_else(|| std::env::var("POSADMIN_URL").ok()) {
        Some(url) => url,
        None => bail!("pass --url or set POSADMIN_URL"),
    };
    let password = match args
        .password
        .clone()
        .or_else(|| std::env::var("POSADMIN_PASSWORD").ok())
    {
        Some(password) => password,
        None => bail!("pass --password or set POSADMIN_PASSWORD"),
    };

    let resp = Client::login(&url, &args.email, &password).await?;
    eprintln!("logged in as {} ({})", resp.user.name, resp.user.role);
    // Printed as a shell line so `eval $(posadmin login ...)` works; the
    // token is not persisted anywhere by this tool.
    println!("export POSADMIN_TOKEN={}", resp.token);
    Ok(())
}
