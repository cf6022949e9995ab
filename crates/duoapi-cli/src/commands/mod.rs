mod accounts;
mod health;
mod listing;

use std::time::Duration;

use duoapi_core::{AdminClient, ClientConfig, DuoApi};
use serde::Serialize;
use serde_json::Value;

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub struct CommandOutcome {
    pub data: Value,
    /// `false` when the API answered with `stat: FAIL`.
    pub ok: bool,
}

impl CommandOutcome {
    pub fn from_result<T: Serialize>(result: &T, ok: bool) -> Result<Self, CliError> {
        Ok(Self {
            data: serde_json::to_value(result)?,
            ok,
        })
    }
}

pub async fn run(cli: &Cli) -> Result<CommandOutcome, CliError> {
    match &cli.command {
        Command::Ping => health::ping(&build_api(cli, false)?).await,
        Command::Check => health::check(&build_api(cli, true)?).await,
        Command::CreateAccount(args) => accounts::create(&admin(cli)?, args).await,
        Command::DeleteAccount(args) => accounts::delete(&admin(cli)?, args).await,
        Command::Users(args) => listing::users(&admin(cli)?, args).await,
        Command::Groups(args) => listing::groups(&admin(cli)?, args).await,
    }
}

fn admin(cli: &Cli) -> Result<AdminClient, CliError> {
    Ok(AdminClient::new(build_api(cli, true)?))
}

fn build_api(cli: &Cli, require_credentials: bool) -> Result<DuoApi, CliError> {
    if cli.host.is_empty() {
        return Err(CliError::MissingCredential("DUO_HOST"));
    }
    let ikey = credential(cli.ikey.as_deref(), "DUO_IKEY", require_credentials)?;
    let skey = credential(cli.skey.as_deref(), "DUO_SKEY", require_credentials)?;

    let config = ClientConfig::new().with_timeout(Duration::from_millis(cli.timeout_ms));
    Ok(DuoApi::new(ikey, skey, cli.host.as_str(), &cli.user_agent, config)?)
}

fn credential(value: Option<&str>, name: &'static str, required: bool) -> Result<String, CliError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value.to_owned()),
        _ if required => Err(CliError::MissingCredential(name)),
        _ => Ok(String::new()),
    }
}
