use duoapi_core::AdminClient;
use tracing::info;

use super::CommandOutcome;
use crate::cli::{CreateAccountArgs, DeleteAccountArgs};
use crate::error::CliError;

pub async fn create(
    admin: &AdminClient,
    args: &CreateAccountArgs,
) -> Result<CommandOutcome, CliError> {
    let result = admin.create_account(&args.name).await?;
    if let Some(account) = &result.response {
        info!(account_id = %account.account_id, "account created");
    }
    CommandOutcome::from_result(&result, result.stat.is_ok())
}

pub async fn delete(
    admin: &AdminClient,
    args: &DeleteAccountArgs,
) -> Result<CommandOutcome, CliError> {
    let result = admin.delete_account(&args.account_id).await?;
    CommandOutcome::from_result(&result, result.stat.is_ok())
}
