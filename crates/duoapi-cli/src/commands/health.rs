use duoapi_core::DuoApi;

use super::CommandOutcome;
use crate::error::CliError;

pub async fn ping(api: &DuoApi) -> Result<CommandOutcome, CliError> {
    let result = api.ping().await?;
    CommandOutcome::from_result(&result, result.is_ok())
}

pub async fn check(api: &DuoApi) -> Result<CommandOutcome, CliError> {
    let result = api.check().await?;
    CommandOutcome::from_result(&result, result.is_ok())
}
