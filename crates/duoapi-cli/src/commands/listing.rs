use duoapi_core::{AdminClient, Page, Params};
use tracing::info;

use super::CommandOutcome;
use crate::cli::ListArgs;
use crate::error::CliError;

pub async fn users(admin: &AdminClient, args: &ListArgs) -> Result<CommandOutcome, CliError> {
    let result = admin.list_users(paging(args)).await?;
    info!(count = result.items().len(), "users listed");
    CommandOutcome::from_result(&result, result.stat.is_ok())
}

pub async fn groups(admin: &AdminClient, args: &ListArgs) -> Result<CommandOutcome, CliError> {
    let result = admin.list_groups(paging(args)).await?;
    info!(count = result.items().len(), "groups listed");
    CommandOutcome::from_result(&result, result.stat.is_ok())
}

fn paging(args: &ListArgs) -> Params {
    let mut params = Params::new();
    if let Some(limit) = args.limit {
        params = params.limit(limit);
    }
    if let Some(offset) = args.offset {
        params = params.offset(offset);
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_leave_pagination_automatic() {
        let params = paging(&ListArgs { limit: None, offset: None });
        assert!(params.is_empty());
    }

    #[test]
    fn flags_map_to_query_parameters() {
        let params = paging(&ListArgs { limit: Some(5), offset: Some(10) });
        assert_eq!(params.get("limit"), "5");
        assert_eq!(params.get("offset"), "10");
    }
}
