//! Admin and Accounts API operations.

use serde::de::DeserializeOwned;

use crate::client::{decode, DuoApi};
use crate::config::CallOptions;
use crate::domain::{DeleteAccountResult, GetAccountResult, ListGroupsResult, ListUsersResult};
use crate::error::DuoError;
use crate::http_client::HttpMethod;
use crate::pagination::{retrieve_items, Page};
use crate::params::{JsonParams, Params};

const CREATE_ACCOUNT_PATH: &str = "/accounts/v1/account/create";
const DELETE_ACCOUNT_PATH: &str = "/accounts/v1/account/delete";
const USERS_PATH: &str = "/admin/v1/users";
const GROUPS_PATH: &str = "/admin/v1/groups";

/// Named operations over a [`DuoApi`].
///
/// A `FAIL` status from the server is returned as a decoded result, not as
/// an error; inspect `stat` on the result.
#[derive(Clone)]
pub struct AdminClient {
    api: DuoApi,
}

impl AdminClient {
    pub fn new(api: DuoApi) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &DuoApi {
        &self.api
    }

    /// Creates a child account named `name`.
    pub async fn create_account(&self, name: &str) -> Result<GetAccountResult, DuoError> {
        let params = JsonParams::new().with("name", name);
        let response = self
            .api
            .json_signed_call(
                HttpMethod::Post,
                CREATE_ACCOUNT_PATH,
                &params,
                CallOptions::timeout(),
            )
            .await?;
        decode(&response)
    }

    pub async fn delete_account(&self, account_id: &str) -> Result<DeleteAccountResult, DuoError> {
        let params = JsonParams::new().with("account_id", account_id);
        let response = self
            .api
            .json_signed_call(
                HttpMethod::Post,
                DELETE_ACCOUNT_PATH,
                &params,
                CallOptions::timeout(),
            )
            .await?;
        decode(&response)
    }

    /// Lists users. Without an explicit `limit` every page is fetched and
    /// merged; with one, only that page is returned.
    pub async fn list_users(&self, mut params: Params) -> Result<ListUsersResult, DuoError> {
        retrieve_items(&mut params, |page| self.fetch_page(USERS_PATH, page)).await
    }

    /// Lists groups, paginated like [`list_users`](Self::list_users).
    pub async fn list_groups(&self, mut params: Params) -> Result<ListGroupsResult, DuoError> {
        retrieve_items(&mut params, |page| self.fetch_page(GROUPS_PATH, page)).await
    }

    async fn fetch_page<P>(&self, path: &str, params: Params) -> Result<P, DuoError>
    where
        P: Page + DeserializeOwned,
    {
        let response = self
            .api
            .signed_call(HttpMethod::Get, path, &params, CallOptions::timeout())
            .await?;
        decode(&response)
    }
}
