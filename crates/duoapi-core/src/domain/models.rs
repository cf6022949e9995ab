use serde::{Deserialize, Serialize};

use crate::pagination::{ListResultMetadata, Page};

/// Outcome marker carried by every response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Stat {
    Ok,
    Fail,
}

/// Common status envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatResult {
    pub stat: Stat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_detail: Option<String>,
}

impl StatResult {
    pub const fn is_ok(&self) -> bool {
        matches!(self.stat, Stat::Ok)
    }
}

/// A Duo child account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    pub account_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_hostname: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAccountResult {
    #[serde(flatten)]
    pub stat: StatResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Account>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAccountResult {
    #[serde(flatten)]
    pub stat: StatResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub group_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListUsersResult {
    #[serde(flatten)]
    pub stat: StatResult,
    #[serde(default)]
    pub metadata: ListResultMetadata,
    #[serde(default)]
    pub response: Vec<User>,
}

impl Page for ListUsersResult {
    type Item = User;

    fn metadata(&self) -> &ListResultMetadata {
        &self.metadata
    }

    fn items(&self) -> &[User] {
        &self.response
    }

    fn merge(&mut self, next: Self) {
        self.response.extend(next.response);
        self.metadata = next.metadata;
        self.stat = next.stat;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListGroupsResult {
    #[serde(flatten)]
    pub stat: StatResult,
    #[serde(default)]
    pub metadata: ListResultMetadata,
    #[serde(default)]
    pub response: Vec<Group>,
}

impl Page for ListGroupsResult {
    type Item = Group;

    fn metadata(&self) -> &ListResultMetadata {
        &self.metadata
    }

    fn items(&self) -> &[Group] {
        &self.response
    }

    fn merge(&mut self, next: Self) {
        self.response.extend(next.response);
        self.metadata = next.metadata;
        self.stat = next.stat;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_result_has_absent_error_fields() {
        let result: GetAccountResult = serde_json::from_str(
            r#"{"stat":"OK","response":{"name":"Acme","account_id":"DA123","api_hostname":"api-1.duosecurity.com"}}"#,
        )
        .expect("valid response");

        assert!(result.stat.is_ok());
        assert_eq!(result.stat.code, None);
        assert_eq!(result.stat.message, None);
        assert_eq!(result.response.map(|a| a.account_id), Some(String::from("DA123")));
    }

    #[test]
    fn failure_result_carries_code_and_message() {
        let result: GetAccountResult = serde_json::from_str(
            r#"{"stat":"FAIL","code":40002,"message":"Invalid request parameters","message_detail":"name"}"#,
        )
        .expect("valid response");

        assert_eq!(result.stat.stat, Stat::Fail);
        assert_eq!(result.stat.code, Some(40002));
        assert_eq!(result.stat.message_detail.as_deref(), Some("name"));
        assert!(result.response.is_none());
    }

    #[test]
    fn success_result_serializes_without_error_fields() {
        let result = DeleteAccountResult {
            stat: StatResult {
                stat: Stat::Ok,
                code: None,
                message: None,
                message_detail: None,
            },
        };

        assert_eq!(
            serde_json::to_string(&result).expect("serializable"),
            r#"{"stat":"OK"}"#
        );
    }

    #[test]
    fn merge_appends_in_fetch_order_and_takes_latest_metadata() {
        let mut first: ListGroupsResult = serde_json::from_str(
            r#"{"stat":"OK","metadata":{"next_offset":1},"response":[{"group_id":"G1","name":"one"}]}"#,
        )
        .expect("valid page");
        let second: ListGroupsResult = serde_json::from_str(
            r#"{"stat":"OK","metadata":{},"response":[{"group_id":"G2","name":"two"}]}"#,
        )
        .expect("valid page");

        first.merge(second);

        let ids: Vec<&str> = first.items().iter().map(|g| g.group_id.as_str()).collect();
        assert_eq!(ids, vec!["G1", "G2"]);
        assert_eq!(first.metadata().next_offset(), None);
    }
}
