//! Response models for the Duo Admin and Accounts APIs.
//!
//! Every API response carries a `stat` of `OK` or `FAIL`. On failure the
//! `code`, `message` and `message_detail` fields explain why; on success they
//! are absent rather than zero-valued.

mod models;

pub use models::{
    Account, DeleteAccountResult, GetAccountResult, Group, ListGroupsResult, ListUsersResult,
    Stat, StatResult, User,
};
