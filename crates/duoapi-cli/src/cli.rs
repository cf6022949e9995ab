//! CLI argument definitions for the `duoapi` binary.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `ping` | Unsigned liveness probe |
//! | `check` | Verify the integration credentials |
//! | `create-account` | Create a child account |
//! | `delete-account` | Delete a child account |
//! | `users` | List users (all pages unless `--limit` is given) |
//! | `groups` | List groups (all pages unless `--limit` is given) |
//!
//! Credentials come from `DUO_IKEY`, `DUO_SKEY` and `DUO_HOST` unless passed
//! as flags. Set `RUST_LOG=duoapi_core=debug` to trace each request.

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "duoapi",
    author,
    version,
    about = "Signed calls against the Duo Admin and Accounts APIs"
)]
pub struct Cli {
    /// API hostname, e.g. api-xxxxxxxx.duosecurity.com.
    #[arg(long, global = true, env = "DUO_HOST", default_value = "")]
    pub host: String,

    /// Integration key.
    #[arg(long, global = true, env = "DUO_IKEY", hide_env_values = true)]
    pub ikey: Option<String>,

    /// Secret key.
    #[arg(long, global = true, env = "DUO_SKEY", hide_env_values = true)]
    pub skey: Option<String>,

    /// Prefix prepended to the library user-agent.
    #[arg(long, global = true, default_value = "")]
    pub user_agent: String,

    /// Request timeout in milliseconds.
    #[arg(long, global = true, default_value_t = 10_000)]
    pub timeout_ms: u64,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Unsigned liveness probe.
    Ping,
    /// Verify that the credentials are accepted.
    Check,
    /// Create a child account.
    CreateAccount(CreateAccountArgs),
    /// Delete a child account.
    DeleteAccount(DeleteAccountArgs),
    /// List users.
    Users(ListArgs),
    /// List groups.
    Groups(ListArgs),
}

#[derive(Debug, Args)]
pub struct CreateAccountArgs {
    /// Name of the new account.
    pub name: String,
}

#[derive(Debug, Args)]
pub struct DeleteAccountArgs {
    /// Account identifier, e.g. DA1234567890ABCDEFGH.
    pub account_id: String,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Page size. Setting it fetches a single page instead of all pages.
    #[arg(long)]
    pub limit: Option<u64>,

    /// Offset of the first item.
    #[arg(long)]
    pub offset: Option<u64>,
}
