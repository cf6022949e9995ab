//! Offset-cursor pagination.
//!
//! Listing endpoints return a `metadata` block whose `next_offset` tells the
//! caller where the following page starts. [`retrieve_items`] follows that
//! cursor until the server stops returning one, merging pages in fetch order.

use std::future::Future;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::DuoError;
use crate::params::Params;

/// Page size requested when the caller does not pick one.
pub const DEFAULT_PAGE_LIMIT: u64 = 100;

/// Paging metadata. The server sends offsets as numbers or strings; both
/// are kept as their decimal text, and an empty string reads as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResultMetadata {
    #[serde(
        default,
        deserialize_with = "number_or_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_offset: Option<String>,
    #[serde(
        default,
        deserialize_with = "number_or_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub prev_offset: Option<String>,
    #[serde(
        default,
        deserialize_with = "number_or_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_objects: Option<String>,
}

impl ListResultMetadata {
    pub fn next_offset(&self) -> Option<&str> {
        self.next_offset.as_deref()
    }
}

fn number_or_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) if text.is_empty() => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected number or string offset, found {other}"
        ))),
    }
}

/// One page of a listing response.
pub trait Page {
    type Item;

    fn metadata(&self) -> &ListResultMetadata;

    fn items(&self) -> &[Self::Item];

    /// Appends `next`'s items after this page's items and adopts `next`'s
    /// metadata.
    fn merge(&mut self, next: Self)
    where
        Self: Sized;
}

/// Fetches a listing, following `next_offset` across pages.
///
/// `offset` is initialized to `0` when unset. When `limit` is unset it is
/// set to [`DEFAULT_PAGE_LIMIT`] and every page is fetched and merged; when
/// the caller sets `limit`, exactly one page is fetched and returned as-is.
///
/// # Errors
///
/// The first error from `fetch` aborts the listing; pages already fetched
/// are discarded.
pub async fn retrieve_items<P, F, Fut>(params: &mut Params, mut fetch: F) -> Result<P, DuoError>
where
    P: Page,
    F: FnMut(Params) -> Fut,
    Fut: Future<Output = Result<P, DuoError>>,
{
    if params.get("offset").is_empty() {
        params.set("offset", "0");
    }

    if !params.get("limit").is_empty() {
        return fetch(params.clone()).await;
    }

    params.set("limit", DEFAULT_PAGE_LIMIT.to_string());
    let mut accumulator = fetch(params.clone()).await?;

    loop {
        let Some(next_offset) = accumulator.metadata().next_offset().map(str::to_owned) else {
            break;
        };
        debug!(offset = %next_offset, "fetching next page");
        params.set("offset", next_offset);
        let page = fetch(params.clone()).await?;
        accumulator.merge(page);
    }

    Ok(accumulator)
}
