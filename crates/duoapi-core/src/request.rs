//! Assembly of the three call shapes into transport requests.
//!
//! | Shape | Signature | Parameters travel in |
//! |-------|-----------|----------------------|
//! | unsigned | none | URL query |
//! | form-signed | V2 | body for POST/PUT (form-encoded), URL query otherwise |
//! | JSON-signed | V5 | body for POST/PUT/PATCH (JSON), URL query otherwise |
//!
//! Every failure here happens before any network activity.

use reqwest::Url;
use time::format_description::well_known::Rfc2822;
use time::OffsetDateTime;

use crate::error::DuoError;
use crate::http_client::{HttpMethod, HttpRequest};
use crate::params::{JsonParams, Params};
use crate::signer::Credentials;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Formats `at` as an RFC 1123 date with a numeric zone, the form signed into
/// the canonical string and sent in the `Date` header.
pub fn request_date(at: OffsetDateTime) -> Result<String, DuoError> {
    at.to_offset(time::UtcOffset::UTC)
        .format(&Rfc2822)
        .map_err(|e| DuoError::construction(format!("request date: {e}")))
}

/// Builds requests against one host with one identity.
#[derive(Debug, Clone, Copy)]
pub struct RequestBuilder<'a> {
    credentials: &'a Credentials,
    scheme: &'a str,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(credentials: &'a Credentials, scheme: &'a str) -> Self {
        Self {
            credentials,
            scheme,
        }
    }

    /// Request with no `Authorization` header, for endpoints such as ping.
    pub fn unsigned(
        &self,
        method: HttpMethod,
        path: &str,
        params: &Params,
    ) -> Result<HttpRequest, DuoError> {
        let url = self.url(path, params)?;
        Ok(HttpRequest::new(method, url).with_header("User-Agent", self.credentials.user_agent()))
    }

    /// V2-signed request with form parameters.
    pub fn form_signed(
        &self,
        method: HttpMethod,
        path: &str,
        params: &Params,
        date: &str,
    ) -> Result<HttpRequest, DuoError> {
        let authorization = self.credentials.sign(method.as_str(), path, params, date);

        let request = if method.has_form_body() {
            HttpRequest::new(method, self.url(path, &Params::new())?)
                .with_header("Content-Type", FORM_CONTENT_TYPE)
                .with_body(params.encode())
        } else {
            HttpRequest::new(method, self.url(path, params)?)
        };

        Ok(self.signed_headers(request, authorization, date))
    }

    /// V5-signed request with JSON parameters.
    ///
    /// # Errors
    ///
    /// For methods without a body, every parameter must be a JSON string;
    /// anything else fails with [`DuoError::ParameterType`].
    pub fn json_signed(
        &self,
        method: HttpMethod,
        path: &str,
        params: &JsonParams,
        date: &str,
    ) -> Result<HttpRequest, DuoError> {
        let (query, body) = if method.has_json_body() {
            let body = serde_json::to_string(params).map_err(DuoError::Encode)?;
            (Params::new(), Some(body))
        } else {
            (params.to_query_params()?, None)
        };

        let authorization = self.credentials.sign_v5(
            method.as_str(),
            path,
            &query,
            body.as_deref().unwrap_or(""),
            date,
        );

        let mut request = HttpRequest::new(method, self.url(path, &query)?);
        if let Some(body) = body {
            request = request
                .with_header("Content-Type", JSON_CONTENT_TYPE)
                .with_body(body);
        }

        Ok(self.signed_headers(request, authorization, date))
    }

    fn signed_headers(
        &self,
        request: HttpRequest,
        authorization: String,
        date: &str,
    ) -> HttpRequest {
        request
            .with_header("User-Agent", self.credentials.user_agent())
            .with_header("Authorization", authorization)
            .with_header("Date", date)
    }

    fn url(&self, path: &str, params: &Params) -> Result<String, DuoError> {
        if !path.starts_with('/') {
            return Err(DuoError::construction(format!(
                "path must start with '/': '{path}'"
            )));
        }

        let host = self.credentials.host();
        let mut url = Url::parse(&format!("{}://{host}", self.scheme))
            .map_err(|e| DuoError::construction(format!("invalid host '{host}': {e}")))?;
        if url.cannot_be_a_base() || url.host_str().is_none() {
            return Err(DuoError::construction(format!("invalid host '{host}'")));
        }

        url.set_path(path);
        if !params.is_empty() {
            url.set_query(Some(&params.encode()));
        }
        Ok(url.into())
    }
}
