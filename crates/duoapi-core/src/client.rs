//! Signed, rate-limit-aware calls against one Duo API host.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use time::OffsetDateTime;

use crate::config::{CallOptions, ClientConfig};
use crate::domain::StatResult;
use crate::error::DuoError;
use crate::http_client::{HttpClient, HttpMethod, HttpRequest, HttpResponse, ReqwestHttpClient};
use crate::params::{JsonParams, Params};
use crate::request::{request_date, RequestBuilder};
use crate::retry::{RetryConfig, RetryExecutor, Sleeper, TokioSleeper};
use crate::signer::Credentials;

/// Library identifier appended to every `User-Agent`.
pub const DEFAULT_USER_AGENT: &str = concat!("duoapi/", env!("CARGO_PKG_VERSION"));

/// Client for one Duo API host.
///
/// Credentials and the connection pool are fixed at construction; the client
/// can be cloned or shared by reference across concurrent tasks.
#[derive(Clone)]
pub struct DuoApi {
    credentials: Credentials,
    config: ClientConfig,
    executor: RetryExecutor,
}

impl DuoApi {
    /// Builds a client. `user_agent` is an optional caller prefix; the
    /// library identifier is appended to it.
    ///
    /// # Errors
    ///
    /// Returns [`DuoError::Construction`] if the HTTP transport cannot be
    /// built from `config`.
    pub fn new(
        ikey: impl Into<String>,
        skey: impl Into<String>,
        host: impl Into<String>,
        user_agent: &str,
        config: ClientConfig,
    ) -> Result<Self, DuoError> {
        let transport = ReqwestHttpClient::from_config(&config)?;
        let user_agent = if user_agent.is_empty() {
            DEFAULT_USER_AGENT.to_owned()
        } else {
            format!("{user_agent} {DEFAULT_USER_AGENT}")
        };

        Ok(Self {
            credentials: Credentials::new(ikey, skey, host).with_user_agent(user_agent),
            config,
            executor: RetryExecutor::new(
                Arc::new(transport),
                Arc::new(TokioSleeper),
                RetryConfig::default(),
            ),
        })
    }

    /// Replaces the transport entirely. Intended for tests.
    pub fn with_http_client(mut self, client: Arc<dyn HttpClient>) -> Self {
        self.executor = self.executor.with_client(client);
        self
    }

    /// Replaces the backoff sleeper. Intended for tests.
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.executor = self.executor.with_sleeper(sleeper);
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn user_agent(&self) -> &str {
        self.credentials.user_agent()
    }

    /// Unsigned call; parameters go in the URL query.
    pub async fn call(
        &self,
        method: HttpMethod,
        path: &str,
        params: &Params,
        options: CallOptions,
    ) -> Result<HttpResponse, DuoError> {
        let request = self.builder().unsigned(method, path, params)?;
        self.send(request, options).await
    }

    /// V2-signed call with form parameters.
    pub async fn signed_call(
        &self,
        method: HttpMethod,
        path: &str,
        params: &Params,
        options: CallOptions,
    ) -> Result<HttpResponse, DuoError> {
        let date = request_date(OffsetDateTime::now_utc())?;
        let request = self.builder().form_signed(method, path, params, &date)?;
        self.send(request, options).await
    }

    /// V5-signed call with JSON parameters.
    ///
    /// # Errors
    ///
    /// For GET and DELETE every parameter must be a JSON string, otherwise
    /// [`DuoError::ParameterType`] is returned and nothing is sent.
    pub async fn json_signed_call(
        &self,
        method: HttpMethod,
        path: &str,
        params: &JsonParams,
        options: CallOptions,
    ) -> Result<HttpResponse, DuoError> {
        let date = request_date(OffsetDateTime::now_utc())?;
        let request = self.builder().json_signed(method, path, params, &date)?;
        self.send(request, options).await
    }

    /// Liveness probe; needs no credentials.
    pub async fn ping(&self) -> Result<StatResult, DuoError> {
        let response = self
            .call(HttpMethod::Get, "/auth/v2/ping", &Params::new(), CallOptions::timeout())
            .await?;
        decode(&response)
    }

    /// Verifies that the credentials are accepted.
    pub async fn check(&self) -> Result<StatResult, DuoError> {
        let response = self
            .signed_call(HttpMethod::Get, "/auth/v2/check", &Params::new(), CallOptions::timeout())
            .await?;
        decode(&response)
    }

    fn builder(&self) -> RequestBuilder<'_> {
        RequestBuilder::new(&self.credentials, self.config.scheme())
    }

    async fn send(
        &self,
        request: HttpRequest,
        options: CallOptions,
    ) -> Result<HttpResponse, DuoError> {
        let timeout = if options.use_timeout {
            self.config.timeout
        } else {
            None
        };
        self.executor.execute(request.with_timeout(timeout)).await
    }
}

/// Decodes a JSON response body into `T`.
pub fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, DuoError> {
    serde_json::from_slice(&response.body).map_err(DuoError::Decode)
}
