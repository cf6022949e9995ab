//! Shared fakes for behaviour tests: a recording transport and a recording
//! sleeper, so no test touches the network or waits on real backoff.

#![allow(dead_code)]

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use duoapi_core::{
    ClientConfig, DuoApi, HttpClient, HttpError, HttpRequest, HttpResponse, Sleeper,
};

pub const IKEY: &str = "DIWJ8X6AEYOR5OMC6TQ1";
pub const SKEY: &str = "Zh5eGmUq9zpfQnyUIu5OL9iWoMMv5ZNmk3zLJ4Ep";
pub const HOST: &str = "api-test.duosecurity.com";

type Handler = dyn Fn(&HttpRequest) -> Result<HttpResponse, HttpError> + Send + Sync;

/// Transport that answers from a closure and remembers every request.
pub struct RecordingHttpClient {
    handler: Box<Handler>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingHttpClient {
    pub fn new<F>(handler: F) -> Arc<Self>
    where
        F: Fn(&HttpRequest) -> Result<HttpResponse, HttpError> + Send + Sync + 'static,
    {
        Arc::new(Self {
            handler: Box::new(handler),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn always(status: u16, body: &'static str) -> Arc<Self> {
        Self::new(move |_| Ok(HttpResponse::new(status, body)))
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().expect("requests lock").len()
    }
}

impl HttpClient for RecordingHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let result = (self.handler)(&request);
        self.requests.lock().expect("requests lock").push(request);
        Box::pin(async move { result })
    }
}

/// Sleeper that returns immediately and records the requested durations.
#[derive(Default)]
pub struct RecordingSleeper {
    slept: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn slept(&self) -> Vec<Duration> {
        self.slept.lock().expect("sleeper lock").clone()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep<'a>(&'a self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        self.slept.lock().expect("sleeper lock").push(duration);
        Box::pin(async {})
    }
}

pub fn api_with(
    client: Arc<RecordingHttpClient>,
    sleeper: Arc<RecordingSleeper>,
    config: ClientConfig,
) -> DuoApi {
    DuoApi::new(IKEY, SKEY, HOST, "tests", config)
        .expect("client builds")
        .with_http_client(client)
        .with_sleeper(sleeper)
}

pub fn api(client: Arc<RecordingHttpClient>) -> DuoApi {
    api_with(client, RecordingSleeper::new(), ClientConfig::default())
}
