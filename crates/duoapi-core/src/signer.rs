//! HMAC-SHA512 request signatures.
//!
//! Both schemes produce `Basic base64(ikey:hex(hmac_sha512(skey, canon)))`;
//! they differ only in the canonical string they sign.

use std::fmt::{Debug, Formatter};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha512;

use crate::canonical::{canonicalize, canonicalize_v5};
use crate::params::Params;

type HmacSha512 = Hmac<Sha512>;

/// Identity used to sign every request made by a client.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    ikey: String,
    skey: String,
    host: String,
    user_agent: String,
}

impl Credentials {
    pub fn new(ikey: impl Into<String>, skey: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            ikey: ikey.into(),
            skey: skey.into(),
            host: host.into(),
            user_agent: String::new(),
        }
    }

    /// Sets the full `User-Agent` sent with every request.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn ikey(&self) -> &str {
        &self.ikey
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Authorization header value for the V2 scheme.
    pub fn sign(&self, method: &str, path: &str, params: &Params, date: &str) -> String {
        let canon = canonicalize(method, &self.host, path, params, date);
        self.authorization(&canon)
    }

    /// Authorization header value for the V5 scheme, which also covers `body`.
    pub fn sign_v5(
        &self,
        method: &str,
        path: &str,
        params: &Params,
        body: &str,
        date: &str,
    ) -> String {
        let canon = canonicalize_v5(method, &self.host, path, params, body, date);
        self.authorization(&canon)
    }

    fn authorization(&self, canon: &str) -> String {
        // HMAC takes keys of any length, so construction cannot fail.
        let mut mac = HmacSha512::new_from_slice(self.skey.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(canon.as_bytes());
        let signature = hex::encode(mac.finalize().into_bytes());
        let auth = format!("{}:{signature}", self.ikey);
        format!("Basic {}", STANDARD.encode(auth))
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("ikey", &self.ikey)
            .field("skey", &"<redacted>")
            .field("host", &self.host)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
