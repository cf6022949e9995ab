//! Contract tests for canonicalization and signing.
//!
//! These pin down the properties the provider relies on: canonical strings
//! do not depend on parameter insertion order, signatures are deterministic,
//! and every signed input contributes to the signature.

use duoapi_core::canonical::{canon_params, canonicalize, canonicalize_v5, hash_string};
use duoapi_core::{Credentials, Params};

const DATE: &str = "Tue, 21 Aug 2012 17:29:18 +0000";

fn entries() -> Vec<(&'static str, &'static str)> {
    vec![
        ("username", "root"),
        ("realname", "First Last"),
        ("group", "b"),
        ("group", "a"),
        ("note", "50% off & more"),
        ("email", "user+tag@example.com"),
    ]
}

// =============================================================================
// Canonicalization: order independence
// =============================================================================

#[test]
fn canonical_string_is_identical_for_every_insertion_order() {
    // Given: the same parameter entries inserted in several different orders
    let mut orders = vec![entries()];
    let mut reversed = entries();
    reversed.reverse();
    orders.push(reversed);
    let mut rotated = entries();
    rotated.rotate_left(2);
    orders.push(rotated);
    let mut swapped = entries();
    swapped.swap(2, 3);
    orders.push(swapped);

    // When: each is canonicalized
    let canonical: Vec<String> = orders
        .into_iter()
        .map(|order| {
            let params: Params = order.into_iter().collect();
            canonicalize("GET", "api-test.duosecurity.com", "/admin/v1/users", &params, DATE)
        })
        .collect();

    // Then: all canonical strings agree
    assert!(canonical.windows(2).all(|pair| pair[0] == pair[1]));
    assert!(canonical[0].ends_with(
        "email=user%2Btag%40example.com&group=a&group=b&note=50%25%20off%20%26%20more\
         &realname=First%20Last&username=root"
    ));
}

#[test]
fn spaces_are_never_encoded_as_plus() {
    let params: Params = [("realname", "A B C"), ("note", "x y")].into_iter().collect();
    let canon = canonicalize("GET", "h", "/p", &params, DATE);
    let query = canon_params(&params);

    // The date line carries a literal "+0000" zone, so only the query line is checked.
    assert_eq!(canon.rsplit('\n').next(), Some(query.as_str()));
    assert_eq!(query, "note=x%20y&realname=A%20B%20C");
    assert!(!query.contains('+'));
}

// =============================================================================
// Scheme difference
// =============================================================================

#[test]
fn v5_is_v2_plus_body_hash_and_empty_hash() {
    let params: Params = entries().into_iter().collect();
    let body = r#"{"name":"Acme"}"#;

    let v2 = canonicalize("POST", "Api-Test.DuoSecurity.com", "/x", &params, DATE);
    let v5 = canonicalize_v5("POST", "Api-Test.DuoSecurity.com", "/x", &params, body, DATE);

    let extra = v5.strip_prefix(&v2).expect("v5 starts with v2");
    let lines: Vec<&str> = extra.split('\n').collect();
    assert_eq!(lines, vec!["", hash_string(body).as_str(), hash_string("").as_str()]);
}

// =============================================================================
// Signing: determinism and sensitivity
// =============================================================================

struct Inputs {
    ikey: &'static str,
    skey: &'static str,
    host: &'static str,
    method: &'static str,
    path: &'static str,
    params: Params,
    date: &'static str,
    body: &'static str,
}

impl Inputs {
    fn base() -> Self {
        Self {
            ikey: "DIWJ8X6AEYOR5OMC6TQ1",
            skey: "Zh5eGmUq9zpfQnyUIu5OL9iWoMMv5ZNmk3zLJ4Ep",
            host: "api-test.duosecurity.com",
            method: "POST",
            path: "/accounts/v1/account/create",
            params: [("name", "Acme")].into_iter().collect(),
            date: DATE,
            body: r#"{"name":"Acme"}"#,
        }
    }

    fn sign(&self) -> String {
        Credentials::new(self.ikey, self.skey, self.host).sign(
            self.method,
            self.path,
            &self.params,
            self.date,
        )
    }

    fn sign_v5(&self) -> String {
        Credentials::new(self.ikey, self.skey, self.host).sign_v5(
            self.method,
            self.path,
            &self.params,
            self.body,
            self.date,
        )
    }
}

#[test]
fn signing_twice_yields_identical_output() {
    let inputs = Inputs::base();

    assert_eq!(inputs.sign(), inputs.sign());
    assert_eq!(inputs.sign_v5(), inputs.sign_v5());
    assert_ne!(inputs.sign(), inputs.sign_v5());
}

#[test]
fn changing_any_signed_input_changes_the_signature() {
    let base = Inputs::base();
    let base_v2 = base.sign();
    let base_v5 = base.sign_v5();

    let variants: Vec<(&str, Inputs)> = vec![
        ("method", Inputs { method: "PUT", ..Inputs::base() }),
        ("host", Inputs { host: "api-other.duosecurity.com", ..Inputs::base() }),
        ("path", Inputs { path: "/accounts/v1/account/createx", ..Inputs::base() }),
        ("query", Inputs { params: [("name", "Acmf")].into_iter().collect(), ..Inputs::base() }),
        ("date", Inputs { date: "Tue, 21 Aug 2012 17:29:19 +0000", ..Inputs::base() }),
        (
            "secret key",
            Inputs {
                skey: "Zh5eGmUq9zpfQnyUIu5OL9iWoMMv5ZNmk3zLJ4Eq",
                ..Inputs::base()
            },
        ),
    ];

    for (field, variant) in &variants {
        assert_ne!(variant.sign(), base_v2, "v2 signature ignored {field}");
        assert_ne!(variant.sign_v5(), base_v5, "v5 signature ignored {field}");
    }

    let body_changed = Inputs { body: r#"{"name":"Acmf"}"#, ..Inputs::base() };
    assert_ne!(body_changed.sign_v5(), base_v5, "v5 signature ignored body");
    assert_eq!(body_changed.sign(), base_v2, "v2 signature does not cover the body");
}

#[test]
fn host_case_does_not_change_the_signature() {
    let lower = Inputs::base();
    let upper = Inputs { host: "API-TEST.DUOSECURITY.COM", ..Inputs::base() };

    assert_eq!(lower.sign(), upper.sign());
}

#[test]
fn authorization_header_is_basic_ikey_colon_hex_digest() {
    use base64::Engine;

    let auth = Inputs::base().sign();
    let encoded = auth.strip_prefix("Basic ").expect("basic scheme");
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .expect("valid base64");
    let decoded = String::from_utf8(decoded).expect("utf8");
    let (ikey, digest) = decoded.split_once(':').expect("ikey:digest");

    assert_eq!(ikey, "DIWJ8X6AEYOR5OMC6TQ1");
    assert_eq!(digest.len(), 128);
    assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}
