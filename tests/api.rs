//! API client and command-flow tests against a mock HTTP server.
//!
//! These exercise the real request path (auth headers, endpoint paths,
//! envelope normalization) and the full set/setAll sequences without a
//! GitHub token or network access.

use std::io::Write;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use crypto_box::SecretKey;
use serde_json::json;
use wiremock::matchers::{basic_auth, header, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gh_secrets::cli::{set, set_all};
use gh_secrets::core::api::{ApiClient, ApiStatus, PublicKey};
use gh_secrets::core::config::Credentials;
use gh_secrets::core::target::Target;
use gh_secrets::error::Error;

fn client(server: &MockServer) -> ApiClient {
    let credentials = Credentials {
        username: "octocat".to_string(),
        token: "token123".to_string(),
    };
    ApiClient::with_base_url(credentials, server.uri())
}

fn repo_target() -> Target {
    Target::parse("https://github.com/acme/widgets").expect("valid URL")
}

/// Generate a keypair and return (public_key_b64, secret_key).
fn keypair() -> (String, SecretKey) {
    let mut rng = crypto_box::aead::OsRng;
    let secret_key = SecretKey::generate(&mut rng);
    let public_key_b64 = BASE64.encode(secret_key.public_key().as_bytes());
    (public_key_b64, secret_key)
}

#[tokio::test]
async fn fetch_public_key_hits_endpoint_with_basic_auth() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widgets/actions/secrets/public-key"))
        .and(basic_auth("octocat", "token123"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "key_id": "568250167242549743",
            "key": "dGVzdC1rZXk="
        })))
        .expect(1)
        .mount(&server)
        .await;

    let res = client(&server)
        .fetch_public_key(&repo_target())
        .await
        .unwrap();

    assert!(res.is_ok());
    let public_key: PublicKey = res.parse().unwrap();
    assert_eq!(public_key.key_id, "568250167242549743");
    assert_eq!(public_key.key, "dGVzdC1rZXk=");
}

#[tokio::test]
async fn org_target_uses_orgs_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orgs/acme/actions/secrets"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"total_count": 0, "secrets": []})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let target = Target::parse("https://github.com/acme").unwrap();
    let res = client(&server).list_secrets(&target).await.unwrap();
    assert!(res.is_ok());
}

#[tokio::test]
async fn list_secrets_returns_ok_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widgets/actions/secrets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": 2,
            "secrets": [{"name": "API_KEY"}, {"name": "DB_URL"}]
        })))
        .mount(&server)
        .await;

    let res = client(&server).list_secrets(&repo_target()).await.unwrap();

    assert_eq!(res.status, ApiStatus::Ok);
    assert_eq!(res.status_code, 200);
    assert_eq!(res.result["total_count"], 2);
}

#[tokio::test]
async fn fetch_secret_not_found_is_ko() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widgets/actions/secrets/NOPE"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})),
        )
        .mount(&server)
        .await;

    let res = client(&server)
        .fetch_secret(&repo_target(), "NOPE")
        .await
        .unwrap();

    assert_eq!(res.status, ApiStatus::Ko);
    assert_eq!(res.status_code, 404);
    assert_eq!(res.result["message"], "Not Found");
}

#[tokio::test]
async fn delete_secret_no_content_is_ok() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/repos/acme/widgets/actions/secrets/API_KEY"))
        .and(basic_auth("octocat", "token123"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let res = client(&server)
        .delete_secret(&repo_target(), "API_KEY")
        .await
        .unwrap();

    assert!(res.is_ok());
    assert_eq!(res.status_code, 204);
}

#[tokio::test]
async fn non_json_body_is_kept_as_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widgets/actions/secrets"))
        .respond_with(
            ResponseTemplate::new(500)
                .insert_header("content-type", "text/plain")
                .set_body_string("upstream exploded"),
        )
        .mount(&server)
        .await;

    let res = client(&server).list_secrets(&repo_target()).await.unwrap();

    assert_eq!(res.status, ApiStatus::Ko);
    assert_eq!(res.result, serde_json::Value::String("upstream exploded".to_string()));
}

#[tokio::test]
async fn set_flow_fetches_key_then_puts_sealed_value() {
    let server = MockServer::start().await;
    let (public_key_b64, secret_key) = keypair();

    Mock::given(method("GET"))
        .and(path("/repos/acme/widgets/actions/secrets/public-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "key_id": "568250167242549743",
            "key": public_key_b64
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/repos/acme/widgets/actions/secrets/API_KEY"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let stored = set::apply(&client(&server), &repo_target(), "API_KEY", "secretvalue")
        .await
        .unwrap();
    assert!(stored);

    // The PUT body must carry the fetched key_id and a sealed value that
    // decrypts back to the plaintext with the matching secret key.
    let requests = server.received_requests().await.unwrap();
    let put = requests
        .iter()
        .find(|r| r.url.path().ends_with("/actions/secrets/API_KEY"))
        .expect("PUT request recorded");

    let body: serde_json::Value = put.body_json().unwrap();
    assert_eq!(body["key_id"], "568250167242549743");

    let sealed = BASE64
        .decode(body["encrypted_value"].as_str().unwrap())
        .unwrap();
    let plaintext = secret_key.unseal(&sealed).expect("unseal should succeed");
    assert_eq!(plaintext, b"secretvalue");
}

#[tokio::test]
async fn set_stops_after_failed_key_fetch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widgets/actions/secrets/public-key"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Bad credentials"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let stored = set::apply(&client(&server), &repo_target(), "API_KEY", "secretvalue")
        .await
        .unwrap();
    assert!(!stored);

    // No PUT went out.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn set_all_dispatches_one_sequence_per_line() {
    let server = MockServer::start().await;
    let (public_key_b64, secret_key) = keypair();

    Mock::given(method("GET"))
        .and(path("/repos/acme/widgets/actions/secrets/public-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "key_id": "k1",
            "key": public_key_b64
        })))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path_regex(r"^/repos/acme/widgets/actions/secrets/[AB]$"))
        .respond_with(ResponseTemplate::new(201))
        .expect(2)
        .mount(&server)
        .await;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"A=1\nB=2\n").unwrap();

    set_all::execute(
        &client(&server),
        file.path().to_str().unwrap(),
        "https://github.com/acme/widgets",
    )
    .await
    .unwrap();

    let requests = server.received_requests().await.unwrap();
    for (name, expected) in [("A", b"1".as_slice()), ("B", b"2".as_slice())] {
        let put = requests
            .iter()
            .find(|r| r.url.path().ends_with(&format!("/actions/secrets/{}", name)))
            .unwrap_or_else(|| panic!("no PUT recorded for {}", name));
        let body: serde_json::Value = put.body_json().unwrap();
        let sealed = BASE64
            .decode(body["encrypted_value"].as_str().unwrap())
            .unwrap();
        assert_eq!(secret_key.unseal(&sealed).unwrap(), expected);
    }
}

#[tokio::test]
async fn set_all_missing_file_makes_no_requests() {
    let server = MockServer::start().await;

    let err = set_all::execute(
        &client(&server),
        "/definitely/missing.env",
        "https://github.com/acme/widgets",
    )
    .await
    .unwrap_err();

    assert!(matches!(err, Error::BatchFileNotFound(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn set_all_continues_past_a_failing_line() {
    let server = MockServer::start().await;
    let (public_key_b64, _secret_key) = keypair();

    Mock::given(method("GET"))
        .and(path("/repos/acme/widgets/actions/secrets/public-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "key_id": "k1",
            "key": public_key_b64
        })))
        .expect(2)
        .mount(&server)
        .await;

    // One line is rejected, the other stored; both PUTs still go out.
    Mock::given(method("PUT"))
        .and(path("/repos/acme/widgets/actions/secrets/GOOD"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/repos/acme/widgets/actions/secrets/BAD"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"message": "Validation Failed"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"GOOD=yes\nBAD=no\n").unwrap();

    set_all::execute(
        &client(&server),
        file.path().to_str().unwrap(),
        "https://github.com/acme/widgets",
    )
    .await
    .unwrap();
}
