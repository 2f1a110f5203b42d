use mockito::Matcher;
use tokenwright::{AcquireConfig, AcquireError, TokenClient, acquire_token};

fn client_credentials<'a>(secret: &'a str) -> Vec<(&'static str, &'a str)> {
    vec![
        ("grant_type", "client_credentials"),
        ("client_id", "billing-service"),
        ("client_secret", secret),
        ("scope", "api://billing/.default"),
    ]
}

#[test]
fn test_success_returns_body_verbatim() {
    let mut server = mockito::Server::new();
    let body = "{\"token_type\":\"Bearer\",\"expires_in\":3599,\"access_token\":\"eyJ0eXAi.eyJhdWQi.c2lnbmF0\"}\n";
    let mock = server
        .mock("POST", "/tenant/oauth2/v2.0/token")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "client_credentials".into()),
            Matcher::UrlEncoded("client_id".into(), "billing-service".into()),
            Matcher::UrlEncoded("client_secret".into(), "p@ss w0rd".into()),
            Matcher::UrlEncoded("scope".into(), "api://billing/.default".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create();

    let url = format!("{}/tenant/oauth2/v2.0/token", server.url());
    let client = TokenClient::new(&AcquireConfig::default()).unwrap();
    let received = client
        .acquire_token(&url, &client_credentials("p@ss w0rd"))
        .unwrap();

    mock.assert();
    assert_eq!(received, body);
}

#[test]
fn test_content_length_matches_encoded_form() {
    let mut server = mockito::Server::new();
    let form = client_credentials("secret");
    let encoded_len = "grant_type=client_credentials&client_id=billing-service&client_secret=secret&scope=api%3A%2F%2Fbilling%2F.default".len();

    let mock = server
        .mock("POST", "/token")
        .match_header("content-length", encoded_len.to_string().as_str())
        .with_status(200)
        .with_body("ok")
        .create();

    let url = format!("{}/token", server.url());
    acquire_token(&url, &form).unwrap();

    mock.assert();
}

#[test]
fn test_server_error_is_reported() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/token")
        .with_status(500)
        .with_body("upstream unavailable")
        .create();

    let url = format!("{}/token", server.url());
    let err = acquire_token(&url, &client_credentials("secret")).unwrap_err();

    mock.assert();
    assert_eq!(err.status_code(), Some(500));
    match err {
        AcquireError::UnexpectedStatus { code, body, .. } => {
            assert_eq!(code, 500);
            assert_eq!(body, "upstream unavailable");
        }
        other => panic!("expected UnexpectedStatus, got {:?}", other),
    }
}

#[test]
fn test_single_attempt_per_call() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/token")
        .with_status(503)
        .expect(1)
        .create();

    let url = format!("{}/token", server.url());
    assert!(acquire_token(&url, &client_credentials("secret")).is_err());

    mock.assert();
}

#[test]
fn test_unreachable_endpoint_hides_secret() {
    let err = acquire_token(
        "http://127.0.0.1:1/oauth2/token",
        &client_credentials("do-not-print-me"),
    )
    .unwrap_err();

    assert!(err.is_transport());
    let message = err.to_string();
    assert!(message.contains("http://127.0.0.1:1/oauth2/token"));
    assert!(message.contains("client_secret=***"));
    assert!(!message.contains("do-not-print-me"));
}
