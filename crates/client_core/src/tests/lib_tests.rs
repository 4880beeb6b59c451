use super::*;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::post,
    Router,
};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::Mutex};

#[derive(Debug, Clone)]
struct SeenRequest {
    call: String,
    api_key: Option<String>,
    body: Value,
}

#[derive(Clone)]
struct MockState {
    hits: Arc<AtomicUsize>,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
    reply_status: StatusCode,
    reply_body: String,
}

async fn handle_generate(
    State(state): State<MockState>,
    Path(call): Path<String>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    state.hits.fetch_add(1, Ordering::SeqCst);
    state.seen.lock().await.push(SeenRequest {
        call,
        api_key: headers
            .get(API_KEY_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_str(&body).unwrap_or(Value::Null),
    });
    (state.reply_status, state.reply_body.clone())
}

async fn spawn_backend(reply_status: StatusCode, reply_body: String) -> (String, MockState) {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let state = MockState {
        hits: Arc::new(AtomicUsize::new(0)),
        seen: Arc::new(Mutex::new(Vec::new())),
        reply_status,
        reply_body,
    };
    let app = Router::new()
        .route("/models/:call", post(handle_generate))
        .with_state(state.clone());
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://{addr}/models"), state)
}

fn candidate_reply(text: &str) -> String {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] }
        }]
    })
    .to_string()
}

fn fetcher_for(base_url: &str) -> GeminiProfileFetcher {
    let settings = Settings {
        base_url: base_url.to_string(),
        ..Settings::default()
    };
    GeminiProfileFetcher::from_settings(&settings)
        .expect("fetcher")
        .with_key_source(ApiKeySource::Fixed("test-key".to_string()))
}

fn bob_profile_json() -> String {
    json!({
        "name": "Bob",
        "title": "Y",
        "industry": "Technology",
        "summary": "Bob builds Y.",
        "dashboard": "<div><h3>EXECUTIVE SUMMARY</h3></div>",
        "lessons": "<ul><li><strong>Focus</strong> <span>Keep going.</span></li></ul>",
        "sections": [
            { "title": "Professional Summary", "content": "<p>Bob leads Y.</p>" },
            { "title": "The Origin", "content": "<p>Born somewhere.</p>" }
        ],
        "references": [
            { "title": "Official Bio", "url": "https://example.com/bob" }
        ]
    })
    .to_string()
}

#[tokio::test]
async fn fetch_returns_parsed_profile_and_sends_structured_request() {
    let (base_url, state) = spawn_backend(StatusCode::OK, candidate_reply(&bob_profile_json())).await;
    let fetcher = fetcher_for(&base_url);

    let outcome = fetcher.fetch("Bob").await.expect("fetch ok");
    let profile = outcome.profile().expect("found profile");
    assert_eq!(profile.name, "Bob");
    assert_eq!(profile.sections.len(), 2);
    assert_eq!(profile.references[0].url, "https://example.com/bob");

    let seen = state.seen.lock().await;
    assert_eq!(seen.len(), 1);
    let request = &seen[0];
    assert_eq!(request.call, "gemini-2.5-flash:generateContent");
    assert_eq!(request.api_key.as_deref(), Some("test-key"));
    assert_eq!(
        request.body["generationConfig"]["responseMimeType"],
        "application/json"
    );
    assert_eq!(request.body["generationConfig"]["responseSchema"]["type"], "OBJECT");
    let temperature = request.body["generationConfig"]["temperature"]
        .as_f64()
        .expect("temperature");
    assert!((temperature - 0.1).abs() < 1e-6);
    let prompt = request.body["contents"][0]["parts"][0]["text"]
        .as_str()
        .expect("prompt text");
    assert!(prompt.contains("Bob"));
}

#[tokio::test]
async fn text_split_across_parts_is_concatenated() {
    let profile = bob_profile_json();
    let (head, tail) = profile.split_at(profile.len() / 2);
    let reply = json!({
        "candidates": [{ "content": { "parts": [{ "text": head }, { "text": tail }] } }]
    })
    .to_string();
    let (base_url, _state) = spawn_backend(StatusCode::OK, reply).await;

    let outcome = fetcher_for(&base_url).fetch("Bob").await.expect("fetch ok");
    assert_eq!(outcome.profile().map(|p| p.name.as_str()), Some("Bob"));
}

#[tokio::test]
async fn sentinel_reply_is_insufficient_not_an_error() {
    let sentinel = json!({
        "name": "Insufficient Data",
        "title": "",
        "industry": "",
        "summary": "",
        "dashboard": "",
        "lessons": "",
        "sections": [],
        "references": []
    })
    .to_string();
    let (base_url, _state) = spawn_backend(StatusCode::OK, candidate_reply(&sentinel)).await;

    let outcome = fetcher_for(&base_url).fetch("Nobody").await.expect("fetch ok");
    assert_eq!(outcome, ProfileOutcome::Insufficient);
}

#[tokio::test]
async fn sentinel_with_missing_fields_still_parses() {
    let (base_url, _state) =
        spawn_backend(StatusCode::OK, candidate_reply(r#"{"name":"Insufficient Data"}"#)).await;

    let outcome = fetcher_for(&base_url).fetch("Nobody").await.expect("fetch ok");
    assert!(outcome.is_insufficient());
}

#[tokio::test]
async fn missing_api_key_fails_before_any_request() {
    let (base_url, state) = spawn_backend(StatusCode::OK, candidate_reply(&bob_profile_json())).await;
    let settings = Settings {
        base_url,
        api_key_env: "EXEC_SUMMARY_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
        ..Settings::default()
    };
    let fetcher = GeminiProfileFetcher::from_settings(&settings).expect("fetcher");

    let err = fetcher.fetch("Bob").await.expect_err("missing key");
    assert!(err.is_configuration());
    assert!(err.to_string().contains("EXEC_SUMMARY_TEST_KEY_THAT_IS_NEVER_SET"));

    let blank = fetcher
        .with_key_source(ApiKeySource::Fixed("   ".to_string()))
        .fetch("Bob")
        .await
        .expect_err("blank key");
    assert!(blank.is_configuration());
    assert_eq!(state.hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn backend_error_envelope_is_surfaced() {
    let body = json!({
        "error": { "code": 503, "message": "model overloaded", "status": "UNAVAILABLE" }
    })
    .to_string();
    let (base_url, _state) = spawn_backend(StatusCode::SERVICE_UNAVAILABLE, body).await;

    let err = fetcher_for(&base_url).fetch("Bob").await.expect_err("backend error");
    assert_eq!(
        err,
        ServiceError::Backend {
            status: 503,
            message: "UNAVAILABLE: model overloaded".to_string(),
        }
    );
}

#[tokio::test]
async fn empty_candidates_map_to_empty_response() {
    let (base_url, _state) = spawn_backend(StatusCode::OK, r#"{"candidates":[]}"#.to_string()).await;

    let err = fetcher_for(&base_url).fetch("Bob").await.expect_err("empty");
    assert_eq!(err, ServiceError::EmptyResponse);
}

#[tokio::test]
async fn unparseable_profile_text_is_malformed() {
    let (base_url, _state) =
        spawn_backend(StatusCode::OK, candidate_reply("this is not json")).await;

    let err = fetcher_for(&base_url).fetch("Bob").await.expect_err("malformed");
    assert!(matches!(err, ServiceError::Malformed(_)));
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let err = fetcher_for(&format!("http://{addr}/models"))
        .fetch("Bob")
        .await
        .expect_err("unreachable");
    assert!(matches!(err, ServiceError::Transport(_)));
}

#[test]
fn invalid_base_url_is_a_configuration_error() {
    let settings = Settings {
        base_url: "not a url".to_string(),
        ..Settings::default()
    };
    let err = GeminiProfileFetcher::from_settings(&settings)
        .err()
        .expect("invalid url");
    assert!(err.is_configuration());
}

#[test]
fn fixed_key_errors_do_not_point_at_the_environment() {
    let err = ApiKeySource::Fixed("  ".to_string())
        .resolve()
        .expect_err("blank fixed key");
    assert_eq!(
        err,
        ServiceError::Configuration("configured API key is blank".to_string())
    );
    assert!(!err.to_string().contains("environment"));

    assert_eq!(
        ApiKeySource::Fixed(" key-123 ".to_string()).resolve(),
        Ok("key-123".to_string())
    );
}
