//! AI designer end to end: studio gateway, client and customizer session.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::time::Duration;

use solecraft_client::{Action, ClientError, CustomizerError};
use solecraft_core::{GateState, Material, Part, SneakerConfiguration};
use solecraft_integration_tests::TestServer;
use solecraft_studio::gemini::GeminiError;

const STEALTH: &str = r##"{"sole":"#000000","upper":"#000000","laces":"#000000","logo":"#1a1a1a"}"##;

#[tokio::test]
async fn test_stealth_scheme_returned_verbatim() {
    let server = TestServer::start().await;
    server.generator.push_reply(STEALTH);

    let scheme = server
        .client_for(solecraft_core::UserId::generate())
        .suggest_colors("classic all-black stealth mode")
        .await
        .unwrap();

    assert_eq!(scheme.sole.as_str(), "#000000");
    assert_eq!(scheme.upper.as_str(), "#000000");
    assert_eq!(scheme.laces.as_str(), "#000000");
    assert_eq!(scheme.logo.as_str(), "#1a1a1a");

    let prompts = server.generator.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(
        prompts
            .first()
            .unwrap()
            .ends_with("User Request: classic all-black stealth mode")
    );
}

#[tokio::test]
async fn test_fenced_reply_accepted() {
    let server = TestServer::start().await;
    server.generator.push_reply(
        "```json\n{\"sole\":\"#0D0221\",\"upper\":\"#FF00FF\",\"laces\":\"#00FFFF\",\"logo\":\"#F9F871\"}\n```",
    );

    let session = server.customizer();
    let scheme = session.ask_ai_designer("cyberpunk").await.unwrap();

    // Hex case is kept as the model wrote it.
    assert_eq!(scheme.upper.as_str(), "#FF00FF");
    assert_eq!(session.configuration().color(Part::Upper).as_str(), "#FF00FF");
}

#[tokio::test]
async fn test_reply_without_json_is_invalid_response() {
    let server = TestServer::start().await;
    server.generator.push_reply("Sorry, I can only talk about sneakers.");

    let session = server.customizer();
    let before = session.store();

    let err = session.ask_ai_designer("anything").await.unwrap_err();
    match err {
        CustomizerError::Client(ClientError::Api { status, message }) => {
            assert_eq!(status, 502);
            assert_eq!(message, "Invalid AI response");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(session.store(), before);
}

#[tokio::test]
async fn test_missing_color_fails_instead_of_substituting() {
    let server = TestServer::start().await;
    server
        .generator
        .push_reply(r##"{"sole":"#111111","upper":"#222222","laces":"#333333"}"##);

    let session = server.customizer();
    let err = session.ask_ai_designer("no logo").await.unwrap_err();

    assert!(matches!(
        err,
        CustomizerError::Client(ClientError::Api { status: 502, .. })
    ));
    assert_eq!(session.configuration(), SneakerConfiguration::builtin_default());
}

#[tokio::test]
async fn test_suggestion_merges_colors_only() {
    let server = TestServer::start().await;
    server.generator.push_reply(STEALTH);

    let session = server.customizer();
    session.set_material(Material::Shiny);
    session.set_custom_text("NIGHT").unwrap();

    session.ask_ai_designer("stealth").await.unwrap();

    let config = session.configuration();
    assert_eq!(config.logo.as_str(), "#1a1a1a");
    assert_eq!(config.material, Material::Shiny);
    assert_eq!(config.text(), "NIGHT");
}

#[tokio::test]
async fn test_rate_limit_distinguishable_from_server_error() {
    let server = TestServer::start().await;
    server.generator.push(Err(GeminiError::RateLimited(30)));
    server.generator.push(Err(GeminiError::MissingApiKey));

    let session = server.customizer();

    let limited = session.ask_ai_designer("first").await.unwrap_err();
    assert!(matches!(
        limited,
        CustomizerError::Client(ClientError::RateLimited(_))
    ));

    let unconfigured = session.ask_ai_designer("second").await.unwrap_err();
    match unconfigured {
        CustomizerError::Client(err) => {
            assert_eq!(err.status(), Some(500));
            assert!(err.is_server_error());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_quota_exhaustion_reported() {
    let server = TestServer::start().await;
    server
        .generator
        .push(Err(GeminiError::QuotaExceeded("billing".to_string())));

    let err = server.customizer().ask_ai_designer("x").await.unwrap_err();
    match err {
        CustomizerError::Client(ClientError::QuotaExceeded(message)) => {
            assert_eq!(message, "AI quota exceeded. Please add credits to continue.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_second_request_while_pending_is_busy() {
    let server = TestServer::start().await;
    server.generator.hold();
    server.generator.push_reply(STEALTH);

    let session = Arc::new(server.customizer());
    let first = tokio::spawn({
        let session = Arc::clone(&session);
        async move { session.ask_ai_designer("stealth").await }
    });

    tokio::time::timeout(Duration::from_secs(5), async {
        while server.generator.prompts().is_empty() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .unwrap();
    assert_eq!(session.gate_state(Action::AskAi), GateState::Pending);

    let err = session.ask_ai_designer("again").await.unwrap_err();
    assert!(matches!(err, CustomizerError::Busy(Action::AskAi)));
    assert_eq!(server.generator.prompts().len(), 1);

    server.generator.release();
    first.await.unwrap().unwrap();

    assert_eq!(session.gate_state(Action::AskAi), GateState::Idle);
    assert_eq!(session.configuration().logo.as_str(), "#1a1a1a");
}

#[tokio::test]
async fn test_cors_headers_on_error_response() {
    let server = TestServer::start().await;

    let response = reqwest::Client::new()
        .post(server.base_url.join("api/ai-designer").unwrap())
        .header("origin", "https://shop.example")
        .header("content-type", "application/json")
        .body(r#"{"prompt":"   "}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    assert!(server.generator.prompts().is_empty());
}
