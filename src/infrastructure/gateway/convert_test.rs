use anyhow::Result;

use super::ChoiceMessageResponse;
use super::ChoiceResponse;
use super::Convert;
use super::ConvertResponse;
use crate::domain::models::ConvertPayload;
use crate::domain::models::Gateway;
use crate::domain::models::Outline;

impl Convert {
    fn with_url(url: String) -> Convert {
        return Convert {
            url,
            timeout: "200".to_string(),
        };
    }
}

fn reply_body(content: &str) -> Result<String> {
    let body = serde_json::to_string(&ConvertResponse {
        error: None,
        choices: vec![ChoiceResponse {
            message: ChoiceMessageResponse {
                content: content.to_string(),
            },
        }],
    })?;

    return Ok(body);
}

#[tokio::test]
async fn it_successfully_health_checks() {
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", "/api/health").with_status(200).create();

    let gateway = Convert::with_url(server.url());
    let res = gateway.health_check().await;

    assert!(res.is_ok());
    mock.assert();
}

#[tokio::test]
async fn it_fails_health_checks() {
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", "/api/health").with_status(500).create();

    let gateway = Convert::with_url(server.url());
    let res = gateway.health_check().await;

    assert!(res.is_err());
    mock.assert();
}

#[tokio::test]
async fn it_converts_text_payloads() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/convert")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "text": "hello"
        })))
        .with_status(200)
        .with_body(reply_body("Storytelling: Open with the blackout.")?)
        .create();

    let gateway = Convert::with_url(server.url());
    let res = gateway.convert(&ConvertPayload::text("hello")).await?;
    mock.assert();

    assert_eq!(res, "Storytelling: Open with the blackout.");
    return Ok(());
}

#[tokio::test]
async fn it_sends_the_reordered_steps() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/convert")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "text": "steps_reordered",
            "steps": [
                { "position": 1, "name": "Hook" },
                { "position": 2, "name": "Exploration" },
                { "position": 3, "name": "Resolution" }
            ]
        })))
        .with_status(200)
        .with_body(reply_body("Got it, the order is updated.")?)
        .create();

    let gateway = Convert::with_url(server.url());
    let payload = ConvertPayload::steps_reordered(Outline::default().steps());
    let res = gateway.convert(&payload).await?;
    mock.assert();

    assert_eq!(res, "Got it, the order is updated.");
    return Ok(());
}

#[tokio::test]
async fn it_fails_on_non_success_statuses() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/convert")
        .with_status(502)
        .with_body("upstream exploded")
        .create();

    let gateway = Convert::with_url(server.url());
    let res = gateway.convert(&ConvertPayload::text("hello")).await;
    mock.assert();

    let err = res.unwrap_err().to_string();
    assert!(err.contains("502"));
    assert!(err.contains("upstream exploded"));
}

#[tokio::test]
async fn it_fails_on_an_error_field_in_a_success_body() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/convert")
        .with_status(200)
        .with_body(r#"{"error": "model overloaded"}"#)
        .create();

    let gateway = Convert::with_url(server.url());
    let res = gateway.convert(&ConvertPayload::text("hello")).await;
    mock.assert();

    assert_eq!(res.unwrap_err().to_string(), "model overloaded");
}

#[tokio::test]
async fn it_substitutes_a_placeholder_for_empty_replies() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/convert")
        .with_status(200)
        .with_body(r#"{"choices": []}"#)
        .create();

    let gateway = Convert::with_url(server.url());
    let res = gateway.convert(&ConvertPayload::text("hello")).await?;
    mock.assert();

    assert_eq!(res, "(no content)");
    return Ok(());
}
