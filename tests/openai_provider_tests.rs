//! OpenAI Chat Completions provider against a mocked endpoint.

mod common;

use common::config_for;
use parley::agent::ConversationAgent;
use parley::config::ServiceKind;
use parley::error::ParleyError;
use parley::provider::openai::OpenAiProvider;
use parley::provider::{ModelProvider, ProviderRequest};
use parley::tools::ToolRegistry;
use parley::types::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_for(server: &MockServer) -> OpenAiProvider {
    OpenAiProvider::new("gpt-4o".into(), "test-key".into(), Some(server.uri()))
}

fn request_with_tools() -> ProviderRequest {
    ProviderRequest {
        messages: vec![ChatMessage::system("sys"), ChatMessage::user("weather in Rome?")],
        settings: GenerationSettings::default(),
        tools: ToolRegistry::new(&parley::config::ChatConfig::new()).describe_tools(),
    }
}

#[tokio::test]
async fn parses_tool_calls_with_raw_arguments() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "gpt-4o",
            "temperature": 0.7,
            "tool_choice": "auto",
            "messages": [
                { "role": "system", "content": "sys" },
                { "role": "user", "content": "weather in Rome?" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-1",
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [{
                        "id": "call_abc",
                        "type": "function",
                        "function": { "name": "get_weather", "arguments": "{\"city\":\"Rome\"}" }
                    }]
                },
                "finish_reason": "tool_calls"
            }],
            "usage": { "prompt_tokens": 50, "completion_tokens": 12, "total_tokens": 62 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = provider_for(&server)
        .complete(&request_with_tools())
        .await
        .expect("completion");

    assert_eq!(response.text, None);
    assert_eq!(
        response.tool_calls,
        vec![ToolCallRequest::new("call_abc", "get_weather", "{\"city\":\"Rome\"}")]
    );
    assert_eq!(response.usage.total_tokens, 62);
}

#[tokio::test]
async fn advertises_all_tools_as_functions() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "ok" }, "finish_reason": "stop" }]
        })))
        .mount(&server)
        .await;

    provider_for(&server)
        .complete(&request_with_tools())
        .await
        .expect("completion");

    let received = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    let names: Vec<&str> = body["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["function"]["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "get_weather",
            "get_news",
            "get_system_metrics",
            "get_current_time_and_date",
            "ask_wolfram"
        ]
    );
    assert!(body["tools"].as_array().unwrap().iter().all(|t| t["type"] == "function"));
}

#[tokio::test]
async fn unauthorized_maps_to_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "message": "Incorrect API key provided", "type": "invalid_request_error" }
        })))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .complete(&request_with_tools())
        .await
        .unwrap_err();

    match err {
        ParleyError::Authentication(msg) => assert_eq!(msg, "Incorrect API key provided"),
        other => panic!("expected Authentication, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_choices_is_an_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .complete(&request_with_tools())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("No choices"), "{err}");
}

#[tokio::test]
async fn agent_end_to_end_through_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{
                "message": {
                    "content": null,
                    "tool_calls": [{
                        "id": "call_1",
                        "type": "function",
                        "function": { "name": "get_weather", "arguments": "{\"city\": \"London\"}" }
                    }]
                },
                "finish_reason": "tool_calls"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "main": { "temp": 15 },
            "weather": [{ "description": "clear sky" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server.uri())
        .with_api_key(ServiceKind::OpenAi, "test-key")
        .with_base_url(ServiceKind::OpenAi, server.uri());
    let mut agent = ConversationAgent::from_config(&config).expect("agent");

    let reply = agent.process_message("Weather in London?").await;

    assert_eq!(reply, "Current weather in London: 15°C, clear sky");
}

#[tokio::test]
async fn any_success_status_is_accepted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(203).set_body_json(json!({
            "choices": [{ "message": { "content": "via proxy" } }]
        })))
        .mount(&server)
        .await;

    let response = provider_for(&server)
        .complete(&request_with_tools())
        .await
        .expect("completion");

    assert_eq!(response.text.as_deref(), Some("via proxy"));
}
