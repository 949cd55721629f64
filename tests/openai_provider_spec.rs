//! Live vocabulary provider against a local chat-completion stub.

use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, http::StatusCode, routing::post, Json, Router};
use parking_lot::Mutex;
use picto_lingua::config::OpenAiSettings;
use picto_lingua::vocabulary::{OpenAiProvider, VocabularyError, VocabularyProvider};
use serde_json::{json, Value};

/// What the stub answers with, plus every request body it received.
#[derive(Clone)]
struct Stub {
    status: StatusCode,
    content: Option<String>,
    requests: Arc<Mutex<Vec<(Option<String>, Value)>>>,
}

async fn chat_completions(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let auth = headers
        .get("authorization")
        .and_then(|h| h.to_str().ok())
        .map(str::to_string);
    stub.requests.lock().push((auth, body));

    let response = json!({
        "choices": [{ "message": { "role": "assistant", "content": stub.content } }]
    });
    (stub.status, Json(response))
}

/// Serve the stub on an ephemeral port and return a provider pointed at it.
async fn provider_for(stub: Stub) -> OpenAiProvider {
    let app = Router::new()
        .route("/v1/chat/completions", post(chat_completions))
        .with_state(stub);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    OpenAiProvider::new(OpenAiSettings {
        api_key: "sk-test".to_string(),
        base_url: format!("http://{}/v1/", addr),
        model: "gpt-test".to_string(),
    })
}

fn stub(status: StatusCode, content: Option<&str>) -> Stub {
    Stub {
        status,
        content: content.map(str::to_string),
        requests: Arc::new(Mutex::new(Vec::new())),
    }
}

mod generate {
    use super::*;

    #[tokio::test]
    async fn parses_fenced_json_content() {
        let stub = stub(
            StatusCode::OK,
            Some("```json\n[{\"word\":\"runway\",\"definition\":\"strip for planes\",\"example\":\"The plane left the runway.\"}]\n```"),
        );
        let provider = provider_for(stub).await;

        let items = provider.generate("airport", 1, "english").await.unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].word, "runway");
        assert_eq!(items[0].example.as_deref(), Some("The plane left the runway."));
    }

    #[tokio::test]
    async fn never_returns_more_than_requested() {
        let words: Vec<Value> = (0..25)
            .map(|i| json!({ "word": format!("word{}", i), "definition": "a cafe thing" }))
            .collect();
        let content = Value::Array(words).to_string();
        let provider = provider_for(stub(StatusCode::OK, Some(&content))).await;

        let items = provider.generate("cafe", 10, "english").await.unwrap();

        assert_eq!(items.len(), 10);
        assert_eq!(items[0].word, "word0");
        assert_eq!(items[9].word, "word9");
    }

    #[tokio::test]
    async fn sends_model_prompt_and_bearer_key() {
        let stub = stub(StatusCode::OK, Some("[]"));
        let requests = stub.requests.clone();
        let provider = provider_for(stub).await;

        provider.generate("kitchen", 4, "dutch").await.unwrap();

        let requests = requests.lock();
        assert_eq!(requests.len(), 1);
        let (auth, body) = &requests[0];
        assert_eq!(auth.as_deref(), Some("Bearer sk-test"));
        assert_eq!(body["model"], "gpt-test");
        assert_eq!(body["messages"][0]["role"], "system");
        let prompt = body["messages"][1]["content"].as_str().unwrap();
        assert!(prompt.starts_with("Generate 4 vocabulary words related to the theme \"kitchen\""));
        assert!(prompt.contains("dutch_word"));
    }

    #[tokio::test]
    async fn error_status_is_upstream_failure() {
        let provider = provider_for(stub(StatusCode::TOO_MANY_REQUESTS, None)).await;

        let err = provider.generate("park", 5, "english").await.unwrap_err();

        assert!(matches!(err, VocabularyError::UpstreamFailure(msg) if msg.contains("429")));
    }

    #[tokio::test]
    async fn missing_content_is_upstream_failure() {
        let provider = provider_for(stub(StatusCode::OK, None)).await;

        let err = provider.generate("park", 5, "english").await.unwrap_err();

        assert!(matches!(err, VocabularyError::UpstreamFailure(_)));
    }

    #[tokio::test]
    async fn prose_content_is_upstream_failure() {
        let provider = provider_for(stub(StatusCode::OK, Some("Here you go: bench, tree"))).await;

        let err = provider.generate("park", 5, "english").await.unwrap_err();

        assert!(matches!(err, VocabularyError::UpstreamFailure(_)));
    }

    #[tokio::test]
    async fn unreachable_generator_is_upstream_failure() {
        let provider = OpenAiProvider::new(OpenAiSettings {
            api_key: "sk-test".to_string(),
            base_url: "http://127.0.0.1:1/v1".to_string(),
            model: "gpt-test".to_string(),
        });

        let err = provider.generate("park", 5, "english").await.unwrap_err();

        assert!(matches!(err, VocabularyError::UpstreamFailure(_)));
    }
}
