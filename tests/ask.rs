use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use tower::util::ServiceExt;

use doc_chat::api::{create_router, AppState};
use doc_chat::application::ChatService;
use doc_chat::domain::{ports::CompletionService, DomainError, Message};
use doc_chat::infrastructure::AppConfig;

struct FixedAnswer(&'static str);

#[async_trait]
impl CompletionService for FixedAnswer {
    async fn complete(&self, _messages: &[Message]) -> Result<String, DomainError> {
        Ok(self.0.to_string())
    }
}

struct AlwaysFails;

#[async_trait]
impl CompletionService for AlwaysFails {
    async fn complete(&self, _messages: &[Message]) -> Result<String, DomainError> {
        Err(DomainError::external("completion service is down"))
    }
}

fn app_with(gateway: Arc<dyn CompletionService>) -> (Router, Arc<ChatService>) {
    let chat = Arc::new(ChatService::new(gateway, "system prompt", "corpus text"));
    let app = create_router(AppState::new(chat.clone(), AppConfig::default()));
    (app, chat)
}

fn ask_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/ask")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn ask_without_question_field_returns_400_and_no_mutation() {
    let (app, chat) = app_with(Arc::new(FixedAnswer("unused")));

    let response = app.oneshot(ask_request("{}")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert_eq!(json["status"], "fail");
    assert_eq!(json["message"], "No question provided.");

    // Transcript still holds only the two seed messages.
    assert_eq!(chat.history().await.len(), 2);
}

#[tokio::test]
async fn ask_with_empty_question_returns_400() {
    let (app, _chat) = app_with(Arc::new(FixedAnswer("unused")));

    let response = app.oneshot(ask_request(r#"{"question":""}"#)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn successful_ask_returns_the_answer_and_grows_the_transcript() {
    let (app, chat) = app_with(Arc::new(FixedAnswer("Y")));

    let response = app
        .oneshot(ask_request(r#"{"question":"What is X?"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["status"], "success");
    assert_eq!(json["answer"], "Y");

    let history = chat.history().await;
    assert_eq!(history.len(), 4);
    assert_eq!(history[2].content, "What is X?");
    assert_eq!(history[3].content, "Y");
}

#[tokio::test]
async fn two_sequential_questions_produce_six_messages_in_call_order() {
    let (app, chat) = app_with(Arc::new(FixedAnswer("answer")));

    for question in [r#"{"question":"first?"}"#, r#"{"question":"second?"}"#] {
        let response = app.clone().oneshot(ask_request(question)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let history = chat.history().await;
    assert_eq!(history.len(), 6);
    assert_eq!(history[2].content, "first?");
    assert_eq!(history[4].content, "second?");
}

#[tokio::test]
async fn completion_failure_returns_500_and_keeps_the_question() {
    let (app, chat) = app_with(Arc::new(AlwaysFails));

    let response = app
        .oneshot(ask_request(r#"{"question":"What is X?"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = response_json(response).await;
    assert_eq!(json["status"], "fail");
    assert!(json["message"]
        .as_str()
        .unwrap()
        .contains("completion service is down"));

    // The question stays appended without an answer.
    let history = chat.history().await;
    assert_eq!(history.len(), 3);
    assert_eq!(history[2].content, "What is X?");
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let (app, _chat) = app_with(Arc::new(FixedAnswer("unused")));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["status"], "healthy");
}
