use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::domain::DomainError;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    // Option so that a missing field is our 400, not a deserialization
    // rejection with a different body shape.
    pub question: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub status: &'static str,
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct FailResponse {
    pub status: &'static str,
    pub message: String,
}

fn fail(status: StatusCode, message: String) -> (StatusCode, Json<FailResponse>) {
    (
        status,
        Json(FailResponse {
            status: "fail",
            message,
        }),
    )
}

pub async fn ask_handler(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, (StatusCode, Json<FailResponse>)> {
    let question = request.question.unwrap_or_default();

    match state.chat.ask(&question).await {
        Ok(answer) => Ok(Json(AskResponse {
            status: "success",
            answer,
        })),
        Err(DomainError::Validation(message)) => Err(fail(StatusCode::BAD_REQUEST, message)),
        Err(e) => {
            tracing::error!(error = %e, "completion call failed");
            Err(fail(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}
