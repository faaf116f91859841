//! Request handlers for `/analyse` and `/lemmatize`

use super::error::ApiError;
use super::AppState;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::Json;
use slovo_core::{Analyzer, Document, LemmatizedString, TextRequest};

/// `POST /analyse`: full annotated document
pub async fn analyse(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Document>, ApiError> {
    run(state, body?, |analyzer, request| {
        analyzer.analyse_request(request)
    })
    .await
}

/// `POST /lemmatize`: lemmas joined into one string
pub async fn lemmatize(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<LemmatizedString>, ApiError> {
    run(state, body?, |analyzer, request| {
        analyzer.lemmatize_request(request)
    })
    .await
}

/// Validate the body, then run `op` on the blocking pool
///
/// Pipeline calls are synchronous and may hold an interpreter lock, so
/// they stay off the async workers.
async fn run<T, F>(state: AppState, body: Bytes, op: F) -> Result<Json<T>, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&Analyzer, &TextRequest) -> slovo_core::Result<T> + Send + 'static,
{
    let request = TextRequest::from_bytes(&body)?;
    let analyzer = state.analyzer;

    let output = tokio::task::spawn_blocking(move || op(&*analyzer, &request))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(output))
}
