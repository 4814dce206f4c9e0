use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Errors a handler can produce. The three unsupported-language variants
/// carry the exact message the original backend returned for each field.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Source language not supported")]
    SourceLanguage,
    #[error("Target language not supported")]
    TargetLanguage,
    #[error("Language not supported")]
    Language,
    #[error(transparent)]
    Provider(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Existing clients expect validation failures as a 200 with an
        // `{"error": ...}` body, not a 4xx. Keep that contract.
        let status = match self {
            ApiError::SourceLanguage | ApiError::TargetLanguage | ApiError::Language => {
                StatusCode::OK
            }
            ApiError::Provider(ref e) => {
                error!("provider call failed: {e:#}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unsupported_language_is_a_200_error_body() {
        let response = ApiError::Language.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": "Language not supported" }));
    }

    #[tokio::test]
    async fn provider_failure_is_a_500() {
        let response = ApiError::Provider(anyhow::anyhow!("upstream down")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn field_specific_messages() {
        assert_eq!(
            ApiError::SourceLanguage.to_string(),
            "Source language not supported"
        );
        assert_eq!(
            ApiError::TargetLanguage.to_string(),
            "Target language not supported"
        );
    }
}
