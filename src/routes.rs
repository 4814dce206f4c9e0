use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::config::APP_NAME;
use crate::error::ApiError;
use crate::languages::{self, SUPPORTED_LANGUAGES};
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/", get(health_check))
        .route("/languages", get(get_languages))
        // AI capability stubs
        .route("/translate", post(translate))
        .route("/learn", post(learn))
        .route("/tts", post(text_to_speech))
        .route("/stt", post(speech_to_text))
}

// ---- Request bodies ----

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub source_language: String,
    pub target_language: String,
    pub text: String,
    #[serde(default)]
    pub explain: bool,
}

#[derive(Debug, Deserialize)]
pub struct LearnRequest {
    pub language: String,
    pub user_message: String,
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "Beginner".to_string()
}

#[derive(Debug, Deserialize)]
pub struct VoiceRequest {
    pub language: String,
    pub text: String,
}

// ---- Response bodies ----

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub app: &'static str,
    pub languages_supported: usize,
}

#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub languages: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub source_language: String,
    pub target_language: String,
    pub original_text: String,
    pub translated_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LearnResponse {
    pub language: String,
    pub level: String,
    pub user_input: String,
    pub ai_reply: String,
    pub tip: String,
}

#[derive(Debug, Serialize)]
pub struct TtsResponse {
    pub message: &'static str,
    pub language: String,
    pub audio_url: String,
}

#[derive(Debug, Serialize)]
pub struct SttResponse {
    pub message: &'static str,
    pub text: String,
}

// ---- Handlers ----

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "running",
        app: APP_NAME,
        languages_supported: SUPPORTED_LANGUAGES.len(),
    })
}

async fn get_languages() -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        languages: SUPPORTED_LANGUAGES.to_vec(),
    })
}

async fn translate(
    State(state): State<AppState>,
    Json(req): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    if !languages::is_supported(&req.source_language) {
        return Err(ApiError::SourceLanguage);
    }
    if !languages::is_supported(&req.target_language) {
        return Err(ApiError::TargetLanguage);
    }

    let translated_text = state
        .translator
        .translate(&req.source_language, &req.target_language, &req.text)
        .await?;

    let explanation = req.explain.then(|| {
        state
            .translator
            .explanation(&req.source_language, &req.target_language)
    });

    Ok(Json(TranslateResponse {
        source_language: req.source_language,
        target_language: req.target_language,
        original_text: req.text,
        translated_text,
        explanation,
    }))
}

async fn learn(
    State(state): State<AppState>,
    Json(req): Json<LearnRequest>,
) -> Result<Json<LearnResponse>, ApiError> {
    if !languages::is_supported(&req.language) {
        return Err(ApiError::Language);
    }

    let turn = state
        .tutor
        .reply(&req.language, &req.level, &req.user_message)
        .await?;

    Ok(Json(LearnResponse {
        language: req.language,
        level: req.level,
        user_input: req.user_message,
        ai_reply: turn.reply,
        tip: turn.tip,
    }))
}

async fn text_to_speech(
    State(state): State<AppState>,
    Json(req): Json<VoiceRequest>,
) -> Result<Json<TtsResponse>, ApiError> {
    if !languages::is_supported(&req.language) {
        return Err(ApiError::Language);
    }

    let audio = state.synthesizer.synthesize(&req.language, &req.text).await?;

    Ok(Json(TtsResponse {
        message: "TTS generated successfully",
        language: req.language,
        audio_url: audio.audio_url,
    }))
}

async fn speech_to_text(State(state): State<AppState>) -> Result<Json<SttResponse>, ApiError> {
    let text = state.recognizer.transcribe().await?;

    Ok(Json(SttResponse {
        message: "Speech converted to text",
        text,
    }))
}
