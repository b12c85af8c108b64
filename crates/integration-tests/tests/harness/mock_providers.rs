//! Mock provider backend for integration tests
//!
//! One server stands in for all three upstreams: the Whisper-style
//! transcription endpoint, the emotion classifier and the chat completion
//! endpoint used for story generation.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Multipart, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

use super::config::TEST_KEY;

/// How the classifier endpoint answers
#[derive(Debug, Clone)]
pub enum EmotionMode {
    /// Return these `(label, score)` pairs in the nested batch shape
    Scores(Vec<(&'static str, f64)>),
    /// Return this status with a plain-text body
    Status(u16),
    /// Sleep before answering with a single neutral score
    Slow(Duration),
}

/// What the transcription endpoint received
#[derive(Debug, Clone, Default)]
pub struct ReceivedAudio {
    pub model: String,
    pub language: String,
    pub filename: String,
    pub bytes: usize,
}

/// Builder for [`MockProviders`]
pub struct MockProvidersBuilder {
    transcript: Option<String>,
    emotion: EmotionMode,
    story: Option<String>,
}

impl MockProvidersBuilder {
    /// Text returned by transcription
    pub fn transcript(mut self, text: &str) -> Self {
        self.transcript = Some(text.to_owned());
        self
    }

    /// Make transcription fail with 500
    pub fn failing_transcription(mut self) -> Self {
        self.transcript = None;
        self
    }

    pub fn emotion(mut self, mode: EmotionMode) -> Self {
        self.emotion = mode;
        self
    }

    /// Make story generation fail with 500
    pub fn failing_story(mut self) -> Self {
        self.story = None;
        self
    }

    pub async fn start(self) -> anyhow::Result<MockProviders> {
        let state = Arc::new(MockState {
            transcription_count: AtomicU32::new(0),
            emotion_count: AtomicU32::new(0),
            completion_count: AtomicU32::new(0),
            transcript: self.transcript,
            emotion: self.emotion,
            story: self.story,
            last_audio: Mutex::new(None),
            last_classified: Mutex::new(None),
            last_prompt: Mutex::new(None),
        });

        let app = Router::new()
            .route("/v1/audio/transcriptions", routing::post(handle_transcription))
            .route("/v1/chat/completions", routing::post(handle_chat_completions))
            .route("/models/emotion", routing::post(handle_emotion))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(MockProviders { addr, shutdown, state })
    }
}

/// Mock upstream providers with request counters
pub struct MockProviders {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    transcription_count: AtomicU32,
    emotion_count: AtomicU32,
    completion_count: AtomicU32,
    /// `None` fails the endpoint
    transcript: Option<String>,
    emotion: EmotionMode,
    /// `None` fails the endpoint
    story: Option<String>,
    last_audio: Mutex<Option<ReceivedAudio>>,
    last_classified: Mutex<Option<String>>,
    last_prompt: Mutex<Option<String>>,
}

impl MockProviders {
    /// Builder with a happy-path transcript, ranked emotions and story
    pub fn builder() -> MockProvidersBuilder {
        MockProvidersBuilder {
            transcript: Some("I was walking through a forest of glass trees".to_owned()),
            emotion: EmotionMode::Scores(vec![("sadness", 0.4), ("joy", 0.9), ("fear", 0.1)]),
            story: Some("The glass trees sang as she passed.".to_owned()),
        }
    }

    /// Start with the happy-path defaults
    pub async fn start() -> anyhow::Result<Self> {
        Self::builder().start().await
    }

    /// Base URL for the OpenAI-compatible endpoints
    ///
    /// Includes `/v1` since providers append paths like `/chat/completions`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Full URL of the classifier endpoint
    pub fn emotion_url(&self) -> String {
        format!("http://{}/models/emotion", self.addr)
    }

    pub fn transcription_count(&self) -> u32 {
        self.state.transcription_count.load(Ordering::Relaxed)
    }

    pub fn emotion_count(&self) -> u32 {
        self.state.emotion_count.load(Ordering::Relaxed)
    }

    pub fn completion_count(&self) -> u32 {
        self.state.completion_count.load(Ordering::Relaxed)
    }

    /// The last audio upload received by the transcription endpoint
    pub fn last_audio(&self) -> Option<ReceivedAudio> {
        self.state.last_audio.lock().unwrap().clone()
    }

    /// The last text sent to the classifier
    pub fn last_classified(&self) -> Option<String> {
        self.state.last_classified.lock().unwrap().clone()
    }

    /// The last user prompt sent for story generation
    pub fn last_prompt(&self) -> Option<String> {
        self.state.last_prompt.lock().unwrap().clone()
    }
}

impl Drop for MockProviders {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

fn authorized(headers: &HeaderMap, expected: &str) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == expected)
}

async fn handle_transcription(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    state.transcription_count.fetch_add(1, Ordering::Relaxed);

    if !authorized(&headers, &format!("Bearer {TEST_KEY}")) {
        return (StatusCode::UNAUTHORIZED, "invalid api key").into_response();
    }

    let mut received = ReceivedAudio::default();

    while let Ok(Some(field)) = multipart.next_field().await {
        match field.name().unwrap_or_default().to_owned().as_str() {
            "file" => {
                received.filename = field.file_name().unwrap_or_default().to_owned();
                received.bytes = field.bytes().await.map(|b| b.len()).unwrap_or_default();
            }
            "model" => received.model = field.text().await.unwrap_or_default(),
            "language" => received.language = field.text().await.unwrap_or_default(),
            _ => {}
        }
    }

    *state.last_audio.lock().unwrap() = Some(received);

    match &state.transcript {
        Some(text) => Json(serde_json::json!({ "text": text })).into_response(),
        None => (StatusCode::INTERNAL_SERVER_ERROR, "transcription backend exploded").into_response(),
    }
}

async fn handle_emotion(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Response {
    state.emotion_count.fetch_add(1, Ordering::Relaxed);

    if !authorized(&headers, &format!("Bearer {TEST_KEY}")) {
        return (StatusCode::UNAUTHORIZED, "invalid token").into_response();
    }

    *state.last_classified.lock().unwrap() = body["inputs"].as_str().map(str::to_owned);

    match &state.emotion {
        EmotionMode::Scores(scores) => {
            let batch: Vec<_> = scores
                .iter()
                .map(|(label, score)| serde_json::json!({ "label": label, "score": score }))
                .collect();
            Json(serde_json::json!([batch])).into_response()
        }
        EmotionMode::Status(status) => (
            StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            "model is loading",
        )
            .into_response(),
        EmotionMode::Slow(delay) => {
            tokio::time::sleep(*delay).await;
            Json(serde_json::json!([[{ "label": "neutral", "score": 1.0 }]])).into_response()
        }
    }
}

async fn handle_chat_completions(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Response {
    state.completion_count.fetch_add(1, Ordering::Relaxed);

    if !authorized(&headers, &format!("Bearer {TEST_KEY}")) {
        return (StatusCode::UNAUTHORIZED, "invalid api key").into_response();
    }

    *state.last_prompt.lock().unwrap() = body["messages"][1]["content"].as_str().map(str::to_owned);

    match &state.story {
        Some(story) => Json(serde_json::json!({
            "id": "chatcmpl-mock",
            "object": "chat.completion",
            "model": body["model"],
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": story },
                "finish_reason": "stop"
            }]
        }))
        .into_response(),
        None => (StatusCode::INTERNAL_SERVER_ERROR, "story backend exploded").into_response(),
    }
}
