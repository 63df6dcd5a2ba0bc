//! Axum surface: the form page, the generate action, and the download
//! endpoint.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    Router,
    extract::{Form, State},
    http::header::{self, HeaderName},
    response::Html,
    routing::{get, post},
};
use drafter::{DraftRequest, ExportArtifact, PostGenerator};
use llm::{Completer, OpenAiClient};
use serde::Deserialize;
use tokio_stream::StreamExt;
use tracing::{error, info};

use crate::Settings;
use crate::page::{GENERIC_FAILURE, Outcome, PageView, render_page, validation_message};

/// State shared across handlers. The generator is the only shared value and
/// it is immutable; everything else lives per request.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<PostGenerator>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        let completer: Arc<dyn Completer> = Arc::new(OpenAiClient::new(settings.client_config()));
        Self::with_completer(completer)
    }

    /// Wire an alternative completion backend, e.g. a test double.
    pub fn with_completer(completer: Arc<dyn Completer>) -> Self {
        Self {
            generator: Arc::new(PostGenerator::new(completer)),
        }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/generate", post(generate))
        .route("/download", post(download))
        .with_state(state)
}

#[derive(Deserialize)]
pub struct GenerateForm {
    pub title: String,
    #[serde(default)]
    pub body_snippet: String,
    pub target_words: u32,
    pub sample_count: u32,
}

#[derive(Deserialize)]
pub struct DownloadForm {
    pub content: String,
}

pub async fn index() -> Html<String> {
    Html(render_page(&PageView::default()))
}

pub async fn generate(
    State(state): State<AppState>,
    Form(form): Form<GenerateForm>,
) -> Html<String> {
    let mut view = PageView {
        title: form.title.clone(),
        body_snippet: form.body_snippet.clone(),
        target_words: form.target_words,
        sample_count: form.sample_count,
        outcome: Outcome::Blank,
    };

    let request = match DraftRequest::new(
        &form.title,
        &form.body_snippet,
        form.target_words,
        form.sample_count,
    ) {
        Ok(request) => request,
        Err(err) => {
            info!(error = %err, "rejected form input");
            view.outcome = Outcome::Failure(validation_message(&err).to_string());
            return Html(render_page(&view));
        }
    };

    let heading = request.title.clone();
    let started = Instant::now();
    let mut stream = state.generator.stream(request);
    let mut variants = Vec::new();
    while let Some(item) = stream.next().await {
        match item {
            Ok(variant) => variants.push(variant),
            Err(err) => {
                error!(error = %err, "generation run failed");
                view.outcome = Outcome::Failure(GENERIC_FAILURE.to_string());
                return Html(render_page(&view));
            }
        }
    }

    let elapsed_secs = started.elapsed().as_secs_f64();
    info!(variants = variants.len(), elapsed_secs, "generation run finished");
    view.outcome = Outcome::Success {
        heading,
        variants,
        elapsed_secs,
    };
    Html(render_page(&view))
}

pub async fn download(Form(form): Form<DownloadForm>) -> ([(HeaderName, String); 2], String) {
    let artifact = ExportArtifact::new(form.content);
    info!(filename = %artifact.filename, "serving export");
    (
        [
            (header::CONTENT_TYPE, artifact.mime_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", artifact.filename),
            ),
        ],
        artifact.content,
    )
}
