use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    Api(String),
    #[error("completion request timed out after {0} seconds")]
    Timeout(u64),
    #[error("completion response carried no content")]
    EmptyResponse,
}

/// Something that can turn a prompt into a single free-text completion.
///
/// One call produces one completion. Implementations must be safe to share
/// across concurrent requests; they hold no per-request state.
#[async_trait]
pub trait Completer: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}
