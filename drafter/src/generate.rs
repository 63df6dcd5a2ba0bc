//! The generation loop: one completion call per requested variant, yielded
//! lazily and in order.

use std::pin::Pin;
use std::sync::Arc;

use futures_core::Stream;
use llm::{Completer, CompletionError};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::prompt::{self, DraftPrompt};
use crate::request::DraftRequest;
use crate::variant::{Variant, VariantBody};

/// Failures of one generation run.
#[derive(Debug, Error)]
pub enum DraftError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("target word count must be positive")]
    ZeroTargetWords,
    #[error("sample count must be positive")]
    ZeroSampleCount,
    #[error("completion service failure: {0}")]
    Completion(#[from] CompletionError),
}

/// Finite, ordered stream of generated variants.
///
/// Bounded by the request's sample count and not restartable; each item may
/// cost a network round trip and the upstream model is non-deterministic.
pub type VariantStream = Pin<Box<dyn Stream<Item = Result<Variant, DraftError>> + Send>>;

/// Produces blog post variants from a completion service.
///
/// Holds only the shared completer; all per-run state lives inside the
/// stream returned by [`PostGenerator::stream`], so concurrent runs do not
/// interfere.
pub struct PostGenerator {
    completer: Arc<dyn Completer>,
}

impl PostGenerator {
    pub fn new(completer: Arc<dyn Completer>) -> Self {
        Self { completer }
    }

    /// Stream `request.sample_count` variants in order.
    ///
    /// The stream is lazy: each variant performs one completion call when
    /// polled, and dropping the stream cancels any in-flight call. A
    /// completion failure ends the stream after a single error item; no
    /// partial variant follows it.
    pub fn stream(&self, request: DraftRequest) -> VariantStream {
        let completer = self.completer.clone();
        Box::pin(async_stream::stream! {
            let prompt = DraftPrompt::from(&request).render();
            let total = request.sample_count;
            debug!(title = %request.title, samples = total, "starting generation run");
            for index in 1..=total {
                match completer.complete(&prompt).await {
                    Ok(text) => {
                        let body = if prompt::is_rejection(&text) {
                            info!(index, "model rejected the inputs");
                            VariantBody::Rejected
                        } else {
                            VariantBody::Text(text)
                        };
                        yield Ok(Variant { index, total, body });
                    }
                    Err(err) => {
                        warn!(index, error = %err, "completion call failed");
                        yield Err(DraftError::Completion(err));
                        break;
                    }
                }
            }
        })
    }
}
