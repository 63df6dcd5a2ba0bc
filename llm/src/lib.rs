//! Abstractions for talking to a text-completion service.
//!
//! The `llm` crate defines the [`Completer`] trait along with the concrete
//! [`OpenAiClient`] implementation. A [`ClientConfig`] carries everything the
//! client needs: key, model, endpoint, and timeout.

pub mod client;
pub mod traits;

pub use client::{ClientConfig, OpenAiClient};
pub use traits::{Completer, CompletionError};
