//! Drafting engine for blog posts.
//!
//! A [`DraftRequest`] describes what to write, [`DraftPrompt`] turns it into
//! the instruction sent upstream, and [`PostGenerator`] yields the requested
//! number of [`Variant`]s as a finite asynchronous stream. Finished runs can
//! be packed into an [`ExportArtifact`] for download.

pub mod export;
pub mod generate;
pub mod prompt;
pub mod request;
pub mod variant;

pub use export::ExportArtifact;
pub use generate::{DraftError, PostGenerator, VariantStream};
pub use prompt::{DraftPrompt, ERROR_TOKEN, is_rejection};
pub use request::DraftRequest;
pub use variant::{REJECTED_NOTICE, Variant, VariantBody};
