use rand::{Rng, distributions::Alphanumeric};

use crate::variant::Variant;

/// MIME type of every export.
pub const MIME_TYPE: &str = "text/plain";

/// Plain-text download produced from a finished generation run.
///
/// The artifact lives in memory and is written straight into the download
/// response; no file is created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportArtifact {
    /// `generated_blog_post_<suffix>.txt` with a fresh 5-character
    /// alphanumeric suffix per export.
    pub filename: String,
    pub content: String,
}

impl ExportArtifact {
    /// Wrap `content` under a freshly generated filename.
    pub fn new(content: impl Into<String>) -> Self {
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(5)
            .map(char::from)
            .collect();
        Self {
            filename: format!("generated_blog_post_{suffix}.txt"),
            content: content.into(),
        }
    }

    /// Concatenate rendered variants into one artifact.
    pub fn from_variants(variants: &[Variant]) -> Self {
        Self::new(concatenated(variants))
    }

    pub fn mime_type(&self) -> &'static str {
        MIME_TYPE
    }
}

/// Rendered variants joined the way they are displayed and exported.
pub fn concatenated(variants: &[Variant]) -> String {
    variants
        .iter()
        .map(Variant::to_string)
        .collect::<Vec<_>>()
        .join("\n\n")
}
