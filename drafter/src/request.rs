use crate::generate::DraftError;

/// Validated inputs for one generation run.
///
/// Construct through [`DraftRequest::new`]; a request with an empty title is
/// never handed to the completion service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DraftRequest {
    /// Blog post title, trimmed.
    pub title: String,
    /// Optional snippet to embed verbatim; `None` when blank.
    pub body_snippet: Option<String>,
    /// Word-count floor for each generated post.
    pub target_words: u32,
    /// How many independent variants to generate.
    pub sample_count: u32,
}

impl DraftRequest {
    /// Build a request, trimming the title and discarding a blank snippet.
    ///
    /// # Errors
    ///
    /// Fails when the title is empty or whitespace-only, or when either
    /// numeric field is zero.
    pub fn new(
        title: impl Into<String>,
        body_snippet: impl Into<String>,
        target_words: u32,
        sample_count: u32,
    ) -> Result<Self, DraftError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(DraftError::EmptyTitle);
        }
        if target_words == 0 {
            return Err(DraftError::ZeroTargetWords);
        }
        if sample_count == 0 {
            return Err(DraftError::ZeroSampleCount);
        }
        let body_snippet = body_snippet.into();
        let body_snippet = if body_snippet.trim().is_empty() {
            None
        } else {
            Some(body_snippet)
        };
        Ok(Self {
            title,
            body_snippet,
            target_words,
            sample_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_title_and_drops_blank_snippet() {
        let req = DraftRequest::new("  Bitcoin is the future  ", "   ", 300, 1).unwrap();
        assert_eq!(req.title, "Bitcoin is the future");
        assert_eq!(req.body_snippet, None);
    }

    #[test]
    fn keeps_snippet_verbatim() {
        let req = DraftRequest::new("Title", "Bitcoin is the future of money.", 300, 1).unwrap();
        assert_eq!(
            req.body_snippet.as_deref(),
            Some("Bitcoin is the future of money.")
        );
    }

    #[test]
    fn whitespace_only_title_is_empty() {
        assert!(matches!(
            DraftRequest::new("   \t", "", 300, 1),
            Err(DraftError::EmptyTitle)
        ));
    }

    #[test]
    fn zero_counts_are_rejected() {
        assert!(matches!(
            DraftRequest::new("Title", "", 0, 1),
            Err(DraftError::ZeroTargetWords)
        ));
        assert!(matches!(
            DraftRequest::new("Title", "", 300, 0),
            Err(DraftError::ZeroSampleCount)
        ));
    }
}
