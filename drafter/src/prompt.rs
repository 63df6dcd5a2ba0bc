use crate::request::DraftRequest;

/// Literal answer the model is instructed to give when the inputs do not
/// look like a blog title or snippet.
pub const ERROR_TOKEN: &str = "Error";

/// Deterministic instruction for one generation run.
///
/// Clause order and exact wording are the contract with the completion
/// model: the third clause tells it to answer with [`ERROR_TOKEN`] for
/// unsuitable inputs, and [`is_rejection`] keys on that answer. Changing the
/// wording changes what comes back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DraftPrompt {
    title: String,
    body_snippet: Option<String>,
    target_words: u32,
}

impl DraftPrompt {
    pub fn new(
        title: impl Into<String>,
        body_snippet: Option<String>,
        target_words: u32,
    ) -> Self {
        Self {
            title: title.into(),
            body_snippet,
            target_words,
        }
    }

    /// Assemble the instruction text.
    pub fn render(&self) -> String {
        let mut out = format!("Write a blog post titled '{}'", self.title);
        if let Some(snippet) = &self.body_snippet {
            out.push_str(&format!(" with the following body snippet: '{snippet}'"));
        }
        out.push('.');
        out.push_str("If inputs doesn't seems like blog post title or body snippet, simply reply with exactly 'Error'");
        out.push_str(&format!(
            "The post should be at least {} words long",
            self.target_words
        ));
        out
    }
}

impl From<&DraftRequest> for DraftPrompt {
    fn from(request: &DraftRequest) -> Self {
        Self {
            title: request.title.clone(),
            body_snippet: request.body_snippet.clone(),
            target_words: request.target_words,
        }
    }
}

/// Whether a completion is the model's rejection answer rather than content.
///
/// Matches by trimmed, case-insensitive equality with [`ERROR_TOKEN`], so a
/// post that merely mentions the word is kept.
pub fn is_rejection(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case(ERROR_TOKEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_fixed_clause_order() {
        let prompt = DraftPrompt::new("Bitcoin is the future", None, 300).render();
        assert_eq!(
            prompt,
            "Write a blog post titled 'Bitcoin is the future'.\
             If inputs doesn't seems like blog post title or body snippet, \
             simply reply with exactly 'Error'\
             The post should be at least 300 words long"
        );
    }

    #[test]
    fn omits_snippet_clause_when_absent() {
        let prompt = DraftPrompt::new("Bitcoin is the future", None, 300).render();
        assert!(prompt.contains("Bitcoin is the future"));
        assert!(!prompt.contains("body snippet:"));
    }

    #[test]
    fn snippet_clause_follows_title_clause() {
        let prompt = DraftPrompt::new(
            "Bitcoin is the future",
            Some("It is the future of money.".into()),
            500,
        )
        .render();
        let title_at = prompt.find("Bitcoin is the future").unwrap();
        let snippet_at = prompt.find("It is the future of money.").unwrap();
        assert!(title_at < snippet_at);
        assert!(prompt.contains(" with the following body snippet: 'It is the future of money.'"));
    }

    #[test]
    fn rejection_matches_token_in_any_case() {
        assert!(is_rejection("Error"));
        assert!(is_rejection("error"));
        assert!(is_rejection("  ERROR \n"));
    }

    #[test]
    fn rejection_requires_equality_not_containment() {
        assert!(!is_rejection("Errors happen to the best of us."));
        assert!(!is_rejection("An error occurred in paragraph three."));
        assert!(!is_rejection(""));
    }
}
