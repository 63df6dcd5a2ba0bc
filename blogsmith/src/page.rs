//! Server-rendered HTML for the single page.

use drafter::{DraftError, Variant, export};

/// The only thing a visitor is told when the completion service fails.
/// Operator detail stays in the log.
pub const GENERIC_FAILURE: &str =
    "An error occurred while generating the blog post. Please try again later.";

const TITLE_PLACEHOLDER: &str = "Bitcoin is the future";
const SNIPPET_PLACEHOLDER: &str = "Bitcoin is the future of money. It is the future of the world. \
     It is the future of the universe. It is the future of everything.";

/// Everything one render of the page needs. Lives for a single
/// request/response cycle.
pub struct PageView {
    pub title: String,
    pub body_snippet: String,
    pub target_words: u32,
    pub sample_count: u32,
    pub outcome: Outcome,
}

pub enum Outcome {
    Blank,
    Failure(String),
    Success {
        heading: String,
        variants: Vec<Variant>,
        elapsed_secs: f64,
    },
}

impl Default for PageView {
    fn default() -> Self {
        Self {
            title: String::new(),
            body_snippet: String::new(),
            target_words: 500,
            sample_count: 1,
            outcome: Outcome::Blank,
        }
    }
}

/// Inline message for a request that never went upstream.
pub fn validation_message(err: &DraftError) -> &'static str {
    match err {
        DraftError::EmptyTitle => "Please enter a title for your blog post.",
        DraftError::ZeroTargetWords => "Please choose a positive post length.",
        DraftError::ZeroSampleCount => "Please request at least one blog post.",
        DraftError::Completion(_) => GENERIC_FAILURE,
    }
}

pub fn render_page(view: &PageView) -> String {
    let mut body = String::new();
    body.push_str("<h1>Blogsmith</h1>\n");
    body.push_str("<p>Enter the details below to generate a blog post.</p>\n");
    body.push_str(&render_form(view));
    match &view.outcome {
        Outcome::Blank => {}
        Outcome::Failure(message) => {
            body.push_str(&format!(
                "<p class=\"error\">{}</p>\n",
                escape_html(message)
            ));
        }
        Outcome::Success {
            heading,
            variants,
            elapsed_secs,
        } => {
            body.push_str(&format!(
                "<p class=\"success\">Blog post generated successfully! Time taken: {elapsed_secs:.1} seconds</p>\n"
            ));
            body.push_str(&format!("<h2>{}</h2>\n", escape_html(heading)));
            for variant in variants {
                body.push_str(&format!("<h3>{}</h3>\n", escape_html(&variant.heading())));
                body.push_str(&format!(
                    "<pre>{}</pre>\n",
                    escape_html(variant.display_text())
                ));
            }
            body.push_str(&render_download_form(variants));
        }
    }
    format!(
        "<!doctype html>\n<html>\n<head><meta charset=\"utf-8\"><title>Blogsmith</title></head>\n<body>\n{body}</body>\n</html>\n"
    )
}

fn render_form(view: &PageView) -> String {
    format!(
        concat!(
            "<form method=\"post\" action=\"/generate\">\n",
            "  <label for=\"title\">Title</label>\n",
            "  <input type=\"text\" id=\"title\" name=\"title\" value=\"{title}\" placeholder=\"{title_placeholder}\">\n",
            "  <label for=\"body_snippet\">Body Snippet (Optional)</label>\n",
            "  <textarea id=\"body_snippet\" name=\"body_snippet\" placeholder=\"{snippet_placeholder}\">{snippet}</textarea>\n",
            "  <label for=\"target_words\">Blog Post Length</label>\n",
            "  <input type=\"range\" id=\"target_words\" name=\"target_words\" min=\"100\" max=\"1000\" step=\"50\" value=\"{target_words}\">\n",
            "  <label for=\"sample_count\">Number of Blog Posts</label>\n",
            "  <input type=\"range\" id=\"sample_count\" name=\"sample_count\" min=\"1\" max=\"5\" step=\"1\" value=\"{sample_count}\">\n",
            "  <button type=\"submit\">Generate Blog Post</button>\n",
            "  <a href=\"/\">Clear</a>\n",
            "</form>\n",
        ),
        title = escape_html(&view.title),
        title_placeholder = TITLE_PLACEHOLDER,
        snippet_placeholder = SNIPPET_PLACEHOLDER,
        snippet = escape_html(&view.body_snippet),
        target_words = view.target_words,
        sample_count = view.sample_count,
    )
}

fn render_download_form(variants: &[Variant]) -> String {
    format!(
        concat!(
            "<form method=\"post\" action=\"/download\">\n",
            "  <textarea name=\"content\" style=\"display:none\">{content}</textarea>\n",
            "  <button type=\"submit\">Download Generated Text</button>\n",
            "</form>\n",
        ),
        content = escape_html(&export::concatenated(variants)),
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html("<script>alert(\"x\")</script>"),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("a & b"), "a &amp; b");
    }

    #[test]
    fn blank_page_carries_slider_defaults() {
        let html = render_page(&PageView::default());
        assert!(html.contains("min=\"100\" max=\"1000\" step=\"50\" value=\"500\""));
        assert!(html.contains("min=\"1\" max=\"5\" step=\"1\" value=\"1\""));
        assert!(html.contains("placeholder=\"Bitcoin is the future\""));
    }
}
