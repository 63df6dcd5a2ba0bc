use std::fmt;

/// Message shown in place of a variant the model refused to write.
pub const REJECTED_NOTICE: &str =
    "Something went wrong. Please try again with a different title or snippet.";

/// One generated sample out of a run of `total`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variant {
    /// 1-based position within the run.
    pub index: u32,
    /// Requested sample count for the run.
    pub total: u32,
    pub body: VariantBody,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VariantBody {
    /// Usable generated text.
    Text(String),
    /// The model judged the inputs unsuitable for a blog post.
    Rejected,
}

impl Variant {
    pub fn heading(&self) -> String {
        format!("Variant {} of {}", self.index, self.total)
    }

    /// Text safe to display or export.
    ///
    /// A rejected variant yields [`REJECTED_NOTICE`], never the raw token
    /// the model answered with.
    pub fn display_text(&self) -> &str {
        match &self.body {
            VariantBody::Text(text) => text,
            VariantBody::Rejected => REJECTED_NOTICE,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "### {}\n\n{}", self.heading(), self.display_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_one_based() {
        let variant = Variant {
            index: 2,
            total: 5,
            body: VariantBody::Text("words".into()),
        };
        assert_eq!(variant.heading(), "Variant 2 of 5");
        assert_eq!(variant.to_string(), "### Variant 2 of 5\n\nwords");
    }

    #[test]
    fn rejected_body_renders_the_notice() {
        let variant = Variant {
            index: 1,
            total: 1,
            body: VariantBody::Rejected,
        };
        assert_eq!(variant.display_text(), REJECTED_NOTICE);
        assert_ne!(variant.display_text(), "Error");
    }
}
