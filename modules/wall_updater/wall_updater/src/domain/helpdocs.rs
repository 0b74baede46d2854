use async_trait::async_trait;

/// Answer returned by [`StaticHelpDocs`] unless another one is configured.
pub const DEFAULT_HELP_ANSWER: &str = "You can do it by contacting support.";

/// Help-content lookup for feature questions. Pure input to string.
#[async_trait]
pub trait HelpDocsSearch: Send + Sync {
    async fn search(&self, query: &str) -> String;
}

/// Lookup that gives the same answer for every query.
#[derive(Debug, Clone)]
pub struct StaticHelpDocs {
    answer: String,
}

impl StaticHelpDocs {
    #[must_use]
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
        }
    }
}

impl Default for StaticHelpDocs {
    fn default() -> Self {
        Self::new(DEFAULT_HELP_ANSWER)
    }
}

#[async_trait]
impl HelpDocsSearch for StaticHelpDocs {
    async fn search(&self, query: &str) -> String {
        tracing::debug!(query_len = query.len(), "Help docs lookup");
        self.answer.clone()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn default_answer_for_any_query() {
        let docs = StaticHelpDocs::default();
        assert_eq!(docs.search("how do I add a section?").await, DEFAULT_HELP_ANSWER);
        assert_eq!(docs.search("").await, DEFAULT_HELP_ANSWER);
    }

    #[tokio::test]
    async fn custom_answer() {
        let docs = StaticHelpDocs::new("See the help center.");
        assert_eq!(docs.search("anything").await, "See the help center.");
    }
}
