//! Mock narrator for testing.

use std::cell::RefCell;

use crate::error::Result;

use super::narrator::{Narrative, Narrator};

/// Mock narrator that returns predictable responses for testing.
///
/// Every summary it receives is recorded so tests can check what would
/// have been sent to the model.
#[derive(Default)]
pub struct MockNarrator {
    response: Option<String>,
    received: RefCell<Vec<String>>,
}

impl MockNarrator {
    /// Create a new mock narrator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Always answer with `text`.
    pub fn with_response(text: impl Into<String>) -> Self {
        Self {
            response: Some(text.into()),
            received: RefCell::new(Vec::new()),
        }
    }

    /// Summaries passed to `narrate`, in call order.
    pub fn received(&self) -> Vec<String> {
        self.received.borrow().clone()
    }
}

impl Narrator for MockNarrator {
    fn narrate(&self, summary: &str) -> Result<Narrative> {
        self.received.borrow_mut().push(summary.to_string());

        let text = match &self.response {
            Some(text) => text.clone(),
            None => {
                let columns = summary.lines().next().unwrap_or("").split_whitespace().count();
                format!("This dataset has {} columns worth exploring.", columns)
            }
        };
        Ok(Narrative::from_model(text))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_response_counts_columns() {
        let mock = MockNarrator::new();
        let narrative = mock.narrate("       age  city\ncount    3     3").unwrap();
        assert_eq!(narrative.text, "This dataset has 2 columns worth exploring.");
        assert!(!narrative.is_placeholder());
        assert_eq!(mock.received().len(), 1);
    }

    #[test]
    fn test_fixed_response() {
        let mock = MockNarrator::with_response("Once upon a time.");
        assert_eq!(mock.narrate("x").unwrap().text, "Once upon a time.");
    }
}
