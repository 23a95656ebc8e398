use serde::Deserialize;

/// How a failing field is presented on the page.
///
/// Deserializes from `"below"` or `"none"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorDisplay {
    /// Invalid marker plus a feedback message right after the input.
    #[default]
    Below,
    /// Invalid marker only; no feedback element is inserted.
    None,
}

impl ErrorDisplay {
    /// Whether a feedback message element is rendered.
    pub fn shows_message(&self) -> bool {
        matches!(self, Self::Below)
    }
}
