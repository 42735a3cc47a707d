use serde::Serialize;

use crate::models::DisplayStructure;

// Notices are fixed English text; only names, numbers, dates and quality
// labels follow the display locale.
pub const LOADING_NOTICE: &str = "Loading prices...";
pub const NO_DATA_NOTICE: &str = "No data found for the selected items and filters.";

/// What the output region currently holds. Exactly one state at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "content", rename_all = "snake_case")]
pub enum OutputState {
    #[default]
    Empty,
    Loading,
    /// Error or warning messages, oldest first.
    Messages(Vec<String>),
    NoData,
    Rendered(DisplayStructure),
}

/// The single output region shared by loaders and price queries.
///
/// Writes replace the previous content, except [`append_error`](Self::append_error)
/// which accumulates while messages are showing. The last writer wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OutputArea {
    state: OutputState,
}

impl OutputArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &OutputState {
        &self.state
    }

    pub fn show_loading(&mut self) {
        self.state = OutputState::Loading;
    }

    /// Add a message, keeping any messages already shown.
    pub fn append_error(&mut self, message: impl Into<String>) {
        match &mut self.state {
            OutputState::Messages(messages) => messages.push(message.into()),
            _ => self.state = OutputState::Messages(vec![message.into()]),
        }
    }

    /// Replace the content with a single message.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.state = OutputState::Messages(vec![message.into()]);
    }

    /// Show a render result; an empty result becomes the no-data notice.
    pub fn show(&mut self, display: DisplayStructure) {
        self.state = match display {
            DisplayStructure::NoData => OutputState::NoData,
            other => OutputState::Rendered(other),
        };
    }

    pub fn clear(&mut self) {
        self.state = OutputState::Empty;
    }

    pub fn messages(&self) -> &[String] {
        match &self.state {
            OutputState::Messages(messages) => messages,
            _ => &[],
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.messages().is_empty()
    }
}
