use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    UiEvent(UiEvent),
    /// UI -> app: the query line changed, re-run the lookup
    QueryChanged(String),
    /// UI -> app: a candidate chip was clicked
    CandidateClicked(String),
    /// app -> UI: translations to lay out in the grid
    ShowCandidates(Vec<String>),
    /// app -> UI: background load finished (possibly with nothing parsed)
    DictionaryReady { entries: usize },
    /// app -> UI: transient status-line message
    Notice(String),
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    Show,
    Hide,
    Close,
}

/// One dictionary record: lookup key and the text shown in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub source: String,
    pub translation: String,
}

impl Candidate {
    pub fn new(source: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            translation: translation.into(),
        }
    }
}
