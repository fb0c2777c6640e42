use kouho_types::Candidate;

/// Dictionary lookup operations
pub trait Dictionary: Send + Sync {
    /// Search dictionary with options
    fn search(&self, query: &str, options: SearchOptions) -> Vec<Candidate>;

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;

    fn is_empty(&self) -> bool {
        self.metadata().entry_count == 0
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    /// Cap on returned candidates; `None` returns every match.
    pub max_results: Option<usize>,
    pub match_type: MatchType,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_results: None,
            match_type: MatchType::Prefix,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    Exact,
    Prefix,
}

#[derive(Debug, Clone)]
pub struct DictionaryMetadata {
    pub name: String,
    pub language: String,
    pub entry_count: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
