use thiserror::Error;

use super::DefinitionEntry;

/// Failure of a single lookup. The display text is the underlying message, verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("{0}")]
    Request(String),
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Decode(String),
}

impl From<reqwest::Error> for QueryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            return QueryError::Request(err.to_string());
        }
        if err.is_decode() {
            return QueryError::Decode(err.to_string());
        }
        return QueryError::Transport(err.to_string());
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(err: serde_json::Error) -> Self {
        return QueryError::Decode(err.to_string());
    }
}

/// Result of one query attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Success(Vec<DefinitionEntry>),
    Failure(QueryError),
}

impl SearchOutcome {
    pub fn first(&self) -> Option<&DefinitionEntry> {
        match self {
            SearchOutcome::Success(entries) => return entries.first(),
            SearchOutcome::Failure(_) => return None,
        }
    }

    pub fn error(&self) -> Option<&QueryError> {
        match self {
            SearchOutcome::Success(_) => return None,
            SearchOutcome::Failure(err) => return Some(err),
        }
    }
}

impl From<Result<Vec<DefinitionEntry>, QueryError>> for SearchOutcome {
    fn from(res: Result<Vec<DefinitionEntry>, QueryError>) -> Self {
        match res {
            Ok(entries) => return SearchOutcome::Success(entries),
            Err(err) => return SearchOutcome::Failure(err),
        }
    }
}
