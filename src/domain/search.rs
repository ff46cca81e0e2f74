use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("Please enter something to search for.")]
    EmptyQuery,
}

/// Trimmed query, or the message shown inline under the search box.
pub fn validate_query(raw: &str) -> Result<String, SearchError> {
    let q = raw.trim();
    if q.is_empty() {
        return Err(SearchError::EmptyQuery);
    }
    Ok(q.to_string())
}
