pub type Result<T> = std::result::Result<T, KeywordError>;

/// Errors produced while building a keyword index.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeywordError {
    /// A zero-length keyword would mark the trie root and match every empty word.
    #[error("keyword at index {index} is empty")]
    EmptyKeyword { index: usize },
}
