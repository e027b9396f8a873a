use thiserror::Error;

/// Errors raised while building a [`KnowledgeBase`](crate::KnowledgeBase) or
/// parsing its fields. Retrieval itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnowledgeError {
    #[error("knowledge base entry id must not be empty")]
    EmptyId,

    #[error("duplicate knowledge base entry id: {0}")]
    DuplicateId(String),

    #[error("entry '{id}': invalid updated date '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { id: String, value: String },

    #[error("unknown language code: '{0}' (expected mr, hi, or en)")]
    UnknownLanguage(String),
}
