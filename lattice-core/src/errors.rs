//! Error taxonomy for the roadmap engine.
//!
//! Each variant carries a machine-readable code and a retryability flag.
//! Transient infrastructure failures (embedding, search) are retryable;
//! user-facing validation failures are not.

/// Umbrella error type for the whole workspace.
#[derive(Debug, thiserror::Error)]
pub enum LatticeError {
    /// Goal text failed pre-generation validation. User-facing.
    #[error("invalid goal: {reason}")]
    InvalidGoal { reason: String },

    /// Fewer usable candidates than the roadmap floor requires. User-facing.
    #[error("insufficient content: found {found} candidates, need at least {needed}")]
    InsufficientContent { found: usize, needed: usize },

    /// Embedding generation collaborator failed. Transient.
    #[error("embedding service failed: {reason}")]
    EmbeddingService { reason: String },

    /// Vector search collaborator failed. Transient.
    #[error("concept search failed: {reason}")]
    DatabaseSearch { reason: String },

    /// A produced roadmap failed its own post-check. Always a bug.
    #[error("internal invariant violated: {details}")]
    Internal { details: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LatticeError {
    /// Whether the retry layer may re-attempt the failed operation.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::EmbeddingService { .. } | Self::DatabaseSearch { .. }
        )
    }

    /// Stable machine-readable code for logging and API surfaces.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidGoal { .. } => "INVALID_GOAL",
            Self::InsufficientContent { .. } => "INSUFFICIENT_CONTENT",
            Self::EmbeddingService { .. } => "EMBEDDING_SERVICE_ERROR",
            Self::DatabaseSearch { .. } => "DATABASE_SEARCH_ERROR",
            Self::Internal { .. } => "INTERNAL_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}

pub type LatticeResult<T> = Result<T, LatticeError>;
