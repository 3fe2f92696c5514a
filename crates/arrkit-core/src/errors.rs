use thiserror::Error;

/// Result type alias using ArrError
pub type Result<T> = std::result::Result<T, ArrError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling and in test assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input validation
    InvalidInput,
    EmptySource,
    Incomparable,

    // Hashing
    UnsupportedValue,

    // Integration
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::EmptySource => "ERR_EMPTY_SOURCE",
            ExErrorKind::Incomparable => "ERR_INCOMPARABLE",
            ExErrorKind::UnsupportedValue => "ERR_UNSUPPORTED_VALUE",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context (operation, offending key) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    key: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            key: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add offending key context
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(key) = &self.key {
            write!(f, " (key: {})", key)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain errors raised by arrkit operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArrError {
    /// Selection limit must be at least one
    #[error("Invalid limit for {op}: {limit} (must be >= 1)")]
    InvalidLimit { op: String, limit: usize },

    /// Two values had no defined ordering (NaN, or mismatched kinds)
    #[error("Values are not comparable in {op}: {left} vs {right}")]
    Incomparable {
        op: String,
        left: String,
        right: String,
    },

    /// Operation needs at least one element to choose from
    #[error("Source is empty in {op}")]
    EmptySource { op: String },

    /// Requested more distinct elements than the source holds
    #[error("Cannot sample {requested} entries from {available} in {op}")]
    SampleTooLarge {
        op: String,
        requested: usize,
        available: usize,
    },

    /// JSON conversion failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl ArrError {
    /// Build an `Incomparable` error from two debuggable values
    pub fn incomparable(
        op: impl Into<String>,
        left: &impl std::fmt::Debug,
        right: &impl std::fmt::Debug,
    ) -> Self {
        ArrError::Incomparable {
            op: op.into(),
            left: format!("{:?}", left),
            right: format!("{:?}", right),
        }
    }
}

/// Conversion from ArrError to the canonical ExError
impl From<ArrError> for ExError {
    fn from(err: ArrError) -> Self {
        match err {
            ArrError::InvalidLimit { op, limit } => ExError::new(ExErrorKind::InvalidInput)
                .with_op(op)
                .with_message(format!("limit must be >= 1, got {}", limit)),

            ArrError::Incomparable { op, left, right } => {
                ExError::new(ExErrorKind::Incomparable)
                    .with_op(op)
                    .with_message(format!("no ordering between {} and {}", left, right))
            }

            ArrError::EmptySource { op } => ExError::new(ExErrorKind::EmptySource)
                .with_op(op)
                .with_message("source is empty"),

            ArrError::SampleTooLarge {
                op,
                requested,
                available,
            } => ExError::new(ExErrorKind::InvalidInput)
                .with_op(op)
                .with_message(format!(
                    "requested {} entries but only {} available",
                    requested, available
                )),

            ArrError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to ArrError
impl From<serde_json::Error> for ArrError {
    fn from(err: serde_json::Error) -> Self {
        ArrError::Serialization {
            message: err.to_string(),
        }
    }
}
