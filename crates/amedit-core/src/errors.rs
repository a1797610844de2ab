use thiserror::Error;

/// Result type alias using EditError
pub type Result<T> = std::result::Result<T, EditError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable for programmatic handling,
/// log assertions and external API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    InvalidUrn,
    NotFound,
    AlreadyExists,
    DuplicateDefinition,
    AmbiguousOwner,

    // Namespaces
    NamespaceNotFound,
    NamespaceMismatch,
    MissingNamespace,

    // Mutation
    InvalidRewrite,
    GroupAborted,

    // Integration
    InvalidConfig,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidUrn => "ERR_INVALID_URN",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::DuplicateDefinition => "ERR_DUPLICATE_DEFINITION",
            ExErrorKind::AmbiguousOwner => "ERR_AMBIGUOUS_OWNER",
            ExErrorKind::NamespaceNotFound => "ERR_NAMESPACE_NOT_FOUND",
            ExErrorKind::NamespaceMismatch => "ERR_NAMESPACE_MISMATCH",
            ExErrorKind::MissingNamespace => "ERR_MISSING_NAMESPACE",
            ExErrorKind::InvalidRewrite => "ERR_INVALID_REWRITE",
            ExErrorKind::GroupAborted => "ERR_GROUP_ABORTED",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context about the document and element involved.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    document: Option<String>,
    element: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            document: None,
            element: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add document identity-key context
    pub fn with_document(mut self, key: impl Into<String>) -> Self {
        self.document = Some(key.into());
        self
    }

    /// Add element URN context
    pub fn with_element(mut self, urn: impl Into<String>) -> Self {
        self.element = Some(urn.into());
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

    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    pub fn element(&self) -> Option<&str> {
        self.element.as_deref()
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
        if let Some(document) = &self.document {
            write!(f, " (document: {})", document)?;
        }
        if let Some(element) = &self.element {
            write!(f, " (element: {})", element)?;
        }
        if let Some(source) = &self.source {
            write!(f, " caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|s| s as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for workspace editing operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    // ===== Documents =====
    /// No document with this identity key exists in the workspace
    #[error("Document not found: {key}")]
    DocumentNotFound { key: String },

    /// A document with this identity key already exists
    #[error("Document already exists: {key}")]
    DocumentAlreadyExists { key: String },

    /// The document defines no element with a namespace
    #[error("Document {key} defines no namespaced element")]
    DocumentWithoutNamespace { key: String },

    // ===== Elements =====
    /// No document in the workspace defines this element
    #[error("Element not found: {urn}")]
    ElementNotFound { urn: String },

    /// The element is already defined by a document
    #[error("Element {urn} is already defined in document {key}")]
    ElementAlreadyDefined { urn: String, key: String },

    /// More than one document defines the element
    #[error("Element {urn} is defined by multiple documents: {keys:?}")]
    AmbiguousOwner { urn: String, keys: Vec<String> },

    /// A caller-supplied definition does not define the element it names
    #[error("Invalid definition for {urn}: {reason}")]
    InvalidDefinition { urn: String, reason: String },

    /// Source and target document of a move are the same
    #[error("Element {urn} already lives in document {key}")]
    SameDocument { urn: String, key: String },

    // ===== Identifiers =====
    /// String is not a well-formed element URN
    #[error("Invalid URN '{value}': {reason}")]
    InvalidUrn { value: String, reason: String },

    /// String is not a major.minor.patch version, or a bump would overflow it
    #[error("Invalid version: {value}")]
    InvalidVersion { value: String },

    // ===== Namespaces =====
    /// No document in the workspace belongs to the namespace scope
    #[error("Namespace not found: {scope}")]
    NamespaceNotFound { scope: String },

    /// The target document belongs to a different namespace scope
    #[error("Document {key} belongs to namespace {actual}, expected {expected}")]
    NamespaceMismatch {
        key: String,
        expected: String,
        actual: String,
    },

    // ===== Mutation =====
    /// A node rewrite would produce an ill-formed statement
    #[error("Invalid rewrite: {reason}")]
    InvalidRewrite { reason: String },

    /// A member of a change group failed; the whole group is rolled back
    #[error("Change group aborted at member {index} ({change}): {source}")]
    GroupMemberFailed {
        index: usize,
        change: String,
        #[source]
        source: Box<EditError>,
    },

    // ===== Generic Errors =====
    /// Configuration could not be parsed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl EditError {
    /// The innermost error, looking through group wrappers
    pub fn root_cause(&self) -> &EditError {
        match self {
            EditError::GroupMemberFailed { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

impl From<serde_json::Error> for EditError {
    fn from(err: serde_json::Error) -> Self {
        EditError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Conversion from EditError to the canonical ExError
impl From<EditError> for ExError {
    fn from(err: EditError) -> Self {
        match err {
            EditError::DocumentNotFound { key } => ExError::new(ExErrorKind::NotFound)
                .with_document(key)
                .with_message("Document not found"),
            EditError::DocumentAlreadyExists { key } => ExError::new(ExErrorKind::AlreadyExists)
                .with_document(key)
                .with_message("Document already exists"),
            EditError::DocumentWithoutNamespace { key } => {
                ExError::new(ExErrorKind::MissingNamespace)
                    .with_document(key)
                    .with_message("Document defines no namespaced element")
            }
            EditError::ElementNotFound { urn } => ExError::new(ExErrorKind::NotFound)
                .with_element(urn)
                .with_message("Element not found"),
            EditError::ElementAlreadyDefined { urn, key } => {
                ExError::new(ExErrorKind::DuplicateDefinition)
                    .with_element(urn)
                    .with_document(key)
                    .with_message("Element is already defined")
            }
            EditError::AmbiguousOwner { urn, keys } => {
                let owners = format!("Defined by {} documents: {}", keys.len(), keys.join(", "));
                ExError::new(ExErrorKind::AmbiguousOwner)
                    .with_element(urn)
                    .with_message(owners)
            }
            EditError::InvalidDefinition { urn, reason } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_element(urn)
                    .with_message(reason)
            }
            EditError::SameDocument { urn, key } => ExError::new(ExErrorKind::InvalidInput)
                .with_element(urn)
                .with_document(key)
                .with_message("Element already lives in the target document"),
            EditError::InvalidUrn { value, reason } => ExError::new(ExErrorKind::InvalidUrn)
                .with_element(value)
                .with_message(reason),
            EditError::InvalidVersion { value } => ExError::new(ExErrorKind::InvalidUrn)
                .with_message(format!("Invalid version: {}", value)),
            EditError::NamespaceNotFound { scope } => {
                ExError::new(ExErrorKind::NamespaceNotFound)
                    .with_message(format!("Namespace not found: {}", scope))
            }
            EditError::NamespaceMismatch {
                key,
                expected,
                actual,
            } => ExError::new(ExErrorKind::NamespaceMismatch)
                .with_document(key)
                .with_message(format!("Expected namespace {}, found {}", expected, actual)),
            EditError::InvalidRewrite { reason } => {
                ExError::new(ExErrorKind::InvalidRewrite).with_message(reason)
            }
            EditError::GroupMemberFailed {
                index,
                change,
                source,
            } => ExError::new(ExErrorKind::GroupAborted)
                .with_op("apply_group")
                .with_message(format!("Member {} ({}) failed", index, change))
                .with_source(ExError::from(*source)),
            EditError::InvalidConfig { message } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(message)
            }
            EditError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}
