use thiserror::Error;

/// Result type alias using FamilyError
pub type Result<T> = std::result::Result<T, FamilyError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code used by logging, tests and the
/// command processor when it needs to tell failure causes apart internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    NotFound,
    AlreadyExists,
    ConstraintViolation,

    // Mutation
    MarriageRejected,
    ChildRejected,

    // Traversal
    TraversalBroken,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::MarriageRejected => "ERR_MARRIAGE_REJECTED",
            ExErrorKind::ChildRejected => "ERR_CHILD_REJECTED",
            ExErrorKind::TraversalBroken => "ERR_TRAVERSAL_BROKEN",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context (operation, person, input line) for diagnostics.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    person: Option<String>,
    line: Option<usize>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            person: None,
            line: None,
            message: String::new(),
            source: None,
        }
    }

    /// Set the operation name
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Set the person the error is about
    pub fn with_person(mut self, name: impl Into<String>) -> Self {
        self.person = Some(name.into());
        self
    }

    /// Set the 1-based input line the error was raised for
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Set the human-readable message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Wrap an underlying error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn person(&self) -> Option<&str> {
        self.person.as_deref()
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
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
        if let Some(person) = &self.person {
            write!(f, " (person: {})", person)?;
        }
        if let Some(line) = self.line {
            write!(f, " (line: {})", line)?;
        }
        if let Some(source) = &self.source {
            write!(f, " <- {}", source)?;
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

/// Domain errors raised by tree mutation, traversal and validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FamilyError {
    // ===== Lookup Errors =====
    /// No person with this name is reachable from the root
    #[error("Person not found: {name}")]
    PersonNotFound { name: String },

    /// A PersonId that does not index into this tree
    #[error("Person id {id} does not belong to this tree")]
    PersonIdInvalid { id: usize },

    /// Operation needs a root but the tree has none yet
    #[error("Family tree is empty: no root person")]
    TreeEmpty,

    // ===== Mutation Errors =====
    /// Attempted to create a second root
    #[error("Family tree already has root {name}")]
    RootAlreadyExists { name: String },

    /// A person may only marry once
    #[error("{name} is already married")]
    AlreadyMarried { name: String },

    /// Both partners have the same sex
    #[error("{first} and {second} cannot marry: sexes must differ")]
    IncompatibleSexes { first: String, second: String },

    /// Children can only be added to a married person
    #[error("{parent} cannot have a child: not married")]
    ChildWithoutSpouse { parent: String },

    /// A person with this name already exists in the tree
    #[error("A person named {name} already exists")]
    DuplicateName { name: String },

    // ===== Invariant Violations =====
    /// Following father links does not terminate at a fatherless person
    #[error("Father chain broken at {name}")]
    FatherChainBroken { name: String },

    /// A spouse link is not mirrored on the other side
    #[error("Spouse link of {name} is not symmetric")]
    SpouseAsymmetry { name: String },

    /// A married person's union does not list them as a member
    #[error("{name} is not a member of their own union")]
    UnionMembershipMismatch { name: String },

    /// A child's father is not Male
    #[error("Father {father} of {child} is not male")]
    FatherNotMale { child: String, father: String },

    // ===== Generic Errors =====
    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Conversion from FamilyError to ExError
impl From<FamilyError> for ExError {
    fn from(err: FamilyError) -> Self {
        let message = err.to_string();
        match err {
            FamilyError::PersonNotFound { name } => ExError::new(ExErrorKind::NotFound)
                .with_person(name)
                .with_message(message),

            FamilyError::PersonIdInvalid { .. } => {
                ExError::new(ExErrorKind::NotFound).with_message(message)
            }

            FamilyError::TreeEmpty => ExError::new(ExErrorKind::NotFound).with_message(message),

            FamilyError::RootAlreadyExists { name } | FamilyError::DuplicateName { name } => {
                ExError::new(ExErrorKind::AlreadyExists)
                    .with_person(name)
                    .with_message(message)
            }

            FamilyError::AlreadyMarried { name } => ExError::new(ExErrorKind::MarriageRejected)
                .with_op("marry")
                .with_person(name)
                .with_message(message),

            FamilyError::IncompatibleSexes { first, .. } => {
                ExError::new(ExErrorKind::MarriageRejected)
                    .with_op("marry")
                    .with_person(first)
                    .with_message(message)
            }

            FamilyError::ChildWithoutSpouse { parent } => ExError::new(ExErrorKind::ChildRejected)
                .with_op("have_child")
                .with_person(parent)
                .with_message(message),

            FamilyError::FatherChainBroken { name } => ExError::new(ExErrorKind::TraversalBroken)
                .with_person(name)
                .with_message(message),

            FamilyError::SpouseAsymmetry { name }
            | FamilyError::UnionMembershipMismatch { name } => {
                ExError::new(ExErrorKind::ConstraintViolation)
                    .with_person(name)
                    .with_message(message)
            }

            FamilyError::FatherNotMale { child, .. } => {
                ExError::new(ExErrorKind::ConstraintViolation)
                    .with_person(child)
                    .with_message(message)
            }

            FamilyError::Internal { .. } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}
