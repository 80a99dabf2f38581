//! Locator-specific error types.

use thiserror::Error;

/// Discriminant for [`ResourceError`], for callers that branch on the kind
/// without matching every field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceErrorKind {
    /// No registered locator supports the classname.
    NotSupported,

    /// Several locators share the best match score.
    Ambiguous,

    /// The chosen locator failed to build the resource.
    Locator,
}

/// Errors that can occur while creating a resource.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// No registered locator reports support for the classname.
    #[error("No locator supports class {classname}")]
    CreationNotSupported { classname: String },

    /// Two or more locators tie on the highest match score.
    #[error(
        "Ambiguous resource creation for class {classname}: {candidates} locators share the best match score {score}"
    )]
    CreationAmbiguous {
        classname: String,
        score: i64,
        candidates: usize,
    },

    /// The selected locator's own failure, passed through untouched.
    #[error(transparent)]
    Locator(#[from] anyhow::Error),
}

impl ResourceError {
    /// Create a new "not supported" error.
    pub fn not_supported(classname: impl Into<String>) -> Self {
        Self::CreationNotSupported {
            classname: classname.into(),
        }
    }

    /// Create a new "ambiguous" error.
    pub fn ambiguous(classname: impl Into<String>, score: i64, candidates: usize) -> Self {
        Self::CreationAmbiguous {
            classname: classname.into(),
            score,
            candidates,
        }
    }

    /// The kind of failure, without its details.
    pub fn kind(&self) -> ResourceErrorKind {
        match self {
            Self::CreationNotSupported { .. } => ResourceErrorKind::NotSupported,
            Self::CreationAmbiguous { .. } => ResourceErrorKind::Ambiguous,
            Self::Locator(_) => ResourceErrorKind::Locator,
        }
    }

    /// Whether no locator supported the class.
    pub fn is_not_supported(&self) -> bool {
        self.kind() == ResourceErrorKind::NotSupported
    }

    /// Whether several locators tied on the best match score.
    pub fn is_ambiguous(&self) -> bool {
        self.kind() == ResourceErrorKind::Ambiguous
    }
}
