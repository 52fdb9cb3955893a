//! Error types used in the library.
//!
//! Both errors are local and synchronous, with no retry semantics: the library does no I/O and
//! has nothing transient to fail on.
//! Throughout the library `err::{self}` is used to prefix the types with `err::`.

/// Any error raised by the library.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Evaluation(EvaluationError),
    Structure(StructureError),
}

/// Noted errors during evaluation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EvaluationError {
    /// The named atom has no value on the valuation evaluated against.
    ///
    /// Raised by the atom itself and propagated unmodified through every enclosing connective.
    Unvalued(String),
}

impl From<EvaluationError> for ErrorKind {
    fn from(e: EvaluationError) -> Self {
        ErrorKind::Evaluation(e)
    }
}

/// Noted errors in the structure of a sentence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StructureError {
    /// An attempt to append a conjunct to some variant other than a conjunction.
    ///
    /// Conjunctions alone may grow after construction.
    NotAConjunction,
}

impl From<StructureError> for ErrorKind {
    fn from(e: StructureError) -> Self {
        ErrorKind::Structure(e)
    }
}

// Traits

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ErrorKind::Evaluation(e) => write!(f, "{e}"),
            ErrorKind::Structure(e) => write!(f, "{e}"),
        }
    }
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            EvaluationError::Unvalued(name) => write!(f, "atom {name} has no value"),
        }
    }
}

impl std::fmt::Display for StructureError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            StructureError::NotAConjunction => write!(f, "append to a non-conjunction"),
        }
    }
}

impl std::error::Error for ErrorKind {}

impl std::error::Error for EvaluationError {}

impl std::error::Error for StructureError {}
