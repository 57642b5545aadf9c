use std::fmt;

/// Main error type for the locke-manager engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// An invariant or contract was broken: adding to a full squad,
    /// submitting a choice outside the current option set, and so on.
    /// Always fatal to the current operation.
    Precondition(String),
    /// A referenced entity does not exist.
    NotFound(NotFoundError),
    /// An entity could not be constructed from the given data.
    Validation(String),
}

/// Lookup failures, kept per entity kind so callers can distinguish a bad
/// id from bad state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    Run(String),
    Creature(String),
    Species(String),
    Game(String),
    Variant(String),
    Action(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Precondition(details) => {
                write!(f, "Precondition violated: {}", details)
            }
            EngineError::NotFound(err) => write!(f, "{}", err),
            EngineError::Validation(details) => write!(f, "Validation failed: {}", details),
        }
    }
}

impl fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFoundError::Run(id) => write!(f, "Run not found: {}", id),
            NotFoundError::Creature(id) => write!(f, "Creature not found: {}", id),
            NotFoundError::Species(name) => write!(f, "Species not found: {}", name),
            NotFoundError::Game(name) => write!(f, "Game not found: {}", name),
            NotFoundError::Variant(name) => write!(f, "Variant not found: {}", name),
            NotFoundError::Action(name) => write!(f, "Action not found: {}", name),
        }
    }
}

impl std::error::Error for EngineError {}
impl std::error::Error for NotFoundError {}

impl From<NotFoundError> for EngineError {
    fn from(err: NotFoundError) -> Self {
        EngineError::NotFound(err)
    }
}

/// Convenience alias used across the engine.
pub type EngineResult<T> = Result<T, EngineError>;

/// Shorthand for the ubiquitous precondition failure.
pub fn precondition(details: impl Into<String>) -> EngineError {
    EngineError::Precondition(details.into())
}
