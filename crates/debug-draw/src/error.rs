use std::fmt;

/// Reasons the overlay refuses to attach to a scene.
///
/// Neither is fatal to the host: the overlay simply stays inert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebugDrawError {
    /// The host runtime lacks the metadata the overlay relies on.
    IncompatibleHost { host: String },
    /// The overlay was already torn down by a destroy signal.
    Destroyed,
}

impl fmt::Display for DebugDrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DebugDrawError::IncompatibleHost { host } => {
                write!(f, "debug-draw does not work with host '{host}'; plugin not loaded")
            }
            DebugDrawError::Destroyed => write!(f, "debug-draw plugin was already destroyed"),
        }
    }
}

impl std::error::Error for DebugDrawError {}
