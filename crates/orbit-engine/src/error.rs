//! Error types for the animation core.
//!
//! Every failure is local and synchronous: there is no I/O in the engine, so
//! nothing here is ever retried. A failing tick is reported, not fatal.

use thiserror::Error;

/// Errors produced by the engine.
#[derive(Error, Debug)]
pub enum OrbitError {
    /// A precondition on an argument was violated (e.g. zero entity count).
    /// Indicates a scene-assembly bug, not a transient condition.
    #[error("Invalid argument: {context} (value: {value})")]
    InvalidArgument {
        /// What was being validated.
        context: &'static str,
        /// The offending value.
        value: usize,
    },

    /// `tick` was called before the render loop was started.
    #[error("Render loop is idle; call start() before tick()")]
    NotRunning,

    /// The scene configuration JSON could not be parsed.
    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),

    /// The scene configuration parsed but describes an impossible scene.
    #[error("Invalid scene config: {0}")]
    InvalidConfig(String),
}

/// Result alias used across the engine.
pub type Result<T> = std::result::Result<T, OrbitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_message_names_context() {
        let err = OrbitError::InvalidArgument { context: "entity count", value: 0 };
        assert_eq!(err.to_string(), "Invalid argument: entity count (value: 0)");
    }

    #[test]
    fn json_errors_convert() {
        let parse: std::result::Result<u32, _> = serde_json::from_str("not json");
        let err: OrbitError = parse.unwrap_err().into();
        assert!(matches!(err, OrbitError::Config(_)));
    }
}
