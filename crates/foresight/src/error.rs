//! Mount errors.

use foresight_core::EngineError;
use foresight_widgets::ConfigError;
use thiserror::Error;

/// Why the background could not start.
#[derive(Debug, Error)]
pub enum MountError {
    /// Host environment problem (canvas, context, viewport).
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Configuration could not be parsed or failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_error_is_transparent() {
        let err = MountError::from(EngineError::ElementNotFound("bg".into()));
        assert_eq!(err.to_string(), "element 'bg' not found");

        let err = MountError::from(ConfigError::Invalid {
            field: "breakpoint",
            reason: "must be a positive number",
        });
        assert!(err.to_string().starts_with("invalid config field"));
    }
}
