//! Error type shared by the wheel crates.

/// Errors raised while building, rendering, or running a wheel.
#[derive(Debug, thiserror::Error)]
pub enum WheelError {
    /// A wheel was built without segments.
    #[error("configuration error: a wheel needs at least one segment")]
    EmptyWheel,

    /// A font candidate could not be loaded.
    #[error("font {source_name} unavailable: {reason}")]
    FontUnavailable { source_name: String, reason: String },

    /// A frame could not be produced or delivered.
    #[error("render error: {0}")]
    Render(String),

    /// An image could not be encoded or written.
    #[error("image error: {0}")]
    Image(String),

    /// The user interrupted a running spin.
    #[error("spin interrupted")]
    Interrupted,

    /// I/O failure (terminal, snapshot file).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl WheelError {
    /// Whether the error is a configuration problem rather than a runtime one.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self, Self::EmptyWheel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert!(WheelError::EmptyWheel.to_string().contains("at least one segment"));
        let err = WheelError::FontUnavailable {
            source_name: "arial.ttf".into(),
            reason: "not found".into(),
        };
        assert_eq!(err.to_string(), "font arial.ttf unavailable: not found");
        assert_eq!(
            WheelError::Render("closed".into()).to_string(),
            "render error: closed"
        );
    }

    #[test]
    fn io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: WheelError = io.into();
        assert!(matches!(err, WheelError::Io(_)));
        assert!(!err.is_config());
    }

    #[test]
    fn config_classification() {
        assert!(WheelError::EmptyWheel.is_config());
        assert!(!WheelError::Interrupted.is_config());
    }
}
