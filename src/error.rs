//! Error types for the windowed front end.
//!
//! The integration core cannot fail; only acquiring a display can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("could not acquire a display context: {0}")]
    DisplayUnavailable(String),
}

#[cfg(feature = "viz")]
impl From<eframe::Error> for RenderError {
    fn from(err: eframe::Error) -> Self {
        RenderError::DisplayUnavailable(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_the_cause() {
        let err = RenderError::DisplayUnavailable("no GL".into());
        assert_eq!(err.to_string(), "could not acquire a display context: no GL");
    }
}
