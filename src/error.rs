use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors at the configuration boundary.
///
/// The simulation itself never fails; only reading or writing settings can.
#[derive(Debug, Error)]
pub enum Error {
    /// A setting is outside what the simulation can use.
    #[error("invalid setting: {0}")]
    InvalidSetting(String),

    /// Settings file is not valid JSON for [`crate::Settings`].
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_informative() {
        let e = Error::InvalidSetting("arena width must be > 0".to_string());
        let msg = format!("{e}");
        assert!(msg.contains("invalid setting"));
        assert!(msg.contains("arena width"));
    }

    #[test]
    fn parse_error_converts() {
        let err: Error = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, Error::Parse(_)));
    }
}
