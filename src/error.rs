use std::path::PathBuf;

/// Errors surfaced by the library. Illegal moves are not errors: the player
/// API reports them as `false`.
#[derive(Debug, thiserror::Error)]
pub enum NetError {
    #[error("invalid color {0} (expected 0 for black or 1 for white)")]
    InvalidColor(i32),

    #[error("unknown color '{0}' (expected black or white)")]
    UnknownColor(String),

    #[error("cannot parse move '{input}': {reason}")]
    ParseMove { input: String, reason: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_color_display() {
        let err = NetError::InvalidColor(7);
        assert_eq!(err.to_string(), "invalid color 7 (expected 0 for black or 1 for white)");
    }

    #[test]
    fn parse_move_display() {
        let err = NetError::ParseMove { input: "hop 1 2".into(), reason: "unknown move kind".into() };
        assert_eq!(err.to_string(), "cannot parse move 'hop 1 2': unknown move kind");
    }
}
