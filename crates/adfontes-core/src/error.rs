//! Error types for the Ad Fontes application.

use thiserror::Error;

/// A shared error type for the entire Ad Fontes application.
///
/// Provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait. Every variant renders as a
/// single human-readable line suitable for a status message.
#[derive(Error, Debug, Clone)]
pub enum AdFontesError {
    /// Input validation error (raised before any I/O happens)
    #[error("{0}")]
    Validation(String),

    /// The dictionary has no entry for the looked-up word (HTTP 404)
    #[error("Word \"{word}\" not found in dictionary.")]
    WordNotFound { word: String },

    /// Dictionary service returned a non-success status other than 404
    #[error("API Error: {status_text}")]
    Api { status_text: String },

    /// Network-level failure (unreachable host, timeout, broken body)
    #[error("Network error: {0}")]
    Transport(String),

    /// Clipboard write failure (non-fatal, surfaced as a status only)
    #[error("Failed to copy to clipboard: {0}")]
    Clipboard(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Data access error (repository/storage layer)
    #[error("Data access error: {0}")]
    DataAccess(String),

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AdFontesError {
    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a WordNotFound error for a dictionary lookup miss
    pub fn word_not_found(word: impl Into<String>) -> Self {
        Self::WordNotFound { word: word.into() }
    }

    /// Creates an Api error from a status text
    pub fn api(status_text: impl Into<String>) -> Self {
        Self::Api {
            status_text: status_text.into(),
        }
    }

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates a Clipboard error
    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::Clipboard(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a DataAccess error
    pub fn data_access(message: impl Into<String>) -> Self {
        Self::DataAccess(message.into())
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a WordNotFound error
    pub fn is_word_not_found(&self) -> bool {
        matches!(self, Self::WordNotFound { .. })
    }

    /// Check if this is a Clipboard error
    pub fn is_clipboard(&self) -> bool {
        matches!(self, Self::Clipboard(_))
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<std::io::Error> for AdFontesError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for AdFontesError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for AdFontesError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for AdFontesError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, AdFontesError>`.
pub type Result<T> = std::result::Result<T, AdFontesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_not_found_message_embeds_word() {
        let err = AdFontesError::word_not_found("zyzzyva");
        assert_eq!(err.to_string(), "Word \"zyzzyva\" not found in dictionary.");
    }

    #[test]
    fn test_api_error_message() {
        let err = AdFontesError::api("Internal Server Error");
        assert_eq!(err.to_string(), "API Error: Internal Server Error");
    }

    #[test]
    fn test_predicates() {
        assert!(AdFontesError::validation("empty").is_validation());
        assert!(AdFontesError::word_not_found("x").is_word_not_found());
        assert!(AdFontesError::clipboard("denied").is_clipboard());
        assert!(AdFontesError::not_found("prompt", "p-1").is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: AdFontesError = io.into();
        assert!(matches!(err, AdFontesError::Io { .. }));
    }
}
