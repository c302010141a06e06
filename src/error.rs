//! Error types for lector.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LectorError {
    // Configuration errors
    #[error("Configuration file not found at {path}")]
    ConfigFileNotFound { path: String },

    #[error("Failed to parse configuration: {message}")]
    ConfigParse { message: String },

    #[error("Invalid configuration value for {key}: {message}")]
    ConfigInvalidValue { key: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    // Input errors
    #[error("Failed to read input {path}: {message}")]
    InputRead { path: String, message: String },

    // Synthesis errors
    #[error("Synthesis engine error: {message}")]
    Synthesis { message: String },

    #[error("Synthesis failed for chunk {chunk_index}: {message}")]
    ChunkSynthesis { chunk_index: usize, message: String },

    #[error("Sample rate mismatch: expected {expected} Hz, got {actual} Hz")]
    SampleRateMismatch { expected: u32, actual: u32 },

    // Output errors
    #[error("Failed to write audio to {path}: {message}")]
    AudioWrite { path: String, message: String },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error for cases not covered above
    #[error("{0}")]
    Other(String),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, LectorError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_config_file_not_found_display() {
        let error = LectorError::ConfigFileNotFound {
            path: "/path/to/config.toml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found at /path/to/config.toml"
        );
    }

    #[test]
    fn test_config_invalid_value_display() {
        let error = LectorError::ConfigInvalidValue {
            key: "max_words_per_chunk".to_string(),
            message: "must be greater than zero".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration value for max_words_per_chunk: must be greater than zero"
        );
    }

    #[test]
    fn test_input_read_display() {
        let error = LectorError::InputRead {
            path: "book.pdf".to_string(),
            message: "no such file".to_string(),
        };
        assert_eq!(error.to_string(), "Failed to read input book.pdf: no such file");
    }

    #[test]
    fn test_synthesis_display() {
        let error = LectorError::Synthesis {
            message: "engine exited with status 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Synthesis engine error: engine exited with status 1"
        );
    }

    #[test]
    fn test_chunk_synthesis_display_carries_index() {
        let error = LectorError::ChunkSynthesis {
            chunk_index: 7,
            message: "unsupported characters".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Synthesis failed for chunk 7: unsupported characters"
        );
    }

    #[test]
    fn test_sample_rate_mismatch_display() {
        let error = LectorError::SampleRateMismatch {
            expected: 22050,
            actual: 16000,
        };
        assert_eq!(
            error.to_string(),
            "Sample rate mismatch: expected 22050 Hz, got 16000 Hz"
        );
    }

    #[test]
    fn test_audio_write_display() {
        let error = LectorError::AudioWrite {
            path: "out.wav".to_string(),
            message: "permission denied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to write audio to out.wav: permission denied"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error: LectorError = io_error.into();
        assert!(error.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_toml_error() {
        let toml_str = "invalid = toml = syntax";
        let toml_error = toml::from_str::<toml::Value>(toml_str).unwrap_err();
        let error: LectorError = toml_error.into();
        assert!(error.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<LectorError>();
        assert_sync::<LectorError>();
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(returns_result().unwrap(), 42);
    }
}
