#[cfg(test)]
mod tests {
    use crate::error::Error;
    use std::path::PathBuf;

    #[test]
    fn test_invalid_settings_message_names_the_file() {
        let source = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
        let err = Error::InvalidModelSettings {
            path: PathBuf::from("/models/sum-model/model-settings.json"),
            source,
        };

        let message = err.to_string();
        assert!(message.contains("/models/sum-model/model-settings.json"));
        assert!(message.starts_with("Invalid model settings at"));
    }

    #[test]
    fn test_error_messages() {
        let err = Error::ModelNotFound("sum-model".to_string());
        assert_eq!(err.to_string(), "Model not found: sum-model");

        let err = Error::ConfigError("bad repository root".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad repository root");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            Error::ModelNotFound("x".to_string()).error_type(),
            "model_not_found"
        );
        assert_eq!(
            Error::ConfigError("x".to_string()).error_type(),
            "config_error"
        );

        let source = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let err = Error::InvalidModelSettings {
            path: PathBuf::from("model-settings.json"),
            source,
        };
        assert_eq!(err.error_type(), "invalid_model_settings");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.error_type(), "io_error");
    }

    #[test]
    fn test_serde_conversion() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: Error = source.into();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
