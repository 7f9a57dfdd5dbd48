//! Tests for error formatting and source chaining

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::io;
    use std::path::PathBuf;

    use tilegrid::EditorError;
    use tilegrid::io::error::{invalid_parameter, level_file_error};

    // Tests messages name the offending values
    // Verified by dropping the key from the malformed message
    #[test]
    fn test_display_messages() {
        let error = EditorError::MalformedTileKey {
            key: "1-x-FL".to_string(),
            reason: "sprite_y is not a non-negative integer",
        };
        assert_eq!(
            error.to_string(),
            "Malformed tile key '1-x-FL': sprite_y is not a non-negative integer"
        );

        let error = EditorError::IndexOutOfBounds { index: 12, len: 9 };
        assert_eq!(error.to_string(), "Tile index 12 is out of bounds (len: 9)");

        let error = EditorError::UnknownLevel {
            name: "cave".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown level 'cave'");

        let error = EditorError::InvalidDimensions {
            width: 0,
            height: 4,
        };
        assert_eq!(
            error.to_string(),
            "Invalid grid dimensions 0x4: both must be positive"
        );
    }

    // Tests the parameter helper stringifies its arguments
    // Verified by swapping value and reason
    #[test]
    fn test_invalid_parameter_helper() {
        let error = invalid_parameter("anchor", &"sideways", &"unknown anchor");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'anchor' = 'sideways': unknown anchor"
        );
        assert!(error.source().is_none());
    }

    // Tests wrapped errors expose their source
    // Verified by returning None from source for every variant
    #[test]
    fn test_sources_are_chained() {
        let json = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let error = level_file_error(&"parsing level document", json);
        assert!(error.to_string().starts_with("Level file error (parsing level document)"));
        assert!(error.source().is_some());

        let error = EditorError::FileSystem {
            path: PathBuf::from("levels.json"),
            operation: "read",
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(error.to_string().contains("during read on 'levels.json'"));
        assert!(error.source().is_some());
    }
}
