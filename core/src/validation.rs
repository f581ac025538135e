// Validation logic for diagram input

/// Validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("diagram kind is empty")]
    EmptyKind,

    #[error("diagram kind must be an identifier (letters, digits, '-' or '_'): {0:?}")]
    InvalidKind(String),

    #[error("unknown diagram kind: {0}")]
    UnknownKind(String),

    #[error("unknown output format: {0}")]
    UnknownFormat(String),
}

/// Validate a diagram kind
///
/// # Rules
/// - Kind must not be empty
/// - Kind must only contain ASCII letters, digits, '-' and '_'
///
/// Note: the kind is NOT checked against the list of known kinds here.
/// The service rejects kinds it does not support.
pub fn validate_kind(kind: &str) -> Result<(), ValidationError> {
    if kind.is_empty() {
        return Err(ValidationError::EmptyKind);
    }

    let identifier_like = kind
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !identifier_like {
        return Err(ValidationError::InvalidKind(kind.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_kinds() {
        assert!(validate_kind("plantuml").is_ok());
        assert!(validate_kind("C4PlantUML").is_ok());
        assert!(validate_kind("vega-lite").is_ok());
        assert!(validate_kind("my_tool2").is_ok());
    }

    #[test]
    fn test_empty_kind() {
        assert_eq!(validate_kind(""), Err(ValidationError::EmptyKind));
    }

    #[test]
    fn test_kind_with_path_characters() {
        assert!(matches!(
            validate_kind("plantuml/svg"),
            Err(ValidationError::InvalidKind(_))
        ));
        assert!(matches!(
            validate_kind("plant uml"),
            Err(ValidationError::InvalidKind(_))
        ));
    }

    #[test]
    fn test_unknown_kind_is_still_valid() {
        // The service decides whether it supports the kind
        assert!(validate_kind("notarealtool").is_ok());
    }
}
