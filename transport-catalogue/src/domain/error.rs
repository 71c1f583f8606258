//! Domain error types.
//!
//! These errors represent validation failures for network values.
//! They are distinct from catalogue lookup and routing errors.

/// Domain-level errors for value validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Latitude or longitude is NaN or infinite
    #[error("invalid coordinates ({lat}, {lng}): components must be finite")]
    InvalidCoordinates { lat: f64, lng: f64 },

    /// Entity names are used as identities and cannot be blank
    #[error("entity name must not be empty")]
    EmptyName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::InvalidCoordinates {
            lat: f64::NAN,
            lng: 1.0,
        };
        assert_eq!(
            err.to_string(),
            "invalid coordinates (NaN, 1): components must be finite"
        );

        let err = DomainError::EmptyName;
        assert_eq!(err.to_string(), "entity name must not be empty");
    }
}
