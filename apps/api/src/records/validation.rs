use crate::errors::AppError;

/// South-west corner of the accepted volunteer area (India).
pub const INDIA_SOUTH_WEST: (f64, f64) = (6.74, 68.11);
/// North-east corner of the accepted volunteer area (India).
pub const INDIA_NORTH_EAST: (f64, f64) = (37.09, 97.41);

/// Trimmed value of a required text field.
pub fn require_text(field: &str, value: Option<String>) -> Result<String, AppError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Validation(format!("{field} is required.")))
}

/// Works for both integer ages and fractional scores. NaN is rejected.
pub fn require_non_negative<T>(field: &str, value: Option<T>) -> Result<T, AppError>
where
    T: PartialOrd + Default,
{
    match value {
        Some(v) if v >= T::default() => Ok(v),
        Some(_) => Err(AppError::Validation(format!("{field} must not be negative."))),
        None => Err(AppError::Validation(format!("{field} is required."))),
    }
}

/// Coordinates are optional, but must come as a pair inside the bounding box.
pub fn validate_coordinates(
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<Option<(f64, f64)>, AppError> {
    match (latitude, longitude) {
        (None, None) => Ok(None),
        (Some(lat), Some(lng)) => {
            let (south, west) = INDIA_SOUTH_WEST;
            let (north, east) = INDIA_NORTH_EAST;
            if (south..=north).contains(&lat) && (west..=east).contains(&lng) {
                Ok(Some((lat, lng)))
            } else {
                Err(AppError::Validation(format!(
                    "Location ({lat}, {lng}) is outside the supported region."
                )))
            }
        }
        _ => Err(AppError::Validation(
            "latitude and longitude must be provided together.".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_trims_and_rejects_blank() {
        assert_eq!(require_text("name", Some("  Asha ".into())).unwrap(), "Asha");
        assert!(require_text("name", Some("   ".into())).is_err());
        assert!(require_text("name", None).is_err());
    }

    #[test]
    fn test_require_non_negative() {
        assert_eq!(require_non_negative("score", Some(0)).unwrap(), 0);
        assert!(require_non_negative("score", Some(-1)).is_err());
        assert!(require_non_negative::<i32>("score", None).is_err());
        assert_eq!(require_non_negative("score", Some(35.5)).unwrap(), 35.5);
        assert!(require_non_negative("score", Some(-0.5)).is_err());
        assert!(require_non_negative("score", Some(f64::NAN)).is_err());
    }

    #[test]
    fn test_coordinates_inside_india_accepted() {
        // New Delhi
        assert_eq!(
            validate_coordinates(Some(28.61), Some(77.21)).unwrap(),
            Some((28.61, 77.21))
        );
        // Bounding box corners are inclusive.
        assert!(validate_coordinates(Some(6.74), Some(68.11)).is_ok());
        assert!(validate_coordinates(Some(37.09), Some(97.41)).is_ok());
    }

    #[test]
    fn test_coordinates_outside_india_rejected() {
        // London
        assert!(validate_coordinates(Some(51.5), Some(-0.12)).is_err());
        assert!(validate_coordinates(Some(40.0), Some(77.0)).is_err());
    }

    #[test]
    fn test_coordinates_must_be_paired() {
        assert_eq!(validate_coordinates(None, None).unwrap(), None);
        assert!(validate_coordinates(Some(28.6), None).is_err());
        assert!(validate_coordinates(None, Some(77.2)).is_err());
    }
}
