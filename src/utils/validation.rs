//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos,
//! incluyendo el validador de capacidad de carga.

use num_traits::Zero;
use rust_decimal::Decimal;
use serde::Serialize;
use validator::ValidationError;

use crate::utils::errors::AppError;

/// Validar el peso de carga contra la capacidad máxima del vehículo.
/// Pura, sin efectos secundarios. Se aplica al crear un trip y al editar
/// un trip que sigue en Draft.
pub fn validate_cargo_weight(cargo_weight: Decimal, max_capacity: Decimal) -> Result<(), AppError> {
    if cargo_weight > max_capacity {
        return Err(AppError::CapacityExceeded {
            cargo_weight,
            max_capacity,
        });
    }
    Ok(())
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea no negativo
pub fn validate_non_negative<T: PartialOrd + std::fmt::Display + Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Wrapper para `#[validate(custom = ...)]` sobre campos Decimal
pub fn validate_positive_decimal(value: &Decimal) -> Result<(), ValidationError> {
    validate_positive(*value)
}

/// Wrapper para `#[validate(custom = ...)]` sobre campos Decimal opcionales
pub fn validate_non_negative_decimal(value: &Decimal) -> Result<(), ValidationError> {
    validate_non_negative(*value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_validate_cargo_weight_within_capacity() {
        assert!(validate_cargo_weight(dec("500"), dec("1000")).is_ok());
        // el límite exacto está permitido
        assert!(validate_cargo_weight(dec("1000"), dec("1000")).is_ok());
    }

    #[test]
    fn test_validate_cargo_weight_exceeded() {
        let err = validate_cargo_weight(dec("1200"), dec("1000")).unwrap_err();
        match err {
            AppError::CapacityExceeded {
                cargo_weight,
                max_capacity,
            } => {
                assert_eq!(cargo_weight, dec("1200"));
                assert_eq!(max_capacity, dec("1000"));
            }
            other => panic!("expected CapacityExceeded, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("Lyon").is_ok());
        assert!(validate_not_empty("").is_err());
        assert!(validate_not_empty("   ").is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(5).is_ok());
        assert!(validate_positive(0).is_err());
        assert!(validate_positive(-5).is_err());
        assert!(validate_positive_decimal(&dec("0.5")).is_ok());
        assert!(validate_positive_decimal(&dec("0")).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative(0).is_ok());
        assert!(validate_non_negative(-1).is_err());
        assert!(validate_non_negative_decimal(&dec("0")).is_ok());
        assert!(validate_non_negative_decimal(&dec("-0.1")).is_err());
    }
}
