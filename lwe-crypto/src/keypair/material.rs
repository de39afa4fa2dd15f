use crate::errors::LweError;
use crate::keypair::options::KeyOptions;
use crate::ring::{Ring, Vector};

use serde::{Deserialize, Serialize};

/// Parameters shared by both halves of a key pair.
///
/// Serializes in the [`KeyOptions`] shape and deserializes through
/// [`KeyMaterial::try_with`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "KeyOptions", into = "KeyOptions")]
pub struct KeyMaterial {
    /// Ring Z_q all key and ciphertext values are reduced into.
    ring: Ring,
    /// Number of equations n, the length of A, B and the error vector.
    equation_count: usize,
    /// Noise terms added while deriving B. Only used during key generation,
    /// so keys loaded from storage carry an empty vector.
    error_vector: Vector,
}

impl KeyMaterial {
    /// Creates a new KeyMaterial instance with the given parameters.
    ///
    /// The error vector may be shorter than `equation_count` here; that only
    /// fails once B is actually generated.
    pub fn try_with(
        modulus: u64,
        equation_count: usize,
        error_vector: Vector,
    ) -> Result<Self, LweError> {
        let ring = Ring::try_with(modulus)?;

        if equation_count == 0 {
            return Err(LweError::InvalidParameters(
                "Number of equations n must be > 0".to_string(),
            ));
        }

        if let Some(negative) = error_vector.iter().find(|&&e| e < 0) {
            return Err(LweError::InvalidParameters(format!(
                "Error vector entries must be non-negative, got {}",
                negative
            )));
        }

        Ok(Self {
            ring,
            equation_count,
            error_vector,
        })
    }

    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    pub fn modulus(&self) -> u64 {
        self.ring.modulus()
    }

    pub fn equation_count(&self) -> usize {
        self.equation_count
    }

    pub fn error_vector(&self) -> &[i64] {
        &self.error_vector
    }

    /// Same modulus and equation count, without the error terms.
    pub fn without_errors(&self) -> Self {
        Self {
            ring: self.ring,
            equation_count: self.equation_count,
            error_vector: Vector::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_creation() -> Result<(), LweError> {
        let material = KeyMaterial::try_with(97, 5, vec![1, 1, 4, 1, 4])?;
        assert_eq!(material.modulus(), 97);
        assert_eq!(material.equation_count(), 5);
        assert_eq!(material.error_vector(), &[1, 1, 4, 1, 4]);
        Ok(())
    }

    #[test]
    fn test_rejects_bad_parameters() {
        assert!(matches!(
            KeyMaterial::try_with(1, 5, vec![]),
            Err(LweError::InvalidModulus(_))
        ));
        assert!(matches!(
            KeyMaterial::try_with(97, 0, vec![]),
            Err(LweError::InvalidParameters(_))
        ));
        assert!(matches!(
            KeyMaterial::try_with(97, 2, vec![1, -1]),
            Err(LweError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_short_error_vector_is_accepted_at_construction() -> Result<(), LweError> {
        let material = KeyMaterial::try_with(13, 3, vec![])?;
        assert!(material.error_vector().is_empty());
        Ok(())
    }

    #[test]
    fn test_json_goes_through_validation() {
        let result = serde_json::from_str::<KeyMaterial>(
            r#"{ "modulus": 0, "equation_count": 0, "error_vector": [-3] }"#,
        );
        assert!(result.is_err());

        let result = serde_json::from_str::<KeyMaterial>(
            r#"{ "modulus": 97, "equation_count": 2, "error_vector": [1, -3] }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_json_keeps_valid_material() -> Result<(), LweError> {
        let material = KeyMaterial::try_with(97, 5, vec![1, 1, 4, 1, 4])?;
        let json = serde_json::to_string(&material)?;
        assert_eq!(
            json,
            r#"{"modulus":97,"equation_count":5,"error_vector":[1,1,4,1,4]}"#
        );
        assert_eq!(serde_json::from_str::<KeyMaterial>(&json)?, material);
        Ok(())
    }

    #[test]
    fn test_without_errors_keeps_context() -> Result<(), LweError> {
        let material = KeyMaterial::try_with(13, 3, vec![1, 2, 1])?.without_errors();
        assert_eq!(material.modulus(), 13);
        assert_eq!(material.equation_count(), 3);
        assert!(material.error_vector().is_empty());
        Ok(())
    }
}
