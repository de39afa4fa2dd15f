//! Key generation parameters as they are written in configuration files.

use crate::errors::LweError;
use crate::keypair::material::KeyMaterial;
use crate::ring::Vector;

use serde::{Deserialize, Serialize};

use std::fs;
use std::path::Path;

/// Unvalidated key parameters.
///
/// ```json
/// { "modulus": 97, "equation_count": 5, "error_vector": [1, 1, 4, 1, 4] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyOptions {
    pub modulus: u64,
    pub equation_count: usize,
    #[serde(default)]
    pub error_vector: Vector,
}

impl KeyOptions {
    pub fn from_json_str(data: &str) -> Result<Self, LweError> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LweError> {
        let path = path.as_ref();
        log::debug!("Loading key options from {}", path.display());

        Self::from_json_str(&fs::read_to_string(path)?)
    }

    /// Validates the options into [`KeyMaterial`].
    pub fn into_material(self) -> Result<KeyMaterial, LweError> {
        KeyMaterial::try_with(self.modulus, self.equation_count, self.error_vector)
    }
}

impl From<KeyMaterial> for KeyOptions {
    fn from(material: KeyMaterial) -> Self {
        Self {
            modulus: material.modulus(),
            equation_count: material.equation_count(),
            error_vector: material.error_vector().to_vec(),
        }
    }
}

impl TryFrom<KeyOptions> for KeyMaterial {
    type Error = LweError;

    fn try_from(options: KeyOptions) -> Result<Self, Self::Error> {
        options.into_material()
    }
}
