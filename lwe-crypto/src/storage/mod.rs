//! # Storage Module
//!
//! JSON key files:
//!
//! * public key, `pub.lwe.key`: `{ "Aval": [..], "Bval": [..], "eq": n, "mod": q }`
//! * private key, `sec.lwe.key`: `{ "sec": s }`
//!
//! The private key file stores only the secret, so loading it takes the
//! modulus and equation count from the caller.
//!
//! `"mod"` is required when a public key is loaded. Files that carry only
//! `Aval`, `Bval` and `eq`, as older savers wrote them, are rejected with
//! [`LweError::SerializationError`]; add the modulus by hand to load them.
//!
//! Loading is the only way to build keys from JSON: every file goes through
//! [`KeyMaterial::try_with`] and [`PublicKey::set_a_vec`].

use crate::errors::LweError;
use crate::keypair::{KeyMaterial, PrivateKey, PublicKey};
use crate::ring::Vector;

use serde::{Deserialize, Serialize};

use std::fs;
use std::path::{Path, PathBuf};

pub const PUBLIC_KEY_FILE: &str = "pub.lwe.key";
pub const PRIVATE_KEY_FILE: &str = "sec.lwe.key";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKeyFile {
    #[serde(rename = "Aval")]
    pub a_val: Vector,
    #[serde(rename = "Bval")]
    pub b_val: Vector,
    pub eq: usize,
    #[serde(rename = "mod")]
    pub modulus: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateKeyFile {
    pub sec: i64,
}

/// Directory key files are written to, the current one when none is given.
pub fn key_directory(directory: Option<&Path>) -> PathBuf {
    directory.map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

impl From<&PublicKey> for PublicKeyFile {
    fn from(key: &PublicKey) -> Self {
        Self {
            a_val: key.get_a().to_vec(),
            b_val: key.get_b().to_vec(),
            eq: key.equation_count(),
            modulus: key.modulus(),
        }
    }
}

impl TryFrom<PublicKeyFile> for PublicKey {
    type Error = LweError;

    fn try_from(file: PublicKeyFile) -> Result<Self, Self::Error> {
        let material = KeyMaterial::try_with(file.modulus, file.eq, Vector::new())?;
        PublicKey::from_parts(material, file.a_val, file.b_val)
    }
}

impl PublicKey {
    pub fn to_json(&self) -> Result<String, LweError> {
        Ok(serde_json::to_string(&PublicKeyFile::from(self))?)
    }

    pub fn from_json(data: &str) -> Result<Self, LweError> {
        let file: PublicKeyFile = serde_json::from_str(data)?;
        Self::try_from(file)
    }

    /// Writes `pub.lwe.key` into `directory` and returns the file path.
    pub fn save_to_file(&self, directory: Option<&Path>) -> Result<PathBuf, LweError> {
        let path = key_directory(directory).join(PUBLIC_KEY_FILE);
        fs::write(&path, self.to_json()?)?;

        log::info!("Saved public key to {}", path.display());
        Ok(path)
    }

    pub fn from_key_file(path: impl AsRef<Path>) -> Result<Self, LweError> {
        let path = path.as_ref();
        let key = Self::from_json(&fs::read_to_string(path)?)?;

        log::info!(
            "Loaded public key from {} (q = {}, n = {})",
            path.display(),
            key.modulus(),
            key.equation_count()
        );
        Ok(key)
    }
}

impl PrivateKey {
    pub fn to_json(&self) -> Result<String, LweError> {
        Ok(serde_json::to_string(&PrivateKeyFile {
            sec: self.secret(),
        })?)
    }

    pub fn from_json(data: &str, material: KeyMaterial) -> Result<Self, LweError> {
        let file: PrivateKeyFile = serde_json::from_str(data)?;
        Ok(Self::with_secret(material, file.sec))
    }

    /// Writes `sec.lwe.key` into `directory` and returns the file path.
    pub fn save_to_file(&self, directory: Option<&Path>) -> Result<PathBuf, LweError> {
        let path = key_directory(directory).join(PRIVATE_KEY_FILE);
        fs::write(&path, self.to_json()?)?;

        log::info!("Saved private key to {}", path.display());
        Ok(path)
    }

    pub fn from_key_file(path: impl AsRef<Path>, material: KeyMaterial) -> Result<Self, LweError> {
        let path = path.as_ref();
        let key = Self::from_json(&fs::read_to_string(path)?, material)?;

        log::info!("Loaded private key from {}", path.display());
        Ok(key)
    }
}
