//! # Keypair Module
//!
//! [`KeyMaterial`] holds what both halves of a pair share. [`PublicKey`]
//! carries the vectors A and B, [`PrivateKey`] the scalar secret.

pub mod keys;
pub mod material;
pub mod options;

pub use keys::{DEFAULT_SECRET, PrivateKey, PublicKey, generate_key_pair};
pub use material::KeyMaterial;
pub use options::KeyOptions;
