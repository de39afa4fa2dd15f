//! # Codec Module
//!
//! [`bit`] holds the encryption primitive, [`string`] extends it to text.

pub mod bit;
pub mod string;

pub use bit::{EncryptedVector, decrypt_bit, encrypt_bit};
pub use string::{
    Ciphertext, bits_of, bytes_of, ciphertext_from_json, ciphertext_to_json, decrypt_bytes,
    decrypt_data, encrypt_bytes, encrypt_string,
};
