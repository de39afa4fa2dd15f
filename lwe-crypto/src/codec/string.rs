//! Text encryption built on the bit primitive.
//!
//! Every UTF-8 byte is split into bits with [`bits_of`] and each bit is
//! encrypted on its own. The ciphertext keeps one group of encrypted bits per
//! source byte, so decryption never needs a fixed frame width.

use crate::codec::bit::{EncryptedVector, decrypt_bit, encrypt_bit};
use crate::errors::LweError;
use crate::keypair::{PrivateKey, PublicKey};
use crate::sampler::Sampler;

/// Outer index: byte position. Inner index: bit position within that byte.
pub type Ciphertext = Vec<Vec<EncryptedVector>>;

/// UTF-8 bytes of `text`.
pub fn bytes_of(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Binary digits of `value`, most significant first, behind one leading 0.
///
/// Values below 128 come out as 8 bits. 128..=255 need 9 because the leading
/// zero is always added, and 0 becomes the single bit `[0]`.
///
/// ```
/// # use lwe_crypto::codec::bits_of;
/// assert_eq!(bits_of(104).unwrap(), vec![0, 1, 1, 0, 1, 0, 0, 0]);
/// assert_eq!(bits_of(0).unwrap(), vec![0]);
/// assert!(bits_of(-1).is_err());
/// ```
pub fn bits_of(value: i64) -> Result<Vec<u8>, LweError> {
    if value < 0 {
        return Err(LweError::ValidationError(format!(
            "The number must be non-negative, got {}",
            value
        )));
    }

    let mut bits = Vec::new();
    let mut rest = value;
    while rest > 0 {
        bits.push((rest % 2) as u8);
        rest /= 2;
    }
    bits.push(0);
    bits.reverse();

    Ok(bits)
}

/// Reads a group of binary digits back into the byte it encodes.
fn byte_from_bits(bits: &[u8]) -> Result<u8, LweError> {
    if bits.is_empty() {
        return Err(LweError::DecodingError(
            "Cannot decode an empty bit group".to_string(),
        ));
    }

    let value = bits.iter().try_fold(0u64, |acc, &bit| {
        acc.checked_mul(2).and_then(|acc| acc.checked_add(bit as u64))
    });

    value
        .and_then(|value| u8::try_from(value).ok())
        .ok_or_else(|| {
            LweError::DecodingError(format!(
                "Bit group {:?} does not encode a byte",
                bits
            ))
        })
}

/// Encrypts raw bytes, one group of encrypted bits per byte.
pub fn encrypt_bytes<S>(
    bytes: &[u8],
    public_key: &PublicKey,
    sampler: &mut S,
) -> Result<Ciphertext, LweError>
where
    S: Sampler + ?Sized,
{
    let mut ciphertext: Ciphertext = Vec::with_capacity(bytes.len());

    for &byte in bytes {
        let group = bits_of(byte as i64)?
            .into_iter()
            .map(|bit| encrypt_bit(public_key, bit, &mut *sampler))
            .collect::<Result<Vec<_>, _>>()?;
        ciphertext.push(group);
    }

    log::trace!(
        "Encrypted {} bytes into {} bits",
        bytes.len(),
        ciphertext.iter().map(Vec::len).sum::<usize>()
    );

    Ok(ciphertext)
}

/// Encrypts the UTF-8 bytes of `text`.
pub fn encrypt_string<S>(
    text: &str,
    public_key: &PublicKey,
    sampler: &mut S,
) -> Result<Ciphertext, LweError>
where
    S: Sampler + ?Sized,
{
    encrypt_bytes(&bytes_of(text), public_key, sampler)
}

/// Decrypts every bit group and reassembles the bytes in order.
pub fn decrypt_bytes(
    ciphertext: &[Vec<EncryptedVector>],
    private_key: &PrivateKey,
) -> Result<Vec<u8>, LweError> {
    ciphertext
        .iter()
        .map(|group| {
            let bits: Vec<u8> = group
                .iter()
                .map(|vector| decrypt_bit(private_key, vector))
                .collect();
            byte_from_bits(&bits)
        })
        .collect()
}

/// Decrypts a ciphertext produced by [`encrypt_string`] back into text.
///
/// # Errors
/// `DecodingError` if a bit group does not fit a byte or the recovered
/// bytes are not UTF-8. Both mean the wrong key was used.
pub fn decrypt_data(
    ciphertext: &[Vec<EncryptedVector>],
    private_key: &PrivateKey,
) -> Result<String, LweError> {
    let bytes = decrypt_bytes(ciphertext, private_key)?;

    String::from_utf8(bytes).map_err(|e| {
        LweError::DecodingError(format!(
            "Failed to convert decrypted bytes to UTF-8: {}",
            e
        ))
    })
}

/// Serializes a ciphertext as JSON: `[[{"u": .., "v": ..}, ..], ..]`.
pub fn ciphertext_to_json(ciphertext: &[Vec<EncryptedVector>]) -> Result<String, LweError> {
    Ok(serde_json::to_string(ciphertext)?)
}

pub fn ciphertext_from_json(data: &str) -> Result<Ciphertext, LweError> {
    Ok(serde_json::from_str(data)?)
}
