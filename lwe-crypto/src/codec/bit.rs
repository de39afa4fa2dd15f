//! Single-bit encryption: a noisy subset-sum over the public equations.

use crate::errors::LweError;
use crate::keypair::{PrivateKey, PublicKey};
use crate::sampler::Sampler;

use serde::{Deserialize, Serialize};

/// Ciphertext of exactly one bit, both halves in `[0, q)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedVector {
    pub u: i64,
    pub v: i64,
}

/// Encrypts one bit under `public_key`.
///
/// Draws `floor(n / 2)` equation indices (repeats allowed) and sums the
/// matching entries of A into `u` and of B into `v`; a set bit adds
/// `floor(q / 2)` to `v`. The same bit encrypts differently on every call.
///
/// # Errors
/// * `ValidationError` if `bit` is neither 0 nor 1.
/// * `DimensionMismatch` if A or B does not hold exactly `n` values, or
///   `sampler` returns an index outside `[0, n)`.
pub fn encrypt_bit<S>(
    public_key: &PublicKey,
    bit: u8,
    sampler: &mut S,
) -> Result<EncryptedVector, LweError>
where
    S: Sampler + ?Sized,
{
    if bit > 1 {
        return Err(LweError::ValidationError(format!(
            "Only 0 and 1 can be encrypted, got {}",
            bit
        )));
    }
    public_key.ensure_complete()?;

    let n = public_key.equation_count();
    let ring = public_key.material().ring();
    let samples = sampler.sample(n as u64, n / 2);

    let A = public_key.get_a();
    let B = public_key.get_b();

    let mut rows = Vec::with_capacity(samples.len());
    for &index in &samples {
        match (A.get(index as usize), B.get(index as usize)) {
            (Some(&a), Some(&b)) => rows.push((a, b)),
            _ => {
                return Err(LweError::DimensionMismatch(format!(
                    "Sampled equation index {} is out of range for {} equations",
                    index, n
                )));
            }
        }
    }

    let u = ring.sum(rows.iter().map(|&(a, _)| a));
    let v = ring.add(
        ring.sum(rows.iter().map(|&(_, b)| b)),
        ring.half() * bit as i64,
    );

    Ok(EncryptedVector { u, v })
}

/// Recovers the bit: `(v - secret * u) mod q` lands above `floor(q / 2)` for a 1.
///
/// Nothing detects noise that has outgrown the decision margin; mismatched
/// parameters simply produce the wrong bit.
pub fn decrypt_bit(private_key: &PrivateKey, vector: &EncryptedVector) -> u8 {
    let ring = private_key.material().ring();
    let masked = ring.mul(private_key.secret(), vector.u);
    let normalized = ring.sub(vector.v, masked);

    if normalized > ring.half() { 1 } else { 0 }
}
