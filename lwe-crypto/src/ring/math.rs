//! Implementation of ring ops using modular arithmetic.

use crate::errors::LweError;

/// Represents the ring Z_q every key and ciphertext value lives in.
///
/// Only [`Ring::try_with`] builds one, so the modulus is always greater than 1.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Ring {
    modulus: u64,
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1.
    pub fn try_with(modulus: u64) -> Result<Self, LweError> {
        if modulus <= 1 {
            return Err(LweError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                modulus
            )));
        }

        if modulus > i64::MAX as u64 {
            return Err(LweError::InvalidModulus(format!(
                "Modulus must fit into i64, got {}",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use lwe_crypto::ring::Ring;
    /// let ring = Ring::try_with(97).unwrap();
    /// assert_eq!(ring.modulus(), 97);
    /// ```
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// `floor(q / 2)`: the offset a set bit adds and the decryption threshold.
    ///
    /// ```
    /// # use lwe_crypto::ring::Ring;
    /// assert_eq!(Ring::try_with(97).unwrap().half(), 48);
    /// assert_eq!(Ring::try_with(3557).unwrap().half(), 1778);
    /// ```
    pub fn half(&self) -> i64 {
        (self.modulus / 2) as i64
    }

    /// Normalizes a value to be within the range `[0, modulus - 1]`.
    ///
    /// Computed as `((value mod q) + q) mod q`, so a negative remainder is
    /// lifted back into range.
    ///
    /// # Example
    ///
    /// ```
    /// # use lwe_crypto::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.normalize(15), 5);
    /// assert_eq!(ring.normalize(-3), 7);
    /// assert_eq!(ring.normalize(0), 0);
    /// assert_eq!(ring.normalize(10), 0);
    /// ```
    pub fn normalize(&self, value: i64) -> i64 {
        let m = self.modulus as i128;

        (((value as i128 % m) + m) % m) as i64
    }

    /// Computes `(a + b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use lwe_crypto::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.add(7, 5), 2);
    /// assert_eq!(ring.add(-2, 5), 3);
    /// ```
    pub fn add(&self, a: i64, b: i64) -> i64 {
        let sum = self.normalize(a) as i128 + self.normalize(b) as i128;

        (sum % self.modulus as i128) as i64
    }

    /// Computes `(a - b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use lwe_crypto::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.sub(7, 5), 2);
    /// assert_eq!(ring.sub(3, 5), 8);
    /// assert_eq!(ring.sub(-2, 3), 5);
    /// ```
    pub fn sub(&self, a: i64, b: i64) -> i64 {
        let m = self.modulus as i128;
        let diff = self.normalize(a) as i128 - self.normalize(b) as i128;

        (((diff % m) + m) % m) as i64
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `i128` internally to prevent overflow during multiplication before the modulo operation.
    ///
    /// # Example
    ///
    /// ```
    /// # use lwe_crypto::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.mul(7, 5), 5);
    /// assert_eq!(ring.mul(-2, 6), 8);
    /// ```
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        let product = self.normalize(a) as i128 * self.normalize(b) as i128;

        (product % self.modulus as i128) as i64
    }

    /// Reduces the sum of `values` into the ring.
    pub fn sum<I>(&self, values: I) -> i64
    where
        I: IntoIterator<Item = i64>,
    {
        values.into_iter().fold(0, |acc, value| self.add(acc, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_creation() {
        assert!(Ring::try_with(97).is_ok());
        assert!(Ring::try_with(2).is_ok());
        assert!(Ring::try_with(1).is_err());
        assert!(Ring::try_with(0).is_err());
        assert!(Ring::try_with(u64::MAX).is_err());
    }

    #[test]
    fn test_element_normalization() -> Result<(), LweError> {
        let ring = Ring::try_with(97)?;
        assert_eq!(ring.normalize(5), 5);
        assert_eq!(ring.normalize(102), 5);
        assert_eq!(ring.normalize(-92), 5);
        assert_eq!(ring.normalize(-97), 0);
        assert_eq!(ring.normalize(i64::MIN), ring.normalize(i64::MIN % 97));
        Ok(())
    }

    #[test]
    fn test_addition_and_subtraction() -> Result<(), LweError> {
        let ring = Ring::try_with(13)?;
        assert_eq!(ring.add(5, 8), 0);
        assert_eq!(ring.add(-3, 8), 5);
        assert_eq!(ring.sub(5, 8), 10);
        assert_eq!(ring.sub(8, 5), 3);
        Ok(())
    }

    #[test]
    fn test_multiplication_does_not_overflow() -> Result<(), LweError> {
        let ring = Ring::try_with(73043)?;
        assert_eq!(ring.mul(73042, 73042), 1);
        assert_eq!(ring.mul(i64::MAX, 2), ring.mul(i64::MAX % 73043, 2));
        Ok(())
    }

    #[test]
    fn test_sum() -> Result<(), LweError> {
        let ring = Ring::try_with(97)?;
        assert_eq!(ring.sum([6, 38, 90, 83, 51]), 268 % 97);
        assert_eq!(ring.sum(Vec::new()), 0);
        Ok(())
    }
}
