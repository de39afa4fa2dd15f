use crate::errors::LweError;
use crate::keypair::material::KeyMaterial;
use crate::ring::Vector;
use crate::sampler::Sampler;

/// Secret used by a [`PrivateKey`] until [`PrivateKey::set_secret`] replaces it.
pub const DEFAULT_SECRET: i64 = 5;

/// Serialized only through the key file format in [`crate::storage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    material: KeyMaterial,
    /// Random left-hand sides, `n` values in `[0, q)`.
    A: Vector,
    /// `B[i] = (A[i] * secret + error[i]) mod q`.
    B: Vector,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKey {
    material: KeyMaterial,
    secret: i64,
}

impl PublicKey {
    /// An empty public key; fill it with [`PublicKey::generate_key_values`].
    pub fn new(material: KeyMaterial) -> Self {
        Self {
            material,
            A: Vector::new(),
            B: Vector::new(),
        }
    }

    /// Rebuilds a key from stored vectors. `A` goes through
    /// [`PublicKey::set_a_vec`], `B` is taken verbatim.
    pub fn from_parts(material: KeyMaterial, A: Vector, B: Vector) -> Result<Self, LweError> {
        let mut key = Self::new(material);
        key.set_a_vec(A)?;
        key.B = B;

        Ok(key)
    }

    pub fn material(&self) -> &KeyMaterial {
        &self.material
    }

    pub fn modulus(&self) -> u64 {
        self.material.modulus()
    }

    pub fn equation_count(&self) -> usize {
        self.material.equation_count()
    }

    pub fn get_a(&self) -> &[i64] {
        &self.A
    }

    pub fn get_b(&self) -> &[i64] {
        &self.B
    }

    /// Replaces A with an explicit vector, e.g. one loaded from storage.
    ///
    /// Accepts `n` or `n - 1` values, each in `[0, q)`. On error A is left as it was.
    pub fn set_a_vec(&mut self, vector: Vector) -> Result<(), LweError> {
        let n = self.equation_count();

        if vector.len() > n || vector.len() + 1 < n {
            return Err(LweError::ValidationError(format!(
                "Vector A must hold {} or {} values, got {}",
                n,
                n - 1,
                vector.len()
            )));
        }

        let modulus = self.modulus() as i64;
        if let Some(value) = vector.iter().find(|&&v| !(0..modulus).contains(&v)) {
            return Err(LweError::ValidationError(format!(
                "All values in vector A need to be in [0, {}), got {}",
                modulus, value
            )));
        }

        self.A = vector;
        Ok(())
    }

    /// Derives B from A, `secret` and the error vector, sampling A first if it is empty.
    pub fn generate_key_values<S>(&mut self, secret: i64, sampler: &mut S) -> Result<(), LweError>
    where
        S: Sampler + ?Sized,
    {
        let n = self.equation_count();
        let errors = self.material.error_vector();

        if errors.len() < n {
            return Err(LweError::DimensionMismatch(format!(
                "Error vector length ({}) must be at least the equation count ({})",
                errors.len(),
                n
            )));
        }

        if !self.A.is_empty() && self.A.len() != n {
            return Err(LweError::DimensionMismatch(format!(
                "Vector A length ({}) must match the equation count ({}) to derive B",
                self.A.len(),
                n
            )));
        }

        if self.A.is_empty() {
            log::debug!("Sampling vector A ({} values mod {})", n, self.modulus());
            self.A = sampler
                .sample(self.modulus(), n)
                .into_iter()
                .map(|value| value as i64)
                .collect();
        }

        let ring = self.material.ring();
        let B: Vector = self
            .A
            .iter()
            .zip(errors)
            .map(|(&a, &e)| ring.add(ring.mul(a, secret), e))
            .collect();
        self.B = B;

        log::debug!("Derived vector B for {} equations", n);
        Ok(())
    }

    /// Both vectors hold exactly `n` values, so every sampled index is valid.
    pub(crate) fn ensure_complete(&self) -> Result<(), LweError> {
        let n = self.equation_count();
        if self.A.len() != n || self.B.len() != n {
            return Err(LweError::DimensionMismatch(format!(
                "Public key vectors must hold {} values (A: {}, B: {})",
                n,
                self.A.len(),
                self.B.len()
            )));
        }

        Ok(())
    }
}

impl PrivateKey {
    pub fn new(material: KeyMaterial) -> Self {
        Self::with_secret(material, DEFAULT_SECRET)
    }

    pub fn with_secret(material: KeyMaterial, secret: i64) -> Self {
        Self { material, secret }
    }

    pub fn material(&self) -> &KeyMaterial {
        &self.material
    }

    pub fn modulus(&self) -> u64 {
        self.material.modulus()
    }

    pub fn equation_count(&self) -> usize {
        self.material.equation_count()
    }

    pub fn secret(&self) -> i64 {
        self.secret
    }

    /// Stores the secret. Nothing checks that it matches any public key.
    pub fn set_secret(&mut self, secret: i64) {
        self.secret = secret;
    }
}

/// Generates a matching key pair for `secret`, sampling A with `sampler`.
pub fn generate_key_pair<S>(
    material: KeyMaterial,
    secret: i64,
    sampler: &mut S,
) -> Result<(PublicKey, PrivateKey), LweError>
where
    S: Sampler + ?Sized,
{
    let mut public_key = PublicKey::new(material.clone());
    public_key.generate_key_values(secret, sampler)?;

    log::info!(
        "Generated key pair (q = {}, n = {})",
        material.modulus(),
        material.equation_count()
    );

    Ok((public_key, PrivateKey::with_secret(material, secret)))
}
