use crate::errors::LweError;
use crate::keypair::{KeyOptions, PrivateKey, PublicKey, generate_key_pair};
use crate::ring::Vector;
use crate::sampler::Sampler;

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Where a preset's error vector comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorSource {
    Fixed(Vector),
    /// `equation_count` draws from `[0, bound)`.
    Sampled { bound: u64 },
}

/// A parameter set known to decrypt correctly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub modulus: u64,
    pub equation_count: usize,
    pub errors: ErrorSource,
    pub secret: i64,
}

lazy_static! {
    /// Reference parameter sets by name.
    ///
    /// Noise after decryption is at most `floor(n / 2)` times the largest
    /// error term, which stays below `floor(q / 2)` for every entry.
    pub static ref PRESETS: HashMap<&'static str, Preset> = {
        let mut map = HashMap::new();

        map.insert("tiny", Preset {
            modulus: 13,
            equation_count: 3,
            errors: ErrorSource::Fixed(vec![1, 2, 1]),
            secret: 5,
        });
        map.insert("small", Preset {
            modulus: 97,
            equation_count: 20,
            errors: ErrorSource::Fixed(vec![
                1, 1, 4, 1, 4, 3, 2, 4, 1, 2, 3, 4, 3, 3, 2, 1, 1, 3, 4, 1,
            ]),
            secret: 5,
        });
        map.insert("medium", Preset {
            modulus: 3557,
            equation_count: 1024,
            errors: ErrorSource::Sampled { bound: 4 },
            secret: 200,
        });
        map.insert("large", Preset {
            modulus: 73043,
            equation_count: 2048,
            errors: ErrorSource::Sampled { bound: 4 },
            secret: 8123,
        });

        map
    };
}

/// `count` error terms drawn from `[0, bound)`.
pub fn sample_error_vector<S>(count: usize, bound: u64, sampler: &mut S) -> Result<Vector, LweError>
where
    S: Sampler + ?Sized,
{
    if bound == 0 {
        return Err(LweError::InvalidParameters(
            "Error bound must be > 0".to_string(),
        ));
    }

    Ok(sampler
        .sample(bound, count)
        .into_iter()
        .map(|value| value as i64)
        .collect())
}

impl Preset {
    pub fn by_name(name: &str) -> Result<&'static Preset, LweError> {
        PRESETS.get(name).ok_or_else(|| {
            LweError::InvalidParameters(format!("Unknown parameter preset '{}'", name))
        })
    }

    pub fn key_options<S>(&self, sampler: &mut S) -> Result<KeyOptions, LweError>
    where
        S: Sampler + ?Sized,
    {
        let error_vector = match &self.errors {
            ErrorSource::Fixed(errors) => errors.clone(),
            ErrorSource::Sampled { bound } => {
                sample_error_vector(self.equation_count, *bound, sampler)?
            }
        };

        Ok(KeyOptions {
            modulus: self.modulus,
            equation_count: self.equation_count,
            error_vector,
        })
    }

    pub fn generate_key_pair<S>(&self, sampler: &mut S) -> Result<(PublicKey, PrivateKey), LweError>
    where
        S: Sampler + ?Sized,
    {
        let material = self.key_options(&mut *sampler)?.into_material()?;
        generate_key_pair(material, self.secret, sampler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::SeededSampler;

    use quickcheck::TestResult;
    use quickcheck::quickcheck;

    #[test]
    fn test_presets_keep_noise_below_half_modulus() {
        for (name, preset) in PRESETS.iter() {
            let max_error = match &preset.errors {
                ErrorSource::Fixed(errors) => *errors.iter().max().unwrap() as u64,
                ErrorSource::Sampled { bound } => bound - 1,
            };
            let max_noise = (preset.equation_count as u64 / 2) * max_error;
            assert!(max_noise < preset.modulus / 2, "preset {} is too noisy", name);
        }
    }

    #[test]
    fn test_unknown_preset() {
        assert!(Preset::by_name("huge").is_err());
        assert!(Preset::by_name("small").is_ok());
    }

    #[test]
    fn test_key_options_lengths() -> Result<(), LweError> {
        let mut sampler = SeededSampler::new(11);
        for preset in PRESETS.values() {
            let options = preset.key_options(&mut sampler)?;
            assert_eq!(options.error_vector.len(), preset.equation_count);
        }
        Ok(())
    }

    #[test]
    fn test_zero_error_bound() {
        let result = sample_error_vector(4, 0, &mut SeededSampler::new(1));
        assert!(matches!(result, Err(LweError::InvalidParameters(_))));
    }

    quickcheck! {
        fn prop_sampled_errors_stay_below_bound(count: u8, bound: u8, seed: u64) -> TestResult {
            if bound == 0 {
                return TestResult::discard();
            }

            let errors = sample_error_vector(count as usize, bound as u64, &mut SeededSampler::new(seed)).unwrap();
            if errors.len() != count as usize {
                return TestResult::error(format!("Expected {} errors, got {}", count, errors.len()));
            }
            if let Some(bad) = errors.iter().find(|&&e| e < 0 || e >= bound as i64) {
                return TestResult::error(format!("Error term {} outside [0, {})", bad, bound));
            }

            TestResult::passed()
        }
    }
}
