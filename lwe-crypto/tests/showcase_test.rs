use lwe_crypto::codec::{ciphertext_to_json, decrypt_data, encrypt_string};
use lwe_crypto::errors::LweError;
use lwe_crypto::preset::Preset;
use lwe_crypto::sampler::ThreadSampler;

use fake::Fake;
use fake::faker::lorem::en::Sentence;

use std::sync::Once;

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .is_test(true)
            .try_init();
    });
}

#[test]
fn showcase_cipher_decipher_ukrainian_text() -> Result<(), LweError> {
    init_logging();

    let (public_key, private_key) = Preset::by_name("medium")?.generate_key_pair(&mut ThreadSampler)?;

    let original = "Вітання від крипто системи учасникам семінару на його першому засіданні";

    let cipher = encrypt_string(original, &public_key, &mut ThreadSampler)?;
    log::info!("Ciphertext JSON is {} bytes", ciphertext_to_json(&cipher)?.len());

    let decoded = decrypt_data(&cipher, &private_key)?;

    assert_eq!(original, decoded);

    Ok(())
}

#[test]
fn showcase_random_sentences() -> Result<(), LweError> {
    init_logging();

    let (public_key, private_key) = Preset::by_name("small")?.generate_key_pair(&mut ThreadSampler)?;

    for _ in 0..10 {
        let original: String = Sentence(3..12).fake();
        let cipher = encrypt_string(&original, &public_key, &mut ThreadSampler)?;
        assert_eq!(original, decrypt_data(&cipher, &private_key)?);
    }

    Ok(())
}
