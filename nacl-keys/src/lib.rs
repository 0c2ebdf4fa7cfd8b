mod crypto;
mod encoding;
mod error;
pub mod random;
mod trace;
mod util;

pub mod prelude {
  pub use crate::{
    crypto::{
      AlgorithmName, Authenticator, HmacSha256, HmacSha256Authenticator, HmacSha512256, HmacSha512256Authenticator,
      MacPrimitive, SigningKey, VerifyKey, AUTH_KEY_BYTES, PUBLIC_KEY_BYTES, SEED_BYTES, SIGNATURE_BYTES,
    },
    encoding::{Encoder, EncoderRegistry, Encoding},
    error::{NaclKeyError, NaclKeyResult},
  };
}

/* ----------------------------------------------------------------- */
#[cfg(test)]
mod tests {
  use super::prelude::*;

  const SIGN_SEED: &str = "4ccd089b28ff96da9db6c346ec114e0f5b8a319f35aba624da8cf6ed4fb8a6fb";
  const SIGN_MESSAGE: &str = "72";
  const SIGN_SIGNATURE: &str = "92a009a9f0d4cab8720e820b5f642540a2b27b5416503f8fb3762223ebdb69da085ac1e43e15996e458f3613d0f11d8c387b2eaeb4302aeeb00d291612bb0c00";

  const AUTH_KEY_BASE64: &str = "7qanJRwecpFtEcLLIU08JSU5Eh2OI05lLWUfpMjP+IA=";
  const AUTH_MESSAGE: &[u8] = b"Hello, world!";
  const HMACSHA256_TAG: &str = "17a9db7a8a0a48b72074fc0f6f45230b876c59ae7f32ffe42cf45fe4b7b6a42a";

  /* ----------------------------------------------------------------- */
  #[test]
  fn test_sign_through_registry() {
    // names come from outside as text, e.g., configuration
    let registry = EncoderRegistry::with_builtins();
    let input = registry.resolve("hex").unwrap();
    let output = registry.resolve("base64").unwrap();

    let sk = SigningKey::new(input.decode(SIGN_SEED.as_bytes()).unwrap(), Encoding::Raw).unwrap();
    let message = input.decode(SIGN_MESSAGE.as_bytes()).unwrap();
    let signature = output.encode(&sk.sign(&message, Encoding::Raw));

    assert_eq!(
      output.decode(&signature).unwrap(),
      Encoding::Hex.decode(SIGN_SIGNATURE.as_bytes()).unwrap()
    );
    assert!(sk.verify_key().verify(&message, &signature, Encoding::Base64).unwrap());
  }

  #[test]
  fn test_auth_through_encoding_names() {
    let key_encoding: Encoding = "base64".parse().unwrap();
    let tag_encoding: Encoding = "hex".parse().unwrap();

    let authenticator = HmacSha256Authenticator::from_encoded(AUTH_KEY_BASE64, key_encoding).unwrap();
    let tag = authenticator.auth(AUTH_MESSAGE, tag_encoding).unwrap();
    assert_eq!(tag, HMACSHA256_TAG.as_bytes());
    assert!(authenticator.verify(AUTH_MESSAGE, &tag, tag_encoding).unwrap());

    assert_eq!(
      "base58".parse::<Encoding>().unwrap_err(),
      NaclKeyError::UnknownEncoder("base58".to_string())
    );
  }

  #[test]
  fn test_mismatch_is_false_and_malformed_call_is_error() {
    let key = Encoding::Base64.decode(AUTH_KEY_BASE64.as_bytes()).unwrap();
    let tag = Encoding::Hex.decode(HMACSHA256_TAG.as_bytes()).unwrap();

    let mut extended_message = AUTH_MESSAGE.to_vec();
    extended_message.push(0);
    assert_eq!(
      HmacSha256Authenticator::verify_with_key(key.as_slice(), &extended_message, &tag),
      Ok(false)
    );
    assert_eq!(
      HmacSha256Authenticator::verify_with_key(key.as_slice(), AUTH_MESSAGE, &tag[..30]),
      Ok(false)
    );
    assert_eq!(
      HmacSha256Authenticator::verify_with_key(&key[..31], AUTH_MESSAGE, &tag),
      Err(NaclKeyError::InvalidKeyLength { expected: 32, actual: 31 })
    );
    assert_eq!(
      HmacSha256Authenticator::verify_with_key(None, AUTH_MESSAGE, &tag),
      Err(NaclKeyError::MissingKey)
    );
  }

  #[test]
  fn test_keys_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SigningKey>();
    assert_send_sync::<VerifyKey>();
    assert_send_sync::<HmacSha256Authenticator>();
    assert_send_sync::<HmacSha512256Authenticator>();
    assert_send_sync::<EncoderRegistry>();

    let sk = SigningKey::generate();
    let authenticator = HmacSha512256Authenticator::generate();
    let registry = EncoderRegistry::with_builtins();
    let expected_signature = sk.sign(AUTH_MESSAGE, Encoding::Raw);
    let expected_tag = authenticator.auth(AUTH_MESSAGE, Encoding::Raw).unwrap();

    std::thread::scope(|s| {
      for _ in 0..4 {
        s.spawn(|| {
          let hex = registry.resolve("hex").unwrap();
          for _ in 0..16 {
            assert_eq!(sk.sign(AUTH_MESSAGE, Encoding::Raw), expected_signature);
            let tag = authenticator.auth(AUTH_MESSAGE, Encoding::Hex).unwrap();
            assert_eq!(hex.decode(&tag).unwrap(), expected_tag);
            assert!(authenticator.verify(AUTH_MESSAGE, &tag, Encoding::Hex).unwrap());
          }
        });
      }
    });
  }
}
