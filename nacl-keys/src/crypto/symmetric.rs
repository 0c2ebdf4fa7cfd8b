use super::AlgorithmName;
use crate::{
  encoding::{Encoder, Encoding},
  error::{NaclKeyError, NaclKeyResult},
  random,
  trace::*,
  util::{constant_time_eq, to_key_array},
};
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha512};
use std::marker::PhantomData;
use zeroize::Zeroize;

/// Shared key length of every provided MAC primitive
pub const AUTH_KEY_BYTES: usize = 32;

/* -------------------------------- */
/// Keyed MAC primitive behind an [`Authenticator`]
pub trait MacPrimitive {
  /// Algorithm name
  const ALG: AlgorithmName;
  /// Fixed tag length
  const TAG_BYTES: usize;

  /// Compute the tag of `message` under an already validated `key`
  fn compute(key: &[u8; AUTH_KEY_BYTES], message: &[u8]) -> NaclKeyResult<Vec<u8>>;
}

/// hmac-sha256
pub struct HmacSha256;

impl MacPrimitive for HmacSha256 {
  const ALG: AlgorithmName = AlgorithmName::HmacSha256;
  const TAG_BYTES: usize = 32;

  fn compute(key: &[u8; AUTH_KEY_BYTES], message: &[u8]) -> NaclKeyResult<Vec<u8>> {
    let mut mac = Hmac::<Sha256>::new_from_slice(key).map_err(|_| NaclKeyError::InvalidKeyLength {
      expected: AUTH_KEY_BYTES,
      actual: key.len(),
    })?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
  }
}

/// hmac-sha512256, i.e., HMAC-SHA-512 truncated to its first 32 bytes (NaCl `crypto_auth`)
pub struct HmacSha512256;

impl MacPrimitive for HmacSha512256 {
  const ALG: AlgorithmName = AlgorithmName::HmacSha512256;
  const TAG_BYTES: usize = 32;

  fn compute(key: &[u8; AUTH_KEY_BYTES], message: &[u8]) -> NaclKeyResult<Vec<u8>> {
    let mut mac = Hmac::<Sha512>::new_from_slice(key).map_err(|_| NaclKeyError::InvalidKeyLength {
      expected: AUTH_KEY_BYTES,
      actual: key.len(),
    })?;
    mac.update(message);
    let mut tag = mac.finalize().into_bytes().to_vec();
    tag.truncate(Self::TAG_BYTES);
    Ok(tag)
  }
}

/* -------------------------------- */
/// Authenticator holding a 32-byte shared key
///
/// The key is validated once at construction and never changes afterwards; all operations take `&self`.
/// Tags are compared in constant time, and a tag that does not match, including one of the wrong length,
/// yields `Ok(false)` rather than an error.
pub struct Authenticator<P: MacPrimitive> {
  key: [u8; AUTH_KEY_BYTES],
  _primitive: PhantomData<P>,
}

pub type HmacSha256Authenticator = Authenticator<HmacSha256>;
pub type HmacSha512256Authenticator = Authenticator<HmacSha512256>;

impl<P: MacPrimitive> Authenticator<P> {
  /// Create an authenticator from raw key bytes.
  /// `None` fails with `MissingKey`; anything but exactly 32 bytes fails with `InvalidKeyLength`.
  pub fn new<'a>(key: impl Into<Option<&'a [u8]>>) -> NaclKeyResult<Self> {
    let key = key.into().ok_or(NaclKeyError::MissingKey)?;
    Ok(Self {
      key: to_key_array(key)?,
      _primitive: PhantomData,
    })
  }

  /// Create an authenticator from a key in the given encoding
  pub fn from_encoded(key: impl AsRef<[u8]>, encoding: Encoding) -> NaclKeyResult<Self> {
    let mut raw = encoding.decode(key.as_ref())?;
    let res = Self::new(raw.as_slice());
    raw.zeroize();
    res
  }

  /// Create an authenticator with a fresh random key
  pub fn generate() -> Self {
    debug!("Generate {} key", P::ALG);
    Self {
      key: random::random_array(),
      _primitive: PhantomData,
    }
  }

  /// Compute the tag of `message` under `key` without keeping an instance around
  pub fn auth_with_key<'a>(key: impl Into<Option<&'a [u8]>>, message: &[u8]) -> NaclKeyResult<Vec<u8>> {
    Self::new(key)?.auth(message, Encoding::Raw)
  }

  /// Check a raw `tag` of `message` under `key` without keeping an instance around
  pub fn verify_with_key<'a>(key: impl Into<Option<&'a [u8]>>, message: &[u8], tag: &[u8]) -> NaclKeyResult<bool> {
    Self::new(key)?.verify_raw(message, tag)
  }

  /// Compute the tag of `message`, encoded with `encoding`
  pub fn auth(&self, message: &[u8], encoding: Encoding) -> NaclKeyResult<Vec<u8>> {
    let tag = P::compute(&self.key, message)?;
    Ok(encoding.encode(&tag))
  }

  /// Check a `tag` of `message` given in `encoding`.
  /// Fails only when the tag cannot be decoded; a mismatch returns `Ok(false)`.
  pub fn verify(&self, message: &[u8], tag: impl AsRef<[u8]>, encoding: Encoding) -> NaclKeyResult<bool> {
    let tag = encoding.decode(tag.as_ref())?;
    self.verify_raw(message, &tag)
  }

  fn verify_raw(&self, message: &[u8], tag: &[u8]) -> NaclKeyResult<bool> {
    if tag.len() != P::TAG_BYTES {
      debug!("{} tag has wrong length: {}", P::ALG, tag.len());
      return Ok(false);
    }
    let expected = P::compute(&self.key, message)?;
    let matched = constant_time_eq(&expected, tag);
    if !matched {
      debug!("{} tag mismatch", P::ALG);
    }
    Ok(matched)
  }

  /// Raw shared key
  pub fn key_bytes(&self) -> &[u8; AUTH_KEY_BYTES] {
    &self.key
  }

  /// Fixed tag length of the primitive
  pub fn tag_bytes(&self) -> usize {
    P::TAG_BYTES
  }

  /// Get the algorithm name
  pub fn alg(&self) -> AlgorithmName {
    P::ALG
  }
}

impl<P: MacPrimitive> PartialEq for Authenticator<P> {
  fn eq(&self, other: &Self) -> bool {
    constant_time_eq(&self.key, &other.key)
  }
}
impl<P: MacPrimitive> Eq for Authenticator<P> {}

impl<P: MacPrimitive> std::fmt::Debug for Authenticator<P> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "Authenticator<{}>([REDACTED])", P::ALG)
  }
}

impl<P: MacPrimitive> Drop for Authenticator<P> {
  fn drop(&mut self) {
    self.key.zeroize();
  }
}
