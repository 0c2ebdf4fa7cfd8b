use super::AlgorithmName;
use crate::{
  encoding::{Encoder, Encoding},
  error::{NaclKeyError, NaclKeyResult},
  random,
  trace::*,
  util::{constant_time_eq, to_key_array},
};
use base64::{engine::general_purpose, Engine as _};
use ed25519_compact::{KeyPair, PublicKey as Ed25519PublicKey, Seed, Signature as Ed25519Signature};
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

#[cfg(feature = "pem")]
use pkcs8::{der::Decode, Document, PrivateKeyInfo};
#[cfg(feature = "pem")]
use spki::SubjectPublicKeyInfoRef;

/// Length of an Ed25519 seed
pub const SEED_BYTES: usize = 32;
/// Length of an Ed25519 public key
pub const PUBLIC_KEY_BYTES: usize = 32;
/// Length of an Ed25519 signature
pub const SIGNATURE_BYTES: usize = 64;

#[cfg(feature = "pem")]
#[allow(non_upper_case_globals, dead_code)]
/// Algorithm OIDs
mod algorithm_oids {
  /// OID for `id-Ed25519`, if you're curious
  pub const Ed25519: &str = "1.3.101.112";
}

/* -------------------------------- */
/// Ed25519 signing key, holding the 32-byte seed the key pair is derived from.
///
/// Immutable after construction and not `Clone`. The seed is wiped on drop.
pub struct SigningKey {
  seed: [u8; SEED_BYTES],
  keypair: KeyPair,
}

impl SigningKey {
  /// Generate a new signing key from the CSPRNG
  pub fn generate() -> Self {
    debug!("Generate Ed25519 signing key");
    Self::from_seed(random::random_array())
  }

  /// Create a signing key from a seed given in `encoding`.
  /// The decoded seed must be exactly 32 bytes.
  pub fn new(key: impl AsRef<[u8]>, encoding: Encoding) -> NaclKeyResult<Self> {
    let mut raw = encoding.decode(key.as_ref())?;
    let seed = to_key_array::<SEED_BYTES>(&raw);
    raw.zeroize();
    Ok(Self::from_seed(seed?))
  }

  fn from_seed(seed: [u8; SEED_BYTES]) -> Self {
    let keypair = KeyPair::from_seed(Seed::new(seed));
    Self { seed, keypair }
  }

  #[cfg(feature = "pem")]
  /// Derive signing key from PKCS#8 der bytes
  pub fn from_der(der: &[u8]) -> NaclKeyResult<Self> {
    let pki = PrivateKeyInfo::from_der(der).map_err(|e| NaclKeyError::ParsePrivateKeyError(e.to_string()))?;

    match pki.algorithm.oid.to_string().as_ref() {
      algorithm_oids::Ed25519 => {
        debug!("Read Ed25519 private key");
        // CurvePrivateKey ::= OCTET STRING, wrapping the seed
        match pki.private_key {
          [0x04, 0x20, seed @ ..] => {
            let seed = to_key_array::<SEED_BYTES>(seed).map_err(|e| NaclKeyError::ParsePrivateKeyError(e.to_string()))?;
            Ok(Self::from_seed(seed))
          }
          _ => Err(NaclKeyError::ParsePrivateKeyError(
            "Invalid Ed25519 private key encoding".to_string(),
          )),
        }
      }
      _ => Err(NaclKeyError::ParsePrivateKeyError(
        "Unsupported algorithm that supports PEM format keys".to_string(),
      )),
    }
  }

  #[cfg(feature = "pem")]
  /// Derive signing key from PKCS#8 pem string
  pub fn from_pem(pem: &str) -> NaclKeyResult<Self> {
    let (tag, doc) = Document::from_pem(pem).map_err(|e| NaclKeyError::ParsePrivateKeyError(e.to_string()))?;
    if tag != "PRIVATE KEY" {
      return Err(NaclKeyError::ParsePrivateKeyError("Invalid tag".to_string()));
    };
    Self::from_der(doc.as_bytes())
  }

  /// Sign `message` and return the 64-byte signature encoded with `encoding`.
  /// Signatures are deterministic: the same message always yields the same signature.
  pub fn sign(&self, message: &[u8], encoding: Encoding) -> Vec<u8> {
    let signature = self.keypair.sk.sign(message, None);
    encoding.encode(signature.as_ref())
  }

  /// Raw 32-byte seed
  pub fn to_bytes(&self) -> [u8; SEED_BYTES] {
    self.seed
  }

  /// Seed encoded with `encoding`
  pub fn to_encoded(&self, encoding: Encoding) -> Vec<u8> {
    encoding.encode(&self.seed)
  }

  /// Get the verify key paired with this signing key
  pub fn verify_key(&self) -> VerifyKey {
    let mut pk = [0u8; PUBLIC_KEY_BYTES];
    pk.copy_from_slice(self.keypair.pk.as_ref());
    VerifyKey(pk)
  }

  /// Get the algorithm name
  pub fn alg(&self) -> AlgorithmName {
    AlgorithmName::Ed25519
  }
}

impl PartialEq for SigningKey {
  fn eq(&self, other: &Self) -> bool {
    constant_time_eq(&self.seed, &other.seed)
  }
}
impl Eq for SigningKey {}

impl std::fmt::Debug for SigningKey {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "SigningKey({}, [REDACTED])", self.verify_key().key_id())
  }
}

impl Drop for SigningKey {
  fn drop(&mut self) {
    self.seed.zeroize();
  }
}

/* -------------------------------- */
/// Ed25519 verify key, 32 bytes of public key material
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct VerifyKey([u8; PUBLIC_KEY_BYTES]);

impl VerifyKey {
  /// Create a verify key from public key bytes given in `encoding`
  pub fn new(key: impl AsRef<[u8]>, encoding: Encoding) -> NaclKeyResult<Self> {
    let raw = encoding.decode(key.as_ref())?;
    Ok(Self(to_key_array(&raw)?))
  }

  #[cfg(feature = "pem")]
  /// Convert from SPKI pem string
  pub fn from_pem(pem: &str) -> NaclKeyResult<Self> {
    let (tag, doc) = Document::from_pem(pem).map_err(|e| NaclKeyError::ParsePublicKeyError(e.to_string()))?;
    if tag != "PUBLIC KEY" {
      return Err(NaclKeyError::ParsePublicKeyError("Invalid tag".to_string()));
    };

    let spki_ref = SubjectPublicKeyInfoRef::from_der(doc.as_bytes())
      .map_err(|e| NaclKeyError::ParsePublicKeyError(format!("Error decoding SubjectPublicKeyInfo: {e}")))?;
    match spki_ref.algorithm.oid.to_string().as_ref() {
      algorithm_oids::Ed25519 => {
        debug!("Read Ed25519 public key");
        let public_key = spki_ref
          .subject_public_key
          .as_bytes()
          .ok_or(NaclKeyError::ParsePublicKeyError("Invalid public key".to_string()))?;
        let pk = to_key_array(public_key).map_err(|e| NaclKeyError::ParsePublicKeyError(e.to_string()))?;
        Ok(Self(pk))
      }
      _ => Err(NaclKeyError::ParsePublicKeyError(
        "Unsupported algorithm that supports PEM format keys".to_string(),
      )),
    }
  }

  /// Verify a `signature` over `message` given in `encoding`.
  /// Fails only when the signature cannot be decoded; a wrong or wrong-length signature returns `Ok(false)`.
  pub fn verify(&self, message: &[u8], signature: impl AsRef<[u8]>, encoding: Encoding) -> NaclKeyResult<bool> {
    let signature = encoding.decode(signature.as_ref())?;
    if signature.len() != SIGNATURE_BYTES {
      debug!("Ed25519 signature has wrong length: {}", signature.len());
      return Ok(false);
    }
    let (Ok(signature), Ok(pk)) = (
      Ed25519Signature::from_slice(&signature),
      Ed25519PublicKey::from_slice(&self.0),
    ) else {
      return Ok(false);
    };
    match pk.verify(message, &signature) {
      Ok(()) => Ok(true),
      Err(e) => {
        debug!("Ed25519 signature rejected: {e}");
        Ok(false)
      }
    }
  }

  /// Raw 32-byte public key
  pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_BYTES] {
    self.0
  }

  /// Public key encoded with `encoding`
  pub fn to_encoded(&self, encoding: Encoding) -> Vec<u8> {
    encoding.encode(&self.0)
  }

  /// Create key id, the unpadded base64url SHA-256 of the public key
  pub fn key_id(&self) -> String {
    let mut hasher = <Sha256 as Digest>::new();
    hasher.update(self.0);
    let hash = hasher.finalize();
    general_purpose::URL_SAFE_NO_PAD.encode(hash)
  }

  /// Get the algorithm name
  pub fn alg(&self) -> AlgorithmName {
    AlgorithmName::Ed25519
  }
}

impl std::fmt::Debug for VerifyKey {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "VerifyKey({})", hex::encode(self.0))
  }
}
