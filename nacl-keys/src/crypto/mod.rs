mod asymmetric;
mod symmetric;

use crate::error::NaclKeyError;

pub use asymmetric::{SigningKey, VerifyKey, PUBLIC_KEY_BYTES, SEED_BYTES, SIGNATURE_BYTES};
pub use symmetric::{
  Authenticator, HmacSha256, HmacSha256Authenticator, HmacSha512256, HmacSha512256Authenticator, MacPrimitive,
  AUTH_KEY_BYTES,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Algorithm names
pub enum AlgorithmName {
  Ed25519,
  HmacSha256,
  HmacSha512256,
}

impl AlgorithmName {
  pub fn as_str(&self) -> &'static str {
    match self {
      AlgorithmName::Ed25519 => "ed25519",
      AlgorithmName::HmacSha256 => "hmac-sha256",
      AlgorithmName::HmacSha512256 => "hmac-sha512256",
    }
  }
}

impl std::fmt::Display for AlgorithmName {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl core::str::FromStr for AlgorithmName {
  type Err = NaclKeyError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "ed25519" => Ok(Self::Ed25519),
      "hmac-sha256" => Ok(Self::HmacSha256),
      "hmac-sha512256" => Ok(Self::HmacSha512256),
      _ => Err(NaclKeyError::InvalidAlgorithmName(s.to_string())),
    }
  }
}
