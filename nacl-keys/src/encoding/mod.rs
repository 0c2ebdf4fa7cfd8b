mod registry;

use crate::error::{NaclKeyError, NaclKeyResult};
use base64::{engine::general_purpose, Engine as _};

pub use registry::EncoderRegistry;

/// Bidirectional transform between raw bytes and a textual form.
///
/// Text is carried as bytes so that the raw encoder stays an identity over arbitrary binary input.
/// `decode(encode(b)) == b` must hold for every byte string `b`.
pub trait Encoder: Send + Sync {
  /// Encode raw bytes. Total over byte strings.
  fn encode(&self, bytes: &[u8]) -> Vec<u8>;
  /// Decode text back into raw bytes, failing on malformed input
  fn decode(&self, text: &[u8]) -> NaclKeyResult<Vec<u8>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Built-in encodings
pub enum Encoding {
  /// identity passthrough
  #[default]
  Raw,
  /// lowercase hexadecimal, two characters per byte, no separators
  Hex,
  /// standard alphabet, padded, no line wrapping
  Base64,
}

impl Encoding {
  /// All built-in encodings, in registration order
  pub const ALL: [Encoding; 3] = [Encoding::Raw, Encoding::Hex, Encoding::Base64];

  pub fn as_str(&self) -> &'static str {
    match self {
      Encoding::Raw => "raw",
      Encoding::Hex => "hex",
      Encoding::Base64 => "base64",
    }
  }

  fn decode_error(&self, reason: impl ToString) -> NaclKeyError {
    NaclKeyError::DecodeError {
      encoding: self.as_str().to_string(),
      reason: reason.to_string(),
    }
  }
}

impl std::fmt::Display for Encoding {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl core::str::FromStr for Encoding {
  type Err = NaclKeyError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "raw" => Ok(Self::Raw),
      "hex" => Ok(Self::Hex),
      "base64" => Ok(Self::Base64),
      _ => Err(NaclKeyError::UnknownEncoder(s.to_string())),
    }
  }
}

impl Encoder for Encoding {
  fn encode(&self, bytes: &[u8]) -> Vec<u8> {
    match self {
      Encoding::Raw => bytes.to_vec(),
      Encoding::Hex => hex::encode(bytes).into_bytes(),
      Encoding::Base64 => general_purpose::STANDARD.encode(bytes).into_bytes(),
    }
  }

  fn decode(&self, text: &[u8]) -> NaclKeyResult<Vec<u8>> {
    match self {
      Encoding::Raw => Ok(text.to_vec()),
      Encoding::Hex => hex::decode(text).map_err(|e| self.decode_error(e)),
      // STANDARD requires canonical padding
      Encoding::Base64 => general_purpose::STANDARD.decode(text).map_err(|e| self.decode_error(e)),
    }
  }
}
