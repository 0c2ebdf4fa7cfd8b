use thiserror::Error;

/// Result type for nacl-keys
pub type NaclKeyResult<T> = std::result::Result<T, NaclKeyError>;

/// Error type for nacl-keys
///
/// Verification mismatches are not errors: `verify` operations return `Ok(false)` for a wrong tag or signature,
/// including one of the wrong length. Errors are reserved for malformed calls.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NaclKeyError {
  /* ----- Key validation errors ----- */
  /// Key argument absent where one is required
  #[error("Key is missing")]
  MissingKey,
  /// Key present but not the length the primitive mandates
  #[error("Invalid key length: expected {expected} bytes, got {actual}")]
  InvalidKeyLength { expected: usize, actual: usize },

  /* ----- Encoder errors ----- */
  /// Input is malformed for the named encoding
  #[error("Failed to decode {encoding} input: {reason}")]
  DecodeError { encoding: String, reason: String },
  /// No encoder registered under the name
  #[error("Unknown encoder: {0}")]
  UnknownEncoder(String),
  /// An encoder is already registered under the name
  #[error("Encoder already registered: {0}")]
  DuplicateEncoder(String),
  /// Algorithm name is not supported
  #[error("Invalid algorithm name: {0}")]
  InvalidAlgorithmName(String),

  /* ----- Key import errors ----- */
  /// Invalid private key in PEM or DER form
  #[error("Failed to parse private key: {0}")]
  ParsePrivateKeyError(String),
  /// Invalid public key in PEM or DER form, or bytes that are not a curve point
  #[error("Failed to parse public key: {0}")]
  ParsePublicKeyError(String),
}

impl NaclKeyError {
  /// Key length check shared by every key type
  pub(crate) fn check_key_length(expected: usize, actual: usize) -> NaclKeyResult<()> {
    if expected == actual {
      Ok(())
    } else {
      Err(NaclKeyError::InvalidKeyLength { expected, actual })
    }
  }
}
