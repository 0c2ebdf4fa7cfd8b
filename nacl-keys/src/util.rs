use subtle::ConstantTimeEq;

/// Compare two byte strings in constant time.
///
/// Runs in time independent of the position of the first mismatch. Inputs of different lengths are unequal;
/// the length itself is not treated as secret.
pub(crate) fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
  a.ct_eq(b).into()
}

/// Copy a slice into a fixed-size array after checking its length
pub(crate) fn to_key_array<const N: usize>(bytes: &[u8]) -> crate::error::NaclKeyResult<[u8; N]> {
  crate::error::NaclKeyError::check_key_length(N, bytes.len())?;
  let mut array = [0u8; N];
  array.copy_from_slice(bytes);
  Ok(array)
}
