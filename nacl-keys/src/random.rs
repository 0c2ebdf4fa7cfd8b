//! Cryptographically secure random bytes, drawn from the thread-local CSPRNG of `rand`.

use rand::RngCore;

/// `n` fresh random bytes
pub fn random_bytes(n: usize) -> Vec<u8> {
  let mut buf = vec![0u8; n];
  rand::rng().fill_bytes(&mut buf);
  buf
}

/// A fresh random array, e.g. for a 32-byte key
pub fn random_array<const N: usize>() -> [u8; N] {
  let mut buf = [0u8; N];
  rand::rng().fill_bytes(&mut buf);
  buf
}
