use super::{Encoder, Encoding};
use crate::{
  error::{NaclKeyError, NaclKeyResult},
  trace::*,
};
use indexmap::IndexMap;

/// Lookup table from a symbolic name to an encoder.
///
/// Built once at the composition root and shared immutably afterwards. Registering needs `&mut self`,
/// so no registration can race with a lookup.
pub struct EncoderRegistry {
  encoders: IndexMap<String, Box<dyn Encoder>>,
}

impl EncoderRegistry {
  /// Empty registry
  pub fn new() -> Self {
    Self {
      encoders: IndexMap::new(),
    }
  }

  /// Registry holding `raw`, `hex` and `base64`
  pub fn with_builtins() -> Self {
    let encoders = Encoding::ALL
      .into_iter()
      .map(|encoding| (encoding.as_str().to_string(), Box::new(encoding) as Box<dyn Encoder>))
      .collect();
    Self { encoders }
  }

  /// Associate `name` with `encoder`. A name can be registered only once.
  pub fn register(&mut self, name: impl Into<String>, encoder: impl Encoder + 'static) -> NaclKeyResult<()> {
    let name = name.into();
    if self.encoders.contains_key(&name) {
      return Err(NaclKeyError::DuplicateEncoder(name));
    }
    debug!("Register encoder: {name}");
    self.encoders.insert(name, Box::new(encoder));
    Ok(())
  }

  /// Encoder registered under `name`
  pub fn resolve(&self, name: &str) -> NaclKeyResult<&dyn Encoder> {
    self
      .encoders
      .get(name)
      .map(|encoder| encoder.as_ref())
      .ok_or_else(|| NaclKeyError::UnknownEncoder(name.to_string()))
  }

  /// Registered names in registration order
  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.encoders.keys().map(String::as_str)
  }
}

impl Default for EncoderRegistry {
  fn default() -> Self {
    Self::with_builtins()
  }
}

impl std::fmt::Debug for EncoderRegistry {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_list().entries(self.names()).finish()
  }
}
