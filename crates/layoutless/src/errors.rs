/* crates/layoutless/src/errors.rs */

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
  /// Two bindings share a name; binding names identify one registration.
  DuplicateBinding(String),
  /// A binding has an empty name.
  UnnamedBinding,
}

impl fmt::Display for RegistryError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::DuplicateBinding(name) => write!(f, "duplicate plugin binding name: {name}"),
      Self::UnnamedBinding => write!(f, "plugin binding name must not be empty"),
    }
  }
}

impl std::error::Error for RegistryError {}
