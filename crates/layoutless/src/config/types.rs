/* crates/layoutless/src/config/types.rs */

use anyhow::{Result, bail};
use serde::Deserialize;

use crate::registry::{Binding, Bindings, Hook};
use crate::suppressor::SuppressMode;

/// Startup configuration: which interceptors attach where, and what a
/// suppressed read yields. Loaded from `layoutless.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LayoutlessConfig {
  #[serde(default)]
  pub suppression: SuppressionSection,
  #[serde(default, rename = "plugin")]
  pub plugins: Vec<PluginSection>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct SuppressionSection {
  #[serde(default)]
  pub mode: SuppressMode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PluginSection {
  pub name: String,
  pub hook: Hook,
  #[serde(default)]
  pub disabled: bool,
  #[serde(default)]
  pub sort_order: i32,
}

impl LayoutlessConfig {
  /// Validate: plugin names non-empty and unique.
  pub fn validate(&self) -> Result<()> {
    let mut seen = std::collections::HashSet::new();
    for plugin in &self.plugins {
      if plugin.name.is_empty() {
        bail!("[[plugin]] name must not be empty");
      }
      if !seen.insert(plugin.name.as_str()) {
        bail!("duplicate [[plugin]] name: {}", plugin.name);
      }
    }
    Ok(())
  }

  /// Convert to a binding-table builder for [`Bindings::build`].
  pub fn bindings(&self) -> Bindings {
    let mut bindings = Bindings::new().suppress_mode(self.suppression.mode);
    for plugin in &self.plugins {
      bindings = bindings.binding(
        Binding::new(plugin.name.clone(), plugin.hook)
          .disabled(plugin.disabled)
          .sort_order(plugin.sort_order),
      );
    }
    bindings
  }
}
