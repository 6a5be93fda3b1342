/* crates/layoutless/src/result.rs */

use std::sync::{Arc, Mutex, PoisonError};

/// Shared handle to a rendered page's configuration. Clones refer to the
/// same attributes, so a mutation through one handle is observed by all.
#[derive(Debug, Clone, Default)]
pub struct PageConfig {
  inner: Arc<Mutex<ConfigAttrs>>,
}

#[derive(Debug, Default)]
struct ConfigAttrs {
  page_layout: Option<String>,
  title: Option<String>,
}

impl PageConfig {
  pub fn new() -> Self {
    Self::default()
  }

  // The guarded state is plain data, so a poisoned lock is still usable.
  fn attrs(&self) -> std::sync::MutexGuard<'_, ConfigAttrs> {
    self.inner.lock().unwrap_or_else(PoisonError::into_inner)
  }

  pub fn page_layout(&self) -> Option<String> {
    self.attrs().page_layout.clone()
  }

  pub fn set_page_layout(&self, layout: Option<String>) {
    self.attrs().page_layout = layout;
  }

  pub fn title(&self) -> Option<String> {
    self.attrs().title.clone()
  }

  pub fn set_title(&self, title: Option<String>) {
    self.attrs().title = title;
  }
}

/// Success value of page preparation. Preparation itself yields
/// `Option<ResultPage>`; `None` is the host's "page not found" sentinel and
/// must pass through interceptors untouched.
#[derive(Debug, Clone, Default)]
pub struct ResultPage {
  config: PageConfig,
}

impl ResultPage {
  pub fn new() -> Self {
    Self::default()
  }

  /// Shared handle to this page's configuration.
  pub fn config(&self) -> PageConfig {
    self.config.clone()
  }
}
