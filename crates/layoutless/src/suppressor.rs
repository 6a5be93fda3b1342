/* crates/layoutless/src/suppressor.rs */

use serde::Deserialize;
use serde_json::Value;

use crate::page::{CUSTOM_PAGE_LAYOUT, PAGE_LAYOUT, PageAccess};

/// Representation a suppressed read yields. The two observed host behaviors
/// (empty string vs. absent value) are an explicit choice here, never merged.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuppressMode {
  /// Suppressed reads yield an empty string (canonical).
  #[default]
  Empty,
  /// Suppressed reads yield an absent value.
  Absent,
}

impl SuppressMode {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Empty => "empty",
      Self::Absent => "absent",
    }
  }

  fn layout(self) -> Option<String> {
    match self {
      Self::Empty => Some(String::new()),
      Self::Absent => None,
    }
  }

  fn value(self) -> Option<Value> {
    match self {
      Self::Empty => Some(Value::String(String::new())),
      Self::Absent => None,
    }
  }
}

/// Decorator over [`PageAccess`] that makes layout-related reads appear
/// empty. The layout getter is suppressed unconditionally; the generic field
/// getter is suppressed for the `page_layout` and `custom_page_layout` keys
/// and is an identity for every other key, including the no-key case.
pub struct LayoutGetterSuppressor<S> {
  inner: S,
  mode: SuppressMode,
  layout_getter: bool,
  data_getter: bool,
}

impl<S> LayoutGetterSuppressor<S> {
  /// Suppress both getters with the default (empty string) representation.
  pub fn new(inner: S) -> Self {
    Self { inner, mode: SuppressMode::default(), layout_getter: true, data_getter: true }
  }

  pub fn mode(mut self, mode: SuppressMode) -> Self {
    self.mode = mode;
    self
  }

  /// Toggle interception of the layout getter.
  pub fn layout_getter(mut self, on: bool) -> Self {
    self.layout_getter = on;
    self
  }

  /// Toggle interception of the generic field getter.
  pub fn data_getter(mut self, on: bool) -> Self {
    self.data_getter = on;
    self
  }
}

impl<S: PageAccess> PageAccess for LayoutGetterSuppressor<S> {
  fn page_layout(&self) -> Option<String> {
    if self.layout_getter {
      return self.mode.layout();
    }
    self.inner.page_layout()
  }

  fn data(&self, key: Option<&str>, index: Option<usize>) -> Option<Value> {
    if self.data_getter
      && let Some(k) = key
      && (k == PAGE_LAYOUT || k == CUSTOM_PAGE_LAYOUT)
    {
      return self.mode.value();
    }
    self.inner.data(key, index)
  }
}
