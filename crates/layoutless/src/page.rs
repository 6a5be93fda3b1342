/* crates/layoutless/src/page.rs */

use serde_json::Value;

/// Field key holding a page's layout-identifier string.
pub const PAGE_LAYOUT: &str = "page_layout";

/// Legacy alias of [`PAGE_LAYOUT`], still present on older page records.
pub const CUSTOM_PAGE_LAYOUT: &str = "custom_page_layout";

/// Read access to a page entity. This is the seam the getter suppressor
/// decorates: hosts hand out a `PageAccess`, not the entity itself.
pub trait PageAccess {
  /// The entity's layout getter.
  fn page_layout(&self) -> Option<String>;

  /// Generic field getter. `key = None` means "all fields" and returns the
  /// whole record as an object. With `index`, an array-valued field is
  /// indexed into (absent when out of range or not an array).
  fn data(&self, key: Option<&str>, index: Option<usize>) -> Option<Value>;
}

impl<S: PageAccess + ?Sized> PageAccess for Box<S> {
  fn page_layout(&self) -> Option<String> {
    (**self).page_layout()
  }

  fn data(&self, key: Option<&str>, index: Option<usize>) -> Option<Value> {
    (**self).data(key, index)
  }
}

/// A CMS page record. Fields are an open bag keyed by name; the layout
/// fields are ordinary entries under [`PAGE_LAYOUT`] / [`CUSTOM_PAGE_LAYOUT`].
#[derive(Debug, Clone, Default)]
pub struct Page {
  fields: serde_json::Map<String, Value>,
}

impl Page {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
    self.fields.insert(key.into(), value.into());
    self
  }

  pub fn set_field(&mut self, key: impl Into<String>, value: impl Into<Value>) {
    self.fields.insert(key.into(), value.into());
  }
}

impl PageAccess for Page {
  fn page_layout(&self) -> Option<String> {
    self.fields.get(PAGE_LAYOUT).and_then(Value::as_str).map(str::to_owned)
  }

  fn data(&self, key: Option<&str>, index: Option<usize>) -> Option<Value> {
    let Some(key) = key else {
      return Some(Value::Object(self.fields.clone()));
    };
    let value = self.fields.get(key)?;
    match index {
      Some(i) => value.as_array().and_then(|items| items.get(i)).cloned(),
      None => Some(value.clone()),
    }
  }
}
