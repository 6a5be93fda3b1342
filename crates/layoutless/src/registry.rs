/* crates/layoutless/src/registry.rs */

use std::collections::HashSet;

use serde::Deserialize;

use crate::clearer::LayoutClearer;
use crate::errors::RegistryError;
use crate::page::PageAccess;
use crate::prepare::PreparePage;
use crate::suppressor::{LayoutGetterSuppressor, SuppressMode};

/// A host method an interceptor can attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hook {
  /// The "prepare result page" operation.
  PrepareResultPage,
  /// The entity's zero-argument layout getter.
  PageLayoutGetter,
  /// The entity's generic field getter.
  PageDataGetter,
}

impl Hook {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::PrepareResultPage => "prepare_result_page",
      Self::PageLayoutGetter => "page_layout_getter",
      Self::PageDataGetter => "page_data_getter",
    }
  }
}

/// One declarative registration: attach the interceptor for `hook` under a
/// unique `name`. Mirrors the host's per-method plugin registration.
#[derive(Debug, Clone)]
pub struct Binding {
  pub name: String,
  pub hook: Hook,
  pub disabled: bool,
  pub sort_order: i32,
}

impl Binding {
  pub fn new(name: impl Into<String>, hook: Hook) -> Self {
    Self { name: name.into(), hook, disabled: false, sort_order: 0 }
  }

  pub fn disabled(mut self, disabled: bool) -> Self {
    self.disabled = disabled;
    self
  }

  pub fn sort_order(mut self, sort_order: i32) -> Self {
    self.sort_order = sort_order;
    self
  }
}

/// Builder for the binding table supplied at startup.
#[derive(Default)]
pub struct Bindings {
  bindings: Vec<Binding>,
  mode: SuppressMode,
}

impl Bindings {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn binding(mut self, binding: Binding) -> Self {
    self.bindings.push(binding);
    self
  }

  pub fn suppress_mode(mut self, mode: SuppressMode) -> Self {
    self.mode = mode;
    self
  }

  /// Validate and finish the table. Binding names must be unique and
  /// non-empty; bindings are ordered by `sort_order` (stable for ties).
  pub fn build(self) -> Result<BindingTable, RegistryError> {
    let mut seen = HashSet::new();
    for binding in &self.bindings {
      if binding.name.is_empty() {
        return Err(RegistryError::UnnamedBinding);
      }
      if !seen.insert(binding.name.as_str()) {
        return Err(RegistryError::DuplicateBinding(binding.name.clone()));
      }
    }
    let mut bindings = self.bindings;
    bindings.sort_by_key(|b| b.sort_order);
    Ok(BindingTable { bindings, mode: self.mode })
  }
}

/// The validated binding table. Composes the interceptors around host
/// implementations at construction time; disabled bindings are skipped.
#[derive(Debug)]
pub struct BindingTable {
  bindings: Vec<Binding>,
  mode: SuppressMode,
}

impl BindingTable {
  pub fn bindings(&self) -> &[Binding] {
    &self.bindings
  }

  pub fn mode(&self) -> SuppressMode {
    self.mode
  }

  fn enabled(&self, hook: Hook) -> bool {
    self.bindings.iter().any(|b| b.hook == hook && !b.disabled)
  }

  /// Wrap a page-preparation implementation per the table.
  pub fn wrap_prepare(&self, inner: Box<dyn PreparePage>) -> Box<dyn PreparePage> {
    if self.enabled(Hook::PrepareResultPage) {
      return Box::new(LayoutClearer::new(inner));
    }
    inner
  }

  /// Wrap a page-entity access implementation per the table. One suppressor
  /// serves both getter hooks; each is intercepted only when bound.
  pub fn wrap_page(&self, inner: Box<dyn PageAccess>) -> Box<dyn PageAccess> {
    let layout_getter = self.enabled(Hook::PageLayoutGetter);
    let data_getter = self.enabled(Hook::PageDataGetter);
    if !layout_getter && !data_getter {
      return inner;
    }
    Box::new(
      LayoutGetterSuppressor::new(inner)
        .mode(self.mode)
        .layout_getter(layout_getter)
        .data_getter(data_getter),
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::page::{CUSTOM_PAGE_LAYOUT, PAGE_LAYOUT, Page};
  use crate::prepare::ActionContext;
  use crate::result::ResultPage;
  use serde_json::json;

  fn full_table() -> BindingTable {
    Bindings::new()
      .binding(Binding::new("disable_entity_specific_layout", Hook::PrepareResultPage))
      .binding(Binding::new("disable_layout_getter", Hook::PageLayoutGetter))
      .binding(Binding::new("disable_layout_data", Hook::PageDataGetter))
      .build()
      .unwrap()
  }

  struct StaticHost;

  impl PreparePage for StaticHost {
    fn prepare_result_page(
      &self,
      _action: &ActionContext,
      page_id: Option<u64>,
    ) -> Option<ResultPage> {
      page_id?;
      let result = ResultPage::new();
      result.config().set_page_layout(Some("2columns-left".to_string()));
      Some(result)
    }
  }

  #[test]
  fn duplicate_names_are_rejected() {
    let err = Bindings::new()
      .binding(Binding::new("disable", Hook::PageLayoutGetter))
      .binding(Binding::new("disable", Hook::PageDataGetter))
      .build()
      .unwrap_err();
    assert_eq!(err, RegistryError::DuplicateBinding("disable".to_string()));
  }

  #[test]
  fn empty_names_are_rejected() {
    let err = Bindings::new().binding(Binding::new("", Hook::PageDataGetter)).build().unwrap_err();
    assert_eq!(err, RegistryError::UnnamedBinding);
  }

  #[test]
  fn bindings_are_ordered_by_sort_order() {
    let table = Bindings::new()
      .binding(Binding::new("second", Hook::PageDataGetter).sort_order(20))
      .binding(Binding::new("first", Hook::PageLayoutGetter).sort_order(10))
      .build()
      .unwrap();
    let names: Vec<&str> = table.bindings().iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["first", "second"]);
  }

  #[test]
  fn wrap_prepare_clears_layout() {
    let prepare = full_table().wrap_prepare(Box::new(StaticHost));
    let result = prepare.prepare_result_page(&ActionContext::new("/home"), Some(2)).unwrap();
    assert_eq!(result.config().page_layout(), None);
  }

  #[test]
  fn wrap_prepare_keeps_failure_sentinel() {
    let prepare = full_table().wrap_prepare(Box::new(StaticHost));
    assert!(prepare.prepare_result_page(&ActionContext::new("/missing"), None).is_none());
  }

  #[test]
  fn wrap_page_suppresses_layout_reads() {
    let page = Page::new().field("title", "Home").field(CUSTOM_PAGE_LAYOUT, "1column");
    let entity = full_table().wrap_page(Box::new(page));
    assert_eq!(entity.page_layout(), Some(String::new()));
    assert_eq!(entity.data(Some(CUSTOM_PAGE_LAYOUT), None), Some(json!("")));
    assert_eq!(entity.data(Some("title"), None), Some(json!("Home")));
  }

  #[test]
  fn disabled_bindings_are_skipped() {
    let table = Bindings::new()
      .binding(Binding::new("clear", Hook::PrepareResultPage).disabled(true))
      .binding(Binding::new("getter", Hook::PageLayoutGetter).disabled(true))
      .binding(Binding::new("data", Hook::PageDataGetter))
      .build()
      .unwrap();

    let prepare = table.wrap_prepare(Box::new(StaticHost));
    let result = prepare.prepare_result_page(&ActionContext::new("/home"), Some(2)).unwrap();
    assert_eq!(result.config().page_layout(), Some("2columns-left".to_string()));

    let page = Page::new().field(PAGE_LAYOUT, "3columns");
    let entity = table.wrap_page(Box::new(page));
    assert_eq!(entity.page_layout(), Some("3columns".to_string()));
    assert_eq!(entity.data(Some(PAGE_LAYOUT), None), Some(json!("")));
  }

  #[test]
  fn empty_table_wraps_nothing() {
    let table = Bindings::new().build().unwrap();
    let page = Page::new().field(PAGE_LAYOUT, "3columns");
    let entity = table.wrap_page(Box::new(page));
    assert_eq!(entity.page_layout(), Some("3columns".to_string()));
  }

  #[test]
  fn hook_as_str() {
    assert_eq!(Hook::PrepareResultPage.as_str(), "prepare_result_page");
    assert_eq!(Hook::PageLayoutGetter.as_str(), "page_layout_getter");
    assert_eq!(Hook::PageDataGetter.as_str(), "page_data_getter");
  }

  #[test]
  fn table_carries_suppress_mode() {
    let table = Bindings::new()
      .suppress_mode(SuppressMode::Absent)
      .binding(Binding::new("getter", Hook::PageLayoutGetter))
      .build()
      .unwrap();
    let entity = table.wrap_page(Box::new(Page::new().field(PAGE_LAYOUT, "1column")));
    assert_eq!(entity.page_layout(), None);
  }
}
