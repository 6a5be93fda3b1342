/* crates/layoutless/src/prepare.rs */

use std::collections::HashMap;

use crate::result::ResultPage;

/// Context of the inbound request that triggered page preparation.
#[derive(Debug, Clone, Default)]
pub struct ActionContext {
  pub route: String,
  pub params: HashMap<String, String>,
}

impl ActionContext {
  pub fn new(route: impl Into<String>) -> Self {
    Self { route: route.into(), params: HashMap::new() }
  }

  pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
    self.params.insert(key.into(), value.into());
    self
  }
}

/// The "prepare result page" operation. This is the seam the layout clearer
/// decorates; the host's own implementation sits innermost.
pub trait PreparePage {
  /// Prepare the result page for a request. `None` means the page could not
  /// be prepared (e.g. not found) and is the host's failure sentinel.
  fn prepare_result_page(
    &self,
    action: &ActionContext,
    page_id: Option<u64>,
  ) -> Option<ResultPage>;
}

impl<P: PreparePage + ?Sized> PreparePage for Box<P> {
  fn prepare_result_page(
    &self,
    action: &ActionContext,
    page_id: Option<u64>,
  ) -> Option<ResultPage> {
    (**self).prepare_result_page(action, page_id)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn params_accumulate() {
    let action = ActionContext::new("/home").param("page_id", "3").param("store", "default");
    assert_eq!(action.route, "/home");
    assert_eq!(action.params.get("page_id").map(String::as_str), Some("3"));
    assert_eq!(action.params.get("store").map(String::as_str), Some("default"));
  }

  #[test]
  fn context_starts_without_params() {
    assert!(ActionContext::new("/home").params.is_empty());
  }
}
