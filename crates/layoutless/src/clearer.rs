/* crates/layoutless/src/clearer.rs */

use crate::prepare::{ActionContext, PreparePage};
use crate::result::ResultPage;

/// Decorator over [`PreparePage`] that clears any entity-specific page
/// layout set during preparation, so the theme's default layout applies.
///
/// The failure sentinel (`None`) is returned as is; the host's own failure
/// handling stays authoritative.
pub struct LayoutClearer<P> {
  inner: P,
}

impl<P> LayoutClearer<P> {
  pub fn new(inner: P) -> Self {
    Self { inner }
  }
}

impl<P: PreparePage> PreparePage for LayoutClearer<P> {
  fn prepare_result_page(
    &self,
    action: &ActionContext,
    page_id: Option<u64>,
  ) -> Option<ResultPage> {
    let result = self.inner.prepare_result_page(action, page_id)?;
    // Layout configuration is managed at theme level, not per entity.
    result.config().set_page_layout(None);
    Some(result)
  }
}
