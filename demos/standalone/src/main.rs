/* demos/standalone/src/main.rs */

#![allow(clippy::print_stdout)]

use std::collections::HashMap;
use std::path::Path;

use layoutless::{
  ActionContext, CUSTOM_PAGE_LAYOUT, PAGE_LAYOUT, Page, PageAccess, PreparePage, ResultPage,
  find_config, load_config,
};

/// In-memory stand-in for the host's page-preparation helper.
struct StaticPages {
  layouts: HashMap<u64, &'static str>,
}

impl StaticPages {
  fn new() -> Self {
    let mut layouts = HashMap::new();
    layouts.insert(2, "2columns-left");
    layouts.insert(3, "3columns");
    Self { layouts }
  }
}

impl PreparePage for StaticPages {
  fn prepare_result_page(
    &self,
    action: &ActionContext,
    page_id: Option<u64>,
  ) -> Option<ResultPage> {
    let id = page_id.or_else(|| action.params.get("page_id").and_then(|v| v.parse().ok()))?;
    let layout = self.layouts.get(&id)?;
    let result = ResultPage::new();
    result.config().set_page_layout(Some((*layout).to_string()));
    Some(result)
  }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
  let config = load_config(&find_config(Path::new(env!("CARGO_MANIFEST_DIR")))?)?;
  let table = config.bindings().build()?;
  println!("suppression mode: {}", table.mode().as_str());
  for binding in table.bindings() {
    let state = if binding.disabled { " (disabled)" } else { "" };
    println!("binding {} -> {}{state}", binding.name, binding.hook.as_str());
  }

  let prepare = table.wrap_prepare(Box::new(StaticPages::new()));
  let action = ActionContext::new("/home");
  for page_id in [2, 3, 404] {
    match prepare.prepare_result_page(&action, Some(page_id)) {
      Some(result) => {
        println!("page {page_id}: layout after preparation = {:?}", result.config().page_layout());
      }
      None => println!("page {page_id}: not found"),
    }
  }

  // Page id resolved from the request params instead of the argument.
  let routed = ActionContext::new("/home").param("page_id", "3");
  if let Some(result) = prepare.prepare_result_page(&routed, None) {
    println!("routed page: layout after preparation = {:?}", result.config().page_layout());
  }

  let page = Page::new()
    .field("title", "Home")
    .field(PAGE_LAYOUT, "2columns-left")
    .field(CUSTOM_PAGE_LAYOUT, "1column");
  let entity = table.wrap_page(Box::new(page));
  println!("page_layout() = {:?}", entity.page_layout());
  println!("data(page_layout) = {:?}", entity.data(Some(PAGE_LAYOUT), None));
  println!("data(custom_page_layout) = {:?}", entity.data(Some(CUSTOM_PAGE_LAYOUT), None));
  println!("data(title) = {:?}", entity.data(Some("title"), None));

  Ok(())
}
