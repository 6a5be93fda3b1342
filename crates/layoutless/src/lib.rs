/* crates/layoutless/src/lib.rs */

//! Plugin set that forces every page to use the theme's default layout.
//!
//! Two interceptors, composed as decorators over the host's hook-point
//! traits at construction time:
//!
//! - [`LayoutClearer`] wraps the "prepare result page" operation and clears
//!   any entity-specific layout on the successful result.
//! - [`LayoutGetterSuppressor`] wraps a page entity's layout and generic
//!   field getters so layout-related reads appear empty.
//!
//! Which interceptors attach, and what a suppressed read yields, is
//! declarative startup configuration (`layoutless.toml`) turned into a
//! [`registry::BindingTable`]. The interceptors never create, store, or
//! delete anything; they only filter transient in-memory values on the read
//! path.

pub mod clearer;
pub mod config;
pub mod errors;
pub mod page;
pub mod prepare;
pub mod registry;
pub mod result;
pub mod suppressor;

// Re-exports for ergonomic use
pub use clearer::LayoutClearer;
pub use config::{LayoutlessConfig, find_config, load_config};
pub use errors::RegistryError;
pub use page::{CUSTOM_PAGE_LAYOUT, PAGE_LAYOUT, Page, PageAccess};
pub use prepare::{ActionContext, PreparePage};
pub use registry::{Binding, BindingTable, Bindings, Hook};
pub use result::{PageConfig, ResultPage};
pub use suppressor::{LayoutGetterSuppressor, SuppressMode};
