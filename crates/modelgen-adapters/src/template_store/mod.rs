//! Template storage adapters.

mod memory;

pub use memory::InMemoryTemplateStore;
