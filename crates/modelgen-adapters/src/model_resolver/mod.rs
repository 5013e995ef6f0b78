//! Model source resolvers.

mod memory;
mod source_tree;

pub use memory::MemoryModelResolver;
pub use source_tree::SourceTreeModelResolver;
