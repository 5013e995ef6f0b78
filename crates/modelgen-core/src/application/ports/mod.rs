//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `modelgen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `ModelResolver`: Model lookup by qualified name
//!   - `TemplateLoader`: Template bodies by logical path
//!   - `Filesystem`: File operations
//!   - `Console`: Echoed output
//!   - `SourceRootResolver`: Base directory for written files
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    Console, Filesystem, ModelResolver, ModelSource, SourceRootResolver, TemplateLoader,
};

#[cfg(test)]
pub use output::{MockConsole, MockModelResolver};
