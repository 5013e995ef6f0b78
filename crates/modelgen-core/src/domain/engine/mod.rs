//! Line-level text transformation engine.
//!
//! Every pass is a pure function from one [`LineBuffer`] to the next. A
//! [`Pipeline`] is an ordered list of named passes; artifact generators are
//! written as pipelines:
//!
//! ```text
//! filter ─▶ strip ─▶ synthesize ─▶ prune ─▶ format
//! ```
//!
//! Passes that delete lines record indices in a
//! [`DeletionMarks`](crate::domain::entities::DeletionMarks) set and compact
//! once at the end of their scan.

pub mod extract;
pub mod format;
pub mod placeholder;
pub mod prune;
pub mod strip;
pub mod syntax;
pub mod synthesize;

pub use placeholder::{Pattern, PlaceholderMap};
pub use synthesize::Anchor;

use crate::domain::entities::LineBuffer;
use crate::domain::error::DomainError;

type PassFn<'a> = Box<dyn Fn(LineBuffer) -> Result<LineBuffer, DomainError> + 'a>;

/// A named transformation step.
pub struct Pass<'a> {
    name: &'static str,
    run: PassFn<'a>,
}

impl<'a> Pass<'a> {
    pub fn new(
        name: &'static str,
        run: impl Fn(LineBuffer) -> Result<LineBuffer, DomainError> + 'a,
    ) -> Self {
        Self {
            name,
            run: Box::new(run),
        }
    }

    /// A pass that cannot fail.
    pub fn infallible(name: &'static str, run: impl Fn(LineBuffer) -> LineBuffer + 'a) -> Self {
        Self::new(name, move |body| Ok(run(body)))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl std::fmt::Debug for Pass<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pass").field("name", &self.name).finish()
    }
}

/// Ordered list of passes run in sequence.
#[derive(Debug, Default)]
pub struct Pipeline<'a> {
    passes: Vec<Pass<'a>>,
}

impl<'a> Pipeline<'a> {
    pub fn new() -> Self {
        Self { passes: Vec::new() }
    }

    pub fn then(mut self, pass: Pass<'a>) -> Self {
        self.passes.push(pass);
        self
    }

    /// Names of the passes, in run order.
    pub fn pass_names(&self) -> Vec<&'static str> {
        self.passes.iter().map(Pass::name).collect()
    }

    pub fn run(&self, body: LineBuffer) -> Result<LineBuffer, DomainError> {
        self.passes.iter().try_fold(body, |acc, pass| (pass.run)(acc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_run_in_order() {
        let pipeline = Pipeline::new()
            .then(Pass::infallible("append-a", |mut b| {
                b.push("a");
                b
            }))
            .then(Pass::infallible("append-b", |mut b| {
                b.push("b");
                b
            }));
        assert_eq!(pipeline.pass_names(), ["append-a", "append-b"]);
        assert_eq!(pipeline.run(LineBuffer::default()).unwrap().lines(), ["a", "b"]);
    }

    #[test]
    fn first_failure_stops_the_pipeline() {
        let pipeline = Pipeline::new()
            .then(Pass::new("fail", |_| {
                Err(DomainError::AnchorNotFound { anchor: "x" })
            }))
            .then(Pass::infallible("unreachable", |_| unreachable!()));
        assert!(pipeline.run(LineBuffer::default()).is_err());
    }
}
