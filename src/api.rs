use crate::engine::{self, CompiledSpec};
use crate::{Selection, SpecDefinition};

/// A compiled, reusable resolver for one [`SpecDefinition`].
///
/// Built once via [`create_spec`] (or [`Resolver::compile`]), then invoked any
/// number of times. A resolver holds only read-only tables, so a single value
/// can be shared freely between threads; each call resolves independently and
/// leaves no state behind.
#[derive(Debug, Clone)]
pub struct Resolver {
    spec: CompiledSpec,
}

/// Compile a definition into a [`Resolver`].
///
/// Compilation never fails: every field of the definition is optional, and an
/// empty definition yields a resolver whose output is always the empty
/// string.
///
/// # Example
/// ```
/// use specced::{SpecDefinition, create_spec, selection};
///
/// let badge = create_spec(
///     SpecDefinition::new()
///         .base("badge")
///         .variant("tone", [("neutral", "badge-gray"), ("danger", "badge-red")])
///         .default_option("tone", "neutral"),
/// );
///
/// assert_eq!(badge.resolve_default(), "badge badge-gray");
/// assert_eq!(badge.resolve(&selection! { tone: "danger" }), "badge badge-red");
/// ```
pub fn create_spec(definition: SpecDefinition) -> Resolver {
    Resolver::compile(definition)
}

impl Resolver {
    /// Consume `definition`, normalizing every token value it contains.
    pub fn compile(definition: SpecDefinition) -> Self {
        Resolver { spec: CompiledSpec::new(definition) }
    }

    /// Resolve `selection` into the final space-joined token string.
    ///
    /// The selection is overlaid onto the definition's defaults; tokens come
    /// from the base, from each effectively selected variant option, and from
    /// each matching compound rule, deduplicated in first-appearance order.
    /// Unrecognized variant names or option values contribute nothing (a
    /// warning is printed outside production mode) and never fail the call.
    pub fn resolve(&self, selection: &Selection) -> String {
        engine::resolve(&self.spec, selection)
    }

    /// Resolve with no per-call selection, i.e. the defaults alone.
    pub fn resolve_default(&self) -> String {
        self.resolve(&Selection::new())
    }
}
